// File: crates/window-demo/src/main.rs
// Summary: Windowed host for the animated line chart: winit drives the timer and resizes, softbuffer shows RGBA frames.

use std::num::NonZeroU32;
use std::time::Instant;

use anyhow::{Context, Result};
use chart_core::{ChartConfig, LineChart, Size};
use chart_render_skia::{RenderOptions, SkiaBackend, LEGEND_HEIGHT};
use tracing::{error, info};
use winit::event::{Event, StartCause, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

/// Window area given to the chart; the legend strip sits below it.
fn container_of(size: winit::dpi::PhysicalSize<u32>) -> Size {
    let h = (size.height as i32 - LEGEND_HEIGHT).max(1);
    Size::new(size.width.max(1) as f32, h as f32)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => ChartConfig::load(&path).with_context(|| format!("failed to load config '{path}'"))?,
        None => ChartConfig::default(),
    };

    // Window + softbuffer setup
    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("Revenue Line Chart")
        .with_inner_size(winit::dpi::LogicalSize::new(960.0, 400.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e:?}"))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e:?}"))?;

    let mut chart = LineChart::new(config, SkiaBackend::new())?;
    let mut size = window.inner_size();
    chart.initialize(Some(&container_of(size)), Instant::now())?;

    let mut cursor: Option<(f64, f64)> = None;

    event_loop.run(move |event, _, cf| {
        // The repeating timer: sleep until the next tick, or indefinitely once it is cancelled.
        *cf = match chart.next_deadline() {
            Some(deadline) => ControlFlow::WaitUntil(deadline),
            None => ControlFlow::Wait,
        };
        match event {
            Event::NewEvents(StartCause::ResumeTimeReached { .. }) => {
                match chart.advance(Instant::now()) {
                    Ok(0) => {}
                    Ok(_) => window.request_redraw(),
                    Err(e) => error!("animation tick failed: {e}"),
                }
            }
            Event::WindowEvent { event, window_id: _ } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    if let Err(e) = chart.resize(&container_of(size), Instant::now()) {
                        error!("resize failed: {e}");
                    }
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = Some((position.x, position.y));
                    window.request_redraw();
                }
                WindowEvent::CursorLeft { .. } => {
                    cursor = None;
                    window.request_redraw();
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                // Keep redrawing while the background or fill transitions run.
                if chart.handle().is_some_and(|h| Instant::now() < h.settled_at()) {
                    window.request_redraw();
                }
            }
            Event::RedrawRequested(_) => {
                let Some(handle) = chart.handle() else { return };
                let w = size.width.max(1);
                let h = size.height.max(1);
                let (Some(nw), Some(nh)) = (NonZeroU32::new(w), NonZeroU32::new(h)) else { return };
                if let Err(e) = surface.resize(nw, nh) {
                    error!("surface resize failed: {e:?}");
                    return;
                }

                let mut opts = RenderOptions::default();
                opts.hover_x = cursor.map(|(cx, _)| chart.model().x_scale(handle.container_size()).from_px(cx as f32));

                let (rgba, rw, rh, _) = match handle.render_to_rgba8(&opts, Instant::now()) {
                    Ok(frame) => frame,
                    Err(e) => {
                        error!("render failed: {e:#}");
                        return;
                    }
                };
                let mut frame = match surface.buffer_mut() {
                    Ok(frame) => frame,
                    Err(e) => {
                        error!("frame unavailable: {e:?}");
                        return;
                    }
                };
                // Rendered size can trail the window by one resize; copy the overlap.
                let cols = (rw as usize).min(w as usize);
                let rows = (rh as usize).min(h as usize);
                for y in 0..rows {
                    for x in 0..cols {
                        let i = (y * rw as usize + x) * 4;
                        let (r, g, b) = (rgba[i] as u32, rgba[i + 1] as u32, rgba[i + 2] as u32);
                        frame[y * w as usize + x] = (r << 16) | (g << 8) | b;
                    }
                }
                if let Err(e) = frame.present() {
                    error!("present error: {e:?}");
                }
            }
            Event::LoopDestroyed => {
                info!(points = chart.series().as_slice()[0].len(), "window closed");
            }
            _ => {}
        }
    });
}
