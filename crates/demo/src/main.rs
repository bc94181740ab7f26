// File: crates/demo/src/main.rs
// Summary: Headless demo: runs the line chart animation on a simulated clock and writes a PNG per redraw.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chart_core::{AnimationState, ChartConfig, LineChart, Size};
use chart_render_skia::{theme, RenderOptions, SkiaBackend, SkiaChart};
use tracing::info;

const CONTAINER: Size = Size::new(960.0, 360.0);
/// The container is widened once, halfway through, to exercise the resize path.
const RESIZED: Size = Size::new(1200.0, 360.0);

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    // Optional JSON config path; defaults reproduce the dashboard widget.
    let config = match std::env::args().nth(1) {
        Some(path) => ChartConfig::load(&path).with_context(|| format!("failed to load config '{path}'"))?,
        None => ChartConfig::default(),
    };
    let out_dir = PathBuf::from("target/out/frames");
    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let mut chart = LineChart::new(config, SkiaBackend::new())?;
    let t0 = Instant::now();
    if !chart.initialize(Some(&CONTAINER), t0)? {
        anyhow::bail!("chart container missing");
    }

    // Optional theme name ("dark" / "light").
    let mut opts = RenderOptions::default();
    if let Some(name) = std::env::args().nth(2) {
        opts.theme = theme::find(&name);
    }
    info!(theme = opts.theme.name, "rendering frames");
    let interval = chart.config().tick_interval();
    let mut now = t0;
    let mut frames = 0usize;
    let mut seen_updates = chart.backend().updates();
    let mut resized = false;

    while chart.state() == AnimationState::Running {
        now += interval;
        chart.advance(now)?;

        if !resized && chart.cursor() >= chart.config().max_x / 2.0 {
            chart.resize(&RESIZED, now)?;
            resized = true;
        }

        if chart.backend().updates() != seen_updates {
            seen_updates = chart.backend().updates();
            let handle = chart.handle().context("chart not mounted")?;
            write_frame(handle, &opts, now, &frame_path(&out_dir, frames))?;
            frames += 1;
        }
    }

    let handle = chart.handle().context("chart not mounted")?;
    let final_path = PathBuf::from("target/out/line_chart.png");
    handle.render_to_png(&opts, handle.settled_at(), &final_path)?;
    info!(frames, points = handle.displayed_points(), "animation complete");
    println!("Wrote {} frames to {}", frames, out_dir.display());
    println!("Wrote {}", final_path.display());
    Ok(())
}

fn frame_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("frame_{index:03}.png"))
}

fn write_frame(handle: &SkiaChart, opts: &RenderOptions, at: Instant, path: &Path) -> Result<()> {
    handle
        .render_to_png(opts, at, path)
        .with_context(|| format!("rendering {}", path.display()))
}
