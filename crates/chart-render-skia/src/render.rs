// File: crates/chart-render-skia/src/render.rs
// Summary: Chart handle holding the last pushed frame, and the Skia CPU raster pipeline that draws it.

use std::time::Instant;

use anyhow::Result;
use chart_core::geometry::{ease_cubic_in_out, lerp};
use chart_core::{
    BackgroundLayout, BackgroundTransition, Guideline, Legend, LineChartModel, Scene, Series, SeriesSet, Size,
};
use skia_safe as skia;

use crate::text::{Anchor, Face, Ink, TextShaper};
use crate::theme::{rgb, rgba, Theme};

/// Height of the legend strip drawn under the chart.
pub const LEGEND_HEIGHT: i32 = 28;

const LABEL_SIZE: f32 = 12.0;
const TICK_SIZE: f32 = 10.0;

pub struct RenderOptions {
    /// Axis, tick and legend text. Off for pixel-exact snapshots.
    pub draw_labels: bool,
    pub draw_legend: bool,
    pub theme: Theme,
    /// Data-space x under the pointer; draws the interactive guideline.
    pub hover_x: Option<f64>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { draw_labels: true, draw_legend: true, theme: Theme::dark(), hover_x: None }
    }
}

/// Fill opacity fade started by a chart update.
#[derive(Clone, Copy, Debug)]
struct Fade {
    from: f32,
    to: f32,
}

/// Chart handle for the Skia backend. Lines only change when the component
/// pushes an update; background and fill transitions are evaluated per frame.
pub struct SkiaChart {
    model: LineChartModel,
    /// Series as of the last chart update.
    series: SeriesSet,
    /// One per series, same order.
    fades: Vec<Fade>,
    legend: Legend,
    background: BackgroundTransition,
    background_since: Instant,
    updated_at: Instant,
    shaper: TextShaper,
}

impl SkiaChart {
    pub(crate) fn new(scene: &Scene<'_>) -> Self {
        let mut chart = Self {
            model: scene.model.clone(),
            series: scene.series.clone(),
            fades: Vec::new(),
            legend: scene.legend.clone(),
            background: scene.background.clone(),
            background_since: scene.at,
            updated_at: scene.at,
            shaper: TextShaper::new(),
        };
        chart.apply(scene);
        chart
    }

    pub(crate) fn apply(&mut self, scene: &Scene<'_>) {
        let now = scene.at;
        // Fades start from whatever is on screen right now.
        let fades = scene
            .series
            .iter()
            .enumerate()
            .map(|(i, s)| Fade {
                from: self.fill_at(i, now).unwrap_or(s.style.fill_opacity),
                to: s.style.fill_opacity,
            })
            .collect();
        self.fades = fades;
        self.series = scene.series.clone();
        self.model = scene.model.clone();
        self.updated_at = now;
    }

    pub(crate) fn set_background(&mut self, scene: &Scene<'_>) {
        self.background = scene.background.clone();
        self.background_since = scene.at;
    }

    /// Displayed fill opacity of the `index`-th series at `at`.
    fn fill_at(&self, index: usize, at: Instant) -> Option<f32> {
        let fade = self.fades.get(index)?;
        let duration = self.model.duration;
        let elapsed = at.saturating_duration_since(self.updated_at);
        if duration.is_zero() || elapsed >= duration {
            return Some(fade.to);
        }
        let t = ease_cubic_in_out(elapsed.as_secs_f32() / duration.as_secs_f32());
        Some(lerp(fade.from, fade.to, t))
    }

    /// Earliest instant at which every running transition has finished.
    pub fn settled_at(&self) -> Instant {
        let bg = self.background_since + self.background.duration();
        let lines = self.updated_at + self.model.duration;
        bg.max(lines)
    }

    /// Number of points per series currently displayed.
    pub fn displayed_points(&self) -> usize {
        self.series.iter().next().map_or(0, Series::len)
    }

    /// Guideline over the displayed data, which may trail the live series
    /// until the next chart update.
    pub fn guideline_at(&self, x: f64) -> Option<Guideline> {
        self.model.guideline_at(x, &self.series)
    }

    pub fn background_at(&self, at: Instant) -> BackgroundLayout {
        self.background.at(at.saturating_duration_since(self.background_since))
    }

    /// Container size: the svg area plus the margin trimmed from its height.
    pub fn container_size(&self) -> Size {
        let target = self.background.target();
        Size::new(target.svg_width, target.svg_height + target.margin)
    }

    /// Output surface dimensions for `opts`.
    pub fn surface_size(&self, opts: &RenderOptions) -> (i32, i32) {
        let size = self.container_size();
        let legend = if opts.draw_legend { LEGEND_HEIGHT } else { 0 };
        ((size.width.round() as i32).max(1), (size.height.round() as i32).max(1) + legend)
    }

    /// Render into a fresh raster surface at `at`.
    fn render_surface(&self, opts: &RenderOptions, at: Instant) -> Result<skia::Surface> {
        let (w, h) = self.surface_size(opts);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface {w}x{h}"))?;
        self.draw(surface.canvas(), opts, at);
        Ok(surface)
    }

    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions, at: Instant) {
        let size = self.container_size();
        canvas.clear(opts.theme.background);

        let bg = self.background_at(at);
        draw_bars(canvas, &bg, &opts.theme);
        draw_axes(canvas, &self.model, size, &opts.theme, opts.draw_labels.then_some(&self.shaper));
        if opts.draw_labels {
            draw_axis_labels(canvas, &self.model, &bg, &opts.theme, &self.shaper);
        }
        for (i, series) in self.series.iter().enumerate() {
            let fill = self.fill_at(i, at).unwrap_or(series.style.fill_opacity);
            draw_series(canvas, &self.model, size, series, fill);
        }
        if let Some(guideline) = opts.hover_x.and_then(|x| self.guideline_at(x)) {
            self.draw_guideline(canvas, size, &guideline, &opts.theme);
        }
        if opts.draw_legend {
            draw_legend(canvas, &self.legend, size, &opts.theme, opts.draw_labels.then_some(&self.shaper));
        }
    }

    fn draw_guideline(&self, canvas: &skia::Canvas, size: Size, guideline: &Guideline, theme: &Theme) {
        let sx = self.model.x_scale(size);
        let sy = self.model.y_scale(size);
        let plot = self.model.plot_rect(size);

        let mut line = skia::Paint::default();
        line.set_anti_alias(true);
        line.set_stroke_width(1.0);
        line.set_color(theme.guideline);
        let px = sx.to_px(guideline.x);
        canvas.draw_line((px, plot.top), (px, plot.bottom()), &line);

        let mut dot = skia::Paint::default();
        dot.set_anti_alias(true);
        for &(id, (_, y)) in &guideline.points {
            dot.set_color(rgb(self.series.get(id).style.color));
            canvas.draw_circle((px, sy.to_px(y)), self.model.point_size * 0.5, &dot);
        }
    }

    pub fn render_to_rgba8(&self, opts: &RenderOptions, at: Instant) -> Result<(Vec<u8>, i32, i32, usize)> {
        let mut surface = self.render_surface(opts, at)?;
        let (w, h) = (surface.width(), surface.height());
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut px = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((px, w, h, stride))
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions, at: Instant) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts, at)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_png(&self, opts: &RenderOptions, at: Instant, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts, at)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_bars(canvas: &skia::Canvas, layout: &BackgroundLayout, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.bars);
    paint.set_style(skia::paint::Style::Fill);
    for bar in &layout.bars {
        canvas.draw_rect(skia::Rect::from_xywh(bar.left, bar.top, bar.width, bar.height), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, model: &LineChartModel, size: Size, theme: &Theme, shaper: Option<&TextShaper>) {
    let plot = model.plot_rect(size);
    let sx = model.x_scale(size);
    let sy = model.y_scale(size);

    let mut axis_paint = skia::Paint::default();
    axis_paint.set_color(theme.axis_line);
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.0);

    // Zero line doubles as the x axis; the y axis sits on the left plot edge.
    let y0 = sy.to_px(0.0).clamp(plot.top, plot.bottom());
    canvas.draw_line((plot.left, y0), (plot.right(), y0), &axis_paint);
    canvas.draw_line((plot.left, plot.top), (plot.left, plot.bottom()), &axis_paint);

    let tick_ink = Ink::new(TICK_SIZE, theme.tick, Face::Numeric);
    let mut tick_paint = skia::Paint::default();
    tick_paint.set_color(theme.tick);
    tick_paint.set_stroke_width(1.0);

    for v in model.y_axis.tick_values() {
        let py = sy.to_px(v);
        canvas.draw_line((plot.left - 4.0, py), (plot.left, py), &tick_paint);
        if let Some(shaper) = shaper {
            shaper.draw(canvas, &format_tick(v), (plot.left - 5.0, py + TICK_SIZE * 0.4), Anchor::End, tick_ink);
        }
    }
    for v in model.x_axis.tick_values() {
        let px = sx.to_px(v);
        canvas.draw_line((px, y0), (px, y0 + 4.0), &tick_paint);
        if let Some(shaper) = shaper {
            shaper.draw(canvas, &format_tick(v), (px + 2.0, y0 + 4.0 + TICK_SIZE), Anchor::Start, tick_ink);
        }
    }
}

fn draw_axis_labels(canvas: &skia::Canvas, model: &LineChartModel, layout: &BackgroundLayout, theme: &Theme, shaper: &TextShaper) {
    let ink = Ink::new(LABEL_SIZE, theme.axis_label, Face::Label);
    shaper.draw(canvas, &model.x_axis.label, (layout.x_label.x, layout.x_label.y), Anchor::Start, ink);

    canvas.save();
    canvas.rotate(-90.0, None);
    shaper.draw(canvas, &model.y_axis.label, (layout.y_label.x, layout.y_label.y), Anchor::Start, ink);
    canvas.restore();
}

fn draw_series(canvas: &skia::Canvas, model: &LineChartModel, size: Size, series: &Series, fill_opacity: f32) {
    let data = series.points();
    if data.len() < 2 {
        return;
    }
    let plot = model.plot_rect(size);
    let sx = model.x_scale(size);
    let sy = model.y_scale(size);

    canvas.save();
    canvas.clip_rect(skia::Rect::from_xywh(plot.left, plot.top, plot.width, plot.height), skia::ClipOp::Intersect, true);

    let mut path = skia::Path::new();
    let (x0, y0) = data[0];
    path.move_to((sx.to_px(x0), sy.to_px(y0)));
    for &(x, y) in data.iter().skip(1) {
        path.line_to((sx.to_px(x), sy.to_px(y)));
    }

    if series.style.area && fill_opacity > 0.0 {
        let base = sy.to_px(0.0);
        let mut area = path.clone();
        if let Some(&(xn, _)) = data.last() {
            area.line_to((sx.to_px(xn), base));
        }
        area.line_to((sx.to_px(x0), base));
        area.close();

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(rgba(series.style.color, fill_opacity));
        canvas.draw_path(&area, &fill);
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(rgb(series.style.color));
    canvas.draw_path(&path, &stroke);

    canvas.restore();
}

fn draw_legend(canvas: &skia::Canvas, legend: &Legend, size: Size, theme: &Theme, shaper: Option<&TextShaper>) {
    let top = size.height + 8.0;
    let swatch = 12.0;
    let mut x = 20.0;
    let mut paint = skia::Paint::default();
    paint.set_style(skia::paint::Style::Fill);
    for entry in legend.entries() {
        paint.set_color(rgb(entry.color));
        canvas.draw_rect(skia::Rect::from_xywh(x, top, swatch, swatch), &paint);
        x += swatch + 6.0;
        match shaper {
            Some(shaper) => {
                let ink = Ink::new(LABEL_SIZE, theme.legend_text, Face::Label);
                shaper.draw(canvas, entry.name, (x, top + swatch - 1.0), Anchor::Start, ink);
                x += shaper.width(entry.name, ink) + 18.0;
            }
            None => x += entry.name.len() as f32 * 7.0 + 18.0,
        }
    }
}

fn format_tick(v: f64) -> String {
    if v.fract() == 0.0 { format!("{v:.0}") } else { format!("{v:.1}") }
}
