// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG of the finished animation.

use std::time::Instant;

use chart_core::{ChartConfig, LineChart, Size};
use chart_render_skia::{RenderOptions, SkiaBackend};

#[test]
fn render_smoke_png() {
    let mut chart = LineChart::new(ChartConfig::default(), SkiaBackend::new()).expect("config");
    let t0 = Instant::now();
    chart.initialize(Some(&Size::new(640.0, 280.0)), t0).expect("init");
    chart.run_to_completion(t0).expect("run");

    let handle = chart.handle().expect("mounted");
    assert_eq!(handle.displayed_points(), 113);

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    handle.render_to_png(&opts, handle.settled_at(), &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = handle.render_to_png_bytes(&opts, handle.settled_at()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn lines_only_change_on_draw_steps() {
    let mut chart = LineChart::new(ChartConfig::default(), SkiaBackend::new()).expect("config");
    let t0 = Instant::now();
    chart.initialize(Some(&Size::new(640.0, 280.0)), t0).expect("init");

    // Three ticks sample 0, 0.125, 0.25 but no draw step has been crossed yet.
    let interval = chart.config().tick_interval();
    chart.advance(t0 + interval * 3).expect("advance");
    assert_eq!(chart.series().as_slice()[0].len(), 3);
    assert_eq!(chart.handle().expect("mounted").displayed_points(), 0);

    chart.advance(t0 + interval * 5).expect("advance");
    assert_eq!(chart.handle().expect("mounted").displayed_points(), 5);
    assert_eq!(chart.backend().updates(), 1);
}

#[test]
fn hover_guideline_uses_displayed_points() {
    let mut chart = LineChart::new(ChartConfig::default(), SkiaBackend::new()).expect("config");
    let t0 = Instant::now();
    chart.initialize(Some(&Size::new(640.0, 280.0)), t0).expect("init");

    // Sampled but not yet pushed to the handle.
    let interval = chart.config().tick_interval();
    chart.advance(t0 + interval * 3).expect("advance");
    assert!(chart.guideline_at(0.2).is_some());
    assert!(chart.handle().expect("mounted").guideline_at(0.2).is_none());

    chart.run_to_completion(t0 + interval * 3).expect("run");
    let handle = chart.handle().expect("mounted");
    for x in [0.0, 3.06, 7.2, 13.99, 20.0] {
        let shown = handle.guideline_at(x).expect("guideline");
        assert_eq!(Some(shown.clone()), chart.guideline_at(x));
        assert_eq!(shown.points.len(), 3);
    }

    // Drawing with a hover position still produces a frame.
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.hover_x = Some(7.2);
    let (px, _, _, _) = handle.render_to_rgba8(&opts, handle.settled_at()).expect("rgba render");
    assert!(!px.is_empty());
}
