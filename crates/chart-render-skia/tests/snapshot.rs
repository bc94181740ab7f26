// File: crates/chart-render-skia/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Renders the finished animation to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns without comparing; the golden tests still
//   check that the same chart state always renders to the same pixels.

use std::time::Instant;

use chart_core::{ChartConfig, LineChart, Size};
use chart_render_skia::{RenderOptions, SkiaBackend};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(path: &std::path::Path, bytes: &[u8]) {
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn pixels(bytes: &[u8]) -> Vec<u8> {
    image::load_from_memory(bytes).expect("decode").to_rgba8().into_raw()
}

fn render_bytes(size: Size, ticks: Option<u32>) -> Vec<u8> {
    let mut chart = LineChart::new(ChartConfig::default(), SkiaBackend::new()).expect("config");
    let t0 = Instant::now();
    chart.initialize(Some(&size), t0).expect("init");
    match ticks {
        Some(n) => {
            let now = t0 + chart.config().tick_interval() * n;
            chart.advance(now).expect("advance");
        }
        None => {
            chart.run_to_completion(t0).expect("run");
        }
    }
    let handle = chart.handle().expect("mounted");

    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid text nondeterminism across platforms
    handle.render_to_png_bytes(&opts, handle.settled_at()).expect("render bytes")
}

#[test]
fn golden_finished_chart() {
    let bytes = render_bytes(Size::new(480.0, 240.0), None);
    assert_eq!(pixels(&bytes), pixels(&render_bytes(Size::new(480.0, 240.0), None)), "render is not deterministic");
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/finished.png");
    write_or_compare(&path, &bytes);
}

#[test]
fn golden_half_revealed_chart() {
    let bytes = render_bytes(Size::new(480.0, 240.0), Some(56));
    assert_eq!(pixels(&bytes), pixels(&render_bytes(Size::new(480.0, 240.0), Some(56))), "render is not deterministic");
    let finished = render_bytes(Size::new(480.0, 240.0), None);
    assert_ne!(pixels(&bytes), pixels(&finished), "half-revealed chart should differ from the finished one");
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/half.png");
    write_or_compare(&path, &bytes);
}
