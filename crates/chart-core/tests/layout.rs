// File: crates/chart-core/tests/layout.rs
// Purpose: Background bars and labels track the container size through resizes.

use std::time::{Duration, Instant};

use chart_core::{BackgroundLayout, ChartConfig, LineChart, RecordingBackend, Size};

#[test]
fn column_slots_span_width_minus_margins() {
    let cfg = ChartConfig::default();
    for (w, h) in [(800.0, 320.0), (333.0, 120.0), (1920.0, 600.0)] {
        let l = BackgroundLayout::compute(Size::new(w, h), &cfg);
        assert_eq!(l.bars.len(), 7);
        assert!((l.slots_span() - (w - 2.0 * cfg.margin)).abs() < 1e-3);
        assert!((l.bar_width * 2.0 - l.slot_width).abs() < 1e-6);
        assert_eq!(l.bars[0].left, cfg.margin);
        assert!(l.bars.iter().all(|b| b.top == cfg.margin && b.height == h - cfg.margin));
    }
}

#[test]
fn resize_transitions_bars_to_new_width() {
    let mut chart = LineChart::new(ChartConfig::default(), RecordingBackend::new()).expect("config");
    let t0 = Instant::now();
    chart.initialize(Some(&Size::new(440.0, 300.0)), t0).expect("init");
    let before = chart.background_at(t0).expect("mounted");

    let t1 = t0 + Duration::from_secs(1);
    chart.resize(&Size::new(1140.0, 300.0), t1).expect("resize");
    let start = chart.background_at(t1).expect("mounted");
    assert_eq!(start.bars, before.bars);

    let end = chart.background_at(t1 + Duration::from_millis(500)).expect("mounted");
    assert_eq!(end.svg_width, 1140.0);
    assert!((end.slots_span() - 1100.0).abs() < 1e-3);
    assert_eq!(end.bars[1].left, 20.0 + 1100.0 / 7.0);

    assert_eq!(chart.backend().background_widths, vec![1140.0]);
    // Window resize also refreshes the lines.
    assert_eq!(chart.backend().updates.len(), 1);
}

#[test]
fn resize_before_initialize_fails() {
    let mut chart = LineChart::new(ChartConfig::default(), RecordingBackend::new()).expect("config");
    assert!(chart.resize(&Size::new(100.0, 100.0), Instant::now()).is_err());
}
