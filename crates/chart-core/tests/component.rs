// File: crates/chart-core/tests/component.rs
// Purpose: Lifecycle of the chart component: container handling, legend, config loading.

use std::time::Instant;

use anyhow::Result;
use chart_core::{ChartConfig, ChartError, LineChart, RecordingBackend, Rgb, SeriesId, Size};

#[test]
fn legend_lists_series_once_and_never_changes() -> Result<()> {
    let mut chart = LineChart::new(ChartConfig::default(), RecordingBackend::new())?;
    let t0 = Instant::now();
    chart.initialize(Some(&Size::new(640.0, 320.0)), t0)?;

    let names: Vec<_> = chart.legend().entries().iter().map(|e| e.name).collect();
    assert_eq!(names, vec!["Awesome", "Good", "Fail"]);
    assert_eq!(chart.legend().entries()[2].color, Rgb::new(255, 82, 82));

    let before = chart.legend().clone();
    chart.run_to_completion(t0)?;
    assert_eq!(chart.legend(), &before);
    Ok(())
}

#[test]
fn absent_container_is_a_silent_skip() -> Result<()> {
    let mut chart = LineChart::new(ChartConfig::default(), RecordingBackend::new())?;
    assert!(!chart.initialize(None, Instant::now())?);
    assert!(!chart.is_initialized());
    assert!(!chart.timer_active());
    assert!(chart.backend().updates.is_empty());
    // The container can still show up later.
    assert!(chart.initialize(Some(&Size::new(300.0, 200.0)), Instant::now())?);
    Ok(())
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let cfg = ChartConfig { draw_every: 0, ..ChartConfig::default() };
    let err = LineChart::new(cfg, RecordingBackend::new()).err();
    assert!(matches!(err, Some(ChartError::InvalidConfig(_))));
}

#[test]
fn config_file_round_trip() -> Result<()> {
    let dir = std::path::PathBuf::from("target/test_out");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("chart_config.json");
    std::fs::write(&path, r#"{ "max_x": 8.0, "x_step": 0.25, "y_label": "USERS" }"#)?;

    let cfg = ChartConfig::load(&path)?;
    assert_eq!(cfg.columns(), 4);
    let mut chart = LineChart::new(cfg, RecordingBackend::new())?;
    let t0 = Instant::now();
    chart.initialize(Some(&Size::new(400.0, 200.0)), t0)?;
    chart.run_to_completion(t0)?;
    assert_eq!(chart.series().get(SeriesId::Good).len(), 33);
    assert_eq!(chart.model().y_axis.label, "USERS");
    Ok(())
}

#[test]
fn guideline_reports_every_series() -> Result<()> {
    let mut chart = LineChart::new(ChartConfig::default(), RecordingBackend::new())?;
    let t0 = Instant::now();
    chart.initialize(Some(&Size::new(640.0, 320.0)), t0)?;
    assert!(chart.guideline_at(3.0).is_none());
    chart.run_to_completion(t0)?;
    let g = chart.guideline_at(3.06).expect("guideline");
    assert_eq!(g.x, 3.0);
    assert_eq!(g.points.len(), 3);
    Ok(())
}
