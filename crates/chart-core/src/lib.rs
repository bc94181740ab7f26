// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the animated line chart component and its model.

pub mod animation;
pub mod axis;
pub mod backend;
pub mod chart;
pub mod component;
pub mod config;
pub mod error;
pub mod formula;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod legend;
pub mod scale;
pub mod series;
pub mod types;

pub use animation::{AnimationDriver, AnimationState, Tick, Ticker};
pub use axis::{Axis, Ticks};
pub use backend::{ChartBackend, RecordingBackend, Scene, UpdateRecord};
pub use chart::{Guideline, LineChartModel};
pub use component::LineChart;
pub use config::ChartConfig;
pub use error::{ChartError, Result};
pub use geometry::{Point, Rect, Size};
pub use layout::{BackgroundLayout, BackgroundTransition, Container};
pub use legend::{Legend, LegendEntry};
pub use scale::LinearScale;
pub use series::{Series, SeriesId, SeriesSet, SeriesStyle};
pub use types::{Insets, Rgb};
