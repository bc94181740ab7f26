// File: crates/chart-core/src/error.rs
// Summary: Error type shared by the chart model, configuration loading and backends.

use thiserror::Error;

use crate::series::SeriesId;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse chart configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A sample would break the strictly increasing x order of a series.
    #[error("sample x={next} for series {series} is not after last x={last}")]
    NonMonotonicSample { series: SeriesId, last: f64, next: f64 },

    #[error("chart is already initialized")]
    AlreadyInitialized,

    #[error("chart has not been initialized")]
    NotInitialized,
}

pub type Result<T> = std::result::Result<T, ChartError>;
