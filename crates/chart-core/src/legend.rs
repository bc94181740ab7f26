// File: crates/chart-core/src/legend.rs
// Summary: Static legend rows (swatch + name), one per series.

use crate::series::{SeriesId, SeriesSet};
use crate::types::Rgb;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub id: SeriesId,
    pub name: &'static str,
    pub color: Rgb,
}

/// Built once when the chart is constructed; later style changes do not reach it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Legend {
    entries: Vec<LegendEntry>,
}

impl Legend {
    pub fn build(series: &SeriesSet) -> Self {
        let entries = series
            .iter()
            .map(|s| LegendEntry { id: s.id(), name: s.name(), color: s.style.color })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[LegendEntry] { &self.entries }
}
