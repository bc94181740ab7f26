// File: crates/chart-core/src/series.rs
// Summary: The three fixed demo series, their styles and append-only point buffers.
// Notes:
// - Behavior lives in `SeriesId::sample`; `Series` only owns data and style.

use std::fmt;

use crate::error::{ChartError, Result};
use crate::formula;
use crate::types::Rgb;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesId {
    Awesome,
    Good,
    Fail,
}

impl SeriesId {
    /// Declaration order; also legend and draw order.
    pub const ALL: [SeriesId; 3] = [SeriesId::Awesome, SeriesId::Good, SeriesId::Fail];

    pub fn name(self) -> &'static str {
        match self {
            SeriesId::Awesome => "Awesome",
            SeriesId::Good => "Good",
            SeriesId::Fail => "Fail",
        }
    }

    /// Pure sampling function for this series.
    pub fn sample(self, x: f64) -> f64 {
        match self {
            SeriesId::Awesome => formula::awesome(x),
            SeriesId::Good => formula::good(x),
            SeriesId::Fail => formula::fail(x),
        }
    }

    /// Where the piecewise curve switches formula.
    pub fn breakpoints(self) -> &'static [f64] {
        match self {
            SeriesId::Awesome => &formula::AWESOME_BREAKS,
            SeriesId::Good => &formula::GOOD_BREAKS,
            SeriesId::Fail => &formula::FAIL_BREAKS,
        }
    }

    pub fn default_style(self) -> SeriesStyle {
        match self {
            SeriesId::Awesome => SeriesStyle { color: Rgb::new(80, 150, 215), fill_opacity: 0.0, area: false },
            SeriesId::Good => SeriesStyle { color: Rgb::new(0, 188, 212), fill_opacity: 0.00001, area: true },
            SeriesId::Fail => SeriesStyle { color: Rgb::new(255, 82, 82), fill_opacity: 0.0, area: false },
        }
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesStyle {
    pub color: Rgb,
    pub fill_opacity: f32,
    /// Filled down to the zero baseline when set.
    pub area: bool,
}

#[derive(Clone, Debug)]
pub struct Series {
    id: SeriesId,
    pub style: SeriesStyle,
    points: Vec<(f64, f64)>,
}

impl Series {
    pub fn new(id: SeriesId) -> Self {
        Self { id, style: id.default_style(), points: Vec::new() }
    }

    pub fn id(&self) -> SeriesId { self.id }

    pub fn name(&self) -> &'static str { self.id.name() }

    pub fn points(&self) -> &[(f64, f64)] { &self.points }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    /// Evaluate this series at `x` and append the point.
    /// Contract: `x` must be strictly greater than the last sampled x.
    pub fn push_sample(&mut self, x: f64) -> Result<(f64, f64)> {
        if let Some(&(last, _)) = self.points.last() {
            if !(x > last) {
                return Err(ChartError::NonMonotonicSample { series: self.id, last, next: x });
            }
        }
        let point = (x, self.id.sample(x));
        self.points.push(point);
        Ok(point)
    }

    /// Point whose x is closest to `x`, if any were sampled.
    pub fn nearest(&self, x: f64) -> Option<(f64, f64)> {
        let idx = self.points.partition_point(|&(px, _)| px < x);
        let after = self.points.get(idx).copied();
        let before = idx.checked_sub(1).and_then(|i| self.points.get(i).copied());
        match (before, after) {
            (Some(b), Some(a)) => Some(if (x - b.0) <= (a.0 - x) { b } else { a }),
            (b, a) => b.or(a),
        }
    }
}

/// All three series, in declaration order.
#[derive(Clone, Debug)]
pub struct SeriesSet {
    series: Vec<Series>,
}

impl SeriesSet {
    pub fn new() -> Self {
        Self { series: SeriesId::ALL.iter().map(|&id| Series::new(id)).collect() }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Series> { self.series.iter() }

    pub fn as_slice(&self) -> &[Series] { &self.series }

    pub fn get(&self, id: SeriesId) -> &Series {
        // Built from SeriesId::ALL, so every id has a slot at its declaration index.
        &self.series[id as usize]
    }

    /// Append one sample at `x` to every series.
    pub fn sample_all(&mut self, x: f64) -> Result<()> {
        for s in &mut self.series {
            s.push_sample(x)?;
        }
        Ok(())
    }

    pub fn set_fill_opacity(&mut self, opacity: f32) {
        for s in &mut self.series {
            s.style.fill_opacity = opacity;
        }
    }
}

impl Default for SeriesSet {
    fn default() -> Self { Self::new() }
}

impl<'a> IntoIterator for &'a SeriesSet {
    type Item = &'a Series;
    type IntoIter = std::slice::Iter<'a, Series>;
    fn into_iter(self) -> Self::IntoIter { self.series.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_increasing_x() {
        let mut s = Series::new(SeriesId::Good);
        s.push_sample(1.0).unwrap();
        let err = s.push_sample(1.0).unwrap_err();
        assert!(matches!(err, ChartError::NonMonotonicSample { series: SeriesId::Good, .. }));
        assert_eq!(s.len(), 1);
    }

    #[test]
    fn sample_all_keeps_series_aligned() {
        let mut set = SeriesSet::new();
        for k in 0..5 {
            set.sample_all(k as f64 * 0.5).unwrap();
        }
        let xs: Vec<Vec<f64>> = set.iter().map(|s| s.points().iter().map(|p| p.0).collect()).collect();
        assert_eq!(xs[0], xs[1]);
        assert_eq!(xs[1], xs[2]);
    }

    #[test]
    fn nearest_picks_closest_sample() {
        let mut s = Series::new(SeriesId::Fail);
        for x in [0.0, 1.0, 2.0] {
            s.push_sample(x).unwrap();
        }
        assert_eq!(s.nearest(1.4).map(|p| p.0), Some(1.0));
        assert_eq!(s.nearest(1.6).map(|p| p.0), Some(2.0));
        assert_eq!(s.nearest(-3.0).map(|p| p.0), Some(0.0));
        assert_eq!(s.nearest(9.0).map(|p| p.0), Some(2.0));
        assert!(Series::new(SeriesId::Fail).nearest(1.0).is_none());
    }

    #[test]
    fn only_good_is_an_area() {
        let set = SeriesSet::new();
        let areas: Vec<_> = set.iter().filter(|s| s.style.area).map(|s| s.id()).collect();
        assert_eq!(areas, vec![SeriesId::Good]);
    }
}
