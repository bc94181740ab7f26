// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-pixel transforms for the plot area.

/// Maps a data interval onto a pixel interval. The pixel range may be
/// inverted (`range.0 > range.1`) for a y axis that grows upward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = (self.domain.1 - self.domain.0).max(1e-12);
        self.range.0 + ((v - self.domain.0) / span) as f32 * (self.range.1 - self.range.0)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = self.range.1 - self.range.0;
        if span.abs() < f32::EPSILON {
            return self.domain.0;
        }
        self.domain.0 + ((px - self.range.0) / span) as f64 * (self.domain.1 - self.domain.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_range_maps_top_to_max() {
        let s = LinearScale::new((-1.0, 3.0), (400.0, 0.0));
        assert_eq!(s.to_px(3.0), 0.0);
        assert_eq!(s.to_px(-1.0), 400.0);
        assert!((s.from_px(200.0) - 1.0).abs() < 1e-6);
    }
}
