// File: crates/chart-core/src/layout.rs
// Summary: Background column bars and axis-label anchors, rebuilt from the container size.

use std::time::Duration;

use crate::config::ChartConfig;
use crate::geometry::{ease_cubic_in_out, lerp, Point, Rect, Size};

/// Approximate glyph advance used to right-align axis labels.
const LABEL_CHAR_WIDTH: f32 = 7.0;

/// Anything that can report its pixel size (a window, a canvas, a fixed test box).
pub trait Container {
    fn measure(&self) -> Size;
}

impl Container for Size {
    fn measure(&self) -> Size { *self }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundLayout {
    pub svg_width: f32,
    /// Container height minus the margin.
    pub svg_height: f32,
    pub margin: f32,
    /// Horizontal space owned by one column (bar plus gap).
    pub slot_width: f32,
    pub bar_width: f32,
    /// Absolute bar rectangles, left to right.
    pub bars: Vec<Rect>,
    pub x_label: Point,
    /// Anchor in the rotated (-90 deg) frame.
    pub y_label: Point,
}

impl BackgroundLayout {
    pub fn compute(size: Size, config: &ChartConfig) -> Self {
        let margin = config.margin;
        let columns = config.columns().max(1);
        let svg_width = size.width;
        let svg_height = size.height - margin;

        let slot_width = (svg_width - 2.0 * margin) / columns as f32;
        let bar_width = slot_width / 2.0;
        let bars = (0..columns)
            .map(|i| Rect::from_ltwh(margin + i as f32 * slot_width, margin, bar_width, svg_height))
            .collect();

        let x_label = Point::new(
            svg_width - margin - LABEL_CHAR_WIDTH - config.x_label.chars().count() as f32 * LABEL_CHAR_WIDTH,
            svg_height - svg_height / 4.0 + margin + config.max_x as f32,
        );
        let y_label = Point::new(-(23.0 + config.y_label.chars().count() as f32 * LABEL_CHAR_WIDTH), 12.0);

        Self { svg_width, svg_height, margin, slot_width, bar_width, bars, x_label, y_label }
    }

    /// Total width spanned by the column slots.
    pub fn slots_span(&self) -> f32 {
        self.slot_width * self.bars.len() as f32
    }
}

/// Animates bar x/width and the x-label anchor between two layouts.
/// Heights and y apply immediately.
#[derive(Clone, Debug)]
pub struct BackgroundTransition {
    from: BackgroundLayout,
    to: BackgroundLayout,
    duration: Duration,
}

impl BackgroundTransition {
    pub fn new(from: BackgroundLayout, to: BackgroundLayout, duration: Duration) -> Self {
        Self { from, to, duration }
    }

    /// Transition that starts from the same geometry (initial build).
    pub fn settled(layout: BackgroundLayout, duration: Duration) -> Self {
        Self { from: layout.clone(), to: layout, duration }
    }

    pub fn target(&self) -> &BackgroundLayout { &self.to }

    pub fn duration(&self) -> Duration { self.duration }

    pub fn is_done(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }

    pub fn at(&self, elapsed: Duration) -> BackgroundLayout {
        if self.is_done(elapsed) || self.duration.is_zero() {
            return self.to.clone();
        }
        let t = ease_cubic_in_out(elapsed.as_secs_f32() / self.duration.as_secs_f32());
        let mut out = self.to.clone();
        for (i, bar) in out.bars.iter_mut().enumerate() {
            // Bar count only changes with config, never on resize; fall back to the target.
            if let Some(prev) = self.from.bars.get(i) {
                bar.left = lerp(prev.left, bar.left, t);
                bar.width = lerp(prev.width, bar.width, t);
            }
        }
        out.x_label = Point::new(
            lerp(self.from.x_label.x, self.to.x_label.x, t),
            lerp(self.from.x_label.y, self.to.x_label.y, t),
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_anchors_follow_text_length() {
        let cfg = ChartConfig::default();
        let l = BackgroundLayout::compute(Size::new(800.0, 300.0), &cfg);
        // 800 - 20 - 7 - 4 * 7
        assert_eq!(l.x_label.x, 745.0);
        // 280 - 70 + 20 + 14
        assert_eq!(l.x_label.y, 244.0);
        // -(23 + 7 * 7)
        assert_eq!(l.y_label, Point::new(-72.0, 12.0));
    }

    #[test]
    fn transition_moves_monotonically_toward_target() {
        let cfg = ChartConfig::default();
        let a = BackgroundLayout::compute(Size::new(440.0, 300.0), &cfg);
        let b = BackgroundLayout::compute(Size::new(740.0, 300.0), &cfg);
        let tr = BackgroundTransition::new(a.clone(), b.clone(), Duration::from_millis(500));

        assert_eq!(tr.at(Duration::ZERO).bars, a.bars);
        let mid = tr.at(Duration::from_millis(250));
        assert!(mid.bars[3].left > a.bars[3].left && mid.bars[3].left < b.bars[3].left);
        assert_eq!(tr.at(Duration::from_millis(500)), b);
        assert_eq!(tr.at(Duration::from_secs(3)), b);
    }
}
