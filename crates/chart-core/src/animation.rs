// File: crates/chart-core/src/animation.rs
// Summary: Cursor state machine that reveals the series, plus the repeating timer that paces it.

use std::time::{Duration, Instant};

use crate::config::ChartConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationState {
    Running,
    /// Terminal; there is no restart.
    Stopped,
}

/// What a single tick asks of its owner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tick {
    /// Sample every series at this x.
    pub sample: Option<f64>,
    /// Refresh the chart after sampling.
    pub redraw: bool,
    /// This tick stopped the animation: apply terminal styling and redraw once.
    pub finished: bool,
}

/// Drives the animation cursor. Cursor values are derived from an integer
/// tick count so the sequence stays exact over the whole sweep.
#[derive(Clone, Debug)]
pub struct AnimationDriver {
    state: AnimationState,
    ticks: u64,
    x_step: f64,
    draw_every: u64,
    max_x: f64,
    stop_at: f64,
}

impl AnimationDriver {
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            state: AnimationState::Running,
            ticks: 0,
            x_step: config.x_step,
            draw_every: u64::from(config.draw_every.max(1)),
            max_x: config.max_x,
            stop_at: config.stop_at(),
        }
    }

    pub fn state(&self) -> AnimationState { self.state }

    pub fn is_running(&self) -> bool { self.state == AnimationState::Running }

    /// Current cursor position (next x to be sampled).
    pub fn cursor(&self) -> f64 {
        self.ticks as f64 * self.x_step
    }

    /// Run one tick. Sampling happens at the cursor before it advances, so the
    /// first sample is at 0 and no sample is ever taken past `max_x`.
    /// Ticks after the stop are inert.
    pub fn tick(&mut self) -> Tick {
        if self.state == AnimationState::Stopped {
            return Tick::default();
        }
        let x = self.cursor();
        let mut tick = Tick::default();
        if x <= self.max_x {
            let on_draw_step = self.ticks != 0 && self.ticks % self.draw_every == 0;
            tick.sample = Some(x);
            tick.redraw = on_draw_step || x == self.max_x;
        }

        self.ticks += 1;
        if self.cursor() >= self.stop_at {
            self.state = AnimationState::Stopped;
            tick.finished = true;
        }
        tick
    }
}

/// Fixed-interval repeating timer. Firings are strictly sequential; a host
/// that falls behind gets the missed firings back one by one.
#[derive(Clone, Debug)]
pub struct Ticker {
    interval: Duration,
    next: Option<Instant>,
}

impl Ticker {
    pub fn start(interval: Duration, now: Instant) -> Self {
        Self { interval, next: Some(now + interval) }
    }

    pub fn interval(&self) -> Duration { self.interval }

    pub fn is_active(&self) -> bool { self.next.is_some() }

    /// Deadline of the next firing; `None` once cancelled.
    pub fn next_deadline(&self) -> Option<Instant> { self.next }

    /// Consume one firing if it is due at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next {
            Some(deadline) if deadline <= now => {
                self.next = Some(deadline + self.interval);
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.next = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redraws_on_draw_steps_only() {
        let mut d = AnimationDriver::new(&ChartConfig::default());
        let mut redraw_xs = Vec::new();
        for _ in 0..9 {
            let tick = d.tick();
            if tick.redraw {
                redraw_xs.extend(tick.sample);
            }
        }
        assert_eq!(redraw_xs, vec![0.5, 1.0]);
    }

    #[test]
    fn stops_once_cursor_reaches_threshold() {
        let mut d = AnimationDriver::new(&ChartConfig::default());
        let mut ticks = 0;
        while d.is_running() {
            let tick = d.tick();
            ticks += 1;
            if tick.finished {
                assert_eq!(tick.sample, None);
                assert_eq!(d.cursor(), 15.0);
            }
        }
        // 15 / 0.125
        assert_eq!(ticks, 120);
        assert_eq!(d.tick(), Tick::default());
        assert_eq!(d.state(), AnimationState::Stopped);
    }

    #[test]
    fn ticker_fires_sequentially_and_stops_when_cancelled() {
        let t0 = Instant::now();
        let mut t = Ticker::start(Duration::from_millis(14), t0);
        assert!(!t.poll(t0));
        let late = t0 + Duration::from_millis(30);
        assert!(t.poll(late));
        assert!(t.poll(late));
        assert!(!t.poll(late));
        t.cancel();
        assert!(!t.is_active());
        assert!(!t.poll(late + Duration::from_secs(1)));
    }
}
