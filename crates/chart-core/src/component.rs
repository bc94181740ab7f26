// File: crates/chart-core/src/component.rs
// Summary: The line chart component: owns series, layout, legend and animation, delegates drawing to a backend.

use std::time::{Duration, Instant};

use tracing::{debug, info, trace};

use crate::animation::{AnimationDriver, AnimationState, Tick, Ticker};
use crate::backend::{ChartBackend, Scene};
use crate::chart::{Guideline, LineChartModel};
use crate::config::ChartConfig;
use crate::error::{ChartError, Result};
use crate::layout::{BackgroundLayout, BackgroundTransition, Container};
use crate::legend::Legend;
use crate::series::SeriesSet;

/// State that exists only once a container was found.
struct Mounted<H> {
    handle: H,
    background: BackgroundTransition,
    resized_at: Instant,
    ticker: Ticker,
}

pub struct LineChart<B: ChartBackend> {
    config: ChartConfig,
    model: LineChartModel,
    series: SeriesSet,
    legend: Legend,
    driver: AnimationDriver,
    backend: B,
    mounted: Option<Mounted<B::Handle>>,
}

impl<B: ChartBackend> LineChart<B> {
    pub fn new(config: ChartConfig, backend: B) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            model: LineChartModel::from_config(&config),
            series: SeriesSet::new(),
            legend: Legend::default(),
            driver: AnimationDriver::new(&config),
            config,
            backend,
            mounted: None,
        })
    }

    /// Lifecycle entry point. Without a container nothing is built and
    /// `Ok(false)` is returned; otherwise the background, legend and chart
    /// are constructed and the animation timer starts at `now`.
    pub fn initialize(&mut self, container: Option<&dyn Container>, now: Instant) -> Result<bool> {
        if self.mounted.is_some() {
            return Err(ChartError::AlreadyInitialized);
        }
        let Some(container) = container else {
            debug!("no chart container present; skipping chart construction");
            return Ok(false);
        };

        let size = container.measure();
        let layout = BackgroundLayout::compute(size, &self.config);
        let background = BackgroundTransition::settled(layout, self.config.resize_duration());
        self.legend = Legend::build(&self.series);
        self.model.duration = Duration::ZERO;

        let scene = Scene {
            model: &self.model,
            series: &self.series,
            background: &background,
            legend: &self.legend,
            at: now,
        };
        let handle = self.backend.create_chart(&scene)?;
        let ticker = Ticker::start(self.config.tick_interval(), now);
        info!(
            width = size.width,
            height = size.height,
            interval_ms = ticker.interval().as_millis() as u64,
            "line chart initialized"
        );
        self.mounted = Some(Mounted { handle, background, resized_at: now, ticker });
        Ok(true)
    }

    /// One timer firing.
    pub fn tick(&mut self, now: Instant) -> Result<Tick> {
        if self.mounted.is_none() {
            return Err(ChartError::NotInitialized);
        }
        let tick = self.driver.tick();
        if let Some(x) = tick.sample {
            self.series.sample_all(x)?;
            trace!(x, "sampled series");
        }
        if tick.redraw {
            self.redraw(now)?;
        }
        if tick.finished {
            self.finish(now)?;
        }
        Ok(tick)
    }

    /// Run every timer firing due at `now`; returns how many ran.
    pub fn advance(&mut self, now: Instant) -> Result<usize> {
        let mut ran = 0;
        loop {
            let due = match self.mounted.as_mut() {
                Some(m) => m.ticker.poll(now),
                None => return Err(ChartError::NotInitialized),
            };
            if !due {
                return Ok(ran);
            }
            self.tick(now)?;
            ran += 1;
        }
    }

    /// Fast-forward the timer from `start` until the animation stops.
    pub fn run_to_completion(&mut self, start: Instant) -> Result<usize> {
        let interval = self.config.tick_interval();
        let mut now = start;
        let mut ran = 0;
        while self.driver.is_running() {
            now += interval;
            ran += self.advance(now)?;
        }
        Ok(ran)
    }

    /// Window resize: rebuild the background from the new container size,
    /// transitioning from what is currently displayed, and refresh the lines.
    pub fn resize(&mut self, container: &dyn Container, now: Instant) -> Result<()> {
        let Some(mounted) = self.mounted.as_mut() else {
            return Err(ChartError::NotInitialized);
        };
        let size = container.measure();
        let elapsed = now.saturating_duration_since(mounted.resized_at);
        let current = mounted.background.at(elapsed);
        let target = BackgroundLayout::compute(size, &self.config);
        mounted.background = BackgroundTransition::new(current, target, self.config.resize_duration());
        mounted.resized_at = now;
        debug!(width = size.width, height = size.height, "resizing chart background");

        let scene = Scene {
            model: &self.model,
            series: &self.series,
            background: &mounted.background,
            legend: &self.legend,
            at: now,
        };
        self.backend.update_background(&mut mounted.handle, &scene)?;
        self.backend.update_chart(&mut mounted.handle, &scene)
    }

    fn finish(&mut self, now: Instant) -> Result<()> {
        self.model.duration = self.config.resize_duration();
        self.series.set_fill_opacity(self.config.terminal_fill_opacity);
        if let Some(m) = self.mounted.as_mut() {
            m.ticker.cancel();
        }
        info!(cursor = self.driver.cursor(), "animation finished");
        self.redraw(now)
    }

    fn redraw(&mut self, now: Instant) -> Result<()> {
        let Some(mounted) = self.mounted.as_mut() else {
            return Err(ChartError::NotInitialized);
        };
        let scene = Scene {
            model: &self.model,
            series: &self.series,
            background: &mounted.background,
            legend: &self.legend,
            at: now,
        };
        debug!(cursor = self.driver.cursor(), "redrawing chart");
        self.backend.update_chart(&mut mounted.handle, &scene)
    }

    pub fn config(&self) -> &ChartConfig { &self.config }

    pub fn model(&self) -> &LineChartModel { &self.model }

    pub fn series(&self) -> &SeriesSet { &self.series }

    pub fn legend(&self) -> &Legend { &self.legend }

    pub fn state(&self) -> AnimationState { self.driver.state() }

    pub fn cursor(&self) -> f64 { self.driver.cursor() }

    pub fn is_initialized(&self) -> bool { self.mounted.is_some() }

    /// True while the repeating timer is scheduled.
    pub fn timer_active(&self) -> bool {
        self.mounted.as_ref().is_some_and(|m| m.ticker.is_active())
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.mounted.as_ref().and_then(|m| m.ticker.next_deadline())
    }

    /// Background geometry as displayed at `now`.
    pub fn background_at(&self, now: Instant) -> Option<BackgroundLayout> {
        self.mounted
            .as_ref()
            .map(|m| m.background.at(now.saturating_duration_since(m.resized_at)))
    }

    pub fn guideline_at(&self, x: f64) -> Option<Guideline> {
        self.model.guideline_at(x, &self.series)
    }

    pub fn backend(&self) -> &B { &self.backend }

    pub fn handle(&self) -> Option<&B::Handle> {
        self.mounted.as_ref().map(|m| &m.handle)
    }
}
