//! Timeline controller
//!
//! Keeps the slider, the year label and the external render hook in step
//! with one owned year, and runs the Stopped/Playing machine that advances
//! the year on a repeating timer until the last year is reached.
//!
//! The browser specifics sit behind three traits:
//! - [`TimelineView`] draws the slider, label and play/pause icon
//! - [`RenderHook`] is the map's `setData(year)` collaborator
//! - [`Scheduler`] starts the repeating timer; dropping its handle cancels it

use std::time::Duration;

use tracing::{debug, warn};

use crate::config::TimelineConfig;
use crate::error::Result;
use crate::state::{Playback, TimelineState};
use crate::year::{Year, YearRange};

/// Text shown in the year label
pub fn year_label(year: Year) -> String {
    format!("Year: {year}")
}

/// Widgets the controller keeps in sync
pub trait TimelineView {
    /// Move the slider to `year` and show `label`
    fn show_year(&mut self, year: Year, label: &str);
    /// Swap the play/pause icon source
    fn show_icon(&mut self, src: &str);
}

/// External renderer called with every new year
pub trait RenderHook {
    fn set_data(&mut self, year: Year);
}

impl<F: FnMut(Year)> RenderHook for F {
    fn set_data(&mut self, year: Year) {
        self(year);
    }
}

/// Source of the repeating playback timer
pub trait Scheduler {
    /// Live timer. Dropping it must cancel the timer.
    type Handle;

    /// Start firing every `period`. Each firing must end up in
    /// [`TimelineController::tick`].
    fn every(&mut self, period: Duration) -> Result<Self::Handle>;
}

pub struct TimelineController<V, R, S: Scheduler> {
    config: TimelineConfig,
    range: YearRange,
    state: TimelineState<S::Handle>,
    view: V,
    hook: R,
    scheduler: S,
}

impl<V, R, S> TimelineController<V, R, S>
where
    V: TimelineView,
    R: RenderHook,
    S: Scheduler,
{
    /// Build a stopped controller at the configured initial year.
    /// Nothing is drawn until [`Self::init`].
    pub fn new(config: TimelineConfig, view: V, hook: R, scheduler: S) -> Result<Self> {
        config.validate()?;
        let range = config.range()?;
        let state = TimelineState::new(range.snap(config.initial_year, config.step));
        Ok(Self {
            config,
            range,
            state,
            view,
            hook,
            scheduler,
        })
    }

    /// First paint: label, slider, play icon and one render hook call
    pub fn init(&mut self) {
        self.view.show_icon(self.config.icon_for(false));
        self.set_year(self.state.year());
    }

    pub const fn year(&self) -> Year {
        self.state.year()
    }

    /// Clamp `year` into range and onto the step grid, then update slider,
    /// label and renderer. Returns the year actually shown.
    pub fn set_year(&mut self, year: Year) -> Year {
        let shown = self.range.snap(year, self.config.step);
        if shown != year {
            debug!(requested = year, shown, "year moved onto the slider grid");
        }
        self.state.set_year(shown);
        self.view.show_year(shown, &year_label(shown));
        self.hook.set_data(shown);
        shown
    }

    pub fn increment_year(&mut self, delta: Year) -> Year {
        let next = self.range.offset(self.state.year(), delta);
        self.set_year(next)
    }

    /// Forward step button
    pub fn skip_forward(&mut self) -> Year {
        self.increment_year(self.config.step)
    }

    /// Backward step button
    pub fn skip_backward(&mut self) -> Year {
        self.increment_year(-self.config.step)
    }

    /// Play/pause button
    pub fn toggle_playback(&mut self) -> Result<Playback> {
        if self.state.is_playing() {
            self.pause();
        } else {
            self.play()?;
        }
        Ok(self.state.playback())
    }

    /// Stopped -> Playing. No-op while already playing.
    pub fn play(&mut self) -> Result<()> {
        if self.state.is_playing() {
            return Ok(());
        }
        let handle = self.scheduler.every(self.config.interval())?;
        self.state.start(handle);
        self.view.show_icon(self.config.icon_for(true));
        debug!(year = self.state.year(), interval_ms = self.config.interval_ms, "playback started");
        Ok(())
    }

    /// Playing -> Stopped. No-op while already stopped.
    pub fn pause(&mut self) {
        // Timer goes first so no further tick can land.
        if !self.state.stop() {
            return;
        }
        self.view.show_icon(self.config.icon_for(false));
        debug!(year = self.state.year(), "playback stopped");
    }

    /// One playback timer firing: advance one step, stop on the last year.
    ///
    /// Only this path checks the upper bound; stepping or dragging onto the
    /// last year leaves a running playback alone until its next tick.
    pub fn tick(&mut self) -> Playback {
        if !self.state.is_playing() {
            warn!("playback tick while stopped, ignoring");
            return Playback::Stopped;
        }
        self.skip_forward();
        if self.range.is_max(self.state.year()) {
            self.pause();
        }
        self.state.playback()
    }

    pub const fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    pub const fn playback(&self) -> Playback {
        self.state.playback()
    }

    pub const fn range(&self) -> YearRange {
        self.range
    }

    pub const fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub const fn view(&self) -> &V {
        &self.view
    }

    pub const fn hook(&self) -> &R {
        &self.hook
    }
}
