//! Owned timeline state

use crate::year::Year;

/// Playback state machine
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Playback {
    #[default]
    Stopped,
    Playing,
}

impl Playback {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }
}

/// Current year plus the handle of the running playback timer.
///
/// `H` is whatever the scheduler hands back; dropping it cancels the timer.
/// Playing is derived from the handle being present, never stored apart
/// from it.
#[derive(Debug)]
pub struct TimelineState<H> {
    year: Year,
    timer: Option<H>,
}

impl<H> TimelineState<H> {
    pub const fn new(year: Year) -> Self {
        Self { year, timer: None }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub fn set_year(&mut self, year: Year) {
        self.year = year;
    }

    pub const fn is_playing(&self) -> bool {
        self.timer.is_some()
    }

    pub const fn playback(&self) -> Playback {
        if self.is_playing() {
            Playback::Playing
        } else {
            Playback::Stopped
        }
    }

    /// Install the timer handle for a fresh playback run
    pub fn start(&mut self, handle: H) {
        debug_assert!(self.timer.is_none(), "playback timer already running");
        self.timer = Some(handle);
    }

    /// Drop the timer handle, cancelling it. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        self.timer.take().is_some()
    }
}
