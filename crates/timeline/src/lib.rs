//! Year slider and playback controller for the worldmap timeline.
//!
//! Platform-independent half of the timeline: the year range, the owned
//! state, the Stopped/Playing machine and its configuration. The browser
//! half lives in `worldmap-timeline-ui` and plugs into the seams declared
//! in [`controller`].

pub mod config;
pub mod controller;
pub mod error;
pub mod queue;
pub mod state;
pub mod year;

pub use config::{ElementIds, TimelineConfig};
pub use controller::{RenderHook, Scheduler, TimelineController, TimelineView};
pub use error::{Result, TimelineError};
pub use queue::RenderQueue;
pub use state::{Playback, TimelineState};
pub use year::{Year, YearRange};
