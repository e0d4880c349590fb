//! `setInterval` backed playback timer

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tracing::{trace, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;
use worldmap_timeline::config::MAX_INTERVAL_MS;
use worldmap_timeline::{Scheduler, TimelineError};

use crate::shared::{Mounted, MountedRef};

type Target = Rc<RefCell<Option<MountedRef>>>;

/// Starts intervals whose ticks land in the bound timeline.
///
/// Cloned before being handed to the controller so the page can [`bind`]
/// the timeline once it exists.
///
/// [`bind`]: IntervalScheduler::bind
#[derive(Clone, Default)]
pub struct IntervalScheduler {
    target: Target,
}

impl IntervalScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&self, mounted: &Mounted) {
        *self.target.borrow_mut() = Some(mounted.downgrade());
    }
}

/// Live interval. Dropping it calls `clearInterval`.
pub struct IntervalHandle {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Drop for IntervalHandle {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_interval_with_handle(self.id);
        }
        trace!(id = self.id, "interval cleared");
    }
}

impl Scheduler for IntervalScheduler {
    type Handle = IntervalHandle;

    fn every(&mut self, period: Duration) -> worldmap_timeline::Result<IntervalHandle> {
        let win = window().ok_or_else(|| TimelineError::Scheduler("No window".into()))?;
        let timeout = i32::try_from(period.as_millis()).map_err(|_| {
            TimelineError::InvalidInterval {
                max: MAX_INTERVAL_MS,
            }
        })?;

        let target = self.target.clone();
        // A tick that stops playback drops this closure mid-call; wasm-bindgen
        // defers the free until the call returns.
        let callback = Closure::wrap(Box::new(move || {
            let Some(mounted) = target.borrow().as_ref().and_then(MountedRef::upgrade) else {
                return;
            };
            if mounted.try_update(|c| c.tick()).is_none() {
                warn!("controller busy, skipping playback tick");
            }
        }) as Box<dyn FnMut()>);

        let id = win
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                timeout,
            )
            .map_err(|e| TimelineError::Scheduler(format!("{e:?}")))?;
        trace!(id, timeout, "interval started");

        Ok(IntervalHandle {
            id,
            _callback: callback,
        })
    }
}
