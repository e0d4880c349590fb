//! Deferred render hook delivery
//!
//! The UI keeps the controller in an `Rc<RefCell<_>>`. Calling page code
//! while that borrow is held means a renderer that reads the timeline back
//! would hit a borrow panic, so the controller records years here and the
//! caller delivers them once its borrow is released.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::controller::RenderHook;
use crate::year::Year;

/// Shared FIFO of years awaiting the real render hook
#[derive(Clone, Debug, Default)]
pub struct RenderQueue {
    pending: Rc<RefCell<VecDeque<Year>>>,
}

impl RenderQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Hand every queued year to `deliver`, oldest first.
    ///
    /// The queue is not borrowed while `deliver` runs, so years queued by
    /// `deliver` itself are picked up by the same drain.
    pub fn drain_into(&self, mut deliver: impl FnMut(Year)) {
        loop {
            let next = self.pending.borrow_mut().pop_front();
            match next {
                Some(year) => deliver(year),
                None => break,
            }
        }
    }
}

impl RenderHook for RenderQueue {
    fn set_data(&mut self, year: Year) {
        self.pending.borrow_mut().push_back(year);
    }
}
