//! The mounted timeline as shared by listeners, timers and page scripts

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use worldmap_timeline::RenderQueue;

use crate::hook::JsRenderHook;
use crate::Controller;

/// Controller plus the queue its render calls land in
#[derive(Clone)]
pub struct Mounted {
    controller: Rc<RefCell<Controller>>,
    renders: RenderQueue,
    hook: Rc<JsRenderHook>,
}

impl Mounted {
    pub fn new(controller: Controller, renders: RenderQueue, hook: JsRenderHook) -> Self {
        Self {
            controller: Rc::new(RefCell::new(controller)),
            renders,
            hook: Rc::new(hook),
        }
    }

    /// Mutate the controller, then hand queued years to the page once the
    /// borrow is gone.
    pub fn update<T>(&self, f: impl FnOnce(&mut Controller) -> T) -> T {
        let out = f(&mut self.controller.borrow_mut());
        self.flush();
        out
    }

    /// Like [`Self::update`] but gives up when the controller is busy
    pub fn try_update<T>(&self, f: impl FnOnce(&mut Controller) -> T) -> Option<T> {
        let out = {
            let mut controller = self.controller.try_borrow_mut().ok()?;
            f(&mut controller)
        };
        self.flush();
        Some(out)
    }

    pub fn read<T>(&self, f: impl FnOnce(&Controller) -> T) -> T {
        f(&self.controller.borrow())
    }

    fn flush(&self) {
        self.renders.drain_into(|year| self.hook.deliver(year));
    }

    pub fn downgrade(&self) -> MountedRef {
        MountedRef {
            controller: Rc::downgrade(&self.controller),
            renders: self.renders.clone(),
            hook: self.hook.clone(),
        }
    }
}

/// Non-owning [`Mounted`] for timer callbacks
#[derive(Clone)]
pub struct MountedRef {
    controller: Weak<RefCell<Controller>>,
    renders: RenderQueue,
    hook: Rc<JsRenderHook>,
}

impl MountedRef {
    pub fn upgrade(&self) -> Option<Mounted> {
        Some(Mounted {
            controller: self.controller.upgrade()?,
            renders: self.renders.clone(),
            hook: self.hook.clone(),
        })
    }
}
