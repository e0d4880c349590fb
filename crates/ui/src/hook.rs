//! Bridge to the page's map renderer

use std::cell::Cell;

use tracing::{error, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;
use worldmap_timeline::Year;

/// Calls a global JS function (`window.setData` by default) with each year.
///
/// Only ever invoked with the controller borrow released, so the page's
/// renderer may call back into `Timeline`.
pub struct JsRenderHook {
    name: String,
    warned: Cell<bool>,
}

impl JsRenderHook {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            warned: Cell::new(false),
        }
    }

    fn function(&self) -> Option<js_sys::Function> {
        let win = window()?;
        let value = js_sys::Reflect::get(&win, &self.name.as_str().into()).ok()?;
        value.dyn_into::<js_sys::Function>().ok()
    }

    pub fn deliver(&self, year: Year) {
        let Some(func) = self.function() else {
            // Map scripts may load after us; complain once, keep going.
            if !self.warned.replace(true) {
                warn!(hook = %self.name, "render hook is not a function, skipping");
            }
            return;
        };
        if let Err(e) = func.call1(&JsValue::NULL, &JsValue::from(year)) {
            error!(hook = %self.name, year, error = ?e, "render hook threw");
        }
    }
}
