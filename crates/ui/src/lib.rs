//! Worldmap timeline - WASM frontend
//!
//! Mounts the year slider, step buttons and play/pause toggle on page load
//! and exposes the running timeline to page scripts as `Timeline.current()`.

mod dom;
mod events;
mod hook;
mod session;
mod shared;
mod timer;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use worldmap_timeline::{Playback, RenderQueue, TimelineController, Year};

use crate::dom::DomView;
use crate::hook::JsRenderHook;
use crate::shared::Mounted;
use crate::timer::IntervalScheduler;

pub(crate) type Controller = TimelineController<DomView, RenderQueue, IntervalScheduler>;

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let mounted = mount()?;
    MOUNTED.with(|m| *m.borrow_mut() = Some(mounted));
    Ok(())
}

fn mount() -> Result<Mounted, JsValue> {
    let win = web_sys::window().ok_or("No window")?;
    let doc = dom::get_document()?;

    let config = session::init_session(&win, &doc)?;
    let view = DomView::bind(&doc, &config)?;
    let slider = view.slider().clone();
    let hook = JsRenderHook::new(config.render_hook.clone());
    let renders = RenderQueue::new();
    let scheduler = IntervalScheduler::new();

    let controller = TimelineController::new(config, view, renders.clone(), scheduler.clone())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let mounted = Mounted::new(controller, renders, hook);
    scheduler.bind(&mounted);

    let ids = mounted.read(|c| c.config().elements.clone());
    events::bind_all(&doc, &ids, &slider, &mounted)?;
    mounted.update(TimelineController::init);

    web_sys::console::log_1(
        &format!("[Timeline] Mounted at year {}", mounted.read(TimelineController::year)).into(),
    );
    Ok(mounted)
}

/// Handle to the mounted timeline for page scripts.
///
/// Safe to use from inside the render hook: `setData` only runs once the
/// timeline has finished updating.
#[wasm_bindgen]
pub struct Timeline {
    inner: Mounted,
}

#[wasm_bindgen]
impl Timeline {
    /// The timeline mounted at startup, if mounting succeeded
    pub fn current() -> Option<Self> {
        MOUNTED.with(|m| m.borrow().clone().map(|inner| Self { inner }))
    }

    #[wasm_bindgen(js_name = getYear)]
    pub fn get_year(&self) -> Year {
        self.inner.read(TimelineController::year)
    }

    /// Returns the year actually shown after clamping
    #[wasm_bindgen(js_name = setYear)]
    pub fn set_year(&self, year: Year) -> Year {
        self.inner.update(|c| c.set_year(year))
    }

    #[wasm_bindgen(js_name = incrementYear)]
    pub fn increment_year(&self, delta: Year) -> Year {
        self.inner.update(|c| c.increment_year(delta))
    }

    /// Returns whether playback is running afterwards
    #[wasm_bindgen(js_name = togglePlayback)]
    pub fn toggle_playback(&self) -> Result<bool, JsValue> {
        self.inner
            .update(TimelineController::toggle_playback)
            .map(Playback::is_playing)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(js_name = isPlaying)]
    pub fn is_playing(&self) -> bool {
        self.inner.read(TimelineController::is_playing)
    }
}
