//! DOM event wiring: slider drag, step buttons, play/pause toggle

use tracing::{error, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};
use worldmap_timeline::ElementIds;

use crate::shared::Mounted;
use crate::Controller;

/// Attach every listener the timeline needs
pub fn bind_all(
    doc: &Document,
    ids: &ElementIds,
    slider: &HtmlInputElement,
    mounted: &Mounted,
) -> Result<(), JsValue> {
    bind_slider(slider, mounted)?;
    bind_button(doc, &ids.skip_forward, mounted, |c| {
        c.skip_forward();
    })?;
    bind_button(doc, &ids.skip_backward, mounted, |c| {
        c.skip_backward();
    })?;
    bind_button(doc, &ids.play_toggle, mounted, |c| {
        if let Err(e) = c.toggle_playback() {
            error!(error = %e, "failed to toggle playback");
        }
    })?;
    Ok(())
}

/// Slider drag: every `input` event carries the new year
fn bind_slider(slider: &HtmlInputElement, mounted: &Mounted) -> Result<(), JsValue> {
    let mounted = mounted.clone();
    let input = slider.clone();
    let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
        match input.value().parse() {
            Ok(year) => {
                mounted.update(|c| c.set_year(year));
            }
            Err(_) => warn!(value = %input.value(), "slider produced a non-year value"),
        }
    }) as Box<dyn FnMut(_)>);
    slider.add_event_listener_with_callback("input", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

fn bind_button(
    doc: &Document,
    id: &str,
    mounted: &Mounted,
    action: fn(&mut Controller),
) -> Result<(), JsValue> {
    let Some(el) = doc.get_element_by_id(id) else {
        warn!(id, "button not found, control disabled");
        return Ok(());
    };
    let mounted = mounted.clone();
    let cb = Closure::wrap(Box::new(move || {
        mounted.update(action);
    }) as Box<dyn FnMut()>);
    el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}
