use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlImageElement, HtmlInputElement};
use worldmap_timeline::{TimelineConfig, TimelineView, Year};

/// Get document helper
pub fn get_document() -> Result<Document, JsValue> {
    window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("No document"))
}

/// Look up a required element by id
pub fn require_element(doc: &Document, id: &str) -> Result<Element, JsValue> {
    doc.get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Element #{id} not found")))
}

/// Slider, year label and play/pause icon
pub struct DomView {
    slider: HtmlInputElement,
    label: Element,
    icon: HtmlImageElement,
}

impl DomView {
    /// Bind to the configured elements and set the slider's range
    pub fn bind(doc: &Document, config: &TimelineConfig) -> Result<Self, JsValue> {
        let ids = &config.elements;
        let slider = slider_input(doc, &require_element(doc, &ids.slider)?)?;
        let label = require_element(doc, &ids.label)?;
        let icon = require_element(doc, &ids.icon)?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| JsValue::from_str(&format!("#{} is not an <img>", ids.icon)))?;

        slider.set_min(&config.min_year.to_string());
        slider.set_max(&config.max_year.to_string());
        slider.set_step(&config.step.to_string());
        slider.set_value(&config.initial_year.to_string());

        Ok(Self {
            slider,
            label,
            icon,
        })
    }

    pub const fn slider(&self) -> &HtmlInputElement {
        &self.slider
    }
}

impl TimelineView for DomView {
    fn show_year(&mut self, year: Year, label: &str) {
        self.slider.set_value(&year.to_string());
        self.label.set_text_content(Some(label));
    }

    fn show_icon(&mut self, src: &str) {
        self.icon.set_src(src);
    }
}

/// Use the element itself when it is a range input, otherwise mount one
/// inside it (the page markup may only provide a container div).
fn slider_input(doc: &Document, el: &Element) -> Result<HtmlInputElement, JsValue> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_type("range");
        return Ok(input.clone());
    }
    let input = doc
        .create_element("input")?
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| JsValue::from_str("Failed to create slider input"))?;
    input.set_type("range");
    input.set_class_name("timeline-slider");
    el.append_child(&input)?;
    Ok(input)
}
