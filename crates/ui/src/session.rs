use wasm_bindgen::JsValue;
use web_sys::{Document, Window};
use worldmap_timeline::{TimelineConfig, Year};

/// Id of the optional `<script type="application/json">` config element
pub const CONFIG_ELEMENT_ID: &str = "timeline-config";

/// Build the page's timeline config
///
/// Handles:
/// - JSON config from `#timeline-config` (defaults when absent)
/// - `?year=` deep link overriding the initial year
pub fn init_session(win: &Window, doc: &Document) -> Result<TimelineConfig, JsValue> {
    let mut config = match doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    {
        Some(json) if !json.trim().is_empty() => {
            TimelineConfig::from_json(&json).map_err(|e| JsValue::from_str(&format!("#{CONFIG_ELEMENT_ID}: {e}")))?
        }
        _ => TimelineConfig::default(),
    };

    let search = win.location().search().unwrap_or_default();
    if let Some(year) = year_param(&search) {
        web_sys::console::log_1(&format!("TIMELINE: Starting at {year} (URL param)").into());
        config = config.with_initial_year(year);
    }

    Ok(config)
}

/// Parse `year=` out of a location search string (`?a=1&year=1820`)
pub fn year_param(search: &str) -> Option<Year> {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|p| p.strip_prefix("year="))
        .and_then(|v| v.trim().parse().ok())
}
