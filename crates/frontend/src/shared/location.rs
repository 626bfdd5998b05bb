//! Access to the page URL (share links are read from and written to it)

use wasm_bindgen::JsValue;

/// Query string of the current page, including the leading `?` (may be empty)
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Origin and path of the current page, e.g. "http://localhost:8080/"
///
/// Returns an empty string if window is not available
pub fn current_base_url() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let origin = location.origin().unwrap_or_default();
    let path = location.pathname().unwrap_or_else(|_| "/".to_string());
    format!("{}{}", origin, path)
}

/// Replace the address bar query without reloading or adding a history entry
pub fn replace_query(query_string: &str) {
    let new_url = format!("?{}", query_string.trim_start_matches('?'));
    if current_search() == new_url {
        return;
    }
    if let Some(w) = web_sys::window() {
        if let Ok(history) = w.history() {
            if let Err(e) = history.replace_state_with_url(&JsValue::NULL, "", Some(&new_url)) {
                log::warn!("Failed to update URL: {:?}", e);
            }
        }
    }
}
