//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the page document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Hostname the page is served from (empty outside a browser).
pub fn hostname() -> String {
    window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default()
}

/// Milliseconds since the epoch.
#[inline]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Look up a file input by element id.
pub fn file_input(id: &str) -> Option<HtmlInputElement> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .ok()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_hostname_is_available_in_browser() {
        assert!(window().is_some());
        assert!(!hostname().is_empty());
    }

    #[wasm_bindgen_test]
    fn test_missing_input_is_none() {
        assert!(file_input("no-such-input").is_none());
    }
}
