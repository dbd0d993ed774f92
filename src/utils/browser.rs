//! Browser implementation of the platform seam.

use js_sys::{Array, Reflect, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobPropertyBag, Clipboard, File, HtmlAnchorElement, HtmlDocument, HtmlTextAreaElement,
    Url,
};

use super::dom;
use crate::config::{EXTRACT_INPUT_ID, HIDE_INPUT_ID};
use crate::core::error::PlatformError;
use crate::core::{Carrier, Platform, Side};

impl Carrier for File {
    fn name(&self) -> String {
        File::name(self)
    }
}

/// Element id of the file input for `side`.
fn input_id(side: Side) -> &'static str {
    match side {
        Side::Hide => HIDE_INPUT_ID,
        Side::Extract => EXTRACT_INPUT_ID,
    }
}

fn js_message(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            Reflect::get(&value, &"message".into())
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

/// [`Platform`] backed by the page's DOM.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserPlatform;

impl Platform for BrowserPlatform {
    fn now_ms(&self) -> f64 {
        dom::now_ms()
    }

    fn trigger_download(
        &self,
        bytes: &[u8],
        filename: &str,
        mime: &str,
    ) -> Result<(), PlatformError> {
        let document = dom::document().ok_or(PlatformError::NoDocument)?;
        let body = document.body().ok_or(PlatformError::NoDocument)?;

        let parts = Array::of1(&Uint8Array::from(bytes));
        let props = BlobPropertyBag::new();
        props.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &props)
            .map_err(|e| PlatformError::Download(js_message(e)))?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|e| PlatformError::Download(js_message(e)))?;

        let anchor = document
            .create_element("a")
            .map_err(|e| PlatformError::Download(js_message(e)))?
            .dyn_into::<HtmlAnchorElement>()
            .map_err(|_| PlatformError::Download("anchor element".to_string()))?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        let _ = anchor.style().set_property("display", "none");

        let appended = body.append_child(&anchor);
        if appended.is_ok() {
            anchor.click();
            let _ = body.remove_child(&anchor);
        }
        let _ = Url::revoke_object_url(&url);
        appended
            .map(|_| ())
            .map_err(|e| PlatformError::Download(js_message(e)))
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), PlatformError> {
        let window = dom::window().ok_or(PlatformError::NoDocument)?;
        // `navigator.clipboard` is undefined outside secure contexts.
        let clipboard = Reflect::get(&window.navigator(), &"clipboard".into())
            .ok()
            .filter(|c| !c.is_undefined() && !c.is_null())
            .ok_or_else(|| PlatformError::Clipboard("navigator.clipboard missing".to_string()))?
            .unchecked_into::<Clipboard>();

        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| PlatformError::Clipboard(js_message(e)))
    }

    fn write_clipboard_fallback(&self, text: &str) -> Result<(), PlatformError> {
        let document = dom::document().ok_or(PlatformError::NoDocument)?;
        let body = document.body().ok_or(PlatformError::NoDocument)?;

        let area = document
            .create_element("textarea")
            .map_err(|e| PlatformError::Clipboard(js_message(e)))?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| PlatformError::Clipboard("textarea element".to_string()))?;
        area.set_value(text);
        let style = area.style();
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("left", "-9999px");

        body.append_child(&area)
            .map_err(|e| PlatformError::Clipboard(js_message(e)))?;
        area.select();
        let copied = document
            .dyn_ref::<HtmlDocument>()
            .map(|doc| doc.exec_command("copy"))
            .unwrap_or(Ok(false));
        let _ = body.remove_child(&area);

        match copied {
            Ok(true) => Ok(()),
            Ok(false) => Err(PlatformError::Clipboard("copy command refused".to_string())),
            Err(e) => Err(PlatformError::Clipboard(js_message(e))),
        }
    }

    fn reset_file_input(&self, side: Side) {
        if let Some(input) = dom::file_input(input_id(side)) {
            input.set_value("");
        }
    }
}
