//! Trigger a browser file download for generated text.
//!
//! Builds a `Blob`, points a temporary `<a download>` at an object URL, and
//! clicks it while attached to the body. Outside the browser this reports an
//! error instead.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// MIME type for exported CSV files.
pub const CSV_MIME: &str = "text/csv;charset=utf-8";

/// Save `contents` as `filename`.
///
/// # Errors
///
/// Returns a description of the failing browser API when the download
/// cannot be started.
pub fn save_text(filename: &str, mime: &str, contents: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let js_err = |e: wasm_bindgen::JsValue| format!("{e:?}");
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "document unavailable".to_owned())?;

        let parts = js_sys::Array::new();
        parts.push(&wasm_bindgen::JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(mime);
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

        let anchor = document
            .create_element("a")
            .map_err(js_err)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "anchor element unavailable".to_owned())?;
        anchor.set_href(&url);
        anchor.set_download(filename);

        // The anchor must be in the document for the click to register.
        let body = document.body().ok_or_else(|| "document body unavailable".to_owned())?;
        body.append_child(&anchor).map_err(js_err)?;
        anchor.click();
        let _ = body.remove_child(&anchor);
        let _ = web_sys::Url::revoke_object_url(&url);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (mime, contents);
        Err(format!("cannot save {filename}: downloads need a browser"))
    }
}
