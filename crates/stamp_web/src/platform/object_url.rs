use js_sys::{Array, Uint8Array};
use stamp_core::ObjectUrlStore;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, Url};

/// Object URLs created through `URL.createObjectURL`.
#[derive(Debug, Default)]
pub struct BrowserObjectUrls;

impl ObjectUrlStore for BrowserObjectUrls {
    type Handle = String;
    type Error = String;

    fn create(&mut self, bytes: &[u8], mime: Option<&str>) -> Result<String, String> {
        let parts = Array::new();
        parts.push(&Uint8Array::from(bytes).buffer());
        let options = BlobPropertyBag::new();
        if let Some(mime) = mime.filter(|mime| !mime.trim().is_empty()) {
            options.set_type(mime);
        }
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
        Url::create_object_url_with_blob(&blob).map_err(js_err)
    }

    fn revoke(&mut self, handle: &String) {
        let _ = Url::revoke_object_url(handle);
    }
}

pub fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}
