//! Entry points exposed to the page: module initialization plus the two
//! functions inline markup calls directly.

use crate::dom;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    dom::wire::init()
}

#[wasm_bindgen(js_name = copyEmail)]
pub fn copy_email() {
    dom::clipboard::copy_to_clipboard(crate::CONTACT_EMAIL);
}

#[wasm_bindgen(js_name = openExternalLink)]
pub fn open_external_link(url: String) {
    dom::open_external_link(&url);
}
