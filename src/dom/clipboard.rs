use js_sys::Reflect;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Clipboard, HtmlTextAreaElement, Window};

/// Copies `address` to the clipboard, preferring the async clipboard API
/// and falling back to a hidden selectable buffer plus the legacy copy
/// command. Both paths end in a blocking notification.
pub fn copy_to_clipboard(address: &'static str) {
    let Some(window) = web_sys::window() else {
        return;
    };

    match async_clipboard(&window) {
        Some(clipboard) => {
            let promise = clipboard.write_text(address);
            spawn_local(async move {
                let Some(window) = web_sys::window() else {
                    return;
                };
                if JsFuture::from(promise).await.is_ok() {
                    notify(&window, address);
                } else {
                    fallback_copy(&window, address);
                }
            });
        }
        None => fallback_copy(&window, address),
    }
}

/// The clipboard API is absent in insecure contexts; probe for it instead
/// of calling through a missing property.
fn async_clipboard(window: &Window) -> Option<Clipboard> {
    let navigator = window.navigator();
    let value = Reflect::get(navigator.as_ref(), &JsValue::from_str("clipboard")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    value.dyn_into::<Clipboard>().ok()
}

fn fallback_copy(window: &Window, address: &str) {
    let Some(document) = window.document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let Ok(element) = document.create_element("textarea") else {
        return;
    };
    let Ok(textarea) = element.dyn_into::<HtmlTextAreaElement>() else {
        return;
    };

    textarea.set_value(address);
    if body.append_child(&textarea).is_err() {
        return;
    }
    textarea.select();
    let _ = document.exec_command("copy");
    let _ = body.remove_child(&textarea);
    notify(window, address);
}

fn notify(window: &Window, address: &str) {
    let _ = window.alert_with_message(&format!("Email copiado al portapapeles: {address}"));
}
