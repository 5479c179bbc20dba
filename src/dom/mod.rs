pub mod clipboard;
pub mod page;
pub mod wire;

pub use self::page::DomPage;

/// Opens a URL in a new browsing context with referrer and opener
/// isolation.
pub fn open_external_link(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let _ = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer");
}
