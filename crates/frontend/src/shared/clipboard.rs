//! Clipboard utilities for copying text to clipboard
//!
//! Wraps the Web Clipboard API. The caller receives the outcome so the UI
//! can confirm the copy or surface a failure.

use wasm_bindgen_futures::spawn_local;

/// Copy text to the system clipboard, reporting the outcome to `on_result`.
///
/// `on_result(false)` covers both a missing window and a clipboard API
/// denial (e.g. insecure context or permission refused).
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_result: F)
where
    F: FnOnce(bool) + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            on_result(false);
            return;
        };
        let clipboard = window.navigator().clipboard();
        let outcome = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text))
            .await
            .is_ok();
        on_result(outcome);
    });
}
