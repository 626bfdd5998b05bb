//! Clipboard utilities for copying text to clipboard
//!
//! Uses the Web Clipboard API. Failures are logged and never touch UI state.

use wasm_bindgen_futures::{spawn_local, JsFuture};

/// Copy text to clipboard with a callback on success
///
/// Useful when you need to show a notification after copying.
pub fn copy_to_clipboard_with_callback<F>(text: &str, on_success: F)
where
    F: FnOnce() + 'static,
{
    let text = text.to_owned();
    spawn_local(async move {
        match write_text(&text).await {
            Ok(()) => on_success(),
            Err(e) => log::warn!("Failed to copy to clipboard: {}", e),
        }
    });
}

async fn write_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| format!("{e:?}"))
}
