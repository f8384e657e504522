//! Browser-ish side effects shared by the web and desktop shells.
//!
//! Both shells render into a webview, so window/document manipulation goes
//! through `document::eval`. These helpers need a live Dioxus runtime and
//! must be called from components, handlers or tasks spawned by them.

use dioxus::prelude::*;

use super::submission::LinkOpener;
use crate::i18n::Language;

fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

fn run_script(script: String) {
    let _ = document::eval(&script);
}

/// Open `url` in a new browsing context.
pub fn open_external(url: &str) {
    tracing::debug!(url, "opening external link");
    run_script(format!(
        "window.open({}, '_blank', 'noopener');",
        js_string(url)
    ));
}

/// Smooth-scroll the element with `id` into view.
pub fn scroll_to(id: &str) {
    run_script(format!(
        "document.getElementById({})?.scrollIntoView({{ behavior: 'smooth' }});",
        js_string(id)
    ));
}

/// Point `<html dir/lang>` at the active language.
pub fn apply_direction(lang: Language) {
    run_script(format!(
        "document.documentElement.dir = {}; document.documentElement.lang = {};",
        js_string(lang.direction().as_str()),
        js_string(lang.code())
    ));
}

/// [`LinkOpener`] backed by [`open_external`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowOpener;

impl LinkOpener for WindowOpener {
    fn open(&self, url: &str) {
        open_external(url);
    }
}

pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_arguments_are_quoted() {
        assert_eq!(js_string("order-section"), "\"order-section\"");
        assert_eq!(js_string("a\"b'c"), "\"a\\\"b'c\"");
    }
}
