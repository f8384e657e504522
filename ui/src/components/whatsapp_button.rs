use dioxus::prelude::*;

use crate::core::deeplink::whatsapp_chat_url;
use crate::core::platform::open_external;

/// Floating chat shortcut in the bottom corner.
#[component]
pub fn WhatsAppButton() -> Element {
    rsx! {
        button {
            class: "whatsapp-float",
            r#type: "button",
            aria_label: "WhatsApp",
            onclick: move |_| open_external(&whatsapp_chat_url()),
            span { class: "whatsapp-float__icon", aria_hidden: "true", "✆" }
        }
    }
}
