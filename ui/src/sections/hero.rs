use dioxus::prelude::*;

use crate::core::platform::scroll_to;
use crate::state::use_app_state;
use crate::t;

#[component]
pub fn Hero() -> Element {
    let state = use_app_state();
    let lang = (state.lang)();

    rsx! {
        section { id: "home", class: "hero",
            div { class: "hero__glow", aria_hidden: "true" }
            div { class: "hero__content",
                span { class: "hero__badge", {t!(lang, "hero-badge")} }
                h1 { class: "hero__title", {t!(lang, "hero-tagline")} }
                p { class: "hero__intro", {t!(lang, "hero-intro")} }
                div { class: "hero__actions",
                    button {
                        class: "button button--primary",
                        r#type: "button",
                        onclick: move |_| scroll_to("order-section"),
                        {t!(lang, "hero-cta")}
                    }
                    button {
                        class: "button button--ghost",
                        r#type: "button",
                        onclick: move |_| scroll_to("portfolio"),
                        {t!(lang, "hero-portfolio")}
                    }
                }
            }
        }
    }
}
