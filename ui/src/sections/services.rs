use dioxus::prelude::*;

use crate::core::catalog::OFFERINGS;
use crate::core::platform::scroll_to;
use crate::state::use_app_state;
use crate::t;

/// Icon glyph for a catalog icon name.
pub(crate) fn icon_glyph(name: &str) -> &'static str {
    match name {
        "monitor" => "🖥",
        "pen-tool" => "✒",
        "printer" => "🖨",
        "file-text" => "📄",
        "gift" => "🎁",
        "layout" => "▦",
        _ => "◆",
    }
}

#[component]
pub fn ServicesSection() -> Element {
    let state = use_app_state();
    let lang = (state.lang)();

    rsx! {
        section { id: "services", class: "section services",
            div { class: "section__header",
                h2 { class: "section__title", {t!(lang, "services-title")} }
                p { class: "section__intro", {t!(lang, "services-intro")} }
            }
            div { class: "services__grid",
                for offering in OFFERINGS.iter() {
                    article { key: "{offering.id}", class: "service-card",
                        span { class: "service-card__icon", aria_hidden: "true", "{icon_glyph(offering.icon)}" }
                        h3 { class: "service-card__title", "{offering.title.get(lang)}" }
                        p { class: "service-card__body", "{offering.description.get(lang)}" }
                        button {
                            class: "service-card__more",
                            r#type: "button",
                            onclick: move |_| scroll_to("order-section"),
                            {t!(lang, "services-learn-more")}
                        }
                    }
                }
            }
        }
    }
}
