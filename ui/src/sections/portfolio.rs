use dioxus::prelude::*;

use crate::core::catalog::PORTFOLIO;
use crate::state::use_app_state;
use crate::t;

#[component]
pub fn PortfolioSection() -> Element {
    let state = use_app_state();
    let lang = (state.lang)();

    rsx! {
        section { id: "portfolio", class: "section portfolio",
            div { class: "section__header section__header--split",
                h2 { class: "section__title", {t!(lang, "portfolio-title")} }
                span { class: "portfolio__all", {t!(lang, "portfolio-view-all")} }
            }
            div { class: "portfolio__grid",
                for project in PORTFOLIO.iter() {
                    figure {
                        key: "{project.id}",
                        class: "portfolio-card",
                        style: "background-image: url('{project.image}')",
                        figcaption { class: "portfolio-card__caption",
                            span { class: "portfolio-card__category", "{project.category}" }
                            h3 { class: "portfolio-card__title", "{project.title}" }
                        }
                    }
                }
            }
        }
    }
}
