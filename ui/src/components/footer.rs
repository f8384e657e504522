use dioxus::prelude::*;

use crate::core::catalog::OFFERINGS;
use crate::state::use_app_state;
use crate::t;

#[component]
pub fn Footer() -> Element {
    let state = use_app_state();
    let lang = (state.lang)();
    let mut email = use_signal(String::new);

    rsx! {
        footer { class: "footer",
            div { class: "footer__grid",
                div { class: "footer__col footer__col--brand",
                    span { class: "footer__brand", "HAWEYA" }
                    p { class: "footer__blurb", {t!(lang, "footer-blurb")} }
                }
                div { class: "footer__col",
                    h4 { {t!(lang, "footer-services")} }
                    ul {
                        for offering in OFFERINGS.iter().take(4) {
                            li { key: "{offering.id}", "{offering.title.get(lang)}" }
                        }
                    }
                }
                div { class: "footer__col",
                    h4 { {t!(lang, "footer-company")} }
                    ul {
                        li { {t!(lang, "footer-about")} }
                        li { {t!(lang, "nav-portfolio")} }
                        li { {t!(lang, "contact-title")} }
                    }
                }
                div { class: "footer__col",
                    h4 { {t!(lang, "footer-newsletter")} }
                    p { {t!(lang, "footer-newsletter-hint")} }
                    // Decorative only; nothing is collected.
                    div { class: "footer__newsletter",
                        input {
                            r#type: "email",
                            placeholder: t!(lang, "footer-newsletter-placeholder"),
                            value: "{email}",
                            oninput: move |evt| email.set(evt.value()),
                        }
                        button {
                            class: "button button--primary",
                            r#type: "button",
                            onclick: move |_| email.set(String::new()),
                            {t!(lang, "footer-join")}
                        }
                    }
                }
            }
            div { class: "footer__bottom",
                span { {t!(lang, "footer-rights")} }
                div { class: "footer__legal",
                    span { {t!(lang, "footer-privacy")} }
                    span { {t!(lang, "footer-terms")} }
                }
            }
        }
    }
}
