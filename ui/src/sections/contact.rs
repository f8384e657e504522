use dioxus::prelude::*;

use crate::core::contact::{send_contact, ContactMessage, CONFIRMATION_MS};
use crate::core::error::Action;
use crate::core::platform::sleep_ms;
use crate::core::request::RequestTracker;
use crate::state::{use_app_state, use_services};
use crate::t;

#[component]
pub fn ContactSection() -> Element {
    let state = use_app_state();
    let services = use_services();
    let lang = (state.lang)();

    let mut form = use_signal(ContactMessage::default);
    let mut sending = use_signal(|| false);
    let mut sent = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    // Only the newest confirmation's timer may hide it.
    let dismiss = use_hook(RequestTracker::new);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if sending() {
            return;
        }
        let lang = (state.lang)();
        let message = form();
        let services = services.clone();
        let dismiss = dismiss.clone();
        dismiss.invalidate();
        sending.set(true);
        error.set(None);

        spawn(async move {
            let outcome = send_contact(&services.config, &services.email, &message).await;
            sending.set(false);
            match outcome {
                Ok(()) => {
                    form.set(ContactMessage::default());
                    sent.set(true);
                    if dismiss.guard(sleep_ms(CONFIRMATION_MS)).await.is_some() {
                        sent.set(false);
                    }
                }
                Err(err) => error.set(Some(err.user_message(lang, Action::SendContact))),
            }
        });
    };

    let current = form();

    rsx! {
        section { id: "contact", class: "section contact",
            div { class: "contact__layout",
                div { class: "contact__info",
                    h2 { class: "section__title", {t!(lang, "contact-title")} }
                    p { class: "section__intro", {t!(lang, "contact-intro")} }
                    dl { class: "contact__details",
                        dt { {t!(lang, "contact-address")} }
                        dd { {t!(lang, "contact-address-value")} }
                        dt { {t!(lang, "contact-phone")} }
                        dd { dir: "ltr", "+218 94 292 6128" }
                        dt { {t!(lang, "contact-email")} }
                        dd { "info@haweyaadv.ly" }
                    }
                }

                if sent() {
                    div { class: "contact__sent card", role: "status",
                        span { class: "order-success__icon", aria_hidden: "true", "✓" }
                        h3 { {t!(lang, "contact-sent")} }
                        p { {t!(lang, "contact-sent-detail")} }
                    }
                } else {
                    form { class: "contact__form card", onsubmit: submit,
                        div { class: "contact__row",
                            label { class: "field",
                                span { class: "field__label", {t!(lang, "contact-name")} }
                                input {
                                    name: "user_name",
                                    required: true,
                                    value: "{current.user_name}",
                                    oninput: move |evt| form.write().user_name = evt.value(),
                                }
                            }
                            label { class: "field",
                                span { class: "field__label", {t!(lang, "contact-email")} }
                                input {
                                    name: "user_email",
                                    r#type: "email",
                                    required: true,
                                    value: "{current.user_email}",
                                    oninput: move |evt| form.write().user_email = evt.value(),
                                }
                            }
                        }
                        label { class: "field",
                            span { class: "field__label", {t!(lang, "contact-subject")} }
                            input {
                                name: "subject",
                                required: true,
                                value: "{current.subject}",
                                oninput: move |evt| form.write().subject = evt.value(),
                            }
                        }
                        label { class: "field",
                            span { class: "field__label", {t!(lang, "contact-message")} }
                            textarea {
                                name: "message",
                                rows: "5",
                                required: true,
                                value: "{current.message}",
                                oninput: move |evt| form.write().message = evt.value(),
                            }
                        }
                        button {
                            class: "button button--primary",
                            r#type: "submit",
                            disabled: sending(),
                            if sending() {
                                {t!(lang, "contact-sending")}
                            } else {
                                {t!(lang, "contact-send")}
                            }
                        }
                        if let Some(message) = error() {
                            p { class: "form-error", role: "alert", "{message}" }
                        }
                    }
                }
            }
        }
    }
}
