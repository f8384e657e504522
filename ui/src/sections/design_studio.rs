use api::GeneratedImage;
use dioxus::prelude::*;

use crate::core::catalog::{DESIGN_STYLES, DESIGN_TYPES};
use crate::core::design::{design_file_name, generate_design};
use crate::core::error::{retry_message, Action};
use crate::core::export::{download_image, Delivery};
use crate::core::format::timestamp_slug;
use crate::core::platform::scroll_to;
use crate::core::request::RequestTracker;
use crate::core::submission::AttachedFile;
use crate::state::{use_app_state, use_services};
use crate::t;

/// Text-to-image preview of a logo, card or post idea.
#[component]
pub fn DesignStudio() -> Element {
    let mut state = use_app_state();
    let services = use_services();
    let lang = (state.lang)();

    let mut description = use_signal(String::new);
    let mut design_type = use_signal(|| DESIGN_TYPES[0].id.to_string());
    let mut style = use_signal(|| DESIGN_STYLES[0].id.to_string());
    let mut image = use_signal(|| None::<GeneratedImage>);
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut notice = use_signal(|| None::<String>);
    let mut in_flight = use_signal(|| None::<Task>);
    let tracker = use_hook(RequestTracker::new);

    let generate = {
        let tracker = tracker.clone();
        move |_| {
            let lang = (state.lang)();
            notice.set(None);
            let assistant = match services.assistant() {
                Ok(client) => client.clone(),
                Err(err) => {
                    error.set(Some(err.user_message(lang, Action::GenerateDesign)));
                    return;
                }
            };
            if let Some(previous) = in_flight.take() {
                previous.cancel();
            }
            let (desc, kind, look) = (description(), design_type(), style());
            let answer = tracker.guard(async move {
                generate_design(&assistant, &kind, &desc, &look).await
            });
            loading.set(true);
            error.set(None);

            let task = spawn(async move {
                let Some(result) = answer.await else {
                    tracing::debug!("dropping stale design preview");
                    return;
                };
                match result {
                    Ok(preview) => image.set(Some(preview)),
                    Err(err) => error.set(Some(err.user_message(lang, Action::GenerateDesign))),
                }
                loading.set(false);
            });
            in_flight.set(Some(task));
        }
    };

    let download = move |_| {
        let Some(preview) = image() else {
            return;
        };
        let lang = (state.lang)();
        spawn(async move {
            match download_image(&preview).await {
                Ok(Delivery::Browser) => notice.set(None),
                Ok(Delivery::Saved(path)) => {
                    notice.set(Some(t!(lang, "export-saved", path = path.as_str())))
                }
                Err(err) => {
                    tracing::warn!(%err, "preview download failed");
                    error.set(Some(retry_message(lang, Action::Export)));
                }
            }
        });
    };

    let attach = move |_| {
        if image.peek().is_none() {
            return;
        }
        let lang = (state.lang)();
        state.attachment.set(Some(AttachedFile {
            name: design_file_name(&timestamp_slug()),
            size: None,
        }));
        notice.set(Some(t!(lang, "design-attached")));
        scroll_to("order-section");
    };

    rsx! {
        section { id: "design", class: "section design-studio",
            div { class: "section__header",
                h2 { class: "section__title", {t!(lang, "design-title")} }
                p { class: "section__intro", {t!(lang, "design-intro")} }
            }
            div { class: "design-studio__layout",
                div { class: "design-studio__controls card",
                    label { class: "field",
                        span { class: "field__label", {t!(lang, "design-describe-label")} }
                        textarea {
                            rows: "4",
                            placeholder: t!(lang, "design-describe-placeholder"),
                            value: "{description}",
                            oninput: move |evt| description.set(evt.value()),
                        }
                    }
                    label { class: "field",
                        span { class: "field__label", {t!(lang, "design-type-label")} }
                        select {
                            value: "{design_type}",
                            onchange: move |evt| design_type.set(evt.value()),
                            for kind in DESIGN_TYPES.iter() {
                                option { key: "{kind.id}", value: "{kind.id}", "{kind.label.get(lang)}" }
                            }
                        }
                    }
                    div { class: "field",
                        span { class: "field__label", {t!(lang, "design-style-label")} }
                        div { class: "chip-group",
                            for preset in DESIGN_STYLES.iter() {
                                button {
                                    key: "{preset.id}",
                                    r#type: "button",
                                    class: if style() == preset.id { "chip chip--active" } else { "chip" },
                                    onclick: move |_| style.set(preset.id.to_string()),
                                    "{preset.label.get(lang)}"
                                }
                            }
                        }
                    }
                    button {
                        class: "button button--primary",
                        r#type: "button",
                        disabled: loading(),
                        onclick: generate,
                        if loading() {
                            {t!(lang, "design-generating")}
                        } else {
                            {t!(lang, "design-generate")}
                        }
                    }
                    if let Some(message) = error() {
                        p { class: "form-error", role: "alert", "{message}" }
                    }
                }

                div { class: "design-studio__preview card",
                    if let Some(preview) = image() {
                        img {
                            class: "design-studio__image",
                            src: "{preview.data_url()}",
                            alt: "{description}",
                        }
                        div { class: "design-studio__actions",
                            button {
                                class: "button button--ghost",
                                r#type: "button",
                                onclick: download,
                                {t!(lang, "design-download")}
                            }
                            button {
                                class: "button button--accent",
                                r#type: "button",
                                onclick: attach,
                                {t!(lang, "design-attach")}
                            }
                        }
                    } else {
                        p { class: "design-studio__placeholder", {t!(lang, "design-preview-placeholder")} }
                    }
                    if let Some(message) = notice() {
                        p { class: "form-notice", "{message}" }
                    }
                }
            }
        }
    }
}
