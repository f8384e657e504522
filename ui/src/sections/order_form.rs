use dioxus::prelude::*;

use crate::core::catalog::{find_service, SERVICES, SIZES};
use crate::core::design::creative_ideas;
use crate::core::error::Action;
use crate::core::estimate::{estimate_for, Material};
use crate::core::format::{format_file_size, format_price};
use crate::core::platform::WindowOpener;
use crate::core::request::RequestTracker;
use crate::core::submission::{AttachedFile, OrderDraft, OrderWorkflow, SubmissionReceipt};
use crate::i18n::tr;
use crate::sections::services::icon_glyph;
use crate::state::{use_app_state, use_services};
use crate::t;

#[component]
pub fn OrderForm() -> Element {
    let mut state = use_app_state();
    let services = use_services();
    let lang = (state.lang)();

    let mut draft = use_signal(OrderDraft::default);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut receipt = use_signal(|| None::<SubmissionReceipt>);

    let mut ideas = use_signal(|| None::<String>);
    let mut ideas_loading = use_signal(|| false);
    let mut ideas_task = use_signal(|| None::<Task>);
    let tracker = use_hook(RequestTracker::new);

    let current = draft();
    let selected = current.service_id.as_deref().and_then(find_service);
    let estimate = estimate_for(selected, current.quantity, current.material);
    let attachment = (state.attachment)();

    let on_file = move |evt: FormEvent| async move {
        let Some(engine) = evt.files() else {
            return;
        };
        let Some(name) = engine.files().into_iter().next() else {
            return;
        };
        let size = engine.file_size(&name).await.map(format_file_size);
        tracing::debug!(file = %name, "design file selected");
        state.attachment.set(Some(AttachedFile { name, size }));
    };

    let fetch_ideas = {
        let services = services.clone();
        let tracker = tracker.clone();
        move |_| {
            let lang = (state.lang)();
            let Some(service) = draft.peek().service_id.as_deref().and_then(find_service) else {
                return;
            };
            let assistant = match services.assistant() {
                Ok(client) => client.clone(),
                Err(err) => {
                    ideas.set(Some(err.user_message(lang, Action::SuggestIdeas)));
                    return;
                }
            };
            if let Some(previous) = ideas_task.take() {
                previous.cancel();
            }
            let answer =
                tracker.guard(async move { creative_ideas(&assistant, service, lang).await });
            ideas_loading.set(true);

            let task = spawn(async move {
                let Some(result) = answer.await else {
                    tracing::debug!("dropping ideas for a superseded request");
                    return;
                };
                match result {
                    Ok(text) => ideas.set(Some(text)),
                    Err(err) => ideas.set(Some(err.user_message(lang, Action::SuggestIdeas))),
                }
                ideas_loading.set(false);
            });
            ideas_task.set(Some(task));
        }
    };

    let submit = {
        let services = services.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            if submitting() {
                return;
            }
            let lang = (state.lang)();
            let session = (state.session)();
            let mut order = draft();
            order.file = (state.attachment)();
            let services = services.clone();
            submitting.set(true);
            error.set(None);

            spawn(async move {
                let workflow = OrderWorkflow {
                    config: &services.config,
                    notifier: &services.email,
                    opener: &WindowOpener,
                    store: &services.store,
                };
                match workflow.submit(&order, &session, lang).await {
                    Ok(done) => {
                        if done.order.is_some() {
                            state.orders_changed();
                        }
                        receipt.set(Some(done));
                    }
                    Err(err) => error.set(Some(err.user_message(lang, Action::SubmitOrder))),
                }
                submitting.set(false);
            });
        }
    };

    // Ideas belong to the service they were asked for; drop any answer still
    // on its way when the selection goes away.
    let drop_ideas = {
        let tracker = tracker.clone();
        move || {
            tracker.invalidate();
            if let Some(pending) = ideas_task.take() {
                pending.cancel();
            }
            ideas_loading.set(false);
            ideas.set(None);
        }
    };

    let reset = {
        let mut drop_ideas = drop_ideas.clone();
        move |_| {
            drop_ideas();
            receipt.set(None);
            draft.set(OrderDraft::default());
            state.attachment.set(None);
        }
    };

    if let Some(done) = receipt() {
        return rsx! {
            section { id: "order-section", class: "section order order--done",
                div { class: "order-success card",
                    span { class: "order-success__icon", aria_hidden: "true", "✓" }
                    h2 { {t!(lang, "order-success")} }
                    p { {t!(lang, "order-success-detail")} }
                    p { class: "order-success__price", "{format_price(done.price)}" }
                    if done.storage_error.is_some() {
                        p { class: "form-error", role: "alert", {t!(lang, "error-storage")} }
                    }
                    button {
                        class: "button button--primary",
                        r#type: "button",
                        onclick: reset,
                        {t!(lang, "order-again")}
                    }
                }
            }
        };
    }

    let total_label = match &estimate {
        Ok(total) => format_price(*total),
        Err(_) => "—".to_string(),
    };
    let upload_hint = match &attachment {
        Some(file) => rsx! {
            "{file.name}"
            if let Some(size) = &file.size {
                span { class: "upload__size", " ({size})" }
            }
        },
        None => rsx! { {t!(lang, "order-upload-hint")} },
    };
    let service_label = selected
        .map(|s| s.title.get(lang).to_string())
        .unwrap_or_else(|| "—".to_string());

    rsx! {
        section { id: "order-section", class: "section order",
            div { class: "section__header",
                h2 { class: "section__title", {t!(lang, "order-title")} }
                p { class: "section__intro", {t!(lang, "order-intro")} }
            }
            form { class: "order__layout", onsubmit: submit,
                div { class: "order__main",
                    div { class: "card",
                        h3 { class: "card__title", {t!(lang, "order-select-service")} }
                        div { class: "order__services",
                            for service in SERVICES.iter() {
                                button {
                                    key: "{service.id}",
                                    r#type: "button",
                                    class: if current.service_id.as_deref() == Some(service.id) { "service-option service-option--active" } else { "service-option" },
                                    onclick: {
                                        let mut drop_ideas = drop_ideas.clone();
                                        move |_| {
                                            if draft.peek().service_id.as_deref() == Some(service.id) {
                                                return;
                                            }
                                            drop_ideas();
                                            draft.write().service_id = Some(service.id.to_string());
                                        }
                                    },
                                    span { class: "service-option__icon", aria_hidden: "true", "{icon_glyph(service.icon)}" }
                                    span { class: "service-option__title", "{service.title.get(lang)}" }
                                    span { class: "service-option__price", "{format_price(service.base_price)}" }
                                }
                            }
                        }
                        if selected.is_some() {
                            button {
                                class: "button button--ghost order__ideas",
                                r#type: "button",
                                disabled: ideas_loading(),
                                onclick: fetch_ideas,
                                if ideas_loading() {
                                    {t!(lang, "order-ideas-loading")}
                                } else {
                                    {t!(lang, "order-ideas")}
                                }
                            }
                        }
                        if let Some(text) = ideas() {
                            p { class: "order__ideas-text", "{text}" }
                        }
                    }

                    div { class: "card",
                        h3 { class: "card__title", {t!(lang, "order-specs")} }
                        div { class: "order__specs",
                            label { class: "field",
                                span { class: "field__label", {t!(lang, "order-size")} }
                                select {
                                    value: "{current.size}",
                                    onchange: move |evt| draft.write().size = evt.value(),
                                    for (value, key) in SIZES.iter() {
                                        option { key: "{value}", value: "{value}", {tr(lang, key)} }
                                    }
                                }
                            }
                            label { class: "field",
                                span { class: "field__label", {t!(lang, "order-quantity")} }
                                input {
                                    r#type: "number",
                                    min: "1",
                                    value: "{current.quantity}",
                                    oninput: move |evt| {
                                        draft.write().quantity = evt.value().trim().parse().unwrap_or(0);
                                    },
                                }
                            }
                            label { class: "field",
                                span { class: "field__label", {t!(lang, "order-material")} }
                                select {
                                    value: "{current.material.as_str()}",
                                    onchange: move |evt| {
                                        if let Some(material) = Material::parse(&evt.value()) {
                                            draft.write().material = material;
                                        }
                                    },
                                    for material in Material::ALL {
                                        option {
                                            key: "{material.as_str()}",
                                            value: "{material.as_str()}",
                                            {tr(lang, material.label_key())}
                                        }
                                    }
                                }
                            }
                        }
                        label { class: "field upload",
                            span { class: "field__label", {t!(lang, "order-upload")} }
                            input {
                                class: "upload__input",
                                r#type: "file",
                                accept: ".pdf,.ai,.psd,.jpg,.jpeg,.png",
                                onchange: on_file,
                            }
                            span { class: "upload__hint", {upload_hint} }
                        }
                        label { class: "field",
                            span { class: "field__label", {t!(lang, "order-notes")} }
                            textarea {
                                rows: "4",
                                placeholder: t!(lang, "order-notes-placeholder"),
                                value: "{current.notes}",
                                oninput: move |evt| draft.write().notes = evt.value(),
                            }
                        }
                    }
                }

                aside { class: "order__summary card card--accent",
                    h3 { class: "card__title", {t!(lang, "order-estimate")} }
                    dl { class: "order__totals",
                        dt { {t!(lang, "order-service")} }
                        dd { "{service_label}" }
                        dt { {t!(lang, "order-quantity")} }
                        dd { "{current.quantity}" }
                        dt { {t!(lang, "order-material")} }
                        dd { {tr(lang, current.material.label_key())} }
                    }
                    div { class: "order__total",
                        span { {t!(lang, "order-total")} }
                        strong { "{total_label}" }
                    }
                    if estimate.is_err() {
                        p { class: "form-error", {t!(lang, "error-quantity")} }
                    }
                    p { class: "order__disclaimer", {t!(lang, "order-estimate-disclaimer")} }
                    button {
                        class: "button button--primary order__submit",
                        r#type: "submit",
                        disabled: submitting() || selected.is_none() || estimate.is_err(),
                        if submitting() {
                            {t!(lang, "order-submitting")}
                        } else {
                            {t!(lang, "order-submit")}
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
