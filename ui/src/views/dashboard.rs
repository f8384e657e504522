use dioxus::prelude::*;

use crate::core::catalog::service_title;
use crate::core::error::{retry_message, Action};
use crate::core::export::{export_orders, Delivery};
use crate::core::format::{format_date, format_price};
use crate::core::order::{Order, OrderStatus, OrderSummary};
use crate::i18n::tr;
use crate::state::{use_app_state, use_services};
use crate::t;

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working,
    Done(String),
    Error(String),
}

/// A signed-in customer's own orders.
#[component]
pub fn Dashboard() -> Element {
    let state = use_app_state();
    let services = use_services();
    let lang = (state.lang)();
    let session = (state.session)();
    let _revision = (state.orders_revision)();
    let mut export_status = use_signal(|| ExportStatus::Idle);

    let Some(user) = session.user().cloned() else {
        return rsx! {
            section { class: "page page-dashboard",
                p { class: "page__empty", {t!(lang, "dashboard-sign-in-required")} }
            }
        };
    };

    let (orders, load_error) = match services.store.orders_for(&user.id) {
        Ok(orders) => (orders, None),
        Err(err) => {
            tracing::warn!(%err, "failed to load orders");
            (Vec::new(), Some(t!(lang, "error-storage")))
        }
    };
    let summary = OrderSummary::of(&orders);

    let export = {
        let orders = orders.clone();
        move |_| {
            if matches!(*export_status.peek(), ExportStatus::Working) {
                return;
            }
            let lang = (state.lang)();
            let orders = orders.clone();
            export_status.set(ExportStatus::Working);
            spawn(async move {
                let status = match export_orders(&orders, lang).await {
                    Ok(Delivery::Browser) => ExportStatus::Done(t!(lang, "export-started")),
                    Ok(Delivery::Saved(path)) => {
                        ExportStatus::Done(t!(lang, "export-saved", path = path.as_str()))
                    }
                    Err(err) => {
                        tracing::warn!(%err, "order export failed");
                        ExportStatus::Error(retry_message(lang, Action::Export))
                    }
                };
                export_status.set(status);
            });
        }
    };

    let feedback = match export_status() {
        ExportStatus::Idle | ExportStatus::Working => None,
        ExportStatus::Done(message) => Some(("form-notice", message)),
        ExportStatus::Error(message) => Some(("form-error", message)),
    };

    rsx! {
        section { class: "page page-dashboard",
            header { class: "page__header",
                div {
                    h1 { {t!(lang, "dashboard-welcome", name = user.name.as_str())} }
                    p { {t!(lang, "dashboard-intro")} }
                }
            }

            div { class: "stat-grid",
                div { class: "stat-card",
                    span { class: "stat-card__label", {t!(lang, "dashboard-total")} }
                    strong { class: "stat-card__value", "{summary.count}" }
                }
                div { class: "stat-card",
                    span { class: "stat-card__label", {t!(lang, "dashboard-ready")} }
                    strong { class: "stat-card__value stat-card__value--accent", "{summary.ready}" }
                }
            }

            if let Some(message) = load_error {
                p { class: "form-error", role: "alert", "{message}" }
            }

            div { class: "card",
                div { class: "card__header",
                    h3 { class: "card__title", {t!(lang, "dashboard-my-orders")} }
                    button {
                        class: "button button--ghost",
                        r#type: "button",
                        disabled: orders.is_empty() || export_status() == ExportStatus::Working,
                        onclick: export,
                        {t!(lang, "dashboard-export")}
                    }
                }
                if let Some((class, message)) = feedback {
                    p { class: "{class}", "{message}" }
                }
                if orders.is_empty() {
                    p { class: "page__empty", {t!(lang, "dashboard-empty")} }
                } else {
                    table { class: "orders-table",
                        thead {
                            tr {
                                th { {t!(lang, "col-order-id")} }
                                th { {t!(lang, "col-service")} }
                                th { {t!(lang, "col-date")} }
                                th { {t!(lang, "col-amount")} }
                                th { {t!(lang, "col-status")} }
                            }
                        }
                        tbody {
                            for order in orders.iter() {
                                OrderRow { key: "{order.id}", order: order.clone() }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OrderRow(order: Order) -> Element {
    let state = use_app_state();
    let lang = (state.lang)();
    let status: OrderStatus = order.status;

    rsx! {
        tr {
            td { class: "orders-table__id", "{order.id}" }
            td { "{service_title(&order.service_id, lang)}" }
            td { "{format_date(&order.created_at)}" }
            td { class: "orders-table__amount", "{format_price(order.price)}" }
            td {
                span { class: status.css_class(), {tr(lang, status.label_key())} }
            }
        }
    }
}
