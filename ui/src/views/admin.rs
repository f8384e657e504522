use dioxus::prelude::*;

use crate::core::catalog::service_title;
use crate::core::error::{retry_message, Action};
use crate::core::format::{format_date, format_price, format_revenue};
use crate::core::order::{Order, OrderStatus, OrderSummary};
use crate::i18n::tr;
use crate::state::{use_app_state, use_services};
use crate::t;

/// Every stored order with search and status control.
///
/// Only reachable for admin sessions; everyone else sees the access notice.
#[component]
pub fn AdminPanel() -> Element {
    let state = use_app_state();
    let services = use_services();
    let lang = (state.lang)();
    let session = (state.session)();
    let _revision = (state.orders_revision)();
    let mut query = use_signal(String::new);
    let status_error = use_signal(|| None::<String>);

    if !session.is_admin() {
        return rsx! {
            section { class: "page page-admin",
                p { class: "page__empty", role: "alert", {t!(lang, "admin-access-denied")} }
            }
        };
    }

    let (orders, load_error) = match services.store.load_all() {
        Ok(orders) => (orders, None),
        Err(err) => {
            tracing::warn!(%err, "failed to load orders");
            (Vec::new(), Some(t!(lang, "error-storage")))
        }
    };
    let summary = OrderSummary::of(&orders);
    let needle = query();
    let visible: Vec<Order> = orders
        .into_iter()
        .rev()
        .filter(|order| order.matches(&needle))
        .collect();

    rsx! {
        section { class: "page page-admin",
            header { class: "page__header",
                div {
                    h1 { {t!(lang, "admin-title")} }
                    p { {t!(lang, "admin-intro")} }
                }
                input {
                    class: "admin__search",
                    r#type: "search",
                    placeholder: t!(lang, "admin-search-placeholder"),
                    value: "{needle}",
                    oninput: move |evt| query.set(evt.value()),
                }
            }

            div { class: "stat-grid",
                div { class: "stat-card",
                    span { class: "stat-card__label", {t!(lang, "admin-orders")} }
                    strong { class: "stat-card__value", "{summary.count}" }
                }
                div { class: "stat-card",
                    span { class: "stat-card__label", {t!(lang, "admin-revenue")} }
                    strong { class: "stat-card__value stat-card__value--accent",
                        "{format_revenue(summary.revenue)}"
                    }
                }
            }

            if let Some(message) = load_error {
                p { class: "form-error", role: "alert", "{message}" }
            }
            if let Some(message) = status_error() {
                p { class: "form-error", role: "alert", "{message}" }
            }

            div { class: "card",
                h3 { class: "card__title", {t!(lang, "admin-recent")} }
                if visible.is_empty() {
                    p { class: "page__empty", {t!(lang, "admin-no-data")} }
                } else {
                    table { class: "orders-table orders-table--admin",
                        thead {
                            tr {
                                th { {t!(lang, "col-order-id")} }
                                th { {t!(lang, "col-customer")} }
                                th { {t!(lang, "col-details")} }
                                th { {t!(lang, "col-files")} }
                                th { {t!(lang, "col-amount")} }
                                th { {t!(lang, "col-status")} }
                            }
                        }
                        tbody {
                            for order in visible.iter() {
                                AdminRow {
                                    key: "{order.id}",
                                    order: order.clone(),
                                    status_error,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AdminRow(order: Order, status_error: Signal<Option<String>>) -> Element {
    let mut state = use_app_state();
    let services = use_services();
    let lang = (state.lang)();
    let mut status_error = status_error;

    let change_status = {
        let id = order.id.clone();
        move |evt: FormEvent| {
            let lang = (state.lang)();
            let Some(next) = OrderStatus::parse(&evt.value()) else {
                return;
            };
            match services.store.update_status(&id, next) {
                Ok(_) => {
                    tracing::info!(order = %id, status = %next, "order status changed");
                    status_error.set(None);
                    state.orders_changed();
                }
                Err(err) => {
                    tracing::warn!(order = %id, %err, "status update failed");
                    status_error.set(Some(retry_message(lang, Action::UpdateStatus)));
                }
            }
        }
    };

    let notes = order.notes.as_deref().filter(|n| !n.is_empty());
    let details = format!(
        "{} {} · {} · {}",
        order.specs.quantity,
        t!(lang, "admin-units"),
        tr(lang, order.specs.material.label_key()),
        order.specs.size,
    );

    rsx! {
        tr {
            td {
                div { class: "orders-table__id", "{order.id}" }
                div { class: "orders-table__muted", "{format_date(&order.created_at)}" }
            }
            td { "{order.user_id}" }
            td {
                div { class: "orders-table__strong", "{service_title(&order.service_id, lang)}" }
                div { class: "orders-table__muted", "{details}" }
                if let Some(text) = notes {
                    div { class: "orders-table__notes", "{text}" }
                }
            }
            td {
                if let Some(name) = &order.file_name {
                    span { class: "orders-table__file", "{name}" }
                    if let Some(size) = &order.file_size {
                        span { class: "orders-table__muted", " ({size})" }
                    }
                } else {
                    span { class: "orders-table__muted", {t!(lang, "admin-no-file")} }
                }
            }
            td { class: "orders-table__amount", "{format_price(order.price)}" }
            td {
                select {
                    class: order.status.css_class(),
                    value: "{order.status.as_str()}",
                    onchange: change_status,
                    for status in OrderStatus::ALL {
                        option {
                            key: "{status.as_str()}",
                            value: "{status.as_str()}",
                            selected: status == order.status,
                            {tr(lang, status.label_key())}
                        }
                    }
                }
            }
        }
    }
}
