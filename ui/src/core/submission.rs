//! Order submission: validate, notify the agency, hand off to WhatsApp, and
//! record the order for signed-in customers.
//!
//! Steps run strictly in order and stop at the first failure. Nothing is
//! retried. The deep link and the stored order only happen after the
//! notification was accepted.

use std::collections::BTreeMap;

use api::{ApiError, EmailClient, EmailCredentials};

use super::catalog::find_service;
use super::config::AppConfig;
use super::deeplink::OrderMessage;
use super::error::{ActionError, ValidationError};
use super::estimate::{estimate, Material};
use super::format::format_amount;
use super::order::{Order, OrderSpecs};
use super::session::Session;
use super::storage::{KeyValueStore, OrderStore, StorageError};
use crate::i18n::Language;

pub const NO_FILE: &str = "No file uploaded";

/// Quantity a fresh order form starts at; the estimate only grows past it.
pub const DEFAULT_QUANTITY: i64 = 100;

/// Delivers a rendered notification template (EmailJS in production).
#[allow(async_fn_in_trait)]
pub trait OrderNotifier {
    async fn notify(
        &self,
        credentials: &EmailCredentials,
        params: &BTreeMap<String, String>,
    ) -> Result<(), ApiError>;
}

impl OrderNotifier for EmailClient {
    async fn notify(
        &self,
        credentials: &EmailCredentials,
        params: &BTreeMap<String, String>,
    ) -> Result<(), ApiError> {
        self.send(credentials, params).await
    }
}

/// Opens a URL in a new browsing context. Fire and forget.
pub trait LinkOpener {
    fn open(&self, url: &str);
}

/// A file picked in the form, or an attached design preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachedFile {
    pub name: String,
    /// Human label such as `1.20 MB`.
    pub size: Option<String>,
}

/// Current contents of the order form.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub service_id: Option<String>,
    pub quantity: i64,
    pub size: String,
    pub material: Material,
    pub notes: String,
    pub file: Option<AttachedFile>,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            service_id: None,
            quantity: DEFAULT_QUANTITY,
            size: "Standard".into(),
            material: Material::Premium,
            notes: String::new(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionReceipt {
    pub price: f64,
    pub whatsapp_link: String,
    /// The stored order; `None` for guests or when storing failed.
    pub order: Option<Order>,
    /// Set when the notification went out but the local record did not.
    pub storage_error: Option<StorageError>,
}

pub struct OrderWorkflow<'a, N, L, S> {
    pub config: &'a AppConfig,
    pub notifier: &'a N,
    pub opener: &'a L,
    pub store: &'a OrderStore<S>,
}

impl<N, L, S> OrderWorkflow<'_, N, L, S>
where
    N: OrderNotifier,
    L: LinkOpener,
    S: KeyValueStore,
{
    pub async fn submit(
        &self,
        draft: &OrderDraft,
        session: &Session,
        lang: Language,
    ) -> Result<SubmissionReceipt, ActionError> {
        let service_id = draft
            .service_id
            .as_deref()
            .ok_or(ValidationError::MissingService)?;
        let service = find_service(service_id).ok_or(ValidationError::MissingService)?;
        if draft.quantity <= 0 {
            return Err(ValidationError::InvalidQuantity.into());
        }
        let price = estimate(service.base_price, draft.quantity, draft.material)
            .map_err(|_| ValidationError::InvalidQuantity)?;

        let credentials = self.config.order_email()?;

        let service_name = service.title.get(lang);
        let (customer_name, customer_email) = session.identity();
        let file_name = draft
            .file
            .as_ref()
            .map(|file| file.name.as_str())
            .unwrap_or(NO_FILE);
        let estimated_price = format_amount(price);

        let params: BTreeMap<String, String> = [
            ("service_name", service_name.to_string()),
            ("quantity", draft.quantity.to_string()),
            ("material", draft.material.as_str().to_string()),
            ("notes", draft.notes.clone()),
            ("estimated_price", estimated_price.clone()),
            ("file_name", file_name.to_string()),
            ("customer_name", customer_name.to_string()),
            ("customer_email", customer_email.to_string()),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        if let Err(err) = self.notifier.notify(&credentials, &params).await {
            tracing::error!(%err, service = service.id, "order notification failed");
            return Err(err.into());
        }

        let message = OrderMessage {
            service_name,
            quantity: draft.quantity,
            material: draft.material.as_str(),
            estimated_price: &estimated_price,
            notes: &draft.notes,
            file_name,
            customer_name,
            customer_email,
        };
        let whatsapp_link = message.link();
        self.opener.open(&whatsapp_link);

        let mut receipt = SubmissionReceipt {
            price,
            whatsapp_link,
            order: None,
            storage_error: None,
        };

        if let Some(user) = session.user() {
            let mut order = Order::new_pending(
                user.id.clone(),
                service.id,
                OrderSpecs {
                    size: draft.size.clone(),
                    quantity: draft.quantity,
                    material: draft.material,
                },
                price,
            );
            order.file_name = draft.file.as_ref().map(|file| file.name.clone());
            order.file_size = draft.file.as_ref().and_then(|file| file.size.clone());
            order.notes = Some(draft.notes.clone()).filter(|notes| !notes.trim().is_empty());

            match self.store.append(order.clone()) {
                Ok(()) => {
                    tracing::info!(id = %order.id, user = %user.id, "order recorded");
                    receipt.order = Some(order);
                }
                Err(err) => {
                    tracing::error!(%err, "order was sent but could not be stored locally");
                    receipt.storage_error = Some(err);
                }
            }
        }

        Ok(receipt)
    }
}
