//! Persisted order records.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::estimate::Material;
use super::format::now_rfc3339;

const ID_PREFIX: &str = "ORD-";
const ID_LEN: usize = 9;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Printing,
    Ready,
    Completed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Printing,
        OrderStatus::Ready,
        OrderStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Printing => "Printing",
            OrderStatus::Ready => "Ready",
            OrderStatus::Completed => "Completed",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            OrderStatus::Pending => "status-pending",
            OrderStatus::Processing => "status-processing",
            OrderStatus::Printing => "status-printing",
            OrderStatus::Ready => "status-ready",
            OrderStatus::Completed => "status-completed",
        }
    }

    /// CSS modifier for the status pill.
    pub fn css_class(self) -> &'static str {
        match self {
            OrderStatus::Pending => "status-pill status-pill--pending",
            OrderStatus::Processing => "status-pill status-pill--processing",
            OrderStatus::Printing => "status-pill status-pill--printing",
            OrderStatus::Ready => "status-pill status-pill--ready",
            OrderStatus::Completed => "status-pill status-pill--completed",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSpecs {
    pub size: String,
    pub quantity: i64,
    pub material: Material,
}

/// One order as stored under the `orders` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub service_id: String,
    pub specs: OrderSpecs,
    pub price: f64,
    #[serde(default)]
    pub status: OrderStatus,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Order {
    /// Fresh order in status `Pending`, stamped with the current time.
    pub fn new_pending(
        user_id: impl Into<String>,
        service_id: impl Into<String>,
        specs: OrderSpecs,
        price: f64,
    ) -> Self {
        Self {
            id: new_order_id(),
            user_id: user_id.into(),
            service_id: service_id.into(),
            specs,
            price,
            status: OrderStatus::Pending,
            created_at: now_rfc3339(),
            file_name: None,
            file_size: None,
            notes: None,
        }
    }

    /// Case-insensitive match against id, user, file name and notes.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [
            Some(self.id.as_str()),
            Some(self.user_id.as_str()),
            self.file_name.as_deref(),
            self.notes.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// `ORD-` followed by nine uppercase alphanumerics.
pub fn new_order_id() -> String {
    let raw = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("{ID_PREFIX}{}", &raw[..ID_LEN])
}

/// Aggregates shown on the dashboard cards.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrderSummary {
    pub count: usize,
    pub ready: usize,
    pub revenue: f64,
}

impl OrderSummary {
    pub fn of<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        orders.into_iter().fold(Self::default(), |mut acc, order| {
            acc.count += 1;
            if order.status == OrderStatus::Ready {
                acc.ready += 1;
            }
            acc.revenue += order.price;
            acc
        })
    }
}
