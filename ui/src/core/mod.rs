//! Platform-neutral domain logic: catalog data, pricing, orders and the
//! workflows that talk to external services.

pub mod catalog;
pub mod config;
pub mod contact;
pub mod deeplink;
pub mod design;
pub mod error;
pub mod estimate;
pub mod export;
pub mod format;
pub mod order;
pub mod platform;
pub mod request;
pub mod session;
pub mod storage;
pub mod submission;
