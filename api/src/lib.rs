//! HTTP clients for the hosted services the site talks to.
//!
//! - [`email`]: EmailJS REST endpoint (order notifications, contact messages).
//! - [`genai`]: Gemini `generateContent` endpoint (copy suggestions, design previews).
//!
//! Both clients are single request/response calls: no retry, no caching, no
//! streaming. Callers decide what to do with a failure.

pub mod email;
pub mod error;
pub mod genai;

pub use email::{EmailClient, EmailCredentials};
pub use error::ApiError;
pub use genai::{GenAiClient, GeneratedImage};
