//! EmailJS REST client.
//!
//! EmailJS renders a server-side template from a flat map of string fields and
//! forwards the result to the agency inbox. The browser SDK is a wrapper over
//! one JSON endpoint, which is all we need:
//!
//! ```text
//! POST https://api.emailjs.com/api/v1.0/email/send
//! { "service_id", "template_id", "user_id", "template_params": { .. } }
//! ```

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::ApiError;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// The three opaque identifiers EmailJS needs for one send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct EmailClient {
    http: reqwest::Client,
    endpoint: String,
}

impl Default for EmailClient {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailClient {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Render `template_id` with `params` and deliver it. Success/failure only.
    pub async fn send(
        &self,
        credentials: &EmailCredentials,
        params: &BTreeMap<String, String>,
    ) -> Result<(), ApiError> {
        let body = build_request(credentials, params);
        tracing::debug!(
            template = %credentials.template_id,
            fields = params.len(),
            "sending email template"
        );

        let response = self.http.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), %body, "email delivery rejected");
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

fn build_request<'a>(
    credentials: &'a EmailCredentials,
    params: &'a BTreeMap<String, String>,
) -> SendRequest<'a> {
    SendRequest {
        service_id: &credentials.service_id,
        template_id: &credentials.template_id,
        user_id: &credentials.public_key,
        template_params: params,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn credentials() -> EmailCredentials {
        EmailCredentials {
            service_id: "service_abc".into(),
            template_id: "template_order".into(),
            public_key: "pk_123".into(),
        }
    }

    #[test]
    fn request_body_matches_emailjs_shape() {
        let creds = credentials();
        let mut params = BTreeMap::new();
        params.insert("customer_name".to_string(), "Guest".to_string());
        params.insert("quantity".to_string(), "150".to_string());

        let value = serde_json::to_value(build_request(&creds, &params)).unwrap();
        assert_eq!(
            value,
            json!({
                "service_id": "service_abc",
                "template_id": "template_order",
                "user_id": "pk_123",
                "template_params": {
                    "customer_name": "Guest",
                    "quantity": "150"
                }
            })
        );
    }

    #[test]
    fn default_client_targets_emailjs() {
        assert_eq!(EmailClient::default().endpoint(), DEFAULT_ENDPOINT);
        let custom = EmailClient::with_endpoint("http://localhost:9999/send");
        assert_eq!(custom.endpoint(), "http://localhost:9999/send");
    }
}
