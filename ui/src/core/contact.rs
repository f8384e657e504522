//! Contact form delivery through the general email template.

use std::collections::BTreeMap;

use super::config::AppConfig;
use super::error::{ActionError, ValidationError};
use super::submission::OrderNotifier;

/// How long the "message sent" confirmation stays up.
pub const CONFIRMATION_MS: u64 = 5_000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactMessage {
    pub user_name: String,
    pub user_email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [&self.user_name, &self.user_email, &self.subject, &self.message];
        if fields.iter().any(|field| field.trim().is_empty()) {
            return Err(ValidationError::MissingFields);
        }
        Ok(())
    }

    fn params(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            ("user_name".to_string(), self.user_name.trim().to_string()),
            ("user_email".to_string(), self.user_email.trim().to_string()),
            ("subject".to_string(), self.subject.trim().to_string()),
            ("message".to_string(), self.message.clone()),
        ])
    }
}

pub async fn send_contact(
    config: &AppConfig,
    notifier: &impl OrderNotifier,
    message: &ContactMessage,
) -> Result<(), ActionError> {
    message.validate()?;
    let credentials = config.contact_email()?;
    notifier
        .notify(&credentials, &message.params())
        .await
        .map_err(|err| {
            tracing::error!(%err, "contact message failed");
            ActionError::from(err)
        })?;
    tracing::info!("contact message sent");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use api::{ApiError, EmailCredentials};
    use futures::executor::block_on;

    use super::*;

    #[derive(Default)]
    struct Outbox {
        sent: RefCell<Vec<(String, BTreeMap<String, String>)>>,
        reject: bool,
    }

    impl OrderNotifier for Outbox {
        async fn notify(
            &self,
            credentials: &EmailCredentials,
            params: &BTreeMap<String, String>,
        ) -> Result<(), ApiError> {
            self.sent
                .borrow_mut()
                .push((credentials.template_id.clone(), params.clone()));
            if self.reject {
                Err(ApiError::Status {
                    status: 400,
                    body: "bad template".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn config() -> AppConfig {
        AppConfig {
            emailjs_service_id: Some("svc".into()),
            emailjs_template_id: Some("general".into()),
            emailjs_order_template_id: Some("orders".into()),
            emailjs_public_key: Some("pk".into()),
            ..AppConfig::default()
        }
    }

    fn message() -> ContactMessage {
        ContactMessage {
            user_name: "Salma".into(),
            user_email: "salma@example.com".into(),
            subject: "Banners".into(),
            message: "Need 3 banners".into(),
        }
    }

    #[test]
    fn uses_general_template_and_form_fields() {
        let outbox = Outbox::default();
        block_on(send_contact(&config(), &outbox, &message())).unwrap();
        let sent = outbox.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "general");
        assert_eq!(sent[0].1["user_name"], "Salma");
        assert_eq!(sent[0].1["user_email"], "salma@example.com");
        assert_eq!(sent[0].1["subject"], "Banners");
        assert_eq!(sent[0].1["message"], "Need 3 banners");
    }

    #[test]
    fn blank_fields_are_rejected_before_sending() {
        let outbox = Outbox::default();
        let mut msg = message();
        msg.subject = "   ".into();
        assert_eq!(
            block_on(send_contact(&config(), &outbox, &msg)),
            Err(ActionError::Validation(ValidationError::MissingFields))
        );
        assert!(outbox.sent.borrow().is_empty());
    }

    #[test]
    fn rejection_is_an_external_failure() {
        let outbox = Outbox {
            reject: true,
            ..Outbox::default()
        };
        let err = block_on(send_contact(&config(), &outbox, &message())).unwrap_err();
        assert!(matches!(err, ActionError::ExternalCallFailed(_)));
    }

    #[test]
    fn unconfigured_email_sends_nothing() {
        let outbox = Outbox::default();
        let err = block_on(send_contact(&AppConfig::default(), &outbox, &message())).unwrap_err();
        assert!(matches!(err, ActionError::ConfigurationMissing(_)));
        assert!(outbox.sent.borrow().is_empty());
    }
}
