//! Failures of user-triggered actions and their localized messages.

use api::ApiError;
use thiserror::Error;

use crate::i18n::Language;
use crate::t;

/// The user action an error belongs to; picks the retry message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SubmitOrder,
    SendContact,
    GenerateDesign,
    SuggestIdeas,
    UpdateStatus,
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no service selected")]
    MissingService,
    #[error("quantity must be at least 1")]
    InvalidQuantity,
    #[error("design description is empty")]
    EmptyDescription,
    #[error("required fields are empty")]
    MissingFields,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("missing configuration: {0}")]
    ConfigurationMissing(&'static str),
    #[error("external call failed: {0}")]
    ExternalCallFailed(String),
    #[error("external call returned no result")]
    NoResult,
}

impl From<ApiError> for ActionError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NoResult => ActionError::NoResult,
            other => ActionError::ExternalCallFailed(other.to_string()),
        }
    }
}

impl ValidationError {
    pub fn user_message(self, lang: Language) -> String {
        match self {
            ValidationError::MissingService => t!(lang, "error-select-service"),
            ValidationError::InvalidQuantity => t!(lang, "error-quantity"),
            ValidationError::EmptyDescription => t!(lang, "error-describe-idea"),
            ValidationError::MissingFields => t!(lang, "error-required-fields"),
        }
    }
}

impl ActionError {
    /// Display text for the view that triggered `action`.
    pub fn user_message(&self, lang: Language, action: Action) -> String {
        match self {
            ActionError::Validation(err) => err.user_message(lang),
            ActionError::ConfigurationMissing(_) => t!(lang, "error-config-missing"),
            ActionError::ExternalCallFailed(_) | ActionError::NoResult => {
                retry_message(lang, action)
            }
        }
    }
}

pub fn retry_message(lang: Language, action: Action) -> String {
    match action {
        Action::SubmitOrder => t!(lang, "error-order-failed"),
        Action::SendContact => t!(lang, "error-contact-failed"),
        Action::GenerateDesign => t!(lang, "error-design-failed"),
        Action::SuggestIdeas => t!(lang, "error-suggestion-failed"),
        Action::UpdateStatus => t!(lang, "error-status-failed"),
        Action::Export => t!(lang, "error-export-failed"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_result_reads_like_a_failed_call() {
        let failed = ActionError::ExternalCallFailed("boom".into());
        let empty = ActionError::NoResult;
        for lang in Language::ALL {
            assert_eq!(
                failed.user_message(lang, Action::GenerateDesign),
                empty.user_message(lang, Action::GenerateDesign)
            );
        }
        assert_eq!(
            empty.user_message(Language::English, Action::SubmitOrder),
            "Failed to submit order. Please try again."
        );
    }

    #[test]
    fn missing_configuration_has_its_own_message() {
        let err = ActionError::ConfigurationMissing("HAWEYA_EMAILJS_SERVICE_ID");
        let en = err.user_message(Language::English, Action::SendContact);
        assert!(en.starts_with("This feature is not configured"));
        let ar = err.user_message(Language::Arabic, Action::SendContact);
        assert_ne!(en, ar);
    }

    #[test]
    fn api_errors_map_onto_the_taxonomy() {
        assert_eq!(ActionError::from(ApiError::NoResult), ActionError::NoResult);
        let status = ApiError::Status {
            status: 500,
            body: "oops".into(),
        };
        assert!(matches!(
            ActionError::from(status),
            ActionError::ExternalCallFailed(_)
        ));
    }

    #[test]
    fn validation_messages_are_localized() {
        let err = ActionError::from(ValidationError::MissingService);
        assert_eq!(
            err.user_message(Language::English, Action::SubmitOrder),
            "Please select a service first."
        );
        assert_eq!(
            err.user_message(Language::Arabic, Action::SubmitOrder),
            "يرجى اختيار خدمة أولاً."
        );
    }
}
