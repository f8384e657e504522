//! Site configuration.
//!
//! Desktop builds read the environment at startup. The web build has no
//! process environment, so the same variables are captured at compile time.

use api::EmailCredentials;

use super::error::ActionError;

pub const EMAILJS_SERVICE_ID: &str = "HAWEYA_EMAILJS_SERVICE_ID";
pub const EMAILJS_TEMPLATE_ID: &str = "HAWEYA_EMAILJS_TEMPLATE_ID";
pub const EMAILJS_ORDER_TEMPLATE_ID: &str = "HAWEYA_EMAILJS_ORDER_TEMPLATE_ID";
pub const EMAILJS_PUBLIC_KEY: &str = "HAWEYA_EMAILJS_PUBLIC_KEY";
pub const GEMINI_API_KEY: &str = "HAWEYA_GEMINI_API_KEY";
pub const DEMO_LOGIN: &str = "HAWEYA_DEMO_LOGIN";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub emailjs_service_id: Option<String>,
    /// General template (contact form, and orders when no order template is set).
    pub emailjs_template_id: Option<String>,
    pub emailjs_order_template_id: Option<String>,
    pub emailjs_public_key: Option<String>,
    pub gemini_api_key: Option<String>,
    /// Show the demo customer/admin sign-in switch.
    pub demo_login: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let config = Self::from_lookup(env_value);
        tracing::info!(
            email = config.emailjs_service_id.is_some(),
            genai = config.gemini_api_key.is_some(),
            demo_login = config.demo_login,
            "configuration loaded"
        );
        config
    }

    /// Build from any name → value source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        Self {
            emailjs_service_id: get(EMAILJS_SERVICE_ID),
            emailjs_template_id: get(EMAILJS_TEMPLATE_ID),
            emailjs_order_template_id: get(EMAILJS_ORDER_TEMPLATE_ID),
            emailjs_public_key: get(EMAILJS_PUBLIC_KEY),
            gemini_api_key: get(GEMINI_API_KEY),
            demo_login: get(DEMO_LOGIN).is_some_and(|value| is_truthy(&value)),
        }
    }

    /// Credentials for order notifications; the order template falls back to
    /// the general one.
    pub fn order_email(&self) -> Result<EmailCredentials, ActionError> {
        let template = self
            .emailjs_order_template_id
            .as_ref()
            .or(self.emailjs_template_id.as_ref());
        self.credentials(template, EMAILJS_TEMPLATE_ID)
    }

    /// Credentials for the contact form.
    pub fn contact_email(&self) -> Result<EmailCredentials, ActionError> {
        self.credentials(self.emailjs_template_id.as_ref(), EMAILJS_TEMPLATE_ID)
    }

    pub fn genai_key(&self) -> Result<&str, ActionError> {
        self.gemini_api_key
            .as_deref()
            .ok_or(ActionError::ConfigurationMissing(GEMINI_API_KEY))
    }

    fn credentials(
        &self,
        template: Option<&String>,
        template_var: &'static str,
    ) -> Result<EmailCredentials, ActionError> {
        let service_id = self
            .emailjs_service_id
            .clone()
            .ok_or(ActionError::ConfigurationMissing(EMAILJS_SERVICE_ID))?;
        let template_id = template
            .cloned()
            .ok_or(ActionError::ConfigurationMissing(template_var))?;
        let public_key = self
            .emailjs_public_key
            .clone()
            .ok_or(ActionError::ConfigurationMissing(EMAILJS_PUBLIC_KEY))?;
        Ok(EmailCredentials {
            service_id,
            template_id,
            public_key,
        })
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

#[cfg(target_arch = "wasm32")]
fn env_value(name: &str) -> Option<String> {
    let baked = match name {
        EMAILJS_SERVICE_ID => option_env!("HAWEYA_EMAILJS_SERVICE_ID"),
        EMAILJS_TEMPLATE_ID => option_env!("HAWEYA_EMAILJS_TEMPLATE_ID"),
        EMAILJS_ORDER_TEMPLATE_ID => option_env!("HAWEYA_EMAILJS_ORDER_TEMPLATE_ID"),
        EMAILJS_PUBLIC_KEY => option_env!("HAWEYA_EMAILJS_PUBLIC_KEY"),
        GEMINI_API_KEY => option_env!("HAWEYA_GEMINI_API_KEY"),
        DEMO_LOGIN => option_env!("HAWEYA_DEMO_LOGIN"),
        _ => None,
    };
    baked.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn order_template_falls_back_to_general_template() {
        let cfg = config(&[
            (EMAILJS_SERVICE_ID, "svc"),
            (EMAILJS_TEMPLATE_ID, "general"),
            (EMAILJS_PUBLIC_KEY, "pk"),
        ]);
        assert_eq!(cfg.order_email().unwrap().template_id, "general");

        let cfg = config(&[
            (EMAILJS_SERVICE_ID, "svc"),
            (EMAILJS_TEMPLATE_ID, "general"),
            (EMAILJS_ORDER_TEMPLATE_ID, "orders"),
            (EMAILJS_PUBLIC_KEY, "pk"),
        ]);
        let creds = cfg.order_email().unwrap();
        assert_eq!(creds.template_id, "orders");
        assert_eq!(creds.public_key, "pk");
        assert_eq!(cfg.contact_email().unwrap().template_id, "general");
    }

    #[test]
    fn empty_values_count_as_missing() {
        let cfg = config(&[
            (EMAILJS_SERVICE_ID, "  "),
            (EMAILJS_TEMPLATE_ID, "general"),
            (EMAILJS_PUBLIC_KEY, "pk"),
            (GEMINI_API_KEY, ""),
        ]);
        assert_eq!(
            cfg.order_email(),
            Err(ActionError::ConfigurationMissing(EMAILJS_SERVICE_ID))
        );
        assert!(cfg.genai_key().is_err());
    }

    #[test]
    fn missing_public_key_is_reported() {
        let cfg = config(&[(EMAILJS_SERVICE_ID, "svc"), (EMAILJS_TEMPLATE_ID, "t")]);
        assert_eq!(
            cfg.contact_email(),
            Err(ActionError::ConfigurationMissing(EMAILJS_PUBLIC_KEY))
        );
    }

    #[test]
    fn demo_login_is_opt_in() {
        assert!(!config(&[]).demo_login);
        assert!(!config(&[(DEMO_LOGIN, "no")]).demo_login);
        assert!(config(&[(DEMO_LOGIN, "TRUE")]).demo_login);
        assert!(config(&[(DEMO_LOGIN, "1")]).demo_login);
    }
}
