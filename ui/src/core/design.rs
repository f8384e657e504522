//! Prompts and calls for the AI design preview and the idea generator.

use api::{ApiError, GenAiClient, GeneratedImage};

use super::catalog::{find_design_style, find_design_type, Service};
use super::error::{ActionError, ValidationError};
use crate::i18n::Language;

/// Previews are square.
pub const DESIGN_ASPECT_RATIO: &str = "1:1";

/// Hosted generative model, seen from the views.
#[allow(async_fn_in_trait)]
pub trait CreativeAssistant {
    async fn suggest(&self, prompt: &str) -> Result<String, ApiError>;
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: &str,
    ) -> Result<GeneratedImage, ApiError>;
}

impl CreativeAssistant for GenAiClient {
    async fn suggest(&self, prompt: &str) -> Result<String, ApiError> {
        GenAiClient::suggest(self, prompt).await
    }

    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: &str,
    ) -> Result<GeneratedImage, ApiError> {
        GenAiClient::generate_image(self, prompt, aspect_ratio).await
    }
}

/// `"{type} for {description}, {style enhancement}"`.
pub fn design_prompt(
    type_id: &str,
    description: &str,
    style_id: &str,
) -> Result<String, ValidationError> {
    let description = description.trim();
    if description.is_empty() {
        return Err(ValidationError::EmptyDescription);
    }
    let kind = find_design_type(type_id)
        .map(|t| t.label.en)
        .unwrap_or("Design");
    let mut prompt = format!("{kind} for {description}");
    if let Some(style) = find_design_style(style_id) {
        prompt.push_str(", ");
        prompt.push_str(style.enhancement);
    }
    Ok(prompt)
}

pub fn suggestion_prompt(service: &Service, lang: Language) -> String {
    let name = service.title.en;
    match lang {
        Language::English => format!(
            "Suggest 3 creative ideas or marketing slogans for a customer looking for {name} services."
        ),
        Language::Arabic => format!(
            "اقترح 3 أفكار إبداعية أو شعارات تسويقية لعميل يبحث عن خدمات {name}."
        ),
    }
}

/// File name offered when downloading a preview.
pub fn design_file_name(timestamp: &str) -> String {
    format!("haweya-design-{timestamp}.png")
}

pub async fn generate_design(
    assistant: &impl CreativeAssistant,
    type_id: &str,
    description: &str,
    style_id: &str,
) -> Result<GeneratedImage, ActionError> {
    let prompt = design_prompt(type_id, description, style_id)?;
    tracing::debug!(%prompt, "requesting design preview");
    assistant
        .generate_image(&prompt, DESIGN_ASPECT_RATIO)
        .await
        .map_err(|err| {
            tracing::warn!(%err, "design preview failed");
            ActionError::from(err)
        })
}

pub async fn creative_ideas(
    assistant: &impl CreativeAssistant,
    service: &Service,
    lang: Language,
) -> Result<String, ActionError> {
    let prompt = suggestion_prompt(service, lang);
    assistant.suggest(&prompt).await.map_err(|err| {
        tracing::warn!(%err, service = service.id, "idea suggestion failed");
        ActionError::from(err)
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;

    use super::*;
    use crate::core::catalog::find_service;

    #[derive(Default)]
    struct ScriptedAssistant {
        prompts: RefCell<Vec<(String, Option<String>)>>,
        empty: bool,
    }

    impl CreativeAssistant for ScriptedAssistant {
        async fn suggest(&self, prompt: &str) -> Result<String, ApiError> {
            self.prompts.borrow_mut().push((prompt.to_string(), None));
            if self.empty {
                Err(ApiError::NoResult)
            } else {
                Ok("1. Bold cards".into())
            }
        }

        async fn generate_image(
            &self,
            prompt: &str,
            aspect_ratio: &str,
        ) -> Result<GeneratedImage, ApiError> {
            self.prompts
                .borrow_mut()
                .push((prompt.to_string(), Some(aspect_ratio.to_string())));
            if self.empty {
                return Err(ApiError::NoResult);
            }
            Ok(GeneratedImage {
                mime_type: "image/png".into(),
                base64_data: "iVBORw0KGgo=".into(),
            })
        }
    }

    #[test]
    fn prompt_combines_type_description_and_style() {
        let prompt = design_prompt("logo", "a coffee shop", "luxury").unwrap();
        assert_eq!(
            prompt,
            "Logo Design for a coffee shop, in a luxury premium elegant style with gold accents"
        );
    }

    #[test]
    fn empty_description_is_rejected() {
        assert_eq!(
            design_prompt("logo", "  \n", "modern"),
            Err(ValidationError::EmptyDescription)
        );
    }

    #[test]
    fn design_request_is_square_and_skips_empty_input() {
        let assistant = ScriptedAssistant::default();
        let image =
            block_on(generate_design(&assistant, "business_card", "dentist", "minimal")).unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(assistant.prompts.borrow()[0].1.as_deref(), Some("1:1"));

        let err = block_on(generate_design(&assistant, "logo", "", "minimal")).unwrap_err();
        assert_eq!(err, ActionError::Validation(ValidationError::EmptyDescription));
        assert_eq!(assistant.prompts.borrow().len(), 1);
    }

    #[test]
    fn empty_answers_surface_as_no_result() {
        let assistant = ScriptedAssistant {
            empty: true,
            ..ScriptedAssistant::default()
        };
        let banners = find_service("2").unwrap();
        let err = block_on(creative_ideas(&assistant, banners, Language::English)).unwrap_err();
        assert_eq!(err, ActionError::NoResult);
    }

    #[test]
    fn suggestion_prompt_names_the_service() {
        let cards = find_service("1").unwrap();
        assert_eq!(
            suggestion_prompt(cards, Language::English),
            "Suggest 3 creative ideas or marketing slogans for a customer looking for Business Cards services."
        );
        assert!(suggestion_prompt(cards, Language::Arabic).contains("Business Cards"));
    }

    #[test]
    fn download_name_has_timestamp() {
        assert_eq!(
            design_file_name("20260101_101010"),
            "haweya-design-20260101_101010.png"
        );
    }
}
