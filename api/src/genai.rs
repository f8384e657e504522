//! Gemini `generateContent` client.
//!
//! Two calls are exposed: a short text completion used for marketing
//! suggestions and an image completion used for design previews. An answer
//! without a usable part is reported as [`ApiError::NoResult`] rather than as
//! an empty value.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const TEXT_MODEL: &str = "gemini-3-flash-preview";
pub const IMAGE_MODEL: &str = "gemini-2.5-flash-image";

const SUGGESTION_MAX_TOKENS: u32 = 200;
const SUGGESTION_TEMPERATURE: f32 = 0.7;

/// Base64 image returned by the image model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub mime_type: String,
    pub base64_data: String,
}

impl GeneratedImage {
    /// `data:` URL suitable for an `<img src>`.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64_data)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_modalities: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    image_config: Option<ImageConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig {
    aspect_ratio: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    #[serde(default = "default_mime")]
    mime_type: String,
    data: String,
}

fn default_mime() -> String {
    "image/png".to_string()
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

#[derive(Debug, Clone)]
pub struct GenAiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GenAiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Short free-form text for `prompt`.
    pub async fn suggest(&self, prompt: &str) -> Result<String, ApiError> {
        let request = text_request(prompt);
        let response = self.generate(TEXT_MODEL, &request).await?;
        first_text(&response).ok_or(ApiError::NoResult)
    }

    /// One image for `prompt` at `aspect_ratio` (e.g. `"1:1"`).
    pub async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: &str,
    ) -> Result<GeneratedImage, ApiError> {
        let request = image_request(prompt, aspect_ratio);
        let response = self.generate(IMAGE_MODEL, &request).await?;
        first_image(response).ok_or(ApiError::NoResult)
    }

    fn model_url(&self, model: &str) -> String {
        format!(
            "{}/models/{model}:generateContent",
            self.base_url.trim_end_matches('/')
        )
    }

    async fn generate(
        &self,
        model: &str,
        request: &GenerateRequest,
    ) -> Result<GenerateResponse, ApiError> {
        tracing::debug!(model, "calling generateContent");
        let response = self
            .http
            .post(self.model_url(model))
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::warn!(model, status = status.as_u16(), "generateContent failed");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

fn user_content(prompt: &str) -> Vec<Content> {
    vec![Content {
        role: Some("user".to_string()),
        parts: vec![Part {
            text: Some(prompt.to_string()),
            inline_data: None,
        }],
    }]
}

fn text_request(prompt: &str) -> GenerateRequest {
    GenerateRequest {
        contents: user_content(prompt),
        generation_config: Some(GenerationConfig {
            max_output_tokens: Some(SUGGESTION_MAX_TOKENS),
            temperature: Some(SUGGESTION_TEMPERATURE),
            ..GenerationConfig::default()
        }),
    }
}

fn image_request(prompt: &str, aspect_ratio: &str) -> GenerateRequest {
    GenerateRequest {
        contents: user_content(prompt),
        generation_config: Some(GenerationConfig {
            response_modalities: Some(vec!["IMAGE"]),
            image_config: Some(ImageConfig {
                aspect_ratio: aspect_ratio.to_string(),
            }),
            ..GenerationConfig::default()
        }),
    }
}

fn candidate_parts(response: &GenerateResponse) -> impl Iterator<Item = &Part> {
    response
        .candidates
        .iter()
        .take(1)
        .filter_map(|candidate| candidate.content.as_ref())
        .flat_map(|content| content.parts.iter())
}

fn first_text(response: &GenerateResponse) -> Option<String> {
    let text = candidate_parts(response)
        .filter_map(|part| part.text.as_deref())
        .collect::<Vec<_>>()
        .join("");
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn first_image(response: GenerateResponse) -> Option<GeneratedImage> {
    response
        .candidates
        .into_iter()
        .take(1)
        .filter_map(|candidate| candidate.content)
        .flat_map(|content| content.parts.into_iter())
        .filter_map(|part| part.inline_data)
        .find(|inline| !inline.data.is_empty())
        .map(|inline| GeneratedImage {
            mime_type: inline.mime_type,
            base64_data: inline.data,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GenerateResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn text_request_carries_sampling_settings() {
        let value = serde_json::to_value(text_request("ideas please")).unwrap();
        assert_eq!(value["contents"][0]["parts"][0]["text"], "ideas please");
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 200);
        assert!(value["generationConfig"].get("imageConfig").is_none());
    }

    #[test]
    fn image_request_sets_aspect_ratio() {
        let value = serde_json::to_value(image_request("logo", "1:1")).unwrap();
        assert_eq!(value["generationConfig"]["imageConfig"]["aspectRatio"], "1:1");
        assert_eq!(value["generationConfig"]["responseModalities"], json!(["IMAGE"]));
        assert!(value["generationConfig"].get("temperature").is_none());
    }

    #[test]
    fn text_is_joined_from_first_candidate() {
        let response = parse(json!({
            "candidates": [
                { "content": { "parts": [ { "text": "1. Bold " }, { "text": "cards\n" } ] } },
                { "content": { "parts": [ { "text": "ignored" } ] } }
            ]
        }));
        assert_eq!(first_text(&response).as_deref(), Some("1. Bold cards"));
    }

    #[test]
    fn blank_text_is_no_result() {
        let response = parse(json!({ "candidates": [ { "content": { "parts": [ { "text": "  " } ] } } ] }));
        assert_eq!(first_text(&response), None);
        assert_eq!(first_text(&GenerateResponse::default()), None);
    }

    #[test]
    fn image_is_first_inline_part() {
        let response = parse(json!({
            "candidates": [ { "content": { "parts": [
                { "text": "Here is your design" },
                { "inlineData": { "mimeType": "image/png", "data": "iVBORw0KGgo=" } }
            ] } } ]
        }));
        let image = first_image(response).unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.data_url(), "data:image/png;base64,iVBORw0KGgo=");
    }

    #[test]
    fn text_only_answer_has_no_image() {
        let response = parse(json!({
            "candidates": [ { "content": { "parts": [ { "text": "I can't draw that" } ] } } ]
        }));
        assert!(first_image(response).is_none());
    }

    #[test]
    fn model_url_joins_base() {
        let client = GenAiClient::with_base_url("key", "http://localhost:8080/v1beta/");
        assert_eq!(
            client.model_url(IMAGE_MODEL),
            "http://localhost:8080/v1beta/models/gemini-2.5-flash-image:generateContent"
        );
    }
}
