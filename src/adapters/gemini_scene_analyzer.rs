use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;

use crate::adapters::AnalysisError;
use crate::core::interfaces::adapters::SceneAnalyzer;
use crate::core::models::{CameraSettings, EncodedImage, UserSettings};
use crate::global_constants::{
    API_KEY_HEADER, LOG_TAG_GEMINI, RESPONSE_MIME_TYPE, SYSTEM_INSTRUCTION,
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    system_instruction: RequestContent,
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl RequestPart {
    fn text(text: impl Into<String>) -> Self {
        Self {
            inline_data: None,
            text: Some(text.into()),
        }
    }

    fn image(image: &EncodedImage) -> Self {
        Self {
            inline_data: Some(InlineData {
                mime_type: image.mime_type.clone(),
                data: image.base64_data.clone(),
            }),
            text: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

fn camera_settings_schema(response_language: &str) -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "iso": {
                "type": "INTEGER",
                "description": "Recommended ISO value (e.g., 100, 400, 1600)."
            },
            "aperture": {
                "type": "STRING",
                "description": "Recommended Aperture value (e.g., f/1.8, f/8)."
            },
            "shutterSpeed": {
                "type": "STRING",
                "description": "Recommended Shutter Speed (e.g., 1/100s, 2s)."
            },
            "whiteBalance": {
                "type": "STRING",
                "description": "Recommended White Balance setting (e.g., Daylight, Tungsten, 5600K)."
            },
            "focalLength": {
                "type": "STRING",
                "description": "Recommended Focal Length (e.g., 35mm, 85mm)."
            },
            "explanation": {
                "type": "STRING",
                "description": format!(
                    "A short explanation in {} of why these settings were chosen based on lighting and subject.",
                    response_language
                )
            },
            "tips": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": format!(
                    "List of 2-3 short photography tips in {} specific to this scene.",
                    response_language
                )
            }
        },
        "required": ["iso", "aperture", "shutterSpeed", "whiteBalance", "explanation", "tips"]
    })
}

/// Turns a raw `generateContent` body into camera settings.
fn parse_response_body(body: &str) -> Result<CameraSettings, AnalysisError> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| AnalysisError::MalformedResponse(format!("unexpected envelope: {}", e)))?;

    let json_text = extract_response_text(response)?;

    CameraSettings::parse_from_model_output(&json_text)
        .map_err(|e| AnalysisError::MalformedResponse(format!("{:#}", e)))
}

fn extract_response_text(response: GenerateContentResponse) -> Result<String, AnalysisError> {
    if let Some(reason) = response
        .prompt_feedback
        .and_then(|feedback| feedback.block_reason)
    {
        return Err(AnalysisError::Blocked(reason));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(AnalysisError::EmptyResponse)?;

    if let Some(reason) = &candidate.finish_reason {
        log::debug!("{} finish reason: {}", LOG_TAG_GEMINI, reason);
    }

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(AnalysisError::EmptyResponse);
    }

    Ok(text)
}

fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<ErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.chars().take(200).collect())
}

pub struct GeminiSceneAnalyzer {
    client: reqwest::Client,
    api_base_url: String,
    model: String,
    api_key: Option<String>,
    user_prompt: String,
    response_language: String,
}

impl GeminiSceneAnalyzer {
    pub fn build(settings: &UserSettings) -> Result<Self> {
        log::info!(
            "{} Initializing Gemini scene analyzer with model {}",
            LOG_TAG_GEMINI,
            settings.model
        );

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            api_base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_key: settings.api_key.clone(),
            user_prompt: settings.user_prompt(),
            response_language: settings.response_language.clone(),
        })
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base_url, self.model
        )
    }

    fn build_request_body(&self, image: &EncodedImage) -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: RequestContent {
                parts: vec![RequestPart::text(SYSTEM_INSTRUCTION)],
            },
            contents: vec![RequestContent {
                parts: vec![
                    RequestPart::image(image),
                    RequestPart::text(self.user_prompt.clone()),
                ],
            }],
            generation_config: GenerationConfig {
                response_mime_type: RESPONSE_MIME_TYPE.to_string(),
                response_schema: camera_settings_schema(&self.response_language),
            },
        }
    }

    async fn send_request(&self, image: &EncodedImage) -> Result<String, AnalysisError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(AnalysisError::MissingApiKey)?;

        let request_body = self.build_request_body(image);

        log::info!("{} Sending scene to {}", LOG_TAG_GEMINI, self.model);
        log::debug!("{} Endpoint: {}", LOG_TAG_GEMINI, self.endpoint_url());

        let response = self
            .client
            .post(self.endpoint_url())
            .header(API_KEY_HEADER, api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        log::debug!(
            "{} Response status {}, {} bytes",
            LOG_TAG_GEMINI,
            status,
            body.len()
        );

        if !status.is_success() {
            return Err(AnalysisError::HttpStatus {
                status: status.as_u16(),
                message: extract_error_message(&body),
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl SceneAnalyzer for GeminiSceneAnalyzer {
    async fn analyze_scene(&self, image: &EncodedImage) -> Result<CameraSettings> {
        let body = self.send_request(image).await?;
        let settings = parse_response_body(&body)?;

        log::info!(
            "{} Scene analyzed: ISO {}, {}, {}",
            LOG_TAG_GEMINI,
            settings.iso,
            settings.aperture,
            settings.shutter_speed
        );

        Ok(settings)
    }
}
