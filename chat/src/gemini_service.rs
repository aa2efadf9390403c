use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;

use crate::error::ChatError;
use crate::models::UploadedFile;
use crate::query_service::QueryService;

const GEMINI_MODEL: &str = "gemini-2.5-flash";

const SYSTEM_INSTRUCTION: &str = "You are a helpful AI assistant for students at the University of Technology. Your task is to analyze the provided PDF document and answer questions based strictly on its content. Do not use any external knowledge. If the answer cannot be found within the document, clearly state that the information is not available in the provided material.";

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    system_instruction: GeminiContent,
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    inline_data: Option<GeminiInlineData>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiInlineData {
    mime_type: String,
    data: String,
}

#[derive(Debug, Serialize)]
struct GeminiGenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

pub struct GeminiService {
    client: Client,
    api_key: String,
}

impl GeminiService {
    pub fn new() -> Result<Self, ChatError> {
        let api_key = env::var("GEMINI_API_KEY").map_err(|_| {
            ChatError::Configuration("GEMINI_API_KEY environment variable not set".to_string())
        })?;

        Ok(Self {
            client: Client::new(),
            api_key,
        })
    }

    fn build_request(prompt: &str, document: &UploadedFile) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![
                    GeminiPart {
                        text: None,
                        inline_data: Some(GeminiInlineData {
                            mime_type: document.mime_type.clone(),
                            data: document.data.clone(),
                        }),
                    },
                    GeminiPart {
                        text: Some(prompt.to_string()),
                        inline_data: None,
                    },
                ],
            }],
            system_instruction: GeminiContent {
                parts: vec![GeminiPart {
                    text: Some(SYSTEM_INSTRUCTION.to_string()),
                    inline_data: None,
                }],
            },
            generation_config: GeminiGenerationConfig {
                temperature: 0.3,
                max_output_tokens: 1000,
            },
        }
    }

    fn extract_text(response: GeminiResponse) -> Option<String> {
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .find_map(|part| part.text)
            })
            .filter(|text| !text.is_empty())
    }
}

#[async_trait]
impl QueryService for GeminiService {
    async fn ask_with_document(
        &self,
        prompt: &str,
        document: &UploadedFile,
    ) -> Result<String, ChatError> {
        let request = Self::build_request(prompt, document);

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent?key={}",
            GEMINI_MODEL, self.api_key
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                ChatError::QueryFailed(format!("Failed to get response from AI: {}", e))
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ChatError::QueryFailed(format!(
                "Gemini API error: {}",
                error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            ChatError::QueryFailed(format!("Failed to get response from AI: {}", e))
        })?;

        match Self::extract_text(gemini_response) {
            Some(answer) => Ok(answer),
            None => Err(ChatError::QueryFailed(
                "The API returned an empty response.".to_string(),
            )),
        }
    }
}
