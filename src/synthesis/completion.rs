// file: src/synthesis/completion.rs
// description: OpenAI-compatible chat completions API client
// reference: https://platform.openai.com/docs/api-reference/chat

use crate::config::CompletionConfig;
use crate::error::{QaError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    n: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// HTTP client for the chat completions endpoint. Sampling parameters are
/// fixed per process from the configuration; one blocking-style request per
/// invocation, no retry.
pub struct CompletionClient {
    client: Client,
    config: CompletionConfig,
    api_key: Option<String>,
}

impl CompletionClient {
    pub fn new(config: CompletionConfig, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            config,
            api_key,
        }
    }

    /// Request a single completion for a system + user message pair and
    /// return its text content.
    pub async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            QaError::Completion("OPENAI_API_KEY is not configured".to_string())
        })?;

        let url = format!("{}/chat/completions", self.config.base_url);

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages,
            max_tokens: self.config.max_tokens,
            n: self.config.n,
            temperature: self.config.temperature,
        };

        debug!("Requesting completion from {} ({})", url, self.config.model);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| QaError::Completion(format!("Failed to send request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(QaError::Completion(format!(
                "Request failed with status {status}: {error_text}"
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| QaError::Completion(format!("Failed to parse response: {e}")))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| QaError::Completion("No completion choices returned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_request_carries_fixed_parameters() {
        let config = Config::default_config().completion;
        let request = ChatCompletionRequest {
            model: config.model.clone(),
            messages: vec![ChatMessage::system("系统"), ChatMessage::user("问题")],
            max_tokens: config.max_tokens,
            n: config.n,
            temperature: config.temperature,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["max_tokens"], 150);
        assert_eq!(json["n"], 1);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
    }

    #[test]
    fn test_response_deserialization() {
        let body = r#"{
            "choices": [
                { "message": { "role": "assistant", "content": " 猫是哺乳动物。 " } }
            ]
        }"#;

        let response: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some(" 猫是哺乳动物。 ")
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_at_request_time() {
        let config = Config::default_config().completion;
        let client = CompletionClient::new(config, None);

        let result = client.complete(vec![ChatMessage::user("问题")]).await;
        assert!(matches!(result, Err(QaError::Completion(_))));
    }
}
