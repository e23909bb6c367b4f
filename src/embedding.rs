// file: src/embedding.rs
// description: OpenAI-compatible embeddings API client
// reference: https://platform.openai.com/docs/api-reference/embeddings

use crate::config::EmbeddingConfig;
use crate::error::{QaError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Serialize)]
struct EmbeddingRequest {
    input: Vec<String>,
    model: String,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
    index: usize,
}

/// HTTP client for the embeddings endpoint. Constructed once per process;
/// owned by the pipeline rather than living in ambient state.
pub struct EmbeddingClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl EmbeddingClient {
    pub fn new(config: &EmbeddingConfig, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key,
        }
    }

    /// Embed a single text.
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.request(vec![text.to_string()])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| QaError::Embedding("No embedding data returned".to_string()))
    }

    /// Embed a batch of texts in one request. Output order matches input
    /// order. Callers must not pass an empty batch; the ranker guards this.
    pub async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        self.request(texts.to_vec()).await
    }

    async fn request(&self, input: Vec<String>) -> Result<Vec<Vec<f32>>> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            QaError::Embedding("OPENAI_API_KEY is not configured".to_string())
        })?;

        let url = format!("{}/embeddings", self.base_url);
        let expected = input.len();

        debug!("Requesting {} embeddings from {}", expected, url);

        let request = EmbeddingRequest {
            input,
            model: self.model.clone(),
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| QaError::Embedding(format!("Failed to send request: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(QaError::Embedding(format!(
                "Request failed with status {status}: {error_text}"
            )));
        }

        let embedding_response: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| QaError::Embedding(format!("Failed to parse response: {e}")))?;

        let mut data = embedding_response.data;
        if data.len() != expected {
            return Err(QaError::Embedding(format!(
                "Expected {expected} embeddings, got {}",
                data.len()
            )));
        }

        // The API is free to reorder entries; restore input order.
        data.sort_by_key(|entry| entry.index);

        Ok(data.into_iter().map(|entry| entry.embedding).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_request_serialization() {
        let request = EmbeddingRequest {
            input: vec!["猫是什么动物？".to_string()],
            model: "text-embedding-3-small".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "text-embedding-3-small");
        assert_eq!(json["input"][0], "猫是什么动物？");
    }

    #[test]
    fn test_response_deserialization_restores_order() {
        let body = r#"{
            "data": [
                { "embedding": [0.2, 0.2], "index": 1 },
                { "embedding": [0.1, 0.1], "index": 0 }
            ]
        }"#;

        let mut response: EmbeddingResponse = serde_json::from_str(body).unwrap();
        response.data.sort_by_key(|entry| entry.index);

        assert_eq!(response.data[0].embedding, vec![0.1, 0.1]);
        assert_eq!(response.data[1].embedding, vec![0.2, 0.2]);
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_at_request_time() {
        let config = Config::default_config();
        let client = EmbeddingClient::new(&config.embedding, None);

        let result = client.embed("any question").await;
        assert!(matches!(result, Err(QaError::Embedding(_))));
    }
}
