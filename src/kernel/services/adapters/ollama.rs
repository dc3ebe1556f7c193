//! Ollama `/api/generate` client.

use crate::kernel::services::ports::{ExplainConfig, ExplainError, ExplainFuture, ExplainService};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: Option<String>,
}

pub struct OllamaClient {
    http: reqwest::Client,
    config: ExplainConfig,
}

impl OllamaClient {
    pub fn new(config: ExplainConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

impl ExplainService for OllamaClient {
    fn explain(&self, prompt: String) -> ExplainFuture {
        let http = self.http.clone();
        let endpoint = self.config.endpoint();
        let model = self.config.model.clone();
        let timeout = self.config.timeout;

        Box::pin(async move {
            match tokio::time::timeout(timeout, generate(&http, &endpoint, &model, &prompt)).await
            {
                Ok(result) => result,
                Err(_) => Err(ExplainError::Timeout(timeout)),
            }
        })
    }
}

async fn generate(
    http: &reqwest::Client,
    endpoint: &str,
    model: &str,
    prompt: &str,
) -> Result<String, ExplainError> {
    let body = GenerateRequest {
        model,
        prompt,
        stream: false,
    };

    let response = http
        .post(endpoint)
        .json(&body)
        .send()
        .await
        .map_err(|e| ExplainError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ExplainError::Status(status.as_u16()));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ExplainError::Network(e.to_string()))?;
    parse_generate_response(&bytes)
}

pub(crate) fn parse_generate_response(bytes: &[u8]) -> Result<String, ExplainError> {
    let parsed: GenerateResponse =
        serde_json::from_slice(bytes).map_err(|e| ExplainError::Malformed(e.to_string()))?;
    parsed
        .response
        .map(|text| text.trim().to_string())
        .ok_or_else(|| ExplainError::Malformed("missing `response` field".to_string()))
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/ollama.rs"]
mod tests;
