use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use super::ChatProvider;
use crate::config::ProviderConfig;

/// OpenAI-compatible chat completion client. One request per analyzed file,
/// no retries.
#[derive(Debug)]
pub struct OpenAiProvider {
    endpoint: String,
    model: String,
    api_key: String,
    max_tokens: u32,
    temperature: f32,
    client: Client,
}

impl OpenAiProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| anyhow!("failed to build HTTP client: {}", e))?;

        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            client,
        })
    }
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "max_tokens": self.max_tokens,
            "temperature": self.temperature,
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.endpoint))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    anyhow!("cannot reach the API at {}: {}", self.endpoint, e)
                } else {
                    anyhow!("chat completion request failed: {}", e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => anyhow!("authentication failed; check OPENAI_API_KEY"),
                429 => anyhow!("rate limit or quota exceeded ({})", status),
                _ => anyhow!("API error ({}): {}", status, body),
            });
        }

        let value: Value = response.json().await?;
        let content = value
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str());

        match content {
            Some(text) => Ok(text.trim().to_string()),
            None => Err(anyhow!("unexpected response shape: {}", value)),
        }
    }

    async fn health_check(&self) -> Result<()> {
        let response = self
            .client
            .get(format!("{}/models", self.endpoint))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|_| anyhow!("cannot reach the API at {}", self.endpoint))?;

        let status = response.status();
        if status.as_u16() == 401 {
            return Err(anyhow!("authentication failed; check OPENAI_API_KEY"));
        }
        if !status.is_success() {
            return Err(anyhow!("API health check failed ({})", status));
        }

        Ok(())
    }
}
