mod openai;

pub use openai::OpenAiProvider;

use anyhow::{bail, Result};
use async_trait::async_trait;

use crate::config::ProviderConfig;

/// A chat completion backend that turns a prompt into free-form text.
#[async_trait]
pub trait ChatProvider: Send + Sync + std::fmt::Debug {
    async fn complete(&self, prompt: &str) -> Result<String>;
    async fn health_check(&self) -> Result<()>;
}

pub fn create_provider(config: &ProviderConfig) -> Result<Box<dyn ChatProvider>> {
    if config.api_key.is_empty() {
        bail!("OPENAI_API_KEY is not set. Export it before running an analysis.");
    }
    Ok(Box::new(OpenAiProvider::new(config)?))
}
