// src/services/generator.rs
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("generation API returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("could not decode generation response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("prompt blocked: {0}")]
    Blocked(String),
    #[error("generation response contained no text")]
    EmptyResponse,
}

/// A handle to an external text-generation service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str, system_instruction: &str) -> Result<String, GenerationError>;
}
