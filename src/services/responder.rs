// src/services/responder.rs
use std::{fmt, sync::Arc};

use thiserror::Error;

use super::gemini::GeminiClient;
use super::generator::{GenerationError, TextGenerator};
use crate::config::GeminiConfig;
use crate::persona::SYSTEM_INSTRUCTION;

pub const UNAVAILABLE_MESSAGE: &str =
    "I'm sorry, the AI service is currently unavailable. Please try again later.";
pub const PROCESSING_ERROR_MESSAGE: &str =
    "I'm sorry, I encountered an error while processing your request. Please try again later.";

#[derive(Error, Debug)]
pub enum RespondError {
    #[error("no generation client configured")]
    Unavailable,
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl RespondError {
    /// The fixed text shown to the user in place of this error.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            RespondError::Unavailable => UNAVAILABLE_MESSAGE,
            RespondError::Generation(_) => PROCESSING_ERROR_MESSAGE,
        }
    }
}

/// Turns one user message into one reply using the FarmCare persona.
#[derive(Clone)]
pub struct Responder {
    generator: Option<Arc<dyn TextGenerator>>,
    system_instruction: Arc<str>,
}

impl fmt::Debug for Responder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Responder")
            .field("available", &self.is_available())
            .field("system_instruction_len", &self.system_instruction.len())
            .finish()
    }
}

impl Responder {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
            system_instruction: Arc::from(SYSTEM_INSTRUCTION),
        }
    }

    /// A responder with no generation client; every call short-circuits.
    pub fn unavailable() -> Self {
        Self {
            generator: None,
            system_instruction: Arc::from(SYSTEM_INSTRUCTION),
        }
    }

    /// Build the Gemini-backed responder, degrading to `unavailable()` when
    /// there is no key or the HTTP client cannot be built.
    pub fn from_config(config: &GeminiConfig) -> Self {
        let Some(api_key) = config.api_key.as_deref() else {
            tracing::warn!("GEMINI_API_KEY not set; chat replies will use the unavailable fallback");
            return Self::unavailable();
        };

        match GeminiClient::new(
            api_key,
            config.model.as_str(),
            config.base_url.as_str(),
            config.request_timeout,
        ) {
            Ok(client) => {
                tracing::info!(model = client.model(), "Gemini client initialized");
                Self::new(Arc::new(client))
            }
            Err(e) => {
                tracing::error!(error = %e, "could not initialize Gemini client");
                Self::unavailable()
            }
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<Arc<str>>) -> Self {
        self.system_instruction = instruction.into();
        self
    }

    pub fn is_available(&self) -> bool {
        self.generator.is_some()
    }

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    pub async fn try_respond(&self, user_text: &str) -> Result<String, RespondError> {
        let generator = self.generator.as_ref().ok_or(RespondError::Unavailable)?;
        let reply = generator.generate(user_text, &self.system_instruction).await?;
        if reply.trim().is_empty() {
            return Err(GenerationError::EmptyResponse.into());
        }
        Ok(reply)
    }

    /// Never fails: errors are logged and replaced by a fixed fallback message.
    pub async fn respond(&self, user_text: &str) -> String {
        match self.try_respond(user_text).await {
            Ok(reply) => reply,
            Err(RespondError::Unavailable) => UNAVAILABLE_MESSAGE.to_string(),
            Err(err) => {
                tracing::error!(error = %err, "error generating AI response");
                err.fallback_message().to_string()
            }
        }
    }
}
