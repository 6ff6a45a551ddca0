#![allow(dead_code)]

use async_trait::async_trait;
use farmcare_ai::services::generator::{GenerationError, TextGenerator};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

pub const SECRET_DETAIL: &str = "upstream exploded: key=abc123";

pub enum Behavior {
    Reply(String),
    Fail,
    Panic,
    Slow(Duration, String),
}

pub struct MockGenerator {
    behavior: Behavior,
    calls: AtomicUsize,
    completed: AtomicUsize,
    prompts: Mutex<Vec<(String, String)>>,
}

impl MockGenerator {
    fn with(behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn replying(reply: &str) -> Arc<Self> {
        Self::with(Behavior::Reply(reply.to_string()))
    }

    pub fn failing() -> Arc<Self> {
        Self::with(Behavior::Fail)
    }

    pub fn panicking() -> Arc<Self> {
        Self::with(Behavior::Panic)
    }

    pub fn slow(delay: Duration, reply: &str) -> Arc<Self> {
        Self::with(Behavior::Slow(delay, reply.to_string()))
    }

    /// Calls that ran to the end without being cancelled.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// (prompt, system_instruction) of the most recent call.
    pub fn last_call(&self) -> Option<(String, String)> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str, system_instruction: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts
            .lock()
            .unwrap()
            .push((prompt.to_string(), system_instruction.to_string()));

        let result = match &self.behavior {
            Behavior::Reply(reply) => Ok(reply.clone()),
            Behavior::Slow(delay, reply) => {
                tokio::time::sleep(*delay).await;
                Ok(reply.clone())
            }
            Behavior::Fail => Err(GenerationError::Api {
                status: 503,
                body: SECRET_DETAIL.to_string(),
            }),
            Behavior::Panic => panic!("generator panicked"),
        };
        self.completed.fetch_add(1, Ordering::SeqCst);
        result
    }
}
