#![allow(dead_code)]
//! # Common Test Utilities
//!
//! Shared mock providers so tests are isolated and repeatable.

use async_trait::async_trait;
use filewise::providers::ai::AiProvider;
use filewise::MetadataError;
use std::sync::{Arc, Once, RwLock};

static INIT: Once = Once::new();

/// Initializes the tracing subscriber for tests.
pub fn setup_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt::init();
    });
}

// --- Mock AI Provider for Logic Testing ---

/// A scripted provider: returns its responses in order and records every
/// prompt pair it receives.
#[derive(Clone, Debug)]
pub struct MockAiProvider {
    pub call_history: Arc<RwLock<Vec<(String, String)>>>,
    pub responses: Arc<RwLock<Vec<String>>>,
}

impl MockAiProvider {
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            call_history: Arc::new(RwLock::new(Vec::new())),
            responses: Arc::new(RwLock::new(responses.into_iter().rev().collect())),
        }
    }
}

#[async_trait]
impl AiProvider for MockAiProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, MetadataError> {
        self.call_history
            .write()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));

        if let Some(response) = self.responses.write().unwrap().pop() {
            Ok(response)
        } else {
            Ok("Default mock response".to_string())
        }
    }
}

// --- Failing AI Provider for Transport-Error Testing ---

/// A provider whose every call fails, simulating a service outage.
#[derive(Clone, Debug)]
pub struct FailingAiProvider;

#[async_trait]
impl AiProvider for FailingAiProvider {
    async fn generate(
        &self,
        _system_prompt: &str,
        _user_prompt: &str,
    ) -> Result<String, MetadataError> {
        Err(MetadataError::AiApi("simulated provider outage".to_string()))
    }
}
