//! Draftboard Research Layer
//!
//! Pluggable deep-research providers: a real OpenAI-backed client and a
//! deterministic mock for tests, behind one `ResearchProvider` trait.
//!
//! A research call takes a system prompt and a framework-specific user
//! prompt and yields the response body, raw citations with character
//! offsets into that body, and token usage. Parsing the body into typed
//! framework data is `draftboard-parser`'s job.
//!
//! # Examples
//!
//! ```
//! use draftboard_research::{MockProvider, ResearchProvider};
//!
//! # tokio_test::block_on(async {
//! let provider = MockProvider::new("## Strengths\n- Team\n");
//! let output = provider.research("system", "prompt").await.unwrap();
//! assert_eq!(output.content, "## Strengths\n- Team\n");
//! assert_eq!(provider.call_count(), 1);
//! # });
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod openai;
pub mod prompts;

pub use config::ResearchConfig;
pub use openai::OpenAiProvider;
pub use prompts::{framework_prompt, ResearchContext, SYSTEM_PROMPT};

use std::sync::{Arc, Mutex};

use draftboard_domain::RawCitation;
use thiserror::Error;

/// Errors that can occur during a research call
#[derive(Error, Debug)]
pub enum ResearchError {
    /// No API key available (neither configured nor in the environment)
    #[error("Research is not configured: set an API key or OPENAI_API_KEY")]
    NotConfigured,

    /// Network or transport failure
    #[error("Communication error: {0}")]
    Communication(String),

    /// The API answered with a non-success status
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body, verbatim
        message: String,
    },

    /// The API answered with a body this client cannot interpret
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Outcome of one research call
#[derive(Debug, Clone)]
pub struct ResearchOutput {
    /// Response body (markdown-ish free text)
    pub content: String,
    /// Citations with character offsets into `content`
    pub citations: Vec<RawCitation>,
    /// Model that produced the response
    pub model: String,
    /// Prompt tokens consumed
    pub input_tokens: u64,
    /// Completion tokens produced
    pub output_tokens: u64,
}

impl ResearchOutput {
    /// Total tokens consumed by the call
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens + self.output_tokens
    }

    /// Rough cost estimate in USD, rounded to cents
    pub fn estimated_cost_usd(&self) -> f64 {
        let dollars = self.total_tokens() as f64 / 1000.0 * 0.015;
        (dollars * 100.0).round() / 100.0
    }
}

/// A deep-research backend
pub trait ResearchProvider {
    /// Run one research call and return its output
    fn research(
        &self,
        system: &str,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<ResearchOutput, ResearchError>> + Send;
}

/// Deterministic research provider for tests
///
/// Returns pre-configured outputs without any network access and counts
/// calls so tests can assert interaction.
#[derive(Debug, Clone)]
pub struct MockProvider {
    content: String,
    citations: Vec<RawCitation>,
    fail: bool,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Provider that answers every call with the given content
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            citations: Vec::new(),
            fail: false,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Attach citations to every response
    pub fn with_citations(mut self, citations: Vec<RawCitation>) -> Self {
        self.citations = citations;
        self
    }

    /// Provider that fails every call with [`ResearchError::NotConfigured`]
    pub fn failing() -> Self {
        Self {
            content: String::new(),
            citations: Vec::new(),
            fail: true,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Number of research calls made so far
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl ResearchProvider for MockProvider {
    async fn research(&self, _system: &str, _prompt: &str) -> Result<ResearchOutput, ResearchError> {
        *self.call_count.lock().unwrap() += 1;
        if self.fail {
            return Err(ResearchError::NotConfigured);
        }
        Ok(ResearchOutput {
            content: self.content.clone(),
            citations: self.citations.clone(),
            model: "mock".to_string(),
            input_tokens: 100,
            output_tokens: 400,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_counts_calls() {
        let provider = MockProvider::new("body");
        assert_eq!(provider.call_count(), 0);
        tokio_test::block_on(async {
            provider.research("s", "p").await.unwrap();
            provider.research("s", "p").await.unwrap();
        });
        assert_eq!(provider.call_count(), 2);
    }

    #[test]
    fn test_mock_failure() {
        let provider = MockProvider::failing();
        let err = tokio_test::block_on(provider.research("s", "p")).unwrap_err();
        assert!(matches!(err, ResearchError::NotConfigured));
    }

    #[test]
    fn test_cost_estimate_rounds_to_cents() {
        let output = ResearchOutput {
            content: String::new(),
            citations: Vec::new(),
            model: "mock".to_string(),
            input_tokens: 1000,
            output_tokens: 234,
        };
        // 1234 tokens -> 1.234 * 0.015 = 0.01851 -> $0.02
        assert_eq!(output.estimated_cost_usd(), 0.02);
        assert_eq!(output.total_tokens(), 1234);
    }
}
