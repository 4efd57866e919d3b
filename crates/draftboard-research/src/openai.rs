//! OpenAI Responses API provider
//!
//! Calls the `/responses` endpoint with web search enabled and translates
//! the answer into a [`ResearchOutput`]: the assistant's output text plus
//! every `url_citation` annotation with its character offsets.

use draftboard_domain::RawCitation;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::ResearchConfig;
use crate::{ResearchError, ResearchOutput, ResearchProvider};

/// OpenAI-backed deep-research provider
pub struct OpenAiProvider {
    config: ResearchConfig,
    full_model: bool,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    instructions: &'a str,
    input: &'a str,
    tools: Vec<serde_json::Value>,
}

#[derive(Deserialize)]
struct ResponsesBody {
    model: String,
    output: Vec<OutputItem>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct OutputItem {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
    #[serde(default)]
    annotations: Vec<Annotation>,
}

#[derive(Deserialize)]
struct Annotation {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    start_index: Option<usize>,
    #[serde(default)]
    end_index: Option<usize>,
}

#[derive(Deserialize, Default)]
struct Usage {
    #[serde(default)]
    input_tokens: u64,
    #[serde(default)]
    output_tokens: u64,
}

impl OpenAiProvider {
    /// New provider using the config's mini model
    pub fn new(config: ResearchConfig) -> Result<Self, ResearchError> {
        Self::with_model(config, false)
    }

    /// New provider with explicit full/mini model selection
    pub fn with_model(config: ResearchConfig, full_model: bool) -> Result<Self, ResearchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ResearchError::Communication(e.to_string()))?;
        Ok(Self {
            config,
            full_model,
            client,
        })
    }

    /// The model this provider will call
    pub fn model(&self) -> &str {
        self.config.model(self.full_model)
    }
}

impl ResearchProvider for OpenAiProvider {
    async fn research(&self, system: &str, prompt: &str) -> Result<ResearchOutput, ResearchError> {
        let api_key = self
            .config
            .resolve_api_key()
            .ok_or(ResearchError::NotConfigured)?;

        let url = format!("{}/responses", self.config.endpoint);
        let request = ResponsesRequest {
            model: self.model(),
            instructions: system,
            input: prompt,
            tools: vec![serde_json::json!({ "type": "web_search_preview" })],
        };
        debug!(model = request.model, prompt_len = prompt.len(), "sending research request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ResearchError::Communication(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "no error body".to_string());
            return Err(ResearchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: ResponsesBody = response
            .json()
            .await
            .map_err(|e| ResearchError::InvalidResponse(e.to_string()))?;
        let output = assemble_output(body)?;
        info!(
            model = %output.model,
            tokens = output.total_tokens(),
            citations = output.citations.len(),
            "research call complete"
        );
        Ok(output)
    }
}

/// Collect message text and url_citation annotations from a response body
fn assemble_output(body: ResponsesBody) -> Result<ResearchOutput, ResearchError> {
    let mut content = String::new();
    let mut citations = Vec::new();

    for item in body.output.iter().filter(|item| item.kind == "message") {
        for part in item.content.iter().filter(|part| part.kind == "output_text") {
            // Annotation offsets are relative to the full assembled text
            for annotation in &part.annotations {
                if annotation.kind != "url_citation" || annotation.url.is_empty() {
                    continue;
                }
                let mut citation = RawCitation::new(&annotation.title, &annotation.url);
                citation.start_index = annotation.start_index.map(|i| i + content.len());
                citation.end_index = annotation.end_index.map(|i| i + content.len());
                citations.push(citation);
            }
            content.push_str(&part.text);
        }
    }

    if content.is_empty() {
        return Err(ResearchError::InvalidResponse(
            "response carried no output text".to_string(),
        ));
    }

    let usage = body.usage.unwrap_or_default();
    Ok(ResearchOutput {
        content,
        citations,
        model: body.model,
        input_tokens: usage.input_tokens,
        output_tokens: usage.output_tokens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_from_json(json: serde_json::Value) -> ResponsesBody {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_assemble_extracts_text_and_citations() {
        let body = body_from_json(serde_json::json!({
            "model": "o4-mini-deep-research",
            "output": [
                { "type": "web_search_call" },
                {
                    "type": "message",
                    "content": [{
                        "type": "output_text",
                        "text": "## TAM\n$4.5 billion [1]",
                        "annotations": [{
                            "type": "url_citation",
                            "title": "Market report",
                            "url": "https://example.com/report",
                            "start_index": 9,
                            "end_index": 21
                        }]
                    }]
                }
            ],
            "usage": { "input_tokens": 120, "output_tokens": 480 }
        }));
        let output = assemble_output(body).unwrap();
        assert_eq!(output.content, "## TAM\n$4.5 billion [1]");
        assert_eq!(output.citations.len(), 1);
        assert_eq!(output.citations[0].url, "https://example.com/report");
        assert_eq!(output.citations[0].start_index, Some(9));
        assert_eq!(output.total_tokens(), 600);
    }

    #[test]
    fn test_assemble_rejects_empty_output() {
        let body = body_from_json(serde_json::json!({
            "model": "o4-mini-deep-research",
            "output": []
        }));
        assert!(matches!(
            assemble_output(body),
            Err(ResearchError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_non_citation_annotations_ignored() {
        let body = body_from_json(serde_json::json!({
            "model": "m",
            "output": [{
                "type": "message",
                "content": [{
                    "type": "output_text",
                    "text": "text",
                    "annotations": [{ "type": "file_citation", "title": "f", "url": "" }]
                }]
            }]
        }));
        let output = assemble_output(body).unwrap();
        assert!(output.citations.is_empty());
    }

    #[test]
    fn test_missing_key_yields_not_configured() {
        let config = ResearchConfig {
            api_key: Some(String::new()),
            ..Default::default()
        };
        // Empty string is treated as unset
        assert!(!config.is_configured() || std::env::var("OPENAI_API_KEY").is_ok());
    }
}
