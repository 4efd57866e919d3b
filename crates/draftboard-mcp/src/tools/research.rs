//! Research tools: configuration, deep research, and framework population

use chrono::Utc;
use draftboard_domain::{
    Behavior, Demographics, Entity, FrameworkPayload, MarketEstimate, MarketSizing, RawCitation,
    ResearchMetadata, UserPersona,
};
use draftboard_parser::{parse_research, FrameworkData, MarketFigure, ParsedResult};
use draftboard_research::{
    framework_prompt, ResearchConfig, ResearchContext, ResearchOutput, ResearchProvider,
    SYSTEM_PROMPT,
};
use draftboard_store::{FileStore, NewEntity};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::info;

use crate::error::McpError;
use crate::tools::{parse_framework, parse_project_id};

/// Parameters for configure_openai
#[derive(Debug, Deserialize)]
pub struct ConfigureParams {
    /// API key to use for subsequent research calls
    #[serde(default)]
    pub api_key: Option<String>,
    /// Whether to use the full (more expensive) research model
    #[serde(default)]
    pub use_full_model: Option<bool>,
}

/// Research configuration status, with the key never echoed back
#[derive(Debug, Serialize)]
pub struct ConfigStatus {
    /// Whether an API key is available
    pub configured: bool,
    /// Model used when `use_full_model` is set
    pub full_model: String,
    /// Model used otherwise
    pub mini_model: String,
    /// Whether the full model is selected
    pub use_full_model: bool,
}

/// The business context shared by research tools
#[derive(Debug, Default, Deserialize)]
pub struct ContextParams {
    /// What the business does
    pub business_description: String,
    /// Industry or vertical
    #[serde(default)]
    pub industry: Option<String>,
    /// Geographic focus
    #[serde(default)]
    pub geography: Option<String>,
    /// Target customer description
    #[serde(default)]
    pub target_customers: Option<String>,
    /// The product or service offered
    #[serde(default)]
    pub product_or_service: Option<String>,
    /// Known competitors
    #[serde(default)]
    pub competitors: Vec<String>,
}

impl ContextParams {
    fn into_context(self) -> ResearchContext {
        ResearchContext {
            business_description: self.business_description,
            industry: self.industry,
            geography: self.geography,
            target_customers: self.target_customers,
            product_or_service: self.product_or_service,
            competitors: self.competitors,
        }
    }
}

/// Parameters for deep_research
#[derive(Debug, Deserialize)]
pub struct DeepResearchParams {
    /// Framework to research, e.g. `"market-sizing"`
    #[serde(rename = "type")]
    pub framework: String,
    /// Business context
    #[serde(flatten)]
    pub context: ContextParams,
}

/// Result of a deep_research call
#[derive(Debug, Serialize)]
pub struct DeepResearchResult {
    /// Response body, to feed into populate_framework
    pub content: String,
    /// Raw citations with character offsets
    pub citations: Vec<RawCitation>,
    /// Model that produced the response
    pub model: String,
    /// Total tokens consumed
    pub total_tokens: u64,
    /// Rough cost estimate in USD
    pub estimated_cost_usd: f64,
}

/// Parameters for populate_framework
#[derive(Debug, Deserialize)]
pub struct PopulateParams {
    /// Owning project id
    pub project_id: String,
    /// Framework type tag
    #[serde(rename = "type")]
    pub framework: String,
    /// Name for the created entity
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Research response body to parse
    pub content: String,
    /// Raw citations accompanying the response
    #[serde(default)]
    pub citations: Vec<RawCitation>,
    /// Model that produced the content, recorded as provenance
    #[serde(default)]
    pub research_model: Option<String>,
}

/// Parameters for research_and_create
#[derive(Debug, Deserialize)]
pub struct ResearchAndCreateParams {
    /// Owning project id
    pub project_id: String,
    /// Framework type tag
    #[serde(rename = "type")]
    pub framework: String,
    /// Name for the created entity
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Business context
    #[serde(flatten)]
    pub context: ContextParams,
}

/// Handle configure_openai tool invocation
pub fn handle_configure(
    config: &mut ResearchConfig,
    use_full_model: &mut bool,
    params: ConfigureParams,
) -> ConfigStatus {
    if let Some(api_key) = params.api_key {
        config.api_key = Some(api_key);
    }
    if let Some(full) = params.use_full_model {
        *use_full_model = full;
    }
    info!(use_full_model = *use_full_model, "research configuration updated");
    handle_check_config(config, *use_full_model)
}

/// Handle check_openai_config tool invocation
pub fn handle_check_config(config: &ResearchConfig, use_full_model: bool) -> ConfigStatus {
    ConfigStatus {
        configured: config.is_configured(),
        full_model: config.full_model.clone(),
        mini_model: config.mini_model.clone(),
        use_full_model,
    }
}

/// Handle deep_research tool invocation
///
/// Runs the research call and returns its raw output without persisting
/// anything; pair with populate_framework to store the result.
pub async fn handle_deep_research<P: ResearchProvider>(
    provider: &P,
    params: DeepResearchParams,
) -> Result<DeepResearchResult, McpError> {
    let framework = parse_framework(&params.framework)?;
    let prompt = framework_prompt(framework, &params.context.into_context());
    let output = provider.research(SYSTEM_PROMPT, &prompt).await?;
    Ok(DeepResearchResult {
        total_tokens: output.total_tokens(),
        estimated_cost_usd: output.estimated_cost_usd(),
        content: output.content,
        citations: output.citations,
        model: output.model,
    })
}

/// Handle populate_framework tool invocation
///
/// Parses previously-obtained research content and persists the extracted
/// data as a new entity with research provenance.
pub fn handle_populate_framework(
    store: &FileStore,
    params: PopulateParams,
) -> Result<Value, McpError> {
    let project_id = parse_project_id(&params.project_id)?;
    let framework = parse_framework(&params.framework)?;

    let parsed = parse_research(framework, &params.content, &params.citations);
    persist_parsed(
        store,
        project_id,
        params.name,
        params.description,
        parsed,
        params.research_model,
    )
}

/// Handle research_and_create tool invocation: deep_research followed by
/// populate_framework in one step
pub async fn handle_research_and_create<P: ResearchProvider>(
    provider: &P,
    store: &FileStore,
    params: ResearchAndCreateParams,
) -> Result<Value, McpError> {
    let project_id = parse_project_id(&params.project_id)?;
    let framework = parse_framework(&params.framework)?;

    let prompt = framework_prompt(framework, &params.context.into_context());
    let output: ResearchOutput = provider.research(SYSTEM_PROMPT, &prompt).await?;

    let parsed = parse_research(framework, &output.content, &output.citations);
    let mut result = persist_parsed(
        store,
        project_id,
        params.name,
        params.description,
        parsed,
        Some(output.model.clone()),
    )?;
    result["research"] = json!({
        "totalTokens": output.total_tokens(),
        "estimatedCostUsd": output.estimated_cost_usd(),
        "model": output.model,
    });
    Ok(result)
}

fn persist_parsed(
    store: &FileStore,
    project_id: draftboard_domain::ProjectId,
    name: String,
    description: Option<String>,
    parsed: ParsedResult,
    research_model: Option<String>,
) -> Result<Value, McpError> {
    let payload = payload_from_data(parsed.data)?;
    let metadata = ResearchMetadata {
        citations: parsed.citations,
        researched_at: Some(Utc::now().to_rfc3339()),
        research_model,
        confidence: Some(parsed.confidence),
        raw_content: Some(parsed.raw_content),
    };
    info!(
        entity_type = %payload.framework_type(),
        confidence = parsed.confidence,
        missing = parsed.missing_fields.len(),
        "persisting parsed research"
    );

    let entity: Entity = store.create_entity(NewEntity {
        project_id,
        name,
        description,
        payload,
        research_metadata: Some(metadata),
    })?;

    Ok(json!({
        "entity": entity,
        "confidence": parsed.confidence,
        "missingFields": parsed.missing_fields,
        "warnings": parsed.warnings,
    }))
}

/// Map parsed framework data onto a persistable payload
///
/// Absent market values default to 0; a persona entity takes the first
/// extracted persona.
fn payload_from_data(data: FrameworkData) -> Result<FrameworkPayload, McpError> {
    Ok(match data {
        FrameworkData::MarketSizing(d) => FrameworkPayload::MarketSizing(MarketSizing {
            tam: estimate(d.tam),
            sam: estimate(d.sam),
            som: estimate(d.som),
            growth_rate: d.growth_rate,
        }),
        FrameworkData::CompetitiveAnalysis(d) => FrameworkPayload::CompetitiveAnalysis(d),
        FrameworkData::UserPersona(d) => {
            let (demographics, behavior) = match d.personas.into_iter().next() {
                Some(p) => (p.demographics, p.behavior),
                None => (Demographics::default(), Behavior::default()),
            };
            FrameworkPayload::UserPersona(UserPersona {
                demographics,
                behavior,
                quote: None,
                bio: None,
            })
        }
        FrameworkData::SwotAnalysis(d) => FrameworkPayload::SwotAnalysis(d),
        FrameworkData::BusinessModelCanvas(d) => FrameworkPayload::BusinessModelCanvas(d),
        FrameworkData::LeanCanvas(d) => FrameworkPayload::LeanCanvas(d),
        FrameworkData::ValuePropositionCanvas(d) => FrameworkPayload::ValuePropositionCanvas(d),
        FrameworkData::Unknown(_) => {
            return Err(McpError::InvalidRequest(
                "Cannot persist an unrecognized framework".to_string(),
            ))
        }
    })
}

fn estimate(figure: MarketFigure) -> MarketEstimate {
    MarketEstimate {
        value: figure.value.unwrap_or(0.0),
        currency: figure.currency,
        unit: figure.unit,
        methodology: figure.methodology,
        sources: figure.sources,
    }
}
