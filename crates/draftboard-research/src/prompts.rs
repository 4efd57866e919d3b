//! Prompt generation for deep-research calls
//!
//! The response format requested here is what `draftboard-parser` expects:
//! `##` sections named after each framework's fields, bullet lists, and
//! dollar figures with magnitude words.

use draftboard_domain::FrameworkType;
use std::fmt::Write as _;

/// System prompt shared by every framework research call
pub const SYSTEM_PROMPT: &str = "\
You are a business research analyst. Research the business described by the \
user and answer in structured markdown: use `##` headers for each requested \
section, bullet lists for enumerations, and explicit dollar figures with \
magnitude words (million, billion). Cite web sources for every factual \
claim. Do not invent figures; when data is unavailable, say so.";

/// The business under research, as supplied by the caller
#[derive(Debug, Clone, Default)]
pub struct ResearchContext {
    /// What the business does
    pub business_description: String,
    /// Industry or vertical
    pub industry: Option<String>,
    /// Geographic focus
    pub geography: Option<String>,
    /// Target customer description
    pub target_customers: Option<String>,
    /// The product or service offered
    pub product_or_service: Option<String>,
    /// Known competitors, if any
    pub competitors: Vec<String>,
}

impl ResearchContext {
    fn preamble(&self) -> String {
        let mut out = format!("Business: {}\n", self.business_description);
        if let Some(industry) = &self.industry {
            let _ = writeln!(out, "Industry: {industry}");
        }
        if let Some(geography) = &self.geography {
            let _ = writeln!(out, "Geography: {geography}");
        }
        if let Some(customers) = &self.target_customers {
            let _ = writeln!(out, "Target customers: {customers}");
        }
        if let Some(product) = &self.product_or_service {
            let _ = writeln!(out, "Product/service: {product}");
        }
        if !self.competitors.is_empty() {
            let _ = writeln!(out, "Known competitors: {}", self.competitors.join(", "));
        }
        out
    }
}

/// Build the user prompt for one framework
pub fn framework_prompt(framework: FrameworkType, context: &ResearchContext) -> String {
    let instructions = match framework {
        FrameworkType::MarketSizing => {
            "Size this market. Respond with these sections:\n\
             ## TAM (Total Addressable Market) — dollar value and reasoning\n\
             ## SAM (Serviceable Addressable Market) — dollar value and reasoning\n\
             ## SOM (Serviceable Obtainable Market) — dollar value and reasoning\n\
             ## Growth — CAGR as a percentage\n\
             ## Sources — bullet list of data sources"
        }
        FrameworkType::CompetitiveAnalysis => {
            "Identify the main competitors. For each, write a `## <Company name>` \
             section with a one-paragraph description, then `### Strengths` and \
             `### Weaknesses` bullet lists (3-5 items each). Finish with a \
             `## Our Position` section listing differentiators, then `### Gaps` \
             and `### Opportunities` bullet lists."
        }
        FrameworkType::UserPersona => {
            "Develop 2-4 target user personas. For each, write a \
             `## Persona N: <Name>` section with `Age:`, `Occupation:`, and \
             `Location:` lines, then `### Goals`, `### Frustrations`, and \
             `### Motivations` bullet lists."
        }
        FrameworkType::SwotAnalysis => {
            "Produce a SWOT analysis with `## Strengths`, `## Weaknesses`, \
             `## Opportunities`, and `## Threats` sections, each a bullet list \
             of 3-6 evidence-backed items."
        }
        FrameworkType::BusinessModelCanvas => {
            "Draft a business model canvas with one `##` section per block: \
             Customer Segments, Value Propositions, Channels, Customer \
             Relationships, Revenue Streams, Key Resources, Key Activities, \
             Key Partnerships, Cost Structure. Every section is a bullet list."
        }
        FrameworkType::LeanCanvas => {
            "Draft a lean canvas with `##` sections: Problem, Customer \
             Segments, Unique Value Proposition (a single sentence), Solution, \
             Channels, Revenue Streams, Cost Structure, Key Metrics. All \
             sections except the UVP are bullet lists."
        }
        FrameworkType::ValuePropositionCanvas => {
            "Build a value proposition canvas with `##` sections: Customer \
             Jobs, Pains, Gains, Products and Services, Pain Relievers, Gain \
             Creators. Every section is a bullet list."
        }
    };

    format!("{}\n{}", context.preamble(), instructions)
}
