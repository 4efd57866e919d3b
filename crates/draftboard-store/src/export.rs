//! Project export: JSON bundle and rendered Markdown

use std::fmt::Write as _;

use draftboard_domain::{
    Entity, FrameworkPayload, MarketEstimate, MarketSizing, ProjectId, SwotItem,
};
use serde_json::json;

use crate::{FileStore, StoreError};

/// Bundle a project and all of its entities into one JSON value
pub fn export_project_json(
    store: &FileStore,
    project_id: ProjectId,
) -> Result<serde_json::Value, StoreError> {
    let project = store.get_project(project_id)?;
    let entities = store.list_project_entities(project_id)?;
    Ok(json!({
        "project": project,
        "entities": entities,
    }))
}

/// Render a project and its entities as a Markdown document
pub fn export_project_markdown(
    store: &FileStore,
    project_id: ProjectId,
) -> Result<String, StoreError> {
    let project = store.get_project(project_id)?;
    let entities = store.list_project_entities(project_id)?;

    let mut out = String::new();
    let _ = writeln!(out, "# {}\n", project.name);
    if let Some(description) = &project.description {
        let _ = writeln!(out, "{description}\n");
    }
    if !project.tags.is_empty() {
        let _ = writeln!(out, "Tags: {}\n", project.tags.join(", "));
    }
    let _ = writeln!(
        out,
        "Created: {} | Updated: {}\n",
        project.created_at, project.updated_at
    );

    for entity in &entities {
        render_entity(&mut out, entity);
    }
    Ok(out)
}

/// Format a USD amount with a B/M/K magnitude suffix
///
/// `4.5e9` renders as `$4.5B`, `900e6` as `$900.0M`, amounts under a
/// thousand verbatim.
pub fn format_currency(value: f64) -> String {
    if value >= 1e9 {
        format!("${:.1}B", value / 1e9)
    } else if value >= 1e6 {
        format!("${:.1}M", value / 1e6)
    } else if value >= 1e3 {
        format!("${:.1}K", value / 1e3)
    } else {
        format!("${value}")
    }
}

fn render_entity(out: &mut String, entity: &Entity) {
    let _ = writeln!(out, "## {} ({})\n", entity.core.name, entity.entity_type());
    if let Some(description) = &entity.core.description {
        let _ = writeln!(out, "{description}\n");
    }

    match &entity.payload {
        FrameworkPayload::MarketSizing(data) => render_market(out, data),
        FrameworkPayload::CompetitiveAnalysis(data) => {
            for competitor in &data.competitors {
                let _ = writeln!(out, "### {}\n", competitor.name);
                if let Some(description) = &competitor.description {
                    let _ = writeln!(out, "{description}\n");
                }
                bullets(out, "Strengths", &competitor.strengths);
                bullets(out, "Weaknesses", &competitor.weaknesses);
            }
            if let Some(position) = &data.our_position {
                let _ = writeln!(out, "### Our Position\n");
                bullets(out, "Differentiators", &position.differentiators);
                bullets(out, "Gaps", &position.gaps);
                bullets(out, "Opportunities", &position.opportunities);
            }
        }
        FrameworkPayload::UserPersona(data) => {
            let demographics = &data.demographics;
            for (label, value) in [
                ("Age", &demographics.age),
                ("Occupation", &demographics.occupation),
                ("Location", &demographics.location),
                ("Income", &demographics.income),
                ("Education", &demographics.education),
            ] {
                if let Some(value) = value {
                    let _ = writeln!(out, "- **{label}**: {value}");
                }
            }
            let _ = writeln!(out);
            bullets(out, "Goals", &data.behavior.goals);
            bullets(out, "Frustrations", &data.behavior.frustrations);
            bullets(out, "Motivations", &data.behavior.motivations);
            if let Some(quote) = &data.quote {
                let _ = writeln!(out, "> {quote}\n");
            }
        }
        FrameworkPayload::SwotAnalysis(data) => {
            swot_bullets(out, "Strengths", &data.strengths);
            swot_bullets(out, "Weaknesses", &data.weaknesses);
            swot_bullets(out, "Opportunities", &data.opportunities);
            swot_bullets(out, "Threats", &data.threats);
        }
        FrameworkPayload::BusinessModelCanvas(data) => {
            bullets(out, "Customer Segments", data.customer_segments.iter().map(|b| b.segment.as_str()));
            bullets(out, "Value Propositions", data.value_propositions.iter().map(|b| b.proposition.as_str()));
            bullets(out, "Channels", data.channels.iter().map(|b| b.channel.as_str()));
            bullets(out, "Customer Relationships", data.customer_relationships.iter().map(|b| b.relationship.as_str()));
            bullets(out, "Revenue Streams", data.revenue_streams.iter().map(|b| b.stream.as_str()));
            bullets(out, "Key Resources", data.key_resources.iter().map(|b| b.resource.as_str()));
            bullets(out, "Key Activities", data.key_activities.iter().map(|b| b.activity.as_str()));
            bullets(out, "Key Partnerships", data.key_partnerships.iter().map(|b| b.partner.as_str()));
            bullets(out, "Cost Structure", data.cost_structure.iter().map(|b| b.cost.as_str()));
        }
        FrameworkPayload::LeanCanvas(data) => {
            bullets(out, "Problem", data.problem.iter().map(|b| b.problem.as_str()));
            bullets(out, "Customer Segments", data.customer_segments.iter().map(|b| b.segment.as_str()));
            let _ = writeln!(
                out,
                "### Unique Value Proposition\n\n{}\n",
                data.unique_value_proposition.proposition
            );
            bullets(out, "Solution", data.solution.iter().map(|b| b.feature.as_str()));
            bullets(out, "Channels", data.channels.iter().map(String::as_str));
            bullets(out, "Revenue Streams", data.revenue_streams.iter().map(|b| b.stream.as_str()));
            bullets(out, "Cost Structure", data.cost_structure.iter().map(|b| b.cost.as_str()));
            bullets(out, "Key Metrics", data.key_metrics.iter().map(|b| b.metric.as_str()));
        }
        FrameworkPayload::ValuePropositionCanvas(data) => {
            let _ = writeln!(out, "### Customer Profile\n");
            bullets(out, "Customer Jobs", data.customer_profile.customer_jobs.iter().map(|b| b.job.as_str()));
            bullets(out, "Pains", data.customer_profile.pains.iter().map(|b| b.pain.as_str()));
            bullets(out, "Gains", data.customer_profile.gains.iter().map(|b| b.gain.as_str()));
            let _ = writeln!(out, "### Value Map\n");
            bullets(out, "Products and Services", data.value_map.products_and_services.iter().map(|b| b.item.as_str()));
            bullets(out, "Pain Relievers", data.value_map.pain_relievers.iter().map(|b| b.reliever.as_str()));
            bullets(out, "Gain Creators", data.value_map.gain_creators.iter().map(|b| b.creator.as_str()));
        }
    }

    if let Some(metadata) = &entity.core.research_metadata {
        if let Some(confidence) = metadata.confidence {
            let _ = writeln!(out, "_Research confidence: {confidence}%_\n");
        }
        if !metadata.citations.is_empty() {
            let _ = writeln!(out, "### Sources\n");
            for citation in &metadata.citations {
                let _ = writeln!(out, "- [{}]({})", citation.title, citation.url);
            }
            let _ = writeln!(out);
        }
    }
}

fn render_market(out: &mut String, data: &MarketSizing) {
    let estimate = |out: &mut String, label: &str, figure: &MarketEstimate| {
        let _ = writeln!(out, "- **{label}**: {}", format_currency(figure.value));
        if let Some(methodology) = &figure.methodology {
            let _ = writeln!(out, "  - Methodology: {methodology}");
        }
    };
    estimate(out, "TAM", &data.tam);
    estimate(out, "SAM", &data.sam);
    estimate(out, "SOM", &data.som);
    if let Some(growth) = &data.growth_rate {
        let _ = writeln!(out, "- **Growth**: {}% ({})", growth.rate, growth.period);
    }
    let _ = writeln!(out);
}

fn bullets<I, S>(out: &mut String, heading: &str, items: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let items: Vec<S> = items.into_iter().collect();
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "### {heading}\n");
    for item in items {
        let _ = writeln!(out, "- {}", item.as_ref());
    }
    let _ = writeln!(out);
}

fn swot_bullets(out: &mut String, heading: &str, items: &[SwotItem]) {
    bullets(out, heading, items.iter().map(|i| i.item.as_str()));
}
