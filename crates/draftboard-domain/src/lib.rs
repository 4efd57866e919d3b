//! Draftboard Domain Layer
//!
//! Core data model for Draftboard: the seven business-design framework types,
//! projects that group them, and the citation/research-metadata vocabulary
//! shared by the research parser and the store.
//!
//! ## Key Concepts
//!
//! - **Project**: a named container of framework entities
//! - **Entity**: one artifact — a canvas, analysis, persona, or market sizing
//! - **FrameworkType**: the tag selecting one of the seven framework shapes
//! - **Citation**: a deduplicated source reference with field attribution
//! - **ResearchMetadata**: provenance attached to entities populated from
//!   deep research (citations, confidence, model, timestamp)
//!
//! ## Architecture
//!
//! This crate carries data shapes only: no I/O, no parsing heuristics.
//! Persistence lives in `draftboard-store`, extraction in
//! `draftboard-parser`, and the external research call in
//! `draftboard-research`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod canvas;
pub mod citation;
pub mod competitive;
pub mod entity;
pub mod framework;
pub mod id;
pub mod market;
pub mod persona;
pub mod project;
pub mod swot;

// Re-exports for convenience
pub use canvas::{
    BusinessModelCanvas, CustomerProfile, LeanCanvas, UniqueValueProposition, ValueMap,
    ValuePropositionCanvas,
};
pub use citation::{Citation, RawCitation, ResearchMetadata};
pub use competitive::{CompetitiveAnalysis, Competitor, MarketPosition};
pub use entity::{Entity, EntityCore, EntityRef, FrameworkPayload, LinkedEntityRef};
pub use framework::FrameworkType;
pub use id::{EntityId, ProjectId};
pub use market::{GrowthRate, MarketEstimate, MarketSizing, MarketUnit};
pub use persona::{Behavior, Demographics, PersonaProfile, UserPersona};
pub use project::Project;
pub use swot::{Impact, SwotAnalysis, SwotItem};
