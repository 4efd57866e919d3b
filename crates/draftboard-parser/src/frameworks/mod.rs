//! One parser module per supported framework
//!
//! Each module exposes a `parse` function (the canvas module carries
//! three) taking the research document and the provider's raw citations
//! and returning a scored [`crate::ParsedResult`].

pub(crate) mod canvas;
pub(crate) mod competitive;
pub(crate) mod market;
pub(crate) mod persona;
pub(crate) mod swot;

/// Warning and penalty applied when a document carries no citations
pub(crate) const NO_CITATIONS_WARNING: &str = "No citations provided with research content";
