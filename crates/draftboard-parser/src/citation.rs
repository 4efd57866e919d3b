//! Citation processing: deduplication and field attribution

use std::collections::HashSet;

use chrono::Utc;
use draftboard_domain::{Citation, RawCitation};
use uuid::Uuid;

use crate::section::SectionSpan;

/// Turn raw provider citations into stored citations
///
/// Duplicate URLs keep the first occurrence. When section spans are
/// supplied, each citation lists the fields whose sections contain its
/// start offset; citations with no offset, or with no span map at all,
/// get an empty field list. All citations from one call share one
/// access timestamp.
pub fn process_citations(raw: &[RawCitation], spans: Option<&[SectionSpan]>) -> Vec<Citation> {
    let accessed_at = Utc::now().to_rfc3339();
    let mut seen_urls = HashSet::new();
    let mut citations = Vec::new();

    for citation in raw {
        if !seen_urls.insert(citation.url.clone()) {
            continue;
        }

        let relevant_fields = match (spans, citation.start_index) {
            (Some(spans), Some(start)) => spans
                .iter()
                .filter(|span| span.contains(start))
                .map(|span| span.field_name.clone())
                .collect(),
            _ => Vec::new(),
        };

        citations.push(Citation {
            id: format!("cit-{}", Uuid::now_v7()),
            title: citation.title.clone(),
            url: citation.url.clone(),
            accessed_at: accessed_at.clone(),
            relevant_fields,
        });
    }

    citations
}
