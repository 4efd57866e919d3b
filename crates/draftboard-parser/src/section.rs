//! Section location: markdown header matching and span computation

use regex::Regex;

/// Half-open character range `[start, end)` attributed to one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    /// Field path this span belongs to, e.g. `"tam"` or `"competitors.1"`
    pub field_name: String,
    /// Offset of the section's header within the document
    pub start: usize,
    /// End offset (next section's start, or document length)
    pub end: usize,
}

impl SectionSpan {
    /// Whether the span contains the given character offset
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// Regex matching a markdown header line carrying one of the alternatives
///
/// One to three leading `#` characters are accepted: research output nests
/// `###` subsections under each `##` block and the alternatives must hit
/// both levels.
fn header_regex(alternatives: &str) -> Regex {
    Regex::new(&format!(r"(?mi)^[ \t]*#{{1,3}}[ \t]*(?:{})", alternatives))
        .expect("valid header alternation")
}

/// Any header line, used as a section terminator
fn any_header_regex() -> Regex {
    Regex::new(r"(?m)^[ \t]*#").expect("valid header terminator pattern")
}

/// Locate the section span of each field within the document
///
/// `fields` maps field name → header-alternation string (e.g.
/// `("tam", "TAM|Total Addressable Market")`). The first header match per
/// field is recorded; spans end where the next matched field begins (by
/// offset), or at document length. Fields with no header match produce no
/// span. The returned order follows the `fields` table, not offset order.
pub fn locate_sections(text: &str, fields: &[(&str, &str)]) -> Vec<SectionSpan> {
    let mut starts: Vec<(usize, usize)> = Vec::new(); // (table index, offset)
    for (idx, (_, alternatives)) in fields.iter().enumerate() {
        if let Some(m) = header_regex(alternatives).find(text) {
            starts.push((idx, m.start()));
        }
    }

    // End of each span is the next span's start in offset order
    let mut by_offset = starts.clone();
    by_offset.sort_by_key(|&(_, offset)| offset);
    let mut ends = vec![text.len(); starts.len()];
    for window in 0..by_offset.len() {
        let (idx, _) = by_offset[window];
        let end = by_offset
            .get(window + 1)
            .map(|&(_, next)| next)
            .unwrap_or(text.len());
        if let Some(pos) = starts.iter().position(|&(i, _)| i == idx) {
            ends[pos] = end;
        }
    }

    starts
        .iter()
        .zip(ends)
        .map(|(&(idx, start), end)| SectionSpan {
            field_name: fields[idx].0.to_string(),
            start,
            end,
        })
        .collect()
}

/// Extract the text between a matched header and the next header of any
/// kind (or end of document), trimmed
///
/// Content begins right after the header alternative (and any `:`/spaces)
/// on the header line itself, so `## TAM: $4.5 billion` yields
/// `$4.5 billion...`. Returns an empty string when no header matches.
pub fn extract_section(text: &str, alternatives: &str) -> String {
    let header = Regex::new(&format!(
        r"(?mi)^[ \t]*#{{1,3}}[ \t]*(?:{})[: \t]*",
        alternatives
    ))
    .expect("valid header alternation");

    let Some(m) = header.find(text) else {
        return String::new();
    };

    let rest = &text[m.end()..];
    let end = any_header_regex()
        .find(rest)
        .map(|next| next.start())
        .unwrap_or(rest.len());
    rest[..end].trim().to_string()
}
