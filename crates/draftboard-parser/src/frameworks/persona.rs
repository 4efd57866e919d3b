//! User persona parser: numbered persona blocks

use draftboard_domain::{Behavior, Demographics, PersonaProfile, RawCitation};
use regex::Regex;
use tracing::debug;

use crate::citation::process_citations;
use crate::frameworks::NO_CITATIONS_WARNING;
use crate::list::extract_list_items;
use crate::score::Score;
use crate::section::extract_section;
use crate::types::{FrameworkData, ParsedResult, PersonaData};

const MAX_ITEMS: usize = 5;

pub(crate) fn parse(content: &str, raw_citations: &[RawCitation]) -> ParsedResult {
    let mut score = Score::new();

    let header = Regex::new(r"(?i)##\s*Persona\s*\d+").expect("valid persona delimiter");
    let matches: Vec<_> = header.find_iter(content).collect();

    let mut personas = Vec::new();
    for (i, m) in matches.iter().enumerate() {
        let end = matches
            .get(i + 1)
            .map(|next| next.start())
            .unwrap_or(content.len());
        let chunk = &content[m.end()..end];
        if chunk.len() < 50 {
            continue;
        }
        if let Some(persona) = parse_persona(chunk) {
            personas.push(persona);
        }
    }

    // Both penalties stack when nothing was found at all
    if personas.is_empty() {
        score.missing("personas", 50);
    }
    if personas.len() < 2 {
        score.warn_penalize(
            format!("Only {} persona(s) identified", personas.len()),
            20,
        );
    }
    if raw_citations.is_empty() {
        score.warn_penalize(NO_CITATIONS_WARNING, 15);
    }

    let citations = process_citations(raw_citations, None);
    let (confidence, missing_fields, warnings) = score.into_parts();
    debug!(confidence, personas = personas.len(), "parsed personas");

    ParsedResult {
        data: FrameworkData::UserPersona(PersonaData { personas }),
        citations,
        confidence,
        missing_fields,
        warnings,
        raw_content: content.to_string(),
    }
}

/// A chunk becomes a persona only when it carries goals or frustrations
fn parse_persona(chunk: &str) -> Option<PersonaProfile> {
    let mut goals = extract_list_items(&extract_section(chunk, "Goals"));
    goals.truncate(MAX_ITEMS);
    let mut frustrations =
        extract_list_items(&extract_section(chunk, "Frustrations|Pain Points|Pains"));
    frustrations.truncate(MAX_ITEMS);
    if goals.is_empty() && frustrations.is_empty() {
        return None;
    }
    let mut motivations = extract_list_items(&extract_section(chunk, "Motivations|Drivers"));
    motivations.truncate(MAX_ITEMS);

    Some(PersonaProfile {
        name: persona_name(chunk),
        demographics: Demographics {
            age: field(chunk, r"(?i)Age[:\s]+([^\n]+)"),
            occupation: field(chunk, r"(?i)(?:Occupation|Job|Role)[:\s]+([^\n]+)"),
            location: field(chunk, r"(?i)(?:Location|Geography)[:\s]+([^\n]+)"),
            income: None,
            education: None,
        },
        behavior: Behavior {
            goals,
            frustrations,
            motivations,
        },
    })
}

/// The persona name lives on the remainder of the header line
fn persona_name(chunk: &str) -> String {
    let name_pattern =
        Regex::new(r#"^[:\s]*([A-Za-z\s"']+?)(?:\n|$)"#).expect("valid name pattern");
    name_pattern
        .captures(chunk)
        .map(|cap| cap[1].trim_matches(['"', '\'', ':', ' ']).to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "Unnamed Persona".to_string())
}

fn field(chunk: &str, pattern: &str) -> Option<String> {
    Regex::new(pattern)
        .expect("valid field pattern")
        .captures(chunk)
        .map(|cap| cap[1].trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = "\
# Target Personas

## Persona 1: Maya the Maker
Age: 29
Occupation: Indie hardware founder
Location: Austin, TX

### Goals
- Ship a first production run
- Keep unit costs predictable

### Frustrations
- Quotes take weeks to arrive
- Opaque supplier pricing

### Motivations
- Creative independence

## Persona 2: Derek the Director
Age: 47
Role: VP of Operations
Geography: Chicago, IL

### Goals
- Reduce procurement overhead

### Pain Points
- Tooling does not integrate with ERP
";

    fn cite(url: &str) -> RawCitation {
        RawCitation::new("Source", url)
    }

    #[test]
    fn test_two_personas_extracted() {
        let result = parse(DOC, &[cite("https://a.example")]);
        let FrameworkData::UserPersona(data) = &result.data else {
            panic!("wrong variant");
        };
        assert_eq!(data.personas.len(), 2);
        assert_eq!(data.personas[0].name, "Maya the Maker");
        assert_eq!(data.personas[1].name, "Derek the Director");
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn test_demographics_fields() {
        let result = parse(DOC, &[cite("https://a.example")]);
        let FrameworkData::UserPersona(data) = &result.data else {
            panic!("wrong variant");
        };
        let maya = &data.personas[0].demographics;
        assert_eq!(maya.age.as_deref(), Some("29"));
        assert_eq!(maya.occupation.as_deref(), Some("Indie hardware founder"));
        assert_eq!(maya.location.as_deref(), Some("Austin, TX"));
        let derek = &data.personas[1].demographics;
        assert_eq!(derek.occupation.as_deref(), Some("VP of Operations"));
        assert_eq!(derek.location.as_deref(), Some("Chicago, IL"));
    }

    #[test]
    fn test_behavior_lists() {
        let result = parse(DOC, &[cite("https://a.example")]);
        let FrameworkData::UserPersona(data) = &result.data else {
            panic!("wrong variant");
        };
        assert_eq!(data.personas[0].behavior.goals.len(), 2);
        assert_eq!(data.personas[0].behavior.motivations, vec!["Creative independence"]);
        // Pain Points header feeds frustrations
        assert_eq!(
            data.personas[1].behavior.frustrations,
            vec!["Tooling does not integrate with ERP"]
        );
    }

    #[test]
    fn test_chunk_without_goals_or_frustrations_dropped() {
        let doc = "## Persona 1: Ghost\nAge: 30\nJust some prose without any structured lists.\n";
        let result = parse(doc, &[]);
        let FrameworkData::UserPersona(data) = &result.data else {
            panic!("wrong variant");
        };
        assert!(data.personas.is_empty());
        assert!(result.missing_fields.contains(&"personas".to_string()));
        // 50 for no personas + 20 for fewer than two + 15 for no citations
        assert_eq!(result.confidence, 15);
    }

    #[test]
    fn test_single_persona_penalized() {
        let doc = "\
## Persona 1: Solo
Age: 30

### Goals
- Something worthwhile to pursue
";
        let result = parse(doc, &[cite("https://a.example")]);
        assert_eq!(result.confidence, 80);
        assert!(result.warnings.iter().any(|w| w.contains("1 persona")));
    }

    #[test]
    fn test_unnamed_persona_default() {
        let doc = "\
## Persona 1
### Goals
- Get unblocked on the thing that matters
### Frustrations
- Everything is slow
";
        let result = parse(doc, &[cite("https://a.example")]);
        let FrameworkData::UserPersona(data) = &result.data else {
            panic!("wrong variant");
        };
        assert_eq!(data.personas[0].name, "Unnamed Persona");
    }

    #[test]
    fn test_short_chunk_skipped() {
        let doc = "## Persona 1: X\n- tiny\n";
        let result = parse(doc, &[]);
        let FrameworkData::UserPersona(data) = &result.data else {
            panic!("wrong variant");
        };
        assert!(data.personas.is_empty());
    }
}
