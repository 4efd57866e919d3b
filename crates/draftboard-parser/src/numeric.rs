//! Numeric extraction: currency magnitudes with unit suffixes, percentages

use regex::Regex;

/// Multiplier for a unit suffix word or letter (case-insensitive)
fn unit_multiplier(unit: &str) -> f64 {
    match unit.to_ascii_lowercase().as_str() {
        "k" | "thousand" => 1_000.0,
        "m" | "million" => 1_000_000.0,
        "b" | "billion" => 1_000_000_000.0,
        "t" | "trillion" => 1_000_000_000_000.0,
        _ => 1.0,
    }
}

/// Extract a numeric value from text, trying patterns in priority order
///
/// Each pattern must capture the number in group 1 and (optionally) a unit
/// word/letter in group 2. The first pattern that matches anywhere in the
/// text wins; thousands separators are stripped before parsing and the
/// value is scaled by the unit (`k`/`m`/`b`/`t` and their words).
pub fn extract_number(text: &str, patterns: &[Regex]) -> Option<f64> {
    for pattern in patterns {
        if let Some(caps) = pattern.captures(text) {
            let digits = caps[1].replace(',', "");
            let value: f64 = match digits.parse() {
                Ok(v) => v,
                // Separator soup like "1.2.3" - treat as no match for this pattern
                Err(_) => continue,
            };
            let scale = caps
                .get(2)
                .map(|u| unit_multiplier(u.as_str()))
                .unwrap_or(1.0);
            return Some(value * scale);
        }
    }
    None
}

/// Extract the first percentage (`12.5%` → `12.5`) from text
pub fn extract_percentage(text: &str) -> Option<f64> {
    let re = Regex::new(r"(\d+(?:\.\d+)?)\s*%").expect("valid percentage pattern");
    re.captures(text)
        .and_then(|caps| caps[1].parse().ok())
}

/// Currency patterns for market figures, in priority order:
/// `$<num><unit>` → `USD <num><unit>` → `<num><unit> USD/$/dollars`
pub(crate) fn currency_patterns() -> Vec<Regex> {
    [
        r"(?i)\$\s*([\d,.]+)\s*(trillion|billion|million|t|b|m)?",
        r"(?i)USD\s*([\d,.]+)\s*(trillion|billion|million|t|b|m)?",
        r"(?i)([\d,.]+)\s*(trillion|billion|million)\s*(?:USD|\$|dollars)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid currency pattern"))
    .collect()
}
