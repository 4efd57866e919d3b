//! Bullet-list item extraction

use regex::Regex;

/// Pull bullet items (`-` or `*`) out of a markdown fragment
///
/// Leading bold markers are stripped with the rest of the `*` run, items
/// are trimmed, and anything empty or 200+ characters is dropped.
pub fn extract_list_items(text: &str) -> Vec<String> {
    let bullet =
        Regex::new(r"(?m)^[ \t]*[-*][ \t]+\*{0,2}([^*\n]+)").expect("valid bullet pattern");

    bullet
        .captures_iter(text)
        .map(|cap| cap[1].trim().to_string())
        .filter(|item| !item.is_empty() && item.len() < 200)
        .collect()
}
