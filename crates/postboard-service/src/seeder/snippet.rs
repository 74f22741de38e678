//! Snippet cleanup: entity decoding and length capping

/// Longest snippet the seeder will post, in characters
pub const MAX_SNIPPET_CHARS: usize = 400;

/// Turn raw provider text into postable content
///
/// Decodes HTML entities (the full HTML5 named table plus numeric
/// references), keeps the first 400 characters, and trims. Returns `None`
/// when nothing is left.
pub fn clean_snippet(raw: &str) -> Option<String> {
    let decoded = html_escape::decode_html_entities(raw);
    let capped: String = decoded.chars().take(MAX_SNIPPET_CHARS).collect();
    let trimmed = capped.trim();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
