const MAX_VISIBLE_CHARS: usize = 100;

/// Shortens service text for logging and redacts credentials.
///
/// Truncation counts chars, not bytes, so CJK text is never cut inside a
/// code point.
pub fn log_excerpt(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total_chars = trimmed.chars().count();
    let excerpt = if total_chars > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{head}... ({total_chars} chars total)")
    } else {
        trimmed.to_string()
    };

    redact_sensitive_patterns(&excerpt)
}

fn redact_sensitive_patterns(text: &str) -> String {
    let patterns = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("key=", "key=[REDACTED]"),
        ("x-goog-api-key: ", "x-goog-api-key: [REDACTED]"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        let mut search_from = 0;
        while let Some(found) = result[search_from..].find(pattern) {
            let start = search_from + found;
            let value_start = start + pattern.len();
            let end = result[value_start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| value_start + i)
                .unwrap_or(result.len());
            result = format!("{}{}{}", &result[..start], replacement, &result[end..]);
            search_from = start + replacement.len();
        }
    }

    result
}
