use crate::config::ExtractionConfig;

/// Drop every line that is empty or whitespace-only
pub fn strip_blank_lines(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Truncate to at most `max_chars` characters, respecting char boundaries
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Apply the configured post-processing to raw extracted text:
/// optional blank-line stripping, then truncation to the configured cap
pub fn shape_output(text: &str, config: &ExtractionConfig) -> String {
    let text = if config.strip_blank_lines {
        strip_blank_lines(text)
    } else {
        text.to_string()
    };

    truncate_chars(&text, config.max_output_chars)
}
