//! Free-text list parsing for keyword and persona fields.

/// Split user input on commas and newlines, trim each entry and drop the
/// empty ones. Order is preserved and duplicates are kept.
pub fn parse_keywords(input: &str) -> Vec<String> {
    input
        .split(|c| matches!(c, ',' | '，' | '、' | '\n' | '\r'))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join the first `n` keywords for one-line summaries.
pub fn head(keywords: &[String], n: usize, separator: &str) -> String {
    keywords
        .iter()
        .take(n)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(separator)
}
