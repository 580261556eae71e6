use std::collections::HashSet;

use super::SearchError;

/// Splits free-text ingredient input into normalized tokens
///
/// Commas and newlines separate entries; runs of separators count as one.
/// Each token is trimmed and lower-cased, empty tokens are dropped, and
/// duplicates are removed keeping the first occurrence. Only blank input is
/// an error; input made of separators alone yields no tokens.
pub fn normalize(text: &str) -> Result<Vec<String>, SearchError> {
    if text.trim().is_empty() {
        return Err(SearchError::EmptyInput);
    }

    let mut seen = HashSet::new();
    let tokens: Vec<String> = text
        .split([',', '\n'])
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .filter(|token| seen.insert(token.clone()))
        .collect();

    Ok(tokens)
}
