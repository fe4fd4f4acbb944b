//! Text normalization: lower-case, punctuation to spaces, split on whitespace.

/// Splits `text` into lower-case tokens.
///
/// Every character that is neither alphanumeric nor whitespace becomes a
/// space, so `"C++,Rust"` yields `["c", "rust"]` rather than one merged token.
/// Underscore counts as punctuation.
pub fn normalize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_no_tokens() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \n\t ").is_empty());
    }

    #[test]
    fn test_punctuation_only_yields_no_tokens() {
        assert!(normalize("!!! ... ,,, ---").is_empty());
    }

    #[test]
    fn test_lowercases_and_splits() {
        assert_eq!(
            normalize("Senior RUST Engineer"),
            vec!["senior", "rust", "engineer"]
        );
    }

    #[test]
    fn test_punctuation_separates_tokens() {
        assert_eq!(normalize("C++,Rust"), vec!["c", "rust"]);
        assert_eq!(normalize("Node.js"), vec!["node", "js"]);
        assert_eq!(normalize("CI/CD"), vec!["ci", "cd"]);
    }

    #[test]
    fn test_underscore_is_punctuation() {
        assert_eq!(normalize("snake_case"), vec!["snake", "case"]);
    }

    #[test]
    fn test_keeps_digits_and_non_ascii_letters() {
        assert_eq!(normalize("5+ years, Café"), vec!["5", "years", "café"]);
    }
}
