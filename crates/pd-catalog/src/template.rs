//! Placeholder extraction and substitution for prompt templates.
//!
//! A placeholder is a `[[NAME]]` token inside the template text. "Run"
//! replaces every occurrence of each filled token; "Clear" is handled by the
//! caller keeping the original template around.

use std::sync::LazyLock;

use regex::Regex;

/// `[[` … `]]`, non-greedy so adjacent tokens do not merge.
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\[.*?\]\]").unwrap());

/// A placeholder token extracted from a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Full token text, brackets included (e.g. `[[TOPIC]]`).
    pub token: String,
    /// Display key without brackets (e.g. `TOPIC`), used to label the input.
    pub key: String,
}

/// Extract the distinct placeholder tokens of `template` in first-occurrence
/// order. Dedup is on the full token text, so `[[TOPIC]]` appearing twice
/// yields one placeholder.
pub fn extract_placeholders(template: &str) -> Vec<Placeholder> {
    let mut out: Vec<Placeholder> = Vec::new();
    for m in TOKEN_RE.find_iter(template) {
        let token = m.as_str();
        if out.iter().any(|p| p.token == token) {
            continue;
        }
        let key = token.trim_start_matches("[[").trim_end_matches("]]").to_string();
        out.push(Placeholder { token: token.to_string(), key });
    }
    out
}

/// Substitute entered values into `template`. `fills` pairs each full token
/// text with its entered value; tokens with an empty value are left literal.
///
/// Replacement is literal string replacement of every occurrence, so
/// punctuation inside a token never changes matching semantics.
pub fn substitute(template: &str, fills: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (token, value) in fills {
        if value.is_empty() {
            continue;
        }
        result = result.replace(token, value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_token_extracts_once() {
        let placeholders = extract_placeholders("Write about [[TOPIC]] for [[TOPIC]]");
        assert_eq!(placeholders.len(), 1);
        assert_eq!(placeholders[0].token, "[[TOPIC]]");
        assert_eq!(placeholders[0].key, "TOPIC");
    }

    #[test]
    fn extraction_preserves_first_occurrence_order() {
        let placeholders = extract_placeholders("[[B]] then [[A]] then [[B]]");
        let keys: Vec<&str> = placeholders.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["B", "A"]);
    }

    #[test]
    fn no_tokens_means_no_placeholders() {
        assert!(extract_placeholders("plain text [not a token]").is_empty());
    }

    #[test]
    fn adjacent_tokens_do_not_merge() {
        let placeholders = extract_placeholders("[[A]][[B]]");
        assert_eq!(placeholders.len(), 2);
    }

    #[test]
    fn run_replaces_every_occurrence() {
        let out = substitute("Write about [[TOPIC]] for [[TOPIC]]", &[("[[TOPIC]]", "cats")]);
        assert_eq!(out, "Write about cats for cats");
    }

    #[test]
    fn empty_value_leaves_token_literal() {
        let out = substitute("Write about [[TOPIC]] for [[TOPIC]]", &[("[[TOPIC]]", "")]);
        assert_eq!(out, "Write about [[TOPIC]] for [[TOPIC]]");
    }

    #[test]
    fn punctuation_in_token_is_matched_literally() {
        let out = substitute("ask [[WHO?]] now", &[("[[WHO?]]", "me")]);
        assert_eq!(out, "ask me now");
    }

    #[test]
    fn partial_fill_substitutes_only_filled_tokens() {
        let out = substitute("[[A]] and [[B]]", &[("[[A]]", "x"), ("[[B]]", "")]);
        assert_eq!(out, "x and [[B]]");
    }
}
