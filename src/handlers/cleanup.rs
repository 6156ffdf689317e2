//! Markup cleanup for code block content.
//!
//! Code pasted into a rich-text editor arrives with embedded markup: `<div>`
//! wrappers standing in for line breaks and formatting tags nested inside
//! the source text. Fenced output needs the plain source back.

use regex::Regex;

/// Strips editor markup out of pasted code.
pub struct TagStripper {
    tag_regex: Regex,
}

impl TagStripper {
    /// Create a new stripper with the tag token grammar compiled.
    pub fn new() -> Self {
        Self {
            // optional closing slash, tag name, optional attributes,
            // optional self-closing slash
            tag_regex: Regex::new(r"</?[A-Za-z][^<>]*?/?>").unwrap(),
        }
    }

    /// Clean a code string for fencing.
    ///
    /// `<div>` marks a visual line break in editor output; it becomes a real
    /// newline before the remaining tags are stripped.
    pub fn clean(&self, code: &str) -> String {
        let code = code.replace("<div>", "\n");
        self.strip_tags(&code)
    }

    /// Remove every markup-tag-shaped token from the string.
    ///
    /// Tokens are collected first, deduplicated, and sorted by descending
    /// length so a longer token is removed before any shorter substring of
    /// it would be. Removal is global literal replacement: a token string
    /// recurring elsewhere in the text is removed there too.
    fn strip_tags(&self, input: &str) -> String {
        let mut tokens: Vec<&str> = self.tag_regex.find_iter(input).map(|m| m.as_str()).collect();
        tokens.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        tokens.dedup();

        let mut result = input.to_string();
        for token in tokens {
            if token.trim().is_empty() {
                continue;
            }
            result = result.replace(token, "");
        }
        result
    }
}

impl Default for TagStripper {
    fn default() -> Self {
        Self::new()
    }
}
