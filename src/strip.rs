//! Markdown and whitespace normalization.
//!
//! The Markdown pass is an ordered table of named rules so the order
//! dependencies between them (`bold` before `italic`, `code_fence`
//! before `inline_code`) stay visible and testable per rule.

use regex::Regex;
use std::sync::LazyLock;

/// One Markdown removal rule: a named pattern plus its replacement.
pub struct StripRule {
    /// Stable identifier, used by tests to exercise a rule in isolation.
    pub name: &'static str,
    pattern: Regex,
    replacement: &'static str,
    /// Whether the rule belongs to the inline subset applied by the
    /// paragraph selector's lighter pass. Block-level rules (fences,
    /// quotes, list markers) are excluded there so blank-line paragraph
    /// boundaries survive until the split.
    inline: bool,
}

impl StripRule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str, inline: bool) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("strip rule pattern compiles"),
            replacement,
            inline,
        }
    }

    /// Apply this rule alone. Mainly useful in tests; production code
    /// goes through [`strip_markdown`] so ordering is preserved.
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.replacement).into_owned()
    }
}

// Fences come first so the inline-code rule cannot unwrap a fence's own
// backticks and leave the block body behind. Bold precedes italic so a
// lone `*` pass never swallows half of a `**` pair.
static RULES: LazyLock<Vec<StripRule>> = LazyLock::new(|| {
    vec![
        StripRule::new("code_fence", r"(?s)```.*?```", "", false),
        StripRule::new("heading", r"(?m)^#{1,6}\s+", "", true),
        StripRule::new("link", r"\[([^\]]+)\]\([^)]+\)", "$1", true),
        StripRule::new("bold", r"\*\*([^*]+)\*\*", "$1", true),
        StripRule::new("italic", r"\*([^*]+)\*", "$1", true),
        StripRule::new("inline_code", r"`([^`]+)`", "$1", true),
        StripRule::new("html_tag", r"<[^>]*>", "", true),
        StripRule::new("block_quote", r"(?m)^>\s+", "", false),
        StripRule::new("bullet_list", r"(?m)^[-*+]\s+", "", false),
        StripRule::new("numbered_list", r"(?m)^\d+\.\s+", "", false),
    ]
});

/// The full rule table in application order.
#[must_use]
pub fn rules() -> &'static [StripRule] {
    &RULES
}

/// Remove all Markdown syntax, applying every rule in table order.
#[must_use]
pub fn strip_markdown(text: &str) -> String {
    RULES
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

/// Remove inline Markdown syntax only, keeping line structure intact so
/// blank-line paragraph boundaries remain splittable.
#[must_use]
pub fn strip_markdown_inline(text: &str) -> String {
    RULES
        .iter()
        .filter(|rule| rule.inline)
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

/// Remove every whitespace character, including the full-width space
/// (U+3000), carriage returns, line feeds and tabs. Dense character
/// counting for Japanese text needs no word-boundary spacing.
#[must_use]
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Full normalization: Markdown removal followed by whitespace removal.
/// Total and idempotent; empty or whitespace-only input yields `""`.
#[must_use]
pub fn normalize(text: &str) -> String {
    strip_whitespace(&strip_markdown(text))
}
