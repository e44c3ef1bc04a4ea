//! Paragraph selection: pick the body paragraph best suited to become
//! the excerpt before handing it to the truncator.

use regex::Regex;
use std::sync::LazyLock;

use crate::strip::{normalize, strip_markdown_inline, strip_whitespace};
use crate::truncate::truncate;

/// Paragraphs at or below this cleaned length are treated as noise
/// (captions, stray sub-headers) and skipped.
const NOISE_THRESHOLD: usize = 20;

/// Only the leading paragraphs are considered; excerpts should come
/// from the top of a post, not a buried conclusion.
const MAX_CANDIDATES: usize = 3;

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("paragraph break pattern compiles"));

/// Select the best paragraph of `raw` for a `target_length` excerpt and
/// run it through normalization and truncation.
///
/// The split happens after a light, line-preserving Markdown pass so
/// blank-line boundaries survive. Surviving candidates are scanned in
/// order and the first whose length falls within 0.8–1.5× the target
/// wins; with no such candidate the first survivor is used. When
/// nothing paragraph-shaped survives at all, the whole input goes
/// through the full pipeline instead.
#[must_use]
pub fn select_best_paragraph(raw: &str, target_length: usize, suffix: &str) -> String {
    let light = strip_markdown_inline(raw);

    let candidates: Vec<String> = PARAGRAPH_BREAK
        .split(&light)
        .map(strip_whitespace)
        .filter(|p| p.chars().count() > NOISE_THRESHOLD)
        .take(MAX_CANDIDATES)
        .collect();

    if candidates.is_empty() {
        return truncate(&normalize(raw), target_length, suffix);
    }

    let lower = target_length as f64 * 0.8;
    let upper = target_length as f64 * 1.5;
    let selected = candidates
        .iter()
        .find(|p| {
            let len = p.chars().count() as f64;
            len >= lower && len <= upper
        })
        .unwrap_or(&candidates[0]);

    truncate(&normalize(selected), target_length, suffix)
}
