//! Summary orchestration: decide between manual and derived excerpts
//! and pick a target length from total content size.

use tracing::debug;

use crate::paragraph::select_best_paragraph;
use crate::record::{ContentRecord, SummaryOptions};

/// Target excerpt length for a given total content length. Longer posts
/// earn longer excerpts, up to a fixed ceiling.
#[must_use]
pub fn optimal_summary_length(content_length: usize) -> usize {
    if content_length < 300 {
        80
    } else if content_length < 800 {
        120
    } else if content_length < 2000 {
        150
    } else {
        200
    }
}

/// Derive a display summary for a content record.
///
/// With `prefer_manual` set, the first non-empty of `summary`,
/// `excerpt` and `description` is returned verbatim — manual text is
/// never normalized or truncated. Otherwise the target length is the
/// caller's `max_length` capped by [`optimal_summary_length`], and the
/// body goes through paragraph selection, normalization and truncation.
///
/// Total over its inputs: a missing or empty body yields `""`.
#[must_use]
pub fn summarize(record: &ContentRecord, options: &SummaryOptions) -> String {
    if options.prefer_manual {
        for manual in [&record.summary, &record.excerpt, &record.description] {
            if let Some(text) = manual
                && !text.is_empty()
            {
                return text.clone();
            }
        }
    }

    let body_length = record.effective_body_length();
    let target = options.max_length.min(optimal_summary_length(body_length));
    debug!(body_length, target, "deriving summary from body");

    select_best_paragraph(record.body.as_deref().unwrap_or(""), target, &options.suffix)
}
