/// youyaku — punctuation-aware excerpt derivation for Japanese Markdown
/// content.
///
/// Given a content record (raw Markdown body plus optional
/// manually-authored summary fields), derive a clean, length-bounded
/// excerpt. The pipeline is pure and synchronous: Markdown stripping,
/// whitespace removal, paragraph selection, then truncation at natural
/// Japanese punctuation boundaries.
///
/// # Example
///
/// ```
/// use youyaku::{ContentRecord, SummaryOptions, summarize};
///
/// let record = ContentRecord::from_body(
///     "# 公演日記\n\n初日の幕が上がりました。客席の熱気がすごかったです。\
///      稽古の日々を思い出しながら舞台に立ちました。",
/// );
/// let options = SummaryOptions {
///     prefer_manual: false,
///     ..SummaryOptions::default()
/// };
///
/// let excerpt = summarize(&record, &options);
/// assert!(!excerpt.is_empty());
/// assert!(excerpt.chars().count() <= options.max_length + options.suffix.chars().count());
/// ```
// Module declarations
pub mod errors;
pub mod paragraph;
pub mod record;
pub mod strip;
pub mod summarize;
pub mod truncate;

pub use errors::SummaryError;
pub use record::{ContentRecord, SummaryOptions};
pub use summarize::{optimal_summary_length, summarize};

/// Configure structured logging for the CLI binary.
///
/// Sets up tracing-subscriber with the standard fmt layer. Call once at
/// process start; the library itself only emits `debug!` events.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
