//! Length-bounded truncation with Japanese punctuation awareness.

/// Sentence-ending marks. A cut landing on one of these closes the
/// thought, so no continuation suffix is appended.
pub const TERMINAL_MARKS: [char; 3] = ['。', '！', '？'];

/// Clause separator. A cut landing here leaves the thought open, so the
/// continuation suffix is still appended.
pub const CLAUSE_MARK: char = '、';

// Search order for cut-point candidates. The comparison below is strict
// `>`, so an earlier mark in this order keeps a tie on index — which
// cannot happen for distinct characters, but the comparison is part of
// the observable contract.
const CUT_PRIORITY: [char; 4] = ['。', '！', '？', CLAUSE_MARK];

/// Truncate normalized text to at most `max_length` characters,
/// preferring a natural cut at Japanese punctuation.
///
/// Text at or below the bound is returned unchanged with no suffix.
/// Otherwise the first `max_length` characters form the candidate
/// window and the rightmost qualifying punctuation mark inside it wins;
/// marks in the first 70% of the window are rejected as too-early cuts.
/// A winning terminal mark ends the excerpt cleanly; a winning clause
/// mark or no qualifying mark at all appends `suffix`.
///
/// Lengths are character counts, not bytes.
#[must_use]
pub fn truncate(clean: &str, max_length: usize, suffix: &str) -> String {
    let chars: Vec<char> = clean.chars().collect();
    if chars.len() <= max_length {
        return clean.to_string();
    }

    let window = &chars[..max_length];
    let threshold = max_length as f64 * 0.7;

    let mut best: Option<(usize, char)> = None;
    for mark in CUT_PRIORITY {
        if let Some(idx) = window.iter().rposition(|&c| c == mark)
            && idx as f64 > threshold
            && best.is_none_or(|(kept, _)| idx > kept)
        {
            best = Some((idx, mark));
        }
    }

    match best {
        Some((idx, mark)) if TERMINAL_MARKS.contains(&mark) => window[..=idx].iter().collect(),
        Some((idx, _)) => {
            let mut cut: String = window[..=idx].iter().collect();
            cut.push_str(suffix);
            cut
        }
        None => {
            let mut cut: String = window.iter().collect();
            cut.push_str(suffix);
            cut
        }
    }
}
