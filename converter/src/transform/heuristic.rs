//! Yes/no question heuristic.
//!
//! Picks out texts that look like closed (yes/no) questions so that only
//! those end up in the exported training file. Matching is plain,
//! case-insensitive *substring* matching: "is" matches inside "this",
//! "what" matches inside "whatever". That looseness is part of the rule
//! and must not be tightened to whole-word matching.

/// A text must contain at least one of these.
pub const INCLUDE_KEYWORDS: [&str; 5] = ["are", "do", "can", "is", "may"];

/// A text must contain none of these.
pub const EXCLUDE_KEYWORDS: [&str; 6] = ["what", "how", "why", "when", "where", "which"];

/// True when `text` passes the yes/no question filter.
///
/// All three must hold:
/// 1. it contains a `?`
/// 2. it contains one of [`INCLUDE_KEYWORDS`]
/// 3. it contains none of [`EXCLUDE_KEYWORDS`]
pub fn is_yes_no_question(text: &str) -> bool {
    let lower = text.to_lowercase();

    lower.contains('?')
        && INCLUDE_KEYWORDS.iter().any(|k| lower.contains(k))
        && !EXCLUDE_KEYWORDS.iter().any(|k| lower.contains(k))
}
