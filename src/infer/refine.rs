//! Lexical level refinement.
//!
//! Explicit numbering is a stronger, language-independent structural signal
//! than visual size, so after size-based assignment these overrides win.
//! Rules apply in fixed precedence order; the first match decides.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::{HeadingCandidate, HeadingLevel};

/// Canonical top-level section names, matched as lowercase substrings.
const CANONICAL_SECTIONS: [&str; 9] = [
    "table of contents",
    "references",
    "introduction",
    "conclusion",
    "appendix",
    "acknowledgements",
    "abstract",
    "summary",
    "overview",
];

static NUMBERED_H1: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s+").unwrap());
static NUMBERED_H2: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+\s+").unwrap());
static NUMBERED_H3: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+\s+").unwrap());

/// Final level for one heading text, given its size-derived level.
pub fn refine_level(text: &str, assigned: HeadingLevel) -> HeadingLevel {
    let lower = text.trim().to_lowercase();

    if CANONICAL_SECTIONS.iter().any(|name| lower.contains(name)) {
        return HeadingLevel::H1;
    }
    if NUMBERED_H1.is_match(text) {
        return HeadingLevel::H1;
    }
    if NUMBERED_H2.is_match(text) {
        return HeadingLevel::H2;
    }
    if NUMBERED_H3.is_match(text) {
        return HeadingLevel::H3;
    }
    assigned
}

/// Apply the overrides to all candidates in place.
pub fn refine_candidates(candidates: &mut [HeadingCandidate]) {
    for candidate in candidates {
        let refined = refine_level(candidate.fragment.trimmed(), candidate.level);
        if refined != candidate.level {
            log::debug!(
                "refined '{}' from {} to {}",
                candidate.fragment.trimmed(),
                candidate.level.as_str(),
                refined.as_str()
            );
            candidate.level = refined;
        }
    }
}
