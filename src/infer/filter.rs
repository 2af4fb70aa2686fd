//! Candidate filter.
//!
//! Classifies each fragment as heading-candidate or not. Font size alone is
//! unreliable across scanned and inconsistently typeset documents, so the
//! filter combines three independent tests, each a named predicate evaluated
//! in fixed order: the fragment must be structurally heading-shaped, must
//! not read like body prose, and must show at least one piece of
//! heading-weight evidence (size, boldness, or explicit numbering).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::InferenceConfig;
use crate::model::TextFragment;

use super::profile::PageProfile;

/// Leading "digits." numbering, which permits a trailing period.
static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.").unwrap());

/// Numbering patterns that count as heading-weight evidence on their own.
static NUMBERING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d+\.\s+[A-Z]").unwrap(),
        Regex::new(r"^\d+\.\d+\s+[A-Z]").unwrap(),
        Regex::new(r"(?i)^(chapter|section|appendix)\s+[A-Z0-9]").unwrap(),
    ]
});

/// Connective words that mark running prose rather than a heading.
static CONNECTIVES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(the|and|or|however|therefore|moreover|additionally)\b").unwrap()
});

/// ISO-like dates (2023-01-31, 2023/01/31) that show up in footers and
/// revision tables.
static ISO_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}[-/]\d{2}[-/]\d{2}").unwrap());

/// Structural test: does the trimmed text have the shape of a heading?
pub fn is_heading_shaped(text: &str, config: &InferenceConfig) -> bool {
    let words = text.split_whitespace().count();
    if words > config.max_heading_words {
        return false;
    }
    if text.chars().count() < config.min_heading_chars {
        return false;
    }
    if !text.chars().any(|c| c.is_alphabetic()) {
        return false;
    }
    if has_repeated_run(text, 4) {
        return false;
    }
    if text.matches('.').count() > config.max_heading_periods {
        return false;
    }
    if text.matches(',').count() > config.max_heading_commas {
        return false;
    }
    if text.ends_with(',') || text.ends_with(';') || text.ends_with(':') {
        return false;
    }
    // A trailing period is prose punctuation unless the line is numbered
    // ("3. Results." style lists keep their candidate status).
    if text.ends_with('.') && !LEADING_NUMBER.is_match(text) {
        return false;
    }
    true
}

/// Anti-pattern test: does the trimmed text read like body prose or noise?
pub fn looks_like_prose(text: &str, config: &InferenceConfig) -> bool {
    if text.split_whitespace().count() > config.max_heading_words {
        return true;
    }
    if text.ends_with('.')
        || text.ends_with(',')
        || text.ends_with(';')
        || text.ends_with(')')
        || text.ends_with(']')
    {
        return true;
    }
    if CONNECTIVES.is_match(text) {
        return true;
    }
    if text.chars().count() > config.max_prose_chars {
        return true;
    }
    if ISO_DATE.is_match(text) {
        return true;
    }
    false
}

/// Evidence test: size above the page's body median, boldness, or an
/// explicit numbering pattern.
pub fn has_heading_weight(
    fragment: &TextFragment,
    profile: &PageProfile,
    config: &InferenceConfig,
) -> bool {
    profile.is_larger_than_body(fragment, config.body_size_ratio)
        || fragment.is_bold
        || matches_numbering(fragment.trimmed())
}

/// Whether the text starts with a recognized numbering pattern.
pub fn matches_numbering(text: &str) -> bool {
    NUMBERING_PATTERNS.iter().any(|re| re.is_match(text))
}

/// Combined candidate test over all three predicate groups.
pub fn is_heading_candidate(
    fragment: &TextFragment,
    profile: &PageProfile,
    config: &InferenceConfig,
) -> bool {
    let text = fragment.trimmed();
    is_heading_shaped(text, config)
        && !looks_like_prose(text, config)
        && has_heading_weight(fragment, profile, config)
}

/// Select the heading candidates among a document's fragments, preserving
/// input order.
pub fn collect_candidates<'a>(
    fragments: &'a [TextFragment],
    profile: &PageProfile,
    config: &InferenceConfig,
) -> Vec<&'a TextFragment> {
    fragments
        .iter()
        .filter(|frag| is_heading_candidate(frag, profile, config))
        .collect()
}

/// Whether the text contains a run of `len` or more identical consecutive
/// characters (decorative rules, dot leaders, etc.).
fn has_repeated_run(text: &str, len: usize) -> bool {
    let mut run = 0usize;
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if Some(c) == prev {
            run += 1;
            if run >= len {
                return true;
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> InferenceConfig {
        InferenceConfig::default()
    }

    fn profile_with_body(body: f32, samples: usize) -> PageProfile {
        let fragments: Vec<_> = (0..samples)
            .map(|_| TextFragment::new("body", 1, body, "F1", 500.0))
            .collect();
        PageProfile::build(&fragments)
    }

    #[test]
    fn test_heading_shaped() {
        let cfg = config();
        assert!(is_heading_shaped("Introduction", &cfg));
        assert!(is_heading_shaped("1.2 System Design", &cfg));
        assert!(!is_heading_shaped("ab", &cfg));
        assert!(!is_heading_shaped("1234", &cfg));
        assert!(!is_heading_shaped("Results:", &cfg));
        assert!(!is_heading_shaped("and then,", &cfg));
        assert!(!is_heading_shaped("....................", &cfg));
        assert!(!is_heading_shaped("Chapter ---- One", &cfg));
    }

    #[test]
    fn test_trailing_period_needs_numbering() {
        let cfg = config();
        assert!(!is_heading_shaped("The results were clear.", &cfg));
        assert!(is_heading_shaped("3. Results.", &cfg));
    }

    #[test]
    fn test_prose_rejection() {
        let cfg = config();
        assert!(looks_like_prose(
            "This approach, however, fails for scanned input",
            &cfg
        ));
        assert!(looks_like_prose("see reference [12]", &cfg));
        assert!(looks_like_prose("Revised 2023-05-01", &cfg));
        assert!(looks_like_prose(
            "one two three four five six seven eight nine ten eleven twelve thirteen fourteen fifteen sixteen",
            &cfg
        ));
        assert!(!looks_like_prose("Experimental Setup", &cfg));
    }

    #[test]
    fn test_connectives_are_whole_words() {
        let cfg = config();
        // "Thermal" contains "the" but not as a word.
        assert!(!looks_like_prose("Thermal Analysis", &cfg));
        assert!(looks_like_prose("Methods and Materials", &cfg));
    }

    #[test]
    fn test_heading_weight_sources() {
        let cfg = config();
        let profile = profile_with_body(10.0, 9);

        let large = TextFragment::new("Overview", 1, 14.0, "F1", 100.0);
        assert!(has_heading_weight(&large, &profile, &cfg));

        let bold = TextFragment::new("Overview", 1, 10.0, "Arial-Bold", 100.0);
        assert!(has_heading_weight(&bold, &profile, &cfg));

        let numbered = TextFragment::new("2.1 Overview", 1, 10.0, "F1", 100.0);
        assert!(has_heading_weight(&numbered, &profile, &cfg));

        let plain = TextFragment::new("Overview", 1, 10.0, "F1", 100.0);
        assert!(!has_heading_weight(&plain, &profile, &cfg));
    }

    #[test]
    fn test_unprofiled_page_gives_no_size_evidence() {
        let cfg = config();
        let profile = profile_with_body(10.0, 3);
        let other_page = TextFragment::new("Overview", 7, 30.0, "F1", 100.0);
        assert!(!has_heading_weight(&other_page, &profile, &cfg));
    }

    #[test]
    fn test_bold_prose_is_not_a_candidate() {
        let cfg = config();
        let profile = profile_with_body(10.0, 9);
        let frag = TextFragment::new(
            "The experiment was repeated; however, the measured drift stayed within tolerance.",
            1,
            10.0,
            "Arial-Bold",
            300.0,
        );
        assert!(!is_heading_candidate(&frag, &profile, &cfg));
    }

    #[test]
    fn test_collect_preserves_order() {
        let cfg = config();
        let fragments = vec![
            TextFragment::new("body text line", 1, 10.0, "F1", 500.0),
            TextFragment::new("body text line", 1, 10.0, "F1", 510.0),
            TextFragment::new("body text line", 1, 10.0, "F1", 520.0),
            TextFragment::new("First Heading", 1, 16.0, "F1", 100.0),
            TextFragment::new("Second Heading", 1, 14.0, "F1", 400.0),
        ];
        let profile = PageProfile::build(&fragments);
        let picked = collect_candidates(&fragments, &profile, &cfg);
        let texts: Vec<_> = picked.iter().map(|f| f.trimmed()).collect();
        assert_eq!(texts, vec!["First Heading", "Second Heading"]);
    }

    #[test]
    fn test_repeated_run() {
        assert!(has_repeated_run("aaaa", 4));
        assert!(has_repeated_run("xx----xx", 4));
        assert!(!has_repeated_run("aaab", 4));
        assert!(!has_repeated_run("", 4));
    }
}
