//! Title selection.
//!
//! Runs only over page-1 fragments and is independent of the heading
//! pipeline: a title need not be a heading candidate, and page-1 headings
//! stay eligible here (the assembler removes the winner from the outline
//! afterwards).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::InferenceConfig;
use crate::model::TextFragment;

/// Patterns that disqualify a fragment from being a title: page furniture,
/// contact lines, and dates.
static NON_TITLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // Pure page numbers and "Page 4" furniture
        Regex::new(r"^\d+$").unwrap(),
        Regex::new(r"(?i)^page\s+\d+$").unwrap(),
        // URLs and emails
        Regex::new(r"(?i)(https?://|www\.)").unwrap(),
        Regex::new(r"(?i)\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b").unwrap(),
        // Parenthesized numbers, e.g. "(3)"
        Regex::new(r"^\(\d+\)$").unwrap(),
        // Month names and numeric dates
        Regex::new(
            r"(?i)\b(january|february|march|april|may|june|july|august|september|october|november|december)\b",
        )
        .unwrap(),
        Regex::new(r"\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b").unwrap(),
    ]
});

/// Whether the text matches any non-title pattern.
pub fn is_non_title(text: &str) -> bool {
    NON_TITLE_PATTERNS.iter().any(|re| re.is_match(text))
}

/// Pick the best title from page-1 fragments, or the empty string.
pub fn select_title(fragments: &[TextFragment], config: &InferenceConfig) -> String {
    let page_one: Vec<&TextFragment> = fragments.iter().filter(|f| f.page == 1).collect();
    if page_one.is_empty() {
        return String::new();
    }

    let max_size = page_one
        .iter()
        .map(|f| f.font_size)
        .fold(f32::MIN, f32::max);

    let mut qualifiers: Vec<&TextFragment> = page_one
        .into_iter()
        .filter(|f| qualifies(f, max_size, config))
        .collect();

    // Largest size wins; ties go to the topmost fragment.
    qualifiers.sort_by(|a, b| {
        b.font_size
            .partial_cmp(&a.font_size)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(
                a.y_position
                    .partial_cmp(&b.y_position)
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
    });

    match qualifiers.first() {
        Some(frag) => frag.trimmed().to_string(),
        None => String::new(),
    }
}

fn qualifies(fragment: &TextFragment, max_size: f32, config: &InferenceConfig) -> bool {
    if fragment.font_size < max_size * config.title_size_ratio {
        return false;
    }
    let words = fragment.word_count();
    if words < config.title_min_words || words > config.title_max_words {
        return false;
    }
    if fragment.y_position > config.title_band {
        return false;
    }
    !is_non_title(fragment.trimmed())
}
