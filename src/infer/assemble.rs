//! Outline assembly.
//!
//! Turns refined candidates into the final ordered outline: removes the
//! title, deduplicates by (level, text), and sorts by page.

use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

use crate::model::{DocumentResult, HeadingCandidate, HeadingLevel, OutlineEntry};

/// Comparison key for title matching and dedup: NFKC-folded, lowercased,
/// trimmed. NFKC folds the ligatures and width variants layout extractors
/// tend to emit, so "ﬁnal" and "final" collide as intended.
pub fn normalize_key(text: &str) -> String {
    text.trim().nfkc().collect::<String>().to_lowercase()
}

/// Build the final document result from the selected title and the refined
/// candidates.
pub fn assemble(title: String, candidates: Vec<HeadingCandidate>) -> DocumentResult {
    let title_key = normalize_key(&title);

    let mut entries: Vec<OutlineEntry> = candidates
        .into_iter()
        .map(|c| OutlineEntry::new(c.level, c.fragment.trimmed(), c.fragment.page))
        .collect();

    // Stable sort so equal pages keep their original relative order, then
    // dedup keeps the first occurrence in page order.
    entries.sort_by_key(|e| e.page);

    let mut seen: HashSet<(HeadingLevel, String)> = HashSet::new();
    let outline = entries
        .into_iter()
        .filter(|entry| {
            let key = normalize_key(&entry.text);
            if !title_key.is_empty() && key == title_key {
                return false;
            }
            seen.insert((entry.level, key))
        })
        .collect();

    DocumentResult { title, outline }
}
