//! Outline output types.

use serde::{Deserialize, Serialize};

use super::TextFragment;

/// Ordinal heading depth, H1 (most prominent) through H4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
}

impl HeadingLevel {
    /// Map a 1-indexed rank to a level, clamping past-depth ranks to H4.
    pub fn from_rank(rank: usize) -> Self {
        match rank {
            0 | 1 => HeadingLevel::H1,
            2 => HeadingLevel::H2,
            3 => HeadingLevel::H3,
            _ => HeadingLevel::H4,
        }
    }

    /// The 1-indexed rank of this level.
    pub fn rank(&self) -> usize {
        match self {
            HeadingLevel::H1 => 1,
            HeadingLevel::H2 => 2,
            HeadingLevel::H3 => 3,
            HeadingLevel::H4 => 4,
        }
    }

    /// The serialized form ("H1".."H4").
    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingLevel::H1 => "H1",
            HeadingLevel::H2 => "H2",
            HeadingLevel::H3 => "H3",
            HeadingLevel::H4 => "H4",
        }
    }
}

/// One entry of the final outline.
///
/// Field order (`level`, `text`, `page`) is part of the output contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineEntry {
    /// Heading depth
    pub level: HeadingLevel,
    /// Heading text (trimmed)
    pub text: String,
    /// Page number (1-indexed)
    pub page: u32,
}

impl OutlineEntry {
    /// Create a new outline entry with trimmed text.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into().trim().to_string(),
            page,
        }
    }
}

/// The inferred outline of one document.
///
/// Field order (`title`, `outline`) is part of the output contract. `title`
/// is the empty string when no page-1 fragment qualified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentResult {
    /// Document title, or empty
    pub title: String,
    /// Outline entries ordered by page
    pub outline: Vec<OutlineEntry>,
}

impl DocumentResult {
    /// The empty fallback result used for failed or fragment-less documents.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check whether neither a title nor any entry was inferred.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.outline.is_empty()
    }
}

/// A fragment that passed the candidate filter, with its provisional level.
///
/// Created by the level assigner and finalized by the level refiner.
#[derive(Debug, Clone)]
pub struct HeadingCandidate {
    /// The source fragment
    pub fragment: TextFragment,
    /// Provisional level, final after refinement
    pub level: HeadingLevel,
}

impl HeadingCandidate {
    /// Create a candidate from a fragment and a provisional level.
    pub fn new(fragment: TextFragment, level: HeadingLevel) -> Self {
        Self { fragment, level }
    }
}
