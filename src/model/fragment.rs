//! Input fragment type.

use serde::{Deserialize, Serialize};

/// One visually distinct line of text with layout metadata.
///
/// Produced by a fragment provider, one per line, and owned by the pipeline
/// for the duration of one document's processing. `y_position` is
/// page-relative with smaller values higher on the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextFragment {
    /// The text content
    pub text: String,
    /// Page number (1-indexed)
    pub page: u32,
    /// Font size in points
    pub font_size: f32,
    /// Whether the font appears to be bold
    #[serde(default)]
    pub is_bold: bool,
    /// Font name (e.g., "Helvetica-Bold"); informational only
    #[serde(default)]
    pub font_name: String,
    /// Vertical position on the page (smaller = higher)
    pub y_position: f32,
}

impl TextFragment {
    /// Create a new fragment, sniffing boldness from the font name.
    pub fn new(
        text: impl Into<String>,
        page: u32,
        font_size: f32,
        font_name: impl Into<String>,
        y_position: f32,
    ) -> Self {
        let font_name = font_name.into();
        let is_bold = is_bold_font(&font_name);

        Self {
            text: text.into(),
            page,
            font_size,
            is_bold,
            font_name,
            y_position,
        }
    }

    /// Number of whitespace-separated words in the text.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// The text with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Check the input contract: non-empty trimmed text, 1-indexed page,
    /// positive font size.
    pub fn is_valid(&self) -> bool {
        !self.trimmed().is_empty() && self.page >= 1 && self.font_size > 0.0
    }
}

/// Whether a font name suggests a bold weight.
pub fn is_bold_font(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.contains("bold") || lower.contains("black") || lower.contains("heavy")
}
