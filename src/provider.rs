//! Fragment provider abstraction.
//!
//! The layout/text extraction step that turns a binary document into
//! positioned fragments is an external collaborator. This trait isolates it
//! from the inference logic; implementations may wrap a layout engine, a
//! tagged-document reader, or (as here) a serialized fragment dump.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::{is_bold_font, TextFragment};

/// Source of positioned text fragments for one document.
pub trait FragmentProvider {
    /// Produce all fragments of the document, in reading order.
    fn fragments(&self) -> Result<Vec<TextFragment>>;
}

/// Provider backed by a JSON fragment dump (an array of fragment objects),
/// the interchange format emitted by the extraction side.
#[derive(Debug, Clone)]
pub struct JsonFragmentProvider {
    path: PathBuf,
}

impl JsonFragmentProvider {
    /// Create a provider for a fragment dump file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the underlying dump file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FragmentProvider for JsonFragmentProvider {
    fn fragments(&self) -> Result<Vec<TextFragment>> {
        let data = fs::read_to_string(&self.path)?;
        parse_fragments(&data)
    }
}

/// Parse a JSON fragment dump, dropping entries that violate the input
/// contract (empty text, zero page, non-positive size) with a warning.
pub fn parse_fragments(data: &str) -> Result<Vec<TextFragment>> {
    let raw: Vec<TextFragment> =
        serde_json::from_str(data).map_err(|e| Error::Extraction(e.to_string()))?;

    let total = raw.len();
    let mut fragments: Vec<TextFragment> = raw.into_iter().filter(|f| f.is_valid()).collect();
    if fragments.len() < total {
        log::warn!(
            "dropped {} invalid fragments out of {}",
            total - fragments.len(),
            total
        );
    }

    // Providers that only report font names still get boldness sniffed.
    for frag in &mut fragments {
        if !frag.is_bold && is_bold_font(&frag.font_name) {
            frag.is_bold = true;
        }
    }

    Ok(fragments)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_dump() {
        let data = r#"[
            {"text":"Title Line","page":1,"font_size":24.0,"y_position":40.0},
            {"text":"Body","page":1,"font_size":10.0,"font_name":"Times-Bold","y_position":200.0}
        ]"#;
        let fragments = parse_fragments(data).unwrap();
        assert_eq!(fragments.len(), 2);
        assert!(fragments[1].is_bold);
    }

    #[test]
    fn test_invalid_entries_dropped() {
        let data = r#"[
            {"text":"  ","page":1,"font_size":10.0,"y_position":0.0},
            {"text":"ok","page":0,"font_size":10.0,"y_position":0.0},
            {"text":"ok","page":1,"font_size":-1.0,"y_position":0.0},
            {"text":"kept","page":1,"font_size":10.0,"y_position":0.0}
        ]"#;
        let fragments = parse_fragments(data).unwrap();
        assert_eq!(fragments.len(), 1);
        assert_eq!(fragments[0].text, "kept");
    }

    #[test]
    fn test_malformed_dump_is_extraction_error() {
        let err = parse_fragments("not json").unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let provider = JsonFragmentProvider::new("/nonexistent/frags.json");
        let err = provider.fragments().unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
