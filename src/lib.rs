//! # retoc
//!
//! Outline inference for documents that carry no structural metadata.
//!
//! Given the positioned text fragments of one document (text, font size,
//! boldness, page, vertical position), retoc infers a title and an ordered,
//! deduplicated outline of up to four heading levels. It does this from
//! layout statistics alone: per-page body-size estimation, heading candidate
//! filtering, font-size clustering into ordinal levels, and lexical
//! refinement from numbering patterns.
//!
//! ## Quick Start
//!
//! ```
//! use retoc::{infer_outline, TextFragment};
//!
//! let fragments = vec![
//!     TextFragment::new("Network Protocol Design Guide", 1, 24.0, "Helvetica-Bold", 40.0),
//!     TextFragment::new("1. Introduction", 1, 16.0, "Helvetica", 120.0),
//!     TextFragment::new("1.1 Terminology", 2, 13.0, "Helvetica", 80.0),
//! ];
//!
//! let result = infer_outline(&fragments);
//! assert_eq!(result.title, "Network Protocol Design Guide");
//! assert_eq!(result.outline.len(), 2);
//! ```
//!
//! ## Features
//!
//! - **Metadata-free**: works from visual layout only, no bookmarks or tags
//! - **Deterministic**: clustering runs under a fixed configured seed
//! - **Isolated failures**: a failing document yields an empty result, never
//!   aborting a batch
//! - **Parallel batches**: documents are processed with one Rayon worker each

pub mod config;
pub mod error;
pub mod infer;
pub mod model;
pub mod provider;
pub mod render;

// Re-export commonly used types
pub use config::InferenceConfig;
pub use error::{Error, Result};
pub use infer::{PageProfile, LevelStrategy};
pub use model::{DocumentResult, HeadingCandidate, HeadingLevel, OutlineEntry, TextFragment};
pub use provider::{FragmentProvider, JsonFragmentProvider};
pub use render::{to_json, JsonFormat};

/// Infer the outline of one document with default configuration.
///
/// # Example
///
/// ```
/// use retoc::{infer_outline, TextFragment};
///
/// let result = infer_outline(&[TextFragment::new("Deep Sea Survey Report", 1, 20.0, "F1", 30.0)]);
/// assert_eq!(result.title, "Deep Sea Survey Report");
/// ```
pub fn infer_outline(fragments: &[TextFragment]) -> DocumentResult {
    infer::infer_document(fragments, &InferenceConfig::default())
}

/// Infer the outline of one document with custom configuration.
pub fn infer_outline_with_config(
    fragments: &[TextFragment],
    config: &InferenceConfig,
) -> DocumentResult {
    infer::infer_document(fragments, config)
}

/// Infer outlines for a batch of documents in parallel with default
/// configuration. Per-document failures yield empty results; output order
/// matches input order.
pub fn infer_batch(documents: &[Vec<TextFragment>]) -> Vec<DocumentResult> {
    infer::infer_batch(documents, &InferenceConfig::default())
}

/// Run a fragment provider through the pipeline, mapping extraction failure
/// to the empty result.
pub fn process_provider(provider: &dyn FragmentProvider, config: &InferenceConfig) -> DocumentResult {
    match provider.fragments() {
        Ok(fragments) => infer::infer_document_isolated(&fragments, config),
        Err(e) => {
            log::warn!("fragment extraction failed: {}", e);
            DocumentResult::empty()
        }
    }
}

/// Builder for configuring and running outline inference.
///
/// # Example
///
/// ```
/// use retoc::{Retoc, TextFragment};
///
/// let result = Retoc::new()
///     .with_cluster_seed(7)
///     .with_title_band(300.0)
///     .infer(&[TextFragment::new("Annual Safety Review Digest", 1, 22.0, "F1", 50.0)]);
/// assert_eq!(result.title, "Annual Safety Review Digest");
/// ```
pub struct Retoc {
    config: InferenceConfig,
}

impl Retoc {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            config: InferenceConfig::default(),
        }
    }

    /// Set the clustering seed.
    pub fn with_cluster_seed(mut self, seed: u64) -> Self {
        self.config = self.config.with_cluster_seed(seed);
        self
    }

    /// Set the body-size ratio for heading-weight evidence.
    pub fn with_body_size_ratio(mut self, ratio: f32) -> Self {
        self.config = self.config.with_body_size_ratio(ratio);
        self
    }

    /// Set the vertical band in which titles may appear.
    pub fn with_title_band(mut self, band: f32) -> Self {
        self.config = self.config.with_title_band(band);
        self
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: InferenceConfig) -> Self {
        self.config = config;
        self
    }

    /// The effective configuration.
    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Infer the outline of one document.
    pub fn infer(&self, fragments: &[TextFragment]) -> DocumentResult {
        infer::infer_document(fragments, &self.config)
    }

    /// Infer outlines for a batch of documents in parallel.
    pub fn infer_batch(&self, documents: &[Vec<TextFragment>]) -> Vec<DocumentResult> {
        infer::infer_batch(documents, &self.config)
    }

    /// Run a fragment provider through the pipeline.
    pub fn process(&self, provider: &dyn FragmentProvider) -> DocumentResult {
        process_provider(provider, &self.config)
    }
}

impl Default for Retoc {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retoc_builder() {
        let retoc = Retoc::new()
            .with_cluster_seed(7)
            .with_body_size_ratio(1.2)
            .with_title_band(250.0);

        assert_eq!(retoc.config().cluster_seed, 7);
        assert!((retoc.config().body_size_ratio - 1.2).abs() < f32::EPSILON);
        assert!((retoc.config().title_band - 250.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_infer_outline_empty() {
        let result = infer_outline(&[]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_process_provider_extraction_failure() {
        struct FailingProvider;
        impl FragmentProvider for FailingProvider {
            fn fragments(&self) -> Result<Vec<TextFragment>> {
                Err(Error::Extraction("backend offline".to_string()))
            }
        }

        let result = process_provider(&FailingProvider, &InferenceConfig::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_builder_with_config_roundtrip() {
        let config = InferenceConfig::new().with_cluster_seed(123);
        let retoc = Retoc::new().with_config(config);
        assert_eq!(retoc.config().cluster_seed, 123);
    }
}
