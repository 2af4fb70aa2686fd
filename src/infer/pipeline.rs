//! Per-document inference pipeline.
//!
//! One document's processing is a pure function from a fragment sequence to
//! a [`DocumentResult`]; no component holds cross-document state. That makes
//! the batch embarrassingly parallel, and lets the batch layer isolate any
//! unexpected failure to the document that caused it.

use std::panic::{catch_unwind, AssertUnwindSafe};

use rayon::prelude::*;

use crate::config::InferenceConfig;
use crate::model::{DocumentResult, TextFragment};

use super::{assemble, filter, level, profile::PageProfile, refine, title};

/// Infer title and outline for one document.
///
/// Degenerate input is not an error: a document with no qualifying
/// candidates yields an empty outline, and one with no qualifying page-1
/// fragment yields an empty title.
pub fn infer_document(fragments: &[TextFragment], config: &InferenceConfig) -> DocumentResult {
    if fragments.is_empty() {
        return DocumentResult::empty();
    }

    let profile = PageProfile::build(fragments);
    log::debug!("profiled {} pages", profile.page_count());

    let picked = filter::collect_candidates(fragments, &profile, config);
    log::debug!(
        "{} heading candidates out of {} fragments",
        picked.len(),
        fragments.len()
    );

    let mut candidates = level::assign_levels(&picked, config);
    refine::refine_candidates(&mut candidates);

    let title = title::select_title(fragments, config);
    assemble::assemble(title, candidates)
}

/// Infer one document, converting any internal panic into the empty-result
/// fallback. Per-document failure never aborts a batch.
pub fn infer_document_isolated(
    fragments: &[TextFragment],
    config: &InferenceConfig,
) -> DocumentResult {
    match catch_unwind(AssertUnwindSafe(|| infer_document(fragments, config))) {
        Ok(result) => result,
        Err(_) => {
            log::warn!("outline inference failed; emitting empty result");
            DocumentResult::empty()
        }
    }
}

/// Infer outlines for a batch of documents in parallel, one worker per
/// document. Output order matches input order.
pub fn infer_batch(
    documents: &[Vec<TextFragment>],
    config: &InferenceConfig,
) -> Vec<DocumentResult> {
    documents
        .par_iter()
        .map(|fragments| infer_document_isolated(fragments, config))
        .collect()
}
