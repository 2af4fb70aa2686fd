//! Per-page body font size estimation.

use std::collections::BTreeMap;

use crate::model::TextFragment;

/// Reference body font size per page.
///
/// The median font size over all fragments on a page is a robust stand-in
/// for the ordinary paragraph size there; headings are detected relative to
/// it. Pages without fragments carry no entry, and size comparisons against
/// a missing entry are always false.
#[derive(Debug, Clone, Default)]
pub struct PageProfile {
    medians: BTreeMap<u32, f32>,
}

impl PageProfile {
    /// Build the profile from all fragments of one document.
    pub fn build(fragments: &[TextFragment]) -> Self {
        let mut sizes_by_page: BTreeMap<u32, Vec<f32>> = BTreeMap::new();
        for frag in fragments {
            sizes_by_page.entry(frag.page).or_default().push(frag.font_size);
        }

        let medians = sizes_by_page
            .into_iter()
            .map(|(page, mut sizes)| {
                sizes.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
                (page, median_of_sorted(&sizes))
            })
            .collect();

        Self { medians }
    }

    /// The median body size for a page, if any fragment was seen on it.
    pub fn body_size(&self, page: u32) -> Option<f32> {
        self.medians.get(&page).copied()
    }

    /// Whether a fragment is strictly larger than `ratio` times its page's
    /// body size. False when the page has no profile.
    pub fn is_larger_than_body(&self, frag: &TextFragment, ratio: f32) -> bool {
        match self.body_size(frag.page) {
            Some(body) => frag.font_size > body * ratio,
            None => false,
        }
    }

    /// Number of profiled pages.
    pub fn page_count(&self) -> usize {
        self.medians.len()
    }
}

fn median_of_sorted(sizes: &[f32]) -> f32 {
    let n = sizes.len();
    if n % 2 == 1 {
        sizes[n / 2]
    } else {
        (sizes[n / 2 - 1] + sizes[n / 2]) / 2.0
    }
}
