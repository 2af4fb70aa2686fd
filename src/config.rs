//! Inference configuration.
//!
//! Every empirical threshold used by the pipeline lives here as a named
//! field with a documented default, so corpus-specific retuning never
//! touches the inference logic itself.

/// Configuration for outline inference.
///
/// All thresholds are empirically chosen defaults; see the field docs for
/// what each one gates.
///
/// # Example
///
/// ```
/// use retoc::InferenceConfig;
///
/// let config = InferenceConfig::new()
///     .with_cluster_seed(7)
///     .with_title_band(300.0);
/// assert_eq!(config.cluster_seed, 7);
/// ```
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// A fragment counts as "larger than body" when its font size exceeds
    /// this multiple of the page median.
    pub body_size_ratio: f32,

    /// Maximum word count for a heading-shaped fragment. Fragments above
    /// this are also treated as body prose.
    pub max_heading_words: usize,

    /// Minimum character length for a heading-shaped fragment.
    pub min_heading_chars: usize,

    /// Maximum number of periods allowed in a heading.
    pub max_heading_periods: usize,

    /// Maximum number of commas allowed in a heading.
    pub max_heading_commas: usize,

    /// Maximum character length before a fragment is treated as prose.
    pub max_prose_chars: usize,

    /// Number of ordinal heading levels. Sizes never map past this depth.
    pub max_levels: usize,

    /// A page-1 fragment qualifies as a title only at or above this multiple
    /// of the page-1 maximum font size.
    pub title_size_ratio: f32,

    /// Minimum word count for a title candidate.
    pub title_min_words: usize,

    /// Maximum word count for a title candidate.
    pub title_max_words: usize,

    /// Title candidates must sit within this many units of the page top.
    pub title_band: f32,

    /// Seed for k-means center initialization. Fixed so repeated runs on
    /// identical input produce identical outlines.
    pub cluster_seed: u64,

    /// Upper bound on k-means refinement iterations.
    pub cluster_iterations: usize,
}

impl InferenceConfig {
    /// Create a configuration with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the body-size ratio for the heading-weight test.
    pub fn with_body_size_ratio(mut self, ratio: f32) -> Self {
        self.body_size_ratio = ratio;
        self
    }

    /// Set the maximum heading word count.
    pub fn with_max_heading_words(mut self, words: usize) -> Self {
        self.max_heading_words = words;
        self
    }

    /// Set the title size ratio relative to the page-1 maximum.
    pub fn with_title_size_ratio(mut self, ratio: f32) -> Self {
        self.title_size_ratio = ratio;
        self
    }

    /// Set the vertical band (from the page top) in which titles may appear.
    pub fn with_title_band(mut self, band: f32) -> Self {
        self.title_band = band;
        self
    }

    /// Set the title word-count bounds.
    pub fn with_title_words(mut self, min: usize, max: usize) -> Self {
        self.title_min_words = min;
        self.title_max_words = max;
        self
    }

    /// Set the clustering seed.
    pub fn with_cluster_seed(mut self, seed: u64) -> Self {
        self.cluster_seed = seed;
        self
    }

    /// Set the k-means iteration bound.
    pub fn with_cluster_iterations(mut self, iterations: usize) -> Self {
        self.cluster_iterations = iterations;
        self
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            body_size_ratio: 1.15,
            max_heading_words: 15,
            min_heading_chars: 3,
            max_heading_periods: 4,
            max_heading_commas: 3,
            max_prose_chars: 100,
            max_levels: 4,
            title_size_ratio: 0.9,
            title_min_words: 3,
            title_max_words: 20,
            title_band: 400.0,
            cluster_seed: 42,
            cluster_iterations: 50,
        }
    }
}
