//! Data model for outline inference.
//!
//! Defines the input fragment type handed over by a fragment provider and
//! the output types that make up the final document result.

mod fragment;
mod outline;

pub use fragment::{is_bold_font, TextFragment};
pub use outline::{DocumentResult, HeadingCandidate, HeadingLevel, OutlineEntry};
