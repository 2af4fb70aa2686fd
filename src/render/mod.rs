//! Rendering module for serializing document results.

mod json;

pub use json::{to_json, JsonFormat};
