//! Pure processing primitives used by the audit pipeline.
//!
//! Everything here is a stateless, deterministic function or value type:
//! geometric primitives, the text repair pipeline, cross-script consonant
//! skeletons, and digit transliteration.

pub mod digits;
pub mod geometry;
pub mod normalization;
pub mod skeleton;

pub use digits::{to_ascii_digits, to_devanagari_digits};
pub use geometry::BBox;
pub use normalization::normalize;
pub use skeleton::{devanagari_skeleton, latin_skeleton, skeleton_score};
