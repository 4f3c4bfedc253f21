//! Detection types produced at the detector boundary.

use crate::core::errors::AuditError;
use crate::processors::BBox;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The closed vocabulary of region labels the audit core understands.
///
/// Detector class strings are parsed into this enum at the collaborator
/// boundary so the core's logic is exhaustively matched rather than
/// string-compared. Unknown class strings are rejected there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionLabel {
    /// Outline of one physical card side.
    CardBoundary,
    /// Portrait photo region (front-face marker).
    PhotoRegion,
    /// Fingerprint region (back-face marker).
    FingerprintRegion,
    /// Primary text block carrying identity fields.
    PrimaryTextBlock,
}

impl FromStr for RegionLabel {
    type Err = AuditError;

    /// Parses a detector class string into a region label.
    ///
    /// Accepts both the snake_case names of this enum and the class names the
    /// card detection model was trained with.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card_boundary" | "Id_card_boundary" => Ok(Self::CardBoundary),
            "photo_region" => Ok(Self::PhotoRegion),
            "fingerprint_region" => Ok(Self::FingerprintRegion),
            "primary_text_block" | "text_block_primary" => Ok(Self::PrimaryTextBlock),
            other => Err(AuditError::invalid_input(format!(
                "unknown detector class '{other}'"
            ))),
        }
    }
}

/// Provenance of a card boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundarySource {
    /// Emitted by the detection model.
    Detected,
    /// Synthesized by the composite-scan split heuristic.
    Virtual,
    /// Synthesized because no boundary was detected; spans the whole image.
    /// Stands in for a zero-confidence detection, so cards built from it
    /// carry no detector confidence.
    Fallback,
}

/// A single detected region.
///
/// Immutable once constructed; produced by the detection collaborator or
/// synthesized by the region aggregator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Detection {
    /// What kind of region was detected.
    pub label: RegionLabel,
    /// Detection confidence in `[0, 1]`.
    pub confidence: f32,
    /// Pixel-space bounding box in the source image.
    pub bbox: BBox,
}

impl Detection {
    /// Creates a new detection.
    pub fn new(label: RegionLabel, confidence: f32, bbox: BBox) -> Self {
        Self {
            label,
            confidence,
            bbox,
        }
    }
}
