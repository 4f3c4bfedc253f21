//! Logical card grouping produced by the region aggregator.

use crate::domain::detection::{BoundarySource, Detection, RegionLabel};
use crate::processors::BBox;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which side of the physical document a card represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardFace {
    /// Side carrying the portrait photo (typically Devanagari text).
    Front,
    /// Side carrying the fingerprint (typically Latin text).
    Back,
    /// Neither face marker was found.
    Unknown,
}

/// One logical card: a boundary plus the detections whose centers fall
/// inside it.
///
/// Created once per verification request by the region aggregator and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Front/back assignment for this card.
    pub face: CardFace,
    /// The boundary box of the card in source-image pixels.
    pub bbox: BBox,
    /// Member detections, in detector output order.
    pub regions: Vec<Detection>,
    /// Set of labels present among the member detections.
    pub present_labels: HashSet<RegionLabel>,
    /// Where the boundary came from.
    pub boundary_source: BoundarySource,
}

impl Card {
    /// Creates a card, deriving the presence-label set from the members.
    pub fn new(
        face: CardFace,
        bbox: BBox,
        regions: Vec<Detection>,
        boundary_source: BoundarySource,
    ) -> Self {
        let present_labels = regions.iter().map(|d| d.label).collect();
        Self {
            face,
            bbox,
            regions,
            present_labels,
            boundary_source,
        }
    }

    /// Returns true if any member detection carries the given label.
    pub fn has_label(&self, label: RegionLabel) -> bool {
        self.present_labels.contains(&label)
    }

    /// Iterates over the member detections that carry primary text.
    pub fn text_regions(&self) -> impl Iterator<Item = &Detection> {
        self.regions
            .iter()
            .filter(|d| d.label == RegionLabel::PrimaryTextBlock)
    }
}
