//! Groups raw detections into logical cards.
//!
//! A verification image can contain a single card side, or a composite scan
//! with the front and back photographed together. The aggregator decides
//! which case applies, synthesizes boundaries where the detector came up
//! short, assigns member regions to boundaries, and labels each card's face.

use crate::domain::{BoundarySource, Card, CardFace, Detection, RegionLabel};
use crate::processors::BBox;

/// One card boundary candidate before membership assignment.
#[derive(Debug, Clone, Copy)]
struct Boundary {
    bbox: BBox,
    source: BoundarySource,
}

/// Groups detections into cards and assigns front/back orientation.
#[derive(Debug, Clone)]
pub struct RegionAggregator {
    /// Fraction of image height the photo and fingerprint centers must be
    /// separated by to treat the scan as a composite.
    split_ratio: f32,
}

impl RegionAggregator {
    /// Creates an aggregator with the given composite-split ratio.
    pub fn new(split_ratio: f32) -> Self {
        Self { split_ratio }
    }

    /// Groups the detections for one image into an ordered card sequence.
    ///
    /// Never fails: with zero detections the result is a single fallback
    /// card spanning the whole image with face [`CardFace::Unknown`].
    pub fn group_cards(
        &self,
        detections: &[Detection],
        image_width: u32,
        image_height: u32,
    ) -> Vec<Card> {
        let photo = detections
            .iter()
            .find(|d| d.label == RegionLabel::PhotoRegion);
        let fingerprint = detections
            .iter()
            .find(|d| d.label == RegionLabel::FingerprintRegion);

        let (boundaries, is_composite) =
            self.resolve_boundaries(detections, photo, fingerprint, image_width, image_height);

        // First boundary containing a detection's center wins; boundaries are
        // non-overlapping in practice.
        let mut members: Vec<Vec<Detection>> = vec![Vec::new(); boundaries.len()];
        for detection in detections {
            if detection.label == RegionLabel::CardBoundary {
                continue;
            }
            let (cx, cy) = detection.bbox.center();
            if let Some(slot) = boundaries.iter().position(|b| b.bbox.contains_point(cx, cy)) {
                members[slot].push(*detection);
            }
        }

        boundaries
            .iter()
            .zip(members)
            .map(|(boundary, regions)| {
                let face = assign_face(
                    boundary,
                    &regions,
                    is_composite,
                    photo.is_some(),
                    fingerprint.is_some(),
                );
                Card::new(face, boundary.bbox, regions, boundary.source)
            })
            .collect()
    }

    /// Decides which boundary set to use: composite split, detected
    /// boundaries, or the whole-image fallback.
    fn resolve_boundaries(
        &self,
        detections: &[Detection],
        photo: Option<&Detection>,
        fingerprint: Option<&Detection>,
        image_width: u32,
        image_height: u32,
    ) -> (Vec<Boundary>, bool) {
        // A physically separated front/back scan must be split even if the
        // boundary detector disagrees, so this check comes first and
        // overrides detected boundaries unconditionally.
        if let (Some(photo), Some(fingerprint)) = (photo, fingerprint) {
            let photo_cy = photo.bbox.center().1;
            let fingerprint_cy = fingerprint.bbox.center().1;
            let separation = (photo_cy - fingerprint_cy).abs();
            if separation > image_height as f32 * self.split_ratio {
                let split_y = ((photo_cy + fingerprint_cy) / 2.0).round() as i32;
                tracing::info!(
                    split_y,
                    separation,
                    "composite scan detected, splitting into virtual boundaries"
                );
                let top = Boundary {
                    bbox: BBox::new(0, 0, image_width as i32, split_y),
                    source: BoundarySource::Virtual,
                };
                let bottom = Boundary {
                    bbox: BBox::new(0, split_y, image_width as i32, image_height as i32),
                    source: BoundarySource::Virtual,
                };
                return (vec![top, bottom], true);
            }
        }

        let detected: Vec<Boundary> = detections
            .iter()
            .filter(|d| d.label == RegionLabel::CardBoundary)
            .map(|d| Boundary {
                bbox: d.bbox,
                source: BoundarySource::Detected,
            })
            .collect();

        if detected.is_empty() {
            tracing::debug!("no card boundary detected, assuming whole image");
            let fallback = Boundary {
                bbox: BBox::full_image(image_width, image_height),
                source: BoundarySource::Fallback,
            };
            return (vec![fallback], false);
        }

        (detected, false)
    }
}

/// Assigns the face of one card from its member labels, falling back to
/// boundary position when the composite split was taken.
fn assign_face(
    boundary: &Boundary,
    regions: &[Detection],
    is_composite: bool,
    photo_exists: bool,
    fingerprint_exists: bool,
) -> CardFace {
    if regions.iter().any(|d| d.label == RegionLabel::PhotoRegion) {
        return CardFace::Front;
    }
    if regions
        .iter()
        .any(|d| d.label == RegionLabel::FingerprintRegion)
    {
        return CardFace::Back;
    }
    if is_composite {
        if boundary.bbox.y1 == 0 && photo_exists {
            return CardFace::Front;
        }
        if boundary.bbox.y1 > 0 && fingerprint_exists {
            return CardFace::Back;
        }
    }
    CardFace::Unknown
}
