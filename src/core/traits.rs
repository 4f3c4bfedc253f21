//! Collaborator traits for injected engines.
//!
//! The audit core does not run model inference or calendar tables of its own
//! choosing; it consumes these capabilities through the traits below. Handles
//! are constructed once at process start and passed into
//! [`crate::audit::Auditor`], so the core holds no lazily-initialized global
//! state.
//!
//! All traits are object-safe and `Send + Sync` so a single engine instance
//! can serve concurrent verification requests.

use crate::calendar::BsDate;
use crate::core::errors::AuditError;
use crate::domain::{ConfidenceFlag, Detection, ScriptHint};
use chrono::NaiveDate;
use image::RgbImage;

/// Text returned by a recognition engine for one crop.
#[derive(Debug, Clone)]
pub struct RecognizedText {
    /// The raw recognized text. Empty when the crop carried no legible text.
    pub text: String,
    /// Identifier of the engine that produced the text (e.g. "paddle_ne").
    pub engine_id: String,
    /// How the engine arrived at the result.
    pub flag: ConfidenceFlag,
}

/// Detects labeled regions in a full card scan.
///
/// Implementations must validate their class vocabulary at this boundary:
/// the core receives only the closed [`crate::domain::RegionLabel`] set and
/// never compares label strings.
pub trait RegionDetector: Send + Sync {
    /// Runs detection on the image, keeping detections at or above
    /// `confidence_threshold`.
    fn detect(
        &self,
        image: &RgbImage,
        confidence_threshold: f32,
    ) -> Result<Vec<Detection>, AuditError>;
}

/// Recognizes text in a cropped region.
///
/// Implementations must tolerate degenerate crops by returning empty text
/// with [`ConfidenceFlag::EmptyCrop`] rather than failing; a hard error here
/// terminates the whole verification request.
pub trait TextRecognizer: Send + Sync {
    /// Recognizes text in the crop, biased toward the hinted script.
    fn recognize(&self, crop: &RgbImage, script: ScriptHint)
        -> Result<RecognizedText, AuditError>;
}

/// Converts Gregorian dates to the Bikram Sambat calendar.
pub trait DateConverter: Send + Sync {
    /// Converts a valid Gregorian date to Bikram Sambat.
    ///
    /// # Errors
    ///
    /// Fails when the date falls outside the converter's supported range.
    fn to_bikram_sambat(&self, date: NaiveDate) -> Result<BsDate, AuditError>;
}
