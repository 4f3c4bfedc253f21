//! Configuration for the audit pipeline.
//!
//! This module provides [`PipelineConfig`], the single configuration struct
//! consumed by the orchestrator and the components it drives. Defaults match
//! the tuning the detection and matching heuristics were calibrated against.

use crate::core::errors::AuditError;
use serde::{Deserialize, Serialize};

/// Configuration for the audit pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Minimum confidence for detections passed into aggregation (default: 0.3).
    pub detection_confidence: f32,
    /// Fraction of image height that the photo and fingerprint vertical
    /// centers must be separated by to trigger the composite split
    /// (default: 0.15).
    pub composite_split_ratio: f32,
    /// White padding in pixels added around each text crop before recognition
    /// (default: 10).
    pub crop_padding: u32,
    /// Name skeleton score above which the name field is a full match
    /// (default: 80).
    pub name_match_threshold: u8,
    /// Name skeleton score above which the name field is a partial match
    /// (default: 50).
    pub name_partial_threshold: u8,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            detection_confidence: 0.3,
            composite_split_ratio: 0.15,
            crop_padding: 10,
            name_match_threshold: 80,
            name_partial_threshold: 50,
        }
    }
}

impl PipelineConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Config`] if any field is outside its valid range
    /// or the partial threshold is not below the match threshold.
    pub fn validate(&self) -> Result<(), AuditError> {
        if !(0.0..=1.0).contains(&self.detection_confidence) {
            return Err(AuditError::config_error(
                "detection_confidence",
                format!("expected value in [0, 1], got {}", self.detection_confidence),
            ));
        }
        if !(0.0..=1.0).contains(&self.composite_split_ratio) {
            return Err(AuditError::config_error(
                "composite_split_ratio",
                format!("expected value in [0, 1], got {}", self.composite_split_ratio),
            ));
        }
        if self.name_match_threshold > 100 {
            return Err(AuditError::config_error(
                "name_match_threshold",
                format!("expected value in [0, 100], got {}", self.name_match_threshold),
            ));
        }
        if self.name_partial_threshold >= self.name_match_threshold {
            return Err(AuditError::config_error(
                "name_partial_threshold",
                format!(
                    "expected value below name_match_threshold ({}), got {}",
                    self.name_match_threshold, self.name_partial_threshold
                ),
            ));
        }
        Ok(())
    }
}
