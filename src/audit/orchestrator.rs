//! Top-level orchestration of one verification request.

use crate::audit::aggregator::RegionAggregator;
use crate::audit::result::VerificationOutcome;
use crate::audit::verifiers;
use crate::core::config::PipelineConfig;
use crate::core::errors::AuditError;
use crate::core::traits::{DateConverter, RegionDetector, TextRecognizer};
use crate::domain::{AssertedIdentity, AuditReport, ConfidenceFlag, OcrOutcome, ScriptHint};
use crate::processors::normalize;
use crate::utils::crop_with_padding;
use image::RgbImage;
use std::sync::Arc;

/// Drives the full audit pipeline for one request.
///
/// Collaborator handles are injected once at construction and shared across
/// requests; the auditor itself keeps no per-request state, so one instance
/// can serve concurrent verifications.
pub struct Auditor {
    detector: Arc<dyn RegionDetector>,
    recognizer: Arc<dyn TextRecognizer>,
    converter: Arc<dyn DateConverter>,
    aggregator: RegionAggregator,
    config: PipelineConfig,
}

impl Auditor {
    /// Creates an auditor with the default configuration.
    pub fn new(
        detector: Arc<dyn RegionDetector>,
        recognizer: Arc<dyn TextRecognizer>,
        converter: Arc<dyn DateConverter>,
    ) -> Self {
        let config = PipelineConfig::default();
        Self {
            aggregator: RegionAggregator::new(config.composite_split_ratio),
            detector,
            recognizer,
            converter,
            config,
        }
    }

    /// Creates an auditor with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AuditError::Config`] when the configuration is invalid.
    pub fn with_config(
        detector: Arc<dyn RegionDetector>,
        recognizer: Arc<dyn TextRecognizer>,
        converter: Arc<dyn DateConverter>,
        config: PipelineConfig,
    ) -> Result<Self, AuditError> {
        config.validate()?;
        Ok(Self {
            aggregator: RegionAggregator::new(config.composite_split_ratio),
            detector,
            recognizer,
            converter,
            config,
        })
    }

    /// Audits one scanned image against the asserted identity.
    ///
    /// Runs detection, card aggregation, per-region recognition and text
    /// repair, then the three field verifiers in fixed order. Verification is
    /// corpus-wide: text from every card is pooled before matching.
    ///
    /// # Errors
    ///
    /// A detection or recognition collaborator failure terminates the request
    /// with no partial report. An individual empty crop does not fail the
    /// request; it only degrades that region's contribution to the corpus.
    pub fn verify(
        &self,
        image: &RgbImage,
        identity: &AssertedIdentity,
    ) -> Result<VerificationOutcome, AuditError> {
        let detections = self
            .detector
            .detect(image, self.config.detection_confidence)?;
        let cards = self
            .aggregator
            .group_cards(&detections, image.width(), image.height());
        tracing::debug!(
            detections = detections.len(),
            cards = cards.len(),
            "aggregated detections into cards"
        );

        let mut ocr_outcomes = Vec::new();
        for card in &cards {
            let script = ScriptHint::for_face(card.face);
            for region in card.text_regions() {
                let outcome = match crop_with_padding(image, &region.bbox, self.config.crop_padding)
                {
                    Some(crop) => {
                        let recognized = self.recognizer.recognize(&crop, script)?;
                        OcrOutcome {
                            face: card.face,
                            normalized_text: normalize(&recognized.text),
                            raw_text: recognized.text,
                            engine_id: recognized.engine_id,
                            flag: recognized.flag,
                        }
                    }
                    None => {
                        tracing::warn!(face = ?card.face, bbox = ?region.bbox, "degenerate text crop");
                        OcrOutcome {
                            face: card.face,
                            raw_text: String::new(),
                            normalized_text: String::new(),
                            engine_id: "none".to_string(),
                            flag: ConfidenceFlag::EmptyCrop,
                        }
                    }
                };
                ocr_outcomes.push(outcome);
            }
        }

        let raw_corpus = join_texts(ocr_outcomes.iter().map(|o| o.raw_text.as_str()));
        let normalized_corpus = join_texts(ocr_outcomes.iter().map(|o| o.normalized_text.as_str()));

        let report = AuditReport {
            name: verifiers::verify_name(&identity.name, &raw_corpus, &normalized_corpus, &self.config),
            id_number: verifiers::verify_id_number(&identity.id_number, &raw_corpus, &normalized_corpus),
            dob: verifiers::verify_dob(
                &identity.dob,
                &raw_corpus,
                &normalized_corpus,
                self.converter.as_ref(),
            ),
        };
        let taxonomy = report.taxonomy();
        for (key, field) in report.fields() {
            tracing::info!(field = key, status = %field.status, score = field.score, "field verified");
        }

        Ok(VerificationOutcome {
            report,
            taxonomy,
            ocr_outcomes,
        })
    }
}

fn join_texts<'a>(texts: impl Iterator<Item = &'a str>) -> String {
    texts.collect::<Vec<_>>().join(" ")
}
