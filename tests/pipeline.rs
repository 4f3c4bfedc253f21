//! End-to-end pipeline tests with mock detection and recognition engines.

use std::sync::Arc;

use card_audit::audit::Auditor;
use card_audit::calendar::BikramSambat;
use card_audit::core::errors::AuditError;
use card_audit::core::traits::{RecognizedText, RegionDetector, TextRecognizer};
use card_audit::domain::{
    AssertedIdentity, CardFace, ConfidenceFlag, Detection, ErrorType, FieldStatus, RegionLabel,
    ScriptHint,
};
use card_audit::processors::BBox;
use card_audit::store::{AuditStore, SqliteAuditStore};
use image::RgbImage;

/// Detector returning a fixed detection list.
struct ScriptedDetector {
    detections: Vec<Detection>,
}

impl RegionDetector for ScriptedDetector {
    fn detect(
        &self,
        _image: &RgbImage,
        _confidence_threshold: f32,
    ) -> Result<Vec<Detection>, AuditError> {
        Ok(self.detections.clone())
    }
}

/// Detector that always fails, to exercise collaborator error propagation.
struct FailingDetector;

impl RegionDetector for FailingDetector {
    fn detect(
        &self,
        _image: &RgbImage,
        _confidence_threshold: f32,
    ) -> Result<Vec<Detection>, AuditError> {
        Err(AuditError::detection_error(
            "inference session",
            std::io::Error::other("model not loaded"),
        ))
    }
}

/// Recognizer returning fixed text per script hint.
struct ScriptedRecognizer {
    nepali_text: String,
    english_text: String,
}

impl TextRecognizer for ScriptedRecognizer {
    fn recognize(
        &self,
        _crop: &RgbImage,
        script: ScriptHint,
    ) -> Result<RecognizedText, AuditError> {
        let (text, engine_id) = match script {
            ScriptHint::Nepali => (self.nepali_text.clone(), "mock_ne"),
            ScriptHint::English => (self.english_text.clone(), "mock_en"),
        };
        Ok(RecognizedText {
            text,
            engine_id: engine_id.to_string(),
            flag: ConfidenceFlag::Normal,
        })
    }
}

/// Recognizer that always fails, to exercise collaborator error propagation.
struct FailingRecognizer;

impl TextRecognizer for FailingRecognizer {
    fn recognize(
        &self,
        _crop: &RgbImage,
        _script: ScriptHint,
    ) -> Result<RecognizedText, AuditError> {
        Err(AuditError::recognition_error(
            "mock_ne",
            "engine session",
            std::io::Error::other("inference failed"),
        ))
    }
}

fn det(label: RegionLabel, x1: i32, y1: i32, x2: i32, y2: i32) -> Detection {
    Detection::new(label, 0.9, BBox::new(x1, y1, x2, y2))
}

fn identity() -> AssertedIdentity {
    AssertedIdentity {
        name: "Manjil Rai".to_string(),
        id_number: "12-34-567".to_string(),
        dob: "2000-01-29".to_string(),
    }
}

/// A composite front+back scan with the photo on top and the fingerprint
/// below.
fn composite_detections() -> Vec<Detection> {
    vec![
        det(RegionLabel::PhotoRegion, 100, 50, 300, 150),
        det(RegionLabel::FingerprintRegion, 100, 450, 300, 550),
        det(RegionLabel::PrimaryTextBlock, 350, 60, 700, 140),
        det(RegionLabel::PrimaryTextBlock, 350, 460, 700, 540),
    ]
}

fn auditor(detections: Vec<Detection>) -> Auditor {
    Auditor::new(
        Arc::new(ScriptedDetector { detections }),
        Arc::new(ScriptedRecognizer {
            nepali_text: "नाम: मन्जिल राई जन्म मिति: २०५६-१०-१५ नं १२३४५६७".to_string(),
            english_text: "Citizenship No: 1234567 Name: Manjil Rai".to_string(),
        }),
        Arc::new(BikramSambat),
    )
}

#[test]
fn composite_scan_verifies_all_fields() {
    let outcome = auditor(composite_detections())
        .verify(&RgbImage::new(800, 1000), &identity())
        .unwrap();

    assert_eq!(outcome.report.name.status, FieldStatus::Match);
    assert_eq!(outcome.report.id_number.status, FieldStatus::Match);
    assert_eq!(outcome.report.dob.status, FieldStatus::Match);
    // The BS date is displayed with priority on cards, so it matches first.
    assert!(outcome.report.dob.span.starts_with("BS:"));

    assert_eq!(outcome.taxonomy.get(ErrorType::Success), 3);
    assert_eq!(outcome.taxonomy.total(), 3);

    assert_eq!(outcome.ocr_outcomes.len(), 2);
    assert_eq!(outcome.ocr_outcomes[0].face, CardFace::Front);
    assert_eq!(outcome.ocr_outcomes[0].engine_id, "mock_ne");
    assert_eq!(outcome.ocr_outcomes[1].face, CardFace::Back);
    assert_eq!(outcome.ocr_outcomes[1].engine_id, "mock_en");
}

#[test]
fn name_matches_through_skeleton_when_only_devanagari_present() {
    let auditor = Auditor::new(
        Arc::new(ScriptedDetector {
            detections: vec![
                det(RegionLabel::PhotoRegion, 100, 50, 300, 150),
                det(RegionLabel::PrimaryTextBlock, 350, 60, 700, 140),
            ],
        }),
        Arc::new(ScriptedRecognizer {
            nepali_text: "नाम: मन्जिल".to_string(),
            english_text: String::new(),
        }),
        Arc::new(BikramSambat),
    );
    let asserted = AssertedIdentity {
        name: "Manjil".to_string(),
        id_number: "999".to_string(),
        dob: "2000-01-29".to_string(),
    };
    let outcome = auditor.verify(&RgbImage::new(800, 600), &asserted).unwrap();

    assert_eq!(outcome.report.name.status, FieldStatus::Match);
    assert_eq!(outcome.report.name.score, 100);
    assert_eq!(outcome.report.id_number.error_type, ErrorType::IdDigitMisread);
    assert_eq!(outcome.report.dob.error_type, ErrorType::DobMismatch);
    assert_eq!(outcome.taxonomy.total(), 3);
}

#[test]
fn degenerate_crop_degrades_only_that_region() {
    let mut detections = composite_detections();
    // Zero-width text region on the front face.
    detections.push(det(RegionLabel::PrimaryTextBlock, 400, 60, 400, 140));

    let outcome = auditor(detections)
        .verify(&RgbImage::new(800, 1000), &identity())
        .unwrap();

    let empty: Vec<_> = outcome
        .ocr_outcomes
        .iter()
        .filter(|o| o.flag == ConfidenceFlag::EmptyCrop)
        .collect();
    assert_eq!(empty.len(), 1);
    assert_eq!(empty[0].raw_text, "");
    assert_eq!(empty[0].engine_id, "none");

    // The other regions still carry the corpus; verification is unaffected.
    assert_eq!(outcome.report.name.status, FieldStatus::Match);
    assert_eq!(outcome.taxonomy.total(), 3);
}

#[test]
fn detector_failure_terminates_the_request() {
    let auditor = Auditor::new(
        Arc::new(FailingDetector),
        Arc::new(ScriptedRecognizer {
            nepali_text: String::new(),
            english_text: String::new(),
        }),
        Arc::new(BikramSambat),
    );
    let err = auditor
        .verify(&RgbImage::new(800, 600), &identity())
        .unwrap_err();
    assert!(matches!(err, AuditError::Detection { .. }));
}

#[test]
fn recognizer_failure_terminates_the_request() {
    let auditor = Auditor::new(
        Arc::new(ScriptedDetector {
            detections: vec![
                det(RegionLabel::CardBoundary, 0, 0, 800, 600),
                det(RegionLabel::PrimaryTextBlock, 350, 60, 700, 140),
            ],
        }),
        Arc::new(FailingRecognizer),
        Arc::new(BikramSambat),
    );
    let err = auditor
        .verify(&RgbImage::new(800, 600), &identity())
        .unwrap_err();
    assert!(matches!(err, AuditError::Recognition { .. }));
    assert!(err.to_string().contains("mock_ne"));
}

#[test]
fn zero_detections_still_produce_a_full_report() {
    let outcome = auditor(Vec::new())
        .verify(&RgbImage::new(800, 600), &identity())
        .unwrap();

    // One fallback card, no text regions, so every field misses.
    assert!(outcome.ocr_outcomes.is_empty());
    assert_eq!(outcome.report.name.error_type, ErrorType::NameMismatch);
    assert_eq!(outcome.report.id_number.error_type, ErrorType::IdDigitMisread);
    assert_eq!(outcome.report.dob.error_type, ErrorType::DobMismatch);
    assert_eq!(outcome.taxonomy.total(), 3);
}

#[test]
fn invalid_dob_reports_parse_error_not_request_failure() {
    let outcome = auditor(composite_detections())
        .verify(
            &RgbImage::new(800, 1000),
            &AssertedIdentity {
                dob: "2000-13-40".to_string(),
                ..identity()
            },
        )
        .unwrap();

    assert_eq!(outcome.report.dob.status, FieldStatus::Error);
    assert_eq!(outcome.report.dob.error_type, ErrorType::DateParseErr);
    assert_eq!(outcome.report.dob.score, 0);
    assert_eq!(outcome.taxonomy.get(ErrorType::DateParseErr), 1);
    assert_eq!(outcome.taxonomy.total(), 3);
}

#[test]
fn outcome_round_trips_through_the_store() {
    let outcome = auditor(composite_detections())
        .verify(&RgbImage::new(800, 1000), &identity())
        .unwrap();

    let store = SqliteAuditStore::open_in_memory().unwrap();
    let id = store.record(&identity(), &outcome, Some("scan.jpg")).unwrap();

    let records = store.recent(5).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, id);
    assert_eq!(records[0].report.name.status, FieldStatus::Match);
    assert_eq!(records[0].ocr_outcomes.len(), 2);
    assert_eq!(records[0].taxonomy.get(ErrorType::Success), 3);
}
