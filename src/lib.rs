//! card-audit: identity document audit engine.
//!
//! This crate audits a scanned national identity card against a user-asserted
//! identity (name, ID number, date of birth). The pipeline groups raw visual
//! detections into logical cards, repairs recognized text, and reconciles the
//! text against the asserted fields using cross-script consonant-skeleton
//! matching and dual-calendar (Gregorian / Bikram Sambat) date matching.
//!
//! Model inference is not part of this crate: object detection and text
//! recognition sit behind the collaborator traits in [`core::traits`] and are
//! injected into the [`audit::Auditor`] at construction. The crate itself is
//! pure, deterministic, and request-scoped; it holds no global mutable state.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use card_audit::audit::Auditor;
//! use card_audit::calendar::BikramSambat;
//! use card_audit::domain::AssertedIdentity;
//! # use card_audit::core::traits::{RegionDetector, TextRecognizer};
//! # fn detector() -> Arc<dyn RegionDetector> { unimplemented!() }
//! # fn recognizer() -> Arc<dyn TextRecognizer> { unimplemented!() }
//!
//! let auditor = Auditor::new(detector(), recognizer(), Arc::new(BikramSambat));
//! let image = image::open("scan.jpg").unwrap().to_rgb8();
//! let identity = AssertedIdentity {
//!     name: "Manjil Rai".into(),
//!     id_number: "12-34-567".into(),
//!     dob: "2000-01-29".into(),
//! };
//! let outcome = auditor.verify(&image, &identity).unwrap();
//! println!("{outcome}");
//! ```

pub mod audit;
pub mod calendar;
pub mod core;
pub mod domain;
pub mod processors;
pub mod store;
pub mod utils;

pub use crate::audit::{Auditor, RegionAggregator, VerificationOutcome};
pub use crate::calendar::{BikramSambat, BsDate};
pub use crate::core::config::PipelineConfig;
pub use crate::core::errors::AuditError;
pub use crate::domain::{
    AssertedIdentity, AuditField, AuditReport, Card, CardFace, ConfidenceFlag, Detection,
    ErrorType, FieldStatus, OcrOutcome, RegionLabel, ScriptHint, TaxonomyCounts,
};
pub use crate::store::{AuditStore, SqliteAuditStore};
