//! Core building blocks of the audit pipeline.
//!
//! This module contains the components everything else depends on:
//! - Error handling ([`errors`])
//! - Pipeline configuration ([`config`])
//! - Collaborator traits for injected inference and conversion engines
//!   ([`traits`])

pub mod config;
pub mod errors;
pub mod traits;

pub use config::PipelineConfig;
pub use errors::AuditError;
pub use traits::{DateConverter, RecognizedText, RegionDetector, TextRecognizer};
