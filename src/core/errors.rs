//! Error types for the audit pipeline.
//!
//! This module defines the main [`AuditError`] enum. The in-crate pipeline
//! stages (aggregation, cropping, normalization, verification) are pure and
//! infallible, so every variant here marks a failure at a collaborator or
//! input boundary.
//!
//! Collaborator-boundary failures (detection, recognition, persistence) are
//! terminal request failures and are kept strictly separate from the
//! field-level verification taxonomy, which lives in
//! [`crate::domain::report::ErrorType`] and is always recoverable.

use thiserror::Error;

/// Errors that can occur in the audit pipeline.
///
/// Every variant terminates the current verification request; no partial
/// report is produced when one of these surfaces.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The region detection collaborator failed.
    #[error("region detection failed: {context}")]
    Detection {
        /// Additional context about the detection failure.
        context: String,
        /// The underlying error that caused this error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The text recognition collaborator failed.
    #[error("text recognition failed in engine '{engine_id}': {context}")]
    Recognition {
        /// Identifier of the recognition engine that failed.
        engine_id: String,
        /// Additional context about the recognition failure.
        context: String,
        /// The underlying error that caused this error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A date fell outside the supported Bikram Sambat conversion range.
    #[error(
        "date {date} is outside the supported Bikram Sambat range ({min_bs}..={max_bs} BS)"
    )]
    CalendarRange {
        /// The Gregorian date that could not be converted.
        date: chrono::NaiveDate,
        /// First supported Bikram Sambat year.
        min_bs: i32,
        /// Last supported Bikram Sambat year.
        max_bs: i32,
    },

    /// Error indicating invalid input.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// Error indicating a configuration problem.
    #[error("configuration: {message}")]
    Config {
        /// A message describing the configuration error.
        message: String,
    },

    /// The persistence collaborator failed.
    #[error("persistence failed: {context}")]
    Store {
        /// Additional context about the persistence failure.
        context: String,
        /// The underlying error that caused this error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl AuditError {
    /// Creates a configuration error with context and details.
    pub fn config_error(context: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Config {
            message: format!("{}: {}", context.into(), details.into()),
        }
    }

    /// Creates an invalid-input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Wraps an error from the region detection collaborator.
    pub fn detection_error(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Detection {
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// Wraps an error from the text recognition collaborator.
    pub fn recognition_error(
        engine_id: impl Into<String>,
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Recognition {
            engine_id: engine_id.into(),
            context: context.into(),
            source: Box::new(source),
        }
    }

    /// Wraps an error from the persistence collaborator.
    pub fn store_error(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Store {
            context: context.into(),
            source: Box::new(source),
        }
    }
}
