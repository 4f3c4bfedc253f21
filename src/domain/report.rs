//! Audit report and taxonomy types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Verification status of one asserted field.
///
/// Status is a pure function of the field score via fixed thresholds, except
/// `Error`, which overrides on parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldStatus {
    /// The asserted value was found in the scan.
    Match,
    /// The asserted value was approximately found.
    Partial,
    /// The asserted value was not found.
    Mismatch,
    /// The asserted value could not be interpreted.
    Error,
}

impl fmt::Display for FieldStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldStatus::Match => write!(f, "MATCH"),
            FieldStatus::Partial => write!(f, "PARTIAL"),
            FieldStatus::Mismatch => write!(f, "MISMATCH"),
            FieldStatus::Error => write!(f, "ERROR"),
        }
    }
}

/// Fixed vocabulary of verification-outcome classifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ErrorType {
    /// The field verified successfully.
    #[serde(rename = "SUCCESS")]
    Success,
    /// Name not found, even by skeleton matching.
    #[serde(rename = "NAME_MISMATCH")]
    NameMismatch,
    /// Asserted ID digits not found in the recognized digits.
    #[serde(rename = "ID_DIGIT_MISREAD")]
    IdDigitMisread,
    /// Neither calendar's date tokens were found.
    #[serde(rename = "DOB_MISMATCH")]
    DobMismatch,
    /// The asserted date could not be parsed or converted.
    #[serde(rename = "DATE_PARSE_ERR")]
    DateParseErr,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::Success => write!(f, "SUCCESS"),
            ErrorType::NameMismatch => write!(f, "NAME_MISMATCH"),
            ErrorType::IdDigitMisread => write!(f, "ID_DIGIT_MISREAD"),
            ErrorType::DobMismatch => write!(f, "DOB_MISMATCH"),
            ErrorType::DateParseErr => write!(f, "DATE_PARSE_ERR"),
        }
    }
}

/// Outcome of verifying one asserted field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditField {
    /// Match score in `[0, 100]`.
    pub score: u8,
    /// Status derived from the score (or `Error` on parse failure).
    pub status: FieldStatus,
    /// Diagnostic span: the matched text or the failure reason.
    pub span: String,
    /// Taxonomy classification for this field.
    pub error_type: ErrorType,
}

/// Per-field audit outcomes for one verification request.
///
/// The key set is fixed: exactly `name`, `id_number`, and `dob`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    /// Outcome for the asserted name.
    pub name: AuditField,
    /// Outcome for the asserted ID number.
    pub id_number: AuditField,
    /// Outcome for the asserted date of birth.
    pub dob: AuditField,
}

impl AuditReport {
    /// Returns the fields with their report keys, in verification order.
    pub fn fields(&self) -> [(&'static str, &AuditField); 3] {
        [
            ("name", &self.name),
            ("id_number", &self.id_number),
            ("dob", &self.dob),
        ]
    }

    /// Tallies the per-field error types into taxonomy counts.
    ///
    /// The counts always sum to the number of fields verified (3).
    pub fn taxonomy(&self) -> TaxonomyCounts {
        let mut counts = TaxonomyCounts::default();
        for (_, field) in self.fields() {
            counts.tally(field.error_type);
        }
        counts
    }
}

/// Occurrence counts of error types across one request's fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaxonomyCounts(BTreeMap<ErrorType, u32>);

impl TaxonomyCounts {
    /// Increments the count for an error type.
    pub fn tally(&mut self, error_type: ErrorType) {
        *self.0.entry(error_type).or_insert(0) += 1;
    }

    /// Returns the count for an error type (0 when absent).
    pub fn get(&self, error_type: ErrorType) -> u32 {
        self.0.get(&error_type).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u32 {
        self.0.values().sum()
    }

    /// Iterates over the counted error types and their counts.
    pub fn iter(&self) -> impl Iterator<Item = (ErrorType, u32)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }
}
