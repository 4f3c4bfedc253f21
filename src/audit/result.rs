//! Result types for the audit pipeline.

use crate::domain::{AuditReport, OcrOutcome, TaxonomyCounts};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything one verification request produces.
///
/// The outcome reports scores and statuses only; any accept/reject policy is
/// the caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationOutcome {
    /// Per-field audit outcomes.
    pub report: AuditReport,
    /// Error-type occurrence counts across the fields.
    pub taxonomy: TaxonomyCounts,
    /// One entry per text-bearing region that was recognized.
    pub ocr_outcomes: Vec<OcrOutcome>,
}

impl fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Audit report:")?;
        for (key, field) in self.report.fields() {
            writeln!(
                f,
                "  {key}: {} (score {}, {}) -> {}",
                field.status, field.score, field.error_type, field.span
            )?;
        }
        writeln!(f, "Taxonomy:")?;
        for (error_type, count) in self.taxonomy.iter() {
            writeln!(f, "  {error_type}: {count}")?;
        }
        writeln!(f, "Recognized regions: {}", self.ocr_outcomes.len())?;
        for outcome in &self.ocr_outcomes {
            writeln!(
                f,
                "  [{:?}/{}] '{}'",
                outcome.face, outcome.engine_id, outcome.normalized_text
            )?;
        }
        Ok(())
    }
}
