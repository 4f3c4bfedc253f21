//! Domain types for the audit pipeline.
//!
//! Everything in this module is a request-scoped value type: created inside
//! one `verify()` call, never mutated after creation, and discarded when the
//! call returns.

pub mod card;
pub mod detection;
pub mod identity;
pub mod ocr;
pub mod report;

pub use card::{Card, CardFace};
pub use detection::{BoundarySource, Detection, RegionLabel};
pub use identity::AssertedIdentity;
pub use ocr::{ConfidenceFlag, OcrOutcome, ScriptHint};
pub use report::{AuditField, AuditReport, ErrorType, FieldStatus, TaxonomyCounts};
