//! The audit pipeline: aggregation, verification, and orchestration.
//!
//! [`RegionAggregator`] groups raw detections into logical cards,
//! [`verifiers`] reconcile recognized text against the asserted identity,
//! and [`Auditor`] drives the whole flow for one request.

pub mod aggregator;
pub mod orchestrator;
pub mod result;
pub mod verifiers;

pub use aggregator::RegionAggregator;
pub use orchestrator::Auditor;
pub use result::VerificationOutcome;
