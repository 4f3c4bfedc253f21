//! The user-asserted identity under audit.

use serde::{Deserialize, Serialize};

/// Identity fields asserted by the user, to be reconciled against the scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssertedIdentity {
    /// Full name in Latin script.
    pub name: String,
    /// Citizenship number; separators are ignored during matching.
    pub id_number: String,
    /// Gregorian date of birth as `YYYY-MM-DD` (`/` is tolerated as a
    /// separator).
    pub dob: String,
}
