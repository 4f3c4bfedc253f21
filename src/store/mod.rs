//! Persistence of completed verification audits.
//!
//! Recording happens only after verification completes; a persistence
//! failure is surfaced as [`AuditError::Store`] and is never folded into the
//! field-level taxonomy. The store does not retry.

use crate::core::errors::AuditError;
use crate::domain::{AssertedIdentity, AuditReport, OcrOutcome, TaxonomyCounts};
use crate::VerificationOutcome;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Mutex;

/// One persisted verification record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredVerification {
    /// Row id, monotonically increasing.
    pub id: i64,
    /// RFC 3339 timestamp of when the record was written.
    pub created_at: String,
    /// Asserted identity at the time of verification.
    pub identity: AssertedIdentity,
    /// The audit report that was produced.
    pub report: AuditReport,
    /// Taxonomy counts for the request.
    pub taxonomy: TaxonomyCounts,
    /// Per-region OCR outcomes.
    pub ocr_outcomes: Vec<OcrOutcome>,
    /// Name of the uploaded file, when known.
    pub source_filename: Option<String>,
}

/// Persists completed audits and lists recent ones.
pub trait AuditStore: Send + Sync {
    /// Records a completed verification; returns the new record id.
    fn record(
        &self,
        identity: &AssertedIdentity,
        outcome: &VerificationOutcome,
        source_filename: Option<&str>,
    ) -> Result<i64, AuditError>;

    /// Returns up to `limit` records, most recent first.
    fn recent(&self, limit: usize) -> Result<Vec<StoredVerification>, AuditError>;
}

/// SQLite-backed audit store.
pub struct SqliteAuditStore {
    conn: Mutex<Connection>,
}

impl SqliteAuditStore {
    /// Opens (or creates) the store at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AuditError> {
        let conn = Connection::open(path)
            .map_err(|e| AuditError::store_error("opening database", e))?;
        Self::with_connection(conn)
    }

    /// Opens an in-memory store, useful for tests and demos.
    pub fn open_in_memory() -> Result<Self, AuditError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| AuditError::store_error("opening in-memory database", e))?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, AuditError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS verifications (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                created_at TEXT NOT NULL,
                name TEXT NOT NULL,
                id_number TEXT NOT NULL,
                dob TEXT NOT NULL,
                report_json TEXT NOT NULL,
                taxonomy_json TEXT NOT NULL,
                ocr_json TEXT NOT NULL,
                source_filename TEXT
            )",
            [],
        )
        .map_err(|e| AuditError::store_error("creating schema", e))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Connection> {
        match self.conn.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl AuditStore for SqliteAuditStore {
    fn record(
        &self,
        identity: &AssertedIdentity,
        outcome: &VerificationOutcome,
        source_filename: Option<&str>,
    ) -> Result<i64, AuditError> {
        let report_json = serde_json::to_string(&outcome.report)
            .map_err(|e| AuditError::store_error("serializing report", e))?;
        let taxonomy_json = serde_json::to_string(&outcome.taxonomy)
            .map_err(|e| AuditError::store_error("serializing taxonomy", e))?;
        let ocr_json = serde_json::to_string(&outcome.ocr_outcomes)
            .map_err(|e| AuditError::store_error("serializing ocr outcomes", e))?;
        let created_at = chrono::Utc::now().to_rfc3339();

        let conn = self.lock();
        conn.execute(
            "INSERT INTO verifications
                (created_at, name, id_number, dob, report_json, taxonomy_json, ocr_json, source_filename)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                created_at,
                identity.name,
                identity.id_number,
                identity.dob,
                report_json,
                taxonomy_json,
                ocr_json,
                source_filename,
            ],
        )
        .map_err(|e| AuditError::store_error("inserting record", e))?;
        Ok(conn.last_insert_rowid())
    }

    fn recent(&self, limit: usize) -> Result<Vec<StoredVerification>, AuditError> {
        let conn = self.lock();
        let mut stmt = conn
            .prepare(
                "SELECT id, created_at, name, id_number, dob,
                        report_json, taxonomy_json, ocr_json, source_filename
                 FROM verifications
                 ORDER BY id DESC
                 LIMIT ?1",
            )
            .map_err(|e| AuditError::store_error("preparing query", e))?;

        let rows = stmt
            .query_map(params![limit as i64], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                    row.get::<_, String>(6)?,
                    row.get::<_, String>(7)?,
                    row.get::<_, Option<String>>(8)?,
                ))
            })
            .map_err(|e| AuditError::store_error("querying records", e))?;

        let mut records = Vec::new();
        for row in rows {
            let (id, created_at, name, id_number, dob, report_json, taxonomy_json, ocr_json, source_filename) =
                row.map_err(|e| AuditError::store_error("reading row", e))?;
            records.push(StoredVerification {
                id,
                created_at,
                identity: AssertedIdentity {
                    name,
                    id_number,
                    dob,
                },
                report: serde_json::from_str(&report_json)
                    .map_err(|e| AuditError::store_error("deserializing report", e))?,
                taxonomy: serde_json::from_str(&taxonomy_json)
                    .map_err(|e| AuditError::store_error("deserializing taxonomy", e))?,
                ocr_outcomes: serde_json::from_str(&ocr_json)
                    .map_err(|e| AuditError::store_error("deserializing ocr outcomes", e))?,
                source_filename,
            });
        }
        Ok(records)
    }
}
