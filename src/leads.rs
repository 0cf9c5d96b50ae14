//! Lead capture behind the result gate: validation, storage, and export.
//!
//! The gate trades contact details for the full report. Validation is
//! deliberately light; the one hard rule is that an email must contain `@`.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// What the visitor types into the gate form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum LeadError {
    #[error("name is required")]
    MissingName,
    #[error("email is required")]
    MissingEmail,
    #[error("email {0:?} is not an address")]
    InvalidEmail(String),
    #[error("lead store is unavailable")]
    StoreUnavailable,
}

impl LeadSubmission {
    /// Trims both fields and applies the gate rules.
    pub fn validate(&self) -> Result<(), LeadError> {
        if self.name.trim().is_empty() {
            return Err(LeadError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(LeadError::MissingEmail);
        }
        if !email.contains('@') {
            return Err(LeadError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }
}

/// One captured lead, annotated with the result it unlocked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadRecord {
    pub name: String,
    pub email: String,
    /// Short human-readable result summary, e.g. the level name.
    pub summary: String,
    pub total_score: u32,
    pub answer_code: String,
    pub captured_at: DateTime<Utc>,
}

/// Storage seam for captured leads.
pub trait LeadStore: Send + Sync {
    fn append(&self, record: LeadRecord) -> Result<(), LeadError>;
    fn all(&self) -> Result<Vec<LeadRecord>, LeadError>;
}

/// Append-only in-memory log. The production store behind the seam; exports
/// read it back out.
#[derive(Debug, Default)]
pub struct InMemoryLeadLog {
    records: Mutex<Vec<LeadRecord>>,
}

impl InMemoryLeadLog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LeadStore for InMemoryLeadLog {
    fn append(&self, record: LeadRecord) -> Result<(), LeadError> {
        let mut records = self
            .records
            .lock()
            .map_err(|_| LeadError::StoreUnavailable)?;
        records.push(record);
        Ok(())
    }

    fn all(&self) -> Result<Vec<LeadRecord>, LeadError> {
        let records = self
            .records
            .lock()
            .map_err(|_| LeadError::StoreUnavailable)?;
        Ok(records.clone())
    }
}

/// Validates a submission and appends the stamped record. Returns the stored
/// record so callers can unlock the report.
pub fn capture(
    store: &dyn LeadStore,
    submission: LeadSubmission,
    summary: String,
    total_score: u32,
    answer_code: String,
) -> Result<LeadRecord, LeadError> {
    submission.validate()?;

    let record = LeadRecord {
        name: submission.name.trim().to_string(),
        email: submission.email.trim().to_string(),
        summary,
        total_score,
        answer_code,
        captured_at: Utc::now(),
    };
    store.append(record.clone())?;
    info!(email = %record.email, score = record.total_score, "captured lead");
    Ok(record)
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Store(#[from] LeadError),
    #[error("serializing leads to JSON")]
    Json(#[from] serde_json::Error),
    #[error("serializing leads to CSV")]
    Csv(#[from] csv::Error),
    #[error("CSV output was not valid UTF-8")]
    CsvEncoding,
}

/// All captured leads as a pretty-printed JSON array.
pub fn export_json(store: &dyn LeadStore) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&store.all()?)?)
}

/// All captured leads as CSV with a header row.
pub fn export_csv(store: &dyn LeadStore) -> Result<String, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for record in store.all()? {
        writer.serialize(record)?;
    }
    // into_inner surfaces the flush failure as io::Error; csv::Error wraps it.
    let bytes = writer
        .into_inner()
        .map_err(|error| ExportError::Csv(error.into_error().into()))?;
    String::from_utf8(bytes).map_err(|_| ExportError::CsvEncoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str) -> LeadSubmission {
        LeadSubmission {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn gate_rules_reject_blank_and_malformed_input() {
        assert_eq!(
            submission("  ", "kim@example.com").validate(),
            Err(LeadError::MissingName)
        );
        assert_eq!(
            submission("Kim", "   ").validate(),
            Err(LeadError::MissingEmail)
        );
        assert_eq!(
            submission("Kim", "not-an-address").validate(),
            Err(LeadError::InvalidEmail("not-an-address".to_string()))
        );
        assert_eq!(submission("Kim", "kim@example.com").validate(), Ok(()));
    }

    #[test]
    fn capture_trims_and_stores() {
        let store = InMemoryLeadLog::new();
        let record = capture(
            &store,
            submission("  Kim  ", " kim@example.com "),
            "AI Practitioner".to_string(),
            38,
            "abcdabcdabcdabcdabcd".to_string(),
        )
        .expect("valid submission is captured");

        assert_eq!(record.name, "Kim");
        assert_eq!(record.email, "kim@example.com");

        let stored = store.all().expect("store readable");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0], record);
    }

    #[test]
    fn invalid_submission_stores_nothing() {
        let store = InMemoryLeadLog::new();
        let outcome = capture(
            &store,
            submission("Kim", "nope"),
            "AI Observer".to_string(),
            4,
            "aaaa".to_string(),
        );
        assert!(outcome.is_err());
        assert!(store.all().expect("store readable").is_empty());
    }

    #[test]
    fn exports_cover_every_record() {
        let store = InMemoryLeadLog::new();
        for (name, email, score) in [("Kim", "kim@example.com", 12), ("Lee", "lee@example.com", 55)]
        {
            capture(
                &store,
                submission(name, email),
                "summary".to_string(),
                score,
                "aaaa".to_string(),
            )
            .expect("valid submission is captured");
        }

        let json = export_json(&store).expect("JSON export succeeds");
        assert!(json.contains("kim@example.com"));
        assert!(json.contains("lee@example.com"));

        let csv = export_csv(&store).expect("CSV export succeeds");
        let mut lines = csv.lines();
        assert!(lines
            .next()
            .expect("header row present")
            .starts_with("name,email,summary,total_score,answer_code,captured_at"));
        assert_eq!(lines.count(), 2);
    }
}
