use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// One redaction rule firing against one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Redaction {
    pub path: String,
    pub rule: String,
    pub count: usize,
}

/// A per-file processing failure. Recorded in the summary, never fatal to
/// the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileFailure {
    pub path: String,
    pub message: String,
}

/// Outcome of a full sanitization pass over the tracked-file listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Total tracked paths reported by version control.
    pub scanned: usize,
    /// Eligible files read, redacted, and written back.
    pub sanitized: usize,
    pub skipped_binary: usize,
    pub skipped_excluded: usize,
    pub redactions: Vec<Redaction>,
    pub failures: Vec<FileFailure>,
    #[serde(with = "time::serde::timestamp")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::timestamp")]
    pub finished_at: OffsetDateTime,
}

impl RunSummary {
    pub fn new() -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            scanned: 0,
            sanitized: 0,
            skipped_binary: 0,
            skipped_excluded: 0,
            redactions: Vec::new(),
            failures: Vec::new(),
            started_at: now,
            finished_at: now,
        }
    }

    pub fn record_failure(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.failures.push(FileFailure {
            path: path.into(),
            message: message.into(),
        });
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    /// Total occurrences replaced across all files and rules.
    pub fn total_redactions(&self) -> usize {
        self.redactions.iter().map(|r| r.count).sum()
    }

    pub fn finish(&mut self) {
        self.finished_at = OffsetDateTime::now_utc();
    }
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}
