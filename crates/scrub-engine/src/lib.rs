//! Sanitization engine
//!
//! Walks the tracked-file listing, classifies each path, rewrites eligible
//! text files through the redaction rules, and stages the result.

pub mod config;
pub mod exclude;
pub mod probe;

pub use config::SanitizeConfig;
pub use exclude::Exclusions;

use scrub_core::{Redaction, Result, RunSummary};
use scrub_redact::Redactor;
use scrub_vcs::VcsClient;
use std::path::Path;
use tracing::{debug, warn};

/// How a tracked path is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Binary,
    Excluded,
    Eligible,
}

pub struct Sanitizer<V: VcsClient> {
    vcs: V,
    exclusions: Exclusions,
    redactor: Redactor,
}

impl<V: VcsClient> Sanitizer<V> {
    pub fn new(vcs: V, config: SanitizeConfig) -> Self {
        let redactor =
            Redactor::for_username(&config.username_token, &config.username_replacement);
        let exclusions = Exclusions::new(config.exclusions);
        Self {
            vcs,
            exclusions,
            redactor,
        }
    }

    /// Run the full pass: enumerate, classify, rewrite, stage.
    ///
    /// Listing and staging failures abort the run; per-file failures are
    /// recorded in the summary and processing continues.
    pub async fn run(&self) -> Result<RunSummary> {
        let files = self.vcs.list_tracked_files().await?;

        let mut summary = RunSummary::new();
        summary.scanned = files.len();

        for path in &files {
            match self.classify(path).await {
                Classification::Excluded => {
                    if let Some(fragment) = self.exclusions.matching_fragment(path) {
                        debug!(path = %path, fragment = %fragment, "skipping excluded path");
                    }
                    summary.skipped_excluded += 1;
                }
                Classification::Binary => {
                    debug!(path = %path, "skipping binary file");
                    summary.skipped_binary += 1;
                }
                Classification::Eligible => match self.process(path).await {
                    Ok(redactions) => {
                        summary.sanitized += 1;
                        summary.redactions.extend(redactions);
                    }
                    Err(e) => {
                        warn!(path = %path, error = %e, "failed to process file");
                        summary.record_failure(path.as_str(), e.to_string());
                    }
                },
            }
        }

        self.vcs.stage_all().await?;
        summary.finish();

        Ok(summary)
    }

    /// Exclusion wins without opening the file; everything else is probed.
    pub async fn classify(&self, path: &str) -> Classification {
        if self.exclusions.is_excluded(path) {
            return Classification::Excluded;
        }
        if probe::is_binary(Path::new(path)).await {
            return Classification::Binary;
        }
        Classification::Eligible
    }

    /// Rewrite one file through the redaction rules as a single in-memory
    /// string. Decode failures surface as the read error.
    async fn process(&self, path: &str) -> Result<Vec<Redaction>> {
        let content = tokio::fs::read_to_string(path).await?;
        let (redacted, redactions) = self.redactor.redact(path, &content);
        tokio::fs::write(path, redacted).await?;
        Ok(redactions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct NullVcs;

    #[async_trait]
    impl VcsClient for NullVcs {
        async fn list_tracked_files(&self) -> Result<Vec<String>> {
            Ok(Vec::new())
        }

        async fn stage_all(&self) -> Result<()> {
            Ok(())
        }
    }

    fn sanitizer() -> Sanitizer<NullVcs> {
        Sanitizer::new(NullVcs, SanitizeConfig::default())
    }

    #[tokio::test]
    async fn test_classify_excluded_without_touching_disk() {
        // The path does not exist; exclusion must decide before any probe.
        let classification = sanitizer().classify("vendor/lib/util.py").await;

        assert_eq!(classification, Classification::Excluded);
    }

    #[tokio::test]
    async fn test_classify_unreadable_as_binary() {
        let classification = sanitizer().classify("no/such/file.txt").await;

        assert_eq!(classification, Classification::Binary);
    }

    #[tokio::test]
    async fn test_classify_eligible_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("readme.md");
        std::fs::write(&path, "hello\n").unwrap();

        let classification = sanitizer().classify(path.to_str().unwrap()).await;

        assert_eq!(classification, Classification::Eligible);
    }

    #[tokio::test]
    async fn test_classify_nul_as_binary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blob.bin");
        std::fs::write(&path, b"\x00\xFF").unwrap();

        let classification = sanitizer().classify(path.to_str().unwrap()).await;

        assert_eq!(classification, Classification::Binary);
    }
}
