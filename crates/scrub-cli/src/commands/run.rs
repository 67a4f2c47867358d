use anyhow::Result;
use scrub_core::RunSummary;
use scrub_engine::{SanitizeConfig, Sanitizer};
use scrub_vcs::GitClient;

use crate::cli::Cli;

pub async fn handle(cli: Cli) -> Result<()> {
    let config = SanitizeConfig {
        username_token: cli.username,
        username_replacement: cli.replacement,
        ..SanitizeConfig::default()
    };

    let sanitizer = Sanitizer::new(GitClient::new(), config);
    let summary = sanitizer.run().await?;

    print_summary(&summary);

    Ok(())
}

/// Per-file failures are reported here without affecting the exit code;
/// only listing/staging failures make the run fail.
fn print_summary(summary: &RunSummary) {
    println!(
        "✓ Sanitized {} of {} tracked files",
        summary.sanitized, summary.scanned
    );
    println!("  Excluded paths: {}", summary.skipped_excluded);
    println!("  Binary files: {}", summary.skipped_binary);
    println!("  Redactions applied: {}", summary.total_redactions());

    if !summary.failures.is_empty() {
        println!("\nFailed files ({}):", summary.failures.len());
        for failure in &summary.failures {
            println!("  {}: {}", failure.path, failure.message);
        }
    }
}
