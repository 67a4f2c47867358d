use async_trait::async_trait;
use scrub_core::{Error, Result};
use std::path::PathBuf;
use std::process::Command;

use crate::client::VcsClient;

/// `VcsClient` backed by the `git` binary.
pub struct GitClient {
    work_dir: Option<PathBuf>,
}

impl GitClient {
    /// Operate on the current working directory's repository.
    pub fn new() -> Self {
        Self { work_dir: None }
    }

    /// Operate on a specific working directory instead of the process cwd.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: Some(dir.into()),
        }
    }

    /// Run a git subcommand and return its stdout. A spawn failure or a
    /// non-zero exit fails the run.
    fn run(&self, args: &[&str]) -> Result<Vec<u8>> {
        let mut cmd = Command::new("git");
        cmd.args(args);
        if let Some(dir) = &self.work_dir {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .map_err(|e| Error::Vcs(format!("Failed to run git {}: {}", args.join(" "), e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Vcs(format!(
                "git {} failed: {}",
                args.join(" "),
                stderr.trim()
            )));
        }

        Ok(output.stdout)
    }
}

impl Default for GitClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VcsClient for GitClient {
    async fn list_tracked_files(&self) -> Result<Vec<String>> {
        let stdout = self.run(&["ls-files"])?;
        let listing = String::from_utf8(stdout)
            .map_err(|e| Error::Vcs(format!("Invalid UTF-8 in git ls-files output: {}", e)))?;
        Ok(parse_file_list(&listing))
    }

    async fn stage_all(&self) -> Result<()> {
        self.run(&["add", "."])?;
        Ok(())
    }
}

/// One path per line, blank lines dropped, order preserved.
fn parse_file_list(listing: &str) -> Vec<String> {
    listing
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}
