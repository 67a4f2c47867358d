//! Version control client trait

use async_trait::async_trait;
use scrub_core::Result;

/// Trait for the version-control operations the sanitizer needs
#[async_trait]
pub trait VcsClient: Send + Sync {
    /// List tracked files as relative paths, in the order the tool reports them
    async fn list_tracked_files(&self) -> Result<Vec<String>>;

    /// Stage every working-tree change for the next commit
    async fn stage_all(&self) -> Result<()>;
}
