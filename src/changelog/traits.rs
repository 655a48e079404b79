//! Changelog related traits
use async_trait::async_trait;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::error::Result;

/// External tools the composite is built with: a VCS clone and a changelog
/// generator scoped to a tag range.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Toolchain: Send + Sync {
    /// Clones `owner/name` into `destination` without checking out a working
    /// tree. Tags and history must be kept.
    async fn clone_repo(
        &self,
        owner: &str,
        name: &str,
        destination: &Path,
    ) -> Result<()>;

    /// Changelog text for `range` ("<prev>..<latest>") of the repository at
    /// `workdir`, rendered with the configuration at `config_url`.
    async fn generate_changelog(
        &self,
        config_url: &str,
        workdir: &Path,
        range: &str,
    ) -> Result<Vec<u8>>;
}
