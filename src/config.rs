//! Run configuration, built once at startup and passed to every stage.
use derive_builder::Builder;
use std::path::PathBuf;
use url::Url;

use crate::{
    error::{CompositeError, Result},
    forge::config::RemoteConfig,
};

/// Default owner of the hub and dependency repositories.
pub const DEFAULT_OWNER: &str = "DecisiveAI";
/// Default hub chart repository.
pub const DEFAULT_REPO: &str = "mdai-hub";
/// Default substring selecting relevant dependencies.
pub const DEFAULT_IDENTIFIER: &str = "mdai";
/// Default git-cliff configuration.
pub const DEFAULT_CLIFF_CONFIG_URL: &str = "https://raw.githubusercontent.com/DecisiveAI/changelogs/refs/heads/main/scripts/composite/cliff.toml";
/// Default changelog file.
pub const DEFAULT_CHANGELOG_PATH: &str = "CHANGELOG.md";

#[derive(Debug, Builder)]
#[builder(setter(into), build_fn(private, name = "_build"))]
pub struct CompositeConfigParams {
    pub owner: String,
    pub repo: String,
    #[builder(default, setter(into, strip_option))]
    pub version: Option<String>,
    pub identifier: String,
    pub cliff_config_url: String,
    pub path: PathBuf,
    #[builder(default)]
    pub dry_run: bool,
    #[builder(default)]
    pub remote_config: RemoteConfig,
}

impl CompositeConfigParamsBuilder {
    pub fn build(&self) -> Result<CompositeConfig> {
        let params = self._build().map_err(|e| {
            CompositeError::invalid_config(format!(
                "Failed to build composite config: {}",
                e
            ))
        })?;
        CompositeConfig::new(params)
    }
}

#[derive(Debug, Clone)]
pub struct CompositeConfig {
    /// Owner of the hub repository and of every dependency repository.
    pub owner: String,
    /// Hub chart repository name.
    pub repo: String,
    /// Explicit hub release to generate for; latest release when unset.
    pub version: Option<String>,
    /// Dependencies are relevant when their name contains this.
    pub identifier: String,
    /// git-cliff configuration url.
    pub cliff_config_url: String,
    /// Changelog file the composite is prepended to.
    pub path: PathBuf,
    /// Print the composite instead of writing it.
    pub dry_run: bool,
    pub remote_config: RemoteConfig,
}

impl CompositeConfig {
    pub fn builder() -> CompositeConfigParamsBuilder {
        CompositeConfigParamsBuilder::default()
    }

    pub fn new(params: CompositeConfigParams) -> Result<Self> {
        if params.owner.trim().is_empty() {
            return Err(CompositeError::invalid_config("owner must not be empty"));
        }

        if params.repo.trim().is_empty() {
            return Err(CompositeError::invalid_config("repo must not be empty"));
        }

        Url::parse(&params.cliff_config_url).map_err(|e| {
            CompositeError::invalid_config(format!(
                "invalid git-cliff config url {}: {e}",
                params.cliff_config_url
            ))
        })?;

        let version = params.version.filter(|v| !v.trim().is_empty());

        Ok(Self {
            owner: params.owner,
            repo: params.repo,
            version,
            identifier: params.identifier,
            cliff_config_url: params.cliff_config_url,
            path: params.path,
            dry_run: params.dry_run,
            remote_config: params.remote_config,
        })
    }

    /// "owner/repo" path of the hub repository.
    pub fn repo_path(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> CompositeConfigParamsBuilder {
        let mut builder = CompositeConfig::builder();
        builder
            .owner("Acme")
            .repo("hub")
            .identifier("mdai")
            .cliff_config_url("https://example.com/cliff.toml")
            .path("CHANGELOG.md");
        builder
    }

    #[test]
    fn builds_with_defaults() {
        let config = builder().build().unwrap();

        assert_eq!(config.repo_path(), "Acme/hub");
        assert!(config.version.is_none());
        assert!(!config.dry_run);
        assert_eq!(config.remote_config, RemoteConfig::default());
    }

    #[test]
    fn keeps_explicit_version() {
        let config = builder().version("v2.0.0").build().unwrap();
        assert_eq!(config.version.as_deref(), Some("v2.0.0"));
    }

    #[test]
    fn blank_version_means_latest() {
        let config = builder().version("").build().unwrap();
        assert!(config.version.is_none());
    }

    #[test]
    fn rejects_missing_fields() {
        let mut incomplete = CompositeConfig::builder();
        incomplete.owner("Acme");

        let result = incomplete.build();
        assert!(matches!(result, Err(CompositeError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_empty_owner_and_bad_config_url() {
        let result = builder().owner("").build();
        assert!(matches!(result, Err(CompositeError::InvalidConfig(_))));

        let result = builder().cliff_config_url(".not-a-url").build();
        assert!(matches!(result, Err(CompositeError::InvalidConfig(_))));
    }
}
