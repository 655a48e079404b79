//! CLI argument parsing.
use clap::Parser;
use std::path::PathBuf;

use crate::{
    changelog::git_cliff::{DEFAULT_CLIFF_BIN, DEFAULT_GIT_BIN, GitCliffToolchain},
    config::{
        CompositeConfig, DEFAULT_CHANGELOG_PATH, DEFAULT_CLIFF_CONFIG_URL,
        DEFAULT_IDENTIFIER, DEFAULT_OWNER, DEFAULT_REPO,
    },
    error::Result,
    forge::config::{
        DEFAULT_API_URL, DEFAULT_GIT_HOST, DEFAULT_RAW_URL, RemoteConfig,
    },
};

/// Generate a composite changelog for a Helm hub chart from the changelogs
/// of its sub-chart dependencies.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = DEFAULT_OWNER)]
    /// Owner of the hub repository and its dependency repositories.
    pub owner: String,

    #[arg(long, default_value = DEFAULT_REPO)]
    /// Helm chart repository to gather the dependencies from.
    pub repo: String,

    #[arg(long)]
    /// Hub release tag to generate the changelog for. Defaults to the latest
    /// published release.
    pub version: Option<String>,

    #[arg(long = "id", default_value = DEFAULT_IDENTIFIER)]
    /// Only dependencies whose name contains this are included.
    pub identifier: String,

    #[arg(long = "config", default_value = DEFAULT_CLIFF_CONFIG_URL)]
    /// Url of the cliff.toml passed to git-cliff.
    pub cliff_config_url: String,

    #[arg(long, default_value = DEFAULT_CHANGELOG_PATH)]
    /// Changelog file to prepend the composite changelog to.
    pub path: PathBuf,

    #[arg(long, default_value = DEFAULT_API_URL)]
    /// REST API base url. Set this for GitHub Enterprise.
    pub api_url: String,

    #[arg(long, default_value = DEFAULT_RAW_URL)]
    /// Base url serving raw repository files.
    pub raw_url: String,

    #[arg(long, default_value = DEFAULT_GIT_HOST)]
    /// Host dependency repositories are cloned from over https.
    pub git_host: String,

    #[arg(long, default_value = DEFAULT_GIT_BIN)]
    /// git executable.
    pub git_bin: String,

    #[arg(long, default_value = DEFAULT_CLIFF_BIN)]
    /// git-cliff executable.
    pub cliff_bin: String,

    #[arg(long, default_value_t = false)]
    /// Print the composite changelog instead of writing it.
    pub dry_run: bool,

    #[arg(long, default_value_t = false)]
    /// Enable debug logging.
    pub debug: bool,
}

impl Args {
    pub fn remote_config(&self) -> Result<RemoteConfig> {
        RemoteConfig::new(&self.api_url, &self.raw_url, &self.git_host)
    }

    /// Run configuration from the parsed arguments.
    pub fn composite_config(&self) -> Result<CompositeConfig> {
        let mut builder = CompositeConfig::builder();

        builder
            .owner(self.owner.clone())
            .repo(self.repo.clone())
            .identifier(self.identifier.clone())
            .cliff_config_url(self.cliff_config_url.clone())
            .path(self.path.clone())
            .dry_run(self.dry_run)
            .remote_config(self.remote_config()?);

        if let Some(version) = &self.version {
            builder.version(version.clone());
        }

        builder.build()
    }

    pub fn toolchain(&self) -> Result<GitCliffToolchain> {
        Ok(GitCliffToolchain::new(
            self.remote_config()?,
            self.git_bin.clone(),
            self.cliff_bin.clone(),
        ))
    }
}
