//! Manager that wraps the fetcher with forge endpoint knowledge
use log::*;

use crate::{
    error::Result,
    forge::{config::RemoteConfig, traits::Fetcher},
};

pub struct ForgeManager {
    fetcher: Box<dyn Fetcher>,
    remote_config: RemoteConfig,
}

impl ForgeManager {
    pub fn new(fetcher: Box<dyn Fetcher>, remote_config: RemoteConfig) -> Self {
        Self {
            fetcher,
            remote_config,
        }
    }

    /// Raw body of the "latest release" resource for `repo` (owner/name).
    pub async fn get_latest_release(&self, repo: &str) -> Result<Vec<u8>> {
        debug!("fetching latest release for {repo}");
        let url = self.remote_config.latest_release_url(repo);
        self.fetcher.get(&url).await
    }

    /// Raw body of the tag listing for `repo`.
    pub async fn get_tags(&self, repo: &str) -> Result<Vec<u8>> {
        debug!("fetching tags for {repo}");
        let url = self.remote_config.tags_url(repo);
        self.fetcher.get(&url).await
    }

    /// Raw chart manifest of `repo` at `tag`.
    pub async fn get_chart(&self, repo: &str, tag: &str) -> Result<Vec<u8>> {
        debug!("fetching chart manifest for {repo} at {tag}");
        let url = self.remote_config.chart_url(repo, tag);
        self.fetcher.get(&url).await
    }
}
