//! Configuration for forge endpoints and clone URLs.
use url::Url;

use crate::error::Result;

/// Default base url for the REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Default base url for raw file content.
pub const DEFAULT_RAW_URL: &str = "https://raw.githubusercontent.com";
/// Default host used to clone dependency repositories.
pub const DEFAULT_GIT_HOST: &str = "github.com";
/// Manifest file read from the hub repository at each tag.
pub const CHART_FILE: &str = "Chart.yaml";

/// Endpoint bases for the forge hosting the hub chart and its dependencies.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteConfig {
    /// REST API base (e.g. "https://api.github.com").
    pub api_url: String,
    /// Raw content base (e.g. "https://raw.githubusercontent.com").
    pub raw_url: String,
    /// Host serving git clones over https.
    pub git_host: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            raw_url: DEFAULT_RAW_URL.to_string(),
            git_host: DEFAULT_GIT_HOST.to_string(),
        }
    }
}

impl RemoteConfig {
    /// Validates both base urls and strips trailing slashes.
    pub fn new(api_url: &str, raw_url: &str, git_host: &str) -> Result<Self> {
        let api_url = Url::parse(api_url)?;
        let raw_url = Url::parse(raw_url)?;

        Ok(Self {
            api_url: api_url.as_str().trim_end_matches('/').to_string(),
            raw_url: raw_url.as_str().trim_end_matches('/').to_string(),
            git_host: git_host.trim_end_matches('/').to_string(),
        })
    }

    /// `repo` is the full "owner/name" path.
    pub fn latest_release_url(&self, repo: &str) -> String {
        format!("{}/repos/{}/releases/latest", self.api_url, repo)
    }

    pub fn tags_url(&self, repo: &str) -> String {
        format!("{}/repos/{}/tags", self.api_url, repo)
    }

    pub fn chart_url(&self, repo: &str, tag: &str) -> String {
        format!("{}/{}/refs/tags/{}/{}", self.raw_url, repo, tag, CHART_FILE)
    }

    pub fn clone_url(&self, owner: &str, name: &str) -> String {
        format!("https://{}/{}/{}.git", self.git_host, owner, name)
    }
}
