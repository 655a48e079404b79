//! Common test helper functions shared across test modules.
use crate::{
    chart::DependencySnapshot,
    forge::{config::RemoteConfig, manager::ForgeManager, traits::MockFetcher},
};

pub const TEST_OWNER: &str = "Acme";
pub const TEST_REPO: &str = "Acme/hub";
pub const TEST_IDENTIFIER: &str = "mdai";

/// Creates a ForgeManager whose fetcher answers each url with the given
/// body. Any url not listed fails the test.
///
/// # Example
/// ```ignore
/// let forge = create_test_forge(vec![(
///     "https://api.github.com/repos/Acme/hub/tags".into(),
///     br#"[{"name":"v1.0.0"}]"#.to_vec(),
/// )]);
/// ```
pub fn create_test_forge(responses: Vec<(String, Vec<u8>)>) -> ForgeManager {
    let mut fetcher = MockFetcher::new();

    for (url, body) in responses {
        let expected = url.clone();
        fetcher
            .expect_get()
            .withf(move |requested| requested == expected)
            .returning(move |_| Ok(body.clone()));
    }

    ForgeManager::new(Box::new(fetcher), RemoteConfig::default())
}

/// Renders a minimal Chart.yaml with the given (name, version) dependencies.
pub fn chart_yaml(dependencies: &[(&str, &str)]) -> Vec<u8> {
    let mut yaml = String::from(
        "apiVersion: v2\nname: hub\nversion: 0.1.0\ndependencies:\n",
    );
    for (name, version) in dependencies {
        yaml.push_str(&format!(
            "  - name: {name}\n    version: \"{version}\"\n    repository: https://charts.example.com\n"
        ));
    }
    yaml.into_bytes()
}

/// Builds a dependency snapshot from (name, version) pairs.
pub fn snapshot(entries: &[(&str, &str)]) -> DependencySnapshot {
    entries
        .iter()
        .map(|(name, version)| (name.to_string(), version.to_string()))
        .collect()
}

pub fn latest_release_url() -> String {
    RemoteConfig::default().latest_release_url(TEST_REPO)
}

pub fn tags_url() -> String {
    RemoteConfig::default().tags_url(TEST_REPO)
}

pub fn chart_url(tag: &str) -> String {
    RemoteConfig::default().chart_url(TEST_REPO, tag)
}
