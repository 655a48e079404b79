//! Release tag resolution for the hub repository.
//!
//! Tags are ordered by plain string comparison, not by semantic version, so
//! `v10.0.0` sorts below `v2.0.0`. Hub releases are expected to keep a
//! uniform tag width.
use log::*;
use serde_json::Value;

use crate::{
    chart::{self, DependencySnapshot},
    error::{CompositeError, Result},
    forge::manager::ForgeManager,
};

/// Field of the latest release object holding its tag.
pub const LATEST_TAG_KEY: &str = "tag_name";
/// Field of each tag list entry holding the tag name.
pub const TAG_NAME_KEY: &str = "name";
/// Tags containing this are prereleases and never considered.
pub const PRERELEASE_DELIMITER: &str = "-";

/// Tag of the latest published release of `repo` (owner/name).
pub async fn latest_tag(forge: &ForgeManager, repo: &str) -> Result<String> {
    let body = forge.get_latest_release(repo).await?;

    let release: Value = serde_json::from_slice(&body).map_err(|e| {
        CompositeError::lookup(repo, format!("decode latest release: {e}"))
    })?;

    let tag = release
        .get(LATEST_TAG_KEY)
        .ok_or_else(|| CompositeError::lookup(repo, "find latest tag"))?
        .as_str()
        .ok_or_else(|| {
            CompositeError::lookup(repo, "cast latest tag to string")
        })?;

    info!("latest release of {repo}: {tag}");

    Ok(tag.to_string())
}

/// Every non-prerelease tag of `repo`, highest first.
pub async fn release_tags(
    forge: &ForgeManager,
    repo: &str,
) -> Result<Vec<String>> {
    let body = forge.get_tags(repo).await?;

    let entries: Vec<Value> = serde_json::from_slice(&body).map_err(|e| {
        CompositeError::lookup(repo, format!("decode tag list: {e}"))
    })?;

    release_tags_from(repo, &entries)
}

/// Extracts tag names from decoded tag list entries, drops prereleases and
/// sorts the rest descending.
pub fn release_tags_from(repo: &str, entries: &[Value]) -> Result<Vec<String>> {
    let mut tags = Vec::with_capacity(entries.len());

    for entry in entries {
        let name = entry
            .get(TAG_NAME_KEY)
            .ok_or_else(|| CompositeError::lookup(repo, "name not found"))?
            .as_str()
            .ok_or_else(|| CompositeError::lookup(repo, "cast tag to string"))?;

        if name.contains(PRERELEASE_DELIMITER) {
            debug!("skipping prerelease tag {name}");
            continue;
        }

        tags.push(name.to_string());
    }

    tags.sort_by(|a, b| b.cmp(a));

    Ok(tags)
}

/// The tag directly after `latest` in a descending tag list.
pub fn previous_tag<'a>(tags: &'a [String], latest: &str) -> Option<&'a str> {
    let index = tags.iter().position(|tag| tag == latest)?;
    tags.get(index + 1).map(String::as_str)
}

/// Matching dependencies of the release preceding `latest`, or an empty
/// snapshot when there is none (or `latest` is not a known release tag).
pub async fn previous_dependencies(
    forge: &ForgeManager,
    identifier: &str,
    repo: &str,
    latest: &str,
) -> Result<DependencySnapshot> {
    let tags = release_tags(forge, repo).await?;

    match previous_tag(&tags, latest) {
        Some(previous) => {
            info!("previous release of {repo} before {latest}: {previous}");
            chart::dependencies(forge, identifier, repo, previous).await
        }
        None => {
            info!("no release of {repo} precedes {latest}");
            Ok(DependencySnapshot::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::test_helpers::*;

    fn entries(names: &[&str]) -> Vec<Value> {
        names.iter().map(|name| json!({ "name": name })).collect()
    }

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[tokio::test]
    async fn latest_tag_reads_tag_name() {
        let forge = create_test_forge(vec![(
            latest_release_url(),
            br#"{"tag_name":"v2.0.0","name":"Release 2"}"#.to_vec(),
        )]);

        let tag = latest_tag(&forge, TEST_REPO).await.unwrap();

        assert_eq!(tag, "v2.0.0");
    }

    #[tokio::test]
    async fn latest_tag_missing_field_is_lookup_error() {
        let forge = create_test_forge(vec![(
            latest_release_url(),
            br#"{"message":"Not Found"}"#.to_vec(),
        )]);

        let result = latest_tag(&forge, TEST_REPO).await;

        assert!(matches!(
            result,
            Err(CompositeError::LookupError { ref repo, .. }) if repo == TEST_REPO
        ));
    }

    #[tokio::test]
    async fn latest_tag_non_string_is_lookup_error() {
        let forge = create_test_forge(vec![(
            latest_release_url(),
            br#"{"tag_name":42}"#.to_vec(),
        )]);

        let result = latest_tag(&forge, TEST_REPO).await;

        assert!(matches!(result, Err(CompositeError::LookupError { .. })));
    }

    #[tokio::test]
    async fn latest_tag_undecodable_body_is_lookup_error() {
        let forge = create_test_forge(vec![(
            latest_release_url(),
            b"<html>rate limited</html>".to_vec(),
        )]);

        let result = latest_tag(&forge, TEST_REPO).await;

        assert!(matches!(result, Err(CompositeError::LookupError { .. })));
    }

    #[test]
    fn drops_prereleases_and_sorts_descending() {
        let result = release_tags_from(
            TEST_REPO,
            &entries(&["v1.0.0", "v1.1.0-rc1", "v1.2.0", "v0.9.0", "v1.2.0-beta"]),
        )
        .unwrap();

        assert_eq!(result, tags(&["v1.2.0", "v1.0.0", "v0.9.0"]));
        assert!(result.iter().all(|t| !t.contains(PRERELEASE_DELIMITER)));
        assert!(result.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn orders_by_string_not_semver() {
        let result =
            release_tags_from(TEST_REPO, &entries(&["v10.0.0", "v2.0.0"]))
                .unwrap();

        assert_eq!(result, tags(&["v2.0.0", "v10.0.0"]));
    }

    #[test]
    fn entry_without_name_is_lookup_error() {
        let result = release_tags_from(
            TEST_REPO,
            &[json!({ "name": "v1.0.0" }), json!({ "commit": {} })],
        );
        assert!(matches!(result, Err(CompositeError::LookupError { .. })));

        let result = release_tags_from(TEST_REPO, &[json!({ "name": 1 })]);
        assert!(matches!(result, Err(CompositeError::LookupError { .. })));
    }

    #[tokio::test]
    async fn tag_list_that_is_not_an_array_is_lookup_error() {
        let forge = create_test_forge(vec![(
            tags_url(),
            br#"{"message":"Not Found"}"#.to_vec(),
        )]);

        let result = release_tags(&forge, TEST_REPO).await;

        assert!(matches!(result, Err(CompositeError::LookupError { .. })));
    }

    #[test]
    fn previous_tag_is_next_position() {
        let list = tags(&["v3.0.0", "v2.0.0", "v1.0.0"]);

        assert_eq!(previous_tag(&list, "v3.0.0"), Some("v2.0.0"));
        assert_eq!(previous_tag(&list, "v2.0.0"), Some("v1.0.0"));
        assert_eq!(previous_tag(&list, "v1.0.0"), None);
        assert_eq!(previous_tag(&list, "v4.0.0"), None);
        assert_eq!(previous_tag(&[], "v1.0.0"), None);
    }

    #[tokio::test]
    async fn previous_dependencies_uses_preceding_release() {
        let forge = create_test_forge(vec![
            (
                tags_url(),
                br#"[{"name":"v2.0.0"},{"name":"v2.0.0-rc1"},{"name":"v1.0.0"}]"#
                    .to_vec(),
            ),
            (
                chart_url("v1.0.0"),
                chart_yaml(&[("mdai-sub", "1.0.0"), ("redis", "17.0.0")]),
            ),
        ]);

        let result =
            previous_dependencies(&forge, TEST_IDENTIFIER, TEST_REPO, "v2.0.0")
                .await
                .unwrap();

        assert_eq!(result, snapshot(&[("mdai-sub", "1.0.0")]));
    }

    #[tokio::test]
    async fn previous_dependencies_empty_for_first_release() {
        let forge = create_test_forge(vec![(
            tags_url(),
            br#"[{"name":"v1.0.0"}]"#.to_vec(),
        )]);

        let result =
            previous_dependencies(&forge, TEST_IDENTIFIER, TEST_REPO, "v1.0.0")
                .await
                .unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn previous_dependencies_empty_for_unknown_tag() {
        let forge = create_test_forge(vec![(
            tags_url(),
            br#"[{"name":"v2.0.0"},{"name":"v1.0.0"}]"#.to_vec(),
        )]);

        let result = previous_dependencies(
            &forge,
            TEST_IDENTIFIER,
            TEST_REPO,
            "v3.0.0-rc1",
        )
        .await
        .unwrap();

        assert!(result.is_empty());
    }
}
