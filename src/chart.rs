//! Dependency extraction from Helm `Chart.yaml` manifests.
//!
//! A missing or malformed manifest is not an error: it is read as a chart
//! that declares no dependencies. Transport failures still propagate.
use log::*;
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

use crate::{error::Result, forge::manager::ForgeManager};

/// Matching dependency name -> declared version at one (repository, tag).
///
/// Ordered by name so dependencies are always processed alphabetically.
pub type DependencySnapshot = BTreeMap<String, String>;

/// The subset of `Chart.yaml` this tool reads.
#[derive(Debug, Default, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub dependencies: Vec<ChartDependency>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ChartDependency {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "scalar_string")]
    pub version: String,
}

/// Result of parsing a fetched manifest.
#[derive(Debug)]
pub enum ManifestOutcome {
    Parsed(Chart),
    /// Body was empty, not YAML, or not shaped like a chart. A YAML mapping
    /// without `dependencies` (GitHub's `404: Not Found` body is one) parses
    /// as a chart with none.
    Unreadable(String),
}

impl ManifestOutcome {
    /// Collapses both outcomes into a dependency list; unreadable manifests
    /// declare nothing.
    pub fn into_dependencies(self) -> Vec<ChartDependency> {
        match self {
            ManifestOutcome::Parsed(chart) => chart.dependencies,
            ManifestOutcome::Unreadable(reason) => {
                debug!("treating unreadable manifest as empty: {reason}");
                vec![]
            }
        }
    }
}

// Versions such as `1.2` or `2` are YAML numbers, keep them as written.
fn scalar_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_yaml::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

pub fn parse_manifest(content: &[u8]) -> ManifestOutcome {
    if content.is_empty() {
        return ManifestOutcome::Unreadable("empty manifest".into());
    }

    match serde_yaml::from_slice::<Chart>(content) {
        Ok(chart) => ManifestOutcome::Parsed(chart),
        Err(err) => ManifestOutcome::Unreadable(err.to_string()),
    }
}

/// Keeps dependencies whose name contains `identifier`. A name listed twice
/// keeps the version of its last entry.
pub fn filter_dependencies(
    dependencies: Vec<ChartDependency>,
    identifier: &str,
) -> DependencySnapshot {
    let mut snapshot = DependencySnapshot::new();

    for dep in dependencies {
        if dep.name.contains(identifier) {
            snapshot.insert(dep.name, dep.version);
        }
    }

    snapshot
}

/// Matching dependencies declared by `repo` (owner/name) at `tag`.
pub async fn dependencies(
    forge: &ForgeManager,
    identifier: &str,
    repo: &str,
    tag: &str,
) -> Result<DependencySnapshot> {
    let content = forge.get_chart(repo, tag).await?;
    let declared = parse_manifest(&content).into_dependencies();
    let snapshot = filter_dependencies(declared, identifier);

    info!(
        "{repo}@{tag}: {} dependencies matching \"{identifier}\"",
        snapshot.len()
    );

    Ok(snapshot)
}
