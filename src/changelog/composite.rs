//! Aggregates dependency changelogs into one release section.
use log::*;
use std::{env, path::Path};

use crate::{
    changelog::traits::Toolchain,
    chart::DependencySnapshot,
    error::{CompositeError, Result},
};

/// Prefix of the scratch directory holding dependency clones.
const SCRATCH_PREFIX: &str = "hub-changelog-";

/// Tags of dependency repositories carry this prefix before the version.
pub const VERSION_TAG_PREFIX: &str = "v";

/// Generator output with nothing but whitespace means no relevant commits.
pub fn has_content(output: &[u8]) -> bool {
    output.iter().any(|b| !b.is_ascii_whitespace())
}

/// `<previous>..<latest>` with both sides tagged. A dependency that is new in
/// this release has an empty lower bound.
pub fn version_range(previous: Option<&str>, latest: &str) -> String {
    let lower = previous
        .map(|version| format!("{VERSION_TAG_PREFIX}{version}"))
        .unwrap_or_default();
    format!("{lower}..{VERSION_TAG_PREFIX}{latest}")
}

/// Builds the composite changelog for `target_tag`.
///
/// Each dependency in `latest` is cloned into a scratch directory and its
/// changelog generated over the range since its version in `previous`.
/// Dependencies are visited in name order. The first clone or generation
/// failure aborts the whole build.
pub async fn composite(
    toolchain: &dyn Toolchain,
    owner: &str,
    config_url: &str,
    target_tag: &str,
    latest: &DependencySnapshot,
    previous: &DependencySnapshot,
) -> Result<Vec<u8>> {
    // removed on drop, whichever way this function returns
    let scratch = tempfile::Builder::new()
        .prefix(SCRATCH_PREFIX)
        .tempdir()
        .map_err(|e| CompositeError::file_io(&env::temp_dir(), e))?;

    debug!("scratch workspace: {}", scratch.path().display());

    let mut result = format!("## {target_tag}\n").into_bytes();

    for (name, version) in latest {
        let section = dependency_section(
            toolchain,
            owner,
            config_url,
            scratch.path(),
            name,
            previous.get(name).map(String::as_str),
            version,
        )
        .await?;

        if let Some(section) = section {
            result.extend_from_slice(&section);
        }
    }

    Ok(result)
}

async fn dependency_section(
    toolchain: &dyn Toolchain,
    owner: &str,
    config_url: &str,
    scratch: &Path,
    name: &str,
    previous: Option<&str>,
    latest: &str,
) -> Result<Option<Vec<u8>>> {
    let workdir = scratch.join(name);

    toolchain.clone_repo(owner, name, &workdir).await?;

    let range = version_range(previous, latest);
    info!("generating changelog for {name}: {range}");

    let changelog = toolchain
        .generate_changelog(config_url, &workdir, &range)
        .await?;

    if !has_content(&changelog) {
        info!("no changes for {name} in {range}: skipping");
        return Ok(None);
    }

    let mut section = format!("### {name}\n").into_bytes();
    section.extend_from_slice(&changelog);

    Ok(Some(section))
}
