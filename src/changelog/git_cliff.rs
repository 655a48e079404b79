//! A [`Toolchain`] that runs the `git` and `git-cliff` executables.
use async_trait::async_trait;
use log::*;
use std::{path::Path, process::Output};
use tokio::process::Command;

use crate::{
    changelog::traits::Toolchain,
    error::{CompositeError, Result},
    forge::config::RemoteConfig,
};

/// Default git executable.
pub const DEFAULT_GIT_BIN: &str = "git";
/// Default git-cliff executable.
pub const DEFAULT_CLIFF_BIN: &str = "git-cliff";

/// Runs each tool as a child process. Children are killed if the awaiting
/// future is dropped, so interrupting the run also stops them.
pub struct GitCliffToolchain {
    remote_config: RemoteConfig,
    git_bin: String,
    cliff_bin: String,
}

impl GitCliffToolchain {
    pub fn new(
        remote_config: RemoteConfig,
        git_bin: impl Into<String>,
        cliff_bin: impl Into<String>,
    ) -> Self {
        Self {
            remote_config,
            git_bin: git_bin.into(),
            cliff_bin: cliff_bin.into(),
        }
    }

    async fn run(
        &self,
        label: &str,
        program: &str,
        command: &mut Command,
    ) -> Result<Output> {
        let output =
            command.kill_on_drop(true).output().await.map_err(|e| {
                CompositeError::generation(
                    label,
                    format!("failed to run {program}: {e}"),
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CompositeError::generation(
                label,
                format!("{program} exited with {}: {}", output.status, stderr.trim()),
            ));
        }

        Ok(output)
    }
}

/// The dependency a working directory was cloned for.
fn workdir_label(workdir: &Path) -> String {
    workdir
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| workdir.display().to_string())
}

#[async_trait]
impl Toolchain for GitCliffToolchain {
    async fn clone_repo(
        &self,
        owner: &str,
        name: &str,
        destination: &Path,
    ) -> Result<()> {
        let url = self.remote_config.clone_url(owner, name);
        info!("cloning {url} into {}", destination.display());

        let mut command = Command::new(&self.git_bin);
        command
            .arg("clone")
            .arg("--no-checkout")
            .arg("--quiet")
            .arg(&url)
            .arg(destination);

        self.run(name, &self.git_bin, &mut command).await?;

        Ok(())
    }

    async fn generate_changelog(
        &self,
        config_url: &str,
        workdir: &Path,
        range: &str,
    ) -> Result<Vec<u8>> {
        let label = workdir_label(workdir);
        debug!("running {} for {label} over {range}", self.cliff_bin);

        let mut command = Command::new(&self.cliff_bin);
        command
            .arg("--config-url")
            .arg(config_url)
            .arg("--workdir")
            .arg(workdir)
            .arg(range);

        let output = self.run(&label, &self.cliff_bin, &mut command).await?;

        Ok(output.stdout)
    }
}
