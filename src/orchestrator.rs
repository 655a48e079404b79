//! Runs the composite changelog stages in order.
//!
//! Every stage is fatal: the first failure is returned with the name of the
//! stage attached and nothing is written.
use color_eyre::eyre::{Result, WrapErr};
use log::*;
use std::io::{self, Write};

use crate::{
    changelog::{composite, traits::Toolchain, writer},
    chart,
    config::CompositeConfig,
    forge::manager::ForgeManager,
    resolver,
};

pub struct Orchestrator {
    config: CompositeConfig,
    forge: ForgeManager,
    toolchain: Box<dyn Toolchain>,
}

impl Orchestrator {
    pub fn new(
        config: CompositeConfig,
        forge: ForgeManager,
        toolchain: Box<dyn Toolchain>,
    ) -> Self {
        Self {
            config,
            forge,
            toolchain,
        }
    }

    /// Resolves the target release and builds its composite changelog.
    pub async fn generate(&self) -> Result<Vec<u8>> {
        let repo = self.config.repo_path();

        let target_tag = match &self.config.version {
            Some(version) => {
                info!("using explicit release {version} of {repo}");
                version.clone()
            }
            None => resolver::latest_tag(&self.forge, &repo)
                .await
                .wrap_err("unable to get latest tag")?,
        };

        let latest = chart::dependencies(
            &self.forge,
            &self.config.identifier,
            &repo,
            &target_tag,
        )
        .await
        .wrap_err("unable to get latest dependencies")?;

        let previous = resolver::previous_dependencies(
            &self.forge,
            &self.config.identifier,
            &repo,
            &target_tag,
        )
        .await
        .wrap_err("unable to get previous dependencies")?;

        debug!("latest dependencies: {latest:?}");
        debug!("previous dependencies: {previous:?}");

        composite::composite(
            self.toolchain.as_ref(),
            &self.config.owner,
            &self.config.cliff_config_url,
            &target_tag,
            &latest,
            &previous,
        )
        .await
        .wrap_err("unable to generate composite changelog")
    }

    /// Generates the composite and prepends it to the changelog file, or
    /// prints it in dry-run mode.
    pub async fn run(&self) -> Result<()> {
        let output = self.generate().await?;

        if self.config.dry_run {
            warn!(
                "dry_run: would prepend {} bytes to {}",
                output.len(),
                self.config.path.display()
            );
            io::stdout()
                .write_all(&output)
                .wrap_err("unable to print composite changelog")?;
            return Ok(());
        }

        writer::prepend(&self.config.path, &output)
            .wrap_err("unable to write to file")?;

        Ok(())
    }
}
