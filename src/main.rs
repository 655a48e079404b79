use clap::Parser;
use color_eyre::eyre::{Result, eyre};

use hub_changelog::{
    Args, CompositeError, Orchestrator,
    forge::{manager::ForgeManager, request::HttpFetcher},
};

fn initialize_logger(debug: bool) -> std::result::Result<(), CompositeError> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("hub_changelog")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(args.debug)?;

    let config = args.composite_config()?;
    let fetcher = HttpFetcher::new()?;
    let forge =
        ForgeManager::new(Box::new(fetcher), config.remote_config.clone());
    let toolchain = args.toolchain()?;

    let orchestrator = Orchestrator::new(config, forge, Box::new(toolchain));

    // dropping the run on interrupt kills any child process it is awaiting
    tokio::select! {
        result = orchestrator.run() => result,
        _ = tokio::signal::ctrl_c() => Err(eyre!("interrupted")),
    }
}
