mod app;
mod config;
mod effects;
mod logging;
mod protocol;
mod serve;
mod translate;
mod ui;
mod watch;
mod workspace;

use log::LevelFilter;
use panel_logging::{panel_info, panel_warn};

use crate::cli::{Cli, Command};
use config::{ConfigOrigin, Overrides};
use logging::LogDestination;

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    let (mut config, origin) = config::load(cli.config.as_deref())?;
    config.apply_overrides(&Overrides {
        base_dir: cli.base_dir.clone(),
        debounce_ms: cli.debounce_ms,
        no_auto_update: cli.no_auto_update,
        coalesce: cli.coalesce,
    });

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    // stdout carries data for serve/translate and the screen belongs to watch.
    let destination = match &cli.command {
        Command::Watch { .. } => LogDestination::File(config.log_file.clone()),
        Command::Serve | Command::Translate { .. } => LogDestination::Terminal,
    };
    logging::initialize(destination, level);

    match &origin {
        ConfigOrigin::Defaults => panel_info!("No config file; using defaults"),
        ConfigOrigin::File(path) => panel_info!("Loaded config from {:?}", path),
        ConfigOrigin::DefaultsAfterError { path, message } => {
            panel_warn!("Ignoring config {:?}: {}", path, message)
        }
    }

    match cli.command {
        Command::Serve => serve::run(&config),
        Command::Watch { files } => watch::run(&config, files),
        Command::Translate { file } => translate::run(&config, &file),
    }
}
