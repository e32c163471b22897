//! TUI command - launches the terminal user interface
//!
//! Loads layered configuration, applies command-line overrides, sets up
//! logging and runs the sidebar app until the user quits.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::config::{ConfigLoader, SidenavConfig};
use crate::logging;

#[derive(Args, Debug, Default)]
pub struct TuiArgs {
    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Sidebar width in columns
    #[arg(long, value_name = "COLUMNS")]
    pub sidebar_width: Option<u16>,

    /// Input poll interval in milliseconds
    #[arg(long, value_name = "MS")]
    pub tick_rate_ms: Option<u64>,

    /// Disable mouse capture
    #[arg(long)]
    pub no_mouse: bool,
}

impl TuiArgs {
    /// Layers flags over the loaded config.
    pub fn apply(&self, mut config: SidenavConfig, verbose: bool) -> SidenavConfig {
        if let Some(path) = &self.log_file {
            config.log.file = Some(path.clone());
        }
        if let Some(width) = self.sidebar_width {
            config.ui.sidebar_width = width;
        }
        if let Some(ms) = self.tick_rate_ms {
            config.ui.tick_rate_ms = ms;
        }
        if self.no_mouse {
            config.ui.mouse = false;
        }
        if verbose {
            config.log.level = "debug".to_string();
        }
        config
    }
}

pub fn run(args: TuiArgs, verbose: bool) -> Result<()> {
    let config = args.apply(ConfigLoader::load()?, verbose);
    config.validate()?;

    logging::init(&config.log)?;
    sidenav_tui::install_panic_hook();

    info!(?config, "Starting TUI...");

    let mut app = sidenav_tui::App::with_options(config.ui.to_options());
    app.run()?;

    Ok(())
}
