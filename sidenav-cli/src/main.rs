use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod logging;

#[derive(Parser)]
#[command(name = "sidenav", about = "Sidebar navigation terminal demo")]
#[command(version, propagate_version = true)]
#[command(after_long_help = "\
Examples:
  sidenav                           Launch the TUI
  sidenav --no-mouse                Launch without mouse capture
  sidenav --log-file sidenav.log -v Launch with debug logging
  sidenav config show               Print the merged configuration
")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    tui: commands::tui::TuiArgs,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Config(args)) => commands::config::run(args),
        None => commands::tui::run(cli.tui, cli.verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_arguments_launches_tui() {
        let cli = Cli::try_parse_from(["sidenav"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn tui_flags_parse_at_top_level() {
        let cli =
            Cli::try_parse_from(["sidenav", "--no-mouse", "--sidebar-width", "20", "-v"]).unwrap();
        assert!(cli.tui.no_mouse);
        assert_eq!(cli.tui.sidebar_width, Some(20));
        assert!(cli.verbose);
    }

    #[test]
    fn config_show_parses() {
        let cli = Cli::try_parse_from(["sidenav", "config", "show"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Config(_))));
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["sidenav", "serve"]).is_err());
    }
}
