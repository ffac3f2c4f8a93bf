// ABOUTME: CLI argument parsing and command routing for botdesk
//
// Provides command-line interface for:
// - Launching the TUI (tui, default), optionally on a given view (onboard, dashboard)
// - Pricing a message volume without the wizard (quote)
// - Printing the usage summary for a time range (usage)

pub mod quote;
pub mod usage;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::models::TimeRange;

/// Chatbot platform onboarding wizard and usage dashboard
#[derive(Parser)]
#[command(name = "botdesk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Config file to use instead of ~/.botdesk/config.toml
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Output format for commands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Launch the TUI (default if no command given)
    Tui,

    /// Launch the TUI on the onboarding wizard
    Onboard,

    /// Launch the TUI on the analytics dashboard
    Dashboard(DashboardArgs),

    /// Print the price and rate limit for a monthly message volume
    Quote(QuoteArgs),

    /// Print usage totals for a time range
    Usage(UsageArgs),
}

impl Cli {
    /// Whether this invocation takes over the terminal. Print-only commands
    /// must leave stdout free of escape codes.
    pub fn launches_tui(&self) -> bool {
        !matches!(self.command, Some(Commands::Quote(_) | Commands::Usage(_)))
    }
}

/// Arguments for the dashboard command
#[derive(clap::Args)]
pub struct DashboardArgs {
    /// Time range to open on
    #[arg(long, value_enum)]
    pub range: Option<TimeRange>,
}

/// Arguments for the quote command
#[derive(clap::Args)]
pub struct QuoteArgs {
    /// Monthly message volume
    pub messages: u64,
}

/// Arguments for the usage command
#[derive(clap::Args)]
pub struct UsageArgs {
    /// Time range to summarise (defaults to the configured dashboard range)
    #[arg(long, value_enum)]
    pub range: Option<TimeRange>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_launches_tui() {
        let cli = Cli::try_parse_from(["botdesk"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn test_only_interactive_commands_launch_tui() {
        let interactive = [
            vec!["botdesk"],
            vec!["botdesk", "tui"],
            vec!["botdesk", "onboard"],
            vec!["botdesk", "dashboard", "--range", "24h"],
        ];
        for argv in interactive {
            assert!(Cli::try_parse_from(&argv).unwrap().launches_tui(), "{argv:?}");
        }

        let printing = [vec!["botdesk", "quote", "500", "--format", "json"], vec!["botdesk", "usage"]];
        for argv in printing {
            assert!(!Cli::try_parse_from(&argv).unwrap().launches_tui(), "{argv:?}");
        }
    }

    #[test]
    fn test_quote_with_json_format() {
        let cli = Cli::try_parse_from(["botdesk", "quote", "5000", "--format", "json"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        let Some(Commands::Quote(args)) = cli.command else {
            panic!("expected quote command");
        };
        assert_eq!(args.messages, 5_000);
    }

    #[test]
    fn test_range_value_names() {
        let cli = Cli::try_parse_from(["botdesk", "dashboard", "--range", "30d"]).unwrap();
        let Some(Commands::Dashboard(args)) = cli.command else {
            panic!("expected dashboard command");
        };
        assert_eq!(args.range, Some(TimeRange::Last30d));

        assert!(Cli::try_parse_from(["botdesk", "usage", "--range", "1y"]).is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["botdesk", "usage", "--config", "/tmp/botdesk.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/botdesk.toml")));
    }
}
