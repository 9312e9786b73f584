//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::notification::NotificationLevel;
use crate::infrastructure::config::DEFAULT_CONFIG_PATH;
use crate::infrastructure::notification::ProviderKind;

/// task-notify - desktop notifications for automation hooks
#[derive(Parser, Debug)]
#[command(name = "task-notify")]
#[command(version)]
#[command(about = "Show a desktop notification, e.g. when an AI coding agent finishes a task")]
#[command(long_about = None)]
#[command(subcommand_negates_reqs = true)]
#[command(args_conflicts_with_subcommands = true)]
#[command(after_help = "Examples:
  task-notify \"Task Complete\" \"Claude Code finished successfully\"
  task-notify \"Build Status\" \"Tests passed!\" --app-name Builder
  task-notify \"Warning\" \"Check logs\" --timeout 5 --level warning

Exit codes: 0 success, 1 notification failed or interrupted,
2 backend unavailable, 3 configuration error, 4 invalid input")]
pub struct Cli {
    /// Notification title
    #[arg(required = true)]
    pub title: Option<String>,

    /// Notification message
    #[arg(required = true)]
    pub message: Option<String>,

    /// Display timeout in seconds, 1-300 [default: from config]
    #[arg(short = 't', long, value_name = "SECS", allow_negative_numbers = true)]
    pub timeout: Option<i64>,

    /// Severity level; only `error` is shown as urgent
    #[arg(short = 'l', long, value_enum, default_value_t = LevelArg::Info)]
    pub level: LevelArg,

    /// Application name shown with the notification [default: from config]
    #[arg(short = 'a', long, value_name = "NAME")]
    pub app_name: Option<String>,

    /// Deliver through this provider instead of the default
    #[arg(short = 'p', long, value_enum, value_name = "PROVIDER")]
    pub provider: Option<ProviderArg>,

    /// Path to the JSON config file
    #[arg(
        short = 'c',
        long,
        value_name = "PATH",
        env = "TASK_NOTIFY_CONFIG",
        default_value = DEFAULT_CONFIG_PATH,
        global = true
    )]
    pub config: PathBuf,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Validate the config file
    Check,
    /// Show the effective configuration
    Show,
    /// Show config file path
    Path,
}

/// Level argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    Info,
    Success,
    Warning,
    Error,
}

impl From<LevelArg> for NotificationLevel {
    fn from(arg: LevelArg) -> Self {
        match arg {
            LevelArg::Info => NotificationLevel::Info,
            LevelArg::Success => NotificationLevel::Success,
            LevelArg::Warning => NotificationLevel::Warning,
            LevelArg::Error => NotificationLevel::Error,
        }
    }
}

/// Provider argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProviderArg {
    /// Native desktop notification service
    Desktop,
    /// The notify-send binary
    NotifySend,
}

impl From<ProviderArg> for ProviderKind {
    fn from(arg: ProviderArg) -> Self {
        match arg {
            ProviderArg::Desktop => ProviderKind::Desktop,
            ProviderArg::NotifySend => ProviderKind::NotifySend,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_positionals_with_defaults() {
        let cli = Cli::parse_from(["task-notify", "Task Complete", "Done"]);
        assert_eq!(cli.title.as_deref(), Some("Task Complete"));
        assert_eq!(cli.message.as_deref(), Some("Done"));
        assert!(cli.timeout.is_none());
        assert_eq!(cli.level, LevelArg::Info);
        assert!(cli.app_name.is_none());
        assert!(cli.provider.is_none());
        assert!(!cli.verbose);
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_options() {
        let cli = Cli::parse_from([
            "task-notify",
            "Build Status",
            "Tests passed!",
            "--timeout",
            "5",
            "--app-name",
            "Builder",
            "-l",
            "error",
            "-p",
            "notify-send",
            "-c",
            "/tmp/custom.json",
        ]);
        assert_eq!(cli.timeout, Some(5));
        assert_eq!(cli.app_name.as_deref(), Some("Builder"));
        assert_eq!(cli.level, LevelArg::Error);
        assert_eq!(cli.provider, Some(ProviderArg::NotifySend));
        assert_eq!(cli.config, PathBuf::from("/tmp/custom.json"));
    }

    #[test]
    fn cli_accepts_negative_timeout_for_validation() {
        let cli = Cli::parse_from(["task-notify", "t", "m", "--timeout", "-5"]);
        assert_eq!(cli.timeout, Some(-5));
    }

    #[test]
    fn cli_requires_title_and_message() {
        assert!(Cli::try_parse_from(["task-notify"]).is_err());
        assert!(Cli::try_parse_from(["task-notify", "only title"]).is_err());
    }

    #[test]
    fn cli_rejects_unknown_level() {
        assert!(Cli::try_parse_from(["task-notify", "t", "m", "--level", "loud"]).is_err());
    }

    #[test]
    fn cli_parses_config_subcommand_without_positionals() {
        let cli = Cli::parse_from(["task-notify", "config", "check", "--config", "x.json"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Check
            })
        ));
        assert_eq!(cli.config, PathBuf::from("x.json"));
    }

    #[test]
    fn subcommand_name_is_plain_text_after_title() {
        let cli = Cli::parse_from(["task-notify", "Build", "config"]);
        assert_eq!(cli.title.as_deref(), Some("Build"));
        assert_eq!(cli.message.as_deref(), Some("config"));
        assert!(cli.command.is_none());
    }

    #[test]
    fn level_arg_converts_to_level() {
        assert_eq!(NotificationLevel::from(LevelArg::Info), NotificationLevel::Info);
        assert_eq!(NotificationLevel::from(LevelArg::Error), NotificationLevel::Error);
    }

    #[test]
    fn provider_arg_converts_to_kind() {
        assert_eq!(ProviderKind::from(ProviderArg::Desktop), ProviderKind::Desktop);
        assert_eq!(ProviderKind::from(ProviderArg::NotifySend), ProviderKind::NotifySend);
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
