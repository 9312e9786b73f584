//! CLI layer - Command-line interface
//!
//! Contains argument parsing, output formatting, logging setup,
//! interrupt handling, and the main application runner.

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod logging;
pub mod presenter;
pub mod signals;

// Re-export commonly used types
pub use app::{
    execute, exit_code, run, EXIT_BACKEND_UNAVAILABLE, EXIT_CONFIG_ERROR, EXIT_FAILURE,
    EXIT_INTERRUPTED, EXIT_SUCCESS, EXIT_VALIDATION_ERROR,
};
pub use args::{Cli, Commands, ConfigAction, LevelArg, ProviderArg};
pub use presenter::Presenter;
