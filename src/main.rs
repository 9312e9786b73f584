//! task-notify CLI entry point

use std::process::ExitCode;

use clap::Parser;

use task_notify::cli::{run, Cli, EXIT_VALIDATION_ERROR};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Usage errors are invalid input; --help and --version exit normally
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            return ExitCode::from(EXIT_VALIDATION_ERROR);
        }
        Err(e) => e.exit(),
    };

    run(cli).await
}
