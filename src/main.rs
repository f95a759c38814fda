//! Zoomr Report CLI
//!
//! Command-line interface for decoding recorder project directories.

use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::debug;

use zoomr_report::cli::{commands, Cli, Commands};
use zoomr_report::Result;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    debug!("Zoomr Report v{}", env!("CARGO_PKG_VERSION"));

    match handle_command(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error [{}]", e);
            if let Some(hint) = e.recovery_suggestion() {
                eprintln!("{}", hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn handle_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Json {
            project_dir,
            extra_info,
            output,
            decode,
        } => commands::generate_json(&project_dir, &extra_info, &output, &decode.rules()),
        Commands::Html {
            project_dir,
            extra_info,
            output,
            template,
            decode,
        } => commands::generate_html(
            &project_dir,
            &extra_info,
            &output,
            &template,
            &decode.rules(),
        ),
        Commands::Inspect {
            project_dir,
            decode,
        } => commands::inspect(&project_dir, &decode.rules()),
        Commands::Peek {
            files,
            offset,
            length,
            exclude,
        } => commands::peek(&files, &exclude, offset, length),
    }
}
