mod commands;
mod domain;
mod services;
#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::Level;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::generate_cmd::generate_command;
use crate::commands::render_cmd::render_command;
use crate::commands::summary_cmd::summary_command;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // stdout carries reports; logs go to stderr
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        cmd @ Commands::Generate { .. } => generate_command(cmd),
        cmd @ Commands::Summary { .. } => summary_command(cmd),
        cmd @ Commands::Render { .. } => render_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            ExitCode::SUCCESS
        }
    }
}
