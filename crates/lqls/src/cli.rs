use std::process::ExitCode;

use clap::Parser;

use crate::args::Args;
use crate::commands::Command;
use crate::commands::LqlsCommand;

/// The main CLI structure that defines the command-line interface
#[derive(Parser)]
#[command(name = "lqls")]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: LqlsCommand,

    #[command(flatten)]
    pub args: Args,
}

/// Parse CLI arguments and execute the chosen command
pub fn run(args: Vec<String>) -> ExitCode {
    let cli = Cli::try_parse_from(args).unwrap_or_else(|e| {
        e.exit();
    });

    match cli.command.execute(&cli.args) {
        Ok(exit) => exit.report(&cli.args.global),
        Err(err) => {
            if !cli.args.global.quiet {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}
