mod args;
mod cli;
mod commands;
mod exit;

use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run(std::env::args().collect())
}
