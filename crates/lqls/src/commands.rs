mod hover;
mod list;
mod serve;

use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Subcommand;

use crate::args::Args;
use crate::exit::Exit;

pub trait Command {
    fn execute(&self, args: &Args) -> Result<Exit>;
}

#[derive(Debug, Subcommand)]
pub enum LqlsCommand {
    /// Start the LSP server
    Serve(self::serve::Serve),
    /// Show the hover panel for a position in a template
    Hover(self::hover::Hover),
    /// List the built-in objects, filters or tags
    List(self::list::List),
}

impl Command for LqlsCommand {
    fn execute(&self, args: &Args) -> Result<Exit> {
        match self {
            LqlsCommand::Serve(cmd) => cmd.execute(args),
            LqlsCommand::Hover(cmd) => cmd.execute(args),
            LqlsCommand::List(cmd) => cmd.execute(args),
        }
    }
}

fn resolve_project_root() -> Result<Utf8PathBuf> {
    let cwd = std::env::current_dir()?;
    Utf8PathBuf::from_path_buf(cwd)
        .map_err(|path| anyhow::anyhow!("Current directory is not valid UTF-8: {}", path.display()))
}
