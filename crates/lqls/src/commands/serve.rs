use anyhow::Context;
use anyhow::Result;
use clap::Parser;

use crate::args::Args;
use crate::commands::Command;
use crate::exit::Exit;

#[derive(Debug, Parser)]
pub struct Serve {}

impl Command for Serve {
    fn execute(&self, _args: &Args) -> Result<Exit> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("Failed to start the async runtime")?;

        let result = runtime.block_on(lqls_server::serve());
        // The stdin reader blocks its worker thread; don't wait for it.
        runtime.shutdown_background();
        result?;

        Ok(Exit::success())
    }
}
