use anyhow::Context;
use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use lqls_catalog::Catalog;
use lqls_conf::Settings;
use lqls_ide::hover_for_line;
use lqls_source::LineIndex;
use lqls_source::PositionEncoding;

use crate::args::Args;
use crate::commands::resolve_project_root;
use crate::commands::Command;
use crate::exit::Exit;

#[derive(Debug, Parser)]
pub struct Hover {
    /// Template file to inspect.
    file: Utf8PathBuf,

    /// Line number, starting at 1.
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    line: u32,

    /// Character column within the line, starting at 0.
    column: u32,

    /// Client settings as a JSON object, applied over the config files
    /// (e.g. '{"showTypes": false}').
    #[arg(long, value_name = "JSON")]
    settings: Option<String>,
}

impl Command for Hover {
    fn execute(&self, args: &Args) -> Result<Exit> {
        let project_root = resolve_project_root()?;
        let overrides = self
            .settings
            .as_deref()
            .map(lqls_conf::parse_overrides)
            .transpose()
            .context("Invalid --settings")?;
        let settings = Settings::new(&project_root, overrides.as_ref())
            .context("Failed to load settings")?;

        let path = if self.file.is_relative() {
            project_root.join(&self.file)
        } else {
            self.file.clone()
        };
        let source = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {path}"))?;

        let location = format!("{}:{}:{}", self.file, self.line, self.column);
        let index = LineIndex::new(&source);
        let Some(line) = index.line(&source, self.line - 1) else {
            return Ok(Exit::error().with_message(format!(
                "{location}: line is past the end of the file ({} lines)",
                index.line_count()
            )));
        };

        let Some(offset) = PositionEncoding::Utf32.column_to_char_offset(line, self.column) else {
            return Ok(Exit::error().with_message(format!(
                "{location}: column is past the end of the line ({} characters)",
                line.chars().count()
            )));
        };
        let Some(info) = hover_for_line(line, offset, &settings, Catalog::shopify()) else {
            return Ok(Exit::error().with_message(format!("No hover information at {location}")));
        };

        if args.global.verbose > 0 && !args.global.quiet {
            eprintln!(
                "{}:{}-{}",
                self.line,
                info.range.start(),
                info.range.end()
            );
        }

        Ok(Exit::success().with_message(info.markdown))
    }
}
