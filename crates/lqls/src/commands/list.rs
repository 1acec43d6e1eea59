use std::fmt::Write as _;

use anyhow::Result;
use clap::Parser;
use clap::ValueEnum;
use lqls_catalog::Catalog;
use lqls_catalog::FilterCategory;
use lqls_catalog::TagCategory;

use crate::args::Args;
use crate::commands::Command;
use crate::exit::Exit;

#[derive(Debug, Parser)]
pub struct List {
    /// Which table to print.
    #[arg(value_enum)]
    kind: Kind,

    /// Only show entries in this category, e.g. "Money" or "Iteration".
    #[arg(long)]
    category: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Objects,
    Filters,
    Tags,
}

impl Command for List {
    fn execute(&self, _args: &Args) -> Result<Exit> {
        let catalog = Catalog::shopify();
        let mut out = String::new();

        match self.kind {
            Kind::Objects => {
                if self.category.is_some() {
                    return Ok(Exit::error().with_message("Objects have no categories"));
                }
                for object in catalog.objects() {
                    writeln!(out, "{}\t{}", object.name, object.type_name)?;
                }
            }
            Kind::Filters => {
                let categories =
                    match select(&FilterCategory::ALL, self.category.as_deref(), FilterCategory::as_str) {
                        Ok(categories) => categories,
                        Err(exit) => return Ok(exit),
                    };
                for category in categories {
                    for filter in catalog.filters_by_category(category) {
                        writeln!(out, "{}\t{}", filter.name, category)?;
                    }
                }
            }
            Kind::Tags => {
                let categories =
                    match select(&TagCategory::ALL, self.category.as_deref(), TagCategory::as_str) {
                        Ok(categories) => categories,
                        Err(exit) => return Ok(exit),
                    };
                for category in categories {
                    for tag in catalog.tags_by_category(category) {
                        writeln!(out, "{}\t{}", tag.name, category)?;
                    }
                }
            }
        }

        Ok(Exit::success().with_message(out.trim_end()))
    }
}

/// All categories, or just the one named (case-insensitively) by `name`.
fn select<C: Copy>(all: &[C], name: Option<&str>, as_str: fn(C) -> &'static str) -> Result<Vec<C>, Exit> {
    let Some(name) = name else {
        return Ok(all.to_vec());
    };

    if let Some(&category) = all.iter().find(|&&c| as_str(c).eq_ignore_ascii_case(name)) {
        return Ok(vec![category]);
    }

    let known: Vec<&str> = all.iter().map(|&c| as_str(c)).collect();
    Err(Exit::error().with_message(format!(
        "Unknown category `{name}`; expected one of: {}",
        known.join(", ")
    )))
}
