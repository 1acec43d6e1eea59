//! Editor features for the Liquid language server.
//!
//! Sits between the template locator and the LSP transport: resolves what is
//! under the cursor, looks it up in the catalog and renders markdown.

pub mod converters;
pub mod hover;
pub mod render;

pub use converters::hover_to_lsp;
pub use converters::span_to_lsp_range;
pub use hover::hover_for_line;
pub use hover::HoverInfo;
