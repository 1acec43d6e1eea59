//! Convert IDE results to LSP types

use lqls_source::PositionEncoding;
use lqls_source::Span;
use tower_lsp_server::ls_types;

use crate::hover::HoverInfo;

/// Convert a hover on line `line_number` (whose text is `line`) to an LSP hover.
#[must_use]
pub fn hover_to_lsp(
    info: &HoverInfo,
    line: &str,
    line_number: u32,
    encoding: PositionEncoding,
) -> ls_types::Hover {
    ls_types::Hover {
        contents: ls_types::HoverContents::Markup(ls_types::MarkupContent {
            kind: ls_types::MarkupKind::Markdown,
            value: info.markdown.clone(),
        }),
        range: Some(span_to_lsp_range(info.range, line, line_number, encoding)),
    }
}

/// Convert a character span within `line` to an LSP range.
#[must_use]
pub fn span_to_lsp_range(
    span: Span,
    line: &str,
    line_number: u32,
    encoding: PositionEncoding,
) -> ls_types::Range {
    ls_types::Range {
        start: ls_types::Position {
            line: line_number,
            character: encoding.char_offset_to_column(line, span.start_usize()),
        },
        end: ls_types::Position {
            line: line_number,
            character: encoding.char_offset_to_column(line, span.end_usize()),
        },
    }
}
