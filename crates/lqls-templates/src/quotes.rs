//! Quote-aware splitting for expression content.
//!
//! Liquid string literals use `'` or `"` and have no escape sequences, so a
//! quote character always toggles the quoted region it opened.

use std::ops::ControlFlow;

/// Visit every occurrence of `delimiter` in `s` that is not inside a quoted
/// string literal. The callback receives the byte index of the delimiter.
pub(crate) fn for_each_unquoted(
    s: &str,
    delimiter: char,
    mut cb: impl FnMut(usize) -> ControlFlow<()>,
) {
    let mut quote: Option<char> = None;

    for (idx, ch) in s.char_indices() {
        match ch {
            '"' | '\'' if quote == Some(ch) => quote = None,
            '"' | '\'' if quote.is_none() => quote = Some(ch),
            _ if quote.is_some() => {}
            _ if ch == delimiter => {
                if cb(idx).is_break() {
                    return;
                }
            }
            _ => {}
        }
    }
}

/// Byte index of the first unquoted `delimiter` in `s`.
pub(crate) fn find_unquoted(s: &str, delimiter: char) -> Option<usize> {
    let mut found = None;
    for_each_unquoted(s, delimiter, |idx| {
        found = Some(idx);
        ControlFlow::Break(())
    });
    found
}

/// Split `s` on every unquoted `delimiter`.
///
/// Returns `(segment, byte_offset_of_segment_in_s)` pairs. There is always at
/// least one segment, possibly empty.
pub(crate) fn split_unquoted(s: &str, delimiter: char) -> Vec<(&str, usize)> {
    let mut segments = Vec::new();
    let mut start = 0;

    for_each_unquoted(s, delimiter, |idx| {
        segments.push((&s[start..idx], start));
        start = idx + delimiter.len_utf8();
        ControlFlow::Continue(())
    });

    segments.push((&s[start..], start));
    segments
}

/// Split `s` on unquoted whitespace and commas, keeping quoted regions (and
/// their quotes) together.
pub(crate) fn split_arguments(s: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = None;
    let mut quote: Option<char> = None;

    for (idx, ch) in s.char_indices() {
        match ch {
            '"' | '\'' if quote == Some(ch) => quote = None,
            '"' | '\'' if quote.is_none() => {
                quote = Some(ch);
                start.get_or_insert(idx);
            }
            _ if quote.is_none() && (ch.is_whitespace() || ch == ',') => {
                if let Some(piece_start) = start.take() {
                    pieces.push(&s[piece_start..idx]);
                }
            }
            _ => {
                start.get_or_insert(idx);
            }
        }
    }

    if let Some(piece_start) = start {
        pieces.push(&s[piece_start..]);
    }
    pieces
}

/// Strip any leading and trailing `'` or `"` characters.
pub(crate) fn strip_quotes(s: &str) -> &str {
    s.trim_matches(|c| c == '\'' || c == '"')
}
