use lqls_source::Span;
use serde::Serialize;

use crate::quotes::find_unquoted;
use crate::spans::span_at;
use crate::spans::ExpressionSpan;
use crate::spans::SpanKind;

/// A dotted variable path such as `product.featured_image.alt`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VariableReference {
    pub root_name: String,
    pub full_path: String,
    pub property_path: Vec<String>,
    /// Bounds of the enclosing expression, not just the identifier.
    pub range: Span,
}

impl VariableReference {
    fn from_path(full_path: &str, range: Span) -> Self {
        let mut segments = full_path.split('.').map(str::to_string);
        let root_name = segments.next().unwrap_or_default();

        Self {
            root_name,
            full_path: full_path.to_string(),
            property_path: segments.collect(),
            range,
        }
    }
}

/// The variable referenced by the expression containing `offset`.
///
/// The first identifier path in the value expression wins, wherever the cursor
/// sits inside the expression.
#[must_use]
pub fn variable_at(line: &str, offset: usize) -> Option<VariableReference> {
    let span = span_at(line, offset)?;
    variable_in(&span)
}

/// The first variable path in the value expression of `span`.
///
/// The value expression is everything before the first unquoted `|`. For tags
/// the leading keyword is dropped first, so `{% if product.available %}`
/// yields `product.available` and `{% else %}` yields nothing.
#[must_use]
pub fn variable_in(span: &ExpressionSpan) -> Option<VariableReference> {
    let content = span.content();
    let expression = match span.kind() {
        SpanKind::Output => content,
        SpanKind::Tag => content
            .split_once(char::is_whitespace)
            .map_or("", |(_, markup)| markup),
    };

    let value = find_unquoted(expression, '|').map_or(expression, |pipe| &expression[..pipe]);
    let path = first_path(value.trim())?;

    Some(VariableReference::from_path(path, span.span()))
}

fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_identifier_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

/// Find the first `identifier(.identifier)*` in `text` that starts on a word
/// boundary and lies outside string literals.
///
/// identifier = `[A-Za-z_][A-Za-z0-9_]*`
fn first_path(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if b == b'\'' || b == b'"' {
            i = bytes[i + 1..]
                .iter()
                .position(|&c| c == b)
                .map_or(bytes.len(), |close| i + 1 + close + 1);
            continue;
        }

        let at_boundary = i == 0 || !is_word(bytes[i - 1]);
        if at_boundary && is_identifier_start(b) {
            return Some(&text[i..path_end(bytes, i)]);
        }

        i += 1;
    }

    None
}

fn path_end(bytes: &[u8], start: usize) -> usize {
    let mut end = start;
    loop {
        while end < bytes.len() && is_word(bytes[end]) {
            end += 1;
        }

        match (bytes.get(end), bytes.get(end + 1)) {
            (Some(b'.'), Some(&next)) if is_identifier_start(next) => end += 1,
            _ => return end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod paths {
        use super::*;

        #[test]
        fn dotted_path_splits_into_root_and_properties() {
            let line = "{{ a.b.c }}";
            for offset in 0..=line.len() {
                let variable = variable_at(line, offset).unwrap();
                assert_eq!(variable.root_name, "a");
                assert_eq!(variable.property_path, vec!["b", "c"]);
                assert_eq!(variable.full_path, "a.b.c");
            }
        }

        #[test]
        fn bare_variable_has_empty_property_path() {
            let variable = variable_at("{{ cart }}", 4).unwrap();
            assert_eq!(variable.root_name, "cart");
            assert!(variable.property_path.is_empty());
        }

        #[test]
        fn path_segments_join_back_to_full_path() {
            let variable = variable_at("{{ product.featured_image.alt }}", 5).unwrap();
            let mut joined = vec![variable.root_name.clone()];
            joined.extend(variable.property_path.clone());
            assert_eq!(joined.join("."), variable.full_path);
        }

        #[test]
        fn range_is_the_enclosing_span() {
            let variable = variable_at("<h1>{{ product.title }}</h1>", 10).unwrap();
            assert_eq!(variable.range, Span::from_bounds(4, 23));
        }

        #[test]
        fn trailing_dot_is_not_part_of_path() {
            let variable = variable_at("{{ product. }}", 4).unwrap();
            assert_eq!(variable.full_path, "product");
        }

        #[test]
        fn digit_segment_ends_path() {
            let variable = variable_at("{{ images.1st }}", 4).unwrap();
            assert_eq!(variable.full_path, "images");
        }

        #[test]
        fn bracket_access_ends_path() {
            let variable = variable_at("{{ product.images[0].src }}", 4).unwrap();
            assert_eq!(variable.full_path, "product.images");
        }
    }

    mod value_expression {
        use super::*;

        #[test]
        fn filters_are_not_variables() {
            let variable = variable_at("{{ product.price | money }}", 22).unwrap();
            assert_eq!(variable.full_path, "product.price");
        }

        #[test]
        fn first_match_wins() {
            let variable = variable_at("{{ first_name last_name }}", 16).unwrap();
            assert_eq!(variable.root_name, "first_name");
        }

        #[test]
        fn literals_yield_nothing() {
            assert!(variable_at("{{ 'hello' | upcase }}", 4).is_none());
            assert!(variable_at("{{ 42 }}", 4).is_none());
            assert!(variable_at("{{ 1abc }}", 4).is_none());
            assert!(variable_at("{{ }}", 2).is_none());
        }

        #[test]
        fn quoted_pipe_does_not_split() {
            let variable = variable_at("{{ 'a|b' | append: suffix }}", 4);
            assert!(variable.is_none());
        }
    }

    mod tags {
        use super::*;

        #[test]
        fn tag_keyword_is_skipped() {
            let variable = variable_at("{% if product.available %}", 3).unwrap();
            assert_eq!(variable.full_path, "product.available");
        }

        #[test]
        fn bare_keyword_yields_nothing() {
            assert!(variable_at("{% else %}", 4).is_none());
            assert!(variable_at("{% endif %}", 4).is_none());
        }

        #[test]
        fn assignment_takes_first_identifier() {
            let variable = variable_at("{% assign sale = product.price | times: 0.8 %}", 5).unwrap();
            assert_eq!(variable.full_path, "sale");
        }
    }

    mod outside {
        use super::*;

        #[test]
        fn offsets_outside_spans_yield_nothing() {
            let line = "title: {{ product.title }} end";
            assert!(variable_at(line, 0).is_none());
            assert!(variable_at(line, 6).is_none());
            assert!(variable_at(line, 27).is_none());
            assert!(variable_at(line, 1000).is_none());
        }

        #[test]
        fn unterminated_expression_yields_nothing() {
            assert!(variable_at("Hello {{ product.title", 12).is_none());
        }
    }

    #[test]
    fn repeated_calls_are_equal() {
        let line = "{{ customer.first_name | capitalize }}";
        assert_eq!(variable_at(line, 5), variable_at(line, 5));
    }
}
