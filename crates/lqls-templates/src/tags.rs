use lqls_source::Span;
use serde::Serialize;

use crate::quotes::split_arguments;
use crate::quotes::strip_quotes;
use crate::spans::span_at;
use crate::spans::ExpressionSpan;
use crate::spans::SpanKind;

/// The tag named by a `{% … %}` expression, e.g. `render` in
/// `{% render 'product-card', product: product %}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct TagInvocation {
    pub name: String,
    /// Markup after the name split on whitespace and commas, quotes stripped.
    pub parameters: Vec<String>,
    /// Everything after the name, trimmed.
    pub markup: String,
    /// Bounds of the tag name within the line.
    pub range: Span,
}

/// The tag whose name covers `offset`, inclusive of both ends of the name.
#[must_use]
pub fn tag_at(line: &str, offset: usize) -> Option<TagInvocation> {
    let span = span_at(line, offset)?;
    tag_in(&span).filter(|tag| tag.range.contains(offset))
}

/// The tag of `span`, if it is a tag expression with a non-empty keyword.
#[must_use]
pub fn tag_in(span: &ExpressionSpan) -> Option<TagInvocation> {
    if span.kind() != SpanKind::Tag {
        return None;
    }

    let content = span.content();
    let (name, markup) = content
        .split_once(char::is_whitespace)
        .unwrap_or((content, ""));

    if name.is_empty() {
        return None;
    }

    let markup = markup.trim();
    let parameters = split_arguments(markup)
        .into_iter()
        .map(strip_quotes)
        .filter(|parameter| !parameter.is_empty())
        .map(str::to_string)
        .collect();

    Some(TagInvocation {
        name: name.to_string(),
        parameters,
        markup: markup.to_string(),
        range: span.content_span(0, name.len()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_and_parameters() {
        let line = "{% render 'product-card', product: product %}";
        let tag = tag_at(line, 4).unwrap();

        assert_eq!(tag.name, "render");
        assert_eq!(tag.markup, "'product-card', product: product");
        assert_eq!(tag.parameters, vec!["product-card", "product:", "product"]);
        assert_eq!(tag.range, Span::from_bounds(3, 9));
    }

    #[test]
    fn quoted_parameter_with_comma_keeps_comma() {
        let tag = tag_at("{% render 'card', title: 'Hello, world' %}", 4).unwrap();
        assert_eq!(tag.parameters, vec!["card", "title:", "Hello, world"]);
    }

    #[test]
    fn keyword_only() {
        let tag = tag_at("{% endif %}", 5).unwrap();
        assert_eq!(tag.name, "endif");
        assert!(tag.parameters.is_empty());
        assert_eq!(tag.markup, "");
    }

    #[test]
    fn whitespace_control_does_not_leak_into_name() {
        let tag = tag_at("{%- for item in cart.items -%}", 5).unwrap();
        assert_eq!(tag.name, "for");
        assert_eq!(tag.parameters, vec!["item", "in", "cart.items"]);
        assert_eq!(tag.range, Span::from_bounds(4, 7));
    }

    #[test]
    fn cursor_must_be_on_name() {
        let line = "{% if customer %}";
        assert!(tag_at(line, 3).is_some());
        assert!(tag_at(line, 5).is_some());
        assert!(tag_at(line, 7).is_none());
        assert!(tag_at(line, 1).is_none());
    }

    #[test]
    fn output_expressions_are_not_tags() {
        assert!(tag_at("{{ if }}", 3).is_none());
    }

    #[test]
    fn empty_tag_is_not_a_tag() {
        assert!(tag_at("{% %}", 2).is_none());
    }

    #[test]
    fn inline_comment_keeps_hash_name() {
        let tag = tag_at("{% # TODO: remove %}", 3).unwrap();
        assert_eq!(tag.name, "#");
    }

    #[test]
    fn outside_span_is_none() {
        assert!(tag_at("text {% if x %}", 2).is_none());
    }
}
