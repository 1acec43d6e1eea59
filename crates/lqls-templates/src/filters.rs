use lqls_source::Span;
use serde::Serialize;

use crate::quotes::find_unquoted;
use crate::quotes::split_unquoted;
use crate::quotes::strip_quotes;
use crate::spans::span_at;
use crate::spans::ExpressionSpan;

/// A single filter application in a chain like
/// `{{ product.title | truncate: 10, '...' | upcase }}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FilterInvocation {
    pub name: String,
    /// Raw arguments in source order, trimmed and with quotes stripped.
    pub parameters: Vec<String>,
    /// Bounds of the filter name within the line.
    pub range: Span,
}

/// The filter whose name covers `offset`, inclusive of both ends of the name.
#[must_use]
pub fn filter_at(line: &str, offset: usize) -> Option<FilterInvocation> {
    let span = span_at(line, offset)?;
    filters_in(&span)
        .into_iter()
        .find(|filter| filter.range.contains(offset))
}

/// Every filter applied in `span`, left to right.
///
/// The segment before the first unquoted `|` is the value expression and is
/// skipped. Segments with an empty name (a stray trailing pipe) are dropped.
#[must_use]
pub fn filters_in(span: &ExpressionSpan) -> Vec<FilterInvocation> {
    split_unquoted(span.content(), '|')
        .into_iter()
        .skip(1)
        .filter_map(|(segment, segment_start)| parse_filter(span, segment, segment_start))
        .collect()
}

fn parse_filter(span: &ExpressionSpan, segment: &str, segment_start: usize) -> Option<FilterInvocation> {
    let leading = segment.len() - segment.trim_start().len();
    let trimmed = segment.trim();

    let (name, arguments) = match find_unquoted(trimmed, ':') {
        Some(colon) => (trimmed[..colon].trim_end(), Some(&trimmed[colon + 1..])),
        None => (trimmed, None),
    };

    if name.is_empty() {
        return None;
    }

    Some(FilterInvocation {
        name: name.to_string(),
        parameters: arguments.map(parse_parameters).unwrap_or_default(),
        range: span.content_span(segment_start + leading, name.len()),
    })
}

fn parse_parameters(arguments: &str) -> Vec<String> {
    split_unquoted(arguments, ',')
        .into_iter()
        .map(|(parameter, _)| strip_quotes(parameter.trim()))
        .filter(|parameter| !parameter.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spans::find_expression_spans;

    fn names(line: &str) -> Vec<String> {
        find_expression_spans(line)
            .iter()
            .flat_map(filters_in)
            .map(|filter| filter.name)
            .collect()
    }

    mod extraction {
        use super::*;

        #[test]
        fn name_and_quoted_parameters() {
            let line = "{{ product.title | truncate: 10, '...' }}";
            let offset = line.find("truncate").unwrap() + 3;
            let filter = filter_at(line, offset).unwrap();

            assert_eq!(filter.name, "truncate");
            assert_eq!(filter.parameters, vec!["10", "..."]);
        }

        #[test]
        fn filter_without_parameters() {
            let filter = filter_at("<p>{{ product.price | money }}</p>", 25).unwrap();
            assert_eq!(filter.name, "money");
            assert!(filter.parameters.is_empty());
            assert_eq!(filter.range, Span::from_bounds(22, 27));
        }

        #[test]
        fn chain_is_listed_in_order() {
            assert_eq!(
                names("{{ title | downcase | replace: ' ', '-' | prepend: '/' }}"),
                vec!["downcase", "replace", "prepend"]
            );
        }

        #[test]
        fn quoted_separators_stay_in_parameters() {
            let line = "{{ tags | join: ', ' | split: '|' }}";
            let spans = find_expression_spans(line);
            let filters = filters_in(&spans[0]);

            assert_eq!(filters.len(), 2);
            assert_eq!(filters[0].parameters, vec![", "]);
            assert_eq!(filters[1].name, "split");
            assert_eq!(filters[1].parameters, vec!["|"]);
        }

        #[test]
        fn named_parameters_are_kept_raw() {
            let line = "{{ image | image_url: width: 300, height: 200 }}";
            let spans = find_expression_spans(line);
            let filters = filters_in(&spans[0]);

            assert_eq!(filters[0].name, "image_url");
            assert_eq!(filters[0].parameters, vec!["width: 300", "height: 200"]);
        }

        #[test]
        fn filters_inside_tags() {
            assert_eq!(
                names("{% assign handle = title | handleize %}"),
                vec!["handleize"]
            );
        }
    }

    mod edge_cases {
        use super::*;

        #[test]
        fn stray_pipes_are_skipped() {
            assert_eq!(names("{{ price | }}"), Vec::<String>::new());
            assert_eq!(names("{{ price || money }}"), vec!["money"]);
        }

        #[test]
        fn empty_argument_list() {
            let spans = find_expression_spans("{{ x | default: }}");
            let filters = filters_in(&spans[0]);
            assert_eq!(filters[0].name, "default");
            assert!(filters[0].parameters.is_empty());
        }

        #[test]
        fn value_without_filters() {
            assert!(names("{{ product.title }}").is_empty());
        }

        #[test]
        fn name_range_uses_actual_position() {
            // `money` also occurs inside the value; the range must point at the filter.
            let line = "{{ money_value | money }}";
            let spans = find_expression_spans(line);
            let filters = filters_in(&spans[0]);
            assert_eq!(filters[0].range, Span::from_bounds(17, 22));
        }
    }

    mod position {
        use super::*;

        #[test]
        fn name_bounds_are_inclusive() {
            let line = "{{ price | money }}";
            assert_eq!(filter_at(line, 11).map(|f| f.name), Some("money".to_string()));
            assert_eq!(filter_at(line, 16).map(|f| f.name), Some("money".to_string()));
            assert!(filter_at(line, 10).is_none());
            assert!(filter_at(line, 17).is_none());
        }

        #[test]
        fn offset_on_parameter_is_not_a_filter() {
            let line = "{{ title | truncate: 20 }}";
            let offset = line.find("20").unwrap();
            assert!(filter_at(line, offset).is_none());
        }

        #[test]
        fn offset_on_value_is_not_a_filter() {
            assert!(filter_at("{{ price | money }}", 4).is_none());
        }

        #[test]
        fn outside_any_span() {
            let line = "x {{ price | money }} y";
            assert!(filter_at(line, 0).is_none());
            assert!(filter_at(line, 22).is_none());
        }

        #[test]
        fn picks_the_right_filter_in_a_chain() {
            let line = "{{ a | upcase | append: '!' }}";
            let offset = line.find("append").unwrap() + 2;
            let filter = filter_at(line, offset).unwrap();
            assert_eq!(filter.name, "append");
            assert_eq!(filter.parameters, vec!["!"]);
        }

        #[test]
        fn repeated_calls_are_equal() {
            let line = "{{ a | upcase }}";
            assert_eq!(filter_at(line, 8), filter_at(line, 8));
        }
    }
}
