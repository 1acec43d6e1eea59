//! Hover resolution for a single line of template text.

use lqls_catalog::Catalog;
use lqls_conf::Settings;
use lqls_source::Span;
use lqls_templates::filter_at;
use lqls_templates::tag_at;
use lqls_templates::variable_at;

use crate::render::render_filter;
use crate::render::render_tag;
use crate::render::render_variable;

/// Rendered hover contents and the character range they describe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HoverInfo {
    pub markdown: String,
    pub range: Span,
}

/// Resolve the hover for character `offset` in `line`.
///
/// Filters are tried first, then tag names, then the variable of the
/// enclosing expression. A filter or tag the catalog does not know about falls
/// through to the next kind.
#[must_use]
pub fn hover_for_line(
    line: &str,
    offset: usize,
    settings: &Settings,
    catalog: &Catalog,
) -> Option<HoverInfo> {
    if !settings.enabled {
        return None;
    }

    if settings.enable_filter_hover {
        if let Some(filter) = filter_at(line, offset) {
            tracing::debug!("Hover on filter `{}` at {}", filter.name, offset);
            if let Some(definition) = catalog.lookup_filter(&filter.name) {
                return Some(HoverInfo {
                    markdown: render_filter(&filter, definition, settings),
                    range: filter.range,
                });
            }
        }
    }

    if settings.enable_tag_hover {
        if let Some(tag) = tag_at(line, offset) {
            tracing::debug!("Hover on tag `{}` at {}", tag.name, offset);
            let definition = catalog
                .lookup_tag(&tag.name)
                .or_else(|| catalog.opener_for_closer(&tag.name));
            if let Some(definition) = definition {
                return Some(HoverInfo {
                    markdown: render_tag(&tag, definition, settings),
                    range: tag.range,
                });
            }
        }
    }

    let variable = variable_at(line, offset)?;
    tracing::debug!("Hover on variable `{}` at {}", variable.full_path, offset);

    let object = catalog.lookup_object(&variable.root_name)?;
    let property = catalog.resolve_property(object, &variable.property_path);

    Some(HoverInfo {
        markdown: render_variable(&variable, object, property, settings),
        range: variable.range,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hover(line: &str, offset: usize) -> Option<HoverInfo> {
        hover_for_line(line, offset, &Settings::default(), Catalog::shopify())
    }

    mod filters {
        use super::*;

        #[test]
        fn money_filter_end_to_end() {
            let info = hover("<p>{{ product.price | money }}</p>", 25).unwrap();

            assert!(info.markdown.starts_with("## `money` Filter\n\n"));
            assert!(info.markdown.contains("**Category:** Money"));
            assert_eq!(info.range, Span::from_bounds(22, 27));
        }

        #[test]
        fn unknown_filter_falls_back_to_variable() {
            let line = "{{ product.title | my_custom_filter }}";
            let offset = line.find("my_custom_filter").unwrap() + 3;
            let info = hover(line, offset).unwrap();

            assert!(info.markdown.starts_with("## `product.title`\n\n"));
            assert_eq!(info.range, Span::from_bounds(0, line.len()));
        }

        #[test]
        fn unknown_filter_on_unknown_variable_yields_nothing() {
            assert!(hover("{{ my_var | not_a_filter }}", 13).is_none());
        }

        #[test]
        fn disabled_filter_hover_falls_back_to_variable() {
            let settings = Settings {
                enable_filter_hover: false,
                ..Settings::default()
            };
            let info = hover_for_line(
                "<p>{{ product.price | money }}</p>",
                25,
                &settings,
                Catalog::shopify(),
            )
            .unwrap();

            assert!(info.markdown.starts_with("## `product.price`\n\n"));
            assert_eq!(info.range, Span::from_bounds(3, 30));
        }
    }

    mod tags {
        use super::*;

        #[test]
        fn tag_name() {
            let info = hover("{% if product.available %}", 4).unwrap();
            assert!(info.markdown.starts_with("## `if` Tag\n\n"));
            assert_eq!(info.range, Span::from_bounds(3, 5));
        }

        #[test]
        fn closing_tag_uses_opener() {
            let info = hover("{% endunless %}", 5).unwrap();
            assert!(info.markdown.contains("**Closes:** `unless`"));
        }

        #[test]
        fn tag_markup_resolves_variable() {
            let info = hover("{% if product.available %}", 10).unwrap();
            assert!(info.markdown.starts_with("## `product.available`\n\n"));
            assert!(info.markdown.contains("**Property Type:** `boolean`"));
        }

        #[test]
        fn unknown_tag_falls_back_to_variable() {
            let info = hover("{% my_tag product.title %}", 4).unwrap();
            assert!(info.markdown.starts_with("## `product.title`\n\n"));
        }

        #[test]
        fn disabled_tag_hover() {
            let settings = Settings {
                enable_tag_hover: false,
                ..Settings::default()
            };
            assert!(hover_for_line("{% endif %}", 4, &settings, Catalog::shopify()).is_none());
        }
    }

    mod variables {
        use super::*;

        #[test]
        fn nested_property_through_linked_object() {
            let info = hover("{{ product.featured_image.alt }}", 6).unwrap();

            assert!(info.markdown.starts_with("## `product.featured_image.alt`\n\n**Type:** `Product`\n\n"));
            assert!(info.markdown.contains("**Property Type:** `string`\n\n**Description:** Alt text\n\n"));
            assert!(info.markdown.contains("### Available Properties"));
        }

        #[test]
        fn unknown_property_still_shows_object() {
            let info = hover("{{ product.nope }}", 4).unwrap();
            assert!(!info.markdown.contains("**Property Type:**"));
            assert!(info.markdown.contains("**Type:** `Product`"));
        }

        #[test]
        fn unknown_root_yields_nothing() {
            assert!(hover("{{ my_var.title }}", 4).is_none());
        }

        #[test]
        fn outside_expression_yields_nothing() {
            assert!(hover("<p>{{ product.title }}</p>", 1).is_none());
        }

        #[test]
        fn disabled_entirely() {
            let settings = Settings {
                enabled: false,
                ..Settings::default()
            };
            assert!(hover_for_line("{{ product.title }}", 4, &settings, Catalog::shopify()).is_none());
        }

        #[test]
        fn product_table_is_truncated() {
            let info = hover("{{ product }}", 4).unwrap();
            let total = Catalog::shopify().lookup_object("product").unwrap().properties.len();
            assert!(total > 25, "product has only {total} properties");
            assert!(info
                .markdown
                .ends_with(&format!("\n*Showing 25 of {total} properties*\n")));
        }
    }
}
