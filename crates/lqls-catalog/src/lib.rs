//! Reference data for Shopify's Liquid dialect: global objects, filters and
//! tags, with lookups by name.

mod builtins;
mod filters;
mod objects;
mod parameter;
mod tags;

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

pub use filters::FilterCategory;
pub use filters::FilterDefinition;
pub use objects::ObjectDefinition;
pub use objects::PropertyDefinition;
pub use parameter::Parameter;
pub use tags::TagCategory;
pub use tags::TagDefinition;
pub use tags::TagForm;

static SHOPIFY: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::new(builtins::OBJECTS, builtins::FILTERS, builtins::TAGS));

/// Name-indexed view over static object, filter and tag tables.
///
/// Iteration follows the order of the underlying tables.
#[derive(Debug)]
pub struct Catalog {
    objects: &'static [ObjectDefinition],
    filters: &'static [FilterDefinition],
    tags: &'static [TagDefinition],
    objects_by_name: FxHashMap<&'static str, &'static ObjectDefinition>,
    filters_by_name: FxHashMap<&'static str, &'static FilterDefinition>,
    tags_by_name: FxHashMap<&'static str, &'static TagDefinition>,
    openers_by_closer: FxHashMap<&'static str, &'static TagDefinition>,
}

impl Catalog {
    /// Index the given tables. A later entry with a duplicate name replaces an
    /// earlier one.
    #[must_use]
    pub fn new(
        objects: &'static [ObjectDefinition],
        filters: &'static [FilterDefinition],
        tags: &'static [TagDefinition],
    ) -> Self {
        let objects_by_name = objects.iter().map(|o| (o.name, o)).collect();
        let filters_by_name = filters.iter().map(|f| (f.name, f)).collect();
        let tags_by_name = tags.iter().map(|t| (t.name, t)).collect();
        let openers_by_closer = tags
            .iter()
            .filter_map(|t| t.end_tag().map(|end_tag| (end_tag, t)))
            .collect();

        Self {
            objects,
            filters,
            tags,
            objects_by_name,
            filters_by_name,
            tags_by_name,
            openers_by_closer,
        }
    }

    /// The built-in Shopify catalog, indexed on first use.
    #[must_use]
    pub fn shopify() -> &'static Catalog {
        &SHOPIFY
    }

    #[must_use]
    pub fn lookup_object(&self, name: &str) -> Option<&'static ObjectDefinition> {
        self.objects_by_name.get(name).copied()
    }

    #[must_use]
    pub fn lookup_filter(&self, name: &str) -> Option<&'static FilterDefinition> {
        self.filters_by_name.get(name).copied()
    }

    #[must_use]
    pub fn lookup_tag(&self, name: &str) -> Option<&'static TagDefinition> {
        self.tags_by_name.get(name).copied()
    }

    /// The block tag closed by `name`, e.g. `if` for `endif`.
    #[must_use]
    pub fn opener_for_closer(&self, name: &str) -> Option<&'static TagDefinition> {
        self.openers_by_closer.get(name).copied()
    }

    /// Walk `path` through `object`'s properties one segment at a time.
    ///
    /// Inline sub-properties are searched first. A property without them
    /// continues into the object its type names, so `featured_image.alt`
    /// resolves through the `image` object. Returns `None` for an empty path
    /// or at the first segment that cannot be found.
    #[must_use]
    pub fn resolve_property<S: AsRef<str>>(
        &self,
        object: &ObjectDefinition,
        path: &[S],
    ) -> Option<&'static PropertyDefinition> {
        let (first, rest) = path.split_first()?;
        let mut current = object.property(first.as_ref())?;

        for segment in rest {
            let segment = segment.as_ref();
            current = match current.property(segment) {
                Some(property) => property,
                None => self
                    .lookup_object(current.linked_type())?
                    .property(segment)?,
            };
        }

        Some(current)
    }

    pub fn objects(&self) -> impl Iterator<Item = &'static ObjectDefinition> {
        self.objects.iter()
    }

    pub fn filters(&self) -> impl Iterator<Item = &'static FilterDefinition> {
        self.filters.iter()
    }

    pub fn tags(&self) -> impl Iterator<Item = &'static TagDefinition> {
        self.tags.iter()
    }

    pub fn filters_by_category(
        &self,
        category: FilterCategory,
    ) -> impl Iterator<Item = &'static FilterDefinition> {
        self.filters.iter().filter(move |f| f.category == category)
    }

    pub fn tags_by_category(
        &self,
        category: TagCategory,
    ) -> impl Iterator<Item = &'static TagDefinition> {
        self.tags.iter().filter(move |t| t.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> &'static Catalog {
        Catalog::shopify()
    }

    mod lookups {
        use super::*;

        #[test]
        fn table_sizes() {
            assert_eq!(catalog().objects().count(), 132);
            assert_eq!(catalog().filters().count(), 153);
            assert_eq!(catalog().tags().count(), 31);
        }

        #[test]
        fn money_is_a_money_filter() {
            let money = catalog().lookup_filter("money").unwrap();
            assert_eq!(money.category, FilterCategory::Money);
            assert_eq!(money.return_type, "string");
            assert_eq!(money.syntax, Some("number | money"));
        }

        #[test]
        fn if_is_closed_by_endif() {
            let tag = catalog().lookup_tag("if").unwrap();
            assert_eq!(tag.end_tag(), Some("endif"));
            assert_eq!(tag.category, TagCategory::Conditional);
        }

        #[test]
        fn assign_is_self_closing() {
            assert!(catalog().lookup_tag("assign").unwrap().is_self_closing());
        }

        #[test]
        fn closers_resolve_to_openers() {
            assert_eq!(catalog().opener_for_closer("endif").map(|t| t.name), Some("if"));
            assert_eq!(catalog().opener_for_closer("endfor").map(|t| t.name), Some("for"));
            assert!(catalog().opener_for_closer("if").is_none());
        }

        #[test]
        fn unknown_names() {
            assert!(catalog().lookup_object("nope").is_none());
            assert!(catalog().lookup_filter("nope").is_none());
            assert!(catalog().lookup_tag("nope").is_none());
        }

        #[test]
        fn deprecations_are_carried() {
            assert!(catalog().lookup_object("theme").unwrap().deprecated);
            assert!(catalog().lookup_filter("img_url").unwrap().deprecated);
            assert!(catalog().lookup_tag("include").unwrap().deprecated);
            assert!(!catalog().lookup_object("product").unwrap().deprecated);
        }
    }

    mod properties {
        use super::*;

        fn resolve(object: &str, path: &[&str]) -> Option<&'static PropertyDefinition> {
            let object = catalog().lookup_object(object)?;
            catalog().resolve_property(object, path)
        }

        #[test]
        fn direct_property() {
            let title = resolve("product", &["title"]).unwrap();
            assert_eq!(title.type_name, "string");
            assert_eq!(title.description, "Product title");
        }

        #[test]
        fn follows_object_type() {
            let alt = resolve("product", &["featured_image", "alt"]).unwrap();
            assert_eq!(alt.name, "alt");
            assert_eq!(alt.description, "Alt text");
        }

        #[test]
        fn follows_array_element_type() {
            let price = resolve("product", &["variants", "price"]).unwrap();
            assert_eq!(price.description, "Variant price");
        }

        #[test]
        fn missing_segment_is_none() {
            assert!(resolve("product", &["nope"]).is_none());
            assert!(resolve("product", &["title", "length"]).is_none());
            assert!(resolve("product", &["featured_image", "nope"]).is_none());
        }

        #[test]
        fn empty_path_is_none() {
            assert!(resolve("product", &[]).is_none());
        }

        #[test]
        fn accepts_owned_segments() {
            let object = catalog().lookup_object("cart").unwrap();
            let path = vec!["item_count".to_string()];
            assert!(catalog().resolve_property(object, &path).is_some());
        }
    }

    mod tables {
        use super::*;

        #[test]
        fn properties_are_sorted_and_unique() {
            for object in catalog().objects() {
                assert!(
                    object.properties.windows(2).all(|w| w[0].name < w[1].name),
                    "{} properties out of order",
                    object.name
                );
            }
        }

        #[test]
        fn names_are_unique() {
            let objects: rustc_hash::FxHashSet<_> = catalog().objects().map(|o| o.name).collect();
            let filters: rustc_hash::FxHashSet<_> = catalog().filters().map(|f| f.name).collect();
            let tags: rustc_hash::FxHashSet<_> = catalog().tags().map(|t| t.name).collect();
            assert_eq!(objects.len(), catalog().objects().count());
            assert_eq!(filters.len(), catalog().filters().count());
            assert_eq!(tags.len(), catalog().tags().count());
        }

        #[test]
        fn every_category_is_used() {
            for category in FilterCategory::ALL {
                assert!(
                    catalog().filters_by_category(category).next().is_some(),
                    "no filters in {category}"
                );
            }
            for category in TagCategory::ALL {
                assert!(
                    catalog().tags_by_category(category).next().is_some(),
                    "no tags in {category}"
                );
            }
        }

        #[test]
        fn money_category_members() {
            let names: Vec<_> = catalog()
                .filters_by_category(FilterCategory::Money)
                .map(|f| f.name)
                .collect();
            assert!(names.contains(&"money"));
            assert!(names.contains(&"money_with_currency"));
        }
    }
}
