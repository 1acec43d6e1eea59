use std::fmt;

use crate::Parameter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FilterCategory {
    Array,
    Cart,
    Collection,
    Color,
    Customer,
    Default,
    Font,
    Format,
    Html,
    HostedFile,
    Localization,
    Math,
    Media,
    Metafield,
    Money,
    Payment,
    String,
    Tag,
}

impl FilterCategory {
    pub const ALL: [FilterCategory; 18] = [
        FilterCategory::Array,
        FilterCategory::Cart,
        FilterCategory::Collection,
        FilterCategory::Color,
        FilterCategory::Customer,
        FilterCategory::Default,
        FilterCategory::Font,
        FilterCategory::Format,
        FilterCategory::Html,
        FilterCategory::HostedFile,
        FilterCategory::Localization,
        FilterCategory::Math,
        FilterCategory::Media,
        FilterCategory::Metafield,
        FilterCategory::Money,
        FilterCategory::Payment,
        FilterCategory::String,
        FilterCategory::Tag,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FilterCategory::Array => "Array",
            FilterCategory::Cart => "Cart",
            FilterCategory::Collection => "Collection",
            FilterCategory::Color => "Color",
            FilterCategory::Customer => "Customer",
            FilterCategory::Default => "Default",
            FilterCategory::Font => "Font",
            FilterCategory::Format => "Format",
            FilterCategory::Html => "HTML",
            FilterCategory::HostedFile => "Hosted File",
            FilterCategory::Localization => "Localization",
            FilterCategory::Math => "Math",
            FilterCategory::Media => "Media",
            FilterCategory::Metafield => "Metafield",
            FilterCategory::Money => "Money",
            FilterCategory::Payment => "Payment",
            FilterCategory::String => "String",
            FilterCategory::Tag => "Tag",
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filter such as `money` or `image_url`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterDefinition {
    pub name: &'static str,
    pub category: FilterCategory,
    pub description: &'static str,
    /// Usage pattern, e.g. `number | money`.
    pub syntax: Option<&'static str>,
    pub return_type: &'static str,
    /// In declaration order.
    pub parameters: &'static [Parameter],
    pub examples: &'static [&'static str],
    pub deprecated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_human_names() {
        assert_eq!(FilterCategory::HostedFile.to_string(), "Hosted File");
        assert_eq!(FilterCategory::Html.to_string(), "HTML");
        assert_eq!(FilterCategory::Money.to_string(), "Money");
    }

    #[test]
    fn all_lists_each_category_once() {
        let mut categories = FilterCategory::ALL.to_vec();
        categories.sort();
        categories.dedup();
        assert_eq!(categories.len(), FilterCategory::ALL.len());
    }
}
