//! The built-in Shopify reference tables.
//!
//! Everything here is compile-time data; [`crate::Catalog::shopify`] indexes
//! it once on first use.

macro_rules! property {
    ($name:literal, $type_name:literal, $description:literal) => {
        $crate::objects::PropertyDefinition {
            name: $name,
            type_name: $type_name,
            description: $description,
            deprecated: None,
            properties: &[],
        }
    };
}

mod filters;
mod objects;
mod tags;

pub(crate) use filters::FILTERS;
pub(crate) use objects::OBJECTS;
pub(crate) use tags::TAGS;
