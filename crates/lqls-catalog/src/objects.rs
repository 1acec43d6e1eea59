/// A global object such as `product` or `cart`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ObjectDefinition {
    pub name: &'static str,
    pub type_name: &'static str,
    pub description: &'static str,
    pub deprecated: bool,
    /// Sorted by name.
    pub properties: &'static [PropertyDefinition],
}

impl ObjectDefinition {
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&'static PropertyDefinition> {
        find_property(self.properties, name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyDefinition {
    pub name: &'static str,
    /// A scalar type (`string`, `number`, …), another object's name, or
    /// `array<name>`.
    pub type_name: &'static str,
    pub description: &'static str,
    /// Deprecation note, if the property should no longer be used.
    pub deprecated: Option<&'static str>,
    /// Inline sub-properties. Empty when the property is a leaf or when its
    /// shape comes from the object named by `type_name`.
    pub properties: &'static [PropertyDefinition],
}

impl PropertyDefinition {
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&'static PropertyDefinition> {
        find_property(self.properties, name)
    }

    /// The object name this property's type refers to, with any `array<…>`
    /// wrapper removed.
    #[must_use]
    pub fn linked_type(&self) -> &'static str {
        self.type_name
            .strip_prefix("array<")
            .and_then(|inner| inner.strip_suffix('>'))
            .unwrap_or(self.type_name)
    }
}

fn find_property(
    properties: &'static [PropertyDefinition],
    name: &str,
) -> Option<&'static PropertyDefinition> {
    properties.iter().find(|property| property.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEAF: PropertyDefinition = PropertyDefinition {
        name: "alt",
        type_name: "string",
        description: "Alt text",
        deprecated: None,
        properties: &[],
    };

    #[test]
    fn linked_type_unwraps_arrays() {
        let variants = PropertyDefinition {
            name: "variants",
            type_name: "array<variant>",
            ..LEAF
        };
        assert_eq!(variants.linked_type(), "variant");
        assert_eq!(LEAF.linked_type(), "string");
    }

    #[test]
    fn malformed_array_type_is_left_alone() {
        let broken = PropertyDefinition {
            type_name: "array<variant",
            ..LEAF
        };
        assert_eq!(broken.linked_type(), "array<variant");
    }

    #[test]
    fn nested_property_lookup() {
        static NESTED: &[PropertyDefinition] = &[LEAF];
        let image = PropertyDefinition {
            name: "image",
            type_name: "object",
            properties: NESTED,
            ..LEAF
        };
        assert_eq!(image.property("alt"), Some(&LEAF));
        assert_eq!(image.property("src"), None);
    }
}
