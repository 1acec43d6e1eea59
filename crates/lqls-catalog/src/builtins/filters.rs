//! Shopify's Liquid filters.

use crate::filters::FilterCategory;
use crate::filters::FilterDefinition;
use crate::Parameter;

pub(crate) static FILTERS: &[FilterDefinition] = &[
    FilterDefinition {
        name: "compact",
        category: FilterCategory::Array,
        description: "Removes any nil items from an array",
        syntax: Some("array | compact"),
        return_type: "array",
        parameters: &[],
        examples: &[
            "{{ collection.products | map: 'compare_at_price' | compact }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "concat",
        category: FilterCategory::Array,
        description: "Concatenates (combines) two arrays",
        syntax: Some("array | concat: array"),
        return_type: "array",
        parameters: &[
            Parameter {
                name: "array",
                type_name: "array",
                description: "Array to concatenate with",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "{{ collection.all_types | concat: collection.all_vendors }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "find",
        category: FilterCategory::Array,
        description: "Returns the first item in an array with a specific property value",
        syntax: Some("array | find: property, value"),
        return_type: "object",
        parameters: &[
            Parameter {
                name: "property",
                type_name: "string",
                description: "Property name to search",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "value",
                type_name: "string",
                description: "Value to match",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "{{ collection.products | find: 'available', true }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "find_index",
        category: FilterCategory::Array,
        description: "Returns the index of the first item in an array with a specific property value",
        syntax: Some("array | find_index: property, value"),
        return_type: "number",
        parameters: &[
            Parameter {
                name: "property",
                type_name: "string",
                description: "Property name to search",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "value",
                type_name: "string",
                description: "Value to match",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "first",
        category: FilterCategory::Array,
        description: "Returns the first item in an array",
        syntax: Some("array | first"),
        return_type: "any",
        parameters: &[],
        examples: &[
            "{{ collection.products | first }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "has",
        category: FilterCategory::Array,
        description: "Tests if any item in an array has a specific property value",
        syntax: Some("array | has: property, value"),
        return_type: "boolean",
        parameters: &[
            Parameter {
                name: "property",
                type_name: "string",
                description: "Property name to test",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "value",
                type_name: "string",
                description: "Value to match",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "join",
        category: FilterCategory::Array,
        description: "Combines all of the items in an array into a single string, separated by a space",
        syntax: Some("array | join: separator"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "separator",
                type_name: "string",
                description: "Custom separator (optional)",
                default: Some(" "),
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "{{ product.tags | join: ', ' }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "last",
        category: FilterCategory::Array,
        description: "Returns the last item in an array",
        syntax: Some("array | last"),
        return_type: "any",
        parameters: &[],
        examples: &[
            "{{ collection.products | last }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "map",
        category: FilterCategory::Array,
        description: "Creates an array of values from a specific property of the items in an array",
        syntax: Some("array | map: property"),
        return_type: "array",
        parameters: &[
            Parameter {
                name: "property",
                type_name: "string",
                description: "Property to extract",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "{{ collection.products | map: 'title' }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "reject",
        category: FilterCategory::Array,
        description: "Filters an array to exclude items with a specific property value",
        syntax: Some("array | reject: property, value"),
        return_type: "array",
        parameters: &[
            Parameter {
                name: "property",
                type_name: "string",
                description: "Property name to filter",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "value",
                type_name: "string",
                description: "Value to reject",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "reverse",
        category: FilterCategory::Array,
        description: "Reverses the order of the items in an array",
        syntax: Some("array | reverse"),
        return_type: "array",
        parameters: &[],
        examples: &[
            "{{ collection.products | reverse }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "size",
        category: FilterCategory::Array,
        description: "Returns the size of a string or array",
        syntax: Some("array | size"),
        return_type: "number",
        parameters: &[],
        examples: &[
            "{{ collection.products | size }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "sort",
        category: FilterCategory::Array,
        description: "Sorts the items in an array in case-sensitive alphabetical or numerical order",
        syntax: Some("array | sort: property"),
        return_type: "array",
        parameters: &[
            Parameter {
                name: "property",
                type_name: "string",
                description: "Property to sort by (optional)",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "{{ collection.products | sort: 'title' }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "sort_natural",
        category: FilterCategory::Array,
        description: "Sorts the items in an array in case-insensitive alphabetical order",
        syntax: Some("array | sort_natural: property"),
        return_type: "array",
        parameters: &[
            Parameter {
                name: "property",
                type_name: "string",
                description: "Property to sort by (optional)",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "sum",
        category: FilterCategory::Array,
        description: "Returns the sum of all elements in an array",
        syntax: Some("array | sum: property"),
        return_type: "number",
        parameters: &[
            Parameter {
                name: "property",
                type_name: "string",
                description: "Property to sum (optional)",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "{{ cart.items | sum: 'quantity' }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "uniq",
        category: FilterCategory::Array,
        description: "Removes any duplicate items in an array",
        syntax: Some("array | uniq"),
        return_type: "array",
        parameters: &[],
        examples: &[
            "{{ collection.all_tags | uniq }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "where",
        category: FilterCategory::Array,
        description: "Filters an array to include only items with a specific property value",
        syntax: Some("array | where: property, value"),
        return_type: "array",
        parameters: &[
            Parameter {
                name: "property",
                type_name: "string",
                description: "Property name to filter",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "value",
                type_name: "string",
                description: "Value to match (optional for boolean)",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "{{ collection.products | where: 'available' }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "item_count_for_variant",
        category: FilterCategory::Cart,
        description: "Returns the total item count for a specified variant in the cart",
        syntax: Some("cart | item_count_for_variant: variant_id"),
        return_type: "number",
        parameters: &[
            Parameter {
                name: "variant_id",
                type_name: "number",
                description: "Variant ID",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "{{ cart | item_count_for_variant: 39888235757633 }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "line_items_for",
        category: FilterCategory::Cart,
        description: "Returns the subset of cart line items that include a specified product or variant",
        syntax: Some("cart | line_items_for: object"),
        return_type: "array<line_item>",
        parameters: &[
            Parameter {
                name: "object",
                type_name: "product|variant",
                description: "Product or variant object",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "{{ cart | line_items_for: product }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "highlight_active_tag",
        category: FilterCategory::Collection,
        description: "Wraps a given tag in an HTML <span> tag with class 'active' if the tag is currently active",
        syntax: Some("string | highlight_active_tag"),
        return_type: "string",
        parameters: &[],
        examples: &[
            "{{ tag | highlight_active_tag | link_to_tag: tag }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "link_to_type",
        category: FilterCategory::Collection,
        description: "Generates an HTML <a> tag linking to a collection page that lists all products of the given product type",
        syntax: Some("string | link_to_type: attributes"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "class",
                type_name: "string",
                description: "CSS class attribute",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "id",
                type_name: "string",
                description: "HTML id attribute",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "{{ 'Health' | link_to_type }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "link_to_vendor",
        category: FilterCategory::Collection,
        description: "Generates an HTML <a> tag linking to a collection page that lists all products of a given product vendor",
        syntax: Some("string | link_to_vendor: attributes"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "class",
                type_name: "string",
                description: "CSS class attribute",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "id",
                type_name: "string",
                description: "HTML id attribute",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "{{ \"Polina's Potent Potions\" | link_to_vendor }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "sort_by",
        category: FilterCategory::Collection,
        description: "Generates a collection URL with the provided sort_by parameter appended",
        syntax: Some("string | sort_by: option"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "option",
                type_name: "string",
                description: "Sort option",
                default: None,
                required: false,
                values: &[
                    "manual",
                    "best-selling",
                    "title-ascending",
                    "title-descending",
                    "price-ascending",
                    "price-descending",
                    "created-ascending",
                    "created-descending",
                ],
            },
        ],
        examples: &[
            "{{ collection.url | sort_by: 'best-selling' }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "url_for_type",
        category: FilterCategory::Collection,
        description: "Generates a URL for a collection page that lists all products of the given product type",
        syntax: Some("string | url_for_type"),
        return_type: "string",
        parameters: &[],
        examples: &[
            "{{ 'health' | url_for_type }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "url_for_vendor",
        category: FilterCategory::Collection,
        description: "Generates a URL for a collection page that lists all products from the given product vendor",
        syntax: Some("string | url_for_vendor"),
        return_type: "string",
        parameters: &[],
        examples: &[
            "{{ \"Polina's Potent Potions\" | url_for_vendor }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "within",
        category: FilterCategory::Collection,
        description: "Generates a product URL within the context of the provided collection",
        syntax: Some("string | within: collection"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "collection",
                type_name: "collection",
                description: "Collection context",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "brightness_difference",
        category: FilterCategory::Color,
        description: "Calculates the perceived brightness difference between two colors",
        syntax: Some("string | brightness_difference: color"),
        return_type: "number",
        parameters: &[
            Parameter {
                name: "color",
                type_name: "string",
                description: "Second color to compare",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "{{ '#E800B0' | brightness_difference: '#FECEE9' }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "color_brightness",
        category: FilterCategory::Color,
        description: "Calculates the perceived brightness of a given color",
        syntax: Some("string | color_brightness"),
        return_type: "number",
        parameters: &[],
        examples: &[
            "{{ '#EA5AB9' | color_brightness }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "color_contrast",
        category: FilterCategory::Color,
        description: "Calculates the contrast ratio between two colors and returns the ratio's numerator",
        syntax: Some("string | color_contrast: color"),
        return_type: "number",
        parameters: &[
            Parameter {
                name: "color",
                type_name: "string",
                description: "Second color to compare",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "color_darken",
        category: FilterCategory::Color,
        description: "Darkens a given color by a specific percentage",
        syntax: Some("string | color_darken: percentage"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "percentage",
                type_name: "number",
                description: "Percentage to darken (0-100)",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "color_desaturate",
        category: FilterCategory::Color,
        description: "Desaturates a given color by a specific percentage",
        syntax: Some("string | color_desaturate: percentage"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "percentage",
                type_name: "number",
                description: "Percentage to desaturate (0-100)",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "color_difference",
        category: FilterCategory::Color,
        description: "Calculates the color difference between two colors",
        syntax: Some("string | color_difference: color"),
        return_type: "number",
        parameters: &[
            Parameter {
                name: "color",
                type_name: "string",
                description: "Second color to compare",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "color_extract",
        category: FilterCategory::Color,
        description: "Extracts a specific color component from a given color",
        syntax: Some("string | color_extract: component"),
        return_type: "number",
        parameters: &[
            Parameter {
                name: "component",
                type_name: "string",
                description: "Color component",
                default: None,
                required: false,
                values: &[
                    "alpha",
                    "red",
                    "green",
                    "blue",
                    "hue",
                    "saturation",
                    "lightness",
                ],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "color_lighten",
        category: FilterCategory::Color,
        description: "Lightens a given color by a specific percentage",
        syntax: Some("string | color_lighten: percentage"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "percentage",
                type_name: "number",
                description: "Percentage to lighten (0-100)",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "color_mix",
        category: FilterCategory::Color,
        description: "Blends two colors together by a specific percentage factor",
        syntax: Some("string | color_mix: color, percentage"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "color",
                type_name: "string",
                description: "Color to mix with",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "percentage",
                type_name: "number",
                description: "Blend percentage (0-100)",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "color_modify",
        category: FilterCategory::Color,
        description: "Modifies a specific color component of a given color by a specific amount",
        syntax: Some("string | color_modify: component, value"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "component",
                type_name: "string",
                description: "Color component",
                default: None,
                required: false,
                values: &[
                    "red",
                    "green",
                    "blue",
                    "alpha",
                    "hue",
                    "saturation",
                    "lightness",
                ],
            },
            Parameter {
                name: "value",
                type_name: "number",
                description: "Modification value",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "color_saturate",
        category: FilterCategory::Color,
        description: "Saturates a given color by a specific percentage",
        syntax: Some("string | color_saturate: percentage"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "percentage",
                type_name: "number",
                description: "Percentage to saturate (0-100)",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "color_to_hex",
        category: FilterCategory::Color,
        description: "Converts a CSS color string to hexadecimal format (hex6)",
        syntax: Some("string | color_to_hex"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "color_to_hsl",
        category: FilterCategory::Color,
        description: "Converts a CSS color string to HSL format",
        syntax: Some("string | color_to_hsl"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "color_to_oklch",
        category: FilterCategory::Color,
        description: "Converts a CSS color string to OKLCH format",
        syntax: Some("string | color_to_oklch"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "color_to_rgb",
        category: FilterCategory::Color,
        description: "Converts a CSS color string to RGB format",
        syntax: Some("string | color_to_rgb"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "hex_to_rgba",
        category: FilterCategory::Color,
        description: "Converts a CSS color string from hexadecimal format to RGBA format",
        syntax: Some("string | hex_to_rgba: alpha"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "alpha",
                type_name: "number",
                description: "Alpha value (0.0-1.0)",
                default: Some("1.0"),
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: true,
    },
    FilterDefinition {
        name: "avatar",
        category: FilterCategory::Customer,
        description: "Generates HTML to render a customer's avatar, if available",
        syntax: Some("customer | avatar"),
        return_type: "string",
        parameters: &[],
        examples: &[
            "{{ customer | avatar }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "customer_login_link",
        category: FilterCategory::Customer,
        description: "Generates an HTML link to the customer login page",
        syntax: Some("string | customer_login_link"),
        return_type: "string",
        parameters: &[],
        examples: &[
            "{{ 'Log in' | customer_login_link }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "customer_logout_link",
        category: FilterCategory::Customer,
        description: "Generates an HTML link to log the customer out of their account",
        syntax: Some("string | customer_logout_link"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "customer_register_link",
        category: FilterCategory::Customer,
        description: "Generates an HTML link to the customer registration page",
        syntax: Some("string | customer_register_link"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "login_button",
        category: FilterCategory::Customer,
        description: "Generates an HTML Button that enables a customer to sign in to the storefront using their Shop account",
        syntax: Some("shop | login_button: action"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "action",
                type_name: "string",
                description: "Button behavior",
                default: Some("default"),
                required: false,
                values: &[
                    "default",
                    "follow",
                ],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "default",
        category: FilterCategory::Default,
        description: "Sets a default value for any variable whose value is empty, false, or nil",
        syntax: Some("variable | default: value, allow_false: boolean"),
        return_type: "any",
        parameters: &[
            Parameter {
                name: "value",
                type_name: "any",
                description: "Default value",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "allow_false",
                type_name: "boolean",
                description: "Allow false values",
                default: Some("false"),
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "{{ product.selected_variant.url | default: product.url }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "default_errors",
        category: FilterCategory::Default,
        description: "Generates default error messages for each possible value of form.errors",
        syntax: Some("string | default_errors"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "default_pagination",
        category: FilterCategory::Default,
        description: "Generates HTML for a set of links for paginated results",
        syntax: Some("paginate | default_pagination: previous, next, anchor"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "previous",
                type_name: "string",
                description: "Previous page link text",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "next",
                type_name: "string",
                description: "Next page link text",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "anchor",
                type_name: "string",
                description: "Anchor to add to pagination links",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "font_face",
        category: FilterCategory::Font,
        description: "Generates a CSS @font-face declaration to load the provided font",
        syntax: Some("font | font_face: font_display"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "font_display",
                type_name: "string",
                description: "Font display property",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "{{ settings.type_header_font | font_face }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "font_modify",
        category: FilterCategory::Font,
        description: "Modifies a specific property of a given font",
        syntax: Some("font | font_modify: property, value"),
        return_type: "font",
        parameters: &[
            Parameter {
                name: "property",
                type_name: "string",
                description: "Font property",
                default: None,
                required: false,
                values: &[
                    "style",
                    "weight",
                ],
            },
            Parameter {
                name: "value",
                type_name: "string",
                description: "Property value",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "font_url",
        category: FilterCategory::Font,
        description: "Returns the CDN URL for the provided font in woff2 format",
        syntax: Some("font | font_url: format"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "format",
                type_name: "string",
                description: "Font format",
                default: Some("woff2"),
                required: false,
                values: &[
                    "woff",
                    "woff2",
                ],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "date",
        category: FilterCategory::Format,
        description: "Converts a timestamp into another date format",
        syntax: Some("string | date: format"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "format",
                type_name: "string",
                description: "Date format string or locale format",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "{{ article.created_at | date: '%B %d, %Y' }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "json",
        category: FilterCategory::Format,
        description: "Converts a string or object into JSON format",
        syntax: Some("object | json"),
        return_type: "string",
        parameters: &[],
        examples: &[
            "{{ product | json }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "structured_data",
        category: FilterCategory::Format,
        description: "Converts an object into a schema.org structured data format",
        syntax: Some("object | structured_data"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "unit_price_with_measurement",
        category: FilterCategory::Format,
        description: "Formats a given unit price and measurement based on the store's HTML without currency setting",
        syntax: Some("variant | unit_price_with_measurement: formatted_unit_price"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "formatted_unit_price",
                type_name: "string",
                description: "Formatted unit price using money filters",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "weight_with_unit",
        category: FilterCategory::Format,
        description: "Generates a formatted weight for a variant object",
        syntax: Some("variant | weight_with_unit: unit"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "unit",
                type_name: "string",
                description: "Override default unit",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "class_list",
        category: FilterCategory::Html,
        description: "Generates the list of style classes for a style setting or a collection of settings",
        syntax: Some("settings.layout | class_list"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "highlight",
        category: FilterCategory::Html,
        description: "Wraps all instances of a specific string with an HTML <strong> tag with class 'highlight'",
        syntax: Some("string | highlight: search_terms"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "search_terms",
                type_name: "string",
                description: "Terms to highlight",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "{{ item.description | highlight: search.terms }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "inline_asset_content",
        category: FilterCategory::Html,
        description: "Outputs the content of an asset inline in the template",
        syntax: Some("asset_url | inline_asset_content"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "link_to",
        category: FilterCategory::Html,
        description: "Generates an HTML <a> tag",
        syntax: Some("string | link_to: url, attributes"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "url",
                type_name: "string",
                description: "Link URL",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "class",
                type_name: "string",
                description: "CSS class",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "id",
                type_name: "string",
                description: "HTML id",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "title",
                type_name: "string",
                description: "Title attribute",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "placeholder_svg_tag",
        category: FilterCategory::Html,
        description: "Generates an HTML <svg> tag for a given placeholder name",
        syntax: Some("string | placeholder_svg_tag: class"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "class",
                type_name: "string",
                description: "CSS class for svg tag",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "placeholder",
                type_name: "string",
                description: "Placeholder name",
                default: None,
                required: false,
                values: &[
                    "product-1",
                    "product-2",
                    "product-3",
                    "product-4",
                    "product-5",
                    "product-6",
                    "collection-1",
                    "collection-2",
                    "collection-3",
                    "collection-4",
                    "collection-5",
                    "collection-6",
                    "lifestyle-1",
                    "lifestyle-2",
                    "image",
                ],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "preload_tag",
        category: FilterCategory::Html,
        description: "Generates an HTML <link> tag with rel='preload' to prioritize loading a Shopify-hosted asset",
        syntax: Some("asset_url | preload_tag: as, attributes"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "as",
                type_name: "string",
                description: "Resource type (style, script, font, etc.)",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "crossorigin",
                type_name: "string",
                description: "CORS setting",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "script_tag",
        category: FilterCategory::Html,
        description: "Generates an HTML <script> tag for a given resource URL",
        syntax: Some("asset_url | script_tag"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "stylesheet_tag",
        category: FilterCategory::Html,
        description: "Generates an HTML <link> tag for a given resource URL",
        syntax: Some("asset_url | stylesheet_tag: preload"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "preload",
                type_name: "boolean",
                description: "Whether to preload the stylesheet",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "time_tag",
        category: FilterCategory::Html,
        description: "Converts a timestamp into an HTML <time> tag",
        syntax: Some("timestamp | time_tag: format, datetime"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "format",
                type_name: "string",
                description: "Date format",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "datetime",
                type_name: "string",
                description: "Custom datetime attribute format",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "asset_img_url",
        category: FilterCategory::HostedFile,
        description: "Returns the CDN URL for an image in the assets directory of a theme",
        syntax: Some("string | asset_img_url: size"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "size",
                type_name: "string",
                description: "Image size",
                default: Some("small"),
                required: false,
                values: &[
                    "pico",
                    "icon",
                    "thumb",
                    "small",
                    "compact",
                    "medium",
                    "large",
                    "grande",
                    "master",
                ],
            },
        ],
        examples: &[
            "{{ 'red-and-black-bramble-berries.jpg' | asset_img_url }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "asset_url",
        category: FilterCategory::HostedFile,
        description: "Returns the CDN URL for a file in the assets directory of a theme",
        syntax: Some("string | asset_url"),
        return_type: "string",
        parameters: &[],
        examples: &[
            "{{ 'cart.js' | asset_url }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "file_img_url",
        category: FilterCategory::HostedFile,
        description: "Returns the CDN URL for an image from the Files page of the Shopify admin",
        syntax: Some("file | file_img_url: size"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "size",
                type_name: "string",
                description: "Image size",
                default: Some("small"),
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "file_url",
        category: FilterCategory::HostedFile,
        description: "Returns the CDN URL for a file from the Files page of the Shopify admin",
        syntax: Some("file | file_url"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "global_asset_url",
        category: FilterCategory::HostedFile,
        description: "Returns the CDN URL for a global asset",
        syntax: Some("string | global_asset_url"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "shopify_asset_url",
        category: FilterCategory::HostedFile,
        description: "Returns the CDN URL for a globally accessible Shopify asset",
        syntax: Some("string | shopify_asset_url"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "currency_selector",
        category: FilterCategory::Localization,
        description: "Generates an HTML <select> element with an option for each currency available on the store",
        syntax: Some("form | currency_selector: class, id"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "class",
                type_name: "string",
                description: "CSS class for select element",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "id",
                type_name: "string",
                description: "HTML id for select element",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: true,
    },
    FilterDefinition {
        name: "format_address",
        category: FilterCategory::Localization,
        description: "Generates an HTML address display, with each address component ordered according to the address's locale",
        syntax: Some("address | format_address"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "translate",
        category: FilterCategory::Localization,
        description: "Returns a string of translated text for a given translation key from a locale file. Alias: t",
        syntax: Some("string | translate: variables"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "variables",
                type_name: "object",
                description: "Variables for translation interpolation",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "t",
        category: FilterCategory::Localization,
        description: "Alias for translate filter. Returns translated text for a given translation key",
        syntax: Some("string | t: variables"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "variables",
                type_name: "object",
                description: "Variables for translation interpolation",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "abs",
        category: FilterCategory::Math,
        description: "Returns the absolute value of a number",
        syntax: Some("number | abs"),
        return_type: "number",
        parameters: &[],
        examples: &[
            "{{ -3 | abs }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "at_least",
        category: FilterCategory::Math,
        description: "Limits a number to a minimum value",
        syntax: Some("number | at_least: minimum"),
        return_type: "number",
        parameters: &[
            Parameter {
                name: "minimum",
                type_name: "number",
                description: "Minimum value",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "{{ 4 | at_least: 5 }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "at_most",
        category: FilterCategory::Math,
        description: "Limits a number to a maximum value",
        syntax: Some("number | at_most: maximum"),
        return_type: "number",
        parameters: &[
            Parameter {
                name: "maximum",
                type_name: "number",
                description: "Maximum value",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "{{ 6 | at_most: 5 }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "ceil",
        category: FilterCategory::Math,
        description: "Rounds a number up to the nearest integer",
        syntax: Some("number | ceil"),
        return_type: "number",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "divided_by",
        category: FilterCategory::Math,
        description: "Divides a number by a given number",
        syntax: Some("number | divided_by: divisor"),
        return_type: "number",
        parameters: &[
            Parameter {
                name: "divisor",
                type_name: "number",
                description: "Number to divide by",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "floor",
        category: FilterCategory::Math,
        description: "Rounds a number down to the nearest integer",
        syntax: Some("number | floor"),
        return_type: "number",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "minus",
        category: FilterCategory::Math,
        description: "Subtracts a given number from another number",
        syntax: Some("number | minus: subtrahend"),
        return_type: "number",
        parameters: &[
            Parameter {
                name: "subtrahend",
                type_name: "number",
                description: "Number to subtract",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "modulo",
        category: FilterCategory::Math,
        description: "Returns the remainder of dividing a number by a given number",
        syntax: Some("number | modulo: divisor"),
        return_type: "number",
        parameters: &[
            Parameter {
                name: "divisor",
                type_name: "number",
                description: "Number to divide by",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "plus",
        category: FilterCategory::Math,
        description: "Adds two numbers",
        syntax: Some("number | plus: addend"),
        return_type: "number",
        parameters: &[
            Parameter {
                name: "addend",
                type_name: "number",
                description: "Number to add",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "round",
        category: FilterCategory::Math,
        description: "Rounds a number to the nearest integer or specified decimal places",
        syntax: Some("number | round: decimal_places"),
        return_type: "number",
        parameters: &[
            Parameter {
                name: "decimal_places",
                type_name: "number",
                description: "Number of decimal places",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "times",
        category: FilterCategory::Math,
        description: "Multiplies a number by a given number",
        syntax: Some("number | times: multiplier"),
        return_type: "number",
        parameters: &[
            Parameter {
                name: "multiplier",
                type_name: "number",
                description: "Number to multiply by",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "article_img_url",
        category: FilterCategory::Media,
        description: "Returns the CDN URL for an article's image",
        syntax: Some("article.image | article_img_url: size"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "size",
                type_name: "string",
                description: "Image size",
                default: Some("small"),
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: true,
    },
    FilterDefinition {
        name: "collection_img_url",
        category: FilterCategory::Media,
        description: "Returns the CDN URL for a collection's image",
        syntax: Some("collection.image | collection_img_url: size"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "size",
                type_name: "string",
                description: "Image size",
                default: Some("small"),
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: true,
    },
    FilterDefinition {
        name: "external_video_tag",
        category: FilterCategory::Media,
        description: "Generates an HTML <iframe> tag containing the player for a given external video",
        syntax: Some("external_video | external_video_tag: attributes"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "class",
                type_name: "string",
                description: "CSS class",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "width",
                type_name: "number",
                description: "Video width",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "height",
                type_name: "number",
                description: "Video height",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "external_video_url",
        category: FilterCategory::Media,
        description: "Returns the URL for a given external video with specified parameters",
        syntax: Some("external_video | external_video_url: parameters"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "image_tag",
        category: FilterCategory::Media,
        description: "Generates an HTML <img> tag for a given image_url",
        syntax: Some("image_url | image_tag: attributes"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "width",
                type_name: "number",
                description: "Image width",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "height",
                type_name: "number",
                description: "Image height",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "alt",
                type_name: "string",
                description: "Alt text",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "class",
                type_name: "string",
                description: "CSS class",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "sizes",
                type_name: "string",
                description: "Responsive sizes attribute",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "widths",
                type_name: "string",
                description: "Comma-separated list of widths for srcset",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "preload",
                type_name: "boolean",
                description: "Whether to preload the image",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "loading",
                type_name: "string",
                description: "Loading attribute (lazy/eager)",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "image_url",
        category: FilterCategory::Media,
        description: "Returns the CDN URL for an image",
        syntax: Some("image | image_url: width, height, crop, format, pad_color"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "width",
                type_name: "number",
                description: "Image width (max 5760px)",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "height",
                type_name: "number",
                description: "Image height (max 5760px)",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "crop",
                type_name: "string",
                description: "Crop position",
                default: Some("center"),
                required: false,
                values: &[
                    "top",
                    "center",
                    "bottom",
                    "left",
                    "right",
                    "region",
                ],
            },
            Parameter {
                name: "format",
                type_name: "string",
                description: "File format",
                default: None,
                required: false,
                values: &[
                    "jpg",
                    "pjpg",
                ],
            },
            Parameter {
                name: "pad_color",
                type_name: "string",
                description: "Hex color for padding",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "img_tag",
        category: FilterCategory::Media,
        description: "Generates an HTML <img> tag for a given image URL",
        syntax: Some("image | img_tag: alt, class, size"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "alt",
                type_name: "string",
                description: "Alt text",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "class",
                type_name: "string",
                description: "CSS class",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "size",
                type_name: "string",
                description: "Image size",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: true,
    },
    FilterDefinition {
        name: "img_url",
        category: FilterCategory::Media,
        description: "Returns the CDN URL for an image",
        syntax: Some("image | img_url: size, crop, format, scale"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "size",
                type_name: "string",
                description: "Image size",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "crop",
                type_name: "string",
                description: "Crop position",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "format",
                type_name: "string",
                description: "File format",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "scale",
                type_name: "number",
                description: "Pixel density (2 or 3)",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: true,
    },
    FilterDefinition {
        name: "media_tag",
        category: FilterCategory::Media,
        description: "Generates an appropriate HTML tag for a given media object",
        syntax: Some("media | media_tag: image_size"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "image_size",
                type_name: "string",
                description: "Dimensions of media's poster image",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "model_viewer_tag",
        category: FilterCategory::Media,
        description: "Generates a Google model viewer component for a given 3D model",
        syntax: Some("model | model_viewer_tag: image_size, attributes"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "image_size",
                type_name: "string",
                description: "Dimensions of model's poster image",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "product_img_url",
        category: FilterCategory::Media,
        description: "Returns the CDN URL for a product image",
        syntax: Some("product_image | product_img_url: size"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "size",
                type_name: "string",
                description: "Image size",
                default: Some("small"),
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: true,
    },
    FilterDefinition {
        name: "video_tag",
        category: FilterCategory::Media,
        description: "Generates an HTML <video> tag for a given video",
        syntax: Some("video | video_tag: attributes"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "image_size",
                type_name: "string",
                description: "Dimensions of video's poster image",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "autoplay",
                type_name: "boolean",
                description: "Auto-play video",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "loop",
                type_name: "boolean",
                description: "Loop video",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "muted",
                type_name: "boolean",
                description: "Mute video audio",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "controls",
                type_name: "boolean",
                description: "Show video controls",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "metafield_tag",
        category: FilterCategory::Metafield,
        description: "Generates an HTML element to host the metafield data",
        syntax: Some("metafield | metafield_tag: field, list_format"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "field",
                type_name: "string",
                description: "Field to render for metaobject references",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "list_format",
                type_name: "string",
                description: "List format",
                default: Some("unordered"),
                required: false,
                values: &[
                    "unordered",
                    "ordered",
                ],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "metafield_text",
        category: FilterCategory::Metafield,
        description: "Generates a text version of the metafield data",
        syntax: Some("metafield | metafield_text: field"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "field",
                type_name: "string",
                description: "Field to render for metaobject references",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "money",
        category: FilterCategory::Money,
        description: "Formats a given price based on the store's HTML without currency setting",
        syntax: Some("number | money"),
        return_type: "string",
        parameters: &[],
        examples: &[
            "{{ product.price | money }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "money_with_currency",
        category: FilterCategory::Money,
        description: "Formats a given price based on the store's HTML with currency setting",
        syntax: Some("number | money_with_currency"),
        return_type: "string",
        parameters: &[],
        examples: &[
            "{{ product.price | money_with_currency }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "money_without_currency",
        category: FilterCategory::Money,
        description: "Formats a given price based on the store's HTML without currency setting, without the currency symbol",
        syntax: Some("number | money_without_currency"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "money_without_trailing_zeros",
        category: FilterCategory::Money,
        description: "Formats a given price excluding the decimal separator and trailing zeros",
        syntax: Some("number | money_without_trailing_zeros"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "payment_button",
        category: FilterCategory::Payment,
        description: "Generates an HTML container to host accelerated checkout buttons for a product",
        syntax: Some("form | payment_button"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "payment_terms",
        category: FilterCategory::Payment,
        description: "Generates the HTML for the Shop Pay Installments banner",
        syntax: Some("form | payment_terms"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "payment_type_img_url",
        category: FilterCategory::Payment,
        description: "Returns the URL for an SVG image of a given payment type",
        syntax: Some("payment_type | payment_type_img_url"),
        return_type: "string",
        parameters: &[],
        examples: &[
            "{{ type | payment_type_img_url }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "payment_type_svg_tag",
        category: FilterCategory::Payment,
        description: "Generates an HTML <svg> tag for a given payment type",
        syntax: Some("payment_type | payment_type_svg_tag"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "append",
        category: FilterCategory::String,
        description: "Adds a given string to the end of a string",
        syntax: Some("string | append: suffix"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "suffix",
                type_name: "string",
                description: "String to append",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "{{ request.origin | append: product.url }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "base64_decode",
        category: FilterCategory::String,
        description: "Decodes a string in Base64 format",
        syntax: Some("string | base64_decode"),
        return_type: "string",
        parameters: &[],
        examples: &[
            "{{ 'b25lIHR3byB0aHJlZQ==' | base64_decode }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "base64_encode",
        category: FilterCategory::String,
        description: "Encodes a string to Base64 format",
        syntax: Some("string | base64_encode"),
        return_type: "string",
        parameters: &[],
        examples: &[
            "{{ 'one two three' | base64_encode }}",
        ],
        deprecated: false,
    },
    FilterDefinition {
        name: "base64_url_safe_decode",
        category: FilterCategory::String,
        description: "Decodes a string in URL-safe Base64 format",
        syntax: Some("string | base64_url_safe_decode"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "base64_url_safe_encode",
        category: FilterCategory::String,
        description: "Encodes a string to URL-safe Base64 format",
        syntax: Some("string | base64_url_safe_encode"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "camelize",
        category: FilterCategory::String,
        description: "Converts a string to CamelCase",
        syntax: Some("string | camelize"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "capitalize",
        category: FilterCategory::String,
        description: "Capitalizes the first word in a string and downcases the remaining characters",
        syntax: Some("string | capitalize"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "downcase",
        category: FilterCategory::String,
        description: "Converts a string to all lowercase characters",
        syntax: Some("string | downcase"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "escape",
        category: FilterCategory::String,
        description: "Escapes special characters in HTML",
        syntax: Some("string | escape"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "escape_once",
        category: FilterCategory::String,
        description: "Escapes a string without changing characters that have already been escaped",
        syntax: Some("string | escape_once"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "handleize",
        category: FilterCategory::String,
        description: "Converts a string into a handle",
        syntax: Some("string | handleize"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "handle",
        category: FilterCategory::String,
        description: "Alias for handleize filter. Converts a string into a handle",
        syntax: Some("string | handle"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "hmac_sha1",
        category: FilterCategory::String,
        description: "Converts a string into an SHA-1 hash using HMAC",
        syntax: Some("string | hmac_sha1: secret_key"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "secret_key",
                type_name: "string",
                description: "Secret key for HMAC",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "hmac_sha256",
        category: FilterCategory::String,
        description: "Converts a string into an SHA-256 hash using HMAC",
        syntax: Some("string | hmac_sha256: secret_key"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "secret_key",
                type_name: "string",
                description: "Secret key for HMAC",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "lstrip",
        category: FilterCategory::String,
        description: "Strips all whitespace from the left of a string",
        syntax: Some("string | lstrip"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "md5",
        category: FilterCategory::String,
        description: "Converts a string into an MD5 hash",
        syntax: Some("string | md5"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "newline_to_br",
        category: FilterCategory::String,
        description: "Converts newlines (\\n) in a string to HTML line breaks (<br>)",
        syntax: Some("string | newline_to_br"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "pluralize",
        category: FilterCategory::String,
        description: "Outputs the singular or plural version of a string based on a given number",
        syntax: Some("number | pluralize: singular, plural"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "singular",
                type_name: "string",
                description: "Singular form",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "plural",
                type_name: "string",
                description: "Plural form",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "prepend",
        category: FilterCategory::String,
        description: "Adds a given string to the beginning of a string",
        syntax: Some("string | prepend: prefix"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "prefix",
                type_name: "string",
                description: "String to prepend",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "remove",
        category: FilterCategory::String,
        description: "Removes any instance of a substring inside a string",
        syntax: Some("string | remove: substring"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "substring",
                type_name: "string",
                description: "Substring to remove",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "remove_first",
        category: FilterCategory::String,
        description: "Removes the first instance of a substring inside a string",
        syntax: Some("string | remove_first: substring"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "substring",
                type_name: "string",
                description: "Substring to remove",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "remove_last",
        category: FilterCategory::String,
        description: "Removes the last instance of a substring inside a string",
        syntax: Some("string | remove_last: substring"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "substring",
                type_name: "string",
                description: "Substring to remove",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "replace",
        category: FilterCategory::String,
        description: "Replaces any instance of a substring inside a string with a given string",
        syntax: Some("string | replace: search, replacement"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "search",
                type_name: "string",
                description: "String to search for",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "replacement",
                type_name: "string",
                description: "Replacement string",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "replace_first",
        category: FilterCategory::String,
        description: "Replaces the first instance of a substring inside a string with a given string",
        syntax: Some("string | replace_first: search, replacement"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "search",
                type_name: "string",
                description: "String to search for",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "replacement",
                type_name: "string",
                description: "Replacement string",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "replace_last",
        category: FilterCategory::String,
        description: "Replaces the last instance of a substring inside a string with a given string",
        syntax: Some("string | replace_last: search, replacement"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "search",
                type_name: "string",
                description: "String to search for",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "replacement",
                type_name: "string",
                description: "Replacement string",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "rstrip",
        category: FilterCategory::String,
        description: "Strips all whitespace from the right of a string",
        syntax: Some("string | rstrip"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "sha1",
        category: FilterCategory::String,
        description: "Converts a string into an SHA-1 hash",
        syntax: Some("string | sha1"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "sha256",
        category: FilterCategory::String,
        description: "Converts a string into an SHA-256 hash",
        syntax: Some("string | sha256"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "slice",
        category: FilterCategory::String,
        description: "Returns a substring or series of array items, starting at a given 0-based index",
        syntax: Some("string | slice: start, length"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "start",
                type_name: "number",
                description: "Starting index (0-based)",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "length",
                type_name: "number",
                description: "Number of characters (default: 1)",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "split",
        category: FilterCategory::String,
        description: "Splits a string into an array of substrings based on a given separator",
        syntax: Some("string | split: separator"),
        return_type: "array<string>",
        parameters: &[
            Parameter {
                name: "separator",
                type_name: "string",
                description: "String separator",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "strip",
        category: FilterCategory::String,
        description: "Strips all whitespace from the left and right of a string",
        syntax: Some("string | strip"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "strip_html",
        category: FilterCategory::String,
        description: "Strips all HTML tags from a string",
        syntax: Some("string | strip_html"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "strip_newlines",
        category: FilterCategory::String,
        description: "Strips all newline characters (line breaks) from a string",
        syntax: Some("string | strip_newlines"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "truncate",
        category: FilterCategory::String,
        description: "Truncates a string down to a given number of characters",
        syntax: Some("string | truncate: length, ellipsis"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "length",
                type_name: "number",
                description: "Maximum number of characters",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "ellipsis",
                type_name: "string",
                description: "Custom ellipsis",
                default: Some("..."),
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "truncatewords",
        category: FilterCategory::String,
        description: "Truncates a string down to a given number of words",
        syntax: Some("string | truncatewords: words, ellipsis"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "words",
                type_name: "number",
                description: "Maximum number of words",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "ellipsis",
                type_name: "string",
                description: "Custom ellipsis",
                default: Some("..."),
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "upcase",
        category: FilterCategory::String,
        description: "Converts a string to all uppercase characters",
        syntax: Some("string | upcase"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "url_decode",
        category: FilterCategory::String,
        description: "Decodes any percent-encoded characters in a string",
        syntax: Some("string | url_decode"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "url_encode",
        category: FilterCategory::String,
        description: "Converts any URL-unsafe characters in a string to the percent-encoded equivalent",
        syntax: Some("string | url_encode"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "url_escape",
        category: FilterCategory::String,
        description: "Escapes any URL-unsafe characters in a string",
        syntax: Some("string | url_escape"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "url_param_escape",
        category: FilterCategory::String,
        description: "Escapes any characters in a string that are unsafe for URL parameters",
        syntax: Some("string | url_param_escape"),
        return_type: "string",
        parameters: &[],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "link_to_add_tag",
        category: FilterCategory::Tag,
        description: "Generates an HTML <a> tag linking to the current blog or collection, filtered to show only articles or products that have a given tag",
        syntax: Some("string | link_to_add_tag: tag"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "tag",
                type_name: "string",
                description: "Tag to add",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "link_to_remove_tag",
        category: FilterCategory::Tag,
        description: "Generates an HTML <a> tag linking to the current blog or collection, filtered to show articles or products that have any currently active tags, except the provided tag",
        syntax: Some("string | link_to_remove_tag: tag"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "tag",
                type_name: "string",
                description: "Tag to remove",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
    FilterDefinition {
        name: "link_to_tag",
        category: FilterCategory::Tag,
        description: "Generates an HTML <a> tag linking to the current blog or collection, filtered to show only articles or products that have a given tag",
        syntax: Some("string | link_to_tag: tag"),
        return_type: "string",
        parameters: &[
            Parameter {
                name: "tag",
                type_name: "string",
                description: "Tag to link to",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[],
        deprecated: false,
    },
];
