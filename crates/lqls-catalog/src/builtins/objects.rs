//! Global objects available to Shopify theme templates.

use crate::objects::ObjectDefinition;

pub(crate) static OBJECTS: &[ObjectDefinition] = &[
    ObjectDefinition {
        name: "additional_checkout_buttons",
        type_name: "AdditionalCheckoutButtons",
        description: "Returns true if a store has any payment providers with offsite checkouts, such as PayPal Express Checkout.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "address",
        type_name: "Address",
        description: "An address, such as a customer address or order shipping address.",
        deprecated: false,
        properties: &[
            property!("address1", "string", "First line of the address"),
            property!("address2", "string", "Second line of the address"),
            property!("city", "string", "City name"),
            property!("company", "string", "Company name"),
            property!("country", "country", "Country object"),
            property!("country_code", "string", "Country code"),
            property!("first_name", "string", "First name"),
            property!("id", "number", "Unique identifier"),
            property!("last_name", "string", "Last name"),
            property!("name", "string", "Full name"),
            property!("phone", "string", "Phone number"),
            property!("province", "string", "Province/state name"),
            property!("province_code", "string", "Province/state code"),
            property!("street", "string", "Complete street address"),
            property!("summary", "string", "Full formatted address"),
            property!("url", "string", "URL to manage this address"),
            property!("zip", "string", "Postal/ZIP code"),
        ],
    },
    ObjectDefinition {
        name: "all_country_option_tags",
        type_name: "AllCountryOptionTags",
        description: "Creates an <option> tag for each country with data-provinces attribute containing JSON-encoded array of subregions.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "all_products",
        type_name: "AllProducts",
        description: "All of the products on a store. Limited to 20 unique handles per page.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "app",
        type_name: "App",
        description: "An app object, usually used to access app-specific information for theme app extensions.",
        deprecated: false,
        properties: &[
            property!("metafields", "metafields", "The metafields owned by the app"),
        ],
    },
    ObjectDefinition {
        name: "article",
        type_name: "Article",
        description: "An article or blog post in a blog.",
        deprecated: false,
        properties: &[
            property!("author", "string", "Author name"),
            property!("comment_post_url", "string", "URL for posting comments"),
            property!("comments", "array<comment>", "Article comments"),
            property!("comments_count", "number", "Number of comments"),
            property!("comments_enabled", "boolean", "Whether comments are enabled"),
            property!("content", "string", "Full article content"),
            property!("created_at", "string", "Creation timestamp"),
            property!("excerpt", "string", "Article excerpt"),
            property!("excerpt_or_content", "string", "Excerpt if available, otherwise content"),
            property!("handle", "string", "URL handle"),
            property!("id", "string", "Unique identifier"),
            property!("image", "image", "Featured image"),
            property!("metafields", "metafields", "Associated metafields"),
            property!("moderated", "boolean", "Whether comments are moderated"),
            property!("published_at", "string", "Publication timestamp"),
            property!("tags", "array<string>", "Article tags"),
            property!("template_suffix", "string", "Template suffix"),
            property!("title", "string", "Article title"),
            property!("updated_at", "string", "Last update timestamp"),
            property!("url", "string", "Article URL"),
            property!("user", "user", "Author user object"),
        ],
    },
    ObjectDefinition {
        name: "articles",
        type_name: "Articles",
        description: "All articles across all blogs in the store.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "block",
        type_name: "Block",
        description: "Content and settings of a section block.",
        deprecated: false,
        properties: &[
            property!("id", "string", "Block identifier"),
            property!("settings", "object", "Block settings"),
            property!("shopify_attributes", "string", "Shopify editor attributes"),
            property!("type", "string", "Block type"),
        ],
    },
    ObjectDefinition {
        name: "blog",
        type_name: "Blog",
        description: "Information about a specific blog in the store.",
        deprecated: false,
        properties: &[
            property!("all_tags", "array<string>", "All tags used in blog"),
            property!("articles", "array<article>", "Blog articles"),
            property!("articles_count", "number", "Total number of articles"),
            property!("comments_enabled", "boolean", "Whether comments are enabled"),
            property!("handle", "string", "Blog handle"),
            property!("id", "number", "Unique identifier"),
            property!("metafields", "array<metafield>", "Associated metafields"),
            property!("moderated", "boolean", "Whether comments are moderated"),
            property!("next_article", "article", "Next article"),
            property!("previous_article", "article", "Previous article"),
            property!("tags", "array<string>", "Currently filtered tags"),
            property!("template_suffix", "string", "Template suffix"),
            property!("title", "string", "Blog title"),
            property!("url", "string", "Blog URL"),
        ],
    },
    ObjectDefinition {
        name: "blogs",
        type_name: "Blogs",
        description: "All blogs in the store.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "brand",
        type_name: "Brand",
        description: "Brand assets for the store.",
        deprecated: false,
        properties: &[
            property!("colors", "brand_color", "Brand colors"),
            property!("cover_image", "image", "Cover image"),
            property!("favicon_url", "image", "Favicon URL"),
            property!("logo", "image", "Brand logo"),
            property!("metafields", "metafields", "Associated metafields"),
            property!("short_description", "string", "Brand description"),
            property!("slogan", "string", "Brand slogan"),
            property!("square_logo", "image", "Square logo"),
        ],
    },
    ObjectDefinition {
        name: "brand_color",
        type_name: "BrandColor",
        description: "Colors defined as part of store's brand assets.",
        deprecated: false,
        properties: &[
            property!("alpha", "number", "Alpha transparency"),
            property!("blue", "number", "Blue value"),
            property!("chroma", "number", "Chroma value"),
            property!("color_space", "string", "Color space"),
            property!("green", "number", "Green value"),
            property!("hue", "number", "Hue value"),
            property!("lightness", "number", "Lightness value"),
            property!("oklch", "string", "OKLCH color string"),
            property!("oklcha", "string", "OKLCHA color string"),
            property!("red", "number", "Red value"),
            property!("rgb", "string", "RGB color string"),
            property!("rgba", "string", "RGBA color string"),
            property!("saturation", "number", "Saturation value"),
        ],
    },
    ObjectDefinition {
        name: "canonical_url",
        type_name: "CanonicalUrl",
        description: "The canonical URL for the current page.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "cart",
        type_name: "Cart",
        description: "A customer's cart.",
        deprecated: false,
        properties: &[
            property!("attributes", "object", "Cart attributes"),
            property!("cart_level_discount_applications", "array<discount_application>", "Cart-level discounts"),
            property!("checkout_charge_amount", "number", "Checkout charge amount"),
            property!("currency", "currency", "Cart currency"),
            property!("discount_applications", "array<discount_application>", "All discount applications"),
            property!("duties_included", "boolean", "Whether duties are included"),
            property!("empty", "boolean", "Whether cart is empty"),
            property!("item_count", "number", "Number of items"),
            property!("items", "array<line_item>", "Cart items"),
            property!("items_subtotal_price", "number", "Subtotal price"),
            property!("note", "string", "Cart note"),
            property!("original_total_price", "number", "Original total before discounts"),
            property!("requires_shipping", "boolean", "Whether shipping is required"),
            property!("taxes_included", "boolean", "Whether taxes are included"),
            property!("total_discount", "number", "Total discount amount"),
            property!("total_price", "number", "Total price"),
            property!("total_weight", "number", "Total weight"),
        ],
    },
    ObjectDefinition {
        name: "checkout",
        type_name: "Checkout",
        description: "A customer's checkout. (Deprecated for most pages)",
        deprecated: false,
        properties: &[
            property!("applied_gift_cards", "array<gift_card>", "Applied gift cards"),
            property!("attributes", "object", "Checkout attributes"),
            property!("billing_address", "address", "Billing address"),
            property!("buyer_accepts_marketing", "boolean", "Marketing acceptance"),
            property!("cart_level_discount_applications", "array<discount_application>", "Cart-level discounts"),
            property!("currency", "string", "Checkout currency"),
            property!("customer", "customer", "Customer information"),
            property!("discount_applications", "array<discount_application>", "All discounts"),
            property!("discounts_amount", "array<discount_application>", "Discount amounts"),
            property!("discounts_savings", "array<discount_application>", "Discount savings"),
            property!("email", "string", "Customer email"),
            property!("gift_cards_amount", "number", "Gift card amount applied"),
            property!("id", "number", "Checkout ID"),
            property!("item_count", "number", "Number of items"),
            property!("line_items", "array<line_item>", "Checkout items"),
            property!("line_items_subtotal_price", "number", "Items subtotal"),
            property!("name", "number", "Checkout name"),
            property!("note", "string", "Checkout note"),
            property!("order", "order", "Associated order"),
            property!("order_id", "string", "Order ID"),
            property!("order_name", "string", "Order name"),
            property!("order_number", "string", "Order number"),
            property!("requires_shipping", "boolean", "Requires shipping"),
            property!("shipping_address", "address", "Shipping address"),
            property!("shipping_method", "shipping_method", "Shipping method"),
            property!("shipping_price", "number", "Shipping cost"),
            property!("tax_lines", "array<tax_line>", "Tax information"),
            property!("tax_price", "number", "Tax amount"),
            property!("total_price", "number", "Total price"),
            property!("transactions", "array<transaction>", "Payment transactions"),
        ],
    },
    ObjectDefinition {
        name: "closest",
        type_name: "Closest",
        description: "Resources of different types closest to current context.",
        deprecated: false,
        properties: &[
            property!("article", "article", "Closest article"),
            property!("blog", "blog", "Closest blog"),
            property!("collection", "collection", "Closest collection"),
            property!("metaobject", "metaobject", "Closest metaobject"),
            property!("page", "page", "Closest page"),
            property!("product", "product", "Closest product"),
        ],
    },
    ObjectDefinition {
        name: "collection",
        type_name: "Collection",
        description: "A collection in a store.",
        deprecated: false,
        properties: &[
            property!("all_products_count", "number", "Total products in collection"),
            property!("all_tags", "array<string>", "All product tags in collection"),
            property!("all_types", "array<string>", "All product types in collection"),
            property!("all_vendors", "array<string>", "All vendors in collection"),
            property!("current_type", "string", "Currently filtered type"),
            property!("current_vendor", "string", "Currently filtered vendor"),
            property!("default_sort_by", "string", "Default sort order"),
            property!("description", "string", "Collection description"),
            property!("featured_image", "image", "Featured image"),
            property!("filters", "array<filter>", "Available filters"),
            property!("handle", "string", "Collection handle"),
            property!("id", "number", "Unique identifier"),
            property!("image", "image", "Collection image"),
            property!("metafields", "array<metafield>", "Associated metafields"),
            property!("next_product", "product", "Next product in collection"),
            property!("previous_product", "product", "Previous product in collection"),
            property!("products", "array<product>", "Products in collection"),
            property!("products_count", "number", "Number of products shown"),
            property!("published_at", "string", "Publication timestamp"),
            property!("sort_by", "string", "Current sort order"),
            property!("sort_options", "array<sort_option>", "Available sort options"),
            property!("tags", "array<string>", "Currently filtered tags"),
            property!("template_suffix", "string", "Template suffix"),
            property!("title", "string", "Collection title"),
            property!("url", "string", "Collection URL"),
        ],
    },
    ObjectDefinition {
        name: "collections",
        type_name: "Collections",
        description: "All collections on a store.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "color",
        type_name: "Color",
        description: "A color from a color setting.",
        deprecated: false,
        properties: &[
            property!("alpha", "number", "Alpha transparency (0-1)"),
            property!("blue", "number", "Blue component (0-255)"),
            property!("chroma", "number", "Chroma value"),
            property!("color_space", "string", "Color space (e.g., 'srgb')"),
            property!("green", "number", "Green component (0-255)"),
            property!("hue", "number", "Hue value (0-360)"),
            property!("lightness", "number", "Lightness percentage"),
            property!("oklch", "string", "OKLCH color representation"),
            property!("oklcha", "string", "OKLCHA color representation"),
            property!("red", "number", "Red component (0-255)"),
            property!("rgb", "string", "RGB color string"),
            property!("rgba", "string", "RGBA color string"),
            property!("saturation", "number", "Saturation percentage"),
        ],
    },
    ObjectDefinition {
        name: "color_scheme",
        type_name: "ColorScheme",
        description: "A color scheme from a color_scheme setting.",
        deprecated: false,
        properties: &[
            property!("id", "string", "Color scheme ID"),
            property!("settings", "object", "Color scheme settings"),
        ],
    },
    ObjectDefinition {
        name: "color_scheme_group",
        type_name: "ColorSchemeGroup",
        description: "A color scheme group from a color_scheme_group setting.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "comment",
        type_name: "Comment",
        description: "An article comment.",
        deprecated: false,
        properties: &[
            property!("author", "string", "Comment author"),
            property!("content", "string", "Comment content"),
            property!("created_at", "string", "Creation timestamp"),
            property!("email", "string", "Author email"),
            property!("id", "number", "Comment ID"),
            property!("status", "string", "Comment status"),
            property!("updated_at", "string", "Last update timestamp"),
            property!("url", "string", "Comment URL"),
        ],
    },
    ObjectDefinition {
        name: "company",
        type_name: "Company",
        description: "A company that a customer is purchasing for (B2B).",
        deprecated: false,
        properties: &[
            property!("available_locations", "array<company_location>", "Available locations"),
            property!("available_locations_count", "number", "Number of locations"),
            property!("external_id", "string", "External identifier"),
            property!("id", "number", "Company ID"),
            property!("metafields", "array<metafield>", "Associated metafields"),
            property!("name", "string", "Company name"),
        ],
    },
    ObjectDefinition {
        name: "company_address",
        type_name: "CompanyAddress",
        description: "Address of a company location (B2B).",
        deprecated: false,
        properties: &[
            property!("address1", "string", "First address line"),
            property!("address2", "string", "Second address line"),
            property!("attention", "string", "Attention line"),
            property!("city", "string", "City"),
            property!("country", "country", "Country object"),
            property!("country_code", "string", "Country code"),
            property!("first_name", "string", "First name"),
            property!("id", "number", "Address ID"),
            property!("last_name", "string", "Last name"),
            property!("province", "string", "Province/state"),
            property!("province_code", "string", "Province code"),
            property!("street", "string", "Complete street address"),
            property!("zip", "string", "Postal code"),
        ],
    },
    ObjectDefinition {
        name: "company_location",
        type_name: "CompanyLocation",
        description: "A location of the company for B2B purchases.",
        deprecated: false,
        properties: &[
            property!("company", "company", "Parent company"),
            property!("current", "boolean", "Whether this is current location"),
            property!("external_id", "string", "External identifier"),
            property!("id", "number", "Location ID"),
            property!("metafields", "array<metafield>", "Associated metafields"),
            property!("name", "string", "Location name"),
            property!("shipping_address", "company_address", "Shipping address"),
            property!("tax_registration_id", "number", "Tax registration ID"),
            property!("url_to_set_as_current", "string", "URL to set as current"),
        ],
    },
    ObjectDefinition {
        name: "content_for_additional_checkout_buttons",
        type_name: "ContentForAdditionalCheckoutButtons",
        description: "Returns checkout buttons for payment providers with offsite checkouts.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "content_for_header",
        type_name: "ContentForHeader",
        description: "Dynamically returns all scripts required by Shopify. Must be included in theme.liquid.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "content_for_index",
        type_name: "ContentForIndex",
        description: "Dynamically returns content of sections for the home page.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "content_for_layout",
        type_name: "ContentForLayout",
        description: "Dynamically returns content based on current template. Must be included in theme.liquid.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "country",
        type_name: "Country",
        description: "A country supported by store's localization options.",
        deprecated: false,
        properties: &[
            property!("available_languages", "array<shop_locale>", "Available languages"),
            property!("continent", "string", "Continent name"),
            property!("currency", "currency", "Country currency"),
            property!("iso_code", "string", "ISO country code"),
            property!("market", "market", "Associated market"),
            property!("name", "string", "Country name"),
            property!("popular", "boolean", "Whether country is popular"),
            property!("unit_system", "string", "Unit system (metric/imperial)"),
        ],
    },
    ObjectDefinition {
        name: "country_option_tags",
        type_name: "CountryOptionTags",
        description: "Creates <option> tags for countries in shipping zones.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "currency",
        type_name: "Currency",
        description: "Information about a currency.",
        deprecated: false,
        properties: &[
            property!("iso_code", "string", "ISO currency code"),
            property!("name", "string", "Currency name"),
            property!("symbol", "string", "Currency symbol"),
        ],
    },
    ObjectDefinition {
        name: "current_page",
        type_name: "CurrentPage",
        description: "Current page number for pagination.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "current_tags",
        type_name: "CurrentTags",
        description: "Currently applied tags for filtering.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "customer",
        type_name: "Customer",
        description: "A customer of the store.",
        deprecated: false,
        properties: &[
            property!("accepts_marketing", "boolean", "Marketing acceptance"),
            property!("addresses", "array<address>", "Customer addresses"),
            property!("addresses_count", "number", "Number of addresses"),
            property!("b2b", "boolean", "Whether customer is B2B"),
            property!("company_available_locations", "array<company_location>", "Available company locations"),
            property!("company_available_locations_count", "number", "Number of company locations"),
            property!("current_company", "company", "Current company"),
            property!("current_location", "company_location", "Current location"),
            property!("default_address", "address", "Default address"),
            property!("email", "string", "Customer email"),
            property!("first_name", "string", "First name"),
            property!("has_account", "boolean", "Whether customer has account"),
            property!("has_avatar", "boolean", "Whether customer has avatar"),
            property!("id", "number", "Customer ID"),
            property!("last_name", "string", "Last name"),
            property!("last_order", "order", "Most recent order"),
            property!("name", "string", "Full name"),
            property!("orders", "array<order>", "Customer orders"),
            property!("orders_count", "number", "Number of orders"),
            property!("payment_methods", "array<customer_payment_method>", "Saved payment methods"),
            property!("phone", "string", "Phone number"),
            property!("store_credit_account", "store_credit_account", "Store credit account"),
            property!("tags", "array<string>", "Customer tags"),
            property!("tax_exempt", "boolean", "Whether tax exempt"),
            property!("total_spent", "number", "Total amount spent"),
        ],
    },
    ObjectDefinition {
        name: "customer_payment_method",
        type_name: "CustomerPaymentMethod",
        description: "A customer's saved payment method.",
        deprecated: false,
        properties: &[
            property!("payment_instrument_type", "string", "Type of payment instrument"),
            property!("token", "string", "Payment method token"),
        ],
    },
    ObjectDefinition {
        name: "discount",
        type_name: "Discount",
        description: "A discount applied to cart, line item, or order. Replaced by discount_allocation and discount_application.",
        deprecated: true,
        properties: &[
            property!("amount", "number", "Discount amount"),
            property!("code", "string", "Discount code"),
            property!("savings", "number", "Amount saved"),
            property!("title", "string", "Discount title"),
            property!("total_amount", "number", "Total discount amount"),
            property!("total_savings", "number", "Total savings"),
            property!("type", "string", "Discount type"),
        ],
    },
    ObjectDefinition {
        name: "discount_allocation",
        type_name: "DiscountAllocation",
        description: "Information about how a discount affects an item.",
        deprecated: false,
        properties: &[
            property!("amount", "number", "Allocated discount amount"),
            property!("discount_application", "discount_application", "Related discount application"),
        ],
    },
    ObjectDefinition {
        name: "discount_application",
        type_name: "DiscountApplication",
        description: "Information about the intent of a discount.",
        deprecated: false,
        properties: &[
            property!("target_selection", "string", "How targets are selected"),
            property!("target_type", "string", "Type of target"),
            property!("title", "string", "Discount title"),
            property!("total_allocated_amount", "number", "Total allocated amount"),
            property!("type", "string", "Application type"),
            property!("value", "number", "Discount value"),
            property!("value_type", "string", "Value type (percentage/fixed_amount)"),
        ],
    },
    ObjectDefinition {
        name: "external_video",
        type_name: "ExternalVideo",
        description: "Information about external video from YouTube or Vimeo.",
        deprecated: false,
        properties: &[
            property!("alt", "string", "Alt text"),
            property!("aspect_ratio", "number", "Video aspect ratio"),
            property!("external_id", "string", "External video ID"),
            property!("host", "string", "Video host (youtube/vimeo)"),
            property!("id", "number", "Internal ID"),
            property!("media_type", "string", "Media type"),
            property!("position", "number", "Position in media array"),
            property!("preview_image", "image", "Preview image"),
        ],
    },
    ObjectDefinition {
        name: "filter",
        type_name: "Filter",
        description: "A storefront filter.",
        deprecated: false,
        properties: &[
            property!("active_values", "array<filter_value>", "Currently active values"),
            property!("false_value", "filter_value", "False value for boolean filters"),
            property!("inactive_values", "array<filter_value>", "Inactive values"),
            property!("label", "string", "Filter label"),
            property!("max_value", "filter_value", "Maximum value for range filters"),
            property!("min_value", "filter_value", "Minimum value for range filters"),
            property!("operator", "string", "Filter operator"),
            property!("param_name", "string", "URL parameter name"),
            property!("presentation", "string", "How filter should be presented"),
            property!("range_max", "number", "Maximum range value"),
            property!("true_value", "filter_value", "True value for boolean filters"),
            property!("type", "string", "Filter type"),
            property!("url_to_remove", "string", "URL to remove filter"),
            property!("values", "array<filter_value>", "All filter values"),
        ],
    },
    ObjectDefinition {
        name: "filter_value",
        type_name: "FilterValue",
        description: "A specific value of a filter.",
        deprecated: false,
        properties: &[
            property!("active", "boolean", "Whether value is active"),
            property!("count", "number", "Number of products with this value"),
            property!("image", "image", "Associated image"),
            property!("label", "string", "Display label"),
            property!("param_name", "string", "URL parameter name"),
            property!("swatch", "swatch", "Color/image swatch"),
            property!("url_to_add", "string", "URL to add this filter"),
            property!("url_to_remove", "string", "URL to remove this filter"),
            property!("value", "string", "Filter value"),
        ],
    },
    ObjectDefinition {
        name: "filter_value_display",
        type_name: "FilterValueDisplay",
        description: "Visual representation of filter value. Replaced by swatch.",
        deprecated: true,
        properties: &[
            property!("type", "string", "Display type"),
            property!("value", "any", "Display value"),
        ],
    },
    ObjectDefinition {
        name: "focal_point",
        type_name: "FocalPoint",
        description: "Focal point for an image to remain visible when cropped.",
        deprecated: false,
        properties: &[
            property!("x", "number", "X coordinate percentage"),
            property!("y", "number", "Y coordinate percentage"),
        ],
    },
    ObjectDefinition {
        name: "font",
        type_name: "Font",
        description: "A font from a font_picker setting.",
        deprecated: false,
        properties: &[
            property!("baseline_ratio", "number", "Baseline ratio"),
            property!("fallback_families", "string", "Fallback font families"),
            property!("family", "string", "Font family name"),
            property!("style", "string", "Font style"),
            property!("system", "boolean", "Whether it's a system font"),
            property!("variants", "array<font>", "Font variants"),
            property!("weight", "number", "Font weight"),
        ],
    },
    ObjectDefinition {
        name: "forloop",
        type_name: "ForLoop",
        description: "Information about a parent for loop.",
        deprecated: false,
        properties: &[
            property!("first", "boolean", "Whether first iteration"),
            property!("index", "number", "Current iteration (1-based)"),
            property!("index0", "number", "Current iteration (0-based)"),
            property!("last", "boolean", "Whether last iteration"),
            property!("length", "number", "Total iterations"),
            property!("parentloop", "forloop", "Parent loop object"),
            property!("rindex", "number", "Reverse index (1-based)"),
            property!("rindex0", "number", "Reverse index (0-based)"),
        ],
    },
    ObjectDefinition {
        name: "form",
        type_name: "Form",
        description: "Information about a form created by form tag.",
        deprecated: false,
        properties: &[
            property!("address1", "string", "Address line 1"),
            property!("address2", "string", "Address line 2"),
            property!("author", "string", "Author name"),
            property!("body", "string", "Form body content"),
            property!("city", "string", "City"),
            property!("company", "string", "Company"),
            property!("country", "string", "Country"),
            property!("email", "string", "Email address"),
            property!("errors", "form_errors", "Form errors"),
            property!("first_name", "string", "First name"),
            property!("id", "string", "Form ID"),
            property!("last_name", "string", "Last name"),
            property!("message", "string", "Message content"),
            property!("name", "string", "Full name"),
            property!("password_needed", "boolean", "Whether password needed"),
            property!("phone", "string", "Phone number"),
            property!("posted_successfully", "boolean", "Whether posted successfully"),
            property!("province", "string", "Province/state"),
            property!("set_as_default_checkbox", "string", "Default checkbox HTML"),
            property!("zip", "string", "ZIP/postal code"),
        ],
    },
    ObjectDefinition {
        name: "form_errors",
        type_name: "FormErrors",
        description: "Error category strings for form errors.",
        deprecated: false,
        properties: &[
            property!("messages", "array<string>", "Error messages"),
            property!("translated_fields", "array<string>", "Translated field names"),
        ],
    },
    ObjectDefinition {
        name: "fulfillment",
        type_name: "Fulfillment",
        description: "Order fulfillment information.",
        deprecated: false,
        properties: &[
            property!("created_at", "string", "Creation timestamp"),
            property!("fulfillment_line_items", "array<line_item>", "Fulfilled items"),
            property!("item_count", "number", "Number of items"),
            property!("tracking_company", "string", "Shipping company"),
            property!("tracking_number", "string", "Tracking number"),
            property!("tracking_numbers", "array<string>", "Multiple tracking numbers"),
            property!("tracking_url", "string", "Tracking URL"),
        ],
    },
    ObjectDefinition {
        name: "generic_file",
        type_name: "GenericFile",
        description: "A file from file_reference metafield that's not image or video.",
        deprecated: false,
        properties: &[
            property!("alt", "string", "Alt text"),
            property!("id", "number", "File ID"),
            property!("media_type", "string", "Media type"),
            property!("position", "number", "Position in array"),
            property!("preview_image", "image", "Preview image"),
            property!("url", "string", "File URL"),
        ],
    },
    ObjectDefinition {
        name: "gift_card",
        type_name: "GiftCard",
        description: "A gift card issued to customer or recipient.",
        deprecated: false,
        properties: &[
            property!("balance", "number", "Current balance"),
            property!("code", "string", "Gift card code"),
            property!("currency", "string", "Currency"),
            property!("customer", "customer", "Associated customer"),
            property!("enabled", "boolean", "Whether enabled"),
            property!("expired", "boolean", "Whether expired"),
            property!("expires_on", "string", "Expiration date"),
            property!("initial_value", "number", "Initial value"),
            property!("last_four_characters", "string", "Last 4 characters of code"),
            property!("message", "string", "Gift message"),
            property!("pass_url", "string", "Apple Wallet pass URL"),
            property!("product", "product", "Associated product"),
            property!("properties", "object", "Custom properties"),
            property!("qr_identifier", "string", "QR code identifier"),
            property!("recipient", "recipient", "Gift recipient"),
            property!("send_on", "string", "Send date"),
            property!("template_suffix", "string", "Template suffix"),
            property!("url", "string", "Gift card URL"),
        ],
    },
    ObjectDefinition {
        name: "group",
        type_name: "Group",
        description: "A group of rules for robots.txt file.",
        deprecated: false,
        properties: &[
            property!("rules", "array<rule>", "Robots rules"),
            property!("sitemap", "sitemap", "Sitemap information"),
            property!("user_agent", "user_agent", "User agent information"),
        ],
    },
    ObjectDefinition {
        name: "handle",
        type_name: "Handle",
        description: "Handle of resource associated with current template.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "image",
        type_name: "Image",
        description: "An image, such as product or collection image.",
        deprecated: false,
        properties: &[
            property!("alt", "string", "Alt text"),
            property!("aspect_ratio", "number", "Image aspect ratio"),
            property!("attached_to_variant", "boolean", "Whether attached to variant"),
            property!("height", "number", "Image height"),
            property!("id", "number", "Image ID"),
            property!("media_type", "string", "Media type"),
            property!("position", "number", "Position in array"),
            property!("presentation", "image_presentation", "Presentation settings"),
            property!("preview_image", "image", "Preview image"),
            property!("product_id", "number", "Associated product ID"),
            property!("src", "string", "Image URL"),
            property!("variants", "array<variant>", "Associated variants"),
            property!("width", "number", "Image width"),
        ],
    },
    ObjectDefinition {
        name: "image_presentation",
        type_name: "ImagePresentation",
        description: "Presentation settings for an image.",
        deprecated: false,
        properties: &[
            property!("focal_point", "focal_point", "Image focal point"),
        ],
    },
    ObjectDefinition {
        name: "images",
        type_name: "Images",
        description: "All images uploaded to store.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "line_item",
        type_name: "LineItem",
        description: "A line in cart, checkout, or order representing a product variant.",
        deprecated: false,
        properties: &[
            property!("discount_allocations", "array<discount_allocation>", "Applied discounts"),
            property!("error_message", "string", "Error message if any"),
            property!("final_line_price", "number", "Final line price after discounts"),
            property!("final_price", "number", "Final unit price after discounts"),
            property!("fulfillment", "fulfillment", "Fulfillment information"),
            property!("fulfillment_service", "string", "Fulfillment service"),
            property!("gift_card", "boolean", "Whether item is gift card"),
            property!("grams", "number", "Weight in grams"),
            property!("id", "number", "Line item ID"),
            property!("image", "image", "Product image"),
            property!("item_components", "array<line_item>", "Component items"),
            property!("key", "string", "Unique key"),
            property!("line_level_discount_allocations", "array<discount_allocation>", "Line-level discounts"),
            property!("line_level_total_discount", "number", "Total line-level discount"),
            property!("message", "string", "Associated message"),
            property!("options_with_values", "object", "Variant options"),
            property!("original_line_price", "number", "Original line price"),
            property!("original_price", "number", "Original unit price"),
            property!("product", "product", "Associated product"),
            property!("product_id", "number", "Product ID"),
            property!("properties", "object", "Custom properties"),
            property!("quantity", "number", "Quantity"),
            property!("requires_shipping", "boolean", "Whether requires shipping"),
            property!("selling_plan_allocation", "selling_plan_allocation", "Selling plan info"),
            property!("sku", "string", "SKU"),
            property!("successfully_fulfilled_quantity", "number", "Fulfilled quantity"),
            property!("tax_lines", "array<tax_line>", "Tax information"),
            property!("taxable", "boolean", "Whether taxable"),
            property!("title", "string", "Line item title"),
            property!("unit_price", "number", "Unit price"),
            property!("unit_price_measurement", "unit_price_measurement", "Unit measurement"),
            property!("url", "string", "Product URL"),
            property!("url_to_remove", "string", "URL to remove from cart"),
            property!("variant", "variant", "Product variant"),
            property!("variant_id", "number", "Variant ID"),
            property!("vendor", "string", "Vendor name"),
        ],
    },
    ObjectDefinition {
        name: "link",
        type_name: "Link",
        description: "A link in a menu.",
        deprecated: false,
        properties: &[
            property!("active", "boolean", "Whether link is active"),
            property!("child_active", "boolean", "Whether child is active"),
            property!("child_current", "boolean", "Whether child is current"),
            property!("current", "boolean", "Whether link is current"),
            property!("handle", "string", "Link handle"),
            property!("levels", "number", "Number of nested levels"),
            property!("links", "array<link>", "Child links"),
            property!("object", "any", "Linked object"),
            property!("title", "string", "Link title"),
            property!("type", "string", "Link type"),
            property!("url", "string", "Link URL"),
        ],
    },
    ObjectDefinition {
        name: "linklist",
        type_name: "Linklist",
        description: "A menu in store.",
        deprecated: false,
        properties: &[
            property!("handle", "string", "Menu handle"),
            property!("levels", "number", "Number of levels"),
            property!("links", "array<link>", "Menu links"),
            property!("title", "string", "Menu title"),
        ],
    },
    ObjectDefinition {
        name: "linklists",
        type_name: "Linklists",
        description: "All menus in store.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "localization",
        type_name: "Localization",
        description: "Information about countries and languages available on store.",
        deprecated: false,
        properties: &[
            property!("available_countries", "array<country>", "Available countries"),
            property!("available_languages", "array<shop_locale>", "Available languages"),
            property!("country", "country", "Current country"),
            property!("language", "shop_locale", "Current language"),
            property!("market", "market", "Current market"),
        ],
    },
    ObjectDefinition {
        name: "location",
        type_name: "Location",
        description: "A store location with local pickup enabled.",
        deprecated: false,
        properties: &[
            property!("address", "address", "Location address"),
            property!("id", "number", "Location ID"),
            property!("latitude", "number", "Latitude coordinate"),
            property!("longitude", "number", "Longitude coordinate"),
            property!("metafields", "metafields", "Associated metafields"),
            property!("name", "string", "Location name"),
        ],
    },
    ObjectDefinition {
        name: "market",
        type_name: "Market",
        description: "A group of regions that merchant targets for sales.",
        deprecated: false,
        properties: &[
            property!("handle", "string", "Market handle"),
            property!("id", "string", "Market ID"),
            property!("metafields", "array<metafield>", "Associated metafields"),
        ],
    },
    ObjectDefinition {
        name: "measurement",
        type_name: "Measurement",
        description: "A measurement from dimension, volume, or weight metafield.",
        deprecated: false,
        properties: &[
            property!("type", "string", "Measurement type"),
            property!("unit", "string", "Unit of measurement"),
            property!("value", "number", "Measurement value"),
        ],
    },
    ObjectDefinition {
        name: "media",
        type_name: "Media",
        description: "Abstract media object representing image, model, video, or external_video.",
        deprecated: false,
        properties: &[
            property!("alt", "string", "Alt text"),
            property!("id", "number", "Media ID"),
            property!("media_type", "string", "Media type"),
            property!("position", "number", "Position in array"),
            property!("preview_image", "image", "Preview image"),
        ],
    },
    ObjectDefinition {
        name: "metafield",
        type_name: "Metafield",
        description: "A metafield attached to parent object.",
        deprecated: false,
        properties: &[
            property!("list", "boolean", "Whether metafield is list type"),
            property!("type", "string", "Metafield type"),
            property!("value", "any", "Metafield value (type varies by metafield type)"),
        ],
    },
    ObjectDefinition {
        name: "metaobject",
        type_name: "Metaobject",
        description: "A metaobject entry with values for defined fields.",
        deprecated: false,
        properties: &[
            property!("system", "metaobject_system", "System information"),
        ],
    },
    ObjectDefinition {
        name: "metaobject_definition",
        type_name: "MetaobjectDefinition",
        description: "Defines structure of metaobject type.",
        deprecated: false,
        properties: &[
            property!("values", "array<metaobject>", "Metaobject entries"),
            property!("values_count", "number", "Number of entries"),
        ],
    },
    ObjectDefinition {
        name: "metaobject_system",
        type_name: "MetaobjectSystem",
        description: "Basic system information about metaobject.",
        deprecated: false,
        properties: &[
            property!("handle", "string", "Metaobject handle"),
            property!("id", "number", "Metaobject ID"),
            property!("type", "string", "Metaobject type"),
            property!("url", "string", "Metaobject URL"),
        ],
    },
    ObjectDefinition {
        name: "metaobjects",
        type_name: "Metaobjects",
        description: "All metaobjects in store.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "model",
        type_name: "Model",
        description: "A 3D model uploaded as product media.",
        deprecated: false,
        properties: &[
            property!("alt", "string", "Alt text"),
            property!("id", "number", "Model ID"),
            property!("media_type", "string", "Media type"),
            property!("position", "number", "Position in array"),
            property!("preview_image", "image", "Preview image"),
            property!("sources", "array<model_source>", "Model source files"),
        ],
    },
    ObjectDefinition {
        name: "model_source",
        type_name: "ModelSource",
        description: "A model source file.",
        deprecated: false,
        properties: &[
            property!("format", "string", "File format"),
            property!("mime_type", "string", "MIME type"),
            property!("url", "string", "File URL"),
        ],
    },
    ObjectDefinition {
        name: "money",
        type_name: "Money",
        description: "Money value in customer's local currency.",
        deprecated: false,
        properties: &[
            property!("currency", "currency", "Currency information"),
        ],
    },
    ObjectDefinition {
        name: "order",
        type_name: "Order",
        description: "An order.",
        deprecated: false,
        properties: &[
            property!("attributes", "object", "Order attributes"),
            property!("billing_address", "address", "Billing address"),
            property!("cancel_reason", "string", "Cancellation reason"),
            property!("cancel_reason_label", "string", "Cancellation reason label"),
            property!("cancelled", "boolean", "Whether cancelled"),
            property!("cancelled_at", "string", "Cancellation timestamp"),
            property!("cart_level_discount_applications", "array<discount_application>", "Cart discounts"),
            property!("confirmation_number", "string", "Confirmation number"),
            property!("created_at", "string", "Creation timestamp"),
            property!("customer", "customer", "Customer information"),
            property!("customer_order_url", "string", "Customer order URL"),
            property!("customer_url", "string", "Customer URL"),
            property!("discount_applications", "array<discount_application>", "All discounts"),
            property!("email", "string", "Customer email"),
            property!("financial_status", "string", "Financial status"),
            property!("financial_status_label", "any", "Financial status label"),
            property!("fulfillment_status", "string", "Fulfillment status"),
            property!("fulfillment_status_label", "string", "Fulfillment status label"),
            property!("id", "number", "Order ID"),
            property!("item_count", "number", "Number of items"),
            property!("line_items", "array<line_item>", "Order items"),
            property!("line_items_subtotal_price", "number", "Items subtotal"),
            property!("metafields", "metafields", "Associated metafields"),
            property!("name", "string", "Order name"),
            property!("note", "string", "Order note"),
            property!("order_number", "number", "Order number"),
            property!("order_status_url", "string", "Order status URL"),
            property!("phone", "string", "Customer phone"),
            property!("pickup_in_store", "boolean", "Whether pickup in store"),
            property!("shipping_address", "address", "Shipping address"),
            property!("shipping_methods", "array<shipping_method>", "Shipping methods"),
            property!("shipping_price", "number", "Shipping cost"),
            property!("subtotal_line_items", "array<line_item>", "Subtotal items"),
            property!("subtotal_price", "number", "Subtotal price"),
            property!("tags", "array<string>", "Order tags"),
            property!("tax_lines", "array<tax_line>", "Tax information"),
            property!("tax_price", "number", "Tax amount"),
            property!("total_discounts", "number", "Total discounts"),
            property!("total_duties", "number", "Total duties"),
            property!("total_net_amount", "number", "Net amount"),
            property!("total_price", "number", "Total price"),
            property!("total_refunded_amount", "number", "Refunded amount"),
            property!("transactions", "array<transaction>", "Payment transactions"),
        ],
    },
    ObjectDefinition {
        name: "page",
        type_name: "Page",
        description: "A page on store.",
        deprecated: false,
        properties: &[
            property!("author", "string", "Page author"),
            property!("content", "string", "Page content"),
            property!("handle", "string", "Page handle"),
            property!("id", "number", "Page ID"),
            property!("metafields", "metafields", "Associated metafields"),
            property!("published_at", "string", "Publication timestamp"),
            property!("template_suffix", "string", "Template suffix"),
            property!("title", "string", "Page title"),
            property!("url", "string", "Page URL"),
        ],
    },
    ObjectDefinition {
        name: "page_description",
        type_name: "PageDescription",
        description: "Meta description of current page.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "page_image",
        type_name: "PageImage",
        description: "Image for search engine listings and social media previews.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "page_title",
        type_name: "PageTitle",
        description: "Page title of current page.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "pages",
        type_name: "Pages",
        description: "All pages on store.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "paginate",
        type_name: "Paginate",
        description: "Information about pagination inside paginate tags.",
        deprecated: false,
        properties: &[
            property!("current_offset", "number", "Current offset"),
            property!("current_page", "number", "Current page number"),
            property!("items", "number", "Number of items"),
            property!("next", "part", "Next page part"),
            property!("page_param", "string", "Page parameter name"),
            property!("page_size", "number", "Items per page"),
            property!("pages", "number", "Total pages"),
            property!("parts", "array<part>", "Pagination parts"),
            property!("previous", "part", "Previous page part"),
        ],
    },
    ObjectDefinition {
        name: "part",
        type_name: "Part",
        description: "A part in pagination navigation.",
        deprecated: false,
        properties: &[
            property!("is_link", "boolean", "Whether part is link"),
            property!("title", "string", "Part title"),
            property!("url", "string", "Part URL"),
        ],
    },
    ObjectDefinition {
        name: "pending_payment_instruction_input",
        type_name: "PendingPaymentInstructionInput",
        description: "Payment information for offline transaction completion.",
        deprecated: false,
        properties: &[
            property!("header", "string", "Instruction header"),
            property!("value", "string", "Instruction value"),
        ],
    },
    ObjectDefinition {
        name: "policy",
        type_name: "Policy",
        description: "A store policy.",
        deprecated: false,
        properties: &[
            property!("body", "string", "Policy content"),
            property!("id", "string", "Policy ID"),
            property!("title", "string", "Policy title"),
            property!("url", "string", "Policy URL"),
        ],
    },
    ObjectDefinition {
        name: "powered_by_link",
        type_name: "PoweredByLink",
        description: "HTML link to localized shopify.com.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "predictive_search",
        type_name: "PredictiveSearch",
        description: "Results from predictive search query.",
        deprecated: false,
        properties: &[
            property!("performed", "boolean", "Whether search was performed"),
            property!("resources", "predictive_search_resources", "Search results"),
            property!("terms", "string", "Search terms"),
            property!("types", "array<string>", "Resource types searched"),
        ],
    },
    ObjectDefinition {
        name: "predictive_search_resources",
        type_name: "PredictiveSearchResources",
        description: "Arrays of objects for each resource type from search.",
        deprecated: false,
        properties: &[
            property!("articles", "array<article>", "Article results"),
            property!("collections", "array<collection>", "Collection results"),
            property!("pages", "array<page>", "Page results"),
            property!("products", "array<product>", "Product results"),
        ],
    },
    ObjectDefinition {
        name: "product",
        type_name: "Product",
        description: "A product in the store.",
        deprecated: false,
        properties: &[
            property!("available", "boolean", "Whether product is available"),
            property!("category", "taxonomy_category", "Product category"),
            property!("collections", "array<collection>", "Product collections"),
            property!("compare_at_price", "number", "Compare at price"),
            property!("compare_at_price_max", "number", "Highest compare price"),
            property!("compare_at_price_min", "number", "Lowest compare price"),
            property!("compare_at_price_varies", "boolean", "Whether compare price varies"),
            property!("content", "string", "Product description HTML"),
            property!("created_at", "string", "Creation timestamp"),
            property!("description", "string", "Product description"),
            property!("featured_image", "image", "Featured image"),
            property!("featured_media", "media", "Featured media"),
            property!("first_available_variant", "variant", "First available variant"),
            property!("gift_card", "boolean", "Whether product is gift card"),
            property!("handle", "string", "Product handle"),
            property!("has_only_default_variant", "boolean", "Whether has only default variant"),
            property!("id", "number", "Product ID"),
            property!("images", "array<image>", "Product images"),
            property!("media", "array<media>", "Product media"),
            property!("metafields", "metafields", "Associated metafields"),
            property!("options", "array<string>", "Option names"),
            property!("options_by_name", "object", "Options by name"),
            property!("options_with_values", "array<product_option>", "Options with values"),
            property!("price", "number", "Product price"),
            property!("price_max", "number", "Highest price"),
            property!("price_min", "number", "Lowest price"),
            property!("price_varies", "boolean", "Whether price varies"),
            property!("published_at", "string", "Publication timestamp"),
            property!("quantity_price_breaks_configured", "boolean", "Whether quantity breaks configured"),
            property!("requires_selling_plan", "boolean", "Whether requires selling plan"),
            property!("selected_or_first_available_selling_plan_allocation", "selling_plan_allocation", "Selected/first selling plan"),
            property!("selected_or_first_available_variant", "variant", "Selected/first variant"),
            property!("selected_selling_plan", "selling_plan", "Selected selling plan"),
            property!("selected_selling_plan_allocation", "selling_plan_allocation", "Selected selling plan allocation"),
            property!("selected_variant", "variant", "Selected variant"),
            property!("selling_plan_groups", "array<selling_plan_group>", "Selling plan groups"),
            property!("tags", "array<string>", "Product tags"),
            property!("template_suffix", "string", "Template suffix"),
            property!("title", "string", "Product title"),
            property!("type", "string", "Product type"),
            property!("url", "string", "Product URL"),
            property!("variants", "array<variant>", "Product variants"),
            property!("variants_count", "number", "Number of variants"),
            property!("vendor", "string", "Product vendor"),
        ],
    },
    ObjectDefinition {
        name: "product_option",
        type_name: "ProductOption",
        description: "A product option like size or color.",
        deprecated: false,
        properties: &[
            property!("name", "string", "Option name"),
            property!("position", "number", "Option position"),
            property!("selected_value", "string", "Selected value"),
            property!("values", "array<product_option_value>", "Option values"),
        ],
    },
    ObjectDefinition {
        name: "product_option_value",
        type_name: "ProductOptionValue",
        description: "A product option value like \"red\" for color.",
        deprecated: false,
        properties: &[
            property!("available", "boolean", "Whether value is available"),
            property!("id", "number", "Value ID"),
            property!("name", "string", "Value name"),
            property!("product_url", "string", "Product URL with this value"),
            property!("selected", "boolean", "Whether value is selected"),
            property!("swatch", "swatch", "Color/image swatch"),
            property!("variant", "variant", "Associated variant"),
        ],
    },
    ObjectDefinition {
        name: "quantity_price_break",
        type_name: "QuantityPriceBreak",
        description: "Per-unit price when purchasing minimum quantity or more.",
        deprecated: false,
        properties: &[
            property!("minimum_quantity", "number", "Minimum quantity required"),
            property!("price", "number", "Price per unit"),
        ],
    },
    ObjectDefinition {
        name: "quantity_rule",
        type_name: "QuantityRule",
        description: "Variant order quantity rule.",
        deprecated: false,
        properties: &[
            property!("increment", "number", "Quantity increment"),
            property!("max", "number", "Maximum quantity"),
            property!("min", "number", "Minimum quantity"),
        ],
    },
    ObjectDefinition {
        name: "rating",
        type_name: "Rating",
        description: "Information for rating type metafield.",
        deprecated: false,
        properties: &[
            property!("rating", "number", "Rating value"),
            property!("scale_max", "number", "Maximum scale value"),
            property!("scale_min", "number", "Minimum scale value"),
        ],
    },
    ObjectDefinition {
        name: "recipient",
        type_name: "Recipient",
        description: "Recipient associated with gift card.",
        deprecated: false,
        properties: &[
            property!("email", "string", "Recipient email"),
            property!("name", "string", "Recipient name"),
            property!("nickname", "string", "Recipient nickname"),
        ],
    },
    ObjectDefinition {
        name: "recommendations",
        type_name: "Recommendations",
        description: "Product recommendations based on sales data and relationships.",
        deprecated: false,
        properties: &[
            property!("intent", "string", "Recommendation intent"),
            property!("performed", "boolean", "Whether recommendations performed"),
            property!("products", "array<product>", "Recommended products"),
            property!("products_count", "number", "Number of products"),
        ],
    },
    ObjectDefinition {
        name: "request",
        type_name: "Request",
        description: "Information about current URL and page.",
        deprecated: false,
        properties: &[
            property!("design_mode", "boolean", "Whether in design mode"),
            property!("host", "string", "Request host"),
            property!("locale", "shop_locale", "Current locale"),
            property!("origin", "string", "Request origin"),
            property!("page_type", "string", "Current page type"),
            property!("path", "string", "Request path"),
            property!("visual_preview_mode", "boolean", "Whether in visual preview"),
        ],
    },
    ObjectDefinition {
        name: "robots",
        type_name: "Robots",
        description: "Default rule groups for robots.txt file.",
        deprecated: false,
        properties: &[
            property!("default_groups", "array<group>", "Default robot groups"),
        ],
    },
    ObjectDefinition {
        name: "routes",
        type_name: "Routes",
        description: "Generate standard URLs for storefront.",
        deprecated: false,
        properties: &[
            property!("account_addresses_url", "string", "Account addresses URL"),
            property!("account_login_url", "string", "Login URL"),
            property!("account_logout_url", "string", "Logout URL"),
            property!("account_recover_url", "string", "Password recovery URL"),
            property!("account_register_url", "string", "Registration URL"),
            property!("account_url", "string", "Account URL"),
            property!("all_products_collection_url", "string", "All products URL"),
            property!("cart_add_url", "string", "Cart add URL"),
            property!("cart_change_url", "string", "Cart change URL"),
            property!("cart_clear_url", "string", "Cart clear URL"),
            property!("cart_update_url", "string", "Cart update URL"),
            property!("cart_url", "string", "Cart URL"),
            property!("collections_url", "string", "Collections URL"),
            property!("predictive_search_url", "string", "Predictive search URL"),
            property!("product_recommendations_url", "string", "Product recommendations URL"),
            property!("root_url", "string", "Root URL"),
            property!("search_url", "string", "Search URL"),
            property!("storefront_login_url", "string", "Storefront login URL"),
        ],
    },
    ObjectDefinition {
        name: "rule",
        type_name: "Rule",
        description: "A rule for robots.txt file.",
        deprecated: false,
        properties: &[
            property!("directive", "string", "Rule directive (Allow/Disallow)"),
            property!("value", "string", "URL path value"),
        ],
    },
    ObjectDefinition {
        name: "script",
        type_name: "Script",
        description: "Information about Shopify Script. Scripts will be sunset August 28, 2025.",
        deprecated: true,
        properties: &[
            property!("id", "number", "Script ID"),
            property!("name", "string", "Script name"),
        ],
    },
    ObjectDefinition {
        name: "scripts",
        type_name: "Scripts",
        description: "Active scripts of each type. Scripts will be sunset August 28, 2025.",
        deprecated: true,
        properties: &[
            property!("cart_calculate_line_items", "script", "Cart calculation script"),
        ],
    },
    ObjectDefinition {
        name: "search",
        type_name: "Search",
        description: "Information about storefront search query.",
        deprecated: false,
        properties: &[
            property!("default_sort_by", "string", "Default sort order"),
            property!("filters", "array<filter>", "Available filters"),
            property!("performed", "boolean", "Whether search was performed"),
            property!("results", "any", "Search results"),
            property!("results_count", "number", "Number of results"),
            property!("sort_by", "any", "Current sort order"),
            property!("sort_options", "array<sort_option>", "Available sort options"),
            property!("terms", "string", "Search terms"),
            property!("types", "array<string>", "Resource types searched"),
        ],
    },
    ObjectDefinition {
        name: "section",
        type_name: "Section",
        description: "Properties and settings of a section.",
        deprecated: false,
        properties: &[
            property!("blocks", "array<block>", "Section blocks"),
            property!("id", "string", "Section ID"),
            property!("index", "number", "Section index (1-based)"),
            property!("index0", "number", "Section index (0-based)"),
            property!("location", "string", "Section location"),
            property!("settings", "any", "Section settings"),
        ],
    },
    ObjectDefinition {
        name: "selling_plan",
        type_name: "SellingPlan",
        description: "Information about selling plan intent.",
        deprecated: false,
        properties: &[
            property!("checkout_charge", "selling_plan_checkout_charge", "Checkout charge info"),
            property!("description", "string", "Plan description"),
            property!("group_id", "string", "Group ID"),
            property!("id", "number", "Plan ID"),
            property!("name", "string", "Plan name"),
            property!("options", "array<selling_plan_option>", "Plan options"),
            property!("price_adjustments", "array<selling_plan_price_adjustment>", "Price adjustments"),
            property!("recurring_deliveries", "boolean", "Whether recurring deliveries"),
            property!("selected", "boolean", "Whether plan is selected"),
        ],
    },
    ObjectDefinition {
        name: "selling_plan_allocation",
        type_name: "SellingPlanAllocation",
        description: "How selling plan affects line item.",
        deprecated: false,
        properties: &[
            property!("checkout_charge_amount", "number", "Checkout charge amount"),
            property!("compare_at_price", "number", "Compare at price"),
            property!("per_delivery_price", "number", "Price per delivery"),
            property!("price", "number", "Allocated price"),
            property!("price_adjustments", "array<selling_plan_allocation_price_adjustment>", "Price adjustments"),
            property!("remaining_balance_charge_amount", "number", "Remaining balance"),
            property!("selling_plan", "selling_plan", "Associated selling plan"),
            property!("selling_plan_group_id", "string", "Group ID"),
            property!("unit_price", "number", "Unit price"),
        ],
    },
    ObjectDefinition {
        name: "selling_plan_allocation_price_adjustment",
        type_name: "SellingPlanAllocationPriceAdjustment",
        description: "Resulting price from selling plan price adjustment.",
        deprecated: false,
        properties: &[
            property!("position", "number", "Adjustment position"),
            property!("price", "number", "Adjusted price"),
        ],
    },
    ObjectDefinition {
        name: "selling_plan_checkout_charge",
        type_name: "SellingPlanCheckoutCharge",
        description: "How selling plan affects checkout amount.",
        deprecated: false,
        properties: &[
            property!("value", "number", "Charge value"),
            property!("value_type", "string", "Value type"),
        ],
    },
    ObjectDefinition {
        name: "selling_plan_group",
        type_name: "SellingPlanGroup",
        description: "Group of selling plans for product variants.",
        deprecated: false,
        properties: &[
            property!("app_id", "string", "App ID"),
            property!("id", "number", "Group ID"),
            property!("name", "string", "Group name"),
            property!("options", "array<selling_plan_group_option>", "Group options"),
            property!("selling_plan_selected", "boolean", "Whether plan selected"),
            property!("selling_plans", "array<selling_plan>", "Selling plans"),
        ],
    },
    ObjectDefinition {
        name: "selling_plan_group_option",
        type_name: "SellingPlanGroupOption",
        description: "Option in selling plan group.",
        deprecated: false,
        properties: &[
            property!("name", "string", "Option name"),
            property!("position", "number", "Option position"),
            property!("selected_value", "string", "Selected value"),
            property!("values", "array<string>", "Available values"),
        ],
    },
    ObjectDefinition {
        name: "selling_plan_option",
        type_name: "SellingPlanOption",
        description: "Selling plan's value for group option.",
        deprecated: false,
        properties: &[
            property!("name", "string", "Option name"),
            property!("position", "number", "Option position"),
            property!("value", "string", "Option value"),
        ],
    },
    ObjectDefinition {
        name: "selling_plan_price_adjustment",
        type_name: "SellingPlanPriceAdjustment",
        description: "How selling plan changes variant price over time.",
        deprecated: false,
        properties: &[
            property!("order_count", "number", "Order count"),
            property!("position", "number", "Adjustment position"),
            property!("value", "number", "Adjustment value"),
            property!("value_type", "string", "Value type"),
        ],
    },
    ObjectDefinition {
        name: "settings",
        type_name: "Settings",
        description: "Access all theme settings from settings_schema.json.",
        deprecated: false,
        properties: &[],
    },
    ObjectDefinition {
        name: "shipping_method",
        type_name: "ShippingMethod",
        description: "Shipping method information for order.",
        deprecated: false,
        properties: &[
            property!("discount_allocations", "array<discount_allocation>", "Shipping discounts"),
            property!("handle", "string", "Method handle"),
            property!("id", "string", "Method ID"),
            property!("original_price", "number", "Original price"),
            property!("price_with_discounts", "number", "Price after discounts"),
            property!("tax_lines", "array<tax_line>", "Tax information"),
            property!("title", "string", "Method title"),
        ],
    },
    ObjectDefinition {
        name: "shop",
        type_name: "Shop",
        description: "Information about the store.",
        deprecated: false,
        properties: &[
            property!("accepts_gift_cards", "boolean", "Whether accepts gift cards"),
            property!("address", "address", "Store address"),
            property!("brand", "brand", "Store brand"),
            property!("collections_count", "number", "Number of collections"),
            property!("currency", "string", "Store currency"),
            property!("customer_accounts_enabled", "boolean", "Whether customer accounts enabled"),
            property!("customer_accounts_optional", "boolean", "Whether accounts optional"),
            property!("description", "string", "Store description"),
            property!("domain", "string", "Store domain"),
            property!("email", "string", "Store email"),
            property!("enabled_currencies", "array<currency>", "Enabled currencies"),
            property!("enabled_payment_types", "array<string>", "Enabled payment types"),
            property!("id", "string", "Store ID"),
            property!("metafields", "metafields", "Store metafields"),
            property!("money_format", "currency", "Money format"),
            property!("money_with_currency_format", "currency", "Money with currency format"),
            property!("name", "string", "Store name"),
            property!("password_message", "string", "Password page message"),
            property!("permanent_domain", "string", "Permanent domain"),
            property!("phone", "string", "Store phone"),
            property!("policies", "array<policy>", "Store policies"),
            property!("privacy_policy", "policy", "Privacy policy"),
            property!("products_count", "number", "Number of products"),
            property!("published_locales", "array<shop_locale>", "Published locales"),
            property!("refund_policy", "policy", "Refund policy"),
            property!("secure_url", "string", "Secure URL"),
            property!("shipping_policy", "policy", "Shipping policy"),
            property!("subscription_policy", "policy", "Subscription policy"),
            property!("terms_of_service", "policy", "Terms of service"),
            property!("types", "array<string>", "Product types"),
            property!("url", "string", "Store URL"),
            property!("vendors", "array<string>", "Product vendors"),
        ],
    },
    ObjectDefinition {
        name: "shop_locale",
        type_name: "ShopLocale",
        description: "A language in store.",
        deprecated: false,
        properties: &[
            property!("endonym_name", "string", "Native language name"),
            property!("iso_code", "string", "ISO language code"),
            property!("name", "string", "Language name"),
            property!("primary", "boolean", "Whether primary language"),
            property!("root_url", "string", "Root URL for language"),
        ],
    },
    ObjectDefinition {
        name: "sitemap",
        type_name: "Sitemap",
        description: "Sitemap for robots.txt group.",
        deprecated: false,
        properties: &[
            property!("directive", "string", "Sitemap directive"),
            property!("value", "string", "Sitemap URL"),
        ],
    },
    ObjectDefinition {
        name: "sort_option",
        type_name: "SortOption",
        description: "Sort option for collection or search.",
        deprecated: false,
        properties: &[
            property!("name", "string", "Option name"),
            property!("value", "string", "Option value"),
        ],
    },
    ObjectDefinition {
        name: "store_availability",
        type_name: "StoreAvailability",
        description: "Variant inventory for physical store location.",
        deprecated: false,
        properties: &[
            property!("available", "boolean", "Whether available"),
            property!("location", "location", "Store location"),
            property!("pick_up_enabled", "boolean", "Whether pickup enabled"),
            property!("pick_up_time", "string", "Pickup time"),
        ],
    },
    ObjectDefinition {
        name: "store_credit_account",
        type_name: "StoreCreditAccount",
        description: "Store credit account owned by customer.",
        deprecated: false,
        properties: &[
            property!("balance", "money", "Account balance"),
        ],
    },
    ObjectDefinition {
        name: "swatch",
        type_name: "Swatch",
        description: "Color and image for visual representation.",
        deprecated: false,
        properties: &[
            property!("color", "color", "Swatch color"),
            property!("image", "image", "Swatch image"),
        ],
    },
    ObjectDefinition {
        name: "tablerowloop",
        type_name: "TableRowLoop",
        description: "Information about parent tablerow loop.",
        deprecated: false,
        properties: &[
            property!("col", "number", "Current column (1-based)"),
            property!("col0", "number", "Current column (0-based)"),
            property!("col_first", "boolean", "Whether first column"),
            property!("col_last", "boolean", "Whether last column"),
            property!("first", "boolean", "Whether first row"),
            property!("index", "number", "Current iteration (1-based)"),
            property!("index0", "number", "Current iteration (0-based)"),
            property!("last", "boolean", "Whether last row"),
            property!("length", "number", "Total iterations"),
            property!("rindex", "number", "Reverse index (1-based)"),
            property!("rindex0", "number", "Reverse index (0-based)"),
            property!("row", "number", "Current row"),
        ],
    },
    ObjectDefinition {
        name: "tax_line",
        type_name: "TaxLine",
        description: "Tax line information for checkout or order.",
        deprecated: false,
        properties: &[
            property!("price", "number", "Tax amount"),
            property!("rate", "number", "Tax rate (decimal)"),
            property!("rate_percentage", "number", "Tax rate percentage"),
            property!("title", "string", "Tax name"),
        ],
    },
    ObjectDefinition {
        name: "taxonomy_category",
        type_name: "TaxonomyCategory",
        description: "Taxonomy category for product.",
        deprecated: false,
        properties: &[
            property!("ancestors", "array<taxonomy_category>", "Category ancestors"),
            property!("gid", "string", "Global ID"),
            property!("id", "string", "Category ID"),
            property!("name", "string", "Category name"),
        ],
    },
    ObjectDefinition {
        name: "template",
        type_name: "Template",
        description: "Information about current template.",
        deprecated: false,
        properties: &[
            property!("directory", "string", "Template directory"),
            property!("name", "string", "Template name"),
            property!("suffix", "string", "Template suffix"),
        ],
    },
    ObjectDefinition {
        name: "theme",
        type_name: "Theme",
        description: "Information about current theme. Deprecated because values are subject to change.",
        deprecated: true,
        properties: &[
            property!("id", "number", "Theme ID"),
            property!("name", "string", "Theme name"),
            property!("role", "string", "Theme role"),
        ],
    },
    ObjectDefinition {
        name: "transaction",
        type_name: "Transaction",
        description: "Transaction associated with checkout or order.",
        deprecated: false,
        properties: &[
            property!("amount", "number", "Transaction amount"),
            property!("buyer_pending_payment_instructions", "array<pending_payment_instruction_input>", "Payment instructions"),
            property!("buyer_pending_payment_notice", "string", "Payment notice"),
            property!("created_at", "string", "Creation timestamp"),
            property!("gateway", "string", "Payment gateway"),
            property!("gateway_display_name", "string", "Gateway display name"),
            property!("id", "number", "Transaction ID"),
            property!("kind", "string", "Transaction kind"),
            property!("name", "string", "Transaction name"),
            property!("payment_details", "transaction_payment_details", "Payment details"),
            property!("receipt", "string", "Receipt information"),
            property!("show_buyer_pending_payment_instructions", "boolean", "Whether to show instructions"),
            property!("status", "string", "Transaction status"),
            property!("status_label", "string", "Status label"),
        ],
    },
    ObjectDefinition {
        name: "transaction_payment_details",
        type_name: "TransactionPaymentDetails",
        description: "Payment method information for transaction.",
        deprecated: false,
        properties: &[
            property!("credit_card_company", "string", "Credit card company"),
            property!("credit_card_last_four_digits", "string", "Last 4 digits"),
            property!("credit_card_number", "string", "Masked card number"),
            property!("gift_card", "gift_card", "Gift card information"),
        ],
    },
    ObjectDefinition {
        name: "unit_price_measurement",
        type_name: "UnitPriceMeasurement",
        description: "How product variant units are measured for unit pricing.",
        deprecated: false,
        properties: &[
            property!("measured_type", "string", "What is being measured"),
            property!("quantity_unit", "string", "Quantity unit"),
            property!("quantity_value", "number", "Quantity value"),
            property!("reference_unit", "string", "Reference unit"),
            property!("reference_value", "number", "Reference value"),
        ],
    },
    ObjectDefinition {
        name: "user",
        type_name: "User",
        description: "Author of blog article.",
        deprecated: false,
        properties: &[
            property!("account_owner", "boolean", "Whether account owner"),
            property!("bio", "string", "User bio"),
            property!("email", "string", "User email"),
            property!("first_name", "string", "First name"),
            property!("homepage", "string", "Homepage URL"),
            property!("image", "image", "User image"),
            property!("last_name", "string", "Last name"),
            property!("name", "string", "Full name"),
        ],
    },
    ObjectDefinition {
        name: "user_agent",
        type_name: "UserAgent",
        description: "User agent for robots.txt group.",
        deprecated: false,
        properties: &[
            property!("directive", "string", "User-agent directive"),
            property!("value", "string", "User agent value"),
        ],
    },
    ObjectDefinition {
        name: "variant",
        type_name: "Variant",
        description: "A product variant.",
        deprecated: false,
        properties: &[
            property!("available", "boolean", "Whether variant is available"),
            property!("barcode", "string", "Variant barcode"),
            property!("compare_at_price", "number", "Compare at price"),
            property!("featured_image", "image", "Featured image"),
            property!("featured_media", "media", "Featured media"),
            property!("id", "number", "Variant ID"),
            property!("image", "image", "Variant image"),
            property!("incoming", "boolean", "Whether inventory is incoming"),
            property!("inventory_management", "string", "Inventory management"),
            property!("inventory_policy", "string", "Inventory policy"),
            property!("inventory_quantity", "number", "Available quantity"),
            property!("matched", "boolean", "Whether variant matches current selection"),
            property!("metafields", "metafields", "Associated metafields"),
            property!("next_incoming_date", "string", "Next incoming inventory date"),
            property!("options", "product_option_value", "Variant options"),
            property!("price", "number", "Variant price"),
            property!("product", "product", "Parent product"),
            property!("quantity_price_breaks", "array<quantity_price_break>", "Quantity price breaks"),
            property!("quantity_price_breaks_configured", "boolean", "Whether quantity breaks configured"),
            property!("quantity_rule", "quantity_rule", "Quantity rule"),
            property!("requires_selling_plan", "boolean", "Whether requires selling plan"),
            property!("requires_shipping", "boolean", "Whether requires shipping"),
            property!("selected", "boolean", "Whether variant is selected"),
            property!("selected_selling_plan_allocation", "selling_plan_allocation", "Selected selling plan"),
            property!("selling_plan_allocations", "array<selling_plan_allocation>", "Selling plan allocations"),
            property!("sku", "string", "SKU"),
            property!("store_availabilities", "array<store_availability>", "Store availability"),
            property!("taxable", "boolean", "Whether taxable"),
            property!("title", "string", "Variant title"),
            property!("unit_price", "number", "Unit price"),
            property!("unit_price_measurement", "unit_price_measurement", "Unit measurement"),
            property!("url", "string", "Variant URL"),
            property!("weight", "number", "Weight"),
            property!("weight_in_unit", "number", "Weight in specified unit"),
            property!("weight_unit", "string", "Weight unit"),
        ],
    },
    ObjectDefinition {
        name: "video",
        type_name: "Video",
        description: "Video uploaded as product media or metafield.",
        deprecated: false,
        properties: &[
            property!("alt", "string", "Alt text"),
            property!("aspect_ratio", "number", "Video aspect ratio"),
            property!("duration", "number", "Video duration"),
            property!("id", "number", "Video ID"),
            property!("media_type", "string", "Media type"),
            property!("position", "number", "Position in array"),
            property!("preview_image", "image", "Preview image"),
            property!("sources", "array<video_source>", "Video sources"),
        ],
    },
    ObjectDefinition {
        name: "video_source",
        type_name: "VideoSource",
        description: "Source files for video.",
        deprecated: false,
        properties: &[
            property!("format", "string", "Video format"),
            property!("height", "number", "Video height"),
            property!("mime_type", "string", "MIME type"),
            property!("url", "string", "Video URL"),
            property!("width", "number", "Video width"),
        ],
    },
];
