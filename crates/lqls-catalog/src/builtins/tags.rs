//! Shopify's Liquid tags.

use crate::tags::TagCategory;
use crate::tags::TagDefinition;
use crate::tags::TagForm;
use crate::Parameter;

pub(crate) static TAGS: &[TagDefinition] = &[
    TagDefinition {
        name: "if",
        category: TagCategory::Conditional,
        description: "Renders an expression if a specific condition is true",
        syntax: Some("{% if condition %} ... {% endif %}"),
        form: TagForm::Block { end_tag: "endif" },
        parameters: &[],
        examples: &[
            "{% if product.available %}\n  <p>In Stock</p>\n{% endif %}",
            "{% if product.compare_at_price > product.price %}\n  <span class=\"sale\">On Sale!</span>\n{% endif %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "elsif",
        category: TagCategory::Conditional,
        description: "Checks for additional conditions in an if statement",
        syntax: Some("{% elsif condition %}"),
        form: TagForm::Intermediate,
        parameters: &[],
        examples: &[
            "{% if product.type == 'Love' %}\n  <p>Love potion!</p>\n{% elsif product.type == 'Health' %}\n  <p>Health potion!</p>\n{% endif %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "else",
        category: TagCategory::Conditional,
        description: "Specifies a default expression when no other condition is met",
        syntax: Some("{% else %}"),
        form: TagForm::Intermediate,
        parameters: &[],
        examples: &[
            "{% if product.available %}\n  <p>In Stock</p>\n{% else %}\n  <p>Sold Out</p>\n{% endif %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "unless",
        category: TagCategory::Conditional,
        description: "Renders an expression unless a specific condition is true",
        syntax: Some("{% unless condition %} ... {% endunless %}"),
        form: TagForm::Block { end_tag: "endunless" },
        parameters: &[],
        examples: &[
            "{% unless product.available %}\n  <p>Sorry, this product is sold out</p>\n{% endunless %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "case",
        category: TagCategory::Conditional,
        description: "Renders a specific expression depending on the value of a variable",
        syntax: Some("{% case variable %} ... {% endcase %}"),
        form: TagForm::Block { end_tag: "endcase" },
        parameters: &[],
        examples: &[
            "{% case product.type %}\n  {% when 'Health' %}\n    <p>Restore your HP!</p>\n  {% when 'Love' %}\n    <p>Find your true love!</p>\n  {% else %}\n    <p>Magic item</p>\n{% endcase %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "when",
        category: TagCategory::Conditional,
        description: "Defines a condition within a case statement",
        syntax: Some("{% when value %}"),
        form: TagForm::Intermediate,
        parameters: &[],
        examples: &[
            "{% case product.type %}\n  {% when 'shirt', 'hoodie' %}\n    <p>Clothing item</p>\n  {% when 'book' %}\n    <p>Reading material</p>\n{% endcase %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "form",
        category: TagCategory::Html,
        description: "Generates an HTML form tag with Shopify-specific attributes",
        syntax: Some("{% form 'form_type' %} ... {% endform %}"),
        form: TagForm::Block { end_tag: "endform" },
        parameters: &[
            Parameter {
                name: "form_type",
                type_name: "string",
                description: "Type of form to generate",
                default: None,
                required: true,
                values: &[],
            },
            Parameter {
                name: "return_to",
                type_name: "string",
                description: "URL to redirect after form submission",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "{% form 'product', product %}\n  <!-- Add to cart form -->\n  <button type=\"submit\">Add to Cart</button>\n{% endform %}",
            "{% form 'contact' %}\n  <input type=\"email\" name=\"contact[email]\" placeholder=\"Email\">\n  <textarea name=\"contact[body]\" placeholder=\"Message\"></textarea>\n  <button type=\"submit\">Send</button>\n{% endform %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "style",
        category: TagCategory::Html,
        description: "Generates an HTML style tag with data-shopify attribute",
        syntax: Some("{% style %} ... {% endstyle %}"),
        form: TagForm::Block { end_tag: "endstyle" },
        parameters: &[],
        examples: &[
            "{% style %}\n  .custom-class {\n    color: {{ settings.accent_color }};\n    font-size: 16px;\n  }\n{% endstyle %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "for",
        category: TagCategory::Iteration,
        description: "Renders an expression for every item in an array",
        syntax: Some("{% for variable in array %} ... {% endfor %}"),
        form: TagForm::Block { end_tag: "endfor" },
        parameters: &[
            Parameter {
                name: "limit",
                type_name: "number",
                description: "Limit the number of iterations",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "offset",
                type_name: "number",
                description: "Start iteration at a specific index",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "reversed",
                type_name: "boolean",
                description: "Iterate in reverse order",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "{% for product in collection.products %}\n  <h3>{{ product.title }}</h3>\n  <p>${{ product.price | money }}</p>\n{% endfor %}",
            "{% for product in collection.products limit: 4 %}\n  <div class=\"product-card\">\n    {{ product.title }}\n  </div>\n{% endfor %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "break",
        category: TagCategory::Iteration,
        description: "Stops a for loop from iterating",
        syntax: Some("{% break %}"),
        form: TagForm::SelfClosing,
        parameters: &[],
        examples: &[
            "{% for product in collection.products %}\n  {% if product.price > 100 %}\n    {% break %}\n  {% endif %}\n  {{ product.title }}\n{% endfor %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "continue",
        category: TagCategory::Iteration,
        description: "Causes a for loop to skip to the next iteration",
        syntax: Some("{% continue %}"),
        form: TagForm::SelfClosing,
        parameters: &[],
        examples: &[
            "{% for product in collection.products %}\n  {% if product.available == false %}\n    {% continue %}\n  {% endif %}\n  {{ product.title }}\n{% endfor %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "cycle",
        category: TagCategory::Iteration,
        description: "Loops through a group of strings and outputs them one at a time",
        syntax: Some("{% cycle 'group': 'string1', 'string2' %}"),
        form: TagForm::SelfClosing,
        parameters: &[],
        examples: &[
            "{% for product in collection.products %}\n  <div class=\"{% cycle 'odd', 'even' %}\">\n    {{ product.title }}\n  </div>\n{% endfor %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "tablerow",
        category: TagCategory::Iteration,
        description: "Generates HTML table rows for every item in an array",
        syntax: Some("{% tablerow variable in array %} ... {% endtablerow %}"),
        form: TagForm::Block { end_tag: "endtablerow" },
        parameters: &[
            Parameter {
                name: "cols",
                type_name: "number",
                description: "Number of columns in the table",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "limit",
                type_name: "number",
                description: "Limit the number of iterations",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "offset",
                type_name: "number",
                description: "Start iteration at a specific index",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "<table>\n  {% tablerow product in collection.products cols: 3 %}\n    <td>{{ product.title }}</td>\n  {% endtablerow %}\n</table>",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "paginate",
        category: TagCategory::Iteration,
        description: "Splits an array's items across multiple pages",
        syntax: Some("{% paginate array by page_size %} ... {% endpaginate %}"),
        form: TagForm::Block { end_tag: "endpaginate" },
        parameters: &[
            Parameter {
                name: "by",
                type_name: "number",
                description: "Number of items per page (1-250)",
                default: None,
                required: true,
                values: &[],
            },
            Parameter {
                name: "window_size",
                type_name: "number",
                description: "Number of pages visible in navigation",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "{% paginate collection.products by 12 %}\n  {% for product in collection.products %}\n    {{ product.title }}\n  {% endfor %}\n  {{ paginate | default_pagination }}\n{% endpaginate %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "comment",
        category: TagCategory::Syntax,
        description: "Prevents an expression from being rendered or output",
        syntax: Some("{% comment %} ... {% endcomment %}"),
        form: TagForm::Block { end_tag: "endcomment" },
        parameters: &[],
        examples: &[
            "{% comment %}\n  This is a comment that won't be rendered\n  {{ product.title }}\n{% endcomment %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "doc",
        category: TagCategory::Syntax,
        description: "Documents template elements with annotations",
        syntax: Some("{% doc %} ... {% enddoc %}"),
        form: TagForm::Block { end_tag: "enddoc" },
        parameters: &[],
        examples: &[
            "{% doc %}\n  @param product {Product} The product object\n  @returns {String} Product title with price\n{% enddoc %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "echo",
        category: TagCategory::Syntax,
        description: "Outputs an expression (same as {{ }})",
        syntax: Some("{% echo expression %}"),
        form: TagForm::SelfClosing,
        parameters: &[],
        examples: &[
            "{% liquid\n  assign message = 'Hello World'\n  echo message\n%}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "liquid",
        category: TagCategory::Syntax,
        description: "Allows a block of Liquid without delimiters on each tag",
        syntax: Some("{% liquid %} ... {% endliquid %}"),
        form: TagForm::Block { end_tag: "endliquid" },
        parameters: &[],
        examples: &[
            "{% liquid\n  assign product_title = product.title | upcase\n  if product.available\n    echo product_title\n  else\n    echo 'Sold Out'\n  endif\n%}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "raw",
        category: TagCategory::Syntax,
        description: "Outputs Liquid code as text instead of rendering it",
        syntax: Some("{% raw %} ... {% endraw %}"),
        form: TagForm::Block { end_tag: "endraw" },
        parameters: &[],
        examples: &[
            "{% raw %}\n  This will output: {{ product.title }}\n  Without rendering the variable\n{% endraw %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "content_for",
        category: TagCategory::Theme,
        description: "Creates a designated area where blocks can be rendered",
        syntax: Some("{% content_for 'type' %}"),
        form: TagForm::SelfClosing,
        parameters: &[
            Parameter {
                name: "type",
                type_name: "string",
                description: "'blocks' or 'block'",
                default: None,
                required: true,
                values: &[],
            },
            Parameter {
                name: "id",
                type_name: "string",
                description: "Block ID (for static blocks)",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "{% content_for 'blocks' %}",
            "{% content_for 'block', type: 'slide', id: 'hero-slide-1' %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "include",
        category: TagCategory::Theme,
        description: "Renders a snippet (deprecated - use render instead)",
        syntax: Some("{% include 'snippet-name' %}"),
        form: TagForm::SelfClosing,
        parameters: &[],
        examples: &[
            "{% include 'product-card' %}",
            "{% include 'product-card', product: collections.featured.products.first %}",
        ],
        deprecated: true,
    },
    TagDefinition {
        name: "javascript",
        category: TagCategory::Theme,
        description: "JavaScript code included in section, block and snippet files",
        syntax: Some("{% javascript %} ... {% endjavascript %}"),
        form: TagForm::Block { end_tag: "endjavascript" },
        parameters: &[],
        examples: &[
            "{% javascript %}\n  console.log('Hello from Shopify');\n  document.addEventListener('DOMContentLoaded', function() {\n    // Your JavaScript code\n  });\n{% endjavascript %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "layout",
        category: TagCategory::Theme,
        description: "Specify which layout to use",
        syntax: Some("{% layout 'layout-name' %}"),
        form: TagForm::SelfClosing,
        parameters: &[],
        examples: &[
            "{% layout 'full-width' %}",
            "{% layout none %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "render",
        category: TagCategory::Theme,
        description: "Renders a snippet or app block",
        syntax: Some("{% render 'snippet-name' %}"),
        form: TagForm::SelfClosing,
        parameters: &[
            Parameter {
                name: "with",
                type_name: "object",
                description: "Pass an object to the snippet",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "as",
                type_name: "string",
                description: "Alias for the passed object",
                default: None,
                required: false,
                values: &[],
            },
            Parameter {
                name: "for",
                type_name: "array",
                description: "Render snippet for each item in array",
                default: None,
                required: false,
                values: &[],
            },
        ],
        examples: &[
            "{% render 'product-card' %}",
            "{% render 'product-card', product: collections.featured.products.first %}",
            "{% render 'product-card' with collections.featured.products.first as product %}",
            "{% render 'product-card' for collection.products %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "section",
        category: TagCategory::Theme,
        description: "Renders a section statically",
        syntax: Some("{% section 'section-name' %}"),
        form: TagForm::SelfClosing,
        parameters: &[],
        examples: &[
            "{% section 'header' %}",
            "{% section 'featured-collection' %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "sections",
        category: TagCategory::Theme,
        description: "Renders a section group",
        syntax: Some("{% sections 'group-name' %}"),
        form: TagForm::SelfClosing,
        parameters: &[],
        examples: &[
            "{% sections 'header-group' %}",
            "{% sections 'footer-group' %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "stylesheet",
        category: TagCategory::Theme,
        description: "CSS styles included in section, block, and snippet files",
        syntax: Some("{% stylesheet %} ... {% endstylesheet %}"),
        form: TagForm::Block { end_tag: "endstylesheet" },
        parameters: &[],
        examples: &[
            "{% stylesheet %}\n  .custom-section {\n    background: {{ section.settings.bg_color }};\n    padding: 2rem;\n  }\n{% endstylesheet %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "assign",
        category: TagCategory::Variable,
        description: "Creates a new variable",
        syntax: Some("{% assign variable_name = value %}"),
        form: TagForm::SelfClosing,
        parameters: &[],
        examples: &[
            "{% assign product_title = product.title | upcase %}",
            "{% assign sale_price = product.price | times: 0.8 %}",
            "{% assign featured_products = collections.featured.products | limit: 4 %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "capture",
        category: TagCategory::Variable,
        description: "Creates a new variable with a string value",
        syntax: Some("{% capture variable %} ... {% endcapture %}"),
        form: TagForm::Block { end_tag: "endcapture" },
        parameters: &[],
        examples: &[
            "{% capture product_summary %}\n  {{ product.title }} - ${{ product.price | money }}\n  {% if product.available %}In Stock{% else %}Sold Out{% endif %}\n{% endcapture %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "decrement",
        category: TagCategory::Variable,
        description: "Creates a variable that decreases by 1 with each call (starts at -1)",
        syntax: Some("{% decrement variable_name %}"),
        form: TagForm::SelfClosing,
        parameters: &[],
        examples: &[
            "{% for product in collection.products %}\n  Item {% decrement counter %}: {{ product.title }}\n{% endfor %}",
        ],
        deprecated: false,
    },
    TagDefinition {
        name: "increment",
        category: TagCategory::Variable,
        description: "Creates a variable that increases by 1 with each call (starts at 0)",
        syntax: Some("{% increment variable_name %}"),
        form: TagForm::SelfClosing,
        parameters: &[],
        examples: &[
            "{% for product in collection.products %}\n  Item {% increment counter %}: {{ product.title }}\n{% endfor %}",
        ],
        deprecated: false,
    },
];
