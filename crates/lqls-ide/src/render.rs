//! Markdown panels for hovered filters, tags and variables.

use std::fmt::Write;

use lqls_catalog::FilterDefinition;
use lqls_catalog::ObjectDefinition;
use lqls_catalog::Parameter;
use lqls_catalog::PropertyDefinition;
use lqls_catalog::TagDefinition;
use lqls_catalog::TagForm;
use lqls_conf::Settings;
use lqls_templates::FilterInvocation;
use lqls_templates::TagInvocation;
use lqls_templates::VariableReference;

const RULE: &str = "---\n\n";
const DEPRECATED_MARK: &str = "⚠️";

#[must_use]
pub fn render_filter(
    filter: &FilterInvocation,
    definition: &FilterDefinition,
    settings: &Settings,
) -> String {
    let mut md = String::new();

    let _ = write!(md, "## `{}` Filter\n\n", filter.name);
    let _ = write!(md, "**Category:** {}\n\n", definition.category);

    if settings.show_description && !definition.description.is_empty() {
        let _ = write!(md, "*{}*\n\n", definition.description);
    }
    if settings.show_types && !definition.return_type.is_empty() {
        let _ = write!(md, "**Returns:** `{}`\n\n", definition.return_type);
    }
    if let Some(syntax) = definition.syntax {
        let _ = write!(md, "**Syntax:** `{syntax}`\n\n");
    }
    if settings.show_deprecated_warnings && definition.deprecated {
        let _ = write!(
            md,
            "{DEPRECATED_MARK} **Deprecated:** This filter is deprecated and should be avoided.\n\n"
        );
    }

    if settings.show_filter_parameters && !definition.parameters.is_empty() {
        parameter_table(&mut md, definition.parameters, ParameterColumn::Default);
    }
    current_parameters(&mut md, &filter.parameters);
    if settings.show_filter_examples {
        examples(&mut md, definition.examples);
    }

    md
}

/// Render a tag panel. `tag` may be a closing tag (`endif`) whose opener is
/// `definition`.
#[must_use]
pub fn render_tag(tag: &TagInvocation, definition: &TagDefinition, settings: &Settings) -> String {
    let mut md = String::new();

    let _ = write!(md, "## `{}` Tag\n\n", tag.name);
    let _ = write!(md, "**Category:** {}\n\n", definition.category);
    if tag.name != definition.name {
        let _ = write!(md, "**Closes:** `{}`\n\n", definition.name);
    }

    if settings.show_description && !definition.description.is_empty() {
        let _ = write!(md, "*{}*\n\n", definition.description);
    }
    if let Some(syntax) = definition.syntax {
        let _ = write!(md, "**Syntax:** `{syntax}`\n\n");
    }
    match definition.form {
        TagForm::Block { end_tag } => {
            let _ = write!(md, "**End tag:** `{end_tag}`\n\n");
        }
        TagForm::SelfClosing => md.push_str("*Self-closing tag*\n\n"),
        TagForm::Intermediate => {}
    }
    if settings.show_deprecated_warnings && definition.deprecated {
        let _ = write!(
            md,
            "{DEPRECATED_MARK} **Deprecated:** This tag is deprecated and should be avoided.\n\n"
        );
    }

    if settings.show_filter_parameters && !definition.parameters.is_empty() {
        parameter_table(&mut md, definition.parameters, ParameterColumn::Required);
    }
    current_parameters(&mut md, &tag.parameters);
    if settings.show_tag_examples {
        examples(&mut md, definition.examples);
    }

    md
}

/// Render a variable panel. `property` is the resolved definition of the
/// variable's property path, if it has one.
#[must_use]
pub fn render_variable(
    variable: &VariableReference,
    object: &ObjectDefinition,
    property: Option<&PropertyDefinition>,
    settings: &Settings,
) -> String {
    let mut md = String::new();

    let _ = write!(md, "## `{}`\n\n", variable.full_path);

    if settings.show_types {
        let _ = write!(md, "**Type:** `{}`\n\n", object.type_name);
    }
    if settings.show_description && !object.description.is_empty() {
        let _ = write!(md, "*{}*\n\n", object.description);
    }
    if settings.show_deprecated_warnings && object.deprecated {
        let _ = write!(md, "{DEPRECATED_MARK} **Deprecated:** This object is deprecated\n\n");
    }

    if let Some(property) = property {
        let _ = write!(md, "**Property Type:** `{}`\n\n", property.type_name);
        if !property.description.is_empty() {
            let _ = write!(md, "**Description:** {}\n\n", property.description);
        }
        if let Some(note) = property.deprecated.filter(|_| settings.show_deprecated_warnings) {
            let _ = write!(md, "{DEPRECATED_MARK} **Property Deprecated:** {note}\n\n");
        }
    }

    available_properties(&mut md, object, settings.max_properties_in_hover);

    md
}

enum ParameterColumn {
    Default,
    Required,
}

fn parameter_table(md: &mut String, parameters: &[Parameter], last: ParameterColumn) {
    md.push_str(RULE);
    md.push_str("### Parameters\n\n");

    match last {
        ParameterColumn::Default => {
            md.push_str("| Parameter | Type | Description | Default |\n");
            md.push_str("|-----------|------|-------------|--------|\n");
        }
        ParameterColumn::Required => {
            md.push_str("| Parameter | Type | Description | Required |\n");
            md.push_str("|-----------|------|-------------|----------|\n");
        }
    }

    for parameter in parameters {
        let mut description = escape_cell(parameter.description);
        if !parameter.values.is_empty() {
            let values: Vec<String> = parameter.values.iter().map(|v| format!("`{v}`")).collect();
            let _ = write!(description, " (one of {})", values.join(", "));
        }

        let last_cell = match last {
            ParameterColumn::Default => parameter
                .default
                .map(|default| format!("`{default}`"))
                .unwrap_or_default(),
            ParameterColumn::Required => String::from(if parameter.required { "yes" } else { "" }),
        };

        let _ = writeln!(
            md,
            "| `{}` | `{}` | {} | {} |",
            parameter.name, parameter.type_name, description, last_cell
        );
    }
}

fn current_parameters(md: &mut String, parameters: &[String]) {
    if parameters.is_empty() {
        return;
    }

    md.push_str(RULE);
    md.push_str("### Current Parameters\n\n");
    for (index, parameter) in parameters.iter().enumerate() {
        let _ = writeln!(md, "{}. `{}`", index + 1, parameter);
    }
    md.push('\n');
}

fn examples(md: &mut String, examples: &[&str]) {
    if examples.is_empty() {
        return;
    }

    md.push_str(RULE);
    md.push_str("### Examples\n\n");
    for example in examples {
        let _ = write!(md, "```liquid\n{example}\n```\n\n");
    }
}

fn available_properties(md: &mut String, object: &ObjectDefinition, max: usize) {
    if object.properties.is_empty() {
        return;
    }

    md.push_str(RULE);
    md.push_str("### Available Properties\n\n");
    md.push_str("| Property | Type | Description |\n");
    md.push_str("|----------|------|-------------|\n");

    let mut properties: Vec<&PropertyDefinition> = object.properties.iter().collect();
    properties.sort_by_key(|property| property.name);

    for property in properties.iter().take(max) {
        let mark = if property.deprecated.is_some() {
            format!(" {DEPRECATED_MARK}")
        } else {
            String::new()
        };
        let _ = writeln!(
            md,
            "| `{}`{} | `{}` | {} |",
            property.name,
            mark,
            property.type_name,
            escape_cell(property.description)
        );
    }

    if properties.len() > max {
        let _ = write!(md, "\n*Showing {} of {} properties*\n", max, properties.len());
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
