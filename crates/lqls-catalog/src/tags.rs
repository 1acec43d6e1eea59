use std::fmt;

use crate::Parameter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TagCategory {
    Conditional,
    Html,
    Iteration,
    Syntax,
    Theme,
    Variable,
}

impl TagCategory {
    pub const ALL: [TagCategory; 6] = [
        TagCategory::Conditional,
        TagCategory::Html,
        TagCategory::Iteration,
        TagCategory::Syntax,
        TagCategory::Theme,
        TagCategory::Variable,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TagCategory::Conditional => "Conditional",
            TagCategory::Html => "HTML",
            TagCategory::Iteration => "Iteration",
            TagCategory::Syntax => "Syntax",
            TagCategory::Theme => "Theme",
            TagCategory::Variable => "Variable",
        }
    }
}

impl fmt::Display for TagCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a tag is closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagForm {
    /// Opens a block that ends with `end_tag`.
    Block { end_tag: &'static str },
    /// Stands alone.
    SelfClosing,
    /// Only valid inside another tag's block (`else`, `when`, …).
    Intermediate,
}

/// A tag such as `if` or `render`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagDefinition {
    pub name: &'static str,
    pub category: TagCategory,
    pub description: &'static str,
    pub syntax: Option<&'static str>,
    pub form: TagForm,
    pub parameters: &'static [Parameter],
    pub examples: &'static [&'static str],
    pub deprecated: bool,
}

impl TagDefinition {
    #[must_use]
    pub fn end_tag(&self) -> Option<&'static str> {
        match self.form {
            TagForm::Block { end_tag } => Some(end_tag),
            TagForm::SelfClosing | TagForm::Intermediate => None,
        }
    }

    #[must_use]
    pub fn is_self_closing(&self) -> bool {
        self.form == TagForm::SelfClosing
    }
}
