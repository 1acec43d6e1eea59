/// A named argument accepted by a filter or tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Parameter {
    pub name: &'static str,
    pub type_name: &'static str,
    pub description: &'static str,
    pub default: Option<&'static str>,
    pub required: bool,
    /// Accepted values when the parameter is an enumeration.
    pub values: &'static [&'static str],
}
