//! Helpers for text to the left of the cursor.

/// Whether `prefix` ends inside an expression that has been opened but not
/// closed, e.g. `Hello {{ product.`.
///
/// Openers and closers are counted independently, so a line with more `{{`
/// than `}}` (or more `{%` than `%}`) is considered open.
#[must_use]
pub fn is_inside_open_expression(prefix: &str) -> bool {
    let open_outputs = prefix.matches("{{").count();
    let close_outputs = prefix.matches("}}").count();
    let open_tags = prefix.matches("{%").count();
    let close_tags = prefix.matches("%}").count();

    open_outputs > close_outputs || open_tags > close_tags
}

/// The identifier immediately before a trailing `.`.
///
/// `"{{ product."` yields `product`; `"{{ product.title."` yields `title`.
#[must_use]
pub fn identifier_before_trailing_dot(prefix: &str) -> Option<&str> {
    let before = prefix.strip_suffix('.')?;
    let start = before
        .char_indices()
        .rev()
        .take_while(|&(_, c)| c.is_ascii_alphanumeric() || c == '_')
        .last()
        .map(|(idx, _)| idx)?;

    Some(&before[start..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_output() {
        assert!(is_inside_open_expression("{{ foo"));
        assert!(!is_inside_open_expression("{{ foo }}"));
    }

    #[test]
    fn open_tag() {
        assert!(is_inside_open_expression("{% if x"));
        assert!(!is_inside_open_expression("{% if x %} text"));
    }

    #[test]
    fn plain_text_is_not_open() {
        assert!(!is_inside_open_expression(""));
        assert!(!is_inside_open_expression("<div class=\"card\">"));
    }

    #[test]
    fn second_expression_still_open() {
        assert!(is_inside_open_expression("{{ a }} and {{ b"));
    }

    #[test]
    fn identifier_before_dot() {
        assert_eq!(identifier_before_trailing_dot("{{ product."), Some("product"));
        assert_eq!(identifier_before_trailing_dot("{{ product.title."), Some("title"));
        assert_eq!(identifier_before_trailing_dot("x.y_2."), Some("y_2"));
    }

    #[test]
    fn no_trailing_dot() {
        assert_eq!(identifier_before_trailing_dot("{{ product"), None);
        assert_eq!(identifier_before_trailing_dot(""), None);
    }

    #[test]
    fn dot_without_identifier() {
        assert_eq!(identifier_before_trailing_dot("{{ ."), None);
        assert_eq!(identifier_before_trailing_dot("."), None);
        assert_eq!(identifier_before_trailing_dot("a.."), None);
    }
}
