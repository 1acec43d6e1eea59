//! Line-level recognition of Liquid template expressions.
//!
//! Everything here works on one line of text at a time and never fails:
//! malformed or unterminated markup simply yields no result.
//!
//! 1. [`find_expression_spans`] locates `{{ … }}` and `{% … %}` expressions.
//! 2. [`variable_at`], [`filter_at`] and [`tag_at`] pick out the construct
//!    under a character offset.
//!
//! ```
//! use lqls_templates::filter_at;
//!
//! let filter = filter_at("<p>{{ product.price | money }}</p>", 25).unwrap();
//! assert_eq!(filter.name, "money");
//! ```

mod cursor;
mod filters;
mod quotes;
mod spans;
mod tags;
mod variables;

pub use cursor::identifier_before_trailing_dot;
pub use cursor::is_inside_open_expression;
pub use filters::filter_at;
pub use filters::filters_in;
pub use filters::FilterInvocation;
pub use spans::find_expression_spans;
pub use spans::span_at;
pub use spans::ExpressionSpan;
pub use spans::SpanKind;
pub use tags::tag_at;
pub use tags::tag_in;
pub use tags::TagInvocation;
pub use variables::variable_at;
pub use variables::variable_in;
pub use variables::VariableReference;
