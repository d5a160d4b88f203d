pub mod direction;
pub mod editing;
pub mod print_helpers;
pub mod raw_expression;
pub mod span;

pub use raw_expression::RawExpression;
pub use span::Span;
