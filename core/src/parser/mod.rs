pub mod error;
#[allow(clippy::module_inception)]
pub mod parser;
mod syntax;

// Re-export the parser and rule enum for external use
pub use parser::ConfigParser;
pub use parser::Rule;
pub use parser::{parse, parse_cst};

pub use error::{ParseError, ParseErrorKind};
pub use syntax::{BinaryOp, Span, line_col};
