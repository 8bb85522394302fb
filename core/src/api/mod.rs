//! Public entry point: text in, [`Document`] or [`Error`] out.
//!
//! ```
//! use confl_core::{load, Error, Value};
//!
//! let document = load("port: 8080\n*> comment\nflag: true").unwrap();
//! assert_eq!(document["port"], Value::Integer(8080));
//!
//! assert!(matches!(load("a: 1\na: 2"), Err(Error::Semantic(_))));
//! assert!(matches!(load("a 1"), Err(Error::Syntax(_))));
//! ```

mod error;

pub use error::{Diagnostic, Error, RelatedInfo};

use crate::{evaluator, parser, values::Document};

/// Parse and evaluate one configuration source.
pub fn load(source: &str) -> Result<Document, Error> {
    let program = parser::parse(source)?;
    let document = evaluator::eval(&program)?;
    tracing::debug!(entries = document.len(), "evaluated configuration");
    Ok(document)
}
