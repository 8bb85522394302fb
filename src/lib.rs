//! confl - a small configuration language that resolves to a key/value document
//!
//! # Overview
//!
//! A confl source is a list of `name: value` statements. Values are strings,
//! integers, floats in scientific notation, booleans, `struct { ... }` records,
//! `[ ... ]` arrays, and `!( ... )` arithmetic expressions over integer
//! literals and earlier top-level constants. Line comments start with `*>`.
//!
//! # Quick Start
//!
//! ```
//! use confl::{load, Value};
//!
//! let source = "
//! *> network settings
//! base: 8000
//! server: struct { host = \"localhost\", port = !(base + 80) }
//! ";
//! let document = load(source).unwrap();
//! let server = document["server"].as_record().unwrap();
//! assert_eq!(server["port"], Value::Integer(8080));
//! ```
//!
//! Errors carry spans; use [`render_error`] or
//! [`render_error_to_string_no_color`] to show them over the source text.

// Re-export public API from confl_core
pub use confl_core::api::{Diagnostic, Error, RelatedInfo, load};
pub use confl_core::values::{self, Document, Record, Value};
pub use confl_core::{ast, evaluator, parser};

// Re-export errors
pub use confl_core::evaluator::EvalError;
pub use confl_core::parser::{ParseError, ParseErrorKind};

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
