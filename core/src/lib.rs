//! Core of the confl configuration language.
//!
//! Text goes through the pest grammar ([`parser`]), is reduced to a compact
//! AST ([`ast`]), and is resolved statement by statement into a [`Document`]
//! by the [`evaluator`]. The crate performs no I/O; callers pick the output
//! format and present errors.

pub mod api;
pub mod ast;
pub mod evaluator;
pub mod parser;
pub mod values;

pub use api::{Diagnostic, Error, RelatedInfo, load};
pub use values::{Document, Record, Value};
