//! Sequential evaluator for confl programs.
//!
//! Walks the top-level statements in declaration order, resolving each one
//! to a [`Value`](crate::values::Value) and binding it into the
//! [`Environment`]. Expressions see only bindings made by earlier statements,
//! so forward references fail with [`EvalError::UnknownConstant`].
//!
//! ## Example
//!
//! ```
//! use confl_core::{evaluator, parser, Value};
//!
//! let program = parser::parse("base: 10\nderived: !(base + 5)").unwrap();
//! let document = evaluator::eval(&program).unwrap();
//! assert_eq!(document["derived"], Value::Integer(15));
//! ```

mod environment;
mod error;
mod eval;
mod operators;


pub use environment::Environment;
pub use error::EvalError;
pub use eval::Evaluator;

use crate::{ast::Program, values::Document};

/// Evaluate a parsed program into a [`Document`].
pub fn eval(program: &Program) -> Result<Document, EvalError> {
    Evaluator::new(program).eval()
}
