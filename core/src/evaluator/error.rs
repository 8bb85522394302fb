//! Semantic errors raised while resolving a program.
//!
//! Any of these aborts the whole evaluation; no partial document is
//! produced.

use thiserror::Error;

use crate::api::{Diagnostic, RelatedInfo};
use crate::parser::{BinaryOp, Span};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A name declared twice in the same scope (top level or one record).
    #[error("duplicate name `{name}`")]
    DuplicateName { name: String, span: Span, first: Span },

    /// An expression referenced a name with no earlier top-level binding.
    #[error("unknown constant `{name}`")]
    UnknownConstant { name: String, span: Span },

    /// An expression referenced a binding that is not an integer or float.
    #[error("constant `{name}` is not numeric (it is a {found})")]
    NotNumeric {
        name: String,
        found: &'static str,
        span: Span,
    },

    /// `mod(a, b)` where `b` evaluated to zero.
    #[error("division by zero in `mod`")]
    DivisionByZero { span: Span },

    /// `mod(a, b)` where an operand evaluated to a float.
    #[error("`mod` requires integer operands, found {value:e}")]
    NonIntegerOperand { value: f64, span: Span },

    /// `+` or `-` whose result does not fit an integer or a finite float.
    #[error("arithmetic overflow in `{}`", .op.symbol())]
    Overflow { op: BinaryOp, span: Span },
}

impl EvalError {
    pub fn span(&self) -> &Span {
        match self {
            EvalError::DuplicateName { span, .. }
            | EvalError::UnknownConstant { span, .. }
            | EvalError::NotNumeric { span, .. }
            | EvalError::DivisionByZero { span }
            | EvalError::NonIntegerOperand { span, .. }
            | EvalError::Overflow { span, .. } => span,
        }
    }

    /// Stable diagnostic code.
    pub fn code(&self) -> &'static str {
        match self {
            EvalError::DuplicateName { .. } => "E001",
            EvalError::UnknownConstant { .. } => "E002",
            EvalError::NotNumeric { .. } => "E003",
            EvalError::DivisionByZero { .. } => "E004",
            EvalError::NonIntegerOperand { .. } => "E005",
            EvalError::Overflow { .. } => "E006",
        }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (related, help) = match self {
            EvalError::DuplicateName { first, .. } => (
                vec![RelatedInfo {
                    span: first.clone(),
                    message: "first declared here".to_string(),
                }],
                Some("Rename or remove one of the declarations".to_string()),
            ),
            EvalError::UnknownConstant { .. } => (
                Vec::new(),
                Some("Only top-level names declared earlier can be referenced".to_string()),
            ),
            EvalError::NotNumeric { .. } => (
                Vec::new(),
                Some("Expressions can only use integer and float constants".to_string()),
            ),
            EvalError::DivisionByZero { .. } => (Vec::new(), None),
            EvalError::NonIntegerOperand { .. } => (
                Vec::new(),
                Some("`mod` is only defined for integers".to_string()),
            ),
            EvalError::Overflow { .. } => (
                Vec::new(),
                Some("Integers are 64-bit and floats must stay finite".to_string()),
            ),
        };

        Diagnostic {
            message: self.to_string(),
            span: self.span().clone(),
            related,
            help,
            code: self.code().to_string(),
        }
    }
}
