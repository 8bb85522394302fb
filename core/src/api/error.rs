//! Public error types for the confl API.
//!
//! Internal parse and evaluation errors are wrapped here and turned into
//! [`Diagnostic`]s for presentation.

use thiserror::Error as ThisError;

use crate::evaluator::EvalError;
use crate::parser::{ParseError, Span};

/// Public error type for a parse/evaluate pass.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// Malformed input; no AST was built.
    #[error("syntax error: {0}")]
    Syntax(#[from] ParseError),

    /// Well-formed input that cannot be resolved.
    #[error("semantic error: {0}")]
    Semantic(#[from] EvalError),
}

impl Error {
    pub fn span(&self) -> &Span {
        match self {
            Error::Syntax(e) => &e.span,
            Error::Semantic(e) => e.span(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Error::Syntax(e) => e.to_diagnostic(),
            Error::Semantic(e) => e.to_diagnostic(),
        }
    }
}

/// An error message with source location, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Related locations that provide additional context.
    pub related: Vec<RelatedInfo>,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Stable error code (e.g., "E001") for documentation lookup.
    pub code: String,
}

/// Related information for a diagnostic (e.g., "first declared here").
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedInfo {
    /// Source location of the related information.
    pub span: Span,

    /// Message explaining the relevance.
    pub message: String,
}
