//! Abstract syntax tree of a configuration source.
//!
//! The tree is produced by [`builder`] from the pest parse tree and consumed
//! by the evaluator. Literal scalars are already [`Value`]s; only records,
//! arrays and `!( ... )` expressions need further resolution.

pub mod builder;



use core::fmt;

use crate::parser::{BinaryOp, Span};
use crate::values::Value;

/// A parsed configuration: top-level statements in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Binding>,
}

/// `name: value` at the top level, or `name = value` inside a record.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: Ident,
    pub value: Node,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident {
    pub name: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Literal(Value),
    RecordLiteral(Vec<Binding>),
    ArrayLiteral(Vec<Node>),
    Expr(ExprNode),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprNode {
    NumberLit(i64),
    NameRef(Ident),
    /// `left op right`; `span` covers the operator token.
    Binary {
        op: BinaryOp,
        left: Box<ExprNode>,
        right: Box<ExprNode>,
        span: Span,
    },
    /// `mod(left, right)`; `span` covers the whole call.
    Mod {
        left: Box<ExprNode>,
        right: Box<ExprNode>,
        span: Span,
    },
}

impl Ident {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

// Fully parenthesized, so grouping is visible when debugging.
impl fmt::Display for ExprNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExprNode::NumberLit(n) => write!(f, "{}", n),
            ExprNode::NameRef(ident) => write!(f, "{}", ident.name),
            ExprNode::Binary { op, left, right, .. } => {
                write!(f, "({} {} {})", left, op.symbol(), right)
            }
            ExprNode::Mod { left, right, .. } => write!(f, "mod({}, {})", left, right),
        }
    }
}
