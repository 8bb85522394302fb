//! Core evaluation logic.

use crate::{
    ast::{Binding, ExprNode, Node, Program},
    evaluator::{
        EvalError,
        environment::{Environment, FieldSet},
        operators::{self, Number},
    },
    values::{Document, Value},
};

/// Resolves a program statement by statement.
pub struct Evaluator<'ast> {
    program: &'ast Program,
    env: Environment,
}

impl<'ast> Evaluator<'ast> {
    pub fn new(program: &'ast Program) -> Self {
        Self {
            program,
            env: Environment::new(),
        }
    }

    /// Evaluate every statement in declaration order.
    ///
    /// A statement's name becomes visible to later expressions only after its
    /// own value has been resolved.
    pub fn eval(mut self) -> Result<Document, EvalError> {
        let program = self.program;
        for Binding { name, value } in &program.statements {
            let value = self.eval_node(value)?;
            tracing::trace!(name = %name.name, kind = value.type_name(), "bound");
            self.env.bind(&name.name, name.span.clone(), value)?;
        }
        Ok(self.env.into_document())
    }

    fn eval_node(&self, node: &Node) -> Result<Value, EvalError> {
        match node {
            Node::Literal(value) => Ok(value.clone()),

            Node::RecordLiteral(fields) => {
                let mut record = FieldSet::default();
                for Binding { name, value } in fields {
                    let value = self.eval_node(value)?;
                    record.insert(&name.name, name.span.clone(), value)?;
                }
                Ok(Value::Record(record.into_record()))
            }

            Node::ArrayLiteral(items) => {
                let items = items
                    .iter()
                    .map(|item| self.eval_node(item))
                    .collect::<Result<_, _>>()?;
                Ok(Value::Array(items))
            }

            Node::Expr(expr) => Ok(self.eval_expr(expr)?.into_value()),
        }
    }

    fn eval_expr(&self, expr: &ExprNode) -> Result<Number, EvalError> {
        match expr {
            ExprNode::NumberLit(n) => Ok(Number::Int(*n)),

            ExprNode::NameRef(ident) => match self.env.lookup(&ident.name) {
                Some(Value::Integer(i)) => Ok(Number::Int(*i)),
                Some(Value::Float(f)) => Ok(Number::Float(*f)),
                Some(other) => Err(EvalError::NotNumeric {
                    name: ident.name.clone(),
                    found: other.type_name(),
                    span: ident.span.clone(),
                }),
                None => Err(EvalError::UnknownConstant {
                    name: ident.name.clone(),
                    span: ident.span.clone(),
                }),
            },

            ExprNode::Binary {
                op,
                left,
                right,
                span,
            } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                operators::eval_binary(*op, left, right, span)
            }

            ExprNode::Mod { left, right, span } => {
                let left = self.eval_expr(left)?;
                let right = self.eval_expr(right)?;
                operators::eval_mod(left, right, span)
            }
        }
    }
}
