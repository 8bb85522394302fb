//! Reduces the pest parse tree to the [`Program`] AST.
//!
//! Pure structural transformation: punctuation is dropped, numeric literals
//! are classified, and `+`/`-` chains are folded left-associatively. Nothing
//! is evaluated and no names are resolved here.
//!
//! The AST is at most [`MAX_NESTING_DEPTH`] levels deep, so the builder and
//! the evaluator can recurse over it without exhausting the stack.

use lazy_static::lazy_static;
use pest::iterators::Pair;
use pest::pratt_parser::{Assoc, Op, PrattParser};

use crate::ast::{Binding, ExprNode, Ident, Node, Program};
use crate::parser::{BinaryOp, ParseError, ParseErrorKind, Rule, Span};
use crate::values::Value;

lazy_static! {
    // `+` and `-` share one precedence level and associate to the left.
    // `mod(...)` is a call, so it reaches the Pratt parser as a primary.
    static ref PRATT_PARSER: PrattParser<Rule> = PrattParser::new()
        .op(Op::infix(Rule::add, Assoc::Left) | Op::infix(Rule::sub, Assoc::Left));
}

/// Deepest nesting of records, arrays and expression operands accepted.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Punctuation and keyword tokens carry no information for the AST.
fn is_token(rule: Rule) -> bool {
    matches!(
        rule,
        Rule::colon
            | Rule::comma
            | Rule::equals
            | Rule::bang
            | Rule::lbrace
            | Rule::rbrace
            | Rule::lbracket
            | Rule::rbracket
            | Rule::lparen
            | Rule::rparen
            | Rule::kw_struct
            | Rule::kw_mod
            | Rule::EOI
    )
}

/// Inner pairs of `pair` without punctuation.
fn significant(pair: Pair<'_, Rule>) -> impl Iterator<Item = Pair<'_, Rule>> {
    pair.into_inner().filter(|p| !is_token(p.as_rule()))
}

fn missing(source: &str, pair: &Pair<'_, Rule>, what: &str) -> ParseError {
    ParseError::new(
        ParseErrorKind::Other {
            message: format!("missing {} in {:?}", what, pair.as_rule()),
        },
        source,
        pair.as_span().into(),
    )
}

fn too_deep(source: &str, pair: &Pair<'_, Rule>) -> ParseError {
    let start = pair.as_span().start();
    ParseError::new(
        ParseErrorKind::NestingTooDeep {
            limit: MAX_NESTING_DEPTH,
        },
        source,
        Span::new(start, start + 1),
    )
}

/// Build a [`Program`] from the `main` pair returned by the parser.
pub fn build_program(source: &str, main: Pair<'_, Rule>) -> Result<Program, ParseError> {
    let statements = significant(main)
        .map(|statement| build_binding(source, statement, 0))
        .collect::<Result<_, _>>()?;
    Ok(Program { statements })
}

/// `statement` and `field` share the shape `name <sep> value`.
fn build_binding(source: &str, pair: Pair<'_, Rule>, depth: usize) -> Result<Binding, ParseError> {
    let context = pair.clone();
    let mut inner = significant(pair);
    let name = inner
        .next()
        .ok_or_else(|| missing(source, &context, "name"))?;
    let value = inner
        .next()
        .ok_or_else(|| missing(source, &context, "value"))?;
    Ok(Binding {
        name: build_ident(name),
        value: build_node(source, value, depth)?,
    })
}

fn build_ident(pair: Pair<'_, Rule>) -> Ident {
    Ident::new(pair.as_str(), pair.as_span().into())
}

/// Build the node for one `value` alternative found `depth` levels down.
pub fn build_node(source: &str, pair: Pair<'_, Rule>, depth: usize) -> Result<Node, ParseError> {
    if depth > MAX_NESTING_DEPTH {
        return Err(too_deep(source, &pair));
    }
    match pair.as_rule() {
        Rule::string => {
            let s = pair.as_str();
            Ok(Node::Literal(Value::String(s[1..s.len() - 1].to_string())))
        }

        Rule::integer => Ok(Node::Literal(Value::Integer(parse_integer(source, &pair)?))),

        Rule::sci_number => Ok(Node::Literal(Value::Float(parse_float(source, &pair)?))),

        Rule::boolean => Ok(Node::Literal(Value::Boolean(pair.as_str() == "true"))),

        Rule::record => {
            let fields = significant(pair)
                .map(|field| build_binding(source, field, depth + 1))
                .collect::<Result<_, _>>()?;
            Ok(Node::RecordLiteral(fields))
        }

        Rule::array => {
            let items = significant(pair)
                .map(|item| build_node(source, item, depth + 1))
                .collect::<Result<_, _>>()?;
            Ok(Node::ArrayLiteral(items))
        }

        Rule::expr => {
            let context = pair.clone();
            let sum = significant(pair)
                .next()
                .ok_or_else(|| missing(source, &context, "expression"))?;
            Ok(Node::Expr(build_expr(source, sum, depth + 1)?))
        }

        rule => Err(ParseError::new(
            ParseErrorKind::Other {
                message: format!("Unhandled rule: {:?}", rule),
            },
            source,
            pair.as_span().into(),
        )),
    }
}

/// Build an expression from a `sum`, `mod_call`, `grouped`, `integer` or
/// `name` pair found `depth` levels down.
pub fn build_expr(source: &str, pair: Pair<'_, Rule>, depth: usize) -> Result<ExprNode, ParseError> {
    if depth > MAX_NESTING_DEPTH {
        return Err(too_deep(source, &pair));
    }
    match pair.as_rule() {
        Rule::sum => {
            // Each operator adds a level to the left-leaning tree.
            let operators = pair
                .clone()
                .into_inner()
                .filter(|p| matches!(p.as_rule(), Rule::add | Rule::sub))
                .count();
            let depth = depth + operators;
            if depth > MAX_NESTING_DEPTH {
                return Err(too_deep(source, &pair));
            }
            build_sum(source, pair, depth)
        }

        Rule::mod_call => {
            let span: Span = pair.as_span().into();
            let context = pair.clone();
            let mut args = significant(pair);
            let left = args
                .next()
                .ok_or_else(|| missing(source, &context, "dividend"))?;
            let right = args
                .next()
                .ok_or_else(|| missing(source, &context, "divisor"))?;
            Ok(ExprNode::Mod {
                left: Box::new(build_expr(source, left, depth + 1)?),
                right: Box::new(build_expr(source, right, depth + 1)?),
                span,
            })
        }

        Rule::grouped => {
            let context = pair.clone();
            let inner = significant(pair)
                .next()
                .ok_or_else(|| missing(source, &context, "expression"))?;
            build_expr(source, inner, depth + 1)
        }

        Rule::integer => Ok(ExprNode::NumberLit(parse_integer(source, &pair)?)),

        Rule::name => Ok(ExprNode::NameRef(build_ident(pair))),

        rule => Err(ParseError::new(
            ParseErrorKind::Other {
                message: format!("Unhandled rule: {:?}", rule),
            },
            source,
            pair.as_span().into(),
        )),
    }
}

/// Fold a `sum` with the Pratt parser; operands sit one level below `depth`.
fn build_sum(source: &str, pair: Pair<'_, Rule>, depth: usize) -> Result<ExprNode, ParseError> {
    PRATT_PARSER
        .map_primary(|primary| build_expr(source, primary, depth + 1))
        .map_infix(|lhs, op, rhs| {
            let span: Span = op.as_span().into();
            let op = match op.as_rule() {
                Rule::add => BinaryOp::Add,
                Rule::sub => BinaryOp::Sub,
                rule => unreachable!("Unknown binary operator: {:?}", rule),
            };
            Ok(ExprNode::Binary {
                op,
                left: Box::new(lhs?),
                right: Box::new(rhs?),
                span,
            })
        })
        .parse(pair.into_inner())
}

fn parse_integer(source: &str, pair: &Pair<'_, Rule>) -> Result<i64, ParseError> {
    // `str::parse` accepts a leading `+` as well as `-`.
    pair.as_str()
        .parse()
        .map_err(|_| invalid_number(source, pair))
}

fn parse_float(source: &str, pair: &Pair<'_, Rule>) -> Result<f64, ParseError> {
    let value: f64 = pair
        .as_str()
        .parse()
        .map_err(|_| invalid_number(source, pair))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid_number(source, pair))
    }
}

fn invalid_number(source: &str, pair: &Pair<'_, Rule>) -> ParseError {
    ParseError::new(
        ParseErrorKind::InvalidNumber {
            text: pair.as_str().to_string(),
        },
        source,
        pair.as_span().into(),
    )
}
