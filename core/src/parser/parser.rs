use pest::Parser;
use pest::iterators::Pair;
use pest_derive::Parser;

use crate::ast::{Program, builder};
use crate::parser::error::{ParseError, convert_pest_error};

#[derive(Parser)]
#[grammar = "parser/config.pest"]
pub struct ConfigParser;

/// Parse `source` into the concrete syntax tree rooted at [`Rule::main`].
pub fn parse_cst(source: &str) -> Result<Pair<'_, Rule>, ParseError> {
    let mut pairs =
        ConfigParser::parse(Rule::main, source).map_err(|e| convert_pest_error(e, source))?;
    // `main` always produces exactly one pair on success.
    pairs.next().ok_or_else(|| {
        convert_pest_error(
            pest::error::Error::new_from_pos(
                pest::error::ErrorVariant::CustomError {
                    message: "missing expected pair in rule".to_string(),
                },
                pest::Position::from_start(source),
            ),
            source,
        )
    })
}

/// Parse `source` and reduce it to a [`Program`].
pub fn parse(source: &str) -> Result<Program, ParseError> {
    let main = parse_cst(source)?;
    let program = builder::build_program(source, main)?;
    tracing::debug!(statements = program.statements.len(), "parsed configuration");
    Ok(program)
}
