use crate::api::Diagnostic;
use crate::parser::{Rule, Span, syntax::line_col};

/// Parser error with source position.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    /// 1-based line of `span.start`.
    pub line: usize,
    /// 1-based column of `span.start`, in characters.
    pub column: usize,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq)]
pub enum ParseErrorKind {
    /// Unexpected token
    UnexpectedToken { expected: String, found: String },
    /// String literal without a closing quote
    UnterminatedString,
    /// Input ended while a delimiter was still open
    UnclosedDelimiter { delimiter: char },
    /// Number literal that does not fit its type
    InvalidNumber { text: String },
    /// Records, arrays or expressions nested beyond `limit` levels
    NestingTooDeep { limit: usize },
    /// Other parse errors (catch-all for Pest errors we don't specifically handle)
    Other { message: String },
}

impl ParseError {
    /// Create a ParseError, computing line and column from `source`.
    pub fn new(kind: ParseErrorKind, source: &str, span: Span) -> Self {
        let (line, column) = line_col(source, span.start());
        Self {
            kind,
            span,
            line,
            column,
        }
    }

    /// Line and column where the error starts.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let (message, code, help) = match &self.kind {
            ParseErrorKind::UnexpectedToken { expected, found } => (
                format!("Expected {}, found {}", expected, found),
                "P001",
                None,
            ),
            ParseErrorKind::UnterminatedString => (
                "Unterminated string literal".to_string(),
                "P002",
                Some("Add the closing '\"'; strings cannot contain quotes".to_string()),
            ),
            ParseErrorKind::UnclosedDelimiter { delimiter } => (
                format!("Unclosed delimiter '{}'", delimiter),
                "P003",
                Some("Add the missing closing delimiter".to_string()),
            ),
            ParseErrorKind::InvalidNumber { text } => (
                format!("Invalid number literal '{}'", text),
                "P004",
                Some("Integers must fit in 64 bits".to_string()),
            ),
            ParseErrorKind::NestingTooDeep { limit } => (
                format!("Nesting deeper than {} levels", limit),
                "P005",
                Some("Flatten the value or split it into separate statements".to_string()),
            ),
            ParseErrorKind::Other { message } => (message.clone(), "P999", None),
        };

        Diagnostic {
            message,
            span: self.span.clone(),
            related: Vec::new(),
            help,
            code: code.to_string(),
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let diagnostic = self.to_diagnostic();
        write!(
            f,
            "{} at line {}, column {} [{}]",
            diagnostic.message, self.line, self.column, diagnostic.code
        )
    }
}

impl std::error::Error for ParseError {}

/// Convert Pest error to human-readable ParseError
pub fn convert_pest_error(err: pest::error::Error<Rule>, source: &str) -> ParseError {
    use pest::error::{ErrorVariant, InputLocation};

    let span = match err.location {
        InputLocation::Pos(pos) => Span(pos..pos),
        InputLocation::Span((start, end)) => Span(start..end),
    };
    let pos = span.start();
    let rest = source.get(pos..).unwrap_or("");

    let kind = match err.variant {
        ErrorVariant::ParsingError { positives, .. } => {
            if rest.starts_with('"') && !rest[1..].contains('"') {
                ParseErrorKind::UnterminatedString
            } else if at_end_of_input(rest) && positives.iter().any(|r| is_closing(*r)) {
                match innermost_unclosed(source) {
                    Some(delimiter) => ParseErrorKind::UnclosedDelimiter { delimiter },
                    None => ParseErrorKind::UnexpectedToken {
                        expected: format_expected_rules(&positives),
                        found: describe_found(rest),
                    },
                }
            } else {
                ParseErrorKind::UnexpectedToken {
                    expected: format_expected_rules(&positives),
                    found: describe_found(rest),
                }
            }
        }
        ErrorVariant::CustomError { message } => ParseErrorKind::Other { message },
    };

    ParseError::new(kind, source, span)
}

fn is_closing(rule: Rule) -> bool {
    matches!(rule, Rule::rbrace | Rule::rbracket | Rule::rparen)
}

// Only whitespace and comments remain.
fn at_end_of_input(rest: &str) -> bool {
    rest.lines()
        .all(|line| line.trim().is_empty() || line.trim_start().starts_with("*>"))
}

/// The innermost `{`, `[` or `(` left open at end of input.
///
/// Strings and comments are skipped so delimiters inside them do not count.
fn innermost_unclosed(source: &str) -> Option<char> {
    let mut stack = Vec::new();
    let mut chars = source.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => {
                for c in chars.by_ref() {
                    if c == '"' {
                        break;
                    }
                }
            }
            '*' if chars.peek() == Some(&'>') => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        break;
                    }
                }
            }
            '{' | '[' | '(' => stack.push(c),
            '}' | ']' | ')' => {
                stack.pop();
            }
            _ => {}
        }
    }
    stack.pop()
}

/// Human-readable name of a grammar rule in "expected ..." messages.
fn describe_rule(rule: Rule) -> &'static str {
    match rule {
        Rule::statement | Rule::name => "name",
        Rule::string => "string",
        Rule::integer | Rule::sci_number => "number",
        Rule::boolean => "boolean",
        Rule::record | Rule::kw_struct => "`struct`",
        Rule::array | Rule::lbracket => "`[`",
        Rule::expr | Rule::bang => "`!`",
        Rule::mod_call | Rule::kw_mod => "`mod`",
        Rule::grouped | Rule::lparen => "`(`",
        Rule::field => "field",
        Rule::add => "`+`",
        Rule::sub => "`-`",
        Rule::colon => "`:`",
        Rule::comma => "`,`",
        Rule::equals => "`=`",
        Rule::lbrace => "`{`",
        Rule::rbrace => "`}`",
        Rule::rbracket => "`]`",
        Rule::rparen => "`)`",
        Rule::EOI => "end of input",
        _ => "value",
    }
}

/// Format expected rules in a human-readable way
fn format_expected_rules(rules: &[Rule]) -> String {
    let mut concepts: Vec<&str> = Vec::new();
    for rule in rules {
        let concept = describe_rule(*rule);
        if !concepts.contains(&concept) {
            concepts.push(concept);
        }
    }

    match concepts.split_last() {
        None => "something else".to_string(),
        Some((only, [])) => only.to_string(),
        Some((last, init)) => format!("{} or {}", init.join(", "), last),
    }
}

/// Describe the text at the error position.
fn describe_found(rest: &str) -> String {
    if at_end_of_input(rest) {
        return "end of input".to_string();
    }
    let word: String = rest
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    if !word.is_empty() {
        return format!("`{}`", word);
    }
    match rest.chars().next() {
        Some(c) => format!("`{}`", c),
        None => "end of input".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_to_diagnostic() {
        let error = ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected: "`:`".to_string(),
                found: "`=`".to_string(),
            },
            "port = 1",
            Span(5..5),
        );

        let diagnostic = error.to_diagnostic();
        assert_eq!(diagnostic.message, "Expected `:`, found `=`");
        assert_eq!(diagnostic.code, "P001");
        assert_eq!(error.position(), (1, 6));
    }

    #[test]
    fn test_format_expected_rules() {
        assert_eq!(format_expected_rules(&[Rule::integer, Rule::sci_number]), "number");
        assert_eq!(
            format_expected_rules(&[Rule::name, Rule::EOI]),
            "name or end of input"
        );
        assert_eq!(
            format_expected_rules(&[Rule::comma, Rule::rbrace, Rule::add]),
            "`,`, `}` or `+`"
        );
        assert_eq!(format_expected_rules(&[]), "something else");
    }

    #[test]
    fn test_describe_found() {
        assert_eq!(describe_found("port = 1"), "`port`");
        assert_eq!(describe_found("= 1"), "`=`");
        assert_eq!(describe_found("   \n  *> trailing"), "end of input");
        assert_eq!(describe_found(""), "end of input");
    }

    #[test]
    fn test_innermost_unclosed() {
        assert_eq!(innermost_unclosed("a: struct { b = [1, 2"), Some('['));
        assert_eq!(innermost_unclosed("a: struct { b = [1, 2]"), Some('{'));
        assert_eq!(innermost_unclosed("a: \"{[(\" *> ( \n b: !(1"), Some('('));
        assert_eq!(innermost_unclosed("a: [1]"), None);
    }
}
