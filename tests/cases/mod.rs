#![allow(dead_code)]

use confl::Value;

/// Build a record value from `(name, value)` pairs, keeping their order.
pub fn record(fields: Vec<(&str, Value)>) -> Value {
    Value::Record(
        fields
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect(),
    )
}

pub fn string(s: &str) -> Value {
    Value::String(s.to_string())
}

/// Document entries in order, for order-sensitive comparison.
pub fn entries(document: confl::Document) -> Vec<(String, Value)> {
    document.into_iter().collect()
}

/// Declare a test that loads `input` and checks the outcome.
///
/// `document` lists the expected entries in order; `error` is a pattern the
/// `confl::Error` must match.
#[macro_export]
macro_rules! test_case {
    (
        name: $name:ident,
        input: { $input:expr },
        document: { $($key:literal => $value:expr),* $(,)? } $(,)?
    ) => {
        #[test]
        fn $name() {
            #[allow(unused_imports)]
            use confl::Value;
            #[allow(unused_imports)]
            use cases::{record, string};

            let document = confl::load($input)
                .unwrap_or_else(|e| panic!("loading failed: {}\n{}", e, $input));
            let expected: Vec<(String, confl::Value)> = vec![$(($key.to_string(), $value)),*];
            pretty_assertions::assert_eq!(cases::entries(document), expected);
        }
    };
    (
        name: $name:ident,
        input: { $input:expr },
        error: { $pattern:pat } $(,)?
    ) => {
        #[test]
        fn $name() {
            #[allow(unused_imports)]
            use confl::{Error, EvalError, ParseError, ParseErrorKind};

            match confl::load($input) {
                Err($pattern) => {}
                other => panic!("expected {}, got {:?}", stringify!($pattern), other),
            }
        }
    };
}
