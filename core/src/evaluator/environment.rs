use indexmap::IndexMap;

use crate::evaluator::EvalError;
use crate::parser::Span;
use crate::values::{Document, Value};

/// Top-level bindings resolved so far, in declaration order.
///
/// Append-only: a name is added once its statement is fully evaluated and is
/// never replaced. Expressions only get a shared reference.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: Document,
    declared_at: Vec<Span>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, rejecting a second declaration of the same name.
    pub fn bind(&mut self, name: &str, span: Span, value: Value) -> Result<(), EvalError> {
        if let Some(index) = self.bindings.get_index_of(name) {
            return Err(EvalError::DuplicateName {
                name: name.to_string(),
                span,
                first: self.declared_at[index].clone(),
            });
        }
        self.bindings.insert(name.to_string(), value);
        self.declared_at.push(span);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn into_document(self) -> Document {
        self.bindings
    }
}

/// Collects record fields, rejecting duplicates within the record.
#[derive(Debug, Default)]
pub(super) struct FieldSet {
    fields: IndexMap<String, (Span, Value)>,
}

impl FieldSet {
    pub(super) fn insert(&mut self, name: &str, span: Span, value: Value) -> Result<(), EvalError> {
        if let Some((first, _)) = self.fields.get(name) {
            return Err(EvalError::DuplicateName {
                name: name.to_string(),
                span,
                first: first.clone(),
            });
        }
        self.fields.insert(name.to_string(), (span, value));
        Ok(())
    }

    pub(super) fn into_record(self) -> crate::values::Record {
        self.fields
            .into_iter()
            .map(|(name, (_, value))| (name, value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_and_lookup() {
        let mut env = Environment::new();
        assert!(env.is_empty());
        env.bind("a", Span::new(0, 1), Value::Integer(1)).unwrap();
        env.bind("b", Span::new(5, 6), Value::from("x")).unwrap();
        assert_eq!(env.len(), 2);
        assert_eq!(env.lookup("a"), Some(&Value::Integer(1)));
        assert_eq!(env.lookup("c"), None);

        let names: Vec<String> = env.into_document().into_keys().collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_rebinding_is_rejected() {
        let mut env = Environment::new();
        env.bind("a", Span::new(0, 1), Value::Integer(1)).unwrap();
        let err = env.bind("a", Span::new(5, 6), Value::Integer(2)).unwrap_err();
        assert_eq!(
            err,
            EvalError::DuplicateName {
                name: "a".to_string(),
                span: Span::new(5, 6),
                first: Span::new(0, 1),
            }
        );
        assert_eq!(env.lookup("a"), Some(&Value::Integer(1)));
    }
}
