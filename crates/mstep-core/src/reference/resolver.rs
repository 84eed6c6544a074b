use mstep_model::ReferenceValue;
use serde_json::{Map, Value};

use crate::error::{MigrationError, Result};
use crate::options::ReferenceSyntax;
use crate::reference::store::ReferenceStore;

/// Substitutes reference placeholders in match specifications.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceResolver<'a> {
    syntax: &'a ReferenceSyntax,
    store: &'a ReferenceStore,
}

impl<'a> ReferenceResolver<'a> {
    pub fn new(syntax: &'a ReferenceSyntax, store: &'a ReferenceStore) -> Self {
        Self { syntax, store }
    }

    /// Returns a copy of `value` with every placeholder replaced.
    ///
    /// Mapping keys are never resolved. A stored string that itself has the
    /// placeholder shape is refused, so resolving a resolved spec again
    /// always returns it unchanged.
    ///
    /// # Errors
    ///
    /// [`MigrationError::UnresolvedReference`] for the first placeholder whose
    /// identifier is not in the store, [`MigrationError::PlaceholderValue`]
    /// when the stored value would read as a placeholder.
    pub fn resolve(&self, value: &Value) -> Result<Value> {
        match value {
            Value::Object(map) => {
                let mut resolved = Map::with_capacity(map.len());
                for (key, entry) in map {
                    resolved.insert(key.clone(), self.resolve(entry)?);
                }
                Ok(Value::Object(resolved))
            }
            Value::Array(items) => items
                .iter()
                .map(|item| self.resolve(item))
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
            Value::String(text) => match self.syntax.parse(text) {
                Some(identifier) => self.substitute(identifier),
                None => Ok(value.clone()),
            },
            _ => Ok(value.clone()),
        }
    }

    fn substitute(&self, identifier: &str) -> Result<Value> {
        let stored = self
            .store
            .get(identifier)
            .ok_or_else(|| MigrationError::UnresolvedReference {
                identifier: identifier.to_string(),
            })?;
        if let ReferenceValue::String(text) = stored
            && self.syntax.parse(text).is_some()
        {
            return Err(MigrationError::PlaceholderValue {
                identifier: identifier.to_string(),
                value: text.clone(),
            });
        }
        Ok(stored.to_json())
    }
}

/// Lists the identifiers referenced by placeholders in `value`, in document
/// order, without duplicates.
pub fn placeholders(syntax: &ReferenceSyntax, value: &Value) -> Vec<String> {
    let mut found = Vec::new();
    collect_placeholders(syntax, value, &mut found);
    found
}

fn collect_placeholders(syntax: &ReferenceSyntax, value: &Value, found: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for entry in map.values() {
                collect_placeholders(syntax, entry, found);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_placeholders(syntax, item, found);
            }
        }
        Value::String(text) => {
            if let Some(identifier) = syntax.parse(text)
                && !found.iter().any(|known| known == identifier)
            {
                found.push(identifier.to_string());
            }
        }
        _ => {}
    }
}
