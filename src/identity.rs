use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;
use serde_json::Value;

/// Key fields recognized by the convention resolver, in priority order.
/// Each field is probed under its serialized PascalCase and snake_case
/// spellings before the next field is considered.
const KEY_FIELDS: [[&str; 2]; 3] = [["Id", "id"], ["Name", "name"], ["Phone", "phone"]];

/// The value that designates a record within its store.
///
/// Any JSON-representable value can act as an identity: an integer, a
/// string, a UUID serialized as text. Equality is the value's native
/// equality; `Display` produces the form matched against the text of an
/// `Id` element in the file-backed store.
#[derive(Debug, Clone, PartialEq)]
pub struct Identity(Value);

impl Identity {
    /// The underlying value.
    pub fn value(&self) -> &Value {
        &self.0
    }

    fn hashed(content: &Value) -> Self {
        let mut hasher = DefaultHasher::new();
        content.to_string().hash(&mut hasher);
        Identity(Value::from(hasher.finish()))
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(text) => f.write_str(text),
            other => write!(f, "{}", other),
        }
    }
}

impl From<Value> for Identity {
    fn from(value: Value) -> Self {
        Identity(value)
    }
}

impl From<i64> for Identity {
    fn from(id: i64) -> Self {
        Identity(Value::from(id))
    }
}

impl From<&str> for Identity {
    fn from(id: &str) -> Self {
        Identity(Value::from(id))
    }
}

impl From<String> for Identity {
    fn from(id: String) -> Self {
        Identity(Value::from(id))
    }
}

/// Contract for record types that know their own identity.
///
/// Implementing this and constructing stores with [`Resolver::declared`]
/// is the preferred alternative to the key-field convention.
pub trait Identify {
    fn identity(&self) -> Identity;
}

/// How a store extracts the identity of a record.
pub struct Resolver<T> {
    strategy: Strategy<T>,
}

enum Strategy<T> {
    Convention,
    Custom(Box<dyn Fn(&T) -> Identity + Send + Sync>),
}

impl<T> Resolver<T> {
    /// Probes the serialized record for a recognized key field (`Id`, then
    /// `Name`, then `Phone`), falling back to a hash of the record's
    /// serialized content when none is present.
    ///
    /// The fallback is a degenerate path: the hash changes across
    /// toolchain revisions and says nothing about logical identity once a
    /// record has been serialized or the process restarted. Record types
    /// without a recognized key field should use [`Resolver::declared`] or
    /// [`Resolver::custom`] instead.
    pub fn convention() -> Self {
        Resolver {
            strategy: Strategy::Convention,
        }
    }

    /// Uses the record type's [`Identify`] implementation.
    pub fn declared() -> Self
    where
        T: Identify + 'static,
    {
        Self::custom(|record: &T| record.identity())
    }

    /// Uses a caller-supplied extraction function.
    pub fn custom<F>(extract: F) -> Self
    where
        F: Fn(&T) -> Identity + Send + Sync + 'static,
    {
        Resolver {
            strategy: Strategy::Custom(Box::new(extract)),
        }
    }

    /// Resolves the record's identity. Never fails: records that carry no
    /// recognized key resolve through the content-hash fallback.
    pub fn resolve(&self, record: &T) -> Identity
    where
        T: Serialize,
    {
        match &self.strategy {
            Strategy::Custom(extract) => extract(record),
            Strategy::Convention => probe(record),
        }
    }
}

impl<T> Default for Resolver<T> {
    fn default() -> Self {
        Self::convention()
    }
}

fn probe<T: Serialize>(record: &T) -> Identity {
    let serialized = match serde_json::to_value(record) {
        Ok(value) => value,
        // Unserializable records all share the degenerate identity.
        Err(_) => return Identity::hashed(&Value::Null),
    };

    if let Value::Object(fields) = &serialized {
        for spellings in KEY_FIELDS {
            for key in spellings {
                if let Some(value) = fields.get(key) {
                    return Identity(value.clone());
                }
            }
        }
    }

    Identity::hashed(&serialized)
}
