//! Editable field values.
//!
//! This module provides the core data structures for representing the values
//! a form field can hold. Objects preserve insertion order via `IndexMap`,
//! so the order a value was built in is the order it is edited and emitted
//! in.
//!
//! # Example
//!
//! ```
//! use formquill::value::{Number, Value};
//! use indexmap::IndexMap;
//!
//! let mut fields = IndexMap::new();
//! fields.insert("title".to_string(), Value::String("Hello".to_string()));
//! fields.insert("count".to_string(), Value::Number(Number::Integer(3)));
//! let item = Value::Object(fields);
//!
//! assert!(item.is_object());
//! assert!(!item.is_empty());
//! ```

use indexmap::IndexMap;

/// A numeric field value (integer or float).
#[derive(Debug, Clone, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }
}

/// The value held by a single form field or list item.
///
/// Objects keep their key order; a list widget's item is usually an
/// `Object`, but scalar items are equally valid.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An object value containing ordered key-value pairs
    Object(IndexMap<String, Value>),
    /// An ordered sequence of values
    List(Vec<Value>),
    /// A string value
    String(String),
    /// A numeric value (integer or float)
    Number(Number),
    /// A boolean value
    Boolean(bool),
    /// An absent value
    Null,
}

impl Value {
    /// Returns an empty object value.
    pub fn empty_object() -> Self {
        Value::Object(IndexMap::new())
    }

    /// Returns true if this value is an object.
    ///
    /// # Example
    ///
    /// ```
    /// use formquill::value::Value;
    ///
    /// assert!(Value::empty_object().is_object());
    /// assert!(!Value::Boolean(true).is_object());
    /// ```
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns true if this value is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns true if this value carries no content.
    ///
    /// Null, the empty string, the empty list and the empty object are
    /// empty; numbers and booleans never are. Default synthesis uses this
    /// to decide whether a nested result is worth assigning and whether a
    /// configured literal default counts as set.
    ///
    /// # Example
    ///
    /// ```
    /// use formquill::value::{Number, Value};
    ///
    /// assert!(Value::Null.is_empty());
    /// assert!(Value::String(String::new()).is_empty());
    /// assert!(!Value::Number(Number::Integer(0)).is_empty());
    /// assert!(!Value::Boolean(false).is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Object(fields) => fields.is_empty(),
            Value::Number(_) | Value::Boolean(_) => false,
        }
    }

    /// Returns the object fields if this value is an object.
    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(fields) => Some(fields),
            _ => None,
        }
    }

    /// Converts a parsed YAML value into a field value.
    ///
    /// Used when reading literal `default` entries from a field definition.
    /// YAML tagged values are unwrapped to their payload; non-string map
    /// keys are stringified, since field names are strings.
    pub fn from_yaml(yaml: &serde_yaml::Value) -> Self {
        match yaml {
            serde_yaml::Value::Null => Value::Null,
            serde_yaml::Value::Bool(b) => Value::Boolean(*b),
            serde_yaml::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Number(Number::Integer(i))
                } else {
                    Value::Number(Number::Float(n.as_f64().unwrap_or(0.0)))
                }
            }
            serde_yaml::Value::String(s) => Value::String(s.clone()),
            serde_yaml::Value::Sequence(items) => {
                Value::List(items.iter().map(Value::from_yaml).collect())
            }
            serde_yaml::Value::Mapping(mapping) => {
                let mut fields = IndexMap::new();
                for (key, value) in mapping {
                    let key = match key {
                        serde_yaml::Value::String(s) => s.clone(),
                        other => serde_yaml::to_string(other)
                            .map(|s| s.trim_end().to_string())
                            .unwrap_or_default(),
                    };
                    fields.insert(key, Value::from_yaml(value));
                }
                Value::Object(fields)
            }
            serde_yaml::Value::Tagged(tagged) => Value::from_yaml(&tagged.value),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::Integer(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }
}
