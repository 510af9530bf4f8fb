//! Runtime values bound onto object instances
//!
//! The instance binder never inspects a value against its field's declared
//! type; `GqlValue` is simply what callers hand to a constructor.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A runtime value held by an instance attribute
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GqlValue {
    /// Explicit null
    #[default]
    Null,
    /// Boolean value
    Boolean(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// String value
    String(String),
    /// Ordered list of values
    List(Vec<GqlValue>),
    /// Named members (insertion order preserved)
    Object(IndexMap<String, GqlValue>),
}

impl GqlValue {
    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    /// Check if this value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get as Boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as Int
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as Float (integers widen)
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get as string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as list
    pub fn as_list(&self) -> Option<&[GqlValue]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get the name of this value's kind, for messages
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "Boolean",
            Self::Int(_) => "Int",
            Self::Float(_) => "Float",
            Self::String(_) => "String",
            Self::List(_) => "List",
            Self::Object(_) => "Object",
        }
    }
}

impl fmt::Display for GqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
            Self::String(s) => write!(f, "{:?}", s),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Self::Object(members) => {
                write!(f, "{{")?;
                for (i, (name, value)) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", name, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for GqlValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i32> for GqlValue {
    fn from(i: i32) -> Self {
        Self::Int(i64::from(i))
    }
}

impl From<i64> for GqlValue {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for GqlValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for GqlValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for GqlValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<GqlValue>> From<Vec<T>> for GqlValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<GqlValue>> From<Option<T>> for GqlValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

impl From<serde_json::Value> for GqlValue {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(members) => Self::Object(
                members
                    .into_iter()
                    .map(|(k, v)| (k, Self::from(v)))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_preserves_member_order() {
        let value = GqlValue::from(json!({"name": "R2-D2", "appearsIn": [4, 5, 6]}));
        let GqlValue::Object(members) = value else {
            panic!("expected object");
        };
        let keys: Vec<&str> = members.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "appearsIn"]);
        assert_eq!(members["appearsIn"].as_list().map(<[_]>::len), Some(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(GqlValue::from(vec![1, 2]).to_string(), "[1, 2]");
        assert_eq!(GqlValue::from("Luke").to_string(), "\"Luke\"");
        assert_eq!(GqlValue::from(None::<i64>).to_string(), "null");
    }

    #[test]
    fn test_accessors() {
        assert_eq!(GqlValue::Int(3).as_float(), Some(3.0));
        assert_eq!(GqlValue::from(true).as_bool(), Some(true));
        assert_eq!(GqlValue::from("x").as_int(), None);
        assert_eq!(GqlValue::Null.kind(), "null");
        assert!(GqlValue::default().is_null());
    }
}
