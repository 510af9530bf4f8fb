//! Declared type references
//!
//! A `TypeRef` names the type a field was declared with. The composition
//! engine never interprets it; it is carried through to the schema layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reference to a type-system node, as written in a field declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "of")]
pub enum TypeRef {
    // === Built-in Scalars ===
    /// Signed 32-bit integer
    Int,
    /// Double-precision floating point
    Float,
    /// UTF-8 character sequence
    String,
    /// true or false
    Boolean,
    /// Unique identifier, serialized as a string
    #[serde(rename = "ID")]
    Id,

    // === Wrappers ===
    /// List of the inner type
    List(Box<TypeRef>),
    /// Non-null variant of the inner type
    NonNull(Box<TypeRef>),

    // === Named Types ===
    /// Reference to an object, interface, enum or custom scalar by name
    Named(String),
}

impl TypeRef {
    /// Create a named type reference
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Create a list type reference
    pub fn list(of: TypeRef) -> Self {
        Self::List(Box::new(of))
    }

    /// Wrap this reference as non-null
    ///
    /// Wrapping an already non-null reference returns it unchanged.
    pub fn non_null(self) -> Self {
        match self {
            Self::NonNull(_) => self,
            other => Self::NonNull(Box::new(other)),
        }
    }

    /// Check if this is a built-in scalar
    pub fn is_builtin_scalar(&self) -> bool {
        matches!(
            self,
            Self::Int | Self::Float | Self::String | Self::Boolean | Self::Id
        )
    }

    /// Check if this reference is non-null at the outermost level
    pub fn is_non_null(&self) -> bool {
        matches!(self, Self::NonNull(_))
    }

    /// Check if this reference is a list (ignoring an outer non-null)
    pub fn is_list(&self) -> bool {
        match self {
            Self::List(_) => true,
            Self::NonNull(inner) => inner.is_list(),
            _ => false,
        }
    }

    /// Get the innermost named type, stripping list and non-null wrappers
    pub fn named_type(&self) -> &TypeRef {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.named_type(),
            other => other,
        }
    }

    /// Get the name of the innermost type
    pub fn name(&self) -> &str {
        match self {
            Self::List(inner) | Self::NonNull(inner) => inner.name(),
            Self::Int => "Int",
            Self::Float => "Float",
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::Id => "ID",
            Self::Named(name) => name,
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(inner) => write!(f, "[{}]", inner),
            Self::NonNull(inner) => write!(f, "{}!", inner),
            other => write!(f, "{}", other.name()),
        }
    }
}
