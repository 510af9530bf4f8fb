//! Field descriptors and ordered field tables

use indexmap::IndexMap;
use octofhir_gql_diagnostics::{GqlError, Result};
use octofhir_gql_types::TypeRef;
use std::fmt;
use std::sync::Arc;

/// Ordered mapping from field name to a shared field descriptor
pub type FieldMap = IndexMap<String, Arc<FieldDescriptor>>;

/// Where a field descriptor was first declared
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldOrigin {
    /// Declared in the body of an object type
    ObjectType(String),
    /// Declared on an abstract field mixin
    AbstractType(String),
    /// Declared on an interface
    Interface(String),
}

impl FieldOrigin {
    /// Name of the declaring entity
    pub fn owner(&self) -> &str {
        match self {
            Self::ObjectType(name) | Self::AbstractType(name) | Self::Interface(name) => name,
        }
    }
}

impl fmt::Display for FieldOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ObjectType(name) => write!(f, "object type {}", name),
            Self::AbstractType(name) => write!(f, "abstract type {}", name),
            Self::Interface(name) => write!(f, "interface {}", name),
        }
    }
}

/// One typed slot on an object type or interface
///
/// Descriptors are immutable and shared by `Arc` between every field table
/// they are merged into. Equality is by content, origin included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name
    pub name: String,
    /// Declared type, not interpreted by the composer
    pub declared_type: TypeRef,
    /// Documentation
    pub description: Option<String>,
    /// Set when the field is deprecated
    pub deprecation_reason: Option<String>,
    /// Declaring entity
    pub origin: FieldOrigin,
}

impl FieldDescriptor {
    /// Check if the field is deprecated
    pub fn is_deprecated(&self) -> bool {
        self.deprecation_reason.is_some()
    }
}

/// A field as written in a declaration, before it has a name and owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    /// Declared type
    pub declared_type: TypeRef,
    /// Documentation
    pub description: Option<String>,
    /// Deprecation reason
    pub deprecation_reason: Option<String>,
}

impl FieldDef {
    /// Create a field definition of the given type
    pub fn new(declared_type: TypeRef) -> Self {
        Self {
            declared_type,
            description: None,
            deprecation_reason: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Mark the field deprecated
    pub fn deprecated(mut self, reason: impl Into<String>) -> Self {
        self.deprecation_reason = Some(reason.into());
        self
    }

    /// Attach a name and origin, producing a shareable descriptor
    pub fn into_descriptor(self, name: impl Into<String>, origin: FieldOrigin) -> Arc<FieldDescriptor> {
        Arc::new(FieldDescriptor {
            name: name.into(),
            declared_type: self.declared_type,
            description: self.description,
            deprecation_reason: self.deprecation_reason,
            origin,
        })
    }
}

impl From<TypeRef> for FieldDef {
    fn from(declared_type: TypeRef) -> Self {
        Self::new(declared_type)
    }
}

/// Check a field name against the GraphQL `Name` grammar
///
/// Names starting with `__` are reserved for introspection.
pub fn validate_field_name(owner: &str, name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    };

    if !valid {
        return Err(GqlError::invalid_field(
            owner,
            format!("Field name \"{}\" on {} is not a valid GraphQL name", name, owner),
        ));
    }
    if name.starts_with("__") {
        return Err(GqlError::invalid_field(
            owner,
            format!("Field name \"{}\" on {} is reserved for introspection", name, owner),
        ));
    }
    Ok(())
}

/// Turn named field definitions into descriptors owned by `origin`
pub(crate) fn mount_fields(
    origin: &FieldOrigin,
    defs: IndexMap<String, FieldDef>,
) -> Result<FieldMap> {
    defs.into_iter()
        .map(|(name, def)| {
            validate_field_name(origin.owner(), &name)?;
            let descriptor = def.into_descriptor(name.clone(), origin.clone());
            Ok((name, descriptor))
        })
        .collect()
}

/// Overlay `top` onto `base`
///
/// A name already in `base` keeps its position and takes the descriptor
/// from `top`; new names are appended in `top` order.
pub fn overlay(base: &mut FieldMap, top: &FieldMap) {
    for (name, field) in top {
        base.insert(name.clone(), Arc::clone(field));
    }
}
