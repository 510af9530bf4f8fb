//! Resolved object type descriptors

use crate::declaration::{Attribute, Property};
use crate::field::{FieldDescriptor, FieldMap};
use crate::instance::Instance;
use crate::interface::InterfaceDescriptor;
use crate::options::IsTypeOf;
use indexmap::IndexMap;
use octofhir_gql_diagnostics::{Diagnostic, Result};
use octofhir_gql_types::GqlValue;
use std::fmt;
use std::sync::Arc;

/// An immutable, fully resolved object type
///
/// Built once by [`compose`](crate::compose) and shared by `Arc`. Field
/// information is reached only through this descriptor.
pub struct ObjectType {
    pub(crate) name: String,
    /// Name the type was declared under, before any `Meta` override
    pub(crate) declared_name: String,
    pub(crate) description: Option<String>,
    pub(crate) interfaces: Vec<Arc<InterfaceDescriptor>>,
    pub(crate) local_fields: FieldMap,
    pub(crate) interface_fields: FieldMap,
    pub(crate) fields: FieldMap,
    /// Body entries that were not fields: properties and plain values
    pub(crate) attributes: IndexMap<String, Attribute>,
    pub(crate) is_type_of: Option<IsTypeOf>,
    /// Warnings raised while composing
    pub(crate) diagnostics: Vec<Diagnostic>,
}

impl ObjectType {
    /// Schema name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared name, which differs from [`name`](Self::name) when `Meta`
    /// renames the type
    pub fn declared_name(&self) -> &str {
        &self.declared_name
    }

    /// Description
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Implemented interfaces, in declaration order
    pub fn interfaces(&self) -> &[Arc<InterfaceDescriptor>] {
        &self.interfaces
    }

    /// Inherited and body-declared fields
    pub fn local_fields(&self) -> &FieldMap {
        &self.local_fields
    }

    /// Union of the implemented interfaces' fields
    pub fn interface_fields(&self) -> &FieldMap {
        &self.interface_fields
    }

    /// The resolved field table
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Look up a resolved field
    pub fn field(&self, name: &str) -> Option<&Arc<FieldDescriptor>> {
        self.fields.get(name)
    }

    /// Non-field attributes left in the declaration body
    pub fn attributes(&self) -> &IndexMap<String, Attribute> {
        &self.attributes
    }

    /// Warnings raised while composing the type
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Look up a computed property
    pub fn property(&self, name: &str) -> Option<&Property> {
        match self.attributes.get(name) {
            Some(Attribute::Property(property)) => Some(property),
            _ => None,
        }
    }

    /// Look up a computed property that accepts assignment
    pub fn settable_property(&self, name: &str) -> Option<&Property> {
        self.property(name).filter(|property| property.is_settable())
    }

    /// Look up a plain class-level value
    pub fn class_value(&self, name: &str) -> Option<&GqlValue> {
        match self.attributes.get(name) {
            Some(Attribute::Value(value)) => Some(value),
            _ => None,
        }
    }

    /// Check if the type declares the given interface
    pub fn implements(&self, interface_name: &str) -> bool {
        self.interfaces
            .iter()
            .any(|interface| interface.name() == interface_name)
    }

    /// Decide whether an instance belongs to this type
    ///
    /// Uses the `Meta` predicate when one was given; otherwise an instance
    /// belongs to the descriptor it was constructed from.
    pub fn is_type_of(&self, instance: &Instance) -> bool {
        match &self.is_type_of {
            Some(predicate) => predicate(instance),
            None => std::ptr::eq(Arc::as_ptr(instance.object_type()), self),
        }
    }

    /// Construct an instance; see [`Instance::construct`]
    pub fn construct(
        self: &Arc<Self>,
        positional: Vec<GqlValue>,
        named: IndexMap<String, GqlValue>,
    ) -> Result<Instance> {
        Instance::construct(self, positional, named)
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectType")
            .field("name", &self.name)
            .field("declared_name", &self.declared_name)
            .field("description", &self.description)
            .field(
                "interfaces",
                &self.interfaces.iter().map(|i| i.name()).collect::<Vec<_>>(),
            )
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .field("attributes", &self.attributes.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// A declaration that skipped composition
///
/// Produced for the object type root itself, which has no field table.
#[derive(Debug, Clone)]
pub struct BareType {
    pub name: String,
    pub attributes: IndexMap<String, Attribute>,
}

/// Outcome of composing a declaration
#[derive(Debug, Clone)]
pub enum ComposedType {
    /// Composition was skipped
    Bare(BareType),
    /// A resolved object type
    Object(Arc<ObjectType>),
}

impl ComposedType {
    /// Type name
    pub fn name(&self) -> &str {
        match self {
            Self::Bare(bare) => &bare.name,
            Self::Object(object) => object.name(),
        }
    }

    /// Get the object type, if composition ran
    pub fn as_object(&self) -> Option<&Arc<ObjectType>> {
        match self {
            Self::Object(object) => Some(object),
            Self::Bare(_) => None,
        }
    }

    /// Take the object type, if composition ran
    pub fn into_object(self) -> Option<Arc<ObjectType>> {
        match self {
            Self::Object(object) => Some(object),
            Self::Bare(_) => None,
        }
    }
}

impl fmt::Display for ComposedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
