//! Runtime instances of composed object types

use crate::object_type::ObjectType;
use indexmap::IndexMap;
use octofhir_gql_diagnostics::{GqlError, Result};
use octofhir_gql_types::GqlValue;
use std::fmt;
use std::sync::Arc;

/// A value of a composed object type
///
/// Holds one attribute per bound field, plus whatever property setters or
/// later code assigned. Unbound fields are simply absent.
#[derive(Clone)]
pub struct Instance {
    object_type: Arc<ObjectType>,
    attributes: IndexMap<String, GqlValue>,
}

impl Instance {
    /// Create an instance with nothing bound
    pub fn empty(object_type: &Arc<ObjectType>) -> Self {
        Self {
            object_type: Arc::clone(object_type),
            attributes: IndexMap::new(),
        }
    }

    /// Bind constructor arguments onto a new instance
    ///
    /// Positional values fill fields in table order; a positional value wins
    /// over a named value for the same field. Remaining fields are taken from
    /// `named` when present. Leftover names must be settable properties of
    /// the type; the first name that is not fails the call.
    ///
    /// Binding errors name the declared type, not its `Meta` schema name.
    pub fn construct(
        object_type: &Arc<ObjectType>,
        positional: Vec<GqlValue>,
        mut named: IndexMap<String, GqlValue>,
    ) -> Result<Self> {
        let fields = object_type.fields();
        if positional.len() > fields.len() {
            return Err(GqlError::too_many_arguments(
                object_type.declared_name(),
                positional.len(),
                fields.len(),
            ));
        }

        let mut instance = Self::empty(object_type);
        let mut names = fields.keys();

        for (value, name) in positional.into_iter().zip(names.by_ref()) {
            named.shift_remove(name);
            instance.attributes.insert(name.clone(), value);
        }

        for name in names {
            if let Some(value) = named.shift_remove(name) {
                instance.attributes.insert(name.clone(), value);
            }
        }

        let mut invalid = None;
        for (key, value) in named {
            match object_type.settable_property(&key).and_then(|p| p.set_fn()) {
                Some(setter) => setter(&mut instance, value)?,
                None => {
                    if invalid.is_none() {
                        invalid = Some(key);
                    }
                }
            }
        }

        match invalid {
            Some(key) => Err(GqlError::invalid_keyword(key, object_type.declared_name())),
            None => Ok(instance),
        }
    }

    /// The descriptor this instance was constructed from
    pub fn object_type(&self) -> &Arc<ObjectType> {
        &self.object_type
    }

    /// Name of the instance's type
    pub fn type_name(&self) -> &str {
        self.object_type.name()
    }

    /// Get a stored attribute
    pub fn get(&self, name: &str) -> Option<&GqlValue> {
        self.attributes.get(name)
    }

    /// Resolve an attribute the way a reader sees it
    ///
    /// Stored attributes first, then property getters, then class-level
    /// values.
    pub fn resolve(&self, name: &str) -> Option<GqlValue> {
        if let Some(value) = self.attributes.get(name) {
            return Some(value.clone());
        }
        if let Some(getter) = self.object_type.property(name).and_then(|p| p.get_fn()) {
            return Some(getter(self));
        }
        self.object_type.class_value(name).cloned()
    }

    /// Assign an attribute
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<GqlValue>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Check if an attribute is stored
    pub fn is_set(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Stored attributes, in assignment order
    pub fn attributes(&self) -> &IndexMap<String, GqlValue> {
        &self.attributes
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("type", &self.object_type.name())
            .field("attributes", &self.attributes)
            .finish()
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.object_type, &other.object_type) && self.attributes == other.attributes
    }
}
