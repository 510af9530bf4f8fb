//! Interface descriptors and their implementer registry

use crate::field::{mount_fields, FieldDef, FieldMap, FieldOrigin};
use crate::object_type::ObjectType;
use indexmap::IndexMap;
use octofhir_gql_diagnostics::Result;
use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, Weak};

/// A named, reusable field contract
///
/// The field table is fixed at construction. The only mutation an interface
/// ever sees is an object type registering itself as an implementer, which
/// may happen from several threads.
pub struct InterfaceDescriptor {
    name: String,
    description: Option<String>,
    fields: FieldMap,
    /// Append-only, one entry per distinct descriptor; weak so that object
    /// types own their interfaces and not the other way round
    implementers: RwLock<Vec<Implementer>>,
}

/// A registered implementer
///
/// The name is kept alongside the link so it survives the descriptor.
struct Implementer {
    name: String,
    object_type: Weak<ObjectType>,
}

impl Implementer {
    fn is(&self, object_type: &Arc<ObjectType>) -> bool {
        // a live Weak keeps the allocation, so the address cannot be reused
        std::ptr::eq(self.object_type.as_ptr(), Arc::as_ptr(object_type))
    }
}

impl InterfaceDescriptor {
    /// Start declaring an interface
    pub fn builder(name: impl Into<String>) -> InterfaceBuilder {
        InterfaceBuilder {
            name: name.into(),
            description: None,
            fields: IndexMap::new(),
        }
    }

    /// Interface name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Documentation
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Field table, in declaration order
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Register an object type as an implementer
    ///
    /// Returns `false` when this exact descriptor was already registered.
    /// Distinct descriptors are all kept, even under the same name.
    pub fn implements(&self, object_type: &Arc<ObjectType>) -> bool {
        let mut implementers = self.implementers.write();
        if implementers.iter().any(|entry| entry.is(object_type)) {
            return false;
        }
        log::trace!("{} implements {}", object_type.name(), self.name);
        implementers.push(Implementer {
            name: object_type.name().to_string(),
            object_type: Arc::downgrade(object_type),
        });
        true
    }

    /// Check if this exact descriptor is registered
    pub fn is_implemented_by(&self, object_type: &Arc<ObjectType>) -> bool {
        self.implementers.read().iter().any(|entry| entry.is(object_type))
    }

    /// Check if any registered implementer has the given name
    pub fn has_implementer_named(&self, type_name: &str) -> bool {
        self.implementers
            .read()
            .iter()
            .any(|entry| entry.name == type_name)
    }

    /// Live implementers, in registration order
    pub fn implementers(&self) -> Vec<Arc<ObjectType>> {
        self.implementers
            .read()
            .iter()
            .filter_map(|entry| entry.object_type.upgrade())
            .collect()
    }

    /// Names of all registered implementers, in registration order
    ///
    /// Includes implementers that have since been dropped.
    pub fn implementer_names(&self) -> Vec<String> {
        self.implementers
            .read()
            .iter()
            .map(|entry| entry.name.clone())
            .collect()
    }
}

impl fmt::Debug for InterfaceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterfaceDescriptor")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .field("implementers", &self.implementer_names())
            .finish()
    }
}

impl fmt::Display for InterfaceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Builder for [`InterfaceDescriptor`]
#[derive(Debug, Clone)]
pub struct InterfaceBuilder {
    name: String,
    description: Option<String>,
    fields: IndexMap<String, FieldDef>,
}

impl InterfaceBuilder {
    /// Set the documentation
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Declare a field
    pub fn field(mut self, name: impl Into<String>, def: impl Into<FieldDef>) -> Self {
        self.fields.insert(name.into(), def.into());
        self
    }

    /// Validate field names and build the interface
    pub fn build(self) -> Result<Arc<InterfaceDescriptor>> {
        let origin = FieldOrigin::Interface(self.name.clone());
        let fields = mount_fields(&origin, self.fields)?;
        Ok(Arc::new(InterfaceDescriptor {
            name: self.name,
            description: self.description,
            fields,
            implementers: RwLock::new(Vec::new()),
        }))
    }
}
