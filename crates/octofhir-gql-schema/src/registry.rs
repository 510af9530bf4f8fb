//! Type registry for schema assembly
//!
//! Holds interfaces and composed object types by name so that the schema
//! layer can look them up and list the possible types of an interface.

use crate::composer::compose;
use crate::declaration::TypeDeclaration;
use crate::interface::InterfaceDescriptor;
use crate::object_type::{ComposedType, ObjectType};
use crate::options::SchemaType;
use indexmap::IndexMap;
use octofhir_gql_diagnostics::{GqlError, Result};
use parking_lot::RwLock;
use std::sync::Arc;

#[derive(Default)]
struct RegistryState {
    interfaces: IndexMap<String, Arc<InterfaceDescriptor>>,
    object_types: IndexMap<String, Arc<ObjectType>>,
}

impl RegistryState {
    fn has_type(&self, name: &str) -> bool {
        self.interfaces.contains_key(name) || self.object_types.contains_key(name)
    }
}

/// Name-indexed store of interfaces and composed object types
#[derive(Clone, Default)]
pub struct TypeRegistry {
    state: Arc<RwLock<RegistryState>>,
}

impl TypeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an interface under its name
    pub fn register_interface(&self, interface: Arc<InterfaceDescriptor>) -> Result<()> {
        let mut state = self.state.write();
        if state.has_type(interface.name()) {
            log::warn!("rejecting duplicate interface {}", interface.name());
            return Err(GqlError::duplicate_type(interface.name()));
        }
        log::debug!("registered interface {}", interface.name());
        state
            .interfaces
            .insert(interface.name().to_string(), interface);
        Ok(())
    }

    /// Compose a declaration and store the resulting object type
    ///
    /// Declarations that compose to a bare type are returned but not stored.
    pub fn declare(&self, declaration: TypeDeclaration) -> Result<ComposedType> {
        let mut state = self.state.write();
        let name = declaration.schema_name().to_string();
        if declaration.is_object_type() && state.has_type(&name) {
            log::warn!("rejecting duplicate object type {}", name);
            return Err(GqlError::duplicate_type(name));
        }

        let composed = compose(declaration)?;
        if let ComposedType::Object(object_type) = &composed {
            log::debug!("declared object type {}", object_type.name());
            state
                .object_types
                .insert(object_type.name().to_string(), Arc::clone(object_type));
        }
        Ok(composed)
    }

    /// Declare several types in order, collecting every failure
    pub fn declare_all(
        &self,
        declarations: impl IntoIterator<Item = TypeDeclaration>,
    ) -> Result<Vec<ComposedType>> {
        let mut composed = Vec::new();
        let mut errors = Vec::new();
        for declaration in declarations {
            match self.declare(declaration) {
                Ok(result) => composed.push(result),
                Err(err) => errors.push(err),
            }
        }

        match errors.len() {
            0 => Ok(composed),
            1 => Err(errors.remove(0)),
            _ => Err(GqlError::Multiple(errors)),
        }
    }

    /// Get an object type by name
    pub fn get_object_type(&self, name: &str) -> Option<Arc<ObjectType>> {
        self.state.read().object_types.get(name).cloned()
    }

    /// Get an interface by name
    pub fn get_interface(&self, name: &str) -> Option<Arc<InterfaceDescriptor>> {
        self.state.read().interfaces.get(name).cloned()
    }

    /// Get any registered type by name
    pub fn get_type(&self, name: &str) -> Option<SchemaType> {
        let state = self.state.read();
        if let Some(interface) = state.interfaces.get(name) {
            return Some(SchemaType::Interface(Arc::clone(interface)));
        }
        state
            .object_types
            .get(name)
            .map(|object| SchemaType::Object(Arc::clone(object)))
    }

    /// Check if a type of this name is registered
    pub fn has_type(&self, name: &str) -> bool {
        self.state.read().has_type(name)
    }

    /// Object types implementing an interface, in registration order
    ///
    /// Only types declared through this registry are listed.
    pub fn possible_types(&self, interface_name: &str) -> Vec<Arc<ObjectType>> {
        let state = self.state.read();
        let Some(interface) = state.interfaces.get(interface_name) else {
            return Vec::new();
        };
        interface
            .implementers()
            .into_iter()
            .filter(|object| {
                state
                    .object_types
                    .get(object.name())
                    .is_some_and(|stored| Arc::ptr_eq(stored, object))
            })
            .collect()
    }

    /// Names of all registered object types, in declaration order
    pub fn object_type_names(&self) -> Vec<String> {
        self.state.read().object_types.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Meta;
    use octofhir_gql_diagnostics::{GQL0001, GQL0002};
    use octofhir_gql_types::TypeRef;

    fn node() -> Arc<InterfaceDescriptor> {
        InterfaceDescriptor::builder("Node")
            .field("id", TypeRef::Id.non_null())
            .build()
            .unwrap()
    }

    #[test]
    fn test_declare_and_lookup() {
        let registry = TypeRegistry::new();
        let node = node();
        registry.register_interface(Arc::clone(&node)).unwrap();

        registry
            .declare(
                TypeDeclaration::object("Ship")
                    .meta(Meta::new().with_interface(Arc::clone(&node)))
                    .field("name", TypeRef::String),
            )
            .unwrap();

        assert!(registry.has_type("Ship"));
        assert!(registry.has_type("Node"));
        assert!(matches!(registry.get_type("Node"), Some(SchemaType::Interface(_))));
        let ship = registry.get_object_type("Ship").unwrap();
        assert_eq!(ship.fields().len(), 2);
        assert_eq!(registry.possible_types("Node").len(), 1);
        assert!(registry.possible_types("Missing").is_empty());
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let registry = TypeRegistry::new();
        registry.register_interface(node()).unwrap();

        let err = registry.declare(TypeDeclaration::object("Node")).unwrap_err();
        assert_eq!(err.code(), GQL0002);
        assert_eq!(registry.register_interface(node()).unwrap_err().code(), GQL0002);
    }

    #[test]
    fn test_bare_types_are_not_stored() {
        let registry = TypeRegistry::new();
        let composed = registry.declare(TypeDeclaration::new("ObjectType")).unwrap();

        assert!(composed.as_object().is_none());
        assert!(!registry.has_type("ObjectType"));
    }

    #[test]
    fn test_declare_all_collects_errors() {
        let registry = TypeRegistry::new();
        let err = registry
            .declare_all(vec![
                TypeDeclaration::object("A"),
                TypeDeclaration::object("A"),
                TypeDeclaration::object("B").meta(Meta::new().with_interface(TypeRef::Int)),
                TypeDeclaration::object("C"),
            ])
            .unwrap_err();

        let GqlError::Multiple(errors) = err else {
            panic!("expected multiple errors");
        };
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].code(), GQL0002);
        assert_eq!(errors[1].code(), GQL0001);
        assert_eq!(registry.object_type_names(), vec!["A", "C"]);
    }
}
