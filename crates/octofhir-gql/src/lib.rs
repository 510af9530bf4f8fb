//! Declarative GraphQL object types for Rust
//!
//! This crate composes declared object types into immutable descriptors and
//! constructs runtime instances of them:
//! - Field tables merged from mixins, parent types, interfaces and the body
//! - Interface validation and implementer registration
//! - Positional and named instance construction with property setters
//!
//! # Example
//!
//! ```
//! use octofhir_gql::prelude::*;
//! use std::sync::Arc;
//!
//! let character = InterfaceDescriptor::builder("Character")
//!     .field("id", TypeRef::Id.non_null())
//!     .field("name", TypeRef::String)
//!     .build()?;
//!
//! let droid = compose_object(
//!     TypeDeclaration::object("Droid")
//!         .doc("A mechanical creature in the Star Wars universe.")
//!         .meta(Meta::new().with_interface(Arc::clone(&character)))
//!         .field("primaryFunction", TypeRef::String),
//! )?;
//!
//! assert_eq!(droid.to_string(), "Droid");
//! assert_eq!(droid.fields().len(), 3);
//!
//! let r2 = droid.construct(vec!["2001".into(), "R2-D2".into()], Default::default())?;
//! assert_eq!(r2.get("name"), Some(&GqlValue::from("R2-D2")));
//! # Ok::<(), octofhir_gql::GqlError>(())
//! ```

// Re-export all public APIs from internal crates
pub use octofhir_gql_diagnostics as diagnostics;
pub use octofhir_gql_schema as schema;
pub use octofhir_gql_types as types;

// Convenience re-exports
pub use octofhir_gql_diagnostics::{GqlError, Result};
pub use octofhir_gql_schema::{compose, compose_object, ObjectType, TypeDeclaration, TypeRegistry};

/// Everything needed to declare and construct object types
pub mod prelude {
    pub use octofhir_gql_diagnostics::{Diagnostic, GqlError, Result, Severity};
    pub use octofhir_gql_schema::{
        compose, compose_object, AbstractType, Attribute, Base, ComposedType, FieldDef,
        FieldDescriptor, FieldMap, FieldOrigin, Instance, InterfaceDescriptor, Meta, ObjectType,
        Property, SchemaType, TypeDeclaration, TypeRegistry,
    };
    pub use octofhir_gql_types::{GqlValue, TypeRef};
}
