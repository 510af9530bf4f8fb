//! GraphQL object type composition
//!
//! This crate provides:
//! - Field, interface and mixin descriptors
//! - Type declarations with an optional `Meta` block
//! - The composer that resolves a declaration into an immutable `ObjectType`
//! - The instance binder that constructs values of a composed type
//! - A type registry for the schema-assembly layer

pub mod abstract_type;
pub mod composer;
pub mod declaration;
pub mod field;
pub mod instance;
pub mod interface;
pub mod object_type;
pub mod options;
pub mod registry;

pub use abstract_type::*;
pub use composer::*;
pub use declaration::*;
pub use field::*;
pub use instance::*;
pub use interface::*;
pub use object_type::*;
pub use options::*;
pub use registry::*;
