//! GraphQL object type building blocks
//!
//! This crate defines the pieces the composition engine treats as opaque:
//! - Declared type references for fields (`TypeRef`)
//! - Runtime values bound onto object instances (`GqlValue`)

pub mod type_ref;
pub mod value;

pub use type_ref::*;
pub use value::*;
