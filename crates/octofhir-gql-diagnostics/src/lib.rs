//! GraphQL composition diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by the
//! composition engine: numbered error codes, the error enum raised by type
//! composition and instance construction, and diagnostic reporting.

mod error;
mod error_code;

pub use error::*;
pub use error_code::*;

/// Result type for composition and construction operations
pub type Result<T> = std::result::Result<T, GqlError>;
