//! Error codes following a structured numbering system
//!
//! Error code ranges:
//! - GQL0001-GQL0099: Configuration errors (type composition)
//! - GQL0100-GQL0199: Construction errors (instance binding)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a configuration error (0001-0099)
    pub const fn is_configuration_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a construction error (0100-0199)
    pub const fn is_construction_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GQL{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Configuration errors (0001-0099)
    map.insert(1, ErrorInfo::new("Invalid interface")
        .with_help("Every entry in Meta interfaces must be an interface type"));
    map.insert(2, ErrorInfo::new("Duplicate type definition"));
    map.insert(3, ErrorInfo::new("Invalid field declaration"));
    map.insert(4, ErrorInfo::new("Not an object type")
        .with_help("Object type declarations must derive from ObjectType"));
    map.insert(5, ErrorInfo::new("Interface field type changed")
        .with_help("A field overriding an interface field usually keeps its declared type"));

    // Construction errors (0100-0199)
    map.insert(100, ErrorInfo::new("Too many positional arguments")
        .with_help("Pass at most one positional argument per field"));
    map.insert(101, ErrorInfo::new("Invalid keyword argument"));
    map.insert(102, ErrorInfo::new("Property setter failed"));

    map
});

// Configuration errors
pub const GQL0001: ErrorCode = ErrorCode::new(1);
pub const GQL0002: ErrorCode = ErrorCode::new(2);
pub const GQL0003: ErrorCode = ErrorCode::new(3);
pub const GQL0004: ErrorCode = ErrorCode::new(4);
pub const GQL0005: ErrorCode = ErrorCode::new(5);

// Construction errors
pub const GQL0100: ErrorCode = ErrorCode::new(100);
pub const GQL0101: ErrorCode = ErrorCode::new(101);
pub const GQL0102: ErrorCode = ErrorCode::new(102);
