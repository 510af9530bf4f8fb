//! Composition and construction error types

use crate::{ErrorCode, GQL0001, GQL0002, GQL0003, GQL0004, GQL0100, GQL0101, GQL0102};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Error - the type cannot be composed or the instance cannot be built
    Error,
    /// Warning - the type composed, but a declaration looks suspicious
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with the type it concerns
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Name of the type being composed or constructed
    pub type_name: Option<String>,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            type_name: None,
            help: None,
        }
    }

    /// Create a new warning diagnostic
    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
            type_name: None,
            help: None,
        }
    }

    /// Set the type name
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Set help text
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)?;
        if let Some(type_name) = &self.type_name {
            write!(f, " (in {})", type_name)?;
        }
        Ok(())
    }
}

/// Main error type for type composition and instance construction
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GqlError {
    /// A type declaration is malformed; raised while composing
    #[error("{code}: {message}")]
    Configuration {
        code: ErrorCode,
        message: String,
        type_name: String,
    },

    /// Positional argument count does not fit the field table
    #[error("{code}: {message}")]
    Argument {
        code: ErrorCode,
        message: String,
        type_name: String,
    },

    /// A named argument matched neither a field nor a settable property
    #[error("{code}: '{key}' is an invalid keyword argument for {type_name}", code = GQL0101)]
    InvalidKeyword { key: String, type_name: String },

    /// A property setter rejected its value
    #[error("{code}: {message}", code = GQL0102)]
    Property {
        property: String,
        type_name: String,
        message: String,
    },

    /// Multiple errors collected
    #[error("Multiple errors: {}", .0.len())]
    Multiple(Vec<GqlError>),
}

impl GqlError {
    /// Create a configuration error
    pub fn configuration(
        code: ErrorCode,
        type_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Configuration {
            code,
            message: message.into(),
            type_name: type_name.into(),
        }
    }

    /// An interface list entry that is not an interface
    pub fn invalid_interface(type_name: impl Into<String>, received: impl fmt::Display) -> Self {
        let type_name = type_name.into();
        let message = format!(
            "All interfaces of {} must be a subclass of Interface. Received \"{}\".",
            type_name, received
        );
        Self::configuration(GQL0001, type_name, message)
    }

    /// A type name that is already taken
    pub fn duplicate_type(type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        let message = format!("Type {} is already defined", type_name);
        Self::configuration(GQL0002, type_name, message)
    }

    /// A field declaration that cannot be used
    pub fn invalid_field(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::configuration(GQL0003, type_name, message)
    }

    /// A declaration that was expected to compose to an object type
    pub fn not_an_object_type(type_name: impl Into<String>) -> Self {
        let type_name = type_name.into();
        let message = format!("{} does not derive from ObjectType", type_name);
        Self::configuration(GQL0004, type_name, message)
    }

    /// More positional arguments than fields
    pub fn too_many_arguments(type_name: impl Into<String>, given: usize, fields: usize) -> Self {
        Self::Argument {
            code: GQL0100,
            message: format!(
                "too many positional arguments: {} given, but only {} fields exist",
                given, fields
            ),
            type_name: type_name.into(),
        }
    }

    /// A named argument that could not be bound
    pub fn invalid_keyword(key: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self::InvalidKeyword {
            key: key.into(),
            type_name: type_name.into(),
        }
    }

    /// A property setter failure
    pub fn property(
        property: impl Into<String>,
        type_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Property {
            property: property.into(),
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Configuration { code, .. } => *code,
            Self::Argument { code, .. } => *code,
            Self::InvalidKeyword { .. } => GQL0101,
            Self::Property { .. } => GQL0102,
            Self::Multiple(errors) => errors.first().map(|e| e.code()).unwrap_or(ErrorCode::new(0)),
        }
    }

    /// Get the name of the type the error concerns, if any
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::Configuration { type_name, .. }
            | Self::Argument { type_name, .. }
            | Self::InvalidKeyword { type_name, .. }
            | Self::Property { type_name, .. } => Some(type_name),
            Self::Multiple(errors) => errors.first().and_then(|e| e.type_name()),
        }
    }

    /// Check if this error was raised while composing a type
    pub fn is_configuration(&self) -> bool {
        self.code().is_configuration_error()
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::Multiple(errors) => {
                if let Some(first) = errors.first() {
                    first.to_diagnostic()
                } else {
                    Diagnostic::error(ErrorCode::new(0), "Unknown error")
                }
            }
            Self::InvalidKeyword { key, type_name } => {
                Diagnostic::error(GQL0101, format!("'{}' is an invalid keyword argument", key))
                    .with_type_name(type_name.clone())
                    .with_help(format!("{} has no field or settable property named '{}'", type_name, key))
            }
            other => {
                let code = other.code();
                let message = match other {
                    Self::Configuration { message, .. }
                    | Self::Argument { message, .. }
                    | Self::Property { message, .. } => message.clone(),
                    _ => other.to_string(),
                };
                let mut diag = Diagnostic::error(code, message);
                if let Some(type_name) = other.type_name() {
                    diag = diag.with_type_name(type_name);
                }
                if let Some(help) = code.info().help {
                    diag = diag.with_help(help);
                }
                diag
            }
        }
    }
}
