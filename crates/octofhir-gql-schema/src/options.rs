//! Per-type metadata (`Meta` blocks) and the options resolved from them

use crate::abstract_type::AbstractType;
use crate::instance::Instance;
use crate::interface::InterfaceDescriptor;
use crate::object_type::ObjectType;
use octofhir_gql_types::TypeRef;
use std::fmt;
use std::sync::Arc;

/// Predicate deciding whether an instance belongs to an object type
pub type IsTypeOf = Arc<dyn Fn(&Instance) -> bool + Send + Sync>;

/// Any schema entity a declaration may refer to
///
/// `Meta::interfaces` accepts every kind so that a wrong entry is reported
/// by the composer instead of being unrepresentable.
#[derive(Debug, Clone)]
pub enum SchemaType {
    /// An interface
    Interface(Arc<InterfaceDescriptor>),
    /// A composed object type
    Object(Arc<ObjectType>),
    /// A field mixin
    Abstract(Arc<AbstractType>),
    /// Any other type reference (scalars, enums, unresolved names)
    Ref(TypeRef),
}

impl SchemaType {
    /// Name of the referenced entity
    pub fn name(&self) -> &str {
        match self {
            Self::Interface(interface) => interface.name(),
            Self::Object(object) => object.name(),
            Self::Abstract(mixin) => mixin.name(),
            Self::Ref(type_ref) => type_ref.name(),
        }
    }

    /// Get the interface, if this is one
    pub fn as_interface(&self) -> Option<&Arc<InterfaceDescriptor>> {
        match self {
            Self::Interface(interface) => Some(interface),
            _ => None,
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ref(type_ref) => write!(f, "{}", type_ref),
            other => f.write_str(other.name()),
        }
    }
}

impl From<Arc<InterfaceDescriptor>> for SchemaType {
    fn from(interface: Arc<InterfaceDescriptor>) -> Self {
        Self::Interface(interface)
    }
}

impl From<Arc<ObjectType>> for SchemaType {
    fn from(object: Arc<ObjectType>) -> Self {
        Self::Object(object)
    }
}

impl From<Arc<AbstractType>> for SchemaType {
    fn from(mixin: Arc<AbstractType>) -> Self {
        Self::Abstract(mixin)
    }
}

impl From<TypeRef> for SchemaType {
    fn from(type_ref: TypeRef) -> Self {
        Self::Ref(type_ref)
    }
}

/// Optional metadata block of a type declaration
///
/// Every entry overrides the default the composer would otherwise derive
/// from the declaration itself.
#[derive(Clone, Default)]
pub struct Meta {
    /// Schema name, instead of the declared name
    pub name: Option<String>,
    /// Description, instead of the documentation string
    pub description: Option<String>,
    /// Interfaces the type implements, in order
    pub interfaces: Vec<SchemaType>,
    /// Membership predicate used by abstract type resolution
    pub is_type_of: Option<IsTypeOf>,
}

impl Meta {
    /// Create an empty metadata block
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the schema name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Override the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add an implemented interface
    pub fn with_interface(mut self, interface: impl Into<SchemaType>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    /// Set the membership predicate
    pub fn with_is_type_of(
        mut self,
        predicate: impl Fn(&Instance) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.is_type_of = Some(Arc::new(predicate));
        self
    }
}

impl fmt::Debug for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Meta")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("interfaces", &self.interfaces)
            .field("is_type_of", &self.is_type_of.is_some())
            .finish()
    }
}

/// Options of a type being composed: declaration defaults with `Meta` applied
#[derive(Clone)]
pub struct ObjectTypeOptions {
    pub name: String,
    pub description: Option<String>,
    pub interfaces: Vec<SchemaType>,
    pub is_type_of: Option<IsTypeOf>,
}

impl ObjectTypeOptions {
    /// Seed options from the declaration, then apply the metadata block
    pub fn new(meta: Option<Meta>, name: impl Into<String>, description: Option<String>) -> Self {
        let mut options = Self {
            name: name.into(),
            description,
            interfaces: Vec::new(),
            is_type_of: None,
        };
        if let Some(meta) = meta {
            if let Some(name) = meta.name {
                options.name = name;
            }
            if meta.description.is_some() {
                options.description = meta.description;
            }
            options.interfaces = meta.interfaces;
            options.is_type_of = meta.is_type_of;
        }
        options
    }
}

impl fmt::Debug for ObjectTypeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectTypeOptions")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("interfaces", &self.interfaces)
            .finish_non_exhaustive()
    }
}
