//! Type declarations handed to the composer

use crate::abstract_type::AbstractType;
use crate::field::FieldDef;
use crate::instance::Instance;
use crate::object_type::ObjectType;
use crate::options::Meta;
use indexmap::IndexMap;
use octofhir_gql_diagnostics::Result;
use octofhir_gql_types::{GqlValue, TypeRef};
use std::fmt;
use std::sync::Arc;

/// Setter of a computed property
pub type PropertySetter = Arc<dyn Fn(&mut Instance, GqlValue) -> Result<()> + Send + Sync>;

/// Getter of a computed property
pub type PropertyGetter = Arc<dyn Fn(&Instance) -> GqlValue + Send + Sync>;

/// A computed attribute backed by accessor functions instead of a slot
#[derive(Clone, Default)]
pub struct Property {
    getter: Option<PropertyGetter>,
    setter: Option<PropertySetter>,
}

impl Property {
    /// Create a read-only property
    pub fn getter(getter: impl Fn(&Instance) -> GqlValue + Send + Sync + 'static) -> Self {
        Self {
            getter: Some(Arc::new(getter)),
            setter: None,
        }
    }

    /// Add a setter
    pub fn with_setter(
        mut self,
        setter: impl Fn(&mut Instance, GqlValue) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        self.setter = Some(Arc::new(setter));
        self
    }

    /// Get the getter, if any
    pub fn get_fn(&self) -> Option<&PropertyGetter> {
        self.getter.as_ref()
    }

    /// Get the setter, if any
    pub fn set_fn(&self) -> Option<&PropertySetter> {
        self.setter.as_ref()
    }

    /// Check if values can be assigned through this property
    pub fn is_settable(&self) -> bool {
        self.setter.is_some()
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("readable", &self.getter.is_some())
            .field("settable", &self.setter.is_some())
            .finish()
    }
}

/// One entry of a declaration body
#[derive(Debug, Clone)]
pub enum Attribute {
    /// An explicit field
    Field(FieldDef),
    /// A bare type reference, mounted as a field of that type
    Unmounted(TypeRef),
    /// A computed property
    Property(Property),
    /// A plain class-level value
    Value(GqlValue),
}

impl Attribute {
    /// Check if the composer turns this entry into a field
    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field(_) | Self::Unmounted(_))
    }

    /// Get the field definition, mounting an unmounted type
    pub fn to_field_def(&self) -> Option<FieldDef> {
        match self {
            Self::Field(def) => Some(def.clone()),
            Self::Unmounted(type_ref) => Some(FieldDef::new(type_ref.clone())),
            _ => None,
        }
    }
}

/// A base listed by a declaration
#[derive(Debug, Clone)]
pub enum Base {
    /// The object type root marker
    Root,
    /// A field mixin
    Abstract(Arc<AbstractType>),
    /// An already composed object type
    Object(Arc<ObjectType>),
}

impl Base {
    /// Check if this base makes the declaration an object type
    pub fn is_object_type(&self) -> bool {
        matches!(self, Self::Root | Self::Object(_))
    }
}

/// A declared type, not yet composed
#[derive(Debug, Clone)]
pub struct TypeDeclaration {
    pub name: String,
    pub bases: Vec<Base>,
    pub attributes: IndexMap<String, Attribute>,
    pub doc: Option<String>,
    pub meta: Option<Meta>,
}

impl TypeDeclaration {
    /// Declare a type with no bases
    ///
    /// Without an object type base this composes to a bare type.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bases: Vec::new(),
            attributes: IndexMap::new(),
            doc: None,
            meta: None,
        }
    }

    /// Declare an object type deriving directly from the root
    pub fn object(name: impl Into<String>) -> Self {
        Self::new(name).base(Base::Root)
    }

    /// Add a base
    pub fn base(mut self, base: Base) -> Self {
        self.bases.push(base);
        self
    }

    /// Inherit the fields of a mixin
    pub fn mixin(self, mixin: &Arc<AbstractType>) -> Self {
        self.base(Base::Abstract(Arc::clone(mixin)))
    }

    /// Derive from a composed object type
    pub fn extends(self, parent: &Arc<ObjectType>) -> Self {
        self.base(Base::Object(Arc::clone(parent)))
    }

    /// Set the documentation string
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// Attach the metadata block
    pub fn meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    /// Add a body entry; a repeated name replaces the earlier entry
    pub fn attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    /// Declare a field
    pub fn field(self, name: impl Into<String>, def: impl Into<FieldDef>) -> Self {
        self.attribute(name, Attribute::Field(def.into()))
    }

    /// Declare an unmounted field (a bare type reference)
    pub fn unmounted(self, name: impl Into<String>, type_ref: TypeRef) -> Self {
        self.attribute(name, Attribute::Unmounted(type_ref))
    }

    /// Declare a computed property
    pub fn property(self, name: impl Into<String>, property: Property) -> Self {
        self.attribute(name, Attribute::Property(property))
    }

    /// Declare a plain class-level value
    pub fn value(self, name: impl Into<String>, value: impl Into<GqlValue>) -> Self {
        self.attribute(name, Attribute::Value(value.into()))
    }

    /// Schema name the declaration composes to, honouring a `Meta` override
    pub fn schema_name(&self) -> &str {
        self.meta
            .as_ref()
            .and_then(|meta| meta.name.as_deref())
            .unwrap_or(&self.name)
    }

    /// Check if composing this declaration yields an object type
    pub fn is_object_type(&self) -> bool {
        self.bases.iter().any(Base::is_object_type)
    }
}
