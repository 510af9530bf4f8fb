//! Abstract field mixins
//!
//! An abstract type has no schema identity. It only contributes its fields
//! to the object types that list it as a base.

use crate::field::{mount_fields, FieldDef, FieldMap, FieldOrigin};
use indexmap::IndexMap;
use octofhir_gql_diagnostics::Result;
use std::fmt;
use std::sync::Arc;

/// A reusable group of fields inherited by object types
#[derive(Debug, Clone, PartialEq)]
pub struct AbstractType {
    name: String,
    fields: FieldMap,
}

impl AbstractType {
    /// Start declaring an abstract type
    pub fn builder(name: impl Into<String>) -> AbstractTypeBuilder {
        AbstractTypeBuilder {
            name: name.into(),
            fields: IndexMap::new(),
        }
    }

    /// Type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared fields, in declaration order
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }
}

impl fmt::Display for AbstractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Builder for [`AbstractType`]
#[derive(Debug, Clone)]
pub struct AbstractTypeBuilder {
    name: String,
    fields: IndexMap<String, FieldDef>,
}

impl AbstractTypeBuilder {
    /// Declare a field
    pub fn field(mut self, name: impl Into<String>, def: impl Into<FieldDef>) -> Self {
        self.fields.insert(name.into(), def.into());
        self
    }

    /// Validate field names and build the mixin
    pub fn build(self) -> Result<Arc<AbstractType>> {
        let origin = FieldOrigin::AbstractType(self.name.clone());
        let fields = mount_fields(&origin, self.fields)?;
        Ok(Arc::new(AbstractType {
            name: self.name,
            fields,
        }))
    }
}
