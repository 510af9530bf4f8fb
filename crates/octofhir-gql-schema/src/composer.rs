//! Object type composition
//!
//! `compose` turns a [`TypeDeclaration`] into an immutable [`ObjectType`]:
//!
//! 1. The `Meta` block is applied over the declaration defaults.
//! 2. Every declared interface is checked to be an interface.
//! 3. Inherited fields are collected from the bases, in base order, a later
//!    base winning on a repeated name.
//! 4. Body fields (explicit or unmounted) are stripped from the attributes
//!    and overlaid on the inherited ones to form the local fields.
//! 5. Interface fields are merged in interface order, and the local fields
//!    are overlaid on them to form the resolved table.
//! 6. The descriptor is frozen and registered with each interface.
//!
//! A local field that replaces an interface field with a different declared
//! type still composes, but leaves a warning on the descriptor.
//!
//! Overlaying keeps the position of a name already present and takes the
//! descriptor from the later source.

use crate::declaration::{Attribute, Base, TypeDeclaration};
use crate::field::{mount_fields, overlay, FieldDef, FieldMap, FieldOrigin};
use crate::interface::InterfaceDescriptor;
use crate::object_type::{BareType, ComposedType, ObjectType};
use crate::options::{ObjectTypeOptions, SchemaType};
use indexmap::IndexMap;
use octofhir_gql_diagnostics::{Diagnostic, GqlError, Result, GQL0005};
use std::sync::Arc;

/// Compose a declaration into an object type
///
/// A declaration without an object type base is the root itself and comes
/// back as [`ComposedType::Bare`] without any checks.
pub fn compose(declaration: TypeDeclaration) -> Result<ComposedType> {
    if !declaration.is_object_type() {
        log::trace!("{} is not an object type; skipping composition", declaration.name);
        return Ok(ComposedType::Bare(BareType {
            name: declaration.name,
            attributes: declaration.attributes,
        }));
    }

    let TypeDeclaration {
        name,
        bases,
        mut attributes,
        doc,
        meta,
    } = declaration;

    let options = ObjectTypeOptions::new(meta, name.clone(), doc);
    let interfaces = resolve_interfaces(&options.name, &options.interfaces)?;

    let inherited = inherited_fields(&bases);
    let declared = yank_fields(&mut attributes);
    let origin = FieldOrigin::ObjectType(options.name.clone());
    let mut local_fields = inherited;
    overlay(&mut local_fields, &mount_fields(&origin, declared)?);

    let mut interface_fields = FieldMap::new();
    for interface in &interfaces {
        overlay(&mut interface_fields, interface.fields());
    }

    let mut fields = interface_fields.clone();
    overlay(&mut fields, &local_fields);
    let diagnostics = changed_interface_fields(&options.name, &interface_fields, &local_fields);

    let object_type = Arc::new(ObjectType {
        name: options.name,
        declared_name: name,
        description: options.description,
        interfaces,
        local_fields,
        interface_fields,
        fields,
        attributes,
        is_type_of: options.is_type_of,
        diagnostics,
    });

    for interface in object_type.interfaces() {
        interface.implements(&object_type);
    }

    log::debug!(
        "composed object type {} ({} fields, {} interfaces)",
        object_type.name(),
        object_type.fields().len(),
        object_type.interfaces().len()
    );

    Ok(ComposedType::Object(object_type))
}

/// Compose a declaration that must yield an object type
pub fn compose_object(declaration: TypeDeclaration) -> Result<Arc<ObjectType>> {
    let name = declaration.name.clone();
    compose(declaration)?
        .into_object()
        .ok_or_else(|| GqlError::not_an_object_type(name))
}

fn resolve_interfaces(
    type_name: &str,
    declared: &[SchemaType],
) -> Result<Vec<Arc<InterfaceDescriptor>>> {
    declared
        .iter()
        .map(|entry| {
            entry
                .as_interface()
                .cloned()
                .ok_or_else(|| GqlError::invalid_interface(type_name, entry))
        })
        .collect()
}

fn inherited_fields(bases: &[Base]) -> FieldMap {
    let mut inherited = FieldMap::new();
    for base in bases {
        match base {
            Base::Root => {}
            Base::Abstract(mixin) => overlay(&mut inherited, mixin.fields()),
            Base::Object(parent) => overlay(&mut inherited, parent.fields()),
        }
    }
    inherited
}

/// Warn about local fields that change the declared type of an interface field
fn changed_interface_fields(
    type_name: &str,
    interface_fields: &FieldMap,
    local_fields: &FieldMap,
) -> Vec<Diagnostic> {
    local_fields
        .iter()
        .filter_map(|(name, local)| {
            let contract = interface_fields.get(name)?;
            if contract.declared_type == local.declared_type {
                return None;
            }
            log::warn!(
                "{}.{} overrides {}.{} with a different type",
                type_name,
                name,
                contract.origin.owner(),
                name
            );
            let diagnostic = Diagnostic::warning(
                GQL0005,
                format!(
                    "Field \"{}\" is declared as {} but interface {} declares it as {}",
                    name,
                    local.declared_type,
                    contract.origin.owner(),
                    contract.declared_type
                ),
            )
            .with_type_name(type_name);
            Some(match GQL0005.info().help {
                Some(help) => diagnostic.with_help(help),
                None => diagnostic,
            })
        })
        .collect()
}

/// Remove field entries from the body, keeping their order
fn yank_fields(attributes: &mut IndexMap<String, Attribute>) -> IndexMap<String, FieldDef> {
    let mut declared = IndexMap::new();
    attributes.retain(|name, attribute| match attribute.to_field_def() {
        Some(def) => {
            declared.insert(name.clone(), def);
            false
        }
        None => true,
    });
    declared
}
