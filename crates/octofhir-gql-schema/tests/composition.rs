//! Object type composition tests
//!
//! Covers field table resolution:
//! - Declaration order without interfaces
//! - Interface field order and interface-over-interface precedence
//! - Local fields overriding interface fields
//! - Inheritance from mixins and composed object types
//! - Interface validation and implementer registration

use octofhir_gql_diagnostics::{Severity, GQL0001, GQL0005};
use octofhir_gql_schema::*;
use octofhir_gql_types::TypeRef;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::sync::Arc;

// === Helpers ===

fn keys(map: &FieldMap) -> Vec<&str> {
    map.keys().map(String::as_str).collect()
}

fn interface(name: &str, fields: &[(&str, TypeRef)]) -> Arc<InterfaceDescriptor> {
    fields
        .iter()
        .fold(InterfaceDescriptor::builder(name), |builder, (field, ty)| {
            builder.field(*field, ty.clone())
        })
        .build()
        .unwrap()
}

fn owner(object: &ObjectType, field: &str) -> FieldOrigin {
    object.fields()[field].origin.clone()
}

// === Field Order ===

#[test]
fn test_fields_follow_declaration_order_without_interfaces() {
    let object = compose_object(
        TypeDeclaration::object("Human")
            .field("name", TypeRef::String)
            .unmounted("height", TypeRef::Float)
            .field("homePlanet", TypeRef::String),
    )
    .unwrap();

    assert_eq!(keys(object.fields()), vec!["name", "height", "homePlanet"]);
    assert_eq!(object.fields(), object.local_fields());
    assert!(object.interface_fields().is_empty());
    assert!(object.interfaces().is_empty());
}

#[test]
fn test_interface_fields_come_first_in_interface_order() {
    let first = interface("First", &[("a", TypeRef::Int), ("shared", TypeRef::Int)]);
    let second = interface("Second", &[("shared", TypeRef::String), ("b", TypeRef::Int)]);

    let object = compose_object(
        TypeDeclaration::object("Both").meta(
            Meta::new()
                .with_interface(Arc::clone(&first))
                .with_interface(Arc::clone(&second)),
        ),
    )
    .unwrap();

    assert_eq!(keys(object.fields()), vec!["a", "shared", "b"]);
    assert_eq!(owner(&object, "a"), FieldOrigin::Interface("First".into()));
    assert_eq!(owner(&object, "shared"), FieldOrigin::Interface("Second".into()));
    assert!(Arc::ptr_eq(&object.fields()["b"], &second.fields()["b"]));
}

#[test]
fn test_local_field_overrides_interface_field() {
    let character = interface("Character", &[("id", TypeRef::Id), ("name", TypeRef::String)]);

    let object = compose_object(
        TypeDeclaration::object("Droid")
            .meta(Meta::new().with_interface(Arc::clone(&character)))
            .field("primaryFunction", TypeRef::String)
            .field("id", TypeRef::Id.non_null()),
    )
    .unwrap();

    assert_eq!(keys(object.fields()), vec!["id", "name", "primaryFunction"]);
    assert_eq!(owner(&object, "id"), FieldOrigin::ObjectType("Droid".into()));
    assert_eq!(object.fields()["id"], object.local_fields()["id"]);
    assert_eq!(object.fields()["id"].declared_type, TypeRef::Id.non_null());
    assert_eq!(owner(&object, "name"), FieldOrigin::Interface("Character".into()));

    // the override changed the declared type of `id`
    assert_eq!(object.diagnostics().len(), 1);
    assert_eq!(object.diagnostics()[0].severity, Severity::Warning);
    assert_eq!(object.diagnostics()[0].code, GQL0005);
}

#[test]
fn test_field_keys_are_union_of_interface_and_local() {
    let node = interface("Node", &[("id", TypeRef::Id), ("createdAt", TypeRef::String)]);

    let object = compose_object(
        TypeDeclaration::object("Post")
            .meta(Meta::new().with_interface(node))
            .field("title", TypeRef::String)
            .field("createdAt", TypeRef::Int),
    )
    .unwrap();

    let mut expected: Vec<&str> = keys(object.interface_fields());
    for name in keys(object.local_fields()) {
        if !expected.contains(&name) {
            expected.push(name);
        }
    }
    assert_eq!(keys(object.fields()), expected);
    for (name, field) in object.local_fields() {
        assert_eq!(&object.fields()[name], field);
    }
}

// === Inheritance ===

#[test]
fn test_mixin_fields_precede_body_fields() {
    let timestamps = AbstractType::builder("Timestamps")
        .field("createdAt", TypeRef::String)
        .field("updatedAt", TypeRef::String)
        .build()
        .unwrap();

    let object = compose_object(
        TypeDeclaration::object("Article")
            .mixin(&timestamps)
            .field("title", TypeRef::String)
            .field("updatedAt", TypeRef::Int),
    )
    .unwrap();

    assert_eq!(keys(object.fields()), vec!["createdAt", "updatedAt", "title"]);
    assert_eq!(owner(&object, "createdAt"), FieldOrigin::AbstractType("Timestamps".into()));
    assert_eq!(owner(&object, "updatedAt"), FieldOrigin::ObjectType("Article".into()));
    assert!(Arc::ptr_eq(
        &object.fields()["createdAt"],
        &timestamps.fields()["createdAt"]
    ));
}

#[test]
fn test_object_type_base_shares_descriptors() {
    let parent = compose_object(
        TypeDeclaration::object("Animal")
            .field("name", TypeRef::String)
            .field("legs", TypeRef::Int),
    )
    .unwrap();

    let child = compose_object(
        TypeDeclaration::object("Dog")
            .extends(&parent)
            .field("breed", TypeRef::String),
    )
    .unwrap();

    assert_eq!(keys(child.fields()), vec!["name", "legs", "breed"]);
    assert!(Arc::ptr_eq(&child.fields()["name"], &parent.fields()["name"]));
    assert_eq!(keys(parent.fields()), vec!["name", "legs"]);
}

#[test]
fn test_extending_an_object_type_does_not_inherit_interfaces() {
    let node = interface("Node", &[("id", TypeRef::Id)]);
    let parent = compose_object(
        TypeDeclaration::object("Parent").meta(Meta::new().with_interface(Arc::clone(&node))),
    )
    .unwrap();
    let child = compose_object(TypeDeclaration::object("Child").extends(&parent)).unwrap();

    assert!(child.interfaces().is_empty());
    assert_eq!(keys(child.local_fields()), vec!["id"]);
    assert_eq!(node.implementer_names(), vec!["Parent"]);
}

// === Interface Validation ===

#[rstest]
#[case::scalar(SchemaType::from(TypeRef::String), "String")]
#[case::named(SchemaType::from(TypeRef::named("Character")), "Character")]
#[case::mixin(
    SchemaType::from(AbstractType::builder("Mixin").build().unwrap()),
    "Mixin"
)]
fn test_non_interface_is_rejected(#[case] entry: SchemaType, #[case] shown: &str) {
    let err = compose(
        TypeDeclaration::object("Human")
            .meta(Meta::new().with_interface(entry))
            .field("__invalid", TypeRef::String),
    )
    .unwrap_err();

    // interface validation runs before any field is looked at
    assert_eq!(err.code(), GQL0001);
    assert_eq!(err.type_name(), Some("Human"));
    assert!(err.to_string().contains(&format!("Received \"{}\"", shown)));
}

#[test]
fn test_object_type_is_not_an_interface() {
    let other = compose_object(TypeDeclaration::object("Other")).unwrap();
    let node = interface("Node", &[("id", TypeRef::Id)]);

    let err = compose(
        TypeDeclaration::object("Thing").meta(
            Meta::new()
                .with_interface(Arc::clone(&node))
                .with_interface(other),
        ),
    )
    .unwrap_err();

    assert!(err.is_configuration());
    // the failed composition registered nothing
    assert!(node.implementers().is_empty());
}

// === Registration ===

#[test]
fn test_type_is_registered_with_each_interface() {
    let node = interface("Node", &[("id", TypeRef::Id)]);
    let named = interface("Named", &[("name", TypeRef::String)]);

    let object = compose_object(
        TypeDeclaration::object("User").meta(
            Meta::new()
                .with_interface(Arc::clone(&node))
                .with_interface(Arc::clone(&named)),
        ),
    )
    .unwrap();

    for interface in [&node, &named] {
        let implementers = interface.implementers();
        assert_eq!(implementers.len(), 1);
        assert!(Arc::ptr_eq(&implementers[0], &object));
    }
    assert!(object.implements("Node"));
    assert!(!object.implements("Character"));
}

#[test]
fn test_registering_twice_keeps_one_entry() {
    let node = interface("Node", &[("id", TypeRef::Id)]);
    let object = compose_object(
        TypeDeclaration::object("User").meta(Meta::new().with_interface(Arc::clone(&node))),
    )
    .unwrap();

    assert!(!node.implements(&object));
    assert!(!node.implements(&object));
    assert_eq!(node.implementer_names(), vec!["User"]);
    assert!(node.is_implemented_by(&object));
    assert!(node.has_implementer_named("User"));
}

#[test]
fn test_distinct_types_sharing_a_name_are_both_registered() {
    let node = interface("Node", &[("id", TypeRef::Id)]);
    let compose_named_x = |declared: &str| {
        compose_object(
            TypeDeclaration::object(declared)
                .meta(Meta::new().with_name("X").with_interface(Arc::clone(&node))),
        )
        .unwrap()
    };

    let a = compose_named_x("A");
    let b = compose_named_x("B");

    let implementers = node.implementers();
    assert_eq!(implementers.len(), 2);
    assert!(Arc::ptr_eq(&implementers[0], &a));
    assert!(Arc::ptr_eq(&implementers[1], &b));
    assert!(node.is_implemented_by(&a));
    assert!(node.is_implemented_by(&b));
    assert_eq!(node.implementer_names(), vec!["X", "X"]);
}

#[test]
fn test_dropped_implementer_is_not_listed() {
    let node = interface("Node", &[("id", TypeRef::Id)]);
    let object = compose_object(
        TypeDeclaration::object("Temp").meta(Meta::new().with_interface(Arc::clone(&node))),
    )
    .unwrap();
    drop(object);

    assert!(node.implementers().is_empty());
    assert_eq!(node.implementer_names(), vec!["Temp"]);
}

#[test]
fn test_concurrent_composition_sharing_an_interface() {
    let node = interface("Node", &[("id", TypeRef::Id)]);

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let node = Arc::clone(&node);
            std::thread::spawn(move || {
                compose_object(
                    TypeDeclaration::object(format!("Type{}", i))
                        .meta(Meta::new().with_interface(node)),
                )
                .unwrap()
            })
        })
        .collect();
    let objects: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(node.implementers().len(), objects.len());
}

// === Metadata ===

#[test]
fn test_description_defaults_to_doc() {
    let object = compose_object(
        TypeDeclaration::object("Human").doc("A humanoid creature in the Star Wars universe."),
    )
    .unwrap();

    assert_eq!(
        object.description(),
        Some("A humanoid creature in the Star Wars universe.")
    );
    assert_eq!(object.to_string(), "Human");
}

#[test]
fn test_meta_overrides_name_and_description() {
    let object = compose_object(
        TypeDeclaration::object("HumanType")
            .doc("docstring")
            .meta(Meta::new().with_name("Human").with_description("From meta")),
    )
    .unwrap();

    assert_eq!(object.name(), "Human");
    assert_eq!(format!("{}", object), "Human");
    assert_eq!(object.description(), Some("From meta"));
}

#[test]
fn test_invalid_field_name_is_rejected() {
    let err = compose(TypeDeclaration::object("Human").field("first-name", TypeRef::String))
        .unwrap_err();
    assert_eq!(err.code(), octofhir_gql_diagnostics::GQL0003);
}
