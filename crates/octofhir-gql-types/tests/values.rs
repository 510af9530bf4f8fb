//! Value and type reference tests
//!
//! Covers conversion of constructor arguments from Rust and JSON values and
//! the textual form of declared types.

use octofhir_gql_types::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(TypeRef::Int, "Int")]
#[case(TypeRef::Id.non_null(), "ID!")]
#[case(TypeRef::list(TypeRef::named("Episode")), "[Episode]")]
#[case(TypeRef::list(TypeRef::named("Character").non_null()).non_null(), "[Character!]!")]
fn test_type_ref_display(#[case] type_ref: TypeRef, #[case] expected: &str) {
    assert_eq!(type_ref.to_string(), expected);
}

#[test]
fn test_value_deserializes_untagged() {
    let value: GqlValue = serde_json::from_str(r#"[1, 2.5, "three", null, true]"#).unwrap();

    assert_eq!(
        value,
        GqlValue::List(vec![
            GqlValue::Int(1),
            GqlValue::Float(2.5),
            GqlValue::string("three"),
            GqlValue::Null,
            GqlValue::Boolean(true),
        ])
    );
}

#[test]
fn test_value_from_rust_types() {
    assert_eq!(GqlValue::from(7), GqlValue::Int(7));
    assert_eq!(GqlValue::from(Some("x")), GqlValue::string("x"));
    assert_eq!(GqlValue::from(vec!["a", "b"]).as_list().map(<[_]>::len), Some(2));
    assert_eq!(GqlValue::from(1.5).kind(), "Float");
}

#[test]
fn test_type_ref_serializes_with_kind_tag() {
    let json = serde_json::to_value(TypeRef::list(TypeRef::Id)).unwrap();
    assert_eq!(json, serde_json::json!({"kind": "List", "of": {"kind": "ID"}}));
}
