use crate::DefaultValue;
use crate::graph::Field;
use crate::graph::Graph;
use crate::graph::NodeMember;
use crate::types::TypeExpr;
use crate::Value;

type Result<T> = std::result::Result<T, serde_json::Error>;

#[test]
fn missing_default_is_absent_and_null_default_is_present() -> Result<()> {
    let field: Field = serde_json::from_str(r#"{
        "name": "users",
        "type": {"Sequence": {"TypeRef": "User"}},
        "options": [
            {"name": "limit", "type": "Integer"},
            {"name": "cursor", "type": {"Optional": "String"}, "default": null}
        ]
    }"#)?;

    let limit = field.option("limit").expect("limit option");
    assert_eq!(limit.default(), &DefaultValue::Absent);
    let cursor = field.option("cursor").expect("cursor option");
    assert_eq!(cursor.default(), &DefaultValue::Present(Value::Null));
    Ok(())
}

#[test]
fn default_values_keep_their_json_kinds() -> Result<()> {
    let field: Field = serde_json::from_str(r#"{
        "name": "f",
        "options": [
            {"name": "i", "default": 10},
            {"name": "x", "default": 1.5},
            {"name": "b", "default": true},
            {"name": "s", "default": "hi"},
            {"name": "l", "default": [1, null]}
        ]
    }"#)?;

    let default_of = |name: &str| {
        field.option(name).and_then(|opt| opt.default().as_value()).cloned()
    };
    assert_eq!(default_of("i"), Some(Value::Int(10)));
    assert_eq!(default_of("x"), Some(Value::Float(1.5)));
    assert_eq!(default_of("b"), Some(Value::Boolean(true)));
    assert_eq!(default_of("s"), Some(Value::String("hi".to_string())));
    assert_eq!(
        default_of("l"),
        Some(Value::list([Value::Int(1), Value::Null])),
    );
    Ok(())
}

#[test]
fn unknown_fields_are_rejected() {
    let result = serde_json::from_str::<Field>(
        r#"{"name": "id", "type": "Integer", "nullable": true}"#,
    );
    let err = result.expect_err("unknown `nullable` key must be rejected");
    assert!(err.to_string().contains("nullable"), "{err}");
}

#[test]
fn graph_from_json() -> Result<()> {
    let graph: Graph = serde_json::from_str(r#"{
        "items": [
            {"Root": {"fields": [
                {"Field": {"name": "version", "type": "String"}}
            ]}},
            {"Node": {"name": "User", "fields": [
                {"Field": {"name": "id", "type": "Integer"}},
                {"Link": {
                    "name": "friends",
                    "type": {"Sequence": {"TypeRef": "User"}},
                    "requires": ["id"]
                }}
            ]}}
        ],
        "data_types": {
            "Point": {"field_types": {"x": "Float", "y": null}}
        }
    }"#)?;

    assert!(graph.root().has_field("version"));
    let user = graph.edge("User").expect("User node");
    match user.field("friends") {
        Some(NodeMember::Link(link)) => {
            assert_eq!(link.requires(), &["id".to_string()]);
            assert_eq!(link.target(), Some("User"));
        },
        other => panic!("Expected a link, found {other:?}"),
    }
    let point = graph.data_types().get("Point").expect("Point record");
    assert_eq!(point.field_types().get("x"), Some(&Some(TypeExpr::Float)));
    assert_eq!(point.field_types().get("y"), Some(&None));
    Ok(())
}

#[test]
fn graph_json_round_trip_preserves_equality() -> Result<()> {
    let graph = Graph::new(vec![
        crate::graph::Root::new(vec![
            Field::new("version", Some(TypeExpr::String)).into(),
        ]).into(),
    ]);
    let json = serde_json::to_string(&graph)?;
    let parsed: Graph = serde_json::from_str(&json)?;
    assert_eq!(graph, parsed);
    Ok(())
}
