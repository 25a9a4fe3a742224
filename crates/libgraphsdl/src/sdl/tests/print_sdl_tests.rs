use crate::graph::Directive;
use crate::graph::DirectiveArg;
use crate::graph::Field;
use crate::graph::FieldOption;
use crate::graph::Graph;
use crate::graph::Link;
use crate::graph::Node;
use crate::graph::Root;
use crate::sdl::get_ast;
use crate::sdl::print_sdl;
use crate::sdl::tests::test_utils::normalize_sdl;
use crate::sdl::SdlExportError;
use crate::types::DirectiveArgType;
use crate::types::TypeExpr;
use crate::Value;
use rayon::prelude::*;

type Result<T> = std::result::Result<T, SdlExportError>;

fn users_graph(limit: FieldOption) -> Graph {
    Graph::new(vec![
        Root::new(vec![
            Link::new("users", TypeExpr::sequence(TypeExpr::type_ref("User")))
                .with_options(vec![limit])
                .into(),
        ]).into(),
        Node::new("User", vec![
            Field::new("id", Some(TypeExpr::Integer)).into(),
        ]).into(),
    ])
}

#[test]
fn prints_root_extension_and_node() -> Result<()> {
    let graph = Graph::new(vec![
        Root::new(vec![
            Field::new("version", Some(TypeExpr::String)).into(),
        ]).into(),
        Node::new("User", vec![
            Field::new("id", Some(TypeExpr::Integer)).into(),
            Field::new("name", Some(TypeExpr::optional(TypeExpr::String))).into(),
        ]).into(),
    ]);

    assert_eq!(
        normalize_sdl(&print_sdl(&graph)?),
        "scalar Any \
         extend type Query { version: String! } \
         type User { id: Int! name: String }",
    );
    Ok(())
}

#[test]
fn absent_default_prints_no_default_clause() -> Result<()> {
    let limit = FieldOption::new(
        "limit",
        Some(TypeExpr::optional(TypeExpr::Integer)),
    );
    let sdl = normalize_sdl(&print_sdl(&users_graph(limit))?);
    assert!(sdl.contains("limit: Int"), "{sdl}");
    assert!(!sdl.contains('='), "{sdl}");
    assert!(sdl.contains("[User!]!"), "{sdl}");
    Ok(())
}

#[test]
fn present_default_prints_default_clause() -> Result<()> {
    let limit = FieldOption::new(
        "limit",
        Some(TypeExpr::optional(TypeExpr::Integer)),
    ).with_default(10);
    let sdl = normalize_sdl(&print_sdl(&users_graph(limit))?);
    assert!(sdl.contains("limit: Int = 10"), "{sdl}");
    Ok(())
}

#[test]
fn explicit_null_default_prints_null() -> Result<()> {
    let limit = FieldOption::new(
        "limit",
        Some(TypeExpr::optional(TypeExpr::Integer)),
    ).with_default(Value::Null);
    let sdl = normalize_sdl(&print_sdl(&users_graph(limit))?);
    assert!(sdl.contains("limit: Int = null"), "{sdl}");
    Ok(())
}

#[test]
fn infinite_default_fails_the_whole_print() {
    let limit = FieldOption::new(
        "limit",
        Some(TypeExpr::optional(TypeExpr::Float)),
    ).with_default(f64::INFINITY);
    assert_eq!(
        print_sdl(&users_graph(limit)),
        Err(SdlExportError::UnencodableValue {
            value: Value::Float(f64::INFINITY),
        }),
    );
}

#[test]
fn printed_sdl_has_no_introspection_members() -> Result<()> {
    let graph = Graph::new(vec![
        Root::new(vec![
            Field::new("__typename", Some(TypeExpr::String)).into(),
            Field::new("_entities", Some(TypeExpr::sequence(TypeExpr::Any))).into(),
            Field::new("version", Some(TypeExpr::String)).into(),
        ]).into(),
        Root::new(vec![
            Field::new("__schema", Some(TypeExpr::Any)).into(),
        ]).into(),
        Node::new("__Type", vec![
            Field::new("kind", Some(TypeExpr::String)).into(),
        ]).into(),
        Node::new("User", vec![
            Field::new("__typename", Some(TypeExpr::String)).into(),
            Field::new("id", Some(TypeExpr::Integer)).into(),
        ]).into(),
    ]);

    assert_eq!(
        normalize_sdl(&print_sdl(&graph)?),
        "scalar Any \
         extend type Query { version: String! } \
         type User { id: Int! }",
    );
    Ok(())
}

#[test]
fn exporting_twice_yields_identical_documents() -> Result<()> {
    let graph = users_graph(
        FieldOption::new("limit", Some(TypeExpr::optional(TypeExpr::Integer)))
            .with_default(10),
    );
    assert_eq!(get_ast(&graph)?, get_ast(&graph)?);
    Ok(())
}

#[test]
fn prints_node_directive_arguments_as_string_literals() -> Result<()> {
    let graph = Graph::new(vec![
        Node::new("User", vec![Field::new("id", Some(TypeExpr::Integer)).into()])
            .with_directives(vec![Directive::new("key").with_arg(
                DirectiveArg::new(
                    "fields",
                    DirectiveArgType::non_null(DirectiveArgType::scalar("String")),
                    "id",
                ),
            )])
            .into(),
    ]);

    let sdl = normalize_sdl(&print_sdl(&graph)?);
    assert!(sdl.contains(r#"type User @key(fields: "id")"#), "{sdl}");
    Ok(())
}

#[test]
fn concurrent_prints_of_a_shared_graph_agree() -> Result<()> {
    let graph = users_graph(
        FieldOption::new("limit", Some(TypeExpr::optional(TypeExpr::Integer)))
            .with_default(10),
    );
    let expected = print_sdl(&graph)?;

    let printed = (0..32)
        .into_par_iter()
        .map(|_| print_sdl(&graph))
        .collect::<Result<Vec<_>>>()?;
    assert!(printed.iter().all(|sdl| *sdl == expected));
    Ok(())
}
