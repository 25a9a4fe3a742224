use crate::graph::Directive;
use crate::graph::Field;
use crate::graph::Graph;
use crate::graph::GraphItem;
use crate::graph::Link;
use crate::graph::Node;
use crate::graph::Root;
use crate::strip::strip_introspection;
use crate::types::TypeExpr;

fn string_field(name: &str) -> Field {
    Field::new(name, Some(TypeExpr::String))
}

/// A graph decorated the way introspection/federation machinery does it.
fn introspected_graph() -> Graph {
    Graph::new(vec![
        Root::new(vec![
            string_field("__typename").into(),
            string_field("version").into(),
            Link::new("_entities", TypeExpr::sequence(TypeExpr::Any)).into(),
        ]).into(),
        Node::new("User", vec![
            string_field("__typename").into(),
            Field::new("id", Some(TypeExpr::Integer)).into(),
        ])
        .with_description("A user")
        .with_directives(vec![Directive::new("key")])
        .into(),
        Node::new("__Schema", vec![string_field("types").into()]).into(),
        Root::new(vec![
            Field::new("__schema", Some(TypeExpr::type_ref("__Schema")))
                .into(),
            Field::new("__type", Some(TypeExpr::type_ref("__Type"))).into(),
        ]).into(),
    ])
}

#[test]
fn strips_meta_fields_from_root() {
    let stripped = strip_introspection(&introspected_graph());
    let root_fields: Vec<&str> = stripped.root().field_names().collect();
    assert_eq!(root_fields, vec!["version"]);
}

#[test]
fn strips_typename_from_every_node() {
    let stripped = strip_introspection(&introspected_graph());
    for node in stripped.edges() {
        assert!(
            !node.has_field("__typename"),
            "`{}` still has `__typename`",
            node.name(),
        );
    }
    let user = stripped.edge("User").expect("User node");
    assert_eq!(user.field_names().collect::<Vec<_>>(), vec!["id"]);
}

#[test]
fn keeps_node_description_and_directives() {
    let stripped = strip_introspection(&introspected_graph());
    let user = stripped.edge("User").expect("User node");
    assert_eq!(user.description(), Some("A user"));
    assert_eq!(user.directives(), &[Directive::new("key")]);
}

#[test]
fn drops_reserved_nodes_and_the_introspection_root() {
    let stripped = strip_introspection(&introspected_graph());
    let item_names: Vec<Option<&str>> =
        stripped.items().iter().map(GraphItem::name).collect();
    assert_eq!(item_names, vec![None, Some("User")]);
}

#[test]
fn leaves_the_input_graph_untouched() {
    let graph = introspected_graph();
    let before = graph.clone();
    let _ = strip_introspection(&graph);
    assert_eq!(graph, before);
    assert!(graph.root().has_field("__typename"));
    assert!(graph.edge("__Schema").is_some());
}

#[test]
fn stripping_is_idempotent() {
    let once = strip_introspection(&introspected_graph());
    let twice = strip_introspection(&once);
    assert_eq!(twice, once);
}

#[test]
fn graph_without_meta_members_is_unchanged() {
    let graph = Graph::new(vec![
        Root::new(vec![string_field("version").into()]).into(),
        Node::new("User", vec![string_field("name").into()]).into(),
    ]);
    assert_eq!(strip_introspection(&graph), graph);
}
