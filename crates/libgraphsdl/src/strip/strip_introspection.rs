use crate::graph::Graph;
use crate::graph::GraphItem;
use crate::graph::Node;
use crate::graph::NodeMember;
use crate::graph::Root;
use crate::visitor::GraphTransformer;

/// Meta-fields of the query root that only exist for introspection and
/// federation.
const ROOT_META_FIELDS: &[&str] = &["__typename", "_entities"];

/// Meta-fields of every node.
const NODE_META_FIELDS: &[&str] = &["__typename"];

/// Prefix reserved for introspection types (`__Schema`, `__Type`, ...).
const RESERVED_PREFIX: &str = "__";

/// The field that marks a root fragment as introspection machinery.
const INTROSPECTION_ROOT_FIELD: &str = "__schema";

/// A [`GraphTransformer`] producing a copy of a graph without:
///  * the `__typename` and `_entities` root fields,
///  * the `__typename` field of any node,
///  * nodes whose name starts with `__`,
///  * root fragments that declare a `__schema` field.
#[derive(Debug, Default)]
pub struct StripIntrospection;
impl GraphTransformer for StripIntrospection {
    fn transform_graph(&mut self, graph: &Graph) -> Graph {
        Graph::new(
            graph.items()
                .iter()
                .filter(|item| !is_introspection_item(item))
                .map(|item| self.transform_item(item))
                .collect(),
        ).with_data_types(graph.data_types().clone())
    }

    fn transform_root(&mut self, root: &Root) -> Root {
        Root::new(
            root.fields()
                .iter()
                .filter(|member| !ROOT_META_FIELDS.contains(&member.name()))
                .map(|member| self.transform_member(member))
                .collect(),
        )
    }

    fn transform_node(&mut self, node: &Node) -> Node {
        Node {
            name: node.name.clone(),
            fields: node.fields
                .iter()
                .filter(|member| !is_node_meta_field(member))
                .map(|member| self.transform_member(member))
                .collect(),
            description: node.description.clone(),
            directives: node.directives.clone(),
            fields_index: Default::default(),
        }
    }
}

fn is_introspection_item(item: &GraphItem) -> bool {
    match item {
        GraphItem::Node(node) => node.name().starts_with(RESERVED_PREFIX),
        GraphItem::Root(root) => root.has_field(INTROSPECTION_ROOT_FIELD),
    }
}

fn is_node_meta_field(member: &NodeMember) -> bool {
    NODE_META_FIELDS.contains(&member.name())
}

/// Returns a copy of `graph` with its introspection and federation members
/// removed. `graph` itself is left untouched.
pub fn strip_introspection(graph: &Graph) -> Graph {
    let stripped = StripIntrospection.transform_graph(graph);
    log::debug!(
        "Stripped introspection members: {} graph items remain of {}.",
        stripped.items().len(),
        graph.items().len(),
    );
    stripped
}
