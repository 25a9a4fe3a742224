use crate::graph::Field;
use crate::graph::FieldOption;
use crate::graph::Graph;
use crate::graph::GraphItem;
use crate::graph::Link;
use crate::graph::Node;
use crate::graph::NodeMember;
use crate::graph::Root;

/// A visitor that builds a new graph of the same shape as the one it visits.
///
/// Transformers never mutate their input. Each default method rebuilds its
/// entity from the (transformed) children, so an implementation only
/// overrides the kinds it wants to rewrite.
pub trait GraphTransformer {
    fn transform_graph(&mut self, graph: &Graph) -> Graph {
        rebuild_graph(self, graph)
    }

    fn transform_item(&mut self, item: &GraphItem) -> GraphItem {
        match item {
            GraphItem::Node(node) => GraphItem::Node(self.transform_node(node)),
            GraphItem::Root(root) => GraphItem::Root(self.transform_root(root)),
        }
    }

    fn transform_root(&mut self, root: &Root) -> Root {
        rebuild_root(self, root)
    }

    fn transform_node(&mut self, node: &Node) -> Node {
        rebuild_node(self, node)
    }

    fn transform_member(&mut self, member: &NodeMember) -> NodeMember {
        match member {
            NodeMember::Field(field) => {
                NodeMember::Field(self.transform_field(field))
            },
            NodeMember::Link(link) => {
                NodeMember::Link(self.transform_link(link))
            },
        }
    }

    fn transform_field(&mut self, field: &Field) -> Field {
        rebuild_field(self, field)
    }

    fn transform_link(&mut self, link: &Link) -> Link {
        rebuild_link(self, link)
    }

    fn transform_option(&mut self, option: &FieldOption) -> FieldOption {
        option.clone()
    }
}

/// Data types are structural and carried over as-is.
pub fn rebuild_graph<T: GraphTransformer + ?Sized>(
    transformer: &mut T,
    graph: &Graph,
) -> Graph {
    Graph::new(
        graph.items()
            .iter()
            .map(|item| transformer.transform_item(item))
            .collect(),
    ).with_data_types(graph.data_types().clone())
}

pub fn rebuild_root<T: GraphTransformer + ?Sized>(
    transformer: &mut T,
    root: &Root,
) -> Root {
    Root::new(
        root.fields()
            .iter()
            .map(|member| transformer.transform_member(member))
            .collect(),
    )
}

pub fn rebuild_node<T: GraphTransformer + ?Sized>(
    transformer: &mut T,
    node: &Node,
) -> Node {
    Node {
        name: node.name.clone(),
        fields: node.fields
            .iter()
            .map(|member| transformer.transform_member(member))
            .collect(),
        description: node.description.clone(),
        directives: node.directives.clone(),
        fields_index: Default::default(),
    }
}

pub fn rebuild_field<T: GraphTransformer + ?Sized>(
    transformer: &mut T,
    field: &Field,
) -> Field {
    Field {
        name: field.name.clone(),
        type_expr: field.type_expr.clone(),
        options: field.options
            .iter()
            .map(|option| transformer.transform_option(option))
            .collect(),
        description: field.description.clone(),
        resolver: field.resolver.clone(),
        directives: field.directives.clone(),
        options_index: Default::default(),
    }
}

pub fn rebuild_link<T: GraphTransformer + ?Sized>(
    transformer: &mut T,
    link: &Link,
) -> Link {
    Link {
        name: link.name.clone(),
        type_expr: link.type_expr.clone(),
        requires: link.requires.clone(),
        options: link.options
            .iter()
            .map(|option| transformer.transform_option(option))
            .collect(),
        description: link.description.clone(),
        resolver: link.resolver.clone(),
        directives: link.directives.clone(),
        options_index: Default::default(),
    }
}
