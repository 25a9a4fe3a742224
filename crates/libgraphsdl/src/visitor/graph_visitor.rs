use crate::graph::Field;
use crate::graph::FieldOption;
use crate::graph::Graph;
use crate::graph::GraphItem;
use crate::graph::Link;
use crate::graph::Node;
use crate::graph::NodeMember;
use crate::graph::Record;
use crate::graph::Root;

/// A read-only visitor over the graph model.
///
/// Visiting stops at the first error, which is propagated back to the
/// caller of [`Visitable::accept`]. Visitors that can't fail use
/// [`std::convert::Infallible`].
pub trait GraphVisitor {
    type Error;

    fn visit_graph(&mut self, graph: &Graph) -> Result<(), Self::Error> {
        walk_graph(self, graph)
    }

    fn visit_record(
        &mut self,
        _type_name: &str,
        _record: &Record,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn visit_root(&mut self, root: &Root) -> Result<(), Self::Error> {
        walk_root(self, root)
    }

    fn visit_node(&mut self, node: &Node) -> Result<(), Self::Error> {
        walk_node(self, node)
    }

    fn visit_field(&mut self, field: &Field) -> Result<(), Self::Error> {
        walk_field(self, field)
    }

    fn visit_link(&mut self, link: &Link) -> Result<(), Self::Error> {
        walk_link(self, link)
    }

    fn visit_option(
        &mut self,
        _option: &FieldOption,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Visits the graph's data types (in declaration order) and then its items.
pub fn walk_graph<V: GraphVisitor + ?Sized>(
    visitor: &mut V,
    graph: &Graph,
) -> Result<(), V::Error> {
    for (type_name, record) in graph.data_types() {
        visitor.visit_record(type_name, record)?;
    }
    for item in graph.items() {
        item.accept(visitor)?;
    }
    Ok(())
}

pub fn walk_root<V: GraphVisitor + ?Sized>(
    visitor: &mut V,
    root: &Root,
) -> Result<(), V::Error> {
    for member in root.fields() {
        member.accept(visitor)?;
    }
    Ok(())
}

pub fn walk_node<V: GraphVisitor + ?Sized>(
    visitor: &mut V,
    node: &Node,
) -> Result<(), V::Error> {
    for member in node.fields() {
        member.accept(visitor)?;
    }
    Ok(())
}

pub fn walk_field<V: GraphVisitor + ?Sized>(
    visitor: &mut V,
    field: &Field,
) -> Result<(), V::Error> {
    for option in field.options() {
        option.accept(visitor)?;
    }
    Ok(())
}

pub fn walk_link<V: GraphVisitor + ?Sized>(
    visitor: &mut V,
    link: &Link,
) -> Result<(), V::Error> {
    for option in link.options() {
        option.accept(visitor)?;
    }
    Ok(())
}

/// Implemented by every entity of the graph model.
pub trait Visitable {
    fn accept<V: GraphVisitor + ?Sized>(
        &self,
        visitor: &mut V,
    ) -> Result<(), V::Error>;
}

impl Visitable for Graph {
    fn accept<V: GraphVisitor + ?Sized>(
        &self,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        visitor.visit_graph(self)
    }
}

impl Visitable for GraphItem {
    fn accept<V: GraphVisitor + ?Sized>(
        &self,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        match self {
            Self::Node(node) => visitor.visit_node(node),
            Self::Root(root) => visitor.visit_root(root),
        }
    }
}

impl Visitable for Root {
    fn accept<V: GraphVisitor + ?Sized>(
        &self,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        visitor.visit_root(self)
    }
}

impl Visitable for Node {
    fn accept<V: GraphVisitor + ?Sized>(
        &self,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        visitor.visit_node(self)
    }
}

impl Visitable for NodeMember {
    fn accept<V: GraphVisitor + ?Sized>(
        &self,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        match self {
            Self::Field(field) => visitor.visit_field(field),
            Self::Link(link) => visitor.visit_link(link),
        }
    }
}

impl Visitable for Field {
    fn accept<V: GraphVisitor + ?Sized>(
        &self,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        visitor.visit_field(self)
    }
}

impl Visitable for Link {
    fn accept<V: GraphVisitor + ?Sized>(
        &self,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        visitor.visit_link(self)
    }
}

impl Visitable for FieldOption {
    fn accept<V: GraphVisitor + ?Sized>(
        &self,
        visitor: &mut V,
    ) -> Result<(), V::Error> {
        visitor.visit_option(self)
    }
}
