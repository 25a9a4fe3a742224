use crate::graph::Node;
use crate::graph::NodeMember;
use crate::graph::Root;

/// A top-level entry of a [`Graph`](crate::graph::Graph): either an
/// anonymous [`Root`] fragment or a named [`Node`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphItem {
    Node(Node),
    Root(Root),
}
impl GraphItem {
    pub fn as_node(&self) -> Option<&Node> {
        if let Self::Node(node) = self {
            Some(node)
        } else {
            None
        }
    }

    pub fn as_root(&self) -> Option<&Root> {
        if let Self::Root(root) = self {
            Some(root)
        } else {
            None
        }
    }

    pub fn field(&self, name: &str) -> Option<&NodeMember> {
        match self {
            Self::Node(node) => node.field(name),
            Self::Root(root) => root.field(name),
        }
    }

    pub fn fields(&self) -> &[NodeMember] {
        match self {
            Self::Node(node) => node.fields(),
            Self::Root(root) => root.fields(),
        }
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// `None` for anonymous root fragments.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Node(node) => Some(node.name()),
            Self::Root(_) => None,
        }
    }
}
impl std::convert::From<Node> for GraphItem {
    fn from(value: Node) -> Self {
        Self::Node(value)
    }
}
impl std::convert::From<Root> for GraphItem {
    fn from(value: Root) -> Self {
        Self::Root(value)
    }
}
