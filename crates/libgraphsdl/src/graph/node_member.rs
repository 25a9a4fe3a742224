use crate::graph::Field;
use crate::graph::FieldOption;
use crate::graph::Link;
use crate::types::TypeExpr;

/// One of the members of a [`Node`](crate::graph::Node) or
/// [`Root`](crate::graph::Root).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum NodeMember {
    Field(Field),
    Link(Link),
}
impl NodeMember {
    pub fn as_field(&self) -> Option<&Field> {
        if let Self::Field(field) = self {
            Some(field)
        } else {
            None
        }
    }

    pub fn as_link(&self) -> Option<&Link> {
        if let Self::Link(link) = self {
            Some(link)
        } else {
            None
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Field(field) => field.description(),
            Self::Link(link) => link.description(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Field(field) => field.name(),
            Self::Link(link) => link.name(),
        }
    }

    pub fn options(&self) -> &[FieldOption] {
        match self {
            Self::Field(field) => field.options(),
            Self::Link(link) => link.options(),
        }
    }

    pub fn type_expr(&self) -> Option<&TypeExpr> {
        match self {
            Self::Field(field) => field.type_expr(),
            Self::Link(link) => Some(link.type_expr()),
        }
    }
}
impl std::convert::From<Field> for NodeMember {
    fn from(value: Field) -> Self {
        Self::Field(value)
    }
}
impl std::convert::From<Link> for NodeMember {
    fn from(value: Link) -> Self {
        Self::Link(value)
    }
}
