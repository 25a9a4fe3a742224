use crate::graph::NameIndex;
use crate::graph::NodeMember;

/// The anonymous, top-level collection of queryable fields: the query root.
///
/// A graph may hold several `Root` fragments; [`Graph::root`](crate::graph::Graph::root)
/// aggregates all of them.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields)]
pub struct Root {
    pub(crate) fields: Vec<NodeMember>,

    #[serde(skip)]
    pub(crate) fields_index: NameIndex,
}
impl Root {
    pub fn new(fields: Vec<NodeMember>) -> Self {
        Self {
            fields,
            fields_index: NameIndex::default(),
        }
    }

    pub fn field(&self, name: &str) -> Option<&NodeMember> {
        self.fields_index.lookup(
            &self.fields,
            |member| Some(member.name()),
            name,
        )
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields_index.names(&self.fields, |member| Some(member.name()))
    }

    pub fn fields(&self) -> &[NodeMember] {
        self.fields.as_slice()
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}
