use crate::graph::Directive;
use crate::graph::NameIndex;
use crate::graph::NodeMember;

/// A named collection of fields and links describing one queryable object
/// type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) fields: Vec<NodeMember>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,

    #[serde(default)]
    pub(crate) directives: Vec<Directive>,

    #[serde(skip)]
    pub(crate) fields_index: NameIndex,
}
impl Node {
    pub fn new(name: impl AsRef<str>, fields: Vec<NodeMember>) -> Self {
        Self {
            name: name.as_ref().to_string(),
            fields,
            description: None,
            directives: vec![],
            fields_index: NameIndex::default(),
        }
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    pub fn with_directives(mut self, directives: Vec<Directive>) -> Self {
        self.directives = directives;
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[Directive] {
        self.directives.as_slice()
    }

    /// Look up a field or link of this node by name.
    pub fn field(&self, name: &str) -> Option<&NodeMember> {
        self.fields_index.lookup(
            &self.fields,
            |member| Some(member.name()),
            name,
        )
    }

    /// Names of this node's fields and links, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields_index.names(&self.fields, |member| Some(member.name()))
    }

    pub fn fields(&self) -> &[NodeMember] {
        self.fields.as_slice()
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
