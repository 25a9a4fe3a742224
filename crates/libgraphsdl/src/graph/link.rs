use crate::graph::Directive;
use crate::graph::FieldOption;
use crate::graph::NameIndex;
use crate::types::TypeExpr;

/// A field that resolves to another [`Node`](crate::graph::Node).
///
/// The target node is referenced by name through the link's type (e.g.
/// `TypeRef("User")`, `Optional(TypeRef("User"))` or
/// `Sequence(TypeRef("User"))`), never by pointer, so a graph has no
/// back-references.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields)]
pub struct Link {
    pub(crate) name: String,

    #[serde(rename = "type")]
    pub(crate) type_expr: TypeExpr,

    /// Names of the parent's fields this link needs in order to resolve.
    /// Internal to the resolver; never exported.
    #[serde(default)]
    pub(crate) requires: Vec<String>,

    #[serde(default)]
    pub(crate) options: Vec<FieldOption>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) resolver: Option<String>,

    #[serde(default)]
    pub(crate) directives: Vec<Directive>,

    #[serde(skip)]
    pub(crate) options_index: NameIndex,
}
impl Link {
    pub fn new(name: impl AsRef<str>, type_expr: TypeExpr) -> Self {
        Self {
            name: name.as_ref().to_string(),
            type_expr,
            requires: vec![],
            options: vec![],
            description: None,
            resolver: None,
            directives: vec![],
            options_index: NameIndex::default(),
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

    pub fn with_options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = options;
        self.options_index = NameIndex::default();
        self
    }

    pub fn with_requires(mut self, requires: Vec<String>) -> Self {
        self.requires = requires;
        self
    }

    pub fn with_resolver(mut self, resolver: impl AsRef<str>) -> Self {
        self.resolver = Some(resolver.as_ref().to_string());
        self
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn directives(&self) -> &[Directive] {
        self.directives.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn option(&self, name: &str) -> Option<&FieldOption> {
        self.options_index.lookup(
            &self.options,
            |opt| Some(opt.name()),
            name,
        )
    }

    pub fn options(&self) -> &[FieldOption] {
        self.options.as_slice()
    }

    pub fn requires(&self) -> &[String] {
        self.requires.as_slice()
    }

    pub fn resolver(&self) -> Option<&str> {
        self.resolver.as_deref()
    }

    /// Name of the node this link resolves to.
    pub fn target(&self) -> Option<&str> {
        self.type_expr.innermost_type_ref()
    }

    pub fn type_expr(&self) -> &TypeExpr {
        &self.type_expr
    }
}
