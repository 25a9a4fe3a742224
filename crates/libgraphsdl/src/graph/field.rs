use crate::graph::Directive;
use crate::graph::FieldOption;
use crate::graph::NameIndex;
use crate::types::TypeExpr;

/// A field whose value is resolved to data (as opposed to a
/// [`Link`](crate::graph::Link), which resolves to another node).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields)]
pub struct Field {
    pub(crate) name: String,

    /// `None` when the field hasn't been given a type.
    #[serde(default, rename = "type")]
    pub(crate) type_expr: Option<TypeExpr>,

    #[serde(default)]
    pub(crate) options: Vec<FieldOption>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,

    /// Name of the resolver bound to this field. Opaque to this crate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) resolver: Option<String>,

    #[serde(default)]
    pub(crate) directives: Vec<Directive>,

    #[serde(skip)]
    pub(crate) options_index: NameIndex,
}
impl Field {
    pub fn new(name: impl AsRef<str>, type_expr: Option<TypeExpr>) -> Self {
        Self {
            name: name.as_ref().to_string(),
            type_expr,
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

    /// Look up one of this field's options by name.
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

    pub fn resolver(&self) -> Option<&str> {
        self.resolver.as_deref()
    }

    pub fn type_expr(&self) -> Option<&TypeExpr> {
        self.type_expr.as_ref()
    }
}
