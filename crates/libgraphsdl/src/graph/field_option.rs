use crate::DefaultValue;
use crate::types::TypeExpr;
use crate::Value;

/// An argument accepted by a [`Field`](crate::graph::Field) or
/// [`Link`](crate::graph::Link).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields)]
pub struct FieldOption {
    pub(crate) name: String,

    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub(crate) type_expr: Option<TypeExpr>,

    #[serde(default, skip_serializing_if = "DefaultValue::is_absent")]
    pub(crate) default: DefaultValue,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
}
impl FieldOption {
    /// An option with no default ([`DefaultValue::Absent`]).
    pub fn new(name: impl AsRef<str>, type_expr: Option<TypeExpr>) -> Self {
        Self {
            name: name.as_ref().to_string(),
            type_expr,
            default: DefaultValue::Absent,
            description: None,
        }
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = DefaultValue::Present(default.into());
        self
    }

    pub fn with_description(mut self, description: impl AsRef<str>) -> Self {
        self.description = Some(description.as_ref().to_string());
        self
    }

    pub fn default(&self) -> &DefaultValue {
        &self.default
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn type_expr(&self) -> Option<&TypeExpr> {
        self.type_expr.as_ref()
    }
}
