use crate::types::DirectiveArgType;
use crate::Value;

/// A directive annotation attached to a [`Field`](crate::graph::Field),
/// [`Link`](crate::graph::Link) or [`Node`](crate::graph::Node).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields)]
pub struct Directive {
    pub(crate) name: String,

    #[serde(default)]
    pub(crate) args: Vec<DirectiveArg>,
}
impl Directive {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self {
            name: name.as_ref().to_string(),
            args: vec![],
        }
    }

    pub fn with_arg(mut self, arg: DirectiveArg) -> Self {
        self.args.push(arg);
        self
    }

    pub fn args(&self) -> &[DirectiveArg] {
        self.args.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields)]
pub struct DirectiveArg {
    pub(crate) name: String,

    #[serde(rename = "type")]
    pub(crate) arg_type: DirectiveArgType,

    pub(crate) value: Value,
}
impl DirectiveArg {
    pub fn new(
        name: impl AsRef<str>,
        arg_type: DirectiveArgType,
        value: impl Into<Value>,
    ) -> Self {
        Self {
            name: name.as_ref().to_string(),
            arg_type,
            value: value.into(),
        }
    }

    pub fn arg_type(&self) -> &DirectiveArgType {
        &self.arg_type
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn value(&self) -> &Value {
        &self.value
    }
}
