/// Describes the declared type of a
/// [`DirectiveArg`](crate::graph::DirectiveArg) the way an introspection
/// `__Type` would: a named scalar, optionally wrapped in a non-null.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum DirectiveArgType {
    NonNull(Box<DirectiveArgType>),
    Scalar(String),
}
impl DirectiveArgType {
    pub fn scalar(name: impl AsRef<str>) -> Self {
        Self::Scalar(name.as_ref().to_string())
    }

    pub fn non_null(inner: DirectiveArgType) -> Self {
        Self::NonNull(Box::new(inner))
    }
}
