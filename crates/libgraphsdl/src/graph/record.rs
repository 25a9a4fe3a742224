use crate::types::TypeExpr;
use indexmap::IndexMap;

/// A structural (not independently queryable) composite type, referenced from
/// fields by [`TypeExpr::TypeRef`].
///
/// A member typed `None` hasn't been given a type yet.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    pub(crate) field_types: IndexMap<String, Option<TypeExpr>>,
}
impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(
        mut self,
        name: impl AsRef<str>,
        type_expr: Option<TypeExpr>,
    ) -> Self {
        self.field_types.insert(name.as_ref().to_string(), type_expr);
        self
    }

    /// Member names and types, in declaration order.
    pub fn field_types(&self) -> &IndexMap<String, Option<TypeExpr>> {
        &self.field_types
    }
}
