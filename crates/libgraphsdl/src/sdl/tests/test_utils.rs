use crate::types::TypeExpr;
use proptest::prelude::*;

/// Collapse all whitespace runs into single spaces so that printed SDL can be
/// compared independently of the printer's indentation and blank lines.
pub(super) fn normalize_sdl(sdl: &str) -> String {
    sdl.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(super) fn encodable_type_expr() -> impl Strategy<Value = TypeExpr> {
    let leaf = prop_oneof![
        Just(TypeExpr::Any),
        Just(TypeExpr::Boolean),
        Just(TypeExpr::Float),
        Just(TypeExpr::Integer),
        Just(TypeExpr::String),
        "[A-Z][a-zA-Z]{0,8}".prop_map(TypeExpr::TypeRef),
    ];
    leaf.prop_recursive(4, 16, 1, |inner| prop_oneof![
        inner.clone().prop_map(TypeExpr::optional),
        inner.prop_map(TypeExpr::sequence),
    ])
}
