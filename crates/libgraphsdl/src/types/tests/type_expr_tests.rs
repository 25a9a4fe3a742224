use crate::types::TypeExpr;

#[test]
fn innermost_type_ref_unwraps_optional_and_sequence_layers() {
    let type_expr = TypeExpr::optional(TypeExpr::sequence(
        TypeExpr::type_ref("User"),
    ));
    assert_eq!(type_expr.innermost_type_ref(), Some("User"));
}

#[test]
fn innermost_type_ref_of_scalar_is_none() {
    let type_expr = TypeExpr::sequence(TypeExpr::Integer);
    assert_eq!(type_expr.innermost_type_ref(), None);
}

#[test]
fn type_expr_json_spelling() -> serde_json::Result<()> {
    let type_expr: TypeExpr = serde_json::from_str(
        r#"{"Sequence": {"Optional": "Integer"}}"#,
    )?;
    assert_eq!(
        type_expr,
        TypeExpr::sequence(TypeExpr::optional(TypeExpr::Integer)),
    );
    assert!(!type_expr.is_optional());
    Ok(())
}
