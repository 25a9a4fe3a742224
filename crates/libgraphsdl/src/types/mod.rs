mod directive_arg_type;
mod type_expr;

pub use directive_arg_type::DirectiveArgType;
pub use type_expr::TypeExpr;

#[cfg(test)]
mod tests;
