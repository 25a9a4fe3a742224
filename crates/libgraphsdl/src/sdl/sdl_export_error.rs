use crate::types::DirectiveArgType;
use crate::types::TypeExpr;
use crate::Value;
use thiserror::Error;

/// A graph that can't be fully encoded is not exported at all: any of these
/// aborts the export of the whole document.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SdlExportError {
    #[error("Unsupported type: {type_expr:?}")]
    UnsupportedType {
        type_expr: TypeExpr,
    },

    #[error("Unsupported option type: {type_expr:?}")]
    UnsupportedOptionType {
        type_expr: TypeExpr,
    },

    #[error("Unsupported directive argument type: {arg_type:?}")]
    UnsupportedDirectiveArgType {
        arg_type: DirectiveArgType,
    },

    #[error("Cannot convert value to AST: {value:?}")]
    UnencodableValue {
        value: Value,
    },
}
