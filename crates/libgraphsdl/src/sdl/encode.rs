//! Pure functions mapping the graph model's type algebra and default values
//! onto `graphql_parser` type and value nodes.

use crate::ast;
use crate::DefaultValue;
use crate::sdl::SdlExportError;
use crate::types::DirectiveArgType;
use crate::types::TypeExpr;
use crate::Value;

type Result<T> = std::result::Result<T, SdlExportError>;

/// Name of the catch-all scalar used for [`TypeExpr::Any`].
pub const ANY_SCALAR_NAME: &str = "Any";

/// Encode a (possibly missing) [`TypeExpr`] as a GraphQL type.
///
/// Everything not wrapped in [`TypeExpr::Optional`] is non-null, so `Integer`
/// is `Int!`, `Optional(Integer)` is `Int`, `Sequence(Optional(Integer))` is
/// `[Int]!` and `Optional(Sequence(Integer))` is `[Int!]`. Nested
/// `Optional`s collapse into one.
///
/// A missing type encodes to a non-null type with an empty name: an explicit
/// placeholder for members that haven't been typed yet.
pub fn encode_type(
    type_expr: Option<&TypeExpr>,
) -> Result<ast::schema::Type> {
    match type_expr {
        Some(type_expr) => encode_type_impl(type_expr, /* optional = */ false),
        None => {
            log::debug!("Encoding an untyped member as a placeholder type.");
            Ok(ast::schema::Type::NonNullType(Box::new(
                ast::schema::Type::NamedType(String::new()),
            )))
        },
    }
}

fn encode_type_impl(
    type_expr: &TypeExpr,
    optional: bool,
) -> Result<ast::schema::Type> {
    let encoded = match type_expr {
        TypeExpr::Optional(inner) =>
            return encode_type_impl(inner, /* optional = */ true),

        TypeExpr::TypeRef(name) => named_type(name),
        TypeExpr::Integer => named_type("Int"),
        TypeExpr::String => named_type("String"),
        TypeExpr::Boolean => named_type("Boolean"),
        TypeExpr::Any => named_type(ANY_SCALAR_NAME),
        TypeExpr::Float => named_type("Float"),

        // List item nullability is decided by the item type alone.
        TypeExpr::Sequence(item) => ast::schema::Type::ListType(Box::new(
            encode_type_impl(item, /* optional = */ false)?,
        )),

        TypeExpr::Mapping { .. } | TypeExpr::Record(_) =>
            return Err(SdlExportError::UnsupportedType {
                type_expr: type_expr.to_owned(),
            }),
    };

    Ok(if optional {
        encoded
    } else {
        ast::schema::Type::NonNullType(Box::new(encoded))
    })
}

fn named_type(name: &str) -> ast::schema::Type {
    ast::schema::Type::NamedType(name.to_string())
}

/// The narrower encoding historically used for option types: scalars are
/// always nullable and only `Integer`, `String`, `Optional` and `Sequence`
/// are accepted.
pub fn encode_option_type(
    type_expr: &TypeExpr,
) -> Result<ast::schema::Type> {
    match type_expr {
        TypeExpr::Integer => Ok(named_type("Int")),
        TypeExpr::String => Ok(named_type("String")),
        TypeExpr::Optional(inner) => encode_option_type(inner),
        TypeExpr::Sequence(item) => Ok(ast::schema::Type::ListType(
            Box::new(encode_type(Some(item.as_ref()))?),
        )),
        TypeExpr::Any
        | TypeExpr::Boolean
        | TypeExpr::Float
        | TypeExpr::TypeRef(_)
        | TypeExpr::Mapping { .. }
        | TypeExpr::Record(_) => Err(SdlExportError::UnsupportedOptionType {
            type_expr: type_expr.to_owned(),
        }),
    }
}

/// Encode the default of an option. `Ok(None)` means the argument has no
/// default clause at all.
pub fn encode_default_value(
    default: &DefaultValue,
) -> Result<Option<ast::query::Value>> {
    match default {
        DefaultValue::Absent => Ok(None),
        DefaultValue::Present(value) => encode_value(value).map(Some),
    }
}

/// Encode a value as a GraphQL literal.
///
/// Integers must fit GraphQL's 32-bit `Int`, floats must be finite and maps
/// have no literal form. [`DefaultValue::Absent`] list elements are dropped.
pub fn encode_value(value: &Value) -> Result<ast::query::Value> {
    let unencodable = || SdlExportError::UnencodableValue {
        value: value.to_owned(),
    };

    Ok(match value {
        Value::Null => ast::query::Value::Null,
        Value::Boolean(b) => ast::query::Value::Boolean(*b),
        Value::Int(i) => {
            let int32 = i32::try_from(*i).map_err(|_| unencodable())?;
            ast::query::Value::Int(int32.into())
        },
        Value::Float(f) if f.is_finite() => ast::query::Value::Float(*f),
        Value::Float(_) => return Err(unencodable()),
        Value::String(s) => ast::query::Value::String(s.to_owned()),
        Value::List(items) => ast::query::Value::List(
            items.iter()
                .filter_map(DefaultValue::as_value)
                .map(encode_value)
                .collect::<Result<Vec<_>>>()?,
        ),
        Value::Object(_) => return Err(unencodable()),
    })
}

/// The kind of literal a directive argument's value is encoded as.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArgLiteralKind {
    String,
}
impl ArgLiteralKind {
    pub fn literal(&self, value: &Value) -> Result<ast::query::Value> {
        match (self, value) {
            (Self::String, Value::String(s)) => {
                Ok(ast::query::Value::String(s.to_owned()))
            },
            (Self::String, _) => Err(SdlExportError::UnencodableValue {
                value: value.to_owned(),
            }),
        }
    }
}

/// Pick the literal kind for a directive argument from its declared type,
/// after unwrapping a single level of non-null.
///
/// Only `String` is currently mapped.
pub fn encode_directive_arg_type(
    arg_type: &DirectiveArgType,
) -> Result<ArgLiteralKind> {
    let scalar_name = match arg_type {
        DirectiveArgType::Scalar(name) => name,
        DirectiveArgType::NonNull(inner) => match inner.as_ref() {
            DirectiveArgType::Scalar(name) => name,
            DirectiveArgType::NonNull(_) =>
                return Err(SdlExportError::UnsupportedDirectiveArgType {
                    arg_type: arg_type.to_owned(),
                }),
        },
    };

    match scalar_name.as_str() {
        "String" => Ok(ArgLiteralKind::String),
        _ => Err(SdlExportError::UnsupportedDirectiveArgType {
            arg_type: arg_type.to_owned(),
        }),
    }
}
