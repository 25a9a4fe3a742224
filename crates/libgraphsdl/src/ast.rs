//! Owned (`'static`, `String`-named) aliases of the `graphql_parser` AST nodes
//! produced by the SDL exporter.

pub mod query {
    pub type Directive = graphql_parser::query::Directive<'static, String>;
    pub type Value = graphql_parser::query::Value<'static, String>;
}

pub mod schema {
    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type Document = graphql_parser::schema::Document<'static, String>;
    pub type Field = graphql_parser::schema::Field<'static, String>;
    pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
    pub type ObjectType = graphql_parser::schema::ObjectType<'static, String>;
    pub type ObjectTypeExtension = graphql_parser::schema::ObjectTypeExtension<'static, String>;
    pub type ScalarType = graphql_parser::schema::ScalarType<'static, String>;
    pub type Type = graphql_parser::schema::Type<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
    pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;
}

/// Exported nodes don't originate from any source text, so every node carries
/// this zeroed position.
pub(crate) fn synthetic_pos() -> graphql_parser::Pos {
    graphql_parser::Pos {
        line: 0,
        column: 0,
    }
}
