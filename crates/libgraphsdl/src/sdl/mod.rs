//! Export of a [`Graph`] to a GraphQL schema (SDL) document.
//!
//! Rendering the document to text is left to `graphql_parser`'s printer
//! (the `Display` impl of [`ast::schema::Document`]).

pub mod encode;
mod sdl_export_error;
mod sdl_exporter;

pub use sdl_export_error::SdlExportError;
pub use sdl_exporter::QUERY_TYPE_NAME;
pub use sdl_exporter::SdlExporter;

use crate::ast;
use crate::graph::Graph;
use crate::strip::strip_introspection;

/// Export `graph` as-is (without stripping) into a flat, ordered list of
/// schema definitions.
pub fn export_definitions(
    graph: &Graph,
) -> Result<Vec<ast::schema::Definition>, SdlExportError> {
    SdlExporter::export(graph)
}

/// Strip introspection/federation members from `graph` and export the result
/// as a schema document.
pub fn get_ast(graph: &Graph) -> Result<ast::schema::Document, SdlExportError> {
    let stripped = strip_introspection(graph);
    Ok(ast::schema::Document {
        definitions: export_definitions(&stripped)?,
    })
}

/// [`get_ast`], rendered as SDL text.
pub fn print_sdl(graph: &Graph) -> Result<String, SdlExportError> {
    Ok(get_ast(graph)?.to_string())
}

#[cfg(test)]
mod tests;
