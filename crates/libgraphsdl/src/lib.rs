//! A typed description of an API surface (nodes, fields, links, options,
//! directives and structural record types) and a deterministic exporter
//! from that description into a GraphQL schema document.
//!
//! The usual entry point is [`sdl::print_sdl`], which strips
//! introspection/federation-only members from a [`graph::Graph`], exports
//! the result to a `graphql_parser` schema AST and renders it as SDL text.

pub mod ast;
pub mod graph;
pub mod sdl;
pub mod strip;
pub mod types;
mod value;
pub mod visitor;

pub use value::DefaultValue;
pub use value::Value;
