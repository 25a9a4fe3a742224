//! Removal of introspection- and federation-only members from a graph before
//! it is exported.

mod strip_introspection;

pub use strip_introspection::StripIntrospection;
pub use strip_introspection::strip_introspection;

#[cfg(test)]
mod tests;
