//! The graph model: an immutable-by-convention description of an API
//! surface.
//!
//! A [`Graph`] holds an ordered list of [`GraphItem`]s (anonymous [`Root`]
//! fragments and named [`Node`]s) plus a set of named structural [`Record`]
//! data types. Nodes and roots hold [`NodeMember`]s ([`Field`]s and
//! [`Link`]s), which in turn hold [`FieldOption`]s and [`Directive`]s.
//!
//! Entities are built once (via `new(...)` + `with_*(...)` or deserialized
//! with `serde`, which rejects unknown keys) and never mutated afterwards.
//! Transformations such as [`crate::strip`] build new entities instead.

mod directive;
mod field;
mod field_option;
#[allow(clippy::module_inception)]
mod graph;
mod graph_item;
mod link;
mod memo;
mod node;
mod node_member;
mod record;
mod root;

pub use directive::Directive;
pub use directive::DirectiveArg;
pub use field::Field;
pub use field_option::FieldOption;
pub use graph::Graph;
pub use graph::GraphMergeError;
pub use graph_item::GraphItem;
pub use link::Link;
pub(crate) use memo::Memo;
pub(crate) use memo::NameIndex;
pub use node::Node;
pub use node_member::NodeMember;
pub use record::Record;
pub use root::Root;

#[cfg(test)]
mod tests;
