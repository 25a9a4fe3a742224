//! Double dispatch over the graph model.
//!
//! Every entity implements [`Visitable::accept`], which calls back the
//! visitor's `visit_<kind>` method. [`GraphVisitor`]'s default methods simply
//! recurse into children (via the `walk_*` functions), so a concrete visitor
//! only overrides the kinds it cares about. [`GraphTransformer`] is the
//! rebuilding counterpart: its default methods (the `rebuild_*` functions)
//! produce a new, equivalent entity from transformed children.

mod graph_transformer;
mod graph_visitor;

pub use graph_transformer::GraphTransformer;
pub use graph_transformer::rebuild_field;
pub use graph_transformer::rebuild_graph;
pub use graph_transformer::rebuild_link;
pub use graph_transformer::rebuild_node;
pub use graph_transformer::rebuild_root;
pub use graph_visitor::GraphVisitor;
pub use graph_visitor::Visitable;
pub use graph_visitor::walk_field;
pub use graph_visitor::walk_graph;
pub use graph_visitor::walk_link;
pub use graph_visitor::walk_node;
pub use graph_visitor::walk_root;
