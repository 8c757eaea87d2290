//! Widget trees: a slotmap arena of markup widgets and the project document
//! that owns one.

pub mod node;
pub mod project;
pub mod tree;

pub use node::{NodeId, WidgetNode};
pub use project::Project;
pub use tree::Dom;
