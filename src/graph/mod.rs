//! Wiki-link graph construction over a note collection.
//!
//! [`build_graph`] is pure: it reads a note snapshot and returns a fresh
//! [`GraphData`]. Callers rebuild on every change rather than patching.

mod builder;
mod types;
mod wiki_link;

pub use builder::build_graph;
pub use types::{GraphData, GraphLink, GraphNode, Note};
pub use wiki_link::wiki_links;
