use serde::{Deserialize, Serialize};

/// A note as supplied by the note store. Read-only input to the builder.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
	/// Stable identifier, reused as the graph node id.
	pub id: String,
	/// Raw title. Wiki-links resolve against this, case-insensitively.
	#[serde(default)]
	pub title: String,
	/// Free-text body scanned for `[[Title]]` references.
	#[serde(default)]
	pub content: String,
}

impl Note {
	/// Convenience constructor, mostly for fixtures.
	pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			title: title.into(),
			content: content.into(),
		}
	}
}

/// One vertex per input note.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphNode {
	/// Id of the note this node stands for.
	pub id: String,
	/// Untruncated note title.
	pub title: String,
	/// Number of links incident to this node, as source or target.
	pub link_count: usize,
}

/// A resolved wiki-link from `source` to `target` (both note ids).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphLink {
	/// Id of the note containing the reference.
	pub source: String,
	/// Id of the referenced note.
	pub target: String,
}

/// Node and link set derived from a note collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphData {
	/// Nodes in input order.
	pub nodes: Vec<GraphNode>,
	/// Links in discovery order, duplicates kept.
	pub links: Vec<GraphLink>,
}

impl GraphData {
	/// Looks up a node by note id.
	pub fn node(&self, id: &str) -> Option<&GraphNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// Distinct ids of the notes linked to or from `id`, in the order they
	/// first appear in `links`.
	pub fn linked_ids(&self, id: &str) -> Vec<&str> {
		let mut out: Vec<&str> = Vec::new();
		for link in &self.links {
			let other = if link.source == id {
				link.target.as_str()
			} else if link.target == id {
				link.source.as_str()
			} else {
				continue;
			};
			if !out.contains(&other) {
				out.push(other);
			}
		}
		out
	}
}
