use std::collections::HashMap;

use log::debug;

use super::types::{GraphData, GraphLink, GraphNode, Note};
use super::wiki_link::wiki_links;

/// Case-insensitive title -> note position. The first note with a given title
/// wins; later duplicates are unreachable by wiki-link.
struct TitleIndex(HashMap<String, usize>);

impl TitleIndex {
	fn new(notes: &[Note]) -> Self {
		let mut map = HashMap::with_capacity(notes.len());
		for (i, note) in notes.iter().enumerate() {
			map.entry(note.title.to_lowercase()).or_insert(i);
		}
		Self(map)
	}

	fn resolve(&self, title: &str) -> Option<usize> {
		self.0.get(&title.to_lowercase()).copied()
	}
}

/// Derives the wiki-link graph for `notes`.
///
/// One node per note in input order. A link is added for every `[[Title]]`
/// in a note's content that names another note; self-references and
/// unresolved titles are skipped. Repeated references are kept as separate
/// links, and each bumps `link_count` on both ends.
pub fn build_graph(notes: &[Note]) -> GraphData {
	let mut nodes: Vec<GraphNode> = notes
		.iter()
		.map(|note| GraphNode {
			id: note.id.clone(),
			title: note.title.clone(),
			link_count: 0,
		})
		.collect();
	let mut links = Vec::new();
	let index = TitleIndex::new(notes);
	let mut dangling = 0usize;

	for (src, note) in notes.iter().enumerate() {
		for title in wiki_links(&note.content) {
			let Some(tgt) = index.resolve(title) else {
				dangling += 1;
				continue;
			};
			if tgt == src {
				continue;
			}
			links.push(GraphLink {
				source: note.id.clone(),
				target: notes[tgt].id.clone(),
			});
			nodes[src].link_count += 1;
			nodes[tgt].link_count += 1;
		}
	}

	debug!(
		"link graph: {} notes, {} links, {} dangling references",
		nodes.len(),
		links.len(),
		dangling
	);
	GraphData { nodes, links }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn count(g: &GraphData, id: &str) -> usize {
		g.node(id).map(|n| n.link_count).unwrap_or_default()
	}

	#[test]
	fn matches_titles_case_insensitively() {
		let notes = vec![
			Note::new("1", "Test Note", ""),
			Note::new("2", "Other", "see [[test note]]"),
		];
		let g = build_graph(&notes);
		assert_eq!(
			g.links,
			vec![GraphLink {
				source: "2".into(),
				target: "1".into()
			}]
		);
	}

	#[test]
	fn does_not_trim_captured_title() {
		let notes = vec![
			Note::new("1", "Alpha", ""),
			Note::new("2", "Beta", "[[ Alpha ]]"),
		];
		assert!(build_graph(&notes).links.is_empty());
	}

	#[test]
	fn skips_self_reference() {
		let notes = vec![Note::new("1", "Loop", "I am [[Loop]] and [[loop]]")];
		let g = build_graph(&notes);
		assert!(g.links.is_empty());
		assert_eq!(count(&g, "1"), 0);
	}

	#[test]
	fn dangling_reference_does_not_stop_scan() {
		let notes = vec![
			Note::new("1", "A", "[[Missing]] then [[B]]"),
			Note::new("2", "B", "[[Nowhere]]"),
		];
		let g = build_graph(&notes);
		assert_eq!(g.links.len(), 1);
		assert_eq!(count(&g, "1"), 1);
		assert_eq!(count(&g, "2"), 1);
	}

	#[test]
	fn special_characters_match_literally() {
		let notes = vec![
			Note::new("1", r#"Say "hi" <b>"#, ""),
			Note::new("2", "src", r#"[[say "HI" <B>]]"#),
		];
		assert_eq!(build_graph(&notes).links.len(), 1);
	}

	#[test]
	fn duplicate_titles_resolve_to_first() {
		let notes = vec![
			Note::new("1", "Same", ""),
			Note::new("2", "same", ""),
			Note::new("3", "Ref", "[[SAME]]"),
		];
		let g = build_graph(&notes);
		assert_eq!(g.links[0].target, "1");
		assert_eq!(count(&g, "2"), 0);
	}

	#[test]
	fn duplicate_title_self_hit_is_skipped() {
		// "2" shares the title of "1", so its reference resolves to "1".
		let notes = vec![
			Note::new("1", "Twin", ""),
			Note::new("2", "Twin", "[[Twin]]"),
		];
		let g = build_graph(&notes);
		assert_eq!(g.links.len(), 1);
		assert_eq!(g.links[0].target, "1");
	}

	#[test]
	fn empty_titles_are_never_matched() {
		let notes = vec![
			Note::new("1", "", "[[]]"),
			Note::new("2", "B", "[[]] [[ ]]"),
		];
		assert!(build_graph(&notes).links.is_empty());
	}

	#[test]
	fn long_titles_match_in_full() {
		let title = "A very long note title that goes well past twenty characters";
		let notes = vec![
			Note::new("1", title, ""),
			Note::new("2", "B", format!("[[{title}]] [[A very long note tit]]")),
		];
		assert_eq!(build_graph(&notes).links.len(), 1);
	}
}
