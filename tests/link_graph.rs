use scribe_graph::graph::{GraphData, Note, build_graph};

fn note(id: &str, title: &str, content: &str) -> Note {
	Note::new(id, title, content)
}

fn link_count(g: &GraphData, id: &str) -> usize {
	g.node(id).map(|n| n.link_count).expect("node exists")
}

/// Every node's link_count equals the number of incident links.
fn assert_degrees_consistent(g: &GraphData) {
	for node in &g.nodes {
		let incident = g
			.links
			.iter()
			.map(|l| (l.source == node.id) as usize + (l.target == node.id) as usize)
			.sum::<usize>();
		assert_eq!(node.link_count, incident, "degree mismatch for {}", node.id);
	}
}

#[test]
fn star_topology() {
	let mut notes = vec![note("hub", "Hub", "[[A]] [[B]] [[C]] [[D]] [[E]]")];
	for t in ["A", "B", "C", "D", "E"] {
		notes.push(note(&t.to_lowercase(), t, ""));
	}
	let g = build_graph(&notes);

	assert_eq!(g.nodes.len(), 6);
	assert_eq!(g.links.len(), 5);
	assert_eq!(link_count(&g, "hub"), 5);
	for id in ["a", "b", "c", "d", "e"] {
		assert_eq!(link_count(&g, id), 1);
	}
	assert_degrees_consistent(&g);
}

#[test]
fn circular_references() {
	let notes = vec![
		note("a", "A", "next: [[B]]"),
		note("b", "B", "next: [[C]]"),
		note("c", "C", "next: [[A]]"),
	];
	let g = build_graph(&notes);

	assert_eq!(g.nodes.len(), 3);
	assert_eq!(g.links.len(), 3);
	assert!(g.nodes.iter().all(|n| n.link_count == 2));
}

#[test]
fn disconnected_subgraphs() {
	let notes = vec![
		note("1", "One", "[[Two]]"),
		note("2", "Two", ""),
		note("3", "Three", "[[Four]]"),
		note("4", "Four", ""),
		note("5", "Alone", "no links here"),
	];
	let g = build_graph(&notes);

	assert_eq!(g.nodes.len(), 5);
	assert_eq!(g.links.len(), 2);
	assert_eq!(link_count(&g, "5"), 0);
	assert!(g.linked_ids("5").is_empty());
	assert_eq!(g.linked_ids("1"), vec!["2"]);
}

#[test]
fn empty_input() {
	assert_eq!(build_graph(&[]), GraphData::default());
}

#[test]
fn repeated_references_are_not_deduplicated() {
	let notes = vec![
		note("s", "Source", "[[X]] and also [[X]] again"),
		note("x", "X", ""),
	];
	let g = build_graph(&notes);

	assert_eq!(g.links.len(), 2);
	assert_eq!(link_count(&g, "x"), 2);
	assert_eq!(link_count(&g, "s"), 2);
	assert_eq!(g.linked_ids("s"), vec!["x"]);
}

#[test]
fn nodes_follow_input_order() {
	let notes = vec![
		note("z", "Zed", "[[alpha]]"),
		note("m", "Mid", "   \n\t "),
		note("a", "Alpha", "[[Nope]] [[zed]] [[Alpha]]"),
	];
	let g = build_graph(&notes);

	let ids: Vec<&str> = g.nodes.iter().map(|n| n.id.as_str()).collect();
	assert_eq!(ids, vec!["z", "m", "a"]);
	assert_eq!(g.links.len(), 2);
	assert_eq!(link_count(&g, "m"), 0);
	assert_degrees_consistent(&g);
}

#[test]
fn building_twice_is_deterministic() {
	let notes = vec![
		note("1", "Test Note", "🚀 [[Überblick]] [[missing]]"),
		note("2", "Überblick", "[[test note]] [[TEST NOTE]]"),
		note("3", "", "[[]] [[unterminated"),
	];
	let first = build_graph(&notes);
	let second = build_graph(&notes);

	assert_eq!(first, second);
	assert_eq!(first.links.len(), 3);
	assert_degrees_consistent(&first);
}
