use leptos::prelude::*;

use super::force_graph::scale::display_label;
use crate::graph::{GraphData, GraphNode};
use crate::store::NoteStore;

const LIST_LABEL_CHARS: usize = 32;

/// Side panel: every note with its link count, then the notes linked to or
/// from the open one. Clicking an entry opens that note.
#[component]
pub fn NoteList(#[prop(into)] graph: Signal<GraphData>) -> impl IntoView {
	let store = expect_context::<NoteStore>();

	let linked = Memo::new(move |_| {
		let Some(current) = store.current.get() else {
			return Vec::new();
		};
		graph.with(|g| {
			g.linked_ids(&current)
				.into_iter()
				.filter_map(|id| g.node(id))
				.map(|n| (n.id.clone(), n.title.clone()))
				.collect::<Vec<_>>()
		})
	});

	view! {
		<nav class="note-list">
			<ul>
				<For
					each=move || graph.get().nodes
					key=|node| (node.id.clone(), node.title.clone(), node.link_count)
					children=move |node: GraphNode| {
						let (id, selected_id) = (node.id.clone(), node.id.clone());
						view! {
							<li class:current=move || {
								store.current.get().as_deref() == Some(selected_id.as_str())
							}>
								<button on:click=move |_| store.select(&id)>
									{display_label(&node.title, LIST_LABEL_CHARS)}
									<span class="link-count">{node.link_count}</span>
								</button>
							</li>
						}
					}
				/>
			</ul>
			<Show when=move || store.current.get().is_some()>
				<h2>"Linked notes"</h2>
				<ul class="linked-notes">
					<For
						each=move || linked.get()
						key=|(id, _)| id.clone()
						children=move |(id, title): (String, String)| {
							view! {
								<li>
									<button on:click=move |_| store.select(&id)>
										{display_label(&title, LIST_LABEL_CHARS)}
									</button>
								</li>
							}
						}
					/>
				</ul>
			</Show>
		</nav>
	}
}
