use leptos::prelude::*;

use crate::components::force_graph::ForceGraphCanvas;
use crate::components::note_list::NoteList;
use crate::graph::build_graph;
use crate::store::NoteStore;

const SAMPLE_NOTES: &str = include_str!("../../assets/sample_notes.json");

/// Graph of the notes in the shared store, with the note list beside it.
#[component]
fn NoteGraph() -> impl IntoView {
	let store = expect_context::<NoteStore>();
	// Rebuilt from scratch on every change to the note collection
	let graph = Memo::new(move |_| store.notes.with(|notes| build_graph(notes)));

	view! {
		<div class="fullscreen-graph">
			<ForceGraphCanvas
				data=graph
				current=store.current
				on_select=move |id: String| store.select(&id)
				fullscreen=true
			/>
			<div class="graph-overlay">
				<h1>"Scribe Graph"</h1>
				<p class="subtitle">"Click a note to open it. Drag to pin. Scroll to zoom."</p>
				<NoteList graph=graph />
			</div>
		</div>
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			{NoteStore::from_json(SAMPLE_NOTES)
				.map(|store| {
					provide_context(store);
					view! { <NoteGraph /> }
				})}
		</ErrorBoundary>
	}
}
