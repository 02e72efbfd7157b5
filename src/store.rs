//! Reactive note collection shared through the Leptos context.

use leptos::prelude::*;
use log::info;

use crate::graph::Note;

/// Notes plus the currently open note. `Copy`, so it can be handed to any
/// component via `provide_context` / `expect_context`.
#[derive(Clone, Copy, Debug)]
pub struct NoteStore {
	/// All notes, in display order.
	pub notes: RwSignal<Vec<Note>>,
	/// Id of the open note, if any.
	pub current: RwSignal<Option<String>>,
}

impl Default for NoteStore {
	fn default() -> Self {
		Self::new(Vec::new())
	}
}

impl NoteStore {
	/// Wraps an existing note list with nothing selected.
	pub fn new(notes: Vec<Note>) -> Self {
		Self {
			notes: RwSignal::new(notes),
			current: RwSignal::new(None),
		}
	}

	/// Parses a JSON array of notes.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		let notes: Vec<Note> = serde_json::from_str(json)?;
		info!("Loaded {} notes", notes.len());
		Ok(Self::new(notes))
	}

	/// Opens the note with `id`. Unknown ids are ignored.
	pub fn select(&self, id: &str) {
		let known = self.notes.with_untracked(|notes| notes.iter().any(|n| n.id == id));
		if known {
			self.current.set(Some(id.to_string()));
		}
	}

	/// The open note, tracked.
	pub fn current_note(&self) -> Option<Note> {
		let id = self.current.get()?;
		self.notes
			.with(|notes| notes.iter().find(|n| n.id == id).cloned())
	}
}
