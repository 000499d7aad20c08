//! Storage backends of notes.
use crate::errors::NoteStoreError;
use crate::note::*;
use futures::future::BoxFuture;

mod in_memory;
mod postgresql;
#[cfg(test)]
mod tests;
pub mod util;

pub use in_memory::InMemoryStore;
pub use postgresql::{PostgreSQLStore, PostgreSQLStoreBuilder};

pub type BoxedNoteStore = Box<dyn NoteStore>;

/// An abstraction for storage backends.
pub trait NoteStore: Send + Sync {
    /// List all notes, ordered by [`NoteID`].
    fn list_notes(&self) -> BoxFuture<'_, Result<Vec<Note>, NoteStoreError>>;
    /// Create a new note.
    ///
    /// The storage backend assigns the [`NoteID`].
    /// IDs are never reused, even after the note holding one is deleted.
    fn new_note(&self, draft: NoteDraft) -> BoxFuture<'_, Result<Note, NoteStoreError>>;
    /// Replace the title and content of a note.
    fn update_note(
        &self,
        id: NoteID,
        draft: NoteDraft,
    ) -> BoxFuture<'_, Result<Note, NoteStoreError>>;
    /// Delete a note.
    fn delete_note(&self, id: NoteID) -> BoxFuture<'_, Result<(), NoteStoreError>>;
}

impl NoteStore for BoxedNoteStore {
    fn list_notes(&self) -> BoxFuture<'_, Result<Vec<Note>, NoteStoreError>> {
        self.as_ref().list_notes()
    }

    fn new_note(&self, draft: NoteDraft) -> BoxFuture<'_, Result<Note, NoteStoreError>> {
        self.as_ref().new_note(draft)
    }

    fn update_note(
        &self,
        id: NoteID,
        draft: NoteDraft,
    ) -> BoxFuture<'_, Result<Note, NoteStoreError>> {
        self.as_ref().update_note(id, draft)
    }

    fn delete_note(&self, id: NoteID) -> BoxFuture<'_, Result<(), NoteStoreError>> {
        self.as_ref().delete_note(id)
    }
}
