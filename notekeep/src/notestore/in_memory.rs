//! In-memory storage of notes
use crate::errors::NoteStoreError;
use crate::{Note, NoteDraft, NoteID, NoteStore};
use futures::future::BoxFuture;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Debug)]
struct InMemoryStoreInner {
    notes: BTreeMap<NoteID, Note>,
    next_id: i64,
}

impl Default for InMemoryStoreInner {
    fn default() -> Self {
        InMemoryStoreInner {
            notes: Default::default(),
            next_id: 1,
        }
    }
}

impl InMemoryStoreInner {
    /// Generate a new [`NoteID`].
    ///
    /// IDs count up from 1, like an auto-increment column.
    fn get_new_noteid(&mut self) -> NoteID {
        let id = NoteID::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn list_notes(&self) -> Vec<Note> {
        self.notes.values().cloned().collect()
    }

    fn new_note(&mut self, draft: NoteDraft) -> Note {
        let id = self.get_new_noteid();
        // sanity check
        assert!(!self.notes.contains_key(&id));
        let note = Note::new(id, draft);
        self.notes.insert(id, note.clone());
        note
    }

    fn update_note(&mut self, id: NoteID, draft: NoteDraft) -> Result<Note, NoteStoreError> {
        let note = self
            .notes
            .get_mut(&id)
            .ok_or(NoteStoreError::NoteNotExist(id))?;
        note.title = draft.title;
        note.content = draft.content;
        Ok(note.clone())
    }

    fn delete_note(&mut self, id: NoteID) -> Result<(), NoteStoreError> {
        self.notes
            .remove(&id)
            .map(|_| ())
            .ok_or(NoteStoreError::NoteNotExist(id))
    }
}

/// In-memory storage.
///
/// This is mostly designed for development use, because there is no persistence layer.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    ims: RwLock<InMemoryStoreInner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Default::default()
    }
}

impl NoteStore for InMemoryStore {
    fn list_notes(&self) -> BoxFuture<'_, Result<Vec<Note>, NoteStoreError>> {
        Box::pin(async move { Ok(self.ims.read().await.list_notes()) })
    }

    fn new_note(&self, draft: NoteDraft) -> BoxFuture<'_, Result<Note, NoteStoreError>> {
        Box::pin(async move { Ok(self.ims.write().await.new_note(draft)) })
    }

    fn update_note(
        &self,
        id: NoteID,
        draft: NoteDraft,
    ) -> BoxFuture<'_, Result<Note, NoteStoreError>> {
        Box::pin(async move { self.ims.write().await.update_note(id, draft) })
    }

    fn delete_note(&self, id: NoteID) -> BoxFuture<'_, Result<(), NoteStoreError>> {
        Box::pin(async move { self.ims.write().await.delete_note(id) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notestore::tests as common_tests;

    #[tokio::test]
    async fn unique_id() {
        common_tests::unique_id(InMemoryStore::new()).await;
    }

    #[tokio::test]
    async fn new_note_retrieve() {
        common_tests::new_note_retrieve(InMemoryStore::new()).await;
    }

    #[tokio::test]
    async fn list_ordered_by_id() {
        common_tests::list_ordered_by_id(InMemoryStore::new()).await;
    }

    #[tokio::test]
    async fn update_note() {
        common_tests::update_note(InMemoryStore::new()).await;
    }

    #[tokio::test]
    async fn update_missing_note() {
        common_tests::update_missing_note(InMemoryStore::new()).await;
    }

    #[tokio::test]
    async fn delete_note() {
        common_tests::delete_note(InMemoryStore::new()).await;
    }

    #[tokio::test]
    async fn delete_missing_note() {
        common_tests::delete_missing_note(InMemoryStore::new()).await;
    }

    #[tokio::test]
    async fn ids_start_at_one() {
        let store = InMemoryStore::new();
        let note = store.new_note(NoteDraft::new("A", "a")).await.unwrap();
        assert_eq!(note.id, NoteID::new(1));
    }

    #[tokio::test]
    async fn ids_not_reused_after_delete() {
        let store = InMemoryStore::new();
        let note1 = store.new_note(NoteDraft::new("A", "a")).await.unwrap();
        store.delete_note(note1.id).await.unwrap();
        let note2 = store.new_note(NoteDraft::new("B", "b")).await.unwrap();
        assert_eq!(note2.id, NoteID::new(2));
        assert_eq!(store.ims.read().await.next_id, 3);
    }
}
