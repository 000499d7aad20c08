use crate::errors::NoteStoreError;
use crate::{NoteDraft, NoteID, NoteStore};

pub(super) async fn unique_id(store: impl NoteStore) {
    let note1 = store.new_note(NoteDraft::new("", "Foo")).await.unwrap();
    let note2 = store.new_note(NoteDraft::new("", "Bar")).await.unwrap();
    assert_ne!(note1.id, note2.id);
}

pub(super) async fn new_note_retrieve(store: impl NoteStore) {
    let draft = NoteDraft::new("Title", "Foo");
    let note = store.new_note(draft.clone()).await.unwrap();
    assert_eq!(note.draft(), draft);
    let notes = store.list_notes().await.unwrap();
    assert_eq!(notes, vec![note]);
}

pub(super) async fn list_ordered_by_id(store: impl NoteStore) {
    assert!(store.list_notes().await.unwrap().is_empty());
    let note1 = store.new_note(NoteDraft::new("A", "a")).await.unwrap();
    let note2 = store.new_note(NoteDraft::new("B", "b")).await.unwrap();
    let note3 = store.new_note(NoteDraft::new("C", "c")).await.unwrap();
    assert!(note1.id < note2.id && note2.id < note3.id);
    let notes = store.list_notes().await.unwrap();
    assert_eq!(notes, vec![note1, note2, note3]);
}

pub(super) async fn update_note(store: impl NoteStore) {
    let note1 = store.new_note(NoteDraft::new("A", "a")).await.unwrap();
    let note2 = store.new_note(NoteDraft::new("B", "b")).await.unwrap();
    let updated = store
        .update_note(note1.id, NoteDraft::new("New Title", "New Content"))
        .await
        .unwrap();
    assert_eq!(updated.id, note1.id);
    assert_eq!(updated.title, "New Title");
    assert_eq!(updated.content, "New Content");
    let notes = store.list_notes().await.unwrap();
    assert_eq!(notes, vec![updated, note2]);
}

pub(super) async fn update_missing_note(store: impl NoteStore) {
    let note = store.new_note(NoteDraft::new("A", "a")).await.unwrap();
    let missing = NoteID::new(note.id.get() + 100);
    assert!(matches!(
        store
            .update_note(missing, NoteDraft::new("B", "b"))
            .await
            .err()
            .unwrap(),
        NoteStoreError::NoteNotExist(id) if id == missing
    ));
    assert_eq!(store.list_notes().await.unwrap(), vec![note]);
}

pub(super) async fn delete_note(store: impl NoteStore) {
    let note1 = store.new_note(NoteDraft::new("A", "a")).await.unwrap();
    let note2 = store.new_note(NoteDraft::new("B", "b")).await.unwrap();
    store.delete_note(note1.id).await.unwrap();
    assert_eq!(store.list_notes().await.unwrap(), vec![note2.clone()]);
    let note3 = store.new_note(NoteDraft::new("C", "c")).await.unwrap();
    assert_ne!(note3.id, note1.id);
    assert_eq!(store.list_notes().await.unwrap(), vec![note2, note3]);
}

pub(super) async fn delete_missing_note(store: impl NoteStore) {
    let note = store.new_note(NoteDraft::new("A", "a")).await.unwrap();
    store.delete_note(note.id).await.unwrap();
    assert!(matches!(
        store.delete_note(note.id).await.err().unwrap(),
        NoteStoreError::NoteNotExist(_)
    ));
}
