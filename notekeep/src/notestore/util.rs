use crate::errors::NoteStoreError;
use crate::notestore::NoteStore;
use crate::NoteDraft;

/// Fill a store with a few sample notes.
pub async fn populate_test_data(store: &impl NoteStore) -> Result<(), NoteStoreError> {
    store
        .new_note(NoteDraft::new(
            "Welcome",
            "Notes are listed in the order they were created.",
        ))
        .await?;
    store
        .new_note(NoteDraft::new(
            "Editing",
            "Only one note can be edited at a time.",
        ))
        .await?;
    store
        .new_note(NoteDraft::new("Shopping", "milk, eggs, bread"))
        .await?;
    Ok(())
}
