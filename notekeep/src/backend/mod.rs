//! The remote collaborator a [`crate::NoteManager`] keeps its state in sync with.
use crate::errors::RequestError;
use crate::notestore::NoteStore;
use crate::{Note, NoteDraft, NoteID};
use futures::future::BoxFuture;

mod http;

pub use http::HttpBackend;

/// Base address of a backend running on the local machine.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// The four calls the client makes.
///
/// Mutations only report success or failure; whatever the backend returns
/// besides that is ignored, because the client always refetches the list.
pub trait NoteBackend: Send + Sync {
    fn list(&self) -> BoxFuture<'_, Result<Vec<Note>, RequestError>>;
    fn create(&self, draft: NoteDraft) -> BoxFuture<'_, Result<(), RequestError>>;
    fn update(&self, id: NoteID, draft: NoteDraft) -> BoxFuture<'_, Result<(), RequestError>>;
    fn delete(&self, id: NoteID) -> BoxFuture<'_, Result<(), RequestError>>;
}

/// Any store can act as a backend directly, skipping the HTTP hop.
impl<S: NoteStore> NoteBackend for S {
    fn list(&self) -> BoxFuture<'_, Result<Vec<Note>, RequestError>> {
        Box::pin(async move { Ok(self.list_notes().await?) })
    }

    fn create(&self, draft: NoteDraft) -> BoxFuture<'_, Result<(), RequestError>> {
        Box::pin(async move {
            self.new_note(draft).await?;
            Ok(())
        })
    }

    fn update(&self, id: NoteID, draft: NoteDraft) -> BoxFuture<'_, Result<(), RequestError>> {
        Box::pin(async move {
            self.update_note(id, draft).await?;
            Ok(())
        })
    }

    fn delete(&self, id: NoteID) -> BoxFuture<'_, Result<(), RequestError>> {
        Box::pin(async move { Ok(self.delete_note(id).await?) })
    }
}
