//! Notekeep: short text notes kept in sync with a REST backend.
#[macro_use]
extern crate tracing;

pub mod backend;
pub mod errors;
pub mod manager;
pub mod note;
pub mod notestore;

pub use backend::{HttpBackend, NoteBackend, DEFAULT_BASE_URL};
pub use manager::{EditState, NoteManager, ViewState};
pub use note::{Note, NoteDraft, NoteID};
pub use notestore::{InMemoryStore, NoteStore, PostgreSQLStore, PostgreSQLStoreBuilder};
