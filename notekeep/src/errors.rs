use thiserror::Error;

use crate::NoteID;

#[derive(Error, Debug)]
pub enum NoteStoreError {
    #[error("note `{0}` doesn't exist")]
    NoteNotExist(NoteID),
    #[error("PostgreSQL error")]
    PostgreSQLError(#[from] sqlx::Error),
    #[error("failed to migrate the database")]
    MigrateError(#[from] sqlx::migrate::MigrateError),
}

/// Error type for requests issued on behalf of a [`crate::NoteManager`].
///
/// The manager treats every variant the same way: the request failed.
/// The variants only exist so that the logged diagnostic says why.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("transport error")]
    Transport(#[from] reqwest::Error),
    #[error("backend responded with status `{0}`")]
    Status(u16),
    #[error("note store error")]
    Store(#[from] NoteStoreError),
}
