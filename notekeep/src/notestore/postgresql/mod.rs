use crate::errors::NoteStoreError;
use crate::{Note, NoteDraft, NoteID, NoteStore};
use futures::future::BoxFuture;
use sqlx::postgres::PgConnectOptions;
use sqlx::{query, query_as, PgPool};


#[derive(sqlx::FromRow)]
struct PostgreSQLNoteRow {
    id: i64,
    title: String,
    content: String,
}

impl From<PostgreSQLNoteRow> for Note {
    fn from(row: PostgreSQLNoteRow) -> Self {
        Note {
            id: NoteID::new(row.id),
            title: row.title,
            content: row.content,
        }
    }
}

pub struct PostgreSQLStoreBuilder {
    db_options: PgConnectOptions,
}

impl PostgreSQLStoreBuilder {
    pub fn new(db_options: PgConnectOptions) -> Self {
        Self { db_options }
    }

    /// Connect to the database and bring the schema up to date.
    pub async fn build(self) -> Result<PostgreSQLStore, NoteStoreError> {
        let connection_pool = PgPool::connect_with(self.db_options).await?;
        sqlx::migrate!("./migrations").run(&connection_pool).await?;
        Ok(PostgreSQLStore {
            db_pool: connection_pool,
        })
    }
}

pub struct PostgreSQLStore {
    db_pool: PgPool,
}

impl PostgreSQLStore {
    async fn list_notes_impl(&self) -> Result<Vec<Note>, NoteStoreError> {
        let rows =
            query_as::<_, PostgreSQLNoteRow>("SELECT id, title, content FROM notes ORDER BY id")
                .fetch_all(&self.db_pool)
                .await?;
        Ok(rows.into_iter().map(Note::from).collect())
    }

    async fn new_note_impl(&self, draft: NoteDraft) -> Result<Note, NoteStoreError> {
        let row = query_as::<_, PostgreSQLNoteRow>(
            "INSERT INTO notes (title, content) VALUES ($1, $2) RETURNING id, title, content",
        )
        .bind(draft.title)
        .bind(draft.content)
        .fetch_one(&self.db_pool)
        .await?;
        Ok(row.into())
    }

    async fn update_note_impl(&self, id: NoteID, draft: NoteDraft) -> Result<Note, NoteStoreError> {
        let row = query_as::<_, PostgreSQLNoteRow>(
            "UPDATE notes SET title = $2, content = $3 WHERE id = $1 RETURNING id, title, content",
        )
        .bind(id.get())
        .bind(draft.title)
        .bind(draft.content)
        .fetch_optional(&self.db_pool)
        .await?;
        row.map(Note::from)
            .ok_or(NoteStoreError::NoteNotExist(id))
    }

    async fn delete_note_impl(&self, id: NoteID) -> Result<(), NoteStoreError> {
        let result = query("DELETE FROM notes WHERE id = $1")
            .bind(id.get())
            .execute(&self.db_pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(NoteStoreError::NoteNotExist(id));
        }
        Ok(())
    }
}

impl NoteStore for PostgreSQLStore {
    fn list_notes(&self) -> BoxFuture<'_, Result<Vec<Note>, NoteStoreError>> {
        Box::pin(self.list_notes_impl())
    }

    fn new_note(&self, draft: NoteDraft) -> BoxFuture<'_, Result<Note, NoteStoreError>> {
        Box::pin(self.new_note_impl(draft))
    }

    fn update_note(
        &self,
        id: NoteID,
        draft: NoteDraft,
    ) -> BoxFuture<'_, Result<Note, NoteStoreError>> {
        Box::pin(self.update_note_impl(id, draft))
    }

    fn delete_note(&self, id: NoteID) -> BoxFuture<'_, Result<(), NoteStoreError>> {
        Box::pin(self.delete_note_impl(id))
    }
}
