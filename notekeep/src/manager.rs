//! Client-side state of the note list and its edit forms.
//!
//! The manager never patches its copy of the collection. Every successful
//! mutation is followed by a full refetch that replaces the collection
//! wholesale. Failures are logged and otherwise swallowed: the only visible
//! effect is that the state does not advance.
use crate::backend::NoteBackend;
use crate::{Note, NoteDraft, NoteID};
use tokio::sync::watch;

/// Which note, if any, is being edited, together with the unsaved input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Idle,
    Editing { id: NoteID, draft: NoteDraft },
}

impl EditState {
    pub fn editing_id(&self) -> Option<NoteID> {
        match self {
            EditState::Idle => None,
            EditState::Editing { id, .. } => Some(*id),
        }
    }

    pub fn draft(&self) -> Option<&NoteDraft> {
        match self {
            EditState::Idle => None,
            EditState::Editing { draft, .. } => Some(draft),
        }
    }
}

/// Everything a view needs to draw itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    /// Snapshot of the backend's collection as of the last successful fetch.
    pub notes: Vec<Note>,
    /// Input of the "new note" form.
    pub new_draft: NoteDraft,
    pub edit: EditState,
    /// Mutations issued whose refetch has not completed yet.
    pub pending_writes: usize,
}

impl ViewState {
    /// Whether `notes` may lag behind the backend because a write is in flight.
    pub fn is_stale(&self) -> bool {
        self.pending_writes > 0
    }

    pub fn is_editing(&self, id: NoteID) -> bool {
        self.edit.editing_id() == Some(id)
    }
}

/// Marks a mutation cycle as in flight until dropped.
struct PendingWrite<'a> {
    state: &'a watch::Sender<ViewState>,
}

impl<'a> PendingWrite<'a> {
    fn start(state: &'a watch::Sender<ViewState>) -> Self {
        state.send_modify(|s| s.pending_writes += 1);
        PendingWrite { state }
    }
}

impl Drop for PendingWrite<'_> {
    fn drop(&mut self) {
        self.state
            .send_modify(|s| s.pending_writes = s.pending_writes.saturating_sub(1));
    }
}

/// Holds the local copy of the note collection and both drafts.
///
/// All operations take `&self` and never hold the state across an `.await`,
/// so operations started concurrently interleave freely: their requests and
/// refetches race, and whichever refetch resolves last decides what is shown.
pub struct NoteManager<B> {
    backend: B,
    state: watch::Sender<ViewState>,
}

impl<B: NoteBackend> NoteManager<B> {
    pub fn new(backend: B) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        NoteManager { backend, state }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Get notified whenever the state changes, i.e., whenever the view should re-render.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    pub fn notes(&self) -> Vec<Note> {
        self.state.borrow().notes.clone()
    }

    pub fn new_draft(&self) -> NoteDraft {
        self.state.borrow().new_draft.clone()
    }

    pub fn edit_state(&self) -> EditState {
        self.state.borrow().edit.clone()
    }

    pub fn set_new_title(&self, title: impl Into<String>) {
        let title = title.into();
        self.state.send_modify(|s| s.new_draft.title = title);
    }

    pub fn set_new_content(&self, content: impl Into<String>) {
        let content = content.into();
        self.state.send_modify(|s| s.new_draft.content = content);
    }

    /// Ignored unless a note is being edited.
    pub fn set_edit_title(&self, title: impl Into<String>) {
        let title = title.into();
        self.state.send_if_modified(|s| match &mut s.edit {
            EditState::Editing { draft, .. } => {
                draft.title = title;
                true
            }
            EditState::Idle => false,
        });
    }

    /// Ignored unless a note is being edited.
    pub fn set_edit_content(&self, content: impl Into<String>) {
        let content = content.into();
        self.state.send_if_modified(|s| match &mut s.edit {
            EditState::Editing { draft, .. } => {
                draft.content = content;
                true
            }
            EditState::Idle => false,
        });
    }

    /// Replace the local collection with the backend's.
    ///
    /// On failure the collection is left as it was.
    #[instrument(skip(self))]
    pub async fn refresh(&self) {
        match self.backend.list().await {
            Ok(notes) => {
                debug!(count = notes.len(), "fetched notes");
                self.state.send_modify(|s| s.notes = notes);
            }
            Err(e) => error!("Error fetching notes: {:?}", e),
        }
    }

    /// Create a note, then refetch and clear the "new note" form.
    ///
    /// On failure the form keeps its input so the user can retry.
    #[instrument(skip(self, title, content))]
    pub async fn create(&self, title: impl Into<String>, content: impl Into<String>) {
        let draft = NoteDraft::new(title, content);
        let _pending = PendingWrite::start(&self.state);
        if let Err(e) = self.backend.create(draft).await {
            error!("Error creating note: {:?}", e);
            return;
        }
        self.refresh().await;
        self.state.send_modify(|s| s.new_draft = NoteDraft::default());
    }

    /// Submit the "new note" form as it is right now.
    pub async fn submit_new_draft(&self) {
        let NoteDraft { title, content } = self.new_draft();
        self.create(title, content).await;
    }

    /// Start editing `note`, abandoning any edit in progress.
    pub fn begin_edit(&self, note: &Note) {
        let edit = EditState::Editing {
            id: note.id,
            draft: note.draft(),
        };
        self.state.send_modify(|s| {
            if let EditState::Editing { id, .. } = &s.edit {
                debug!(abandoned = %id, editing = %note.id, "switching edited note");
            }
            s.edit = edit;
        });
    }

    /// Update a note, then refetch and leave edit mode.
    ///
    /// On failure edit mode is kept so the user can retry or cancel.
    #[instrument(skip(self, title, content), fields(note_id = %id))]
    pub async fn update(&self, id: NoteID, title: impl Into<String>, content: impl Into<String>) {
        let draft = NoteDraft::new(title, content);
        let _pending = PendingWrite::start(&self.state);
        if let Err(e) = self.backend.update(id, draft).await {
            error!("Error updating note with ID {}: {:?}", id, e);
            return;
        }
        self.refresh().await;
        self.state.send_modify(|s| s.edit = EditState::Idle);
    }

    /// Submit the edit form as it is right now.
    pub async fn submit_edit(&self) {
        match self.edit_state() {
            EditState::Editing { id, draft } => self.update(id, draft.title, draft.content).await,
            EditState::Idle => debug!("no note is being edited"),
        }
    }

    pub fn cancel_edit(&self) {
        self.state.send_if_modified(|s| {
            let was_editing = s.edit != EditState::Idle;
            s.edit = EditState::Idle;
            was_editing
        });
    }

    /// Delete a note, then refetch.
    ///
    /// Edit mode is not touched, even when the deleted note is the one being edited.
    #[instrument(skip(self), fields(note_id = %id))]
    pub async fn delete(&self, id: NoteID) {
        let _pending = PendingWrite::start(&self.state);
        if let Err(e) = self.backend.delete(id).await {
            error!("Error deleting note with ID {}: {:?}", id, e);
            return;
        }
        self.refresh().await;
    }
}
