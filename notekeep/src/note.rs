//! Core types of Notekeep.
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// ID of notes.
///
/// Assigned by the backend when a note is created and never changed afterwards.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Clone, Copy, Hash)]
#[serde(into = "i64", from = "i64")]
pub struct NoteID {
    id: i64,
}

impl From<NoteID> for i64 {
    fn from(id: NoteID) -> i64 {
        id.id
    }
}

impl From<i64> for NoteID {
    fn from(id: i64) -> NoteID {
        NoteID::new(id)
    }
}

impl NoteID {
    pub fn new(id: i64) -> Self {
        NoteID { id }
    }

    pub fn get(&self) -> i64 {
        self.id
    }
}

impl Display for NoteID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A note as persisted by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteID,
    pub title: String,
    pub content: String,
}

impl Note {
    pub fn new(id: NoteID, draft: NoteDraft) -> Self {
        Note {
            id,
            title: draft.title,
            content: draft.content,
        }
    }

    /// The user-editable part of the note.
    pub fn draft(&self) -> NoteDraft {
        NoteDraft::new(self.title.clone(), self.content.clone())
    }
}

/// Unsaved user input for a note, either a new one or an edit of an existing one.
///
/// This is also the request body for creating and updating notes.
/// Missing fields deserialize to empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
}

impl NoteDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        NoteDraft {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.content.is_empty()
    }
}
