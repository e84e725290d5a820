use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title given to a note created with a blank title but non-blank content.
pub const DEFAULT_TITLE: &str = "Untitled Poem";

/// Publication status of a note. Closed enumeration; the variant names map to
/// the option names defined on the Notion database's `Status` property.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum NoteStatus {
    #[serde(rename = "writing")]
    #[default]
    Writing,
    #[serde(rename = "not published")]
    NotPublished,
    #[serde(rename = "Published")]
    Published,
}

impl NoteStatus {
    /// The exact option name stored in Notion.
    pub fn as_str(&self) -> &'static str {
        match self {
            NoteStatus::Writing => "writing",
            NoteStatus::NotPublished => "not published",
            NoteStatus::Published => "Published",
        }
    }

    /// Parse a Notion option name. Returns `None` for anything outside the
    /// enumeration; callers decide whether to default or reject.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "writing" => Some(NoteStatus::Writing),
            "not published" => Some(NoteStatus::NotPublished),
            "Published" => Some(NoteStatus::Published),
            _ => None,
        }
    }
}

/// A poem note. The authoritative copy lives in Notion; `id` and both
/// timestamps are assigned and maintained by the remote store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Notion page id. Empty until the note is first persisted, immutable
    /// afterwards.
    pub id: String,
    pub title: String,
    pub content: String,
    pub status: NoteStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// A note with an empty id has never been persisted remotely.
    pub fn is_persisted(&self) -> bool {
        !self.id.trim().is_empty()
    }
}

/// Input for creating a new note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNoteInput {
    pub title: String,
    pub content: String,
    /// Requested initial status. Creation leaves the `Status` property to the
    /// database default, so this is carried back on the returned note but not
    /// yet persisted; see [`super::NoteRepository::create`].
    pub status: Option<NoteStatus>,
}
