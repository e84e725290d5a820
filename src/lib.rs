//! Notion-backed persistence adapter for the PoemNotes client.
//!
//! The authoritative note store is a Notion database; every operation is a
//! live round trip. This crate provides:
//! - Bidirectional mapping between [`notes::Note`] and Notion's page/property
//!   wire shape
//! - Paginated retrieval of the full note collection
//! - Create/update/archive with an explicit error taxonomy
//!
//! The app's screens call [`notes::NoteRepository`]; nothing else in the UI
//! touches the wire format.

pub mod config;
pub mod error;
pub mod notes;
pub mod notion;

pub use config::{ConfigError, NotionConfig};
pub use error::NotesError;
pub use notes::{CreateNoteInput, Note, NoteRepository, NoteStatus};
pub use notion::NotionHttpClient;
