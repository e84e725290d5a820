use crate::error::NotesError;
use crate::notes::types::{CreateNoteInput, Note, DEFAULT_TITLE};
use crate::notion::api::{fetch_all_pages, NotionApi};
use crate::notion::http_client::NotionHttpClient;
use crate::notion::schema;

use crate::config::NotionConfig;

/// Public façade over the Notion adapter: all note persistence goes through
/// here. Validation happens before any network call; every failure surfaces
/// as a [`NotesError`] variant rather than an empty result.
pub struct NoteRepository<A: NotionApi> {
    api: A,
}

impl NoteRepository<NotionHttpClient> {
    /// Repository backed by the live Notion API.
    pub fn connect(config: NotionConfig) -> Self {
        Self::new(NotionHttpClient::new(config))
    }
}

impl<A: NotionApi> NoteRepository<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// All non-archived notes, newest-edited first. Pagination runs until the
    /// store reports no more results; any transport/remote/parse failure is
    /// propagated, never conflated with a genuinely empty collection.
    pub async fn list(&self) -> Result<Vec<Note>, NotesError> {
        let pages = fetch_all_pages(&self.api).await?;
        Ok(pages.iter().map(schema::page_to_note).collect())
    }

    /// Persist a new note.
    ///
    /// Fails with `Validation` when title and content are both blank. A blank
    /// title with non-blank content gets [`DEFAULT_TITLE`]. Creation omits the
    /// `Status` property (the database default applies), so the status on the
    /// returned note is the caller-requested value, not yet persisted; it is
    /// stored remotely on the first [`update`](Self::update).
    pub async fn create(&self, input: CreateNoteInput) -> Result<Note, NotesError> {
        let title = input.title.trim();
        if title.is_empty() && input.content.trim().is_empty() {
            return Err(NotesError::Validation(
                "a note needs a title or some content".to_string(),
            ));
        }

        let title = if title.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            title.to_string()
        };

        let page = self
            .api
            .create_page(schema::create_properties(&title, &input.content))
            .await?;
        log::debug!("[Notes] created page {}", page.id);

        Ok(Note {
            id: page.id,
            title,
            content: input.content,
            status: input.status.unwrap_or_default(),
            created_at: page.created_time,
            updated_at: page.last_edited_time,
        })
    }

    /// Patch title, content, and status of a persisted note. The store bumps
    /// `last_edited_time` itself; there is no re-read after the write.
    pub async fn update(&self, note: &Note) -> Result<(), NotesError> {
        if !note.is_persisted() {
            return Err(NotesError::Validation(
                "cannot update a note that was never persisted (empty id)".to_string(),
            ));
        }

        self.api
            .update_page(&note.id, schema::update_properties(note))
            .await
    }

    /// Soft-delete: mark the page archived. Notion excludes archived pages
    /// from query results, so the note disappears from subsequent lists
    /// without being physically erased.
    pub async fn delete(&self, id: &str) -> Result<(), NotesError> {
        if id.trim().is_empty() {
            return Err(NotesError::Validation(
                "cannot delete a note with an empty id".to_string(),
            ));
        }

        self.api.archive_page(id).await
    }
}
