use async_trait::async_trait;
use serde_json::Value;

use crate::error::NotesError;
use crate::notion::types::{Page, QueryRequest, QueryResponse};

/// Transport seam between the repository and the Notion HTTP layer. The
/// production implementation is [`crate::notion::NotionHttpClient`]; tests
/// run against an in-memory store.
#[async_trait]
pub trait NotionApi: Send + Sync {
    /// Run one database query and return one page of results.
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, NotesError>;

    /// Create a page with the given properties; returns the new page envelope.
    async fn create_page(&self, properties: Value) -> Result<Page, NotesError>;

    /// Patch the properties of an existing page.
    async fn update_page(&self, page_id: &str, properties: Value) -> Result<(), NotesError>;

    /// Soft-delete a page by marking it archived. Archived pages drop out of
    /// query results server-side.
    async fn archive_page(&self, page_id: &str) -> Result<(), NotesError>;
}

/// Fetch the complete current page collection, newest-edited first.
///
/// Pagination is strictly sequential: each request needs the cursor from the
/// previous response, so there is no parallel fan-out. Pages are concatenated
/// in response order; the remote ordering is authoritative and nothing is
/// re-sorted client-side. Any failure aborts the loop and discards what was
/// accumulated. Dropping the returned future between page fetches cancels the
/// retrieval cleanly for the same reason.
pub async fn fetch_all_pages<A: NotionApi + ?Sized>(api: &A) -> Result<Vec<Page>, NotesError> {
    let mut pages = Vec::new();
    let mut cursor: Option<String> = None;

    loop {
        let response = api.query(&QueryRequest::latest_first(cursor)).await?;
        pages.extend(response.results);

        if !response.has_more {
            break;
        }
        cursor = match response.next_cursor {
            Some(next) => Some(next),
            // Without a cursor the same page would repeat forever.
            None => {
                return Err(NotesError::Schema(
                    "has_more is true but next_cursor is missing".to_string(),
                ))
            }
        };
        log::debug!("[Notion] fetched {} pages so far, continuing", pages.len());
    }

    Ok(pages)
}
