//! In-memory Notion stand-in for tests: a paginated page store behind the
//! [`NotionApi`] trait, with request counters and failure injection.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;

use crate::error::NotesError;
use crate::notion::api::NotionApi;
use crate::notion::schema::create_properties;
use crate::notion::types::{Page, QueryRequest, QueryResponse};

struct StoredPage {
    page: Page,
    archived: bool,
}

pub struct FakeNotion {
    store: Mutex<Vec<StoredPage>>,
    page_size: usize,
    queries: AtomicU32,
    creates: AtomicU32,
    updates: AtomicU32,
    archives: AtomicU32,
    /// Queries beyond this count answer HTTP 503.
    fail_queries_after: AtomicU32,
    /// When set, query responses claim `has_more` without a cursor.
    omit_cursors: AtomicU32,
}

impl FakeNotion {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            store: Mutex::new(Vec::new()),
            page_size,
            queries: AtomicU32::new(0),
            creates: AtomicU32::new(0),
            updates: AtomicU32::new(0),
            archives: AtomicU32::new(0),
            fail_queries_after: AtomicU32::new(u32::MAX),
            omit_cursors: AtomicU32::new(0),
        }
    }

    /// Insert a page directly, bypassing the request counters.
    pub async fn seed(&self, title: &str, content: &str) {
        let mut store = self.store.lock().unwrap();
        let page = Self::new_page(store.len(), create_properties(title, content));
        store.push(StoredPage { page, archived: false });
    }

    pub fn fail_after_queries(&self, allowed: u32) {
        self.fail_queries_after.store(allowed, Ordering::SeqCst);
    }

    pub fn drop_cursors(&self) {
        self.omit_cursors.store(1, Ordering::SeqCst);
    }

    pub fn query_count(&self) -> u32 {
        self.queries.load(Ordering::SeqCst)
    }

    /// Total number of simulated network requests of any kind.
    pub fn request_count(&self) -> u32 {
        self.queries.load(Ordering::SeqCst)
            + self.creates.load(Ordering::SeqCst)
            + self.updates.load(Ordering::SeqCst)
            + self.archives.load(Ordering::SeqCst)
    }

    pub fn stored_properties(&self, page_id: &str) -> Option<Value> {
        let store = self.store.lock().unwrap();
        store
            .iter()
            .find(|s| s.page.id == page_id)
            .map(|s| s.page.properties.clone())
    }

    fn new_page(index: usize, properties: Value) -> Page {
        Page {
            id: format!("page-{index:03}"),
            created_time: Utc::now(),
            last_edited_time: Utc::now(),
            properties,
        }
    }
}

#[async_trait]
impl NotionApi for FakeNotion {
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, NotesError> {
        let issued = self.queries.fetch_add(1, Ordering::SeqCst);
        if issued >= self.fail_queries_after.load(Ordering::SeqCst) {
            return Err(NotesError::Remote {
                status: 503,
                message: "injected failure".to_string(),
            });
        }

        let store = self.store.lock().unwrap();
        let visible: Vec<&Page> = store
            .iter()
            .filter(|s| !s.archived)
            .map(|s| &s.page)
            .collect();

        let start: usize = request
            .start_cursor
            .as_deref()
            .map(|c| c.parse().unwrap_or(0))
            .unwrap_or(0);
        let end = (start + self.page_size).min(visible.len());
        let has_more = end < visible.len();

        let next_cursor = if has_more && self.omit_cursors.load(Ordering::SeqCst) == 0 {
            Some(end.to_string())
        } else {
            None
        };

        Ok(QueryResponse {
            results: visible[start..end].iter().map(|p| (*p).clone()).collect(),
            has_more,
            next_cursor,
        })
    }

    async fn create_page(&self, properties: Value) -> Result<Page, NotesError> {
        self.creates.fetch_add(1, Ordering::SeqCst);

        let mut store = self.store.lock().unwrap();
        let page = Self::new_page(store.len(), properties);
        store.push(StoredPage {
            page: page.clone(),
            archived: false,
        });
        Ok(page)
    }

    async fn update_page(&self, page_id: &str, properties: Value) -> Result<(), NotesError> {
        self.updates.fetch_add(1, Ordering::SeqCst);

        let mut store = self.store.lock().unwrap();
        match store.iter_mut().find(|s| s.page.id == page_id) {
            Some(stored) => {
                stored.page.properties = properties;
                stored.page.last_edited_time = Utc::now();
                Ok(())
            }
            None => Err(NotesError::Remote {
                status: 404,
                message: format!("no page {page_id}"),
            }),
        }
    }

    async fn archive_page(&self, page_id: &str) -> Result<(), NotesError> {
        self.archives.fetch_add(1, Ordering::SeqCst);

        let mut store = self.store.lock().unwrap();
        match store.iter_mut().find(|s| s.page.id == page_id) {
            Some(stored) => {
                stored.archived = true;
                Ok(())
            }
            None => Err(NotesError::Remote {
                status: 404,
                message: format!("no page {page_id}"),
            }),
        }
    }
}
