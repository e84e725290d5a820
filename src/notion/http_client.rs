use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::{json, Value};

use crate::config::NotionConfig;
use crate::error::NotesError;
use crate::notion::api::NotionApi;
use crate::notion::types::{Page, QueryRequest, QueryResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_ATTEMPTS: u32 = 3;
const RETRY_BASE_DELAY: Duration = Duration::from_millis(250);

/// reqwest-backed implementation of [`NotionApi`].
///
/// Every request carries the bearer token, the `Notion-Version` header, and a
/// bounded timeout. Idempotent calls (query, archive) retry up to
/// [`MAX_ATTEMPTS`] times with linear backoff on retriable failures; create
/// is never retried because a duplicate page is worse than a failed save.
#[derive(Debug)]
pub struct NotionHttpClient {
    client: reqwest::Client,
    config: NotionConfig,
}

impl NotionHttpClient {
    pub fn new(config: NotionConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self { client, config }
    }

    fn request(&self, method: Method, url: &str, body: &Value) -> reqwest::RequestBuilder {
        self.client
            .request(method, url)
            .header("Authorization", format!("Bearer {}", self.config.api_token))
            .header("Notion-Version", &self.config.api_version)
            .json(body)
    }

    /// Send once. Non-2xx becomes `Remote` with the response body as the
    /// message; a request that never completed becomes `Transport`.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, NotesError> {
        let response = request.send().await.map_err(NotesError::Transport)?;
        let status = response.status();
        let body = response.text().await.map_err(NotesError::Transport)?;

        if !status.is_success() {
            return Err(NotesError::Remote {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(body)
    }

    /// Send with retry, for idempotent requests only.
    async fn send_with_retry(
        &self,
        method: Method,
        url: &str,
        body: &Value,
    ) -> Result<String, NotesError> {
        let mut attempt = 1;
        loop {
            match self.send(self.request(method.clone(), url, body)).await {
                Err(err) if err.is_retriable() && attempt < MAX_ATTEMPTS => {
                    log::warn!(
                        "[Notion] {} {} failed (attempt {}/{}): {}",
                        method,
                        url,
                        attempt,
                        MAX_ATTEMPTS,
                        err
                    );
                    tokio::time::sleep(RETRY_BASE_DELAY * attempt).await;
                    attempt += 1;
                }
                other => return other,
            }
        }
    }
}

#[async_trait]
impl NotionApi for NotionHttpClient {
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, NotesError> {
        let body = serde_json::to_value(request)
            .map_err(|e| NotesError::Schema(format!("serialize query request: {e}")))?;

        let text = self
            .send_with_retry(Method::POST, &self.config.query_url(), &body)
            .await?;

        serde_json::from_str(&text)
            .map_err(|e| NotesError::Schema(format!("query response: {e}")))
    }

    async fn create_page(&self, properties: Value) -> Result<Page, NotesError> {
        let body = json!({
            "parent": { "database_id": self.config.database_id },
            "properties": properties,
        });

        // No retry: create is not idempotent.
        let text = self
            .send(self.request(Method::POST, &self.config.pages_url(), &body))
            .await?;

        serde_json::from_str(&text)
            .map_err(|e| NotesError::Schema(format!("create response: {e}")))
    }

    async fn update_page(&self, page_id: &str, properties: Value) -> Result<(), NotesError> {
        let body = json!({ "properties": properties });

        // No retry either: with last-write-wins semantics a blind replay
        // could resurrect a value another writer has since replaced.
        self.send(self.request(Method::PATCH, &self.config.page_url(page_id), &body))
            .await?;

        Ok(())
    }

    async fn archive_page(&self, page_id: &str) -> Result<(), NotesError> {
        let body = json!({ "archived": true });

        self.send_with_retry(Method::PATCH, &self.config.page_url(page_id), &body)
            .await?;

        Ok(())
    }
}
