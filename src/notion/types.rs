use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Database property the query sorts on, matching the remote schema.
pub const SORT_PROPERTY: &str = "UpdatedAt";

/// Body of a database query request.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    pub sorts: Vec<SortSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cursor: Option<String>,
}

impl QueryRequest {
    /// Query ordered by last modification, newest first, starting at the
    /// given cursor (`None` for the first page).
    pub fn latest_first(start_cursor: Option<String>) -> Self {
        Self {
            sorts: vec![SortSpec {
                property: SORT_PROPERTY.to_string(),
                direction: "descending".to_string(),
            }],
            start_cursor,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SortSpec {
    pub property: String,
    pub direction: String,
}

/// One page of query results. `results` and `has_more` are required; their
/// absence fails deserialization and surfaces as a schema error.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub results: Vec<Page>,
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// A Notion page envelope. The id and timestamps are required; `properties`
/// stays a raw value because individual note fields are genuinely optional
/// and defaulted during mapping (see [`crate::notion::schema`]).
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub id: String,
    pub created_time: DateTime<Utc>,
    pub last_edited_time: DateTime<Utc>,
    #[serde(default)]
    pub properties: Value,
}
