//! The property schema: how note fields map onto Notion's typed properties.
//!
//! `Title` is a title-typed property, `Content` is rich_text, `Status` is a
//! status-kind option. Both directions go through here and nowhere else.

use serde_json::{json, Value};

use crate::notes::{Note, NoteStatus};
use crate::notion::types::Page;

/// Properties for a create request: only `Title` and `Content`. `Status` is
/// left to the database default so a freshly created page has no explicit
/// status until the first update.
pub fn create_properties(title: &str, content: &str) -> Value {
    json!({
        "Title": {
            "title": [{ "text": { "content": title } }]
        },
        "Content": {
            "rich_text": [{ "text": { "content": content } }]
        }
    })
}

/// Properties for an update request: `Title`, `Content`, and `Status`. The
/// status comes from the closed [`NoteStatus`] enum, so an out-of-enumeration
/// option name cannot reach the wire.
pub fn update_properties(note: &Note) -> Value {
    json!({
        "Title": {
            "title": [{ "text": { "content": note.title } }]
        },
        "Content": {
            "rich_text": [{ "text": { "content": note.content } }]
        },
        "Status": {
            "status": { "name": note.status.as_str() }
        }
    })
}

/// Map a Notion page onto a [`Note`].
///
/// The page envelope (id, timestamps) is already strictly typed; the per-note
/// properties are extracted defensively. A missing or malformed `Title` or
/// `Content` becomes an empty string, a missing or unknown `Status` becomes
/// the default status. Pages edited by hand in Notion routinely have gaps
/// here, so these never fail the whole page.
pub fn page_to_note(page: &Page) -> Note {
    let props = &page.properties;
    Note {
        id: page.id.clone(),
        title: plain_text(props.get("Title"), "title"),
        content: plain_text(props.get("Content"), "rich_text"),
        status: status_of(props.get("Status")),
        created_at: page.created_time,
        updated_at: page.last_edited_time,
    }
}

/// Extract the text of the first run of a title/rich_text property, or an
/// empty string when any level of the nesting is absent.
fn plain_text(property: Option<&Value>, kind: &str) -> String {
    property
        .and_then(|p| p.get(kind))
        .and_then(Value::as_array)
        .and_then(|runs| runs.first())
        .and_then(|run| run.get("text"))
        .and_then(|text| text.get("content"))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn status_of(property: Option<&Value>) -> NoteStatus {
    property
        .and_then(|p| p.get("status"))
        .and_then(|s| s.get("name"))
        .and_then(Value::as_str)
        .and_then(NoteStatus::from_name)
        .unwrap_or_default()
}
