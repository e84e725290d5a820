//! Notion wire protocol: typed request/response shapes, the property schema
//! mapping, and the HTTP transport.

pub mod api;
pub mod http_client;
pub mod schema;
pub mod types;

#[cfg(test)]
pub mod testing;

pub use api::*;
pub use http_client::*;
pub use types::*;
