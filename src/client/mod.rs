//! HTTP transport layer for the RecBase client.
//!
//! This module owns everything network-shaped. The rest of the crate talks
//! to the server exclusively through the [`Fetch`] trait and never touches
//! the HTTP library directly, which keeps the transaction builder testable
//! with an in-process mock transport.

mod error;
mod http;

pub use error::{ClientError, ClientResult};
pub use http::{Client, ClientConfig};

use serde_json::Value;
use std::fmt;

/// HTTP verbs the client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => write!(f, "GET"),
            Method::Post => write!(f, "POST"),
            Method::Patch => write!(f, "PATCH"),
            Method::Delete => write!(f, "DELETE"),
        }
    }
}

/// The transport capability the core depends on.
///
/// Given a server-relative path, a verb, and an optional JSON body, perform
/// one round trip and return the raw response body on success. Non-success
/// statuses and connection failures surface as [`ClientError`]; no retries
/// happen at this seam.
pub trait Fetch {
    fn fetch(&self, path: &str, method: Method, body: Option<&Value>) -> ClientResult<Vec<u8>>;
}
