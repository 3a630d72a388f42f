//! RecBase client - transactional mutations for record APIs.
//!
//! This crate builds batches of record mutations (create, update, delete)
//! against named server-side collections and submits them as a single
//! atomic request. The server applies the whole batch or none of it and
//! returns the identifiers assigned to created records.
//!
//! # Example
//!
//! ```no_run
//! use recbase::{ApiName, Client, RecordId};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("http://localhost:4000")?;
//!
//! let mut batch = client.transaction();
//! batch
//!     .api(ApiName::new("movies")?)
//!     .create(json!({"name": "Alien", "year": 1979}).as_object().cloned().unwrap())
//!     .api(ApiName::new("movies")?)
//!     .delete(RecordId::new("42")?);
//!
//! let ids = batch.send()?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod transaction;
pub mod types;

pub use client::{Client, ClientConfig, ClientError, Fetch, Method};
pub use transaction::{
    ApiBatch, JsonObject, Operation, TransactionBatch, TransactionError, TransactionRequest,
    TransactionResponse,
};
pub use types::{ApiName, InvalidNameError, RecordId};
