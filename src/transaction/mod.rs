//! Transaction building and submission.
//!
//! A [`TransactionBatch`] accumulates create/update/delete operations
//! addressed to named record APIs, then submits the whole sequence as one
//! atomic request. The server applies the batch in order, entirely or not
//! at all, and answers with the identifiers of created records.
//!
//! # Usage
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
//!     .create(json!({"name": "The Godfather"}).as_object().cloned().unwrap())
//!     .api(ApiName::new("actors")?)
//!     .delete(RecordId::new("42")?);
//!
//! let ids = batch.send()?;
//! println!("created: {:?}", ids);
//! # Ok(())
//! # }
//! ```

mod batch;
mod error;
mod operation;

pub use batch::{ApiBatch, TransactionBatch};
pub use error::{TransactionError, TransactionResult};
pub use operation::{JsonObject, Operation, TransactionRequest, TransactionResponse};
