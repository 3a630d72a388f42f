//! Ordered accumulation of operations and atomic submission.

use serde_json::from_slice;

use crate::client::{Fetch, Method};
use crate::transaction::error::TransactionResult;
use crate::transaction::operation::{
    JsonObject, Operation, TransactionRequest, TransactionResponse,
};
use crate::types::{ApiName, RecordId};

/// The fixed execute endpoint, relative to the client's base URL.
const EXECUTE_PATH: &str = "/api/transactions/v1/execute";

/// An ordered, client-accumulated sequence of operations submitted together.
///
/// Created empty, mutated only by appends through [`ApiBatch`] views, and
/// submitted with [`send`](Self::send). Sending does not consume the batch;
/// the accumulated operations stay in place and can be extended and sent
/// again.
pub struct TransactionBatch<'c> {
    transport: &'c dyn Fetch,
    operations: Vec<Operation>,
}

impl<'c> TransactionBatch<'c> {
    /// Create an empty batch on top of a transport.
    pub fn new(transport: &'c dyn Fetch) -> Self {
        Self {
            transport,
            operations: Vec::new(),
        }
    }

    /// Get a view of this batch scoped to one collection.
    ///
    /// The view holds no state beyond the name; calling this repeatedly,
    /// including with a name already used, is cheap and does not touch the
    /// accumulated operations.
    pub fn api(&mut self, api_name: ApiName) -> ApiBatch<'_, 'c> {
        ApiBatch {
            batch: self,
            api_name,
        }
    }

    /// Append an operation, preserving call order.
    pub(crate) fn push(&mut self, operation: Operation) {
        self.operations.push(operation);
    }

    /// The operations accumulated so far, in append order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    /// Number of accumulated operations.
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Whether no operations have been accumulated yet.
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Submit the accumulated operations as one atomic request.
    ///
    /// Returns the identifiers the server assigned, one per Create
    /// operation in the batch, in the order the creates were appended. A
    /// response without an `ids` field yields an empty list. Transport
    /// failures and non-success statuses propagate unmodified; no retries.
    pub fn send(&self) -> TransactionResult<Vec<String>> {
        let request = TransactionRequest {
            operations: self.operations.clone(),
        };
        let body = serde_json::to_value(&request)?;

        let raw = self.transport.fetch(EXECUTE_PATH, Method::Post, Some(&body))?;

        let response: TransactionResponse = from_slice(&raw)?;
        Ok(response.ids)
    }
}

impl std::fmt::Debug for TransactionBatch<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionBatch")
            .field("operations", &self.operations)
            .finish_non_exhaustive()
    }
}

/// A collection-scoped view over a [`TransactionBatch`].
///
/// Each mutation consumes the view and hands the parent batch back, so
/// calls chain across collections:
///
/// ```ignore
/// batch
///     .api(ApiName::new("movies")?)
///     .create(record)
///     .api(ApiName::new("actors")?)
///     .delete(RecordId::new("42")?);
/// let ids = batch.send()?;
/// ```
#[derive(Debug)]
pub struct ApiBatch<'b, 'c> {
    batch: &'b mut TransactionBatch<'c>,
    api_name: ApiName,
}

impl<'b, 'c> ApiBatch<'b, 'c> {
    /// The collection this view is bound to.
    pub fn api_name(&self) -> &ApiName {
        &self.api_name
    }

    /// Append a Create operation for the bound collection.
    pub fn create(self, value: JsonObject) -> &'b mut TransactionBatch<'c> {
        self.batch.push(Operation::create(self.api_name, value));
        self.batch
    }

    /// Append an Update operation for the bound collection.
    pub fn update(self, record_id: RecordId, value: JsonObject) -> &'b mut TransactionBatch<'c> {
        self.batch
            .push(Operation::update(self.api_name, record_id, value));
        self.batch
    }

    /// Append a Delete operation for the bound collection.
    pub fn delete(self, record_id: RecordId) -> &'b mut TransactionBatch<'c> {
        self.batch.push(Operation::delete(self.api_name, record_id));
        self.batch
    }
}
