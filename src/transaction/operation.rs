//! The operation union and its wire representation.
//!
//! An [`Operation`] is one atomic mutation intent targeting one collection.
//! On the wire it is a JSON object with exactly one of the keys `"Create"`,
//! `"Update"`, `"Delete"`; serde's externally tagged enum representation is
//! precisely that shape, so the derive is the codec:
//!
//! ```json
//! {"Create": {"api_name": "movies", "value": {"name": "A"}}}
//! {"Update": {"api_name": "movies", "record_id": "42", "value": {"name": "B"}}}
//! {"Delete": {"api_name": "movies", "record_id": "42"}}
//! ```
//!
//! Decoding is strict: zero tag keys, more than one tag key, an unknown tag,
//! or a missing payload field all fail. The outer tag is authoritative;
//! nothing is inferred from which inner fields happen to be present.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{ApiName, RecordId};

/// A JSON object payload, passed through to the server unmodified.
pub type JsonObject = serde_json::Map<String, Value>;

/// One atomic record mutation.
///
/// Exactly one variant is active per instance; the closed enum makes the
/// two-tags-at-once state unrepresentable rather than checked at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    /// Insert a full record; the server assigns the identifier.
    Create { api_name: ApiName, value: JsonObject },
    /// Overwrite or patch the record addressed by `record_id`.
    Update {
        api_name: ApiName,
        record_id: RecordId,
        value: JsonObject,
    },
    /// Remove the record addressed by `record_id`.
    Delete {
        api_name: ApiName,
        record_id: RecordId,
    },
}

impl Operation {
    /// Build a Create operation.
    pub fn create(api_name: ApiName, value: JsonObject) -> Self {
        Operation::Create { api_name, value }
    }

    /// Build an Update operation.
    pub fn update(api_name: ApiName, record_id: RecordId, value: JsonObject) -> Self {
        Operation::Update {
            api_name,
            record_id,
            value,
        }
    }

    /// Build a Delete operation.
    pub fn delete(api_name: ApiName, record_id: RecordId) -> Self {
        Operation::Delete {
            api_name,
            record_id,
        }
    }

    /// The collection this operation targets.
    pub fn api_name(&self) -> &ApiName {
        match self {
            Operation::Create { api_name, .. }
            | Operation::Update { api_name, .. }
            | Operation::Delete { api_name, .. } => api_name,
        }
    }

    /// Whether this operation makes the server assign a new identifier.
    pub fn is_create(&self) -> bool {
        matches!(self, Operation::Create { .. })
    }
}

/// The request body submitted to the execute endpoint.
///
/// Operation order is significant end to end: accumulation order equals wire
/// order equals server apply order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub operations: Vec<Operation>,
}

/// The response body from the execute endpoint.
///
/// `ids` holds one identifier per Create operation, in the relative order
/// the creates appeared in the request. An absent `ids` key means no
/// creates were in the batch, not a malformed response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionResponse {
    #[serde(default)]
    pub ids: Vec<String>,
}
