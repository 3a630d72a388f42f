//! validated string wrappers used throughout the client.
//!
//! Collection names and record identifiers travel over the wire as plain
//! strings, but constructing them goes through these newtypes so a request
//! can never be built with an empty name. The server is the final authority
//! on which names exist; the client only rejects inputs that could not
//! possibly be valid.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use ulid::Ulid;

/// Error for rejected collection names and record identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidNameError {
    /// empty names can never address anything on the server
    #[error("name cannot be empty")]
    Empty,
}

/// The name of a record API (a server-side collection).
///
/// Guaranteed non-empty by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ApiName(String);

impl ApiName {
    /// create a new ApiName, validating the input
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidNameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(InvalidNameError::Empty);
        }
        Ok(Self(name))
    }

    /// get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// convert to owned String
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ApiName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ApiName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for ApiName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Self::new(name).map_err(serde::de::Error::custom)
    }
}

/// An opaque record identifier.
///
/// The server hands these out for created records; callers holding richer
/// identifier types (integers, ULIDs) convert them to their stable string
/// rendering via the `From` impls below. Guaranteed non-empty by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RecordId(String);

impl RecordId {
    /// create a new RecordId, validating the input
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidNameError> {
        let id = id.into();
        if id.is_empty() {
            return Err(InvalidNameError::Empty);
        }
        Ok(Self(id))
    }

    /// generate a fresh ULID-backed identifier
    pub fn generate() -> Self {
        Self(Ulid::new().to_string())
    }

    /// get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// convert to owned String
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<Ulid> for RecordId {
    fn from(id: Ulid) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = String::deserialize(deserializer)?;
        Self::new(id).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_name_rejects_empty() {
        assert_eq!(ApiName::new(""), Err(InvalidNameError::Empty));
        assert!(ApiName::new("movies").is_ok());
    }

    #[test]
    fn test_record_id_rejects_empty() {
        assert_eq!(RecordId::new(""), Err(InvalidNameError::Empty));
        assert!(RecordId::new("42").is_ok());
    }

    #[test]
    fn test_record_id_from_integer() {
        assert_eq!(RecordId::from(42u64).as_str(), "42");
        assert_eq!(RecordId::from(-7i64).as_str(), "-7");
    }

    #[test]
    fn test_record_id_generate_is_nonempty() {
        let id = RecordId::generate();
        assert!(!id.as_str().is_empty());
        assert_ne!(RecordId::generate(), RecordId::generate());
    }

    #[test]
    fn test_serialize_as_plain_string() {
        let name = ApiName::new("movies").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"movies\"");

        let id = RecordId::new("42").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"42\"");
    }

    #[test]
    fn test_deserialize_revalidates() {
        let name: ApiName = serde_json::from_str("\"movies\"").unwrap();
        assert_eq!(name.as_str(), "movies");

        let err = serde_json::from_str::<ApiName>("\"\"");
        assert!(err.is_err());

        let err = serde_json::from_str::<RecordId>("\"\"");
        assert!(err.is_err());
    }

    #[test]
    fn test_display() {
        let name = ApiName::new("movies").unwrap();
        assert_eq!(name.to_string(), "movies");
        let id = RecordId::new("abc").unwrap();
        assert_eq!(format!("{}", id), "abc");
    }
}
