use std::fmt;
use std::io;

use crate::identity::Identity;

/// Collection-like contract over any kind of record storage.
///
/// A store is homogeneous over one record type and exclusively owned by
/// its constructing caller: mutation takes `&mut self` and there is no
/// internal synchronization. Callers that share a store across threads
/// must bring their own locking.
pub trait Store<T> {
    /// Every record currently held, in storage order.
    fn get_all(&self) -> Result<Vec<T>, StoreError>;

    /// The record with the given identity, or `None` if absent.
    fn get(&self, id: impl Into<Identity>) -> Result<Option<T>, StoreError>;

    /// Adds the record to the storage or updates an existing record with
    /// the same identity.
    fn save(&mut self, record: &T) -> Result<(), StoreError>;

    /// Removes the record with the same identity as the given one.
    fn delete(&mut self, record: &T) -> Result<(), StoreError>;
}

/// Error type for store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A record expected to be present was not. Only hard lookups raise
    /// this; `get` reports absence as `Ok(None)`.
    NotFound { id: String },
    /// A record or document could not be serialized or deserialized.
    Malformed(String),
    /// The backing storage failed.
    Io(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound { id } => {
                write!(f, "no record with ID '{}' in the store", id)
            }
            StoreError::Malformed(message) => write!(f, "malformed record data: {}", message),
            StoreError::Io(message) => write!(f, "storage error: {}", message),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}
