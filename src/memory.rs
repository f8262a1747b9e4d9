use serde::Serialize;

use crate::identity::{Identity, Resolver};
use crate::store::{Store, StoreError};

/// Simple list-backed store without persistence.
///
/// Records are kept in insertion order and die with the store. All
/// identity comparisons go through the configured [`Resolver`].
pub struct InMemoryStore<T> {
    records: Vec<T>,
    resolver: Resolver<T>,
}

impl<T> InMemoryStore<T> {
    /// Creates an empty store resolving identities by the key-field
    /// convention.
    pub fn new() -> Self {
        Self::with_resolver(Resolver::convention())
    }

    /// Creates an empty store with an explicit resolution strategy.
    pub fn with_resolver(resolver: Resolver<T>) -> Self {
        InMemoryStore {
            records: Vec::new(),
            resolver,
        }
    }
}

impl<T> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Serialize> InMemoryStore<T> {
    fn position(&self, id: &Identity) -> Option<usize> {
        self.records
            .iter()
            .position(|record| self.resolver.resolve(record) == *id)
    }
}

impl<T: Serialize + Clone> Store<T> for InMemoryStore<T> {
    fn get_all(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.records.clone())
    }

    fn get(&self, id: impl Into<Identity>) -> Result<Option<T>, StoreError> {
        let id = id.into();
        Ok(self
            .records
            .iter()
            .find(|&record| self.resolver.resolve(record) == id)
            .cloned())
    }

    fn save(&mut self, record: &T) -> Result<(), StoreError> {
        // Delete-then-append: an update leaves its old slot and lands at
        // the end of the list.
        let id = self.resolver.resolve(record);

        if let Some(at) = self.position(&id) {
            self.records.remove(at);
        }

        self.records.push(record.clone());
        Ok(())
    }

    fn delete(&mut self, record: &T) -> Result<(), StoreError> {
        // Deleting a record that is not present is a no-op here, unlike
        // the XML-file store.
        let id = self.resolver.resolve(record);

        if let Some(at) = self.position(&id) {
            self.records.remove(at);
        }

        Ok(())
    }
}
