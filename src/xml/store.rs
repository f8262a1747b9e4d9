use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::codec;
use super::document::{Document, ID_TAG};
use crate::identity::Identity;
use crate::storage::{FileStorage, LocalStorage};
use crate::store::{Store, StoreError};

/// XML-file based store with permanent persistence.
///
/// The file is the state: every operation loads the whole document, and
/// mutating operations write the whole document back. That makes writes
/// O(file size) and leaves no recovery path for a write interrupted
/// partway, which bounds this store to small collections.
///
/// Records are looked up by the text of a child element literally named
/// `Id`, so record types used here want
/// `#[serde(rename_all = "PascalCase")]` or an explicit rename on the key
/// field.
pub struct XmlFileStore<T, S = LocalStorage> {
    path: PathBuf,
    storage: S,
    _record: PhantomData<T>,
}

impl<T, S: FileStorage> XmlFileStore<T, S> {
    /// Opens a store over the given file, first creating an empty
    /// document there if the file does not exist. An existing file is
    /// left untouched, whatever its root element is named.
    pub fn open(path: impl Into<PathBuf>, storage: S) -> Result<Self, StoreError> {
        let path = path.into();

        if !storage.exists(&path) {
            storage.write(&path, &Document::empty().render())?;
        }

        Ok(XmlFileStore {
            path,
            storage,
            _record: PhantomData,
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Document, StoreError> {
        Document::parse(&self.storage.read(&self.path)?)
    }

    fn flush(&self, document: &Document) -> Result<(), StoreError> {
        Ok(self.storage.write(&self.path, &document.render())?)
    }
}

impl<T, S> Store<T> for XmlFileStore<T, S>
where
    T: Serialize + DeserializeOwned,
    S: FileStorage,
{
    fn get_all(&self) -> Result<Vec<T>, StoreError> {
        let document = self.load()?;
        document.elements().iter().map(codec::from_element).collect()
    }

    fn get(&self, id: impl Into<Identity>) -> Result<Option<T>, StoreError> {
        let id = id.into().to_string();
        let document = self.load()?;

        match document.find(&id) {
            Some(element) => Ok(Some(codec::from_element(element)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, record: &T) -> Result<(), StoreError> {
        let element = codec::to_element(record)?;
        let mut document = self.load()?;

        // TODO: replace an existing element with the same ID instead of
        // appending a duplicate.
        document.push(element);

        self.flush(&document)
    }

    fn delete(&mut self, record: &T) -> Result<(), StoreError> {
        // Unlike the in-memory store, deleting an absent record is an
        // error here.
        let id = codec::to_element(record)?
            .id()
            .map(str::to_string)
            .ok_or_else(|| {
                StoreError::Malformed(format!("record has no '{}' element", ID_TAG))
            })?;

        let mut document = self.load()?;

        if document.remove(&id).is_none() {
            return Err(StoreError::NotFound { id });
        }

        self.flush(&document)
    }
}
