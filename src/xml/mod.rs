//! XML-file persistence: a whole-document model, a record codec, and the
//! file-backed store built from them.

mod codec;
mod document;
mod store;

pub use document::{Document, Element};
pub use store::XmlFileStore;

use crate::store::StoreError;

pub(crate) fn malformed(err: impl std::fmt::Display) -> StoreError {
    StoreError::Malformed(err.to_string())
}
