mod identity;
mod memory;
mod storage;
mod store;
mod text;
mod xml;

pub use identity::{Identify, Identity, Resolver};
pub use memory::InMemoryStore;
pub use storage::{FileStorage, LocalStorage, MemoryStorage};
pub use store::{Store, StoreError};
pub use text::{cut_to, to_camel_case, to_friendly, to_title_case};
pub use xml::{Document, Element, XmlFileStore};
