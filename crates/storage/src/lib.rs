#![forbid(unsafe_code)]

pub mod keys;
pub mod progress_store;
pub mod store;

pub use progress_store::ProgressStore;
pub use store::{FileStore, KeyValueStore, MemoryStore, StorageError};
