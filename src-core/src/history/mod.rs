pub mod storage;
pub mod store;
pub mod types;

#[cfg(feature = "cli")]
pub use storage::FileStorage;
pub use storage::{MemoryStorage, StoragePort};
pub use store::{HistoryStore, DEFAULT_CAPACITY, DEFAULT_STORAGE_KEY};
pub use types::HistoryEntry;
