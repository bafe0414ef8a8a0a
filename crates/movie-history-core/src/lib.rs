pub mod auth;
pub mod error;
pub mod seed;
pub mod stats;
pub mod storage;
pub mod store;

pub use auth::{authenticate, can_enter, register};
pub use error::StorageError;
pub use seed::sample_history;
pub use stats::compute_stats;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::{HistoryStore, HISTORY_KEY};
