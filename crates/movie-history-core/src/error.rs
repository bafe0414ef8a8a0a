use thiserror::Error;

/// Failure inside the backing key-value store.
///
/// The history store masks these into boolean results; only direct
/// consumers of the `KeyValueStore` trait see them.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
