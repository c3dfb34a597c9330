//! Font storage
//!
//! The font directory is reached only through [`FontStorage`], so handlers and
//! services can run against an on-disk store in production and an in-memory
//! store in tests.
//!
//! Writes are not coordinated. Two uploads of the same name race and the last
//! completed write wins; a delete racing an upload may leave either state.

pub mod disk;
pub mod memory;
pub mod name;

pub use disk::DiskStorage;
pub use memory::MemoryStorage;
pub use name::FontName;

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by storage backends
#[derive(Error, Debug)]
pub enum StorageError {
    /// Name could escape the font directory or is otherwise unusable
    #[error("Invalid font name: {0}")]
    InvalidName(String),

    /// Name resolved to a location outside the font directory
    #[error("Font path resolves outside the font directory: {0}")]
    OutsideRoot(String),

    /// No font stored under this name
    #[error("Font not found: {0}")]
    NotFound(String),

    /// The font directory has not been created yet
    #[error("Fonts directory not found")]
    DirectoryNotFound,

    /// Any other I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Flat key/value store of font files
#[async_trait]
pub trait FontStorage: Send + Sync {
    /// Names of all stored font files, sorted
    async fn list(&self) -> Result<Vec<String>, StorageError>;

    /// Full content of a font
    async fn get(&self, name: &FontName) -> Result<Vec<u8>, StorageError>;

    /// Store a font, replacing any existing font of the same name
    async fn put(&self, name: &FontName, bytes: Vec<u8>) -> Result<(), StorageError>;

    /// Remove a font
    async fn delete(&self, name: &FontName) -> Result<(), StorageError>;
}
