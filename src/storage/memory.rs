//! In-memory font storage

use super::name::is_font_file;
use super::{FontName, FontStorage, StorageError};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Font storage held in memory
///
/// `None` stands for a font directory that has never been created, so the
/// first `put` behaves like the lazy directory creation of [`DiskStorage`].
///
/// [`DiskStorage`]: super::DiskStorage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    fonts: RwLock<Option<BTreeMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    /// Create a store whose directory does not exist yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with an existing, empty directory
    pub fn with_empty_directory() -> Self {
        Self {
            fonts: RwLock::new(Some(BTreeMap::new())),
        }
    }
}

#[async_trait]
impl FontStorage for MemoryStorage {
    async fn list(&self) -> Result<Vec<String>, StorageError> {
        let fonts = self.fonts.read().await;
        let fonts = fonts.as_ref().ok_or(StorageError::DirectoryNotFound)?;
        Ok(fonts
            .keys()
            .filter(|name| is_font_file(name))
            .cloned()
            .collect())
    }

    async fn get(&self, name: &FontName) -> Result<Vec<u8>, StorageError> {
        self.fonts
            .read()
            .await
            .as_ref()
            .and_then(|fonts| fonts.get(name.as_str()))
            .cloned()
            .ok_or_else(|| StorageError::NotFound(name.to_string()))
    }

    async fn put(&self, name: &FontName, bytes: Vec<u8>) -> Result<(), StorageError> {
        self.fonts
            .write()
            .await
            .get_or_insert_with(BTreeMap::new)
            .insert(name.as_str().to_string(), bytes);
        Ok(())
    }

    async fn delete(&self, name: &FontName) -> Result<(), StorageError> {
        self.fonts
            .write()
            .await
            .as_mut()
            .and_then(|fonts| fonts.remove(name.as_str()))
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> FontName {
        FontName::parse(raw).expect("valid font name")
    }

    #[tokio::test]
    async fn test_list_before_first_put() {
        let storage = MemoryStorage::new();
        assert!(matches!(
            storage.list().await,
            Err(StorageError::DirectoryNotFound)
        ));

        let storage = MemoryStorage::with_empty_directory();
        assert!(storage.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_put_list_get_delete() {
        let storage = MemoryStorage::new();
        storage.put(&name("b.otf"), b"b".to_vec()).await.unwrap();
        storage.put(&name("a.ttf"), b"a".to_vec()).await.unwrap();
        storage.put(&name("notes.txt"), b"n".to_vec()).await.unwrap();

        assert_eq!(storage.list().await.unwrap(), vec!["a.ttf", "b.otf"]);
        assert_eq!(storage.get(&name("a.ttf")).await.unwrap(), b"a");

        storage.delete(&name("a.ttf")).await.unwrap();
        assert_eq!(storage.list().await.unwrap(), vec!["b.otf"]);
        assert!(matches!(
            storage.get(&name("a.ttf")).await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_without_directory() {
        let storage = MemoryStorage::new();
        match storage.delete(&name("a.ttf")).await {
            Err(StorageError::NotFound(n)) => assert_eq!(n, "a.ttf"),
            other => panic!("Expected NotFound, got: {:?}", other),
        }
    }
}
