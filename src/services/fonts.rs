//! Font service
//!
//! Validates client-supplied names, calls the storage backend and maps its
//! outcomes onto [`AppError`].

use crate::error::AppError;
use crate::storage::{FontName, FontStorage, StorageError};
use std::sync::Arc;
use tracing::{info, warn};

/// Font management operations over an injected storage backend
#[derive(Clone)]
pub struct FontService {
    storage: Arc<dyn FontStorage>,
}

impl FontService {
    /// Create a service over the given storage
    pub fn new(storage: Arc<dyn FontStorage>) -> Self {
        Self { storage }
    }

    /// Store a font, replacing any font with the same name
    ///
    /// # Returns
    /// * `Ok(FontName)` - Name the font was stored under
    /// * `Err(AppError)` - Name is invalid or the write failed
    pub async fn upload(&self, raw_name: &str, bytes: Vec<u8>) -> Result<FontName, AppError> {
        let name = parse_name(raw_name)?;
        let size = bytes.len();

        self.storage.put(&name, bytes).await.map_err(|e| match e {
            StorageError::InvalidName(_) | StorageError::OutsideRoot(_) => {
                AppError::InvalidFontName(name.to_string())
            }
            other => AppError::Storage(other),
        })?;

        info!(font = %name, bytes = size, "Font uploaded");
        Ok(name)
    }

    /// Names of all stored fonts, sorted
    pub async fn list(&self) -> Result<Vec<String>, AppError> {
        self.storage.list().await.map_err(|e| match e {
            StorageError::DirectoryNotFound => AppError::FontsDirectoryNotFound,
            other => AppError::ListFailed(other),
        })
    }

    /// Content of a stored font
    pub async fn retrieve(&self, raw_name: &str) -> Result<(FontName, Vec<u8>), AppError> {
        let name = parse_name(raw_name)?;

        match self.storage.get(&name).await {
            Ok(bytes) => Ok((name, bytes)),
            Err(StorageError::NotFound(_)) | Err(StorageError::DirectoryNotFound) => {
                Err(AppError::FontNotFound(name.to_string()))
            }
            Err(StorageError::InvalidName(_)) | Err(StorageError::OutsideRoot(_)) => {
                warn!(font = %name, "Refused to serve font resolving outside the font directory");
                Err(AppError::InvalidFontName(name.to_string()))
            }
            Err(e) => Err(AppError::Storage(e)),
        }
    }

    /// Remove a stored font
    ///
    /// Every storage failure is reported as [`AppError::FontNotFound`]; the
    /// underlying error is logged.
    pub async fn delete(&self, raw_name: &str) -> Result<FontName, AppError> {
        let name = parse_name(raw_name)?;

        if let Err(e) = self.storage.delete(&name).await {
            warn!(font = %name, error = %e, "Failed to delete font");
            return Err(AppError::FontNotFound(name.to_string()));
        }

        info!(font = %name, "Font deleted");
        Ok(name)
    }
}

fn parse_name(raw: &str) -> Result<FontName, AppError> {
    FontName::parse(raw).map_err(|_| {
        warn!(font = %raw.escape_debug(), "Rejected font name");
        AppError::InvalidFontName(raw.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn create_test_service() -> FontService {
        FontService::new(Arc::new(MemoryStorage::new()))
    }

    #[tokio::test]
    async fn test_upload_then_list() {
        let service = create_test_service();
        service.upload("a.ttf", b"font".to_vec()).await.unwrap();

        let fonts = service.list().await.unwrap();
        assert!(fonts.contains(&"a.ttf".to_string()));
    }

    #[tokio::test]
    async fn test_second_upload_wins() {
        let service = create_test_service();
        service.upload("a.ttf", b"first".to_vec()).await.unwrap();
        service.upload("a.ttf", b"second".to_vec()).await.unwrap();

        let (_, bytes) = service.retrieve("a.ttf").await.unwrap();
        assert_eq!(bytes, b"second");
    }

    #[tokio::test]
    async fn test_round_trip_preserves_bytes() {
        let service = create_test_service();
        let cases: Vec<(&str, Vec<u8>)> = vec![
            ("empty.woff", Vec::new()),
            ("binary.woff2", (0..=255u8).collect()),
            ("Noto Sans.otf", vec![0u8; 4096]),
            ("no-extension", b"raw".to_vec()),
        ];

        for (name, bytes) in cases {
            service.upload(name, bytes.clone()).await.unwrap();
            let (stored, retrieved) = service.retrieve(name).await.unwrap();
            assert_eq!(stored.as_str(), name);
            assert_eq!(retrieved, bytes, "round trip failed for {}", name);
        }
    }

    #[tokio::test]
    async fn test_delete_never_uploaded() {
        let service = create_test_service();
        match service.delete("ghost.ttf").await {
            Err(AppError::FontNotFound(name)) => assert_eq!(name, "ghost.ttf"),
            other => panic!("Expected FontNotFound error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_removes_from_list() {
        let service = create_test_service();
        service.upload("a.ttf", b"a".to_vec()).await.unwrap();
        service.upload("b.otf", b"b".to_vec()).await.unwrap();

        service.delete("a.ttf").await.unwrap();

        assert_eq!(service.list().await.unwrap(), vec!["b.otf"]);
    }

    #[tokio::test]
    async fn test_list_without_directory() {
        let service = create_test_service();
        assert!(matches!(
            service.list().await,
            Err(AppError::FontsDirectoryNotFound)
        ));
    }

    #[tokio::test]
    async fn test_traversal_rejected_everywhere() {
        let service = create_test_service();
        let bad = "../../etc/passwd";

        assert!(matches!(
            service.retrieve(bad).await,
            Err(AppError::InvalidFontName(_))
        ));
        assert!(matches!(
            service.delete(bad).await,
            Err(AppError::InvalidFontName(_))
        ));
        assert!(matches!(
            service.upload(bad, b"x".to_vec()).await,
            Err(AppError::InvalidFontName(_))
        ));
    }
}
