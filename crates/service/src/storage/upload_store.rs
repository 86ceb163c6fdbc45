use std::path::{Path, PathBuf};

use serde::Serialize;
use tokio::fs;
use tracing::info;
use uuid::Uuid;

use crate::errors::ServiceError;

/// URL prefix under which stored files are served.
pub const PUBLIC_PREFIX: &str = "/api/uploads";

/// Where an upload ended up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredFile {
    pub url: String,
    pub filename: String,
}

/// Flat directory of uploaded files, each named `<uuid>[.<ext>]`.
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Fresh storage name keeping the client's extension, if it has a sane one.
    pub fn stored_name(original: &str) -> String {
        let id = Uuid::new_v4();
        match extension(original) {
            Some(ext) => format!("{}.{}", id, ext),
            None => id.to_string(),
        }
    }

    /// Write `bytes` under a fresh name.
    pub async fn save(&self, original_name: &str, bytes: &[u8]) -> Result<StoredFile, ServiceError> {
        fs::create_dir_all(&self.root).await.map_err(|e| ServiceError::Storage(e.to_string()))?;
        let filename = Self::stored_name(original_name);
        fs::write(self.root.join(&filename), bytes).await.map_err(|e| ServiceError::Storage(e.to_string()))?;
        info!(event = "file_uploaded", filename = %filename, bytes = bytes.len());
        Ok(StoredFile { url: format!("{}/{}", PUBLIC_PREFIX, filename), filename })
    }

    /// Path of an existing stored file. Names that could escape the
    /// directory are treated as missing.
    pub async fn locate(&self, filename: &str) -> Result<PathBuf, ServiceError> {
        if !is_plain_name(filename) {
            return Err(ServiceError::not_found("File"));
        }
        let path = self.root.join(filename);
        match fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => Ok(path),
            _ => Err(ServiceError::not_found("File")),
        }
    }
}

fn extension(original: &str) -> Option<&str> {
    let (_, ext) = original.rsplit_once('.')?;
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext)
}

fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\']) && !name.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> UploadStore {
        UploadStore::new(std::env::temp_dir().join(format!("uploads-{}", Uuid::new_v4())))
    }

    #[test]
    fn keeps_last_extension_only() {
        assert!(UploadStore::stored_name("photo.final.PNG").ends_with(".PNG"));
        assert!(UploadStore::stored_name(".bashrc").ends_with(".bashrc"));
        let bare = UploadStore::stored_name("README");
        assert!(Uuid::parse_str(&bare).is_ok());
        let odd = UploadStore::stored_name("x./../etc");
        assert!(Uuid::parse_str(&odd).is_ok());
    }

    #[tokio::test]
    async fn save_then_read_back() {
        let store = temp_store();
        let saved = store.save("notes.txt", b"hello").await.unwrap();
        assert_eq!(saved.url, format!("/api/uploads/{}", saved.filename));
        assert!(saved.filename.ends_with(".txt"));
        let path = store.locate(&saved.filename).await.unwrap();
        assert_eq!(fs::read(path).await.unwrap(), b"hello");
        fs::remove_dir_all(store.root()).await.unwrap();
    }

    #[tokio::test]
    async fn missing_or_escaping_names_are_not_found() {
        let store = temp_store();
        assert!(matches!(store.locate("nope.png").await, Err(ServiceError::NotFound(_))));
        assert!(matches!(store.locate("../Cargo.toml").await, Err(ServiceError::NotFound(_))));
        assert!(matches!(store.locate("..").await, Err(ServiceError::NotFound(_))));
    }
}
