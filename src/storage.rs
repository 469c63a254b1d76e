use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::config::{Retention, StorageConfig};
use crate::models::UploadMeta;

/// Working directory where every upload is persisted before dispatch
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
    retention: Retention,
}

impl UploadStore {
    /// Open the store, creating the working directory if absent
    pub async fn open(config: &StorageConfig) -> Result<Self> {
        tokio::fs::create_dir_all(&config.upload_dir)
            .await
            .with_context(|| {
                format!(
                    "failed to create upload directory {}",
                    config.upload_dir.display()
                )
            })?;

        Ok(Self {
            dir: config.upload_dir.clone(),
            retention: config.retention,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Persist uploaded bytes under the client-supplied filename. This always
    /// happens before dispatch, whether or not the type is supported.
    ///
    /// Only the final path component of the name is used, so a crafted
    /// filename cannot escape the working directory. Concurrent uploads with
    /// the same name race with last-write-wins.
    pub async fn save(&self, filename: &str, bytes: &[u8]) -> Result<UploadMeta> {
        let name = Path::new(filename)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| filename.to_string());

        let path = self.dir.join(&name);
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("failed to write upload {}", path.display()))?;

        Ok(UploadMeta::new(name, bytes.len() as u64, path))
    }

    /// Apply the retention policy once a request has produced its response
    pub async fn finish(&self, path: &Path) {
        if self.retention == Retention::DeleteAfterProcessing {
            if let Err(err) = tokio::fs::remove_file(path).await {
                warn!(path = %path.display(), error = %err, "failed to remove processed upload");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_config(dir: &Path, retention: Retention) -> StorageConfig {
        StorageConfig {
            upload_dir: dir.to_path_buf(),
            retention,
        }
    }

    #[tokio::test]
    async fn test_open_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("uploads");
        assert!(!dir.exists());

        let store = UploadStore::open(&store_config(&dir, Retention::Keep))
            .await
            .unwrap();

        assert!(dir.is_dir());
        assert_eq!(store.dir(), dir.as_path());
    }

    #[tokio::test]
    async fn test_save_writes_under_original_name() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UploadStore::open(&store_config(tmp.path(), Retention::Keep))
            .await
            .unwrap();

        let meta = store.save("notes.txt", b"hello").await.unwrap();

        assert_eq!(meta.filename, "notes.txt");
        assert_eq!(meta.size, 5);
        assert_eq!(meta.path, tmp.path().join("notes.txt"));
        assert_eq!(std::fs::read(&meta.path).unwrap(), b"hello");
    }

    #[tokio::test]
    async fn test_save_strips_path_components() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UploadStore::open(&store_config(tmp.path(), Retention::Keep))
            .await
            .unwrap();

        let meta = store.save("../../etc/passwd.pdf", b"x").await.unwrap();

        assert_eq!(meta.path, tmp.path().join("passwd.pdf"));
        assert!(meta.path.exists());
    }

    #[tokio::test]
    async fn test_finish_keep_retains_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UploadStore::open(&store_config(tmp.path(), Retention::Keep))
            .await
            .unwrap();

        let meta = store.save("report.pdf", b"pdf").await.unwrap();
        store.finish(&meta.path).await;

        assert!(meta.path.exists());
    }

    #[tokio::test]
    async fn test_finish_delete_removes_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = UploadStore::open(&store_config(tmp.path(), Retention::DeleteAfterProcessing))
            .await
            .unwrap();

        let meta = store.save("report.pdf", b"pdf").await.unwrap();
        store.finish(&meta.path).await;

        assert!(!meta.path.exists());
    }
}
