use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Only image files are allowed (got {0})")]
    NotAnImage(String),
    #[error("Failed to store file: {0}")]
    Io(#[from] std::io::Error),
}

/// A file written to the upload directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    pub id: Uuid,
    /// Name on disk, `<id>.<ext>`.
    pub filename: String,
    pub size: i64,
}

/// Flat directory of uploaded files, served as-is under `/uploads`.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `bytes` under a fresh unique name. Only `image/*` content is accepted.
    pub async fn save(
        &self,
        original_filename: &str,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<StoredFile, StorageError> {
        let content_type = content_type.unwrap_or("application/octet-stream");
        if !content_type.starts_with("image/") {
            return Err(StorageError::NotAnImage(content_type.to_string()));
        }

        tokio::fs::create_dir_all(&self.dir).await?;

        let id = Uuid::new_v4();
        let filename = format!("{id}.{}", extension_for(original_filename, content_type));
        tokio::fs::write(self.dir.join(&filename), bytes).await?;

        tracing::info!("Stored upload {original_filename:?} as {filename} ({} bytes)", bytes.len());

        Ok(StoredFile {
            id,
            filename,
            size: bytes.len() as i64,
        })
    }

    /// Remove a stored file. A file that is already gone is not an error.
    pub async fn remove(&self, filename: &str) -> Result<(), StorageError> {
        match tokio::fs::remove_file(self.dir.join(filename)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn extension_for(original_filename: &str, content_type: &str) -> String {
    let from_name = Path::new(original_filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(str::to_ascii_lowercase);

    from_name.unwrap_or_else(|| {
        match content_type {
            "image/jpeg" => "jpg",
            "image/png" => "png",
            "image/gif" => "gif",
            "image/webp" => "webp",
            "image/svg+xml" => "svg",
            _ => "bin",
        }
        .to_string()
    })
}
