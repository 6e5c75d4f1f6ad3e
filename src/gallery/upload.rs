use std::path::Path;

use thiserror::Error;

use crate::client::{ApiError, Backend};
use crate::config::DEFAULT_MAX_UPLOAD_BYTES;
use crate::console::notify::{Notice, Notifier};
use crate::models::UploadedImage;

/// A file picked or dropped by the user, held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Read a file from disk, guessing its type from the extension.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let content_type = content_type_for(&file_name).to_string();
        Ok(Self {
            file_name,
            content_type,
            bytes,
        })
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

fn content_type_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("File size exceeds the limit ({size} > {limit} bytes)")]
    TooLarge { size: u64, limit: u64 },
    #[error("{0}")]
    Rejected(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type UploadedCallback = Box<dyn FnMut(&UploadedImage) + Send>;

/// Single-file upload control with a local preview.
pub struct ImageUpload {
    max_bytes: u64,
    preview: Option<UploadFile>,
    uploading: bool,
    on_uploaded: Option<UploadedCallback>,
}

impl Default for ImageUpload {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UPLOAD_BYTES)
    }
}

impl ImageUpload {
    pub fn new(max_bytes: u64) -> Self {
        Self {
            max_bytes,
            preview: None,
            uploading: false,
            on_uploaded: None,
        }
    }

    pub fn on_uploaded(mut self, callback: impl FnMut(&UploadedImage) + Send + 'static) -> Self {
        self.on_uploaded = Some(Box::new(callback));
        self
    }

    pub fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    pub fn preview(&self) -> Option<&UploadFile> {
        self.preview.as_ref()
    }

    pub fn clear_preview(&mut self) {
        self.preview = None;
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Files up to and including the ceiling are accepted.
    pub fn check_size(&self, file: &UploadFile) -> Result<(), UploadError> {
        if file.size() > self.max_bytes {
            return Err(UploadError::TooLarge {
                size: file.size(),
                limit: self.max_bytes,
            });
        }
        Ok(())
    }

    /// Validate, preview, then upload `file`.
    ///
    /// Oversized files never reach the backend. The preview is cleared only
    /// when the upload succeeds.
    pub async fn submit<B: Backend, N: Notifier + ?Sized>(
        &mut self,
        file: UploadFile,
        backend: &B,
        notifier: &N,
    ) -> Result<UploadedImage, UploadError> {
        if let Err(e) = self.check_size(&file) {
            notifier.notify(Notice::error("Upload failed", e.to_string()));
            return Err(e);
        }

        let file: &UploadFile = self.preview.insert(file);

        self.uploading = true;
        let result = backend.upload_image(file).await;
        self.uploading = false;

        match result {
            Ok(response) if response.success => {
                let Some(image) = response.image else {
                    notifier.notify(Notice::error("Upload failed", "Server returned no image"));
                    return Err(UploadError::Rejected("Server returned no image".into()));
                };
                notifier.notify(Notice::success("Uploaded", response.message));
                if let Some(callback) = self.on_uploaded.as_mut() {
                    callback(&image);
                }
                self.preview = None;
                Ok(image)
            }
            Ok(response) => {
                notifier.notify(Notice::error("Upload failed", response.message.clone()));
                Err(UploadError::Rejected(response.message))
            }
            Err(e) => {
                notifier.notify(Notice::error("Upload failed", e.message()));
                Err(e.into())
            }
        }
    }
}
