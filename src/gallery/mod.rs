//! Image picking for the editors: an upload control plus a searchable gallery.

pub mod grid;
pub mod upload;

use uuid::Uuid;

use crate::client::Backend;
use crate::console::notify::Notifier;
use crate::models::UploadedImage;

use grid::ImageGallery;
use upload::{ImageUpload, UploadError, UploadFile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManagerTab {
    #[default]
    Gallery,
    Upload,
}

/// Upload and gallery behind one dialog.
pub struct ImageManager {
    upload: ImageUpload,
    gallery: ImageGallery,
    tab: ManagerTab,
    open: bool,
}

impl ImageManager {
    pub fn new(upload: ImageUpload, gallery: ImageGallery) -> Self {
        Self {
            upload,
            gallery,
            tab: ManagerTab::Gallery,
            open: false,
        }
    }

    pub fn upload(&self) -> &ImageUpload {
        &self.upload
    }

    pub fn gallery(&self) -> &ImageGallery {
        &self.gallery
    }

    pub fn gallery_mut(&mut self) -> &mut ImageGallery {
        &mut self.gallery
    }

    pub fn tab(&self) -> ManagerTab {
        self.tab
    }

    pub fn set_tab(&mut self, tab: ManagerTab) {
        self.tab = tab;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the dialog on the gallery tab and load the images.
    pub async fn open<B: Backend, N: Notifier + ?Sized>(&mut self, backend: &B, notifier: &N) {
        self.open = true;
        self.tab = ManagerTab::Gallery;
        self.gallery.fetch(backend, notifier).await;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Upload a file; on success switch back to the gallery, which now lists it.
    pub async fn upload_file<B: Backend, N: Notifier + ?Sized>(
        &mut self,
        file: UploadFile,
        backend: &B,
        notifier: &N,
    ) -> Result<UploadedImage, UploadError> {
        let image = self.upload.submit(file, backend, notifier).await?;
        self.tab = ManagerTab::Gallery;
        self.gallery.fetch(backend, notifier).await;
        Ok(image)
    }

    /// Pick an image and close the dialog.
    pub fn pick(&mut self, id: Uuid) -> bool {
        let picked = self.gallery.select(id);
        if picked {
            self.open = false;
        }
        picked
    }
}

/// Human-readable byte count: `0 Bytes`, `512 Bytes`, `1.5 KB`, `2 MB`.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded} {}", UNITS[unit])
}
