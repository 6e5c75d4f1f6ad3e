use uuid::Uuid;

use crate::client::Backend;
use crate::console::notify::{Notice, Notifier};
use crate::models::UploadedImage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Picking an image replaces the previous pick.
    #[default]
    Single,
    /// Picking toggles membership.
    Multi,
}

pub type SelectionCallback = Box<dyn FnMut(&[UploadedImage]) + Send>;

/// Images whose original filename contains `term`, ignoring case, in list order.
pub fn filter_by_name<'a>(images: &'a [UploadedImage], term: &str) -> Vec<&'a UploadedImage> {
    let needle = term.to_lowercase();
    images
        .iter()
        .filter(|image| image.original_filename.to_lowercase().contains(&needle))
        .collect()
}

/// Searchable, selectable grid over every uploaded image.
pub struct ImageGallery {
    images: Vec<UploadedImage>,
    search: String,
    mode: SelectionMode,
    selected: Vec<Uuid>,
    loading: bool,
    on_select: Option<SelectionCallback>,
}

impl ImageGallery {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            images: Vec::new(),
            search: String::new(),
            mode,
            selected: Vec::new(),
            loading: false,
            on_select: None,
        }
    }

    /// Start with `ids` already selected (e.g. the images of the service being edited).
    pub fn with_selection(mut self, ids: impl IntoIterator<Item = Uuid>) -> Self {
        self.selected = ids.into_iter().collect();
        if self.mode == SelectionMode::Single {
            self.selected.truncate(1);
        }
        self
    }

    pub fn on_select(mut self, callback: impl FnMut(&[UploadedImage]) + Send + 'static) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn images(&self) -> &[UploadedImage] {
        &self.images
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// What the grid shows for the current search term.
    pub fn visible(&self) -> Vec<&UploadedImage> {
        filter_by_name(&self.images, &self.search)
    }

    pub fn is_selected(&self, id: Uuid) -> bool {
        self.selected.contains(&id)
    }

    pub fn selected_ids(&self) -> &[Uuid] {
        &self.selected
    }

    /// Selected records in gallery order.
    pub fn selected_images(&self) -> Vec<UploadedImage> {
        self.images
            .iter()
            .filter(|image| self.selected.contains(&image.id))
            .cloned()
            .collect()
    }

    pub async fn fetch<B: Backend, N: Notifier + ?Sized>(&mut self, backend: &B, notifier: &N) -> bool {
        self.loading = true;
        let result = backend.list_images().await;
        self.loading = false;

        match result {
            Ok(images) => {
                self.images = images;
                true
            }
            Err(e) => {
                notifier.notify(Notice::error("Failed to load images", e.message()));
                false
            }
        }
    }

    /// Apply a click on `id` and report the new selection.
    /// Returns false when `id` is not in the gallery.
    pub fn select(&mut self, id: Uuid) -> bool {
        if !self.images.iter().any(|image| image.id == id) {
            return false;
        }

        match self.mode {
            SelectionMode::Single => {
                self.selected = vec![id];
            }
            SelectionMode::Multi => {
                if let Some(pos) = self.selected.iter().position(|s| *s == id) {
                    self.selected.remove(pos);
                } else {
                    self.selected.push(id);
                }
            }
        }

        self.report();
        true
    }

    /// Delete an image by id, then reload the list. Services or portfolio
    /// items still pointing at its URL are not checked.
    pub async fn delete<B: Backend, N: Notifier + ?Sized>(
        &mut self,
        id: Uuid,
        backend: &B,
        notifier: &N,
    ) -> bool {
        if let Err(e) = backend.delete_image(id).await {
            notifier.notify(Notice::error("Failed to delete image", e.message()));
            return false;
        }
        notifier.notify(Notice::success(
            "Image deleted",
            "The image was deleted successfully",
        ));

        let was_selected = self.is_selected(id);
        self.selected.retain(|s| *s != id);
        self.fetch(backend, notifier).await;
        if was_selected {
            self.report();
        }
        true
    }

    fn report(&mut self) {
        let selection = self.selected_images();
        if let Some(callback) = self.on_select.as_mut() {
            callback(&selection);
        }
    }
}
