use crate::client::Backend;
use crate::console::notify::{Notice, Notifier};
use crate::models::Contacts;

/// The singleton company record, edited in place.
#[derive(Debug, Default)]
pub struct ContactsPanel {
    record: Option<Contacts>,
    loading: bool,
}

impl ContactsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` until the first successful load.
    pub fn record(&self) -> Option<&Contacts> {
        self.record.as_ref()
    }

    pub fn record_mut(&mut self) -> Option<&mut Contacts> {
        self.record.as_mut()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub async fn load<B: Backend, N: Notifier + ?Sized>(&mut self, backend: &B, notifier: &N) -> bool {
        self.loading = true;
        let result = backend.get_contacts().await;
        self.loading = false;

        match result {
            Ok(contacts) => {
                self.record = Some(contacts);
                true
            }
            Err(e) => {
                notifier.notify(Notice::error("Failed to load contacts", e.message()));
                false
            }
        }
    }

    /// Submit the whole record as a replacement.
    pub async fn save<B: Backend, N: Notifier + ?Sized>(&mut self, backend: &B, notifier: &N) -> bool {
        let Some(record) = self.record.as_ref() else {
            notifier.notify(Notice::error("Failed to save", "Contacts are not loaded yet"));
            return false;
        };

        self.loading = true;
        let result = backend.update_contacts(record).await;
        self.loading = false;

        match result {
            Ok(saved) => {
                self.record = Some(saved);
                notifier.notify(Notice::success("Contacts updated", "Changes saved successfully"));
                true
            }
            Err(e) => {
                notifier.notify(Notice::error("Failed to save", e.message()));
                false
            }
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
