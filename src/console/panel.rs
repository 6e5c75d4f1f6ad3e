use std::marker::PhantomData;

use uuid::Uuid;

use crate::client::Backend;
use crate::console::collection::Collection;
use crate::console::notify::{Notice, Notifier};

/// Working copy of one backend collection plus its edit slot and creation draft.
///
/// Writes merge the entity the server returns instead of re-fetching the
/// whole list; [`refresh`](Self::refresh) resynchronizes explicitly.
pub struct CrudPanel<C: Collection> {
    items: Vec<C::Entity>,
    editing: Option<C::Entity>,
    draft: C::Input,
    loading: bool,
    _collection: PhantomData<C>,
}

impl<C: Collection> Default for CrudPanel<C> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            editing: None,
            draft: C::Input::default(),
            loading: false,
            _collection: PhantomData,
        }
    }
}

impl<C: Collection> CrudPanel<C> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[C::Entity] {
        &self.items
    }

    pub fn get(&self, id: Uuid) -> Option<&C::Entity> {
        self.items.iter().find(|item| C::id(item) == id)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn draft(&self) -> &C::Input {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut C::Input {
        &mut self.draft
    }

    /// Clone `id` into the edit slot. Returns false if it is not in the list.
    pub fn begin_edit(&mut self, id: Uuid) -> bool {
        self.editing = self.get(id).cloned();
        self.editing.is_some()
    }

    pub fn editing(&self) -> Option<&C::Entity> {
        self.editing.as_ref()
    }

    /// Mutations here touch the clone only, never the list.
    pub fn editing_mut(&mut self) -> Option<&mut C::Entity> {
        self.editing.as_mut()
    }

    /// Close the edit dialog without saving.
    pub fn discard_edit(&mut self) {
        self.editing = None;
    }

    /// Discard the local list and load the server's.
    pub async fn refresh<B: Backend, N: Notifier + ?Sized>(
        &mut self,
        backend: &B,
        notifier: &N,
    ) -> bool {
        self.loading = true;
        let result = C::fetch(backend).await;
        self.loading = false;

        match result {
            Ok(items) => {
                self.items = items;
                true
            }
            Err(e) => {
                notifier.notify(Notice::error("Failed to load data", e.message()));
                false
            }
        }
    }

    /// Submit the draft. The draft is cleared on success and kept on failure.
    pub async fn create<B: Backend, N: Notifier + ?Sized>(
        &mut self,
        backend: &B,
        notifier: &N,
    ) -> bool {
        self.loading = true;
        let result = C::create(backend, &self.draft).await;
        self.loading = false;

        match result {
            Ok(created) => {
                self.merge(created);
                self.draft = C::Input::default();
                notifier.notify(Notice::success(
                    format!("{} added", C::NOUN),
                    "Changes saved successfully",
                ));
                true
            }
            Err(e) => {
                notifier.notify(Notice::error("Failed to save", e.message()));
                false
            }
        }
    }

    /// Submit the edit slot as a full replacement. The slot closes on success.
    pub async fn save_edit<B: Backend, N: Notifier + ?Sized>(
        &mut self,
        backend: &B,
        notifier: &N,
    ) -> bool {
        let Some(edited) = self.editing.as_ref() else {
            return false;
        };
        let id = C::id(edited);
        let input = C::input_of(edited);

        self.loading = true;
        let result = C::replace(backend, id, &input).await;
        self.loading = false;

        match result {
            Ok(updated) => {
                self.merge(updated);
                self.editing = None;
                notifier.notify(Notice::success(
                    format!("{} updated", C::NOUN),
                    "Changes saved successfully",
                ));
                true
            }
            Err(e) => {
                notifier.notify(Notice::error("Failed to save", e.message()));
                false
            }
        }
    }

    /// Delete by id, no confirmation.
    pub async fn delete<B: Backend, N: Notifier + ?Sized>(
        &mut self,
        id: Uuid,
        backend: &B,
        notifier: &N,
    ) -> bool {
        self.loading = true;
        let result = C::remove(backend, id).await;
        self.loading = false;

        match result {
            Ok(()) => {
                self.items.retain(|item| C::id(item) != id);
                if self.editing.as_ref().is_some_and(|e| C::id(e) == id) {
                    self.editing = None;
                }
                notifier.notify(Notice::success(
                    format!("{} deleted", C::NOUN),
                    "The record has been removed",
                ));
                true
            }
            Err(e) => {
                notifier.notify(Notice::error("Failed to delete", e.message()));
                false
            }
        }
    }

    /// Drop all local state, e.g. on logout.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Replace the entity with the same id, or append it.
    fn merge(&mut self, entity: C::Entity) {
        let id = C::id(&entity);
        match self.items.iter_mut().find(|item| C::id(item) == id) {
            Some(slot) => *slot = entity,
            None => self.items.push(entity),
        }
    }
}
