//! Owner of the authoritative item collection.
//!
//! Every mutation follows the same order: change the collection, persist it,
//! then re-render whichever views depend on it.

use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, error, info};

use crate::model::{Item, ItemId};
use crate::store::{KeyValueStore, load_items, save_items};
use crate::views::{
    EntrySignal, EntryView, FooterSignal, FooterView, Gesture, ListSignal, ListView, ViewKey,
};

pub const DEFAULT_NAMESPACE: &str = "todos-checklist";

/// How an edit submitted by id ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Saved,
    Deleted,
}

pub struct Controller<S: KeyValueStore> {
    store: S,
    namespace: String,
    items: Vec<Item>,
    list: ListView,
    entry: EntryView,
    footer: FooterView,
}

impl<S: KeyValueStore> Controller<S> {
    /// Loads the collection under `namespace` and renders every view from it.
    pub fn start(store: S, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        let items = load_items(&store, &namespace);
        info!(namespace = %namespace, items = items.len(), "collection loaded");

        let mut list = ListView::default();
        list.render(Some(items.as_slice()));
        let mut footer = FooterView::default();
        footer.render(Some(items.as_slice()));

        Self {
            store,
            namespace,
            items,
            list,
            entry: EntryView::default(),
            footer,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list(&self) -> &ListView {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListView {
        &mut self.list
    }

    pub fn entry(&self) -> &EntryView {
        &self.entry
    }

    pub fn entry_mut(&mut self) -> &mut EntryView {
        &mut self.entry
    }

    pub fn footer(&self) -> &FooterView {
        &self.footer
    }

    /// A gesture on one item view.
    pub fn list_gesture(&mut self, key: ViewKey, gesture: Gesture) -> Result<()> {
        match self.list.apply(key, gesture) {
            Some(signal) => self.on_list_signal(signal),
            None => Ok(()),
        }
    }

    /// A key typed into the new-item field.
    pub fn entry_key(&mut self, key: KeyEvent) -> Result<Option<Item>> {
        match self.entry.handle_key(key)? {
            Some(EntrySignal::Create(item)) => {
                self.on_create(item.clone())?;
                Ok(Some(item))
            }
            None => Ok(None),
        }
    }

    /// The clear-completed control was activated. Returns how many items
    /// were removed.
    pub fn clear_gesture(&mut self) -> Result<usize> {
        match self.footer.request_clear() {
            Some(FooterSignal::Clear) => self.on_clear(),
            None => Ok(0),
        }
    }

    fn on_list_signal(&mut self, signal: ListSignal) -> Result<()> {
        match signal {
            ListSignal::Updated(item) => self.on_update(item),
            ListSignal::Deleted(item) => self.on_delete(item),
        }
    }

    fn on_update(&mut self, item: Item) -> Result<()> {
        debug!(id = %item.id, completed = item.completed, "item updated");
        if let Some(slot) = self.items.iter_mut().find(|t| t.id == item.id) {
            *slot = item;
        }
        let saved = self.save();
        self.footer.render(Some(self.items.as_slice()));
        saved
    }

    fn on_delete(&mut self, item: Item) -> Result<()> {
        let mut saved = Ok(());
        if let Some(idx) = self.items.iter().position(|t| t.id == item.id) {
            debug!(id = %item.id, "item deleted");
            self.items.remove(idx);
            saved = self.save();
        }
        self.footer.render(Some(self.items.as_slice()));
        saved
    }

    fn on_create(&mut self, item: Item) -> Result<()> {
        debug!(id = %item.id, "item created");
        self.items.push(item.clone());
        let saved = self.save();
        self.list.add_item(item);
        self.footer.render(Some(self.items.as_slice()));
        saved
    }

    fn on_clear(&mut self) -> Result<usize> {
        let before = self.items.len();
        self.items.retain(|item| !item.completed);
        let removed = before - self.items.len();
        debug!(removed, "cleared completed items");
        let saved = self.save();
        self.list.render(Some(self.items.as_slice()));
        self.footer.render(Some(self.items.as_slice()));
        saved.map(|()| removed)
    }

    fn save(&mut self) -> Result<()> {
        save_items(&mut self.store, &self.namespace, &self.items).inspect_err(|err| {
            error!(namespace = %self.namespace, error = %format!("{:#}", err), "save failed")
        })
    }

    // Id-addressed operations for the command line. Each one drives the same
    // view gestures the terminal UI uses.

    /// Resolves an exact id or a unique id prefix.
    pub fn resolve_id(&self, prefix: &str) -> Result<ItemId> {
        if let Some(item) = self.items.iter().find(|item| item.id.as_str() == prefix) {
            return Ok(item.id.clone());
        }
        let matches: Vec<&Item> = self
            .items
            .iter()
            .filter(|item| !prefix.is_empty() && item.id.as_str().starts_with(prefix))
            .collect();
        match matches.as_slice() {
            [item] => Ok(item.id.clone()),
            [] => anyhow::bail!("no item matches id {:?}", prefix),
            many => anyhow::bail!("id prefix {:?} is ambiguous ({} items)", prefix, many.len()),
        }
    }

    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    fn key_for(&self, id: &ItemId) -> Result<ViewKey> {
        self.list
            .key_for(id)
            .with_context(|| format!("no item with id {}", id))
    }

    /// Creates an item from `title` as if it were typed and confirmed.
    pub fn create(&mut self, title: &str) -> Result<Option<Item>> {
        self.entry.field_mut().set(title.to_string());
        self.entry_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
    }

    pub fn toggle(&mut self, id: &ItemId) -> Result<()> {
        let key = self.key_for(id)?;
        self.list_gesture(key, Gesture::Toggle)
    }

    /// Replaces the title; blank text deletes the item instead.
    pub fn edit(&mut self, id: &ItemId, title: &str) -> Result<EditOutcome> {
        let key = self.key_for(id)?;
        self.list_gesture(key, Gesture::BeginEdit)?;
        if let Some(field) = self.list.edit_field_mut(key) {
            field.set(title.to_string());
        }
        self.list_gesture(
            key,
            Gesture::EditKey(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
        )?;
        if self.item(id).is_some() {
            Ok(EditOutcome::Saved)
        } else {
            Ok(EditOutcome::Deleted)
        }
    }

    pub fn delete(&mut self, id: &ItemId) -> Result<()> {
        let key = self.key_for(id)?;
        self.list_gesture(key, Gesture::Delete)
    }

    pub fn clear_completed(&mut self) -> Result<usize> {
        self.clear_gesture()
    }
}
