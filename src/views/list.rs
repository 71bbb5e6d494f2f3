//! Ordered collection of item views mirroring the controller's collection.

use crossterm::event::KeyEvent;
use ratatui::text::Line;

use crate::model::{Item, ItemId};

use super::input::TextField;
use super::item::{ItemSignal, ItemView, ViewKey};

/// Forwarded to the list's owner after a child view mutated its item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListSignal {
    Updated(Item),
    Deleted(Item),
}

/// A user gesture aimed at one item view.
#[derive(Clone, Debug)]
pub enum Gesture {
    Toggle,
    BeginEdit,
    EditKey(KeyEvent),
    Blur,
    Delete,
}

#[derive(Debug, Default)]
pub struct ListView {
    views: Vec<ItemView>,
    next_key: u64,
    selected: usize,
}

impl ListView {
    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn views(&self) -> &[ItemView] {
        &self.views
    }

    /// Display copies of the items, in render order.
    pub fn items(&self) -> Vec<Item> {
        self.views.iter().map(|v| v.item().clone()).collect()
    }

    pub fn rows(&self) -> Vec<Line<'static>> {
        self.views.iter().map(|v| v.row().clone()).collect()
    }

    pub fn key_for(&self, id: &ItemId) -> Option<ViewKey> {
        self.index_by_id(id).map(|idx| self.views[idx].key())
    }

    /// Appends a view for `item` at the end of the list.
    pub fn add_item(&mut self, item: Item) -> ViewKey {
        let key = ViewKey(self.next_key);
        self.next_key += 1;
        self.views.push(ItemView::new(key, item));
        key
    }

    /// Drops the view showing `item`, if there is one.
    pub fn remove_item(&mut self, item: &Item) {
        if let Some(idx) = self.index_by_id(&item.id) {
            self.views.remove(idx);
            self.clamp_selection();
        }
    }

    /// With a collection: discard every view and rebuild one per item.
    /// Without: each existing view re-renders from the item it holds.
    pub fn render(&mut self, items: Option<&[Item]>) {
        match items {
            Some(items) => {
                self.views.clear();
                for item in items {
                    self.add_item(item.clone());
                }
                self.clamp_selection();
            }
            None => {
                for view in &mut self.views {
                    view.render(None);
                }
            }
        }
    }

    /// Routes a gesture to the view with `key` and forwards whatever it
    /// signals. Unknown keys are ignored.
    pub fn apply(&mut self, key: ViewKey, gesture: Gesture) -> Option<ListSignal> {
        let view = self.views.iter_mut().find(|v| v.key() == key)?;
        let signal = match gesture {
            Gesture::Toggle => Some(view.toggle()),
            Gesture::BeginEdit => {
                view.begin_edit();
                None
            }
            Gesture::EditKey(k) => view.edit_key(k),
            Gesture::Blur => view.blur(),
            Gesture::Delete => Some(view.delete()),
        }?;

        match signal {
            ItemSignal::Updated(_) => self.on_item_update(key),
            ItemSignal::Deleted(_) => self.on_item_delete(key),
        }
    }

    fn on_item_update(&self, key: ViewKey) -> Option<ListSignal> {
        let idx = self.index_by_key(key)?;
        Some(ListSignal::Updated(self.views[idx].item().clone()))
    }

    fn on_item_delete(&mut self, key: ViewKey) -> Option<ListSignal> {
        let idx = self.index_by_key(key)?;
        let view = self.views.remove(idx);
        self.clamp_selection();
        Some(ListSignal::Deleted(view.into_item()))
    }

    /// The view currently in edit mode, if any.
    pub fn editing(&self) -> Option<ViewKey> {
        self.views.iter().find(|v| v.is_editing()).map(|v| v.key())
    }

    pub fn edit_field_mut(&mut self, key: ViewKey) -> Option<&mut TextField> {
        self.views
            .iter_mut()
            .find(|v| v.key() == key)
            .and_then(|v| v.edit_field_mut())
    }

    pub fn selected_index(&self) -> Option<usize> {
        if self.views.is_empty() {
            None
        } else {
            Some(self.selected.min(self.views.len() - 1))
        }
    }

    pub fn selected_key(&self) -> Option<ViewKey> {
        self.selected_index().map(|idx| self.views[idx].key())
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.views.is_empty() {
            self.selected = 0;
            return;
        }
        let max = self.views.len().saturating_sub(1);
        self.selected = (self.selected + 1).min(max);
    }

    pub fn select_last(&mut self) {
        self.selected = self.views.len().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.views.len().saturating_sub(1));
    }

    fn index_by_key(&self, key: ViewKey) -> Option<usize> {
        self.views.iter().position(|v| v.key() == key)
    }

    fn index_by_id(&self, id: &ItemId) -> Option<usize> {
        self.views.iter().position(|v| &v.item().id == id)
    }
}

#[cfg(test)]
#[path = "../tests/views/list_tests.rs"]
mod tests;
