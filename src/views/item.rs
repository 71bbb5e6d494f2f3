//! A single rendered item and its edit state machine.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::model::Item;

use super::input::TextField;

/// Stable identity of one item view, allocated by the owning list. Unlike the
/// item id it also tells apart two views created for the same item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewKey(pub u64);

/// What an item view reports to its owner after a local mutation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemSignal {
    Updated(Item),
    Deleted(Item),
}

#[derive(Clone, Debug, Default)]
enum EditState {
    #[default]
    Viewing,
    Editing {
        field: TextField,
        aborted: bool,
    },
}

/// Renders an item as a terminal row: a checkbox marker then the title.
/// Completed items are dimmed and crossed out.
pub fn template(item: &Item) -> Line<'static> {
    let (marker, title_style) = if item.completed {
        (
            "[x] ",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        ("[ ] ", Style::default())
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(Color::Green)),
        Span::styled(item.title.clone(), title_style),
    ])
}

#[derive(Clone, Debug)]
pub struct ItemView {
    key: ViewKey,
    item: Item,
    row: Line<'static>,
    state: EditState,
}

impl ItemView {
    pub fn new(key: ViewKey, item: Item) -> Self {
        let row = template(&item);
        Self {
            key,
            item,
            row,
            state: EditState::Viewing,
        }
    }

    pub fn key(&self) -> ViewKey {
        self.key
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn into_item(self) -> Item {
        self.item
    }

    pub fn row(&self) -> &Line<'static> {
        &self.row
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    pub fn edit_field(&self) -> Option<&TextField> {
        match &self.state {
            EditState::Editing { field, .. } => Some(field),
            EditState::Viewing => None,
        }
    }

    pub fn edit_field_mut(&mut self) -> Option<&mut TextField> {
        match &mut self.state {
            EditState::Editing { field, .. } => Some(field),
            EditState::Viewing => None,
        }
    }

    /// Re-renders the row, optionally swapping in a replacement item first.
    pub fn render(&mut self, item: Option<Item>) {
        if let Some(item) = item {
            self.item = item;
        }
        self.row = template(&self.item);
    }

    /// Enters edit mode with the field seeded from the current title.
    pub fn begin_edit(&mut self) {
        let mut field = TextField::default();
        field.set(self.item.title.clone());
        self.state = EditState::Editing {
            field,
            aborted: false,
        };
    }

    /// Feeds a key to the edit field. Enter commits, Esc abandons the edit;
    /// both end editing through [`ItemView::blur`].
    pub fn edit_key(&mut self, key: KeyEvent) -> Option<ItemSignal> {
        let EditState::Editing { field, aborted } = &mut self.state else {
            return None;
        };
        match key.code {
            KeyCode::Enter => self.blur(),
            KeyCode::Esc => {
                *aborted = true;
                self.blur()
            }
            _ => {
                field.apply_edit_key(key);
                None
            }
        }
    }

    /// The edit field lost focus. Unless the edit was aborted, the trimmed
    /// text becomes the new title; blank text deletes the item.
    pub fn blur(&mut self) -> Option<ItemSignal> {
        let EditState::Editing { field, aborted } = std::mem::take(&mut self.state) else {
            return None;
        };
        if aborted {
            return None;
        }

        let title = field.value().trim();
        if title.is_empty() {
            return Some(ItemSignal::Deleted(self.item.clone()));
        }
        self.item.title = title.to_string();
        self.render(None);
        Some(ItemSignal::Updated(self.item.clone()))
    }

    pub fn toggle(&mut self) -> ItemSignal {
        self.item.completed = !self.item.completed;
        self.render(None);
        ItemSignal::Updated(self.item.clone())
    }

    pub fn delete(&mut self) -> ItemSignal {
        self.state = EditState::Viewing;
        ItemSignal::Deleted(self.item.clone())
    }
}
