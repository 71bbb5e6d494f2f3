use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::model::{Item, new_id};

use super::input::TextField;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntrySignal {
    Create(Item),
}

/// The "what needs to be done?" field.
#[derive(Debug, Default)]
pub struct EntryView {
    field: TextField,
}

impl EntryView {
    pub fn field(&self) -> &TextField {
        &self.field
    }

    pub fn field_mut(&mut self) -> &mut TextField {
        &mut self.field
    }

    /// Enter confirms the entry; any other key only edits the field.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<EntrySignal>> {
        if key.code == KeyCode::Enter {
            return self.confirm();
        }
        self.field.apply_edit_key(key);
        Ok(None)
    }

    /// Turns the trimmed field text into a new active item and clears the
    /// field. Blank text is ignored and left in place.
    pub fn confirm(&mut self) -> Result<Option<EntrySignal>> {
        let title = self.field.value().trim();
        if title.is_empty() {
            return Ok(None);
        }
        let item = Item::new(new_id()?, title);
        self.field.clear();
        Ok(Some(EntrySignal::Create(item)))
    }
}
