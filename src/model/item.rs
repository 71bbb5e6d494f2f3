use serde::{Deserialize, Serialize};

use super::ItemId;

/// One task. Serialized as `{"id", "title", "completed"}`; all three fields
/// are required when reading a persisted collection back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub completed: bool,
}

impl Item {
    pub fn new(id: ItemId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }
}

/// Number of items not yet completed.
pub fn remaining_count(items: &[Item]) -> usize {
    items.iter().filter(|item| !item.completed).count()
}

pub fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
