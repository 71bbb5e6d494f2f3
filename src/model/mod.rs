mod ids;
mod item;

pub use self::ids::{ItemId, new_id};
pub use self::item::{Item, pluralize, remaining_count};
