//! Display-side components. Each one holds only display copies of items and
//! reports mutations to its owner as a returned signal.

pub mod entry;
pub mod footer;
pub mod input;
pub mod item;
pub mod list;

pub use self::entry::{EntrySignal, EntryView};
pub use self::footer::{FooterSignal, FooterView};
pub use self::input::TextField;
pub use self::item::{ItemSignal, ItemView, ViewKey, template};
pub use self::list::{Gesture, ListSignal, ListView};
