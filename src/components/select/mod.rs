mod item;
pub use item::*;

mod menu;
pub use menu::*;

mod state;
pub use state::{SelectItemError, SelectItemsMap, SelectState};
pub(crate) use state::{Step, next_enabled_index};
