mod shared;

mod state;
pub use state::*;

mod layout;
pub use layout::*;

mod text;
pub use text::*;

mod surface;
pub use surface::*;

mod spinner;
pub use spinner::*;

mod button;
pub use button::*;

mod switch;
pub use switch::*;

mod checkbox;
pub use checkbox::*;

mod input;
pub use input::*;

mod search_input;
pub use search_input::*;

pub mod select;

mod filter;
pub use filter::*;

mod combobox;
pub use combobox::*;

mod command;
pub use command::*;

mod dialog;
pub use dialog::*;

mod sheet;
pub use sheet::*;

mod popover;
pub use popover::*;

mod tooltip;
pub use tooltip::*;

mod tabs;
pub use tabs::*;

mod calendar;
pub use calendar::*;

mod pagination;
pub use pagination::*;

mod sortable;
pub use sortable::*;

mod emoji_picker;
pub use emoji_picker::*;

mod badge;
pub use badge::*;

mod avatar;
pub use avatar::*;

mod card;
pub use card::*;

mod separator;
pub use separator::*;

mod progress;
pub use progress::*;

mod skeleton;
pub use skeleton::*;
