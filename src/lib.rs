//! Design tokens, a theme resolver and pure style builders for a
//! cross-platform component kit.
//!
//! Every builder takes component props plus a [`theme::Theme`] and returns a
//! [`style::Style`] that the rendering layer applies. Interactive pieces
//! (select navigation, filtering, calendars, pagination, drag to reorder)
//! ship their state logic next to their styles.

pub mod components;

pub mod style;

pub mod theme;

mod utils;
pub use utils::*;

mod init;
pub use init::*;
