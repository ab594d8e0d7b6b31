//! Theme system providing colors, typography, layout dimensions and motion.
//!
//! Themes support multiple variants (e.g., dark and light modes) with a
//! consistent set of semantic color tokens and size scales. Token kinds
//! resolve against whichever variant is active.

pub use mosaic_theme::*;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;

mod resolvers;
pub use resolvers::*;
