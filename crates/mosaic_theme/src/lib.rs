//! Theme data for the mosaic kit: colors, typography, layout scales and
//! motion tokens.
//!
//! Themes carry one or more palette variants (e.g. light and dark) that share
//! the same layout tokens. Exactly one variant is active at a time.

mod color;
pub use color::*;

mod error;
pub use error::*;

mod schema;
pub use schema::*;

pub mod deserializers;
