mod button;
mod toggle;

pub use button::*;
pub use toggle::*;
