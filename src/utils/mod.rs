mod colors;
pub use colors::*;

mod pixels;
pub use pixels::*;

mod precedence;
