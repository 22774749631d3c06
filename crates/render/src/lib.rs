pub mod display;
pub mod globe;
pub mod style;
pub mod svg;

pub use display::*;
pub use globe::*;
