pub mod frame;
pub mod spin;

pub use frame::*;
pub use spin::*;
