pub mod controller;
pub mod pointer;
pub mod selection;

pub use controller::*;
pub use pointer::*;
pub use selection::*;
