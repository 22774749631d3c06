pub mod feature;
pub mod hit;

pub use feature::*;
pub use hit::*;
