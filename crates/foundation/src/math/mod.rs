pub mod graticule;
pub mod ortho;
pub mod rotation;
pub mod vec;

pub use graticule::*;
pub use ortho::*;
pub use rotation::*;
pub use vec::*;
