pub mod fallback;
pub mod record;
pub mod request;

#[cfg(not(target_arch = "wasm32"))]
pub mod fetch;

pub use fallback::*;
pub use record::*;
pub use request::*;

#[cfg(not(target_arch = "wasm32"))]
pub use fetch::*;
