//! Browser front end: an orthographic globe on a 2d canvas next to a ranked
//! GDP panel. The wasm module owns all state; the host page only forwards
//! pointer events and drives the animation loop.

pub mod panel;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod canvas;
