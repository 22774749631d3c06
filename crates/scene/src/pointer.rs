use foundation::math::Vec2;

/// Transient pointer state: never persisted, reset when the pointer leaves.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct PointerState {
    pub dragging: bool,
    pub hovering: bool,
    /// Last known pointer position in canvas pixels; tooltip anchor and drag
    /// delta reference.
    pub last_pos: Option<Vec2>,
}

impl PointerState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
