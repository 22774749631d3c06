use foundation::math::Rotation;

/// Idle auto-rotation driver.
///
/// One tick per scheduled frame: the longitude spin advances by a fixed
/// per-tick increment while the pointer is neither dragging nor hovering.
/// The increment is tied to frame rate rather than wall time, matching the
/// visual behavior this globe is calibrated for. Ticking never stops while
/// interaction is active, so rotation resumes on the very next frame after
/// release.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AutoSpin {
    pub speed_deg_per_tick: f64,
}

impl AutoSpin {
    pub const DEFAULT_SPEED_DEG: f64 = 0.15;

    pub fn new(speed_deg_per_tick: f64) -> Self {
        Self { speed_deg_per_tick }
    }

    /// Advances the rotation for one frame. Returns whether it moved.
    pub fn tick(&self, rotation: &mut Rotation, dragging: bool, hovering: bool) -> bool {
        if dragging || hovering {
            return false;
        }
        rotation.spin_by(self.speed_deg_per_tick);
        true
    }
}

impl Default for AutoSpin {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SPEED_DEG)
    }
}
