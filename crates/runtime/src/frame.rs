use foundation::time::Time;

/// Deterministic frame metadata for the animation loop.
///
/// Small and pure on purpose: a frame can be recorded, compared, and
/// replayed. The scheduler re-arms one callback per frame; `dt_s` is carried
/// so a wall-clock-based rotation policy stays a local change.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    /// 0-based frame index.
    pub index: u64,
    /// Nominal delta time (seconds).
    pub dt_s: f64,
}

impl Frame {
    pub fn new(index: u64, dt_s: f64) -> Self {
        Self { index, dt_s }
    }

    /// Engine time at the start of the frame.
    pub fn time(self) -> Time {
        Time(self.index as f64 * self.dt_s)
    }

    pub fn next(self) -> Self {
        Self::new(self.index + 1, self.dt_s)
    }
}
