use boundaries::{BoundarySet, hit};
use foundation::math::{Orthographic, Rotation, Vec2};
use rankings::CountryRecord;

use crate::pointer::PointerState;
use crate::selection::SelectionBridge;

/// Degrees of rotation per pixel of drag, per axis. Both axes ship at the
/// same value; they stay separate fields so either can be tuned alone.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DragSensitivity {
    pub spin_deg_per_px: f64,
    pub tilt_deg_per_px: f64,
}

impl Default for DragSensitivity {
    fn default() -> Self {
        Self {
            spin_deg_per_px: 0.25,
            tilt_deg_per_px: 0.25,
        }
    }
}

/// Pointer-driven rotation and hover hit-testing.
///
/// Owns the rotation triple and the transient pointer state. Hover
/// hit-testing inverts the pixel through the current projection and walks
/// boundary features in document order; the first containing feature wins.
/// Hovering over ocean leaves the selection unchanged so the panel keeps
/// showing readable data.
#[derive(Debug)]
pub struct InteractionController {
    rotation: Rotation,
    pointer: PointerState,
    sensitivity: DragSensitivity,
}

impl InteractionController {
    pub fn new(rotation: Rotation) -> Self {
        Self {
            rotation,
            pointer: PointerState::default(),
            sensitivity: DragSensitivity::default(),
        }
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn rotation_mut(&mut self) -> &mut Rotation {
        &mut self.rotation
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Begins a drag gesture. The rotation does not move until the pointer
    /// does.
    pub fn on_pointer_down(&mut self, pos: Vec2) {
        self.pointer.dragging = true;
        self.pointer.last_pos = Some(pos);
    }

    pub fn on_pointer_move(
        &mut self,
        pos: Vec2,
        projection: &Orthographic,
        boundaries: Option<&BoundarySet>,
        records: &[CountryRecord],
        selection: &SelectionBridge,
    ) {
        let prev = self.pointer.last_pos.replace(pos);

        if self.pointer.dragging {
            if let Some(prev) = prev {
                let delta = pos - prev;
                self.rotation
                    .spin_by(delta.x * self.sensitivity.spin_deg_per_px);
                self.rotation
                    .tilt_by(-delta.y * self.sensitivity.tilt_deg_per_px);
            }
            return;
        }

        self.pointer.hovering = true;

        let Some(boundaries) = boundaries else {
            return;
        };
        // Off-sphere pointer: inversion is undefined, skip hit-testing.
        let Some((lon, lat)) = projection.invert(pos) else {
            return;
        };
        let Some(feature) = hit::locate(boundaries, lon, lat) else {
            return;
        };
        let Some(record) = records.iter().find(|r| r.iso_code == feature.code) else {
            return;
        };
        if selection.selected_code().as_deref() != Some(record.iso_code.as_str()) {
            selection.select(Some(record.clone()));
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.pointer.dragging = false;
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer.reset();
    }
}
