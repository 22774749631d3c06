use super::{Rotation, Vec2, normalize_lon_deg};

/// Orthographic map projection: a sphere viewed from infinite distance.
///
/// The rotation follows the spherical Euler composition used by conventional
/// geo projection pipelines: a longitude spin applied first, then a combined
/// latitude/roll rotation. Screen space has y growing downward, so projected
/// northings are flipped around `translate.y`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Orthographic {
    scale: f64,
    translate: Vec2,
    rotation: Rotation,
}

/// A projected position plus its hemisphere flag. Back-hemisphere points are
/// reported clamped to the limb circle so polygon fills stay closed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projected {
    pub pos: Vec2,
    pub front: bool,
}

impl Orthographic {
    pub fn new(scale: f64, translate: Vec2, rotation: Rotation) -> Self {
        Self {
            scale,
            translate,
            rotation,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn translate(&self) -> Vec2 {
        self.translate
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Same center and rotation at a multiplied radius. Used for the lifted
    /// highlight layer.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            scale: self.scale * factor,
            ..*self
        }
    }

    /// Projects a lon/lat pair (degrees). `None` when the point lies on the
    /// hidden hemisphere.
    pub fn project(&self, lon_deg: f64, lat_deg: f64) -> Option<Vec2> {
        let p = self.project_clamped(lon_deg, lat_deg);
        p.front.then_some(p.pos)
    }

    /// Projects a lon/lat pair (degrees), clamping hidden points to the limb.
    pub fn project_clamped(&self, lon_deg: f64, lat_deg: f64) -> Projected {
        let (lambda, phi) = self.rotate_forward(lon_deg.to_radians(), lat_deg.to_radians());
        let cos_phi = phi.cos();
        let x = cos_phi * lambda.sin();
        let y = phi.sin();
        let front = cos_phi * lambda.cos() >= 0.0;

        let (x, y) = if front {
            (x, y)
        } else {
            // Push the hidden vertex out to the nearest limb point.
            let r = (x * x + y * y).sqrt();
            if r < 1e-12 { (1.0, 0.0) } else { (x / r, y / r) }
        };

        Projected {
            pos: Vec2::new(
                self.translate.x + self.scale * x,
                self.translate.y - self.scale * y,
            ),
            front,
        }
    }

    /// Inverts a pixel position back to lon/lat degrees. `None` when the
    /// pixel falls outside the projected sphere.
    pub fn invert(&self, pixel: Vec2) -> Option<(f64, f64)> {
        let x = (pixel.x - self.translate.x) / self.scale;
        let y = (self.translate.y - pixel.y) / self.scale;
        let rho = (x * x + y * y).sqrt();
        if rho > 1.0 {
            return None;
        }

        let c = rho.clamp(-1.0, 1.0).asin();
        let (sin_c, cos_c) = c.sin_cos();
        let lambda = (x * sin_c).atan2(rho * cos_c);
        let phi = if rho == 0.0 {
            0.0
        } else {
            (y * sin_c / rho).clamp(-1.0, 1.0).asin()
        };

        let (lon, lat) = self.rotate_inverse(lambda, phi);
        Some((normalize_lon_deg(lon.to_degrees()), lat.to_degrees()))
    }

    fn rotate_forward(&self, lon_rad: f64, lat_rad: f64) -> (f64, f64) {
        let lambda = lon_rad + self.rotation.lambda_deg.to_radians();
        let (sin_dphi, cos_dphi) = self.rotation.phi_deg.to_radians().sin_cos();
        let (sin_dgamma, cos_dgamma) = self.rotation.gamma_deg.to_radians().sin_cos();

        let cos_phi = lat_rad.cos();
        let x = lambda.cos() * cos_phi;
        let y = lambda.sin() * cos_phi;
        let z = lat_rad.sin();
        let k = z * cos_dphi + x * sin_dphi;

        (
            (y * cos_dgamma - k * sin_dgamma).atan2(x * cos_dphi - z * sin_dphi),
            (k * cos_dgamma + y * sin_dgamma).clamp(-1.0, 1.0).asin(),
        )
    }

    fn rotate_inverse(&self, lambda: f64, phi: f64) -> (f64, f64) {
        let (sin_dphi, cos_dphi) = self.rotation.phi_deg.to_radians().sin_cos();
        let (sin_dgamma, cos_dgamma) = self.rotation.gamma_deg.to_radians().sin_cos();

        let cos_phi = phi.cos();
        let x = lambda.cos() * cos_phi;
        let y = lambda.sin() * cos_phi;
        let z = phi.sin();
        let k = z * cos_dgamma - y * sin_dgamma;

        let lon = (y * cos_dgamma + z * sin_dgamma).atan2(x * cos_dphi + k * sin_dphi)
            - self.rotation.lambda_deg.to_radians();
        let lat = (k * cos_dphi - x * sin_dphi).clamp(-1.0, 1.0).asin();
        (lon, lat)
    }
}
