/// The three Euler-like angles controlling the globe's displayed orientation,
/// in degrees.
///
/// `lambda` is the longitude spin, `phi` the latitude tilt, `gamma` the axial
/// roll. Drag gestures and auto-rotation mutate `lambda`/`phi`; `gamma` is
/// carried for projection compatibility but never driven by interaction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rotation {
    pub lambda_deg: f64,
    pub phi_deg: f64,
    pub gamma_deg: f64,
}

impl Rotation {
    pub fn new(lambda_deg: f64, phi_deg: f64, gamma_deg: f64) -> Self {
        Self {
            lambda_deg,
            phi_deg,
            gamma_deg,
        }
    }

    pub fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn spin_by(&mut self, delta_deg: f64) {
        self.lambda_deg += delta_deg;
    }

    pub fn tilt_by(&mut self, delta_deg: f64) {
        self.phi_deg += delta_deg;
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

/// Wraps a longitude into `[-180, 180)`.
pub fn normalize_lon_deg(lon_deg: f64) -> f64 {
    let wrapped = (lon_deg + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == 180.0 { -180.0 } else { wrapped }
}
