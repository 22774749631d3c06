/// RGBA color with 8-bit channels and a unit-interval alpha.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// CSS form: `#rrggbb` when opaque, `rgba(...)` otherwise. Both canvas
    /// and SVG accept either.
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }

    pub fn lerp(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// Inferno ramp sampled at 0.1 intervals; intermediate values interpolate
/// linearly in RGB.
const INFERNO_ANCHORS: [Rgba; 11] = [
    Rgba::rgb(0x00, 0x00, 0x04),
    Rgba::rgb(0x16, 0x0b, 0x39),
    Rgba::rgb(0x42, 0x0a, 0x68),
    Rgba::rgb(0x6a, 0x17, 0x6e),
    Rgba::rgb(0x93, 0x26, 0x67),
    Rgba::rgb(0xbc, 0x37, 0x54),
    Rgba::rgb(0xdd, 0x51, 0x3a),
    Rgba::rgb(0xf3, 0x78, 0x19),
    Rgba::rgb(0xfc, 0xa5, 0x0a),
    Rgba::rgb(0xf6, 0xd7, 0x46),
    Rgba::rgb(0xfc, 0xff, 0xa4),
];

/// Samples the inferno ramp at `t` in `[0, 1]`.
pub fn inferno(t: f64) -> Rgba {
    let t = t.clamp(0.0, 1.0);
    let scaled = t * (INFERNO_ANCHORS.len() - 1) as f64;
    let lower = scaled.floor() as usize;
    if lower + 1 >= INFERNO_ANCHORS.len() {
        return INFERNO_ANCHORS[INFERNO_ANCHORS.len() - 1];
    }
    INFERNO_ANCHORS[lower].lerp(INFERNO_ANCHORS[lower + 1], scaled - lower as f64)
}

/// Sequential color scale over `[0, max]`, clamping outside the domain.
///
/// A non-positive `max` collapses to a domain of 1.0 so the scale never
/// divides by zero.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SequentialScale {
    max: f64,
}

impl SequentialScale {
    pub fn new(max: f64) -> Self {
        Self {
            max: if max > 0.0 { max } else { 1.0 },
        }
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn color(&self, value: f64) -> Rgba {
        inferno(value / self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::{Rgba, SequentialScale, inferno};

    #[test]
    fn css_formatting() {
        assert_eq!(Rgba::rgb(0x0f, 0x17, 0x2a).to_css(), "#0f172a");
        assert_eq!(
            Rgba::rgba(56, 189, 248, 0.1).to_css(),
            "rgba(56, 189, 248, 0.1)"
        );
    }

    #[test]
    fn ramp_hits_its_endpoints() {
        assert_eq!(inferno(0.0), Rgba::rgb(0x00, 0x00, 0x04));
        assert_eq!(inferno(1.0), Rgba::rgb(0xfc, 0xff, 0xa4));
        assert_eq!(inferno(-2.0), inferno(0.0));
        assert_eq!(inferno(7.0), inferno(1.0));
    }

    #[test]
    fn ramp_brightens_monotonically_in_red() {
        let mut last = inferno(0.0).r;
        for i in 1..=10 {
            let c = inferno(f64::from(i) / 10.0);
            assert!(c.r >= last);
            last = c.r;
        }
    }

    #[test]
    fn scale_guards_against_zero_domain() {
        let s = SequentialScale::new(0.0);
        assert_eq!(s.max(), 1.0);
        let c = s.color(0.0);
        assert_eq!(c, inferno(0.0));

        let s = SequentialScale::new(-4.0);
        assert_eq!(s.max(), 1.0);
    }

    #[test]
    fn scale_clamps_out_of_domain_values() {
        let s = SequentialScale::new(10.0);
        assert_eq!(s.color(25.0), inferno(1.0));
        assert_eq!(s.color(-1.0), inferno(0.0));
    }
}
