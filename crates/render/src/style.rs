//! The globe's visual constant table, kept in one place like a layer
//! symbology module.

use foundation::color::Rgba;

/// Sphere radius as a fraction of the smaller canvas dimension.
pub const SPHERE_RADIUS_DIVISOR: f64 = 2.5;

/// Scale multiplier for the lifted highlight layer.
pub const POP_SCALE: f64 = 1.05;

/// Outer radius of the atmosphere gradient, relative to the sphere.
pub const ATMOSPHERE_SCALE: f64 = 1.2;

/// Floor applied to the maximum GDP before building the color domain, so an
/// empty or all-zero record set still yields a usable scale.
pub const MIN_MAX_GDP: f64 = 10.0;

/// The color domain tops out at this fraction of the maximum GDP, keeping
/// mid-tier countries distinguishable.
pub const DOMAIN_COMPRESSION: f64 = 0.8;

pub const OCEAN: Rgba = Rgba::rgb(0x0f, 0x17, 0x2a);
pub const GRATICULE: Rgba = Rgba::rgb(0x1e, 0x29, 0x3b);
pub const GRATICULE_WIDTH: f64 = 0.5;
pub const NO_DATA: Rgba = Rgba::rgb(0x33, 0x41, 0x55);
/// Country borders match the ocean so they visually merge into it.
pub const COUNTRY_BORDER: Rgba = OCEAN;
pub const COUNTRY_BORDER_WIDTH: f64 = 0.5;
pub const ATMOSPHERE: Rgba = Rgba::rgba(56, 189, 248, 0.1);

pub const HIGHLIGHT_FILL: Rgba = Rgba::rgb(0x38, 0xbd, 0xf8);
pub const HIGHLIGHT_STROKE: Rgba = Rgba::rgb(0xff, 0xff, 0xff);
pub const HIGHLIGHT_STROKE_WIDTH: f64 = 2.0;
pub const HIGHLIGHT_SHADOW: Rgba = Rgba::rgba(0, 0, 0, 0.8);
pub const HIGHLIGHT_SHADOW_BLUR: f64 = 20.0;

pub const TOOLTIP_OFFSET: f64 = 15.0;
pub const TOOLTIP_PADDING: f64 = 8.0;
pub const TOOLTIP_HEIGHT: f64 = 24.0;
pub const TOOLTIP_RADIUS: f64 = 4.0;
pub const TOOLTIP_FONT: &str = "12px sans-serif";
pub const TOOLTIP_BG: Rgba = Rgba::rgba(15, 23, 42, 0.9);
pub const TOOLTIP_BORDER: Rgba = Rgba::rgba(56, 189, 248, 0.5);
pub const TOOLTIP_TEXT: Rgba = Rgba::rgb(0xff, 0xff, 0xff);
