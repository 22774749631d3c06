//! Replays a display list into a standalone SVG document. Used by the
//! command-line frame exporter; the browser app replays the same list onto a
//! canvas instead.

use std::fmt::Write as _;

use foundation::math::Vec2;

use crate::display::{DisplayList, DrawCmd, Shadow, Stroke};
use crate::style;

/// Approximate advance width per glyph for the tooltip font. SVG has no
/// `measureText`, so the exporter sizes tooltip boxes with this instead.
const TOOLTIP_GLYPH_WIDTH: f64 = 7.2;

/// Serializes a display list as a complete SVG document. The output is
/// deterministic: the same list always yields byte-identical markup.
pub fn to_svg(list: &DisplayList) -> String {
    let (width, height) = list
        .iter()
        .find_map(|cmd| match cmd {
            DrawCmd::Clear { width, height } => Some((*width, *height)),
            _ => None,
        })
        .unwrap_or((0.0, 0.0));

    let mut defs = String::new();
    let mut body = String::new();
    let mut glow_index = 0usize;

    for cmd in list.iter() {
        match cmd {
            DrawCmd::Clear { .. } => {}
            DrawCmd::Circle {
                center,
                radius,
                fill,
                stroke,
            } => {
                let _ = write!(
                    body,
                    r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}"{}{}/>"#,
                    center.x,
                    center.y,
                    radius,
                    fill_attr(*fill),
                    stroke_attrs(*stroke),
                );
                body.push('\n');
            }
            DrawCmd::Shape {
                subpaths,
                closed,
                fill,
                stroke,
                shadow,
            } => {
                if subpaths.is_empty() {
                    continue;
                }
                let _ = write!(
                    body,
                    r#"<path d="{}"{}{}{}/>"#,
                    path_data(subpaths, *closed),
                    fill_attr(*fill),
                    stroke_attrs(*stroke),
                    shadow_attr(*shadow),
                );
                body.push('\n');
            }
            DrawCmd::Glow {
                center,
                inner,
                outer,
                color,
                ..
            } => {
                let id = format!("glow-{glow_index}");
                glow_index += 1;
                // Transparent out to the sphere edge, colored at the limb,
                // fading to nothing at the outer radius.
                let start = if *outer > 0.0 { inner / outer } else { 0.0 };
                let _ = write!(
                    defs,
                    concat!(
                        r#"<radialGradient id="{id}">"#,
                        r#"<stop offset="{start:.4}" stop-color="{color}" stop-opacity="0"/>"#,
                        r#"<stop offset="{start:.4}" stop-color="{color}" stop-opacity="{alpha}"/>"#,
                        r#"<stop offset="1" stop-color="{color}" stop-opacity="0"/>"#,
                        r#"</radialGradient>"#,
                    ),
                    id = id,
                    start = start,
                    color = opaque_css(*color),
                    alpha = color.a,
                );
                defs.push('\n');
                let _ = write!(
                    body,
                    r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}" fill="url(#{id})"/>"#,
                    center.x, center.y, outer,
                );
                body.push('\n');
            }
            DrawCmd::Tooltip { anchor, text } => {
                write_tooltip(&mut body, *anchor, text);
            }
        }
    }

    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}">"#,
            "\n<defs>\n{defs}</defs>\n{body}</svg>\n",
        ),
        w = width,
        h = height,
        defs = defs,
        body = body,
    )
}

fn path_data(subpaths: &[Vec<Vec2>], closed: bool) -> String {
    let mut d = String::new();
    for subpath in subpaths {
        for (i, point) in subpath.iter().enumerate() {
            let op = if i == 0 { 'M' } else { 'L' };
            let _ = write!(d, "{op}{:.2} {:.2}", point.x, point.y);
        }
        if closed {
            d.push('Z');
        }
    }
    d
}

/// Gradient stops carry alpha through `stop-opacity`, so the stop color
/// itself must be opaque.
fn opaque_css(color: foundation::color::Rgba) -> String {
    foundation::color::Rgba::rgb(color.r, color.g, color.b).to_css()
}

fn fill_attr(fill: Option<foundation::color::Rgba>) -> String {
    match fill {
        Some(color) => format!(r#" fill="{}""#, color.to_css()),
        None => r#" fill="none""#.to_string(),
    }
}

fn stroke_attrs(stroke: Option<Stroke>) -> String {
    match stroke {
        Some(stroke) => format!(
            r#" stroke="{}" stroke-width="{}""#,
            stroke.color.to_css(),
            stroke.width,
        ),
        None => String::new(),
    }
}

fn shadow_attr(shadow: Option<Shadow>) -> String {
    match shadow {
        Some(shadow) => format!(
            r#" style="filter: drop-shadow(0px 0px {}px {})""#,
            shadow.blur,
            shadow.color.to_css(),
        ),
        None => String::new(),
    }
}

fn write_tooltip(body: &mut String, anchor: Vec2, text: &str) {
    let text_width = text.chars().count() as f64 * TOOLTIP_GLYPH_WIDTH;
    let box_width = text_width + style::TOOLTIP_PADDING * 2.0;
    let x = anchor.x + style::TOOLTIP_OFFSET;
    let y = anchor.y + style::TOOLTIP_OFFSET;
    let _ = write!(
        body,
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" rx="{}" fill="{}" stroke="{}" stroke-width="1"/>"#,
        x,
        y,
        box_width,
        style::TOOLTIP_HEIGHT,
        style::TOOLTIP_RADIUS,
        style::TOOLTIP_BG.to_css(),
        style::TOOLTIP_BORDER.to_css(),
    );
    body.push('\n');
    let _ = write!(
        body,
        r#"<text x="{:.2}" y="{:.2}" font-family="sans-serif" font-size="12" fill="{}">{}</text>"#,
        x + style::TOOLTIP_PADDING,
        y + style::TOOLTIP_HEIGHT / 2.0 + 4.0,
        style::TOOLTIP_TEXT.to_css(),
        escape_text(text),
    );
    body.push('\n');
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{escape_text, to_svg};
    use crate::display::{DisplayList, DrawCmd, Stroke};
    use crate::globe::{RenderInput, render};
    use crate::style;
    use boundaries::BoundarySet;
    use boundaries::feature::test_fixtures::square_feature;
    use foundation::math::{Rotation, Vec2};
    use rankings::fallback_rankings;
    use scene::PointerState;

    fn sample_list() -> DisplayList {
        let mut list = DisplayList::default();
        list.push(DrawCmd::Clear {
            width: 800.0,
            height: 600.0,
        });
        list.push(DrawCmd::Circle {
            center: Vec2::new(400.0, 300.0),
            radius: 240.0,
            fill: Some(style::OCEAN),
            stroke: None,
        });
        list.push(DrawCmd::Shape {
            subpaths: vec![vec![
                Vec2::new(10.0, 10.0),
                Vec2::new(20.0, 10.0),
                Vec2::new(20.0, 20.0),
            ]],
            closed: true,
            fill: Some(style::NO_DATA),
            stroke: Some(Stroke {
                color: style::COUNTRY_BORDER,
                width: style::COUNTRY_BORDER_WIDTH,
            }),
            shadow: None,
        });
        list
    }

    #[test]
    fn document_shell_carries_the_clear_dimensions() {
        let svg = to_svg(&sample_list());
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains(r#"viewBox="0 0 800 600""#));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn sphere_becomes_a_filled_circle() {
        let svg = to_svg(&sample_list());
        assert!(svg.contains(r##"<circle cx="400.00" cy="300.00" r="240.00" fill="#0f172a"/>"##));
    }

    #[test]
    fn shapes_close_and_carry_their_paint() {
        let svg = to_svg(&sample_list());
        assert!(svg.contains(r#"d="M10.00 10.00L20.00 10.00L20.00 20.00Z""#));
        assert!(svg.contains(r##"fill="#334155""##));
        assert!(svg.contains(r##"stroke="#0f172a" stroke-width="0.5""##));
    }

    #[test]
    fn glow_emits_a_referenced_gradient() {
        let mut list = sample_list();
        list.push(DrawCmd::Glow {
            center: Vec2::new(400.0, 300.0),
            inner: 240.0,
            outer: 288.0,
            color: style::ATMOSPHERE,
            width: 800.0,
            height: 600.0,
        });
        let svg = to_svg(&list);
        assert!(svg.contains(r#"<radialGradient id="glow-0">"#));
        assert!(svg.contains(r#"fill="url(#glow-0)""#));
        assert!(svg.contains(r#"stop-opacity="0.1""#));
    }

    #[test]
    fn tooltip_text_is_escaped() {
        let mut list = sample_list();
        list.push(DrawCmd::Tooltip {
            anchor: Vec2::new(100.0, 100.0),
            text: "Trinidad & Tobago".to_string(),
        });
        let svg = to_svg(&list);
        assert!(svg.contains("Trinidad &amp; Tobago"));
        assert!(svg.contains(r#"rx="4""#));

        assert_eq!(escape_text("<a&b>"), "&lt;a&amp;b&gt;");
    }

    #[test]
    fn full_frame_export_is_deterministic() {
        let records = fallback_rankings();
        let boundaries = BoundarySet::new(vec![square_feature(
            "USA",
            "United States",
            -10.0,
            20.0,
            15.0,
        )]);
        let selected = records[0].clone();
        let input = RenderInput {
            width: 800.0,
            height: 600.0,
            rotation: Rotation::new(0.0, -30.0, 0.0),
            records: &records,
            boundaries: Some(&boundaries),
            selected: Some(&selected),
            pointer: PointerState::default(),
        };
        let a = to_svg(&render(&input));
        let b = to_svg(&render(&input));
        assert_eq!(a, b);
        // Highlight pass shows up as a drop-shadowed path.
        assert!(a.contains("drop-shadow(0px 0px 20px rgba(0, 0, 0, 0.8))"));
    }
}
