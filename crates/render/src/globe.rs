use boundaries::BoundarySet;
use foundation::color::SequentialScale;
use foundation::math::{Orthographic, Rotation, Vec2, graticule_10};
use geo::{LineString, MultiPolygon};
use rankings::CountryRecord;
use scene::PointerState;

use crate::display::{DisplayList, DrawCmd, Shadow, Stroke};
use crate::style;

/// Everything one redraw depends on. Threaded explicitly into [`render`] so
/// identical inputs always produce an identical draw sequence.
#[derive(Debug, Clone)]
pub struct RenderInput<'a> {
    pub width: f64,
    pub height: f64,
    pub rotation: Rotation,
    pub records: &'a [CountryRecord],
    /// `None` until the boundary dataset has arrived.
    pub boundaries: Option<&'a BoundarySet>,
    pub selected: Option<&'a CountryRecord>,
    pub pointer: PointerState,
}

pub fn sphere_radius(width: f64, height: f64) -> f64 {
    width.min(height) / style::SPHERE_RADIUS_DIVISOR
}

/// The projection the interaction layer must invert pointer positions
/// through: same center, radius, and rotation as the base draw passes.
pub fn base_projection(width: f64, height: f64, rotation: Rotation) -> Orthographic {
    Orthographic::new(
        sphere_radius(width, height),
        Vec2::new(width / 2.0, height / 2.0),
        rotation,
    )
}

/// Color scale over the record set. The domain ceiling is 80% of the maximum
/// GDP (floored at a fixed minimum), so the top country saturates near the
/// ramp's high end without flattening the mid-tier.
pub fn gdp_scale(records: &[CountryRecord]) -> SequentialScale {
    let max_gdp = records
        .iter()
        .map(|record| record.gdp_trillions)
        .fold(style::MIN_MAX_GDP, f64::max);
    SequentialScale::new(max_gdp * style::DOMAIN_COMPRESSION)
}

/// Produces one frame's full draw sequence in fixed z-order: sphere,
/// graticule, country fills, atmosphere, floating highlight, tooltip.
pub fn render(input: &RenderInput) -> DisplayList {
    let mut list = DisplayList::default();
    list.push(DrawCmd::Clear {
        width: input.width,
        height: input.height,
    });

    let radius = sphere_radius(input.width, input.height);
    let center = Vec2::new(input.width / 2.0, input.height / 2.0);
    let projection = Orthographic::new(radius, center, input.rotation);

    // 1. Background sphere.
    list.push(DrawCmd::Circle {
        center,
        radius,
        fill: Some(style::OCEAN),
        stroke: None,
    });

    // 2. Graticule, one stroked path for the whole grid.
    let mut grid_subpaths = Vec::new();
    for line in graticule_10() {
        grid_subpaths.extend(visible_runs(&projection, &line));
    }
    list.push(DrawCmd::Shape {
        subpaths: grid_subpaths,
        closed: false,
        fill: None,
        stroke: Some(Stroke {
            color: style::GRATICULE,
            width: style::GRATICULE_WIDTH,
        }),
        shadow: None,
    });

    // 3. Country fills. The selected feature is skipped here and redrawn
    // lifted in pass 5, so the two never z-fight.
    let scale = gdp_scale(input.records);
    if let Some(boundaries) = input.boundaries {
        for feature in boundaries.iter() {
            if input
                .selected
                .is_some_and(|selected| selected.iso_code == feature.code)
            {
                continue;
            }
            let subpaths = project_rings(&projection, &feature.geometry);
            if subpaths.is_empty() {
                continue;
            }
            let fill = match input
                .records
                .iter()
                .find(|record| record.iso_code == feature.code)
            {
                Some(record) => scale.color(record.gdp_trillions),
                None => style::NO_DATA,
            };
            list.push(DrawCmd::Shape {
                subpaths,
                closed: true,
                fill: Some(fill),
                stroke: Some(Stroke {
                    color: style::COUNTRY_BORDER,
                    width: style::COUNTRY_BORDER_WIDTH,
                }),
                shadow: None,
            });
        }
    }

    // 4. Atmosphere glow atop the fills.
    list.push(DrawCmd::Glow {
        center,
        inner: radius,
        outer: radius * style::ATMOSPHERE_SCALE,
        color: style::ATMOSPHERE,
        width: input.width,
        height: input.height,
    });

    // 5. Floating highlight. A selection without a boundary match is
    // silently skipped.
    if let Some(selected) = input.selected
        && let Some(feature) = input
            .boundaries
            .and_then(|boundaries| boundaries.by_code(&selected.iso_code))
    {
        let pop = projection.scaled(style::POP_SCALE);
        let subpaths = project_rings(&pop, &feature.geometry);
        if !subpaths.is_empty() {
            list.push(DrawCmd::Shape {
                subpaths,
                closed: true,
                fill: Some(style::HIGHLIGHT_FILL),
                stroke: Some(Stroke {
                    color: style::HIGHLIGHT_STROKE,
                    width: style::HIGHLIGHT_STROKE_WIDTH,
                }),
                shadow: Some(Shadow {
                    color: style::HIGHLIGHT_SHADOW,
                    blur: style::HIGHLIGHT_SHADOW_BLUR,
                }),
            });
        }
    }

    // 6. Hover tooltip.
    if input.pointer.hovering
        && !input.pointer.dragging
        && let (Some(selected), Some(anchor)) = (input.selected, input.pointer.last_pos)
    {
        list.push(DrawCmd::Tooltip {
            anchor,
            text: selected.country_name.clone(),
        });
    }

    list
}

/// Projects every ring of a multipolygon, limb-clamping hidden vertices.
/// Rings with no front-facing vertex are dropped.
fn project_rings(projection: &Orthographic, geometry: &MultiPolygon<f64>) -> Vec<Vec<Vec2>> {
    let mut subpaths = Vec::new();
    for polygon in &geometry.0 {
        push_ring(&mut subpaths, projection, polygon.exterior());
        for interior in polygon.interiors() {
            push_ring(&mut subpaths, projection, interior);
        }
    }
    subpaths
}

fn push_ring(out: &mut Vec<Vec<Vec2>>, projection: &Orthographic, ring: &LineString<f64>) {
    let mut any_front = false;
    let mut points = Vec::with_capacity(ring.0.len());
    for coord in &ring.0 {
        let projected = projection.project_clamped(coord.x, coord.y);
        any_front |= projected.front;
        points.push(projected.pos);
    }
    if any_front && points.len() >= 3 {
        out.push(points);
    }
}

/// Splits an open polyline into its front-hemisphere runs.
fn visible_runs(projection: &Orthographic, line: &[(f64, f64)]) -> Vec<Vec<Vec2>> {
    let mut runs = Vec::new();
    let mut current: Vec<Vec2> = Vec::new();
    for &(lon, lat) in line {
        match projection.project(lon, lat) {
            Some(point) => current.push(point),
            None => {
                if current.len() >= 2 {
                    runs.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
            }
        }
    }
    if current.len() >= 2 {
        runs.push(current);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::{RenderInput, base_projection, gdp_scale, render, sphere_radius};
    use crate::display::DrawCmd;
    use crate::style;
    use boundaries::BoundarySet;
    use boundaries::feature::test_fixtures::square_feature;
    use foundation::math::{Rotation, Vec2};
    use rankings::{CountryRecord, fallback_rankings};
    use scene::PointerState;

    fn usa_boundaries() -> BoundarySet {
        BoundarySet::new(vec![
            square_feature("USA", "United States", -10.0, 20.0, 15.0),
            square_feature("ATA", "Antarctica", 20.0, -40.0, 15.0),
        ])
    }

    fn input<'a>(
        records: &'a [CountryRecord],
        boundaries: Option<&'a BoundarySet>,
        selected: Option<&'a CountryRecord>,
    ) -> RenderInput<'a> {
        RenderInput {
            width: 800.0,
            height: 600.0,
            rotation: Rotation::new(0.0, -30.0, 0.0),
            records,
            boundaries,
            selected,
            pointer: PointerState::default(),
        }
    }

    fn shapes(list: &crate::DisplayList) -> Vec<&DrawCmd> {
        list.iter()
            .filter(|cmd| matches!(cmd, DrawCmd::Shape { .. }))
            .collect()
    }

    #[test]
    fn rendering_is_idempotent() {
        let records = fallback_rankings();
        let boundaries = usa_boundaries();
        let selected = records[0].clone();
        let input = input(&records, Some(&boundaries), Some(&selected));
        assert_eq!(render(&input), render(&input));
    }

    #[test]
    fn z_order_is_fixed() {
        let records = fallback_rankings();
        let boundaries = usa_boundaries();
        let list = render(&input(&records, Some(&boundaries), None));

        assert!(matches!(list.commands[0], DrawCmd::Clear { .. }));
        match &list.commands[1] {
            DrawCmd::Circle { fill, .. } => assert_eq!(*fill, Some(style::OCEAN)),
            other => panic!("expected ocean sphere, got {other:?}"),
        }
        // Graticule is the first Shape; the Glow comes after every fill.
        assert!(matches!(list.commands[2], DrawCmd::Shape { closed: false, .. }));
        let glow_at = list
            .iter()
            .position(|cmd| matches!(cmd, DrawCmd::Glow { .. }))
            .expect("glow");
        assert_eq!(glow_at, list.len() - 1);
    }

    #[test]
    fn renders_without_boundary_data() {
        let records = fallback_rankings();
        let list = render(&input(&records, None, Some(&records[0])));
        // Sphere, grid, and glow still draw; no country or highlight shapes.
        assert_eq!(shapes(&list).len(), 1);
        assert!(list.iter().any(|cmd| matches!(cmd, DrawCmd::Glow { .. })));
    }

    #[test]
    fn empty_record_set_fills_everything_no_data() {
        let boundaries = usa_boundaries();
        let list = render(&input(&[], Some(&boundaries), None));
        let country_shapes: Vec<_> = shapes(&list)
            .into_iter()
            .filter_map(|cmd| match cmd {
                DrawCmd::Shape {
                    closed: true, fill, ..
                } => Some(fill),
                _ => None,
            })
            .collect();
        assert_eq!(country_shapes.len(), 2);
        assert!(
            country_shapes
                .iter()
                .all(|fill| **fill == Some(style::NO_DATA))
        );
    }

    #[test]
    fn selected_country_floats_instead_of_filling() {
        let records = fallback_rankings();
        let boundaries = usa_boundaries();
        let selected = records[0].clone();
        let list = render(&input(&records, Some(&boundaries), Some(&selected)));

        let closed: Vec<_> = shapes(&list)
            .into_iter()
            .filter(|cmd| matches!(cmd, DrawCmd::Shape { closed: true, .. }))
            .collect();
        // One base-layer feature (ATA) plus the lifted highlight.
        assert_eq!(closed.len(), 2);
        let highlight = closed.last().unwrap();
        match highlight {
            DrawCmd::Shape {
                fill,
                stroke,
                shadow,
                ..
            } => {
                assert_eq!(*fill, Some(style::HIGHLIGHT_FILL));
                assert_eq!(stroke.unwrap().width, style::HIGHLIGHT_STROKE_WIDTH);
                assert_eq!(shadow.unwrap().blur, style::HIGHLIGHT_SHADOW_BLUR);
            }
            _ => unreachable!(),
        }
        // The highlight draws after the glow: it floats above everything.
        let glow_at = list
            .iter()
            .position(|cmd| matches!(cmd, DrawCmd::Glow { .. }))
            .unwrap();
        let highlight_at = list
            .iter()
            .position(|cmd| matches!(cmd, DrawCmd::Shape { shadow: Some(_), .. }))
            .unwrap();
        assert!(highlight_at > glow_at);
    }

    #[test]
    fn selection_without_boundary_match_is_skipped() {
        let records = fallback_rankings();
        let boundaries = usa_boundaries();
        // CHN has a record but no boundary feature in this set.
        let selected = records[1].clone();
        let list = render(&input(&records, Some(&boundaries), Some(&selected)));
        assert!(
            !list
                .iter()
                .any(|cmd| matches!(cmd, DrawCmd::Shape { shadow: Some(_), .. }))
        );
        // Base layer still renders both features.
        let closed = shapes(&list)
            .into_iter()
            .filter(|cmd| matches!(cmd, DrawCmd::Shape { closed: true, .. }))
            .count();
        assert_eq!(closed, 2);
    }

    #[test]
    fn tooltip_requires_hover_without_drag() {
        let records = fallback_rankings();
        let boundaries = usa_boundaries();
        let selected = records[0].clone();
        let mut base = input(&records, Some(&boundaries), Some(&selected));

        base.pointer = PointerState {
            hovering: true,
            dragging: false,
            last_pos: Some(Vec2::new(120.0, 80.0)),
        };
        let list = render(&base);
        match list.commands.last().unwrap() {
            DrawCmd::Tooltip { anchor, text } => {
                assert_eq!(*anchor, Vec2::new(120.0, 80.0));
                assert_eq!(text, "United States");
            }
            other => panic!("expected tooltip, got {other:?}"),
        }

        base.pointer.dragging = true;
        let list = render(&base);
        assert!(
            !list
                .iter()
                .any(|cmd| matches!(cmd, DrawCmd::Tooltip { .. }))
        );
    }

    #[test]
    fn gdp_scale_never_divides_by_zero() {
        assert_eq!(
            gdp_scale(&[]).max(),
            style::MIN_MAX_GDP * style::DOMAIN_COMPRESSION
        );

        let zeroed: Vec<CountryRecord> = fallback_rankings()
            .into_iter()
            .map(|record| CountryRecord {
                gdp_trillions: 0.0,
                ..record
            })
            .collect();
        assert_eq!(
            gdp_scale(&zeroed).max(),
            style::MIN_MAX_GDP * style::DOMAIN_COMPRESSION
        );

        let records = fallback_rankings();
        assert_eq!(gdp_scale(&records).max(), 28.78 * style::DOMAIN_COMPRESSION);
    }

    #[test]
    fn projection_matches_the_drawn_sphere() {
        let projection = base_projection(800.0, 600.0, Rotation::identity());
        assert_eq!(projection.scale(), sphere_radius(800.0, 600.0));
        assert_eq!(projection.translate(), Vec2::new(400.0, 300.0));
    }
}
