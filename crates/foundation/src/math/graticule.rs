/// Graticule (latitude/longitude grid) generation.
///
/// Matches the conventional 10-degree world graticule: meridians every 10
/// degrees of longitude spanning 80S..80N, parallels every 10 degrees of
/// latitude spanning the full longitude range. Lines are densified so they
/// stay smooth under any projection.

const STEP_DEG: f64 = 10.0;
const PARALLEL_LIMIT_DEG: f64 = 80.0;
const SAMPLE_DEG: f64 = 2.5;

/// One grid line as ordered lon/lat vertices (degrees).
pub type GridLine = Vec<(f64, f64)>;

/// Builds the full 10-degree graticule. Deterministic: same output every call.
pub fn graticule_10() -> Vec<GridLine> {
    let mut lines = Vec::new();

    let mut lon = -180.0;
    while lon < 180.0 {
        lines.push(sampled_meridian(lon));
        lon += STEP_DEG;
    }

    let mut lat = -PARALLEL_LIMIT_DEG;
    while lat <= PARALLEL_LIMIT_DEG {
        lines.push(sampled_parallel(lat));
        lat += STEP_DEG;
    }

    lines
}

fn sampled_meridian(lon: f64) -> GridLine {
    let mut line = Vec::new();
    let mut lat = -PARALLEL_LIMIT_DEG;
    while lat <= PARALLEL_LIMIT_DEG {
        line.push((lon, lat));
        lat += SAMPLE_DEG;
    }
    line
}

fn sampled_parallel(lat: f64) -> GridLine {
    let mut line = Vec::new();
    let mut lon = -180.0;
    while lon <= 180.0 {
        line.push((lon, lat));
        lon += SAMPLE_DEG;
    }
    line
}

#[cfg(test)]
mod tests {
    use super::graticule_10;

    #[test]
    fn line_counts_match_grid_spacing() {
        let lines = graticule_10();
        // 36 meridians (−180..170) + 17 parallels (−80..80).
        assert_eq!(lines.len(), 36 + 17);
    }

    #[test]
    fn meridians_span_the_parallel_limit() {
        let lines = graticule_10();
        let first = &lines[0];
        assert_eq!(first.first(), Some(&(-180.0, -80.0)));
        assert_eq!(first.last(), Some(&(-180.0, 80.0)));
    }

    #[test]
    fn output_is_deterministic() {
        assert_eq!(graticule_10(), graticule_10());
    }
}
