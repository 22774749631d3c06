use std::env;
use std::fs;
use std::path::PathBuf;

use boundaries::{BoundarySet, hit};
use foundation::math::Rotation;
use rankings::{CountryRecord, FetchConfig, fallback_rankings, fetch_rankings};
use render::globe::{RenderInput, render};
use render::svg::to_svg;
use runtime::{AutoSpin, Frame};
use scene::PointerState;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = real_main() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), String> {
    let mut args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        return Err(usage());
    }

    let cmd = args[1].clone();
    args.drain(0..2);

    match cmd.as_str() {
        "render" => cmd_render(args),
        "fetch" => cmd_fetch(args),
        "locate" => cmd_locate(args),
        _ => Err(usage()),
    }
}

fn usage() -> String {
    "usage:
  globe render <world.geojson> <out.svg> [--size WxH] [--rotate L,P,G] [--select ISO3] [--spin TICKS] [--rankings FILE]
  globe fetch [--api-key KEY]
  globe locate <world.geojson> <lon> <lat>"
        .to_string()
}

fn cmd_render(args: Vec<String>) -> Result<(), String> {
    // globe render <world.geojson> <out.svg> [flags]
    if args.len() < 2 {
        return Err(usage());
    }
    let world_path = PathBuf::from(&args[0]);
    let out_path = PathBuf::from(&args[1]);

    let mut width = 800.0;
    let mut height = 600.0;
    let mut rotation = Rotation::new(0.0, -30.0, 0.0);
    let mut select: Option<String> = None;
    let mut spin_ticks: u64 = 0;
    let mut rankings_path: Option<PathBuf> = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--size" => {
                let value = flag_value(&args, &mut i, "--size")?;
                (width, height) = parse_size(value)?;
            }
            "--rotate" => {
                let value = flag_value(&args, &mut i, "--rotate")?;
                rotation = parse_rotation(value)?;
            }
            "--select" => {
                select = Some(flag_value(&args, &mut i, "--select")?.to_string());
            }
            "--spin" => {
                let value = flag_value(&args, &mut i, "--spin")?;
                spin_ticks = value.parse().map_err(|e| format!("--spin: {e}"))?;
            }
            "--rankings" => {
                rankings_path = Some(PathBuf::from(flag_value(&args, &mut i, "--rankings")?));
            }
            s => {
                return Err(format!("unknown arg: {s}\n\n{}", usage()));
            }
        }
        i += 1;
    }

    let boundaries = load_boundaries(&world_path)?;
    let records = match rankings_path {
        Some(path) => {
            let text = fs::read_to_string(&path).map_err(|e| format!("read {path:?}: {e}"))?;
            serde_json::from_str::<Vec<CountryRecord>>(&text)
                .map_err(|e| format!("parse {path:?}: {e}"))?
        }
        None => fallback_rankings(),
    };

    // Replay the idle animation to the requested frame before exporting.
    if spin_ticks > 0 {
        let spin = AutoSpin::default();
        let mut frame = Frame::new(0, 1.0 / 60.0);
        for _ in 0..spin_ticks {
            spin.tick(&mut rotation, false, false);
            frame = frame.next();
        }
        info!(
            frames = frame.index,
            lambda_deg = rotation.lambda_deg,
            "advanced idle rotation"
        );
    }

    let selected = select
        .as_deref()
        .and_then(|code| records.iter().find(|record| record.iso_code == code));
    if select.is_some() && selected.is_none() {
        return Err(format!(
            "--select {}: no such country in the ranking data",
            select.unwrap_or_default()
        ));
    }

    let input = RenderInput {
        width,
        height,
        rotation,
        records: &records,
        boundaries: Some(&boundaries),
        selected,
        pointer: PointerState::default(),
    };
    let svg = to_svg(&render(&input));
    fs::write(&out_path, &svg).map_err(|e| format!("write {out_path:?}: {e}"))?;
    info!(
        features = boundaries.len(),
        countries = records.len(),
        out = %out_path.display(),
        "exported frame"
    );
    Ok(())
}

fn cmd_fetch(args: Vec<String>) -> Result<(), String> {
    let mut api_key: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--api-key" => {
                api_key = Some(flag_value(&args, &mut i, "--api-key")?.to_string());
            }
            s => {
                return Err(format!("unknown arg: {s}\n\n{}", usage()));
            }
        }
        i += 1;
    }

    let config = match api_key {
        Some(key) => Some(FetchConfig::new(key)),
        None => FetchConfig::from_env(),
    };
    let records = match config {
        Some(config) => {
            let runtime = tokio::runtime::Runtime::new().map_err(|e| format!("tokio: {e}"))?;
            let client = reqwest::Client::new();
            runtime.block_on(fetch_rankings(&client, &config))
        }
        None => {
            info!("no API key configured; using the embedded snapshot");
            fallback_rankings()
        }
    };

    for record in &records {
        println!(
            "{:>3}  {:<3}  {:<32} {:>9}  {:>7}",
            record.rank,
            record.iso_code,
            record.country_name,
            record.gdp_label(),
            record.growth_label(),
        );
    }
    Ok(())
}

fn cmd_locate(args: Vec<String>) -> Result<(), String> {
    // globe locate <world.geojson> <lon> <lat>
    if args.len() != 3 {
        return Err(usage());
    }
    let world_path = PathBuf::from(&args[0]);
    let lon: f64 = args[1].parse().map_err(|e| format!("lon: {e}"))?;
    let lat: f64 = args[2].parse().map_err(|e| format!("lat: {e}"))?;

    let boundaries = load_boundaries(&world_path)?;
    match hit::locate(&boundaries, lon, lat) {
        Some(feature) => println!("{}  {}", feature.code, feature.name),
        None => println!("(ocean)"),
    }
    Ok(())
}

fn load_boundaries(path: &PathBuf) -> Result<BoundarySet, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("read {path:?}: {e}"))?;
    BoundarySet::from_geojson(&text).map_err(|e| format!("parse {path:?}: {e}"))
}

fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, String> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} requires a value"))
}

fn parse_size(value: &str) -> Result<(f64, f64), String> {
    let (w, h) = value
        .split_once('x')
        .ok_or_else(|| format!("--size expects WxH, got {value}"))?;
    let width: f64 = w.parse().map_err(|e| format!("--size width: {e}"))?;
    let height: f64 = h.parse().map_err(|e| format!("--size height: {e}"))?;
    if width <= 0.0 || height <= 0.0 {
        return Err("--size dimensions must be positive".to_string());
    }
    Ok((width, height))
}

fn parse_rotation(value: &str) -> Result<Rotation, String> {
    let parts: Vec<&str> = value.split(',').collect();
    if parts.len() != 3 {
        return Err(format!("--rotate expects L,P,G, got {value}"));
    }
    let mut angles = [0.0f64; 3];
    for (slot, part) in angles.iter_mut().zip(&parts) {
        *slot = part.trim().parse().map_err(|e| format!("--rotate: {e}"))?;
    }
    Ok(Rotation::new(angles[0], angles[1], angles[2]))
}

#[cfg(test)]
mod tests {
    use super::{parse_rotation, parse_size};

    #[test]
    fn size_parses_and_rejects_garbage() {
        assert_eq!(parse_size("800x600").unwrap(), (800.0, 600.0));
        assert!(parse_size("800").is_err());
        assert!(parse_size("0x600").is_err());
    }

    #[test]
    fn rotation_parses_three_angles() {
        let r = parse_rotation("0, -30, 0").unwrap();
        assert_eq!(r.lambda_deg, 0.0);
        assert_eq!(r.phi_deg, -30.0);
        assert_eq!(r.gamma_deg, 0.0);
        assert!(parse_rotation("1,2").is_err());
    }
}
