//! walk — smallest end-to-end run of the roadwalk city graph.
//!
//! Registers a handful of cities, wires each to its nearest neighbours, and
//! random-walks from the first city until every city has been visited.
//!
//! ```text
//! walk [config.json] [cities.csv]
//! ```
//!
//! Without arguments the embedded config and city list are used.  Set
//! `RUST_LOG=debug` to see registration and walk outcomes.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};

use rw_core::{CityId, WalkConfig};
use rw_graph::{Map, load_cities_csv, load_cities_reader};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:      u64   = 42;
const ATTEMPTS:  u64   = 5;

const CITIES_CSV: &str = "\
name,x,y\n\
harbour,0,1\n\
mill,0,2\n\
market,1,2\n\
chapel,2,2\n\
ford,4,1\n\
quarry,5,3\n\
orchard,3,5\n\
";

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config(path: Option<&str>) -> Result<WalkConfig> {
    let config = match path {
        Some(p) => {
            let text = std::fs::read_to_string(p).with_context(|| format!("reading {p}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {p}"))?
        }
        None => WalkConfig {
            neighbours:   2,
            distance_cap: 0.0,
            max_steps:    Some(10_000),
            seed:         Some(SEED),
        },
    };
    config.validate()?;
    log::info!("using {config:?}");
    Ok(config)
}

fn load_map(path: Option<&str>) -> Result<Map> {
    let map = Map::new();
    match path {
        Some(p) => load_cities_csv(Path::new(p), &map)?,
        None => load_cities_reader(Cursor::new(CITIES_CSV), &map)?,
    };
    Ok(map)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = load_config(args.first().map(String::as_str))?;
    let map = load_map(args.get(1).map(String::as_str))?;

    println!("=== walk — roadwalk city graph ===");
    println!(
        "Cities: {}  |  k: {}  |  Seed: {:?}",
        map.city_count(),
        config.neighbours,
        config.seed
    );
    println!();

    // 1. Build roads.
    let t0 = Instant::now();
    map.build_roads(config.neighbours);
    println!("Roads built in {:.3} ms", t0.elapsed().as_secs_f64() * 1_000.0);
    if !map.all_reachable() {
        bail!("cities are not all reachable with k = {}; raise `neighbours`", config.neighbours);
    }

    // 2. Road table.
    println!("{:<10} {:<8} {}", "City", "Roads", "Neighbours");
    println!("{}", "-".repeat(48));
    for i in 0..map.city_count() {
        let city = map.city(CityId(i as u32))?;
        let names: Vec<String> = city
            .roads()
            .iter()
            .map(|r| map.city_name(r.to))
            .collect::<Result<_, _>>()?;
        println!("{:<10} {:<8} {}", city.name, city.roads().len(), names.join(", "));
    }
    println!();

    // 3. Walk from the first city, a few independent attempts.
    let start = CityId(0);
    let limits = config.limits();
    let mut root = config.make_rng();
    for attempt in 0..ATTEMPTS {
        let mut rng = root.child(attempt);
        match map.find_random_path_with(start, &limits, &mut rng)? {
            Some(path) => println!("attempt {attempt}: {path}"),
            None => println!("attempt {attempt}: no path within budget"),
        }
    }

    Ok(())
}
