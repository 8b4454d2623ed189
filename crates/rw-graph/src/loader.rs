//! CSV city loader.
//!
//! # CSV format
//!
//! One row per city, registered in file order.
//!
//! ```csv
//! name,x,y
//! a,0,1
//! b,0,2
//! c,1,2
//! ```
//!
//! Each row goes through [`Map::add_city`], so the same coordinate rules
//! apply.  The first bad row aborts the load; rows before it stay registered.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::map::Map;
use crate::GraphError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CityRecord {
    name: String,
    x:    f64,
    y:    f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Register every city listed in a CSV file.  Returns how many were added.
pub fn load_cities_csv(path: &Path, map: &Map) -> Result<usize, GraphError> {
    let file = std::fs::File::open(path).map_err(GraphError::Io)?;
    load_cities_reader(file, map)
}

/// Like [`load_cities_csv`] but accepts any `Read` source.
pub fn load_cities_reader<R: Read>(reader: R, map: &Map) -> Result<usize, GraphError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut added = 0usize;

    for (line, result) in csv_reader.deserialize::<CityRecord>().enumerate() {
        let row = result.map_err(|e| GraphError::Parse(format!("row {}: {e}", line + 1)))?;
        map.add_city(row.name, row.x, row.y)?;
        added += 1;
    }

    log::info!("loaded {added} cities from CSV");
    Ok(added)
}
