//! Facility feed loaders.
//!
//! # JSON format
//!
//! The public sports-facility registry answers with a paged envelope.  Only
//! a handful of fields matter here; everything else is ignored.
//!
//! ```json
//! { "total_count": 2,
//!   "results": [
//!     { "inst_numero": "I750560001", "inst_nom": "Gymnase Japy",
//!       "inst_adresse": "2 rue Japy", "equip_x": 2.3812, "equip_y": 48.8553 },
//!     { "inst_nom": "Stade Charléty", "coordonnees": { "lon": 2.346, "lat": 48.819 } }
//!   ] }
//! ```
//!
//! `equip_x` is the **longitude** and `equip_y` the **latitude**.  When they
//! are missing the nested `coordonnees` object is used instead.  Rows with no
//! `inst_nom` or no usable coordinate are skipped and counted; they do not
//! fail the page.
//!
//! # CSV format
//!
//! ```csv
//! id,name,address,latitude,longitude
//! I750560001,Gymnase Japy,2 rue Japy,48.8553,2.3812
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use rp_core::Coordinate;
use rp_venue::Facility;

use crate::{FeedResult, Loaded};

// ── JSON records ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FacilityPage {
    #[serde(default)]
    total_count: Option<u64>,
    results: Vec<FacilityRecord>,
}

#[derive(Deserialize)]
struct FacilityRecord {
    #[serde(default)]
    inst_numero: Option<String>,
    #[serde(default)]
    inst_nom: Option<String>,
    #[serde(default)]
    inst_adresse: Option<String>,
    #[serde(default)]
    equip_x: Option<f64>,
    #[serde(default)]
    equip_y: Option<f64>,
    #[serde(default)]
    coordonnees: Option<LonLat>,
}

#[derive(Deserialize)]
struct LonLat {
    lon: f64,
    lat: f64,
}

impl FacilityRecord {
    fn coordinate(&self) -> Option<Coordinate> {
        match (self.equip_y, self.equip_x, &self.coordonnees) {
            (Some(lat), Some(lon), _) => Some(Coordinate::new(lat, lon)),
            (_, _, Some(c)) => Some(Coordinate::new(c.lat, c.lon)),
            _ => None,
        }
    }
}

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FacilityRow {
    id:        String,
    name:      String,
    #[serde(default)]
    address:   String,
    latitude:  f64,
    longitude: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a facility page from a JSON file.
pub fn load_facilities_json(path: &Path) -> FeedResult<Loaded<Facility>> {
    let file = std::fs::File::open(path)?;
    load_facilities_json_reader(file)
}

/// Like [`load_facilities_json`] but accepts any `Read` source.
pub fn load_facilities_json_reader<R: Read>(reader: R) -> FeedResult<Loaded<Facility>> {
    let page: FacilityPage = serde_json::from_reader(reader)?;
    if let Some(total) = page.total_count {
        debug!(total, received = page.results.len(), "facility page decoded");
    }

    let mut out = Loaded::with_capacity(page.results.len());
    for rec in page.results {
        let location = rec.coordinate().filter(|c| c.is_valid());
        let name = rec.inst_nom.filter(|n| !n.trim().is_empty());
        match (name, location) {
            (Some(name), Some(location)) => out.records.push(Facility::new(
                rec.inst_numero.unwrap_or_default(),
                name,
                rec.inst_adresse.unwrap_or_default(),
                location,
            )),
            (None, _) => {
                warn!(id = ?rec.inst_numero, "skipping facility without a name");
                out.skipped += 1;
            }
            (Some(name), None) => {
                warn!(%name, "skipping facility without a usable coordinate");
                out.skipped += 1;
            }
        }
    }
    Ok(out)
}

/// Load facilities from a CSV file.
pub fn load_facilities_csv(path: &Path) -> FeedResult<Loaded<Facility>> {
    let file = std::fs::File::open(path)?;
    load_facilities_csv_reader(file)
}

/// Like [`load_facilities_csv`] but accepts any `Read` source.
pub fn load_facilities_csv_reader<R: Read>(reader: R) -> FeedResult<Loaded<Facility>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut out = Loaded::with_capacity(0);

    for result in csv_reader.deserialize::<FacilityRow>() {
        let row = result?;
        let location = Coordinate::new(row.latitude, row.longitude);
        if !location.is_valid() {
            warn!(id = %row.id, %location, "skipping facility with out-of-range coordinate");
            out.skipped += 1;
            continue;
        }
        out.records.push(Facility::new(row.id, row.name, row.address, location));
    }

    debug!(loaded = out.records.len(), skipped = out.skipped, "facility CSV decoded");
    Ok(out)
}
