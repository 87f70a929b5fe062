//! User record loader.
//!
//! # JSON format
//!
//! An array of user profiles.  `current_location` comes in two shapes
//! depending on which client wrote the profile:
//!
//! ```json
//! [ { "id": "u1", "username": "ana", "current_location": [48.85, 2.35],
//!     "sexe": "Femme", "ranking": "D8" },
//!   { "id": "u2", "current_location": { "latitude": 48.86, "longitude": 2.33 } } ]
//! ```
//!
//! Unknown `sexe`/`ranking` labels leave the attribute unset rather than
//! failing the load.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use rp_area::Entity;
use rp_core::{Coordinate, Gender, Tier, UserId};

use crate::{FeedResult, Loaded};

#[derive(Deserialize)]
struct UserRecord {
    id: String,
    #[serde(default)]
    username: String,
    #[serde(default)]
    current_location: Option<LocationField>,
    #[serde(default)]
    sexe: Option<String>,
    #[serde(default)]
    ranking: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LocationField {
    Pair([f64; 2]),
    Named(Coordinate),
}

impl From<LocationField> for Coordinate {
    fn from(field: LocationField) -> Self {
        match field {
            LocationField::Pair(pair) => pair.into(),
            LocationField::Named(c) => c,
        }
    }
}

/// Load user profiles from a JSON file.
pub fn load_users_json(path: &Path) -> FeedResult<Loaded<Entity>> {
    let file = std::fs::File::open(path)?;
    load_users_json_reader(file)
}

/// Like [`load_users_json`] but accepts any `Read` source.
pub fn load_users_json_reader<R: Read>(reader: R) -> FeedResult<Loaded<Entity>> {
    let records: Vec<UserRecord> = serde_json::from_reader(reader)?;
    let mut out = Loaded::with_capacity(records.len());

    for rec in records {
        let location = rec.current_location.map(Coordinate::from).filter(|c| c.is_valid());
        let Some(location) = location else {
            warn!(id = %rec.id, "skipping user without a usable location");
            out.skipped += 1;
            continue;
        };

        out.records.push(Entity {
            gender: parse_label::<Gender>(&rec.id, rec.sexe.as_deref()),
            tier: parse_label::<Tier>(&rec.id, rec.ranking.as_deref()),
            id: UserId::new(rec.id),
            username: rec.username,
            location,
        });
    }

    debug!(loaded = out.records.len(), skipped = out.skipped, "users decoded");
    Ok(out)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_label<T: std::str::FromStr>(id: &str, label: Option<&str>) -> Option<T> {
    let label = label?.trim();
    if label.is_empty() {
        return None;
    }
    match label.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            debug!(id, label, "ignoring unrecognised attribute label");
            None
        }
    }
}
