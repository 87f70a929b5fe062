//! nearby — end-to-end walk through the rallypoint crates.
//!
//! A viewer standing in central Paris looks for female players ranked D8 or
//! P10 within 10 km, then asks for a meeting venue with each match.  Users
//! and facilities are embedded below in the shapes the upstream services
//! return.  Set `RUST_LOG=debug` to see the loaders and matcher at work.

use std::io::Cursor;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use rp_area::{filter_entities, region_for_reading, FilterCriteria, Viewport};
use rp_core::{Coordinate, Gender, LocationReading, Tier};
use rp_feed::{load_area_config_reader, load_facilities_json_reader, load_users_json_reader};
use rp_venue::{suggest_venue, FacilityIndex};

// ── Embedded data ─────────────────────────────────────────────────────────────

const CONFIG_JSON: &str = r#"{ "radius_km": 10.0 }"#;

const USERS_JSON: &str = r#"[
    { "id": "u1", "username": "camille", "current_location": [48.8606, 2.3376],
      "sexe": "Femme", "ranking": "D8" },
    { "id": "u2", "username": "hugo", "current_location": [48.8530, 2.3690],
      "sexe": "Homme", "ranking": "D8" },
    { "id": "u3", "username": "lea", "current_location": { "latitude": 48.8420, "longitude": 2.3210 },
      "sexe": "Femme", "ranking": "P10" },
    { "id": "u4", "username": "ines", "current_location": [45.7640, 4.8357],
      "sexe": "Femme", "ranking": "D8" },
    { "id": "u5", "username": "zoe", "current_location": [48.8700, 2.3500],
      "sexe": "Femme", "ranking": "N2" }
]"#;

const FACILITIES_JSON: &str = r#"{
    "total_count": 5,
    "results": [
        { "inst_numero": "I1", "inst_nom": "Gymnase Japy", "inst_adresse": "2 rue Japy",
          "equip_x": 2.3812, "equip_y": 48.8553 },
        { "inst_numero": "I1", "inst_nom": "Gymnase Japy", "inst_adresse": "2 rue Japy",
          "equip_x": 2.3812, "equip_y": 48.8553 },
        { "inst_numero": "I2", "inst_nom": "Centre sportif Saint-Germain", "inst_adresse": "12 rue Lobineau",
          "equip_x": 2.3365, "equip_y": 48.8522 },
        { "inst_numero": "I3", "inst_nom": "Halle Carpentier", "inst_adresse": "81 bd Massena",
          "equip_x": 2.3706, "equip_y": 48.8236 },
        { "inst_numero": "I4", "inst_nom": "Gerland", "inst_adresse": "Lyon",
          "equip_x": 4.8320, "equip_y": 45.7240 }
    ]
}"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_area_config_reader(Cursor::new(CONFIG_JSON)).context("area config")?;
    let reading = LocationReading::ready(Coordinate::new(48.8566, 2.3522));
    let here = reading.coordinate().context("location not ready")?;

    let region = region_for_reading(&reading, &config);
    info!(%here, radius_km = config.radius_km, "search area ready");

    // ── Players ───────────────────────────────────────────────────────────
    let users = load_users_json_reader(Cursor::new(USERS_JSON)).context("user records")?;
    let criteria = FilterCriteria::any()
        .with_gender(Some(Gender::Female))
        .with_tier_toggled(Tier::D8)
        .with_tier_toggled(Tier::P10);

    let players = filter_entities(&users.records, region.as_ref(), &criteria);
    info!(total = users.records.len(), shown = players.len(), "players filtered");

    // ── Venues ────────────────────────────────────────────────────────────
    let loaded = load_facilities_json_reader(Cursor::new(FACILITIES_JSON)).context("facility page")?;
    let index = FacilityIndex::new(loaded.records);
    let nearby: Vec<_> = match &region {
        Some(r) => index.within(r).into_iter().cloned().collect(),
        None => Vec::new(),
    };
    info!(indexed = index.len(), in_area = nearby.len(), "facilities scoped");

    println!("{:<10} {:>22}  {:<30} {:>8}", "player", "position", "venue", "km");
    for player in &players {
        let Some(s) = suggest_venue(here, player.location, &nearby) else {
            println!("{:<10} {:>22}  (no venue in area)", player.username, player.location.to_string());
            continue;
        };
        println!(
            "{:<10} {:>22}  {:<30} {:>8.3}",
            player.username,
            player.location.to_string(),
            s.facility.name,
            s.distance_km,
        );

        if let Some(view) = Viewport::fit(&[here, player.location, s.facility.location], config.viewport_padding) {
            info!(
                center = %view.center,
                lat_delta = view.latitude_delta,
                lon_delta = view.longitude_delta,
                "viewport"
            );
        }
    }

    Ok(())
}
