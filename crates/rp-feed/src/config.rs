//! `AreaConfig` loading.
//!
//! ```json
//! { "radius_km": 5.0, "viewport_padding": 0.3 }
//! ```
//!
//! Missing fields take their defaults; the result is validated before it is
//! returned.

use std::io::Read;
use std::path::Path;

use tracing::debug;

use rp_core::AreaConfig;

use crate::FeedResult;

pub fn load_area_config(path: &Path) -> FeedResult<AreaConfig> {
    let file = std::fs::File::open(path)?;
    load_area_config_reader(file)
}

pub fn load_area_config_reader<R: Read>(reader: R) -> FeedResult<AreaConfig> {
    let cfg: AreaConfig = serde_json::from_reader(reader)?;
    cfg.validate()?;
    debug!(radius_km = cfg.radius_km, viewport_padding = cfg.viewport_padding, "area config loaded");
    Ok(cfg)
}
