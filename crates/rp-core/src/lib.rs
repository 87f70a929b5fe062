//! `rp-core` — foundational types for the `rallypoint` workspace.
//!
//! This crate is a dependency of every other `rp-*` crate.  It has no
//! `rp-*` dependencies and minimal external ones (only `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`geo`]      | `Coordinate`, haversine distance, destination, midpoint  |
//! | [`ids`]      | `UserId`, `FacilityId`                                   |
//! | [`attrs`]    | `Gender`, `Tier` categorical attributes                  |
//! | [`location`] | `LocationStatus`, `LocationReading`                      |
//! | [`config`]   | `AreaConfig`                                             |
//! | [`error`]    | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod attrs;
pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod location;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use attrs::{Gender, Tier};
pub use config::AreaConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{Coordinate, EARTH_RADIUS_KM};
pub use ids::{FacilityId, UserId};
pub use location::{LocationReading, LocationStatus};
