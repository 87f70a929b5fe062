//! `rp-venue` — sports facilities and meeting-venue suggestions.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`facility`] | `Facility` record                                         |
//! | [`matcher`]  | `deduplicate_by_name`, `find_nearest`, `suggest_venue`    |
//! | [`index`]    | `FacilityIndex` (R-tree) for region-scoped lookups        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod facility;
pub mod index;
pub mod matcher;


pub use facility::Facility;
pub use index::FacilityIndex;
pub use matcher::{deduplicate_by_name, find_nearest, suggest_venue, VenueSuggestion};
