//! `rp-area` — what is "around me" right now.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`region`]   | `BoundingRegion`, `compute_bounding_region`, `region_for_reading` |
//! | [`filter`]   | `Candidate` trait, `Entity`, `FilterCriteria`, `filter_entities` |
//! | [`viewport`] | `Viewport::fit` for framing a set of points               |
//!
//! Every operation here is a pure function of its arguments; nothing is
//! cached between calls, so callers may memoise freely.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod filter;
pub mod region;
pub mod viewport;

#[cfg(test)]
mod tests;

pub use filter::{filter_entities, Candidate, Entity, FilterCriteria};
pub use region::{compute_bounding_region, is_within_region, region_for_reading, BoundingRegion};
pub use viewport::Viewport;
