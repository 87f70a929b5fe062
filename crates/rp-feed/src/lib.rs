//! `rp-feed` — decoding upstream records into `rallypoint` types.
//!
//! The facility registry, the user store, and the app config all arrive as
//! JSON (facilities may also come as CSV exports).  This crate is the
//! boundary where their loose shapes are normalised: coordinates become
//! [`Coordinate`](rp_core::Coordinate)s, labels become typed attributes,
//! and records with unusable coordinates are dropped before the pure
//! `rp-area`/`rp-venue` code ever sees them.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                 |
//! |----------------|----------------------------------------------------------|
//! | [`facilities`] | `load_facilities_json`, `load_facilities_csv` (+ readers) |
//! | [`users`]      | `load_users_json` (+ reader)                             |
//! | [`config`]     | `load_area_config` (+ reader)                            |
//! | [`error`]      | `FeedError`, `FeedResult<T>`                             |

pub mod config;
pub mod error;
pub mod facilities;
pub mod users;


pub use config::{load_area_config, load_area_config_reader};
pub use error::{FeedError, FeedResult};
pub use facilities::{
    load_facilities_csv, load_facilities_csv_reader, load_facilities_json,
    load_facilities_json_reader,
};
pub use users::{load_users_json, load_users_json_reader};

/// Records decoded from one source, plus how many were dropped.
#[derive(Debug)]
pub struct Loaded<T> {
    pub records: Vec<T>,
    /// Rows skipped for an unusable coordinate (missing, non-finite, or out
    /// of range) or, for facilities, a missing name.
    pub skipped: usize,
}

impl<T> Loaded<T> {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self { records: Vec::with_capacity(n), skipped: 0 }
    }
}
