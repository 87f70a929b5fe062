//! Bounding regions around a reference point.
//!
//! A region is four independent compass points, each projected `radius_km`
//! from the centre along a cardinal bearing.  Containment reads latitude
//! bounds from `north`/`south` and longitude bounds from `east`/`west` and
//! ignores the other component of each point.
//!
//! # Known limits
//!
//! Nothing here handles the antimeridian or the poles.  A region whose
//! east point wraps past ±180° ends up with `east.longitude <
//! west.longitude` and contains nothing; a radius that reaches over a pole
//! folds `north` back south.  Both are left as-is.

use rp_core::geo::bearing::{EAST, NORTH, SOUTH, WEST};
use rp_core::{AreaConfig, Coordinate, LocationReading};

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingRegion {
    pub north: Coordinate,
    pub east: Coordinate,
    pub south: Coordinate,
    pub west: Coordinate,
}

impl BoundingRegion {
    /// See [`is_within_region`].
    #[inline]
    pub fn contains(&self, point: Coordinate) -> bool {
        is_within_region(point, self)
    }

    /// `[min_lat, min_lon]` / `[max_lat, max_lon]` corners of the box the
    /// containment test actually checks.
    #[inline]
    pub fn corners(&self) -> ([f64; 2], [f64; 2]) {
        (
            [self.south.latitude, self.west.longitude],
            [self.north.latitude, self.east.longitude],
        )
    }
}

/// Project `center` by `radius_km` towards each cardinal direction.
///
/// A zero or negative radius collapses every side onto `center`.
pub fn compute_bounding_region(center: Coordinate, radius_km: f64) -> BoundingRegion {
    // NaN fails the comparison and is passed through untouched.
    let radius = if radius_km < 0.0 { 0.0 } else { radius_km };

    BoundingRegion {
        north: center.destination(radius, NORTH),
        east:  center.destination(radius, EAST),
        south: center.destination(radius, SOUTH),
        west:  center.destination(radius, WEST),
    }
}

/// Inclusive containment test against the region's four edges.
#[inline]
pub fn is_within_region(point: Coordinate, region: &BoundingRegion) -> bool {
    point.latitude >= region.south.latitude
        && point.latitude <= region.north.latitude
        && point.longitude >= region.west.longitude
        && point.longitude <= region.east.longitude
}

/// Region around the device, once the device knows where it is.
///
/// Returns `None` until `reading` is `Ready`.
pub fn region_for_reading(reading: &LocationReading, config: &AreaConfig) -> Option<BoundingRegion> {
    reading
        .coordinate()
        .map(|here| compute_bounding_region(here, config.radius_km))
}
