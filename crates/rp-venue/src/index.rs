//! Region-scoped facility lookup.
//!
//! When the whole facility feed is held locally, `FacilityIndex` answers
//! "which facilities fall inside the current search area" without scanning
//! every record.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over `[lat, lon]` points, each tagged with the
//! facility's position in the original feed.  Query hits are sorted back
//! into feed order so downstream tie-breaks stay deterministic.

use rstar::{RTree, RTreeObject, AABB};

use rp_area::{is_within_region, BoundingRegion};

use crate::Facility;

// ── R-tree entry ──────────────────────────────────────────────────────────────

#[derive(Clone)]
struct FacilityEntry {
    point: [f64; 2], // [lat, lon]
    slot: usize,
}

impl RTreeObject for FacilityEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

// ── FacilityIndex ─────────────────────────────────────────────────────────────

/// Owned facility list plus an R-tree over its coordinates.
pub struct FacilityIndex {
    facilities: Vec<Facility>,
    spatial_idx: RTree<FacilityEntry>,
}

impl FacilityIndex {
    pub fn new(facilities: Vec<Facility>) -> Self {
        let entries: Vec<FacilityEntry> = facilities
            .iter()
            .enumerate()
            // NaN can never satisfy a region test; keep it out of the tree.
            .filter(|(_, f)| f.location.latitude.is_finite() && f.location.longitude.is_finite())
            .map(|(slot, f)| FacilityEntry { point: f.location.into(), slot })
            .collect();

        Self {
            facilities,
            spatial_idx: RTree::bulk_load(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }

    /// All facilities, in feed order.
    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    /// Facilities inside `region`, in feed order.
    ///
    /// Same inclusive edge semantics as [`is_within_region`].  A region whose
    /// east edge has wrapped west of its west edge yields nothing.
    pub fn within(&self, region: &BoundingRegion) -> Vec<&Facility> {
        let (min, max) = region.corners();
        // `from_corners` reorders inverted bounds; the exact test below does not.
        let envelope = AABB::from_corners(min, max);

        let mut slots: Vec<usize> = self
            .spatial_idx
            .locate_in_envelope(&envelope)
            .filter(|e| is_within_region(self.facilities[e.slot].location, region))
            .map(|e| e.slot)
            .collect();
        slots.sort_unstable();

        slots.into_iter().map(|s| &self.facilities[s]).collect()
    }
}

impl From<Vec<Facility>> for FacilityIndex {
    fn from(facilities: Vec<Facility>) -> Self {
        Self::new(facilities)
    }
}
