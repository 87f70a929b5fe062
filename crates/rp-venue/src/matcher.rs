//! Nearest-facility matching.
//!
//! The usual flow when a player is selected on the map:
//!
//! ```text
//! meeting point = midpoint(viewer, player)
//! candidates    = deduplicate_by_name(feed)
//! venue         = find_nearest(meeting point, candidates)
//! ```
//!
//! [`suggest_venue`] runs all three.  Nothing is cached: the feed is a few
//! hundred rows at most and each step is a single linear pass.

use rustc_hash::FxHashSet;
use tracing::debug;

use rp_core::Coordinate;

use crate::Facility;

/// Keep the first record of each distinct `name`, in first-seen order.
///
/// Later records with the same name are dropped whatever their other
/// fields say.
pub fn deduplicate_by_name(facilities: &[Facility]) -> Vec<&Facility> {
    let mut seen: FxHashSet<&str> =
        FxHashSet::with_capacity_and_hasher(facilities.len(), Default::default());

    facilities
        .iter()
        .filter(|f| seen.insert(f.name.as_str()))
        .collect()
}

/// The facility with the smallest haversine distance to `point`.
///
/// Returns `None` for an empty input.  Ties go to the earliest facility in
/// iteration order: a later candidate replaces the current best only when
/// strictly closer.  A NaN distance loses to any finite one wherever it sits
/// in the input; only an all-NaN input returns a NaN candidate (the first).
pub fn find_nearest<'a, I>(point: Coordinate, facilities: I) -> Option<&'a Facility>
where
    I: IntoIterator<Item = &'a Facility>,
{
    nearest_with_distance(point, facilities).map(|(f, _)| f)
}

fn nearest_with_distance<'a, I>(point: Coordinate, facilities: I) -> Option<(&'a Facility, f64)>
where
    I: IntoIterator<Item = &'a Facility>,
{
    facilities
        .into_iter()
        .map(|f| (f, point.distance_km(f.location)))
        .reduce(|best, next| {
            let replaces = next.1 < best.1 || (best.1.is_nan() && !next.1.is_nan());
            if replaces { next } else { best }
        })
}

// ── Suggestion ────────────────────────────────────────────────────────────────

/// Venue proposed for two players to meet at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VenueSuggestion<'a> {
    pub facility: &'a Facility,
    /// Midpoint between the two players.
    pub meeting_point: Coordinate,
    /// Distance from `meeting_point` to the facility, kilometres.
    pub distance_km: f64,
}

/// Closest distinct venue to the midpoint between `viewer` and `other`.
///
/// `None` when `facilities` is empty.
pub fn suggest_venue<'a>(
    viewer: Coordinate,
    other: Coordinate,
    facilities: &'a [Facility],
) -> Option<VenueSuggestion<'a>> {
    let meeting_point = viewer.midpoint(other);
    let candidates = deduplicate_by_name(facilities);

    debug!(
        %meeting_point,
        records = facilities.len(),
        distinct = candidates.len(),
        "matching venue"
    );

    let (facility, distance_km) = nearest_with_distance(meeting_point, candidates)?;

    debug!(venue = %facility.name, distance_km, "venue suggested");

    Some(VenueSuggestion { facility, meeting_point, distance_km })
}
