//! Facility record.

use rp_core::{Coordinate, FacilityId};

/// One row of the facility feed.
///
/// The feed lists a physical venue once per activity it hosts, so several
/// records can share a `name` while differing in `id` or even `location`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Facility {
    pub id: FacilityId,
    pub name: String,
    pub address: String,
    pub location: Coordinate,
}

impl Facility {
    pub fn new(
        id: impl Into<FacilityId>,
        name: impl Into<String>,
        address: impl Into<String>,
        location: Coordinate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            location,
        }
    }
}
