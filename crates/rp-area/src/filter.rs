//! Candidate filtering by area and categorical attributes.
//!
//! The filter selection (gender, accepted tiers) is an immutable
//! [`FilterCriteria`] value that the caller owns and passes in on every
//! call.  Editing it produces a new value.

use std::collections::BTreeSet;

use rp_core::{Coordinate, Gender, Tier, UserId};

use crate::region::{is_within_region, BoundingRegion};

// ── Candidate ─────────────────────────────────────────────────────────────────

/// Anything that can be placed on the map and filtered.
///
/// Implemented by [`Entity`]; applications with richer user records can
/// implement it directly and skip the conversion.
pub trait Candidate {
    fn location(&self) -> Coordinate;

    /// `None` when the profile carries no (recognised) gender.
    fn gender(&self) -> Option<Gender>;

    /// `None` when the profile carries no (recognised) ranking.
    fn tier(&self) -> Option<Tier>;
}

/// A registered user as seen by the area filter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entity {
    pub id: UserId,
    pub username: String,
    pub location: Coordinate,
    pub gender: Option<Gender>,
    pub tier: Option<Tier>,
}

impl Candidate for Entity {
    #[inline]
    fn location(&self) -> Coordinate {
        self.location
    }

    #[inline]
    fn gender(&self) -> Option<Gender> {
        self.gender
    }

    #[inline]
    fn tier(&self) -> Option<Tier> {
        self.tier
    }
}

// ── FilterCriteria ────────────────────────────────────────────────────────────

/// Current filter selection.
///
/// `gender: None` and an empty `tiers` set both mean "any".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterCriteria {
    pub gender: Option<Gender>,
    pub tiers: BTreeSet<Tier>,
}

impl FilterCriteria {
    /// No restriction on either attribute.
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_gender(mut self, gender: Option<Gender>) -> Self {
        self.gender = gender;
        self
    }

    /// Replace the accepted tier set.
    pub fn with_tiers(mut self, tiers: impl IntoIterator<Item = Tier>) -> Self {
        self.tiers = tiers.into_iter().collect();
        self
    }

    /// Add `tier` if absent, remove it if present.
    pub fn with_tier_toggled(mut self, tier: Tier) -> Self {
        if !self.tiers.remove(&tier) {
            self.tiers.insert(tier);
        }
        self
    }

    /// Back to "any tier".
    pub fn cleared_tiers(mut self) -> Self {
        self.tiers.clear();
        self
    }

    pub fn is_unrestricted(&self) -> bool {
        self.gender.is_none() && self.tiers.is_empty()
    }

    /// Attribute test only; location is checked separately.
    ///
    /// A candidate with an unset attribute fails any restriction on it.
    pub fn matches<C: Candidate + ?Sized>(&self, candidate: &C) -> bool {
        let gender_ok = match self.gender {
            None => true,
            Some(wanted) => candidate.gender() == Some(wanted),
        };
        let tier_ok = self.tiers.is_empty()
            || candidate.tier().is_some_and(|t| self.tiers.contains(&t));

        gender_ok && tier_ok
    }
}

// ── filter_entities ───────────────────────────────────────────────────────────

/// Candidates inside `region` that satisfy `criteria`, in input order.
///
/// With no region yet (location still pending) nothing is in view and the
/// result is empty.
pub fn filter_entities<'a, C: Candidate>(
    entities: &'a [C],
    region: Option<&BoundingRegion>,
    criteria: &FilterCriteria,
) -> Vec<&'a C> {
    let Some(region) = region else {
        return Vec::new();
    };

    entities
        .iter()
        .filter(|e| is_within_region(e.location(), region) && criteria.matches(*e))
        .collect()
}
