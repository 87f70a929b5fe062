//! Unit tests for rp-area.
//!
//! Most tests build a 10 km region around central Paris and place users
//! relative to its edges.

#[cfg(test)]
mod helpers {
    use rp_core::{Coordinate, Gender, Tier, UserId};

    use crate::Entity;

    pub const PARIS: Coordinate = Coordinate { latitude: 48.8566, longitude: 2.3522 };

    pub fn user(id: &str, at: Coordinate, gender: Option<Gender>, tier: Option<Tier>) -> Entity {
        Entity {
            id: UserId::new(id),
            username: format!("player-{id}"),
            location: at,
            gender,
            tier,
        }
    }

    pub fn ids<'a>(found: &[&'a Entity]) -> Vec<&'a str> {
        found.iter().map(|e| e.id.as_str()).collect()
    }
}

// ── Bounding region ───────────────────────────────────────────────────────────

#[cfg(test)]
mod region {
    use rp_core::{AreaConfig, Coordinate, LocationReading};

    use super::helpers::PARIS;
    use crate::{compute_bounding_region, is_within_region, region_for_reading};

    #[test]
    fn sides_are_radius_away() {
        let r = compute_bounding_region(PARIS, 10.0);
        for side in [r.north, r.east, r.south, r.west] {
            let d = PARIS.distance_km(side);
            assert!((d - 10.0).abs() < 1e-6, "side {side} at {d} km");
        }
        assert!(r.north.latitude > r.south.latitude);
        assert!(r.east.longitude > r.west.longitude);
    }

    #[test]
    fn center_is_inside() {
        for radius in [0.01, 1.0, 10.0, 250.0] {
            let r = compute_bounding_region(PARIS, radius);
            assert!(is_within_region(PARIS, &r), "radius {radius}");
        }
    }

    #[test]
    fn edges_are_inclusive() {
        let r = compute_bounding_region(PARIS, 10.0);
        let on_north_edge = Coordinate::new(r.north.latitude, PARIS.longitude);
        let on_west_edge = Coordinate::new(PARIS.latitude, r.west.longitude);
        assert!(r.contains(on_north_edge));
        assert!(r.contains(on_west_edge));
    }

    #[test]
    fn degenerate_radius_collapses_to_center() {
        for radius in [0.0, -5.0] {
            let r = compute_bounding_region(PARIS, radius);
            assert_eq!(r.north, PARIS);
            assert_eq!(r.east, PARIS);
            assert_eq!(r.south, PARIS);
            assert_eq!(r.west, PARIS);
            assert!(r.contains(PARIS));
        }
    }

    #[test]
    fn nan_radius_passes_through() {
        let r = compute_bounding_region(PARIS, f64::NAN);
        for side in [r.north, r.east, r.south, r.west] {
            assert!(side.latitude.is_nan(), "side {side}");
        }
        assert!(!r.contains(PARIS));
    }

    #[test]
    fn corners_match_containment_bounds() {
        let r = compute_bounding_region(PARIS, 3.0);
        let (min, max) = r.corners();
        assert_eq!(min, [r.south.latitude, r.west.longitude]);
        assert_eq!(max, [r.north.latitude, r.east.longitude]);
    }

    #[test]
    fn region_waits_for_ready_reading() {
        let cfg = AreaConfig::default();
        assert!(region_for_reading(&LocationReading::pending(), &cfg).is_none());
        assert!(region_for_reading(&LocationReading::failed(), &cfg).is_none());

        let r = region_for_reading(&LocationReading::ready(PARIS), &cfg).unwrap();
        assert_eq!(r, compute_bounding_region(PARIS, cfg.radius_km));
    }
}

// ── Entity filter ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod filter {
    use rp_core::geo::bearing::{EAST, NORTH, SOUTH};
    use rp_core::{Gender, Tier};

    use super::helpers::{ids, user, PARIS};
    use crate::{compute_bounding_region, filter_entities, Entity, FilterCriteria};

    #[test]
    fn empty_input_gives_empty_output() {
        let r = compute_bounding_region(PARIS, 10.0);
        let none: Vec<Entity> = Vec::new();
        assert!(filter_entities(&none, Some(&r), &FilterCriteria::any()).is_empty());
    }

    #[test]
    fn no_region_gives_empty_output() {
        let users = vec![user("a", PARIS, None, None)];
        let criteria = FilterCriteria::any().with_gender(Some(Gender::Male));
        assert!(filter_entities(&users, None, &criteria).is_empty());
        assert!(filter_entities(&users, None, &FilterCriteria::any()).is_empty());
    }

    #[test]
    fn only_users_inside_region_survive() {
        let r = compute_bounding_region(PARIS, 10.0);
        let users = vec![
            user("center", PARIS, None, None),
            user("north", r.north.destination(1.0, NORTH), None, None),
            user("south", r.south.destination(1.0, SOUTH), None, None),
        ];
        let found = filter_entities(&users, Some(&r), &FilterCriteria::any());
        assert_eq!(ids(&found), ["center"]);
    }

    #[test]
    fn east_of_region_is_excluded() {
        let r = compute_bounding_region(PARIS, 10.0);
        let users = vec![user("east", r.east.destination(0.5, EAST), None, None)];
        assert!(filter_entities(&users, Some(&r), &FilterCriteria::any()).is_empty());
    }

    #[test]
    fn gender_filter() {
        let r = compute_bounding_region(PARIS, 10.0);
        let users = vec![
            user("m", PARIS, Some(Gender::Male), None),
            user("f", PARIS, Some(Gender::Female), None),
            user("unset", PARIS, None, None),
        ];
        let women = FilterCriteria::any().with_gender(Some(Gender::Female));
        assert_eq!(ids(&filter_entities(&users, Some(&r), &women)), ["f"]);

        let all = filter_entities(&users, Some(&r), &FilterCriteria::any());
        assert_eq!(ids(&all), ["m", "f", "unset"]);
    }

    #[test]
    fn tier_filter_and_order_preserved() {
        let r = compute_bounding_region(PARIS, 10.0);
        let users = vec![
            user("d8", PARIS, None, Some(Tier::D8)),
            user("n2", PARIS, None, Some(Tier::N2)),
            user("nc", PARIS, None, Some(Tier::NC)),
            user("p10", PARIS, None, Some(Tier::P10)),
            user("unranked", PARIS, None, None),
        ];
        let criteria = FilterCriteria::any().with_tiers([Tier::P10, Tier::D8, Tier::NC]);
        let found = filter_entities(&users, Some(&r), &criteria);
        assert_eq!(ids(&found), ["d8", "nc", "p10"]);
    }

    #[test]
    fn combined_filters() {
        let r = compute_bounding_region(PARIS, 10.0);
        let users = vec![
            user("a", PARIS, Some(Gender::Male), Some(Tier::R4)),
            user("b", PARIS, Some(Gender::Female), Some(Tier::R4)),
            user("c", PARIS, Some(Gender::Female), Some(Tier::R6)),
        ];
        let criteria = FilterCriteria::any()
            .with_gender(Some(Gender::Female))
            .with_tiers([Tier::R4]);
        assert_eq!(ids(&filter_entities(&users, Some(&r), &criteria)), ["b"]);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let r = compute_bounding_region(PARIS, 10.0);
        let users = vec![
            user("a", PARIS, Some(Gender::Male), Some(Tier::R4)),
            user("b", PARIS, Some(Gender::Female), Some(Tier::N1)),
        ];
        let criteria = FilterCriteria::any().with_tiers([Tier::N1]);
        let first = filter_entities(&users, Some(&r), &criteria);
        let second = filter_entities(&users, Some(&r), &criteria);
        assert_eq!(first, second);
    }

    #[test]
    fn toggle_and_clear_tiers() {
        let c = FilterCriteria::any()
            .with_tier_toggled(Tier::N1)
            .with_tier_toggled(Tier::R5);
        assert_eq!(c.tiers.len(), 2);
        assert!(!c.is_unrestricted());

        let c = c.with_tier_toggled(Tier::N1);
        assert_eq!(c.tiers.iter().copied().collect::<Vec<_>>(), [Tier::R5]);

        let c = c.cleared_tiers();
        assert!(c.is_unrestricted());
    }
}

// ── Viewport ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod viewport {
    use rp_core::Coordinate;

    use crate::Viewport;

    #[test]
    fn empty_has_no_viewport() {
        assert!(Viewport::fit(&[], 0.2).is_none());
    }

    #[test]
    fn single_point_has_zero_span() {
        let p = Coordinate::new(48.0, 2.0);
        let v = Viewport::fit(&[p], 0.2).unwrap();
        assert_eq!(v.center, p);
        assert_eq!(v.latitude_delta, 0.0);
        assert_eq!(v.longitude_delta, 0.0);
    }

    #[test]
    fn padded_box_around_points() {
        let pts = [
            Coordinate::new(48.0, 2.0),
            Coordinate::new(49.0, 2.5),
            Coordinate::new(48.5, 3.0),
        ];
        let v = Viewport::fit(&pts, 0.2).unwrap();
        assert!((v.center.latitude - 48.5).abs() < 1e-12);
        assert!((v.center.longitude - 2.5).abs() < 1e-12);
        assert!((v.latitude_delta - 1.2).abs() < 1e-12);
        assert!((v.longitude_delta - 1.2).abs() < 1e-12);
        for p in pts {
            assert!(v.shows(p), "{p} should be visible");
        }
        assert!(!v.shows(Coordinate::new(50.0, 2.5)));
    }
}
