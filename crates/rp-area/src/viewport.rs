//! Map framing for a set of points.
//!
//! Used to zoom the map onto "me, the selected player, and the suggested
//! venue".  Works in raw degrees, like the map widgets that consume it.

use rp_core::Coordinate;

/// Centre plus latitude/longitude span, in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub center: Coordinate,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Viewport {
    /// Smallest box enclosing `points`, grown by `padding` (a fraction of
    /// each span) and centred on the box midpoint.
    ///
    /// Returns `None` for an empty slice.  A single point gives a zero-span
    /// viewport.
    pub fn fit(points: &[Coordinate], padding: f64) -> Option<Viewport> {
        let (first, rest) = points.split_first()?;

        let mut min = *first;
        let mut max = *first;
        for p in rest {
            min.latitude = min.latitude.min(p.latitude);
            min.longitude = min.longitude.min(p.longitude);
            max.latitude = max.latitude.max(p.latitude);
            max.longitude = max.longitude.max(p.longitude);
        }

        let scale = 1.0 + padding;
        Some(Viewport {
            center: min.midpoint(max),
            latitude_delta: (max.latitude - min.latitude) * scale,
            longitude_delta: (max.longitude - min.longitude) * scale,
        })
    }

    /// `true` if `point` lies inside the padded span.
    pub fn shows(&self, point: Coordinate) -> bool {
        (point.latitude - self.center.latitude).abs() <= self.latitude_delta * 0.5
            && (point.longitude - self.center.longitude).abs() <= self.longitude_delta * 0.5
    }
}
