//! Geographic coordinate type and spherical-Earth geodesy.
//!
//! All math assumes a sphere of radius [`EARTH_RADIUS_KM`].  Distances are
//! kilometres, bearings are degrees clockwise from true north.
//!
//! None of these functions validate their input.  Out-of-range or NaN
//! degrees flow straight through the trigonometry; callers that ingest
//! untrusted records should check [`Coordinate::is_valid`] at the boundary.

/// Mean Earth radius, kilometres.
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Compass bearings accepted by [`Coordinate::destination`].
pub mod bearing {
    pub const NORTH: f64 = 0.0;
    pub const EAST: f64 = 90.0;
    pub const SOUTH: f64 = 180.0;
    pub const WEST: f64 = 270.0;
}

/// A latitude/longitude pair in decimal degrees.
///
/// Double precision: the destination/distance round trip must agree to
/// about one part in a million, which `f32` cannot deliver.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// `true` if both components are finite and inside
    /// `[-90, 90]` × `[-180, 180]`.
    pub fn is_valid(self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Haversine great-circle distance in kilometres.
    pub fn distance_km(self, other: Coordinate) -> f64 {
        let d_lat = (other.latitude - self.latitude).to_radians();
        let d_lon = (other.longitude - self.longitude).to_radians();

        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        EARTH_RADIUS_KM * c
    }

    /// Point reached by travelling `distance_km` along the great circle
    /// leaving `self` at `bearing_deg`.
    ///
    /// A zero-length hop returns `self` bit-for-bit.  Otherwise the resulting
    /// longitude is wrapped back into `[-180, 180]` only when it leaves that
    /// range.
    pub fn destination(self, distance_km: f64, bearing_deg: f64) -> Coordinate {
        if distance_km == 0.0 {
            return self;
        }

        let delta = distance_km / EARTH_RADIUS_KM;
        let theta = bearing_deg.to_radians();

        let lat1 = self.latitude.to_radians();
        let lon1 = self.longitude.to_radians();

        let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
        let lon2 = lon1
            + (theta.sin() * delta.sin() * lat1.cos())
                .atan2(delta.cos() - lat1.sin() * lat2.sin());

        let mut longitude = lon2.to_degrees();
        if !(-180.0..=180.0).contains(&longitude) {
            longitude = (longitude + 540.0).rem_euclid(360.0) - 180.0;
        }

        Coordinate::new(lat2.to_degrees(), longitude)
    }

    /// Arithmetic mean of the two latitudes and of the two longitudes.
    ///
    /// This is not the geodesic midpoint.  It is only meaningful for points
    /// a few tens of kilometres apart, which is all the meeting-venue
    /// lookup ever asks of it.
    #[inline]
    pub fn midpoint(self, other: Coordinate) -> Coordinate {
        Coordinate::new(
            (self.latitude + other.latitude) * 0.5,
            (self.longitude + other.longitude) * 0.5,
        )
    }
}

/// `[latitude, longitude]` pairs, the shape some upstream records use.
impl From<[f64; 2]> for Coordinate {
    #[inline]
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Coordinate::new(latitude, longitude)
    }
}

impl From<Coordinate> for [f64; 2] {
    #[inline]
    fn from(c: Coordinate) -> Self {
        [c.latitude, c.longitude]
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}
