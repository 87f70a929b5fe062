//! Tunables shared by the area and viewport computations.

use crate::{CoreError, CoreResult};

/// Search-area configuration.
///
/// Cheap to copy; holds no heap data.  Missing fields in a serialized config
/// fall back to [`AreaConfig::default`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AreaConfig {
    /// Half-width of the search area around the viewer, kilometres.
    pub radius_km: f64,

    /// Extra margin added around a fitted viewport, as a fraction of its
    /// span (0.2 = 20 % wider and taller).
    pub viewport_padding: f64,
}

impl AreaConfig {
    pub const DEFAULT_RADIUS_KM: f64 = 10.0;
    pub const DEFAULT_VIEWPORT_PADDING: f64 = 0.2;

    /// Reject values no computation can make sense of.
    ///
    /// A zero or negative radius is allowed: it collapses the search area
    /// onto the viewer, which is a legitimate (if empty) query.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.radius_km.is_finite() {
            return Err(CoreError::Config(format!(
                "radius_km must be finite, got {}",
                self.radius_km
            )));
        }
        if !self.viewport_padding.is_finite() || self.viewport_padding < 0.0 {
            return Err(CoreError::Config(format!(
                "viewport_padding must be a non-negative number, got {}",
                self.viewport_padding
            )));
        }
        Ok(())
    }
}

impl Default for AreaConfig {
    fn default() -> Self {
        Self {
            radius_km: Self::DEFAULT_RADIUS_KM,
            viewport_padding: Self::DEFAULT_VIEWPORT_PADDING,
        }
    }
}
