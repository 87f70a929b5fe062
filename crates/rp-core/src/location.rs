//! Device location readings.
//!
//! The location provider itself lives outside the workspace.  A reading is
//! the snapshot it hands over: where the device is, and whether that answer
//! can be trusted yet.

use crate::Coordinate;

/// Lifecycle of a device location request.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocationStatus {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Request in flight (permission prompt, GPS warm-up).
    Pending,
    /// Fix obtained.
    Ready,
    /// Permission denied or provider error.
    Failed,
}

#[derive(Copy, Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocationReading {
    pub status: LocationStatus,
    pub position: Option<Coordinate>,
}

impl LocationReading {
    pub fn pending() -> Self {
        Self { status: LocationStatus::Pending, position: None }
    }

    pub fn failed() -> Self {
        Self { status: LocationStatus::Failed, position: None }
    }

    pub fn ready(position: Coordinate) -> Self {
        Self { status: LocationStatus::Ready, position: Some(position) }
    }

    /// The position, but only once the provider reports `Ready`.
    ///
    /// A stale position carried alongside `Pending` or `Failed` is ignored.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self.status {
            LocationStatus::Ready => self.position,
            _ => None,
        }
    }
}
