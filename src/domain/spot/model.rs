//! Parking spot domain entity

use crate::domain::error::{DomainError, DomainResult};

/// A single trackable parking location with occupancy state.
///
/// A spot cycles between free (`is_occupied == false`, `reserved_by ==
/// None`) and occupied (`is_occupied == true`, `reserved_by == Some(..)`).
/// The two fields always change together; there is no terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParkingSpot {
    /// Unique spot ID, assigned at seed time
    pub id: i32,
    /// Human-readable location (building, level)
    pub location_name: String,
    /// Spot label within the location (e.g. "A01")
    pub spot_number: String,
    /// Whether the spot currently has a reservation
    pub is_occupied: bool,
    /// Reserving party. `Some` iff `is_occupied`
    pub reserved_by: Option<String>,
}

impl ParkingSpot {
    /// Create a free spot.
    pub fn new(
        id: i32,
        location_name: impl Into<String>,
        spot_number: impl Into<String>,
    ) -> Self {
        Self {
            id,
            location_name: location_name.into(),
            spot_number: spot_number.into(),
            is_occupied: false,
            reserved_by: None,
        }
    }

    /// Create a spot already reserved by `reserved_by` (seed data).
    pub fn occupied(
        id: i32,
        location_name: impl Into<String>,
        spot_number: impl Into<String>,
        reserved_by: impl Into<String>,
    ) -> Self {
        Self {
            id,
            location_name: location_name.into(),
            spot_number: spot_number.into(),
            is_occupied: true,
            reserved_by: Some(reserved_by.into()),
        }
    }

    /// Whether the spot has no reservation.
    pub fn is_free(&self) -> bool {
        !self.is_occupied
    }

    /// Book this spot for `reserved_by`.
    ///
    /// Fails with `DomainError::SpotOccupied` if the spot already has a
    /// reservation, including when the same party holds it. The spot is
    /// left unchanged on failure.
    pub fn book(&mut self, reserved_by: impl Into<String>) -> DomainResult<()> {
        if self.is_occupied {
            return Err(DomainError::SpotOccupied(self.id));
        }
        self.is_occupied = true;
        self.reserved_by = Some(reserved_by.into());
        Ok(())
    }

    /// Vacate this spot, regardless of prior state.
    ///
    /// Vacating a free spot is a no-op.
    pub fn vacate(&mut self) {
        self.is_occupied = false;
        self.reserved_by = None;
    }
}

// ── Tests ──────────────────────────────────────────────────────
