//! In-memory spot storage

use async_trait::async_trait;
use dashmap::DashMap;

use super::SpotStorage;
use crate::domain::{DomainError, DomainResult, ParkingSpot};

/// In-memory storage backing the spot API.
///
/// Spots are seeded once at construction and live for the process
/// lifetime. DashMap gives per-record locking: a booking's check-and-set
/// runs while holding the record's write guard.
pub struct InMemorySpotStore {
    spots: DashMap<i32, ParkingSpot>,
}

impl InMemorySpotStore {
    /// Create a store seeded with the fixed demo lot.
    pub fn new() -> Self {
        Self::with_spots(seed_spots())
    }

    /// Create a store from an explicit set of spots.
    pub fn with_spots(spots: Vec<ParkingSpot>) -> Self {
        let store = Self {
            spots: DashMap::new(),
        };
        for spot in spots {
            store.spots.insert(spot.id, spot);
        }
        store
    }
}

impl Default for InMemorySpotStore {
    fn default() -> Self {
        Self::new()
    }
}

/// The fixed seed set: four spots, one pre-reserved.
fn seed_spots() -> Vec<ParkingSpot> {
    vec![
        ParkingSpot::new(1, "Quantum Cortex HQ - Basement 1", "A01"),
        ParkingSpot::occupied(2, "Quantum Cortex HQ - Basement 1", "A02", "Arjun"),
        ParkingSpot::new(3, "Quantum Cortex HQ - Basement 1", "A03"),
        ParkingSpot::new(4, "Quantum Cortex HQ - Rooftop", "R01"),
    ]
}

#[async_trait]
impl SpotStorage for InMemorySpotStore {
    async fn list_spots(&self) -> DomainResult<Vec<ParkingSpot>> {
        let mut spots: Vec<ParkingSpot> = self.spots.iter().map(|e| e.value().clone()).collect();
        spots.sort_by_key(|s| s.id);
        Ok(spots)
    }

    async fn get_spot(&self, id: i32) -> DomainResult<Option<ParkingSpot>> {
        Ok(self.spots.get(&id).map(|s| s.clone()))
    }

    async fn book_spot(&self, id: i32, reserved_by: &str) -> DomainResult<ParkingSpot> {
        let mut spot = self
            .spots
            .get_mut(&id)
            .ok_or(DomainError::SpotNotFound(id))?;
        spot.book(reserved_by)?;
        Ok(spot.clone())
    }

    async fn vacate_spot(&self, id: i32) -> DomainResult<ParkingSpot> {
        let mut spot = self
            .spots
            .get_mut(&id)
            .ok_or(DomainError::SpotNotFound(id))?;
        spot.vacate();
        Ok(spot.clone())
    }
}

// ── Tests ──────────────────────────────────────────────────────
