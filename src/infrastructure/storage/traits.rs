//! Storage trait definitions

use async_trait::async_trait;

use crate::domain::{DomainResult, ParkingSpot};

/// Storage abstraction for parking spots.
///
/// Handlers hold this as `Arc<dyn SpotStorage>`, keeping them decoupled
/// from the backing store. Implementations return cloned snapshots, never
/// references into their own state.
#[async_trait]
pub trait SpotStorage: Send + Sync {
    /// All spots, ordered by id.
    async fn list_spots(&self) -> DomainResult<Vec<ParkingSpot>>;

    /// The spot with the given id, if any.
    async fn get_spot(&self, id: i32) -> DomainResult<Option<ParkingSpot>>;

    /// Transition a free spot to occupied and return the updated record.
    ///
    /// The occupied-check and the mutation must happen under the record
    /// lock, so two concurrent bookings cannot both succeed.
    async fn book_spot(&self, id: i32, reserved_by: &str) -> DomainResult<ParkingSpot>;

    /// Transition a spot to free, regardless of prior state, and return
    /// the updated record.
    async fn vacate_spot(&self, id: i32) -> DomainResult<ParkingSpot>;
}
