//! Domain errors

use thiserror::Error;

/// Domain-level error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// No spot with the requested id exists
    #[error("Parking spot not found: {0}")]
    SpotNotFound(i32),

    /// Booking attempted against a spot that is already occupied
    #[error("Parking spot {0} is already occupied")]
    SpotOccupied(i32),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
