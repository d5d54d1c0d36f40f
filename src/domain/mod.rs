//! Domain layer: core business entities and transition rules

pub mod error;
pub mod spot;

pub use error::{DomainError, DomainResult};
pub use spot::ParkingSpot;
