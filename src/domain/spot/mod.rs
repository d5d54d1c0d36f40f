//! Parking spot aggregate
//!
//! Contains the ParkingSpot entity and its occupancy transition rules.

pub mod model;

pub use model::ParkingSpot;
