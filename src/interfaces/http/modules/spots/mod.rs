//! Parking spot module: listing, booking and vacating spots

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;
