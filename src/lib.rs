//! # Park-Smart
//!
//! Parking spot management service: an in-memory inventory of spots
//! exposed over a REST API with Swagger documentation.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities and transition rules
//! - **infrastructure**: External concerns (spot storage)
//! - **interfaces**: REST API with Swagger documentation
//! - **support**: Process-level utilities (graceful shutdown)

pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod support;

pub use config::{default_config_path, AppConfig};

// Re-export storage types for easy access
pub use infrastructure::{InMemorySpotStore, SpotStorage};

// Re-export API router
pub use interfaces::http::create_api_router;
