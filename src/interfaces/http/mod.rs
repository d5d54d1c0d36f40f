//! HTTP REST API interfaces
//!
//! - `common`: Shared response bodies and extractors
//! - `modules`: Request handlers and DTOs per resource
//! - `router`: API router with Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::create_api_router;
