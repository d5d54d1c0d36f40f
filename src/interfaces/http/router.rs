//! API Router with Swagger UI

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::infrastructure::SpotStorage;
use crate::interfaces::http::common::MessageResponse;
use crate::interfaces::http::modules::spots::dto::{
    BookSpotRequest, SpotActionResponse, SpotDto,
};
use crate::interfaces::http::modules::spots::handlers::SpotsAppState;
use crate::interfaces::http::modules::{health, spots};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Spots
        spots::handlers::list_spots,
        spots::handlers::get_spot,
        spots::handlers::book_spot,
        spots::handlers::vacate_spot,
    ),
    components(
        schemas(
            SpotDto,
            BookSpotRequest,
            SpotActionResponse,
            MessageResponse,
            health::handlers::HealthResponse,
        )
    ),
    tags(
        (name = "Health", description = "Service availability checks."),
        (name = "Spots", description = "Parking spot inventory and occupancy. Spots are seeded at startup; booking and vacating flip a spot between free and occupied."),
    ),
    info(
        title = "Park-Smart API",
        version = "1.0.0",
        description = "API for managing parking spots for the Park-Smart application.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(storage: Arc<dyn SpotStorage>) -> Router {
    let spots_state = SpotsAppState { storage };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let spot_routes = Router::new()
        .route("/spots", get(spots::handlers::list_spots))
        .route("/spots/{id}", get(spots::handlers::get_spot))
        .route("/spots/{id}/book", post(spots::handlers::book_spot))
        .route("/spots/{id}/vacate", post(spots::handlers::vacate_spot))
        .with_state(spots_state);

    let swagger_routes = SwaggerUi::new("/api-docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::handlers::health_check))
        // Spots
        .merge(spot_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────
