//! Parking spot HTTP handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::domain::DomainError;
use crate::infrastructure::SpotStorage;
use crate::interfaces::http::common::{MessageResponse, ValidatedJson};

use super::dto::{BookSpotRequest, SpotActionResponse, SpotDto};

/// Application state for spot handlers.
#[derive(Clone)]
pub struct SpotsAppState {
    pub storage: Arc<dyn SpotStorage>,
}

const SPOT_NOT_FOUND: &str = "Parking spot not found.";
const SPOT_CONFLICT: &str = "Conflict: This spot is already occupied.";

type ErrorResponse = (StatusCode, Json<MessageResponse>);

/// Path ids are parsed leniently: anything that is not an integer simply
/// matches no spot and falls into the not-found path, which is the
/// behaviour clients already rely on.
fn parse_spot_id(raw: &str) -> Option<i32> {
    raw.parse().ok()
}

fn not_found() -> ErrorResponse {
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse::new(SPOT_NOT_FOUND)),
    )
}

fn internal_error(err: DomainError) -> ErrorResponse {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageResponse::new(err.to_string())),
    )
}

/// List all parking spots
///
/// Fetches every parking spot and its current status.
#[utoipa::path(
    get,
    path = "/spots",
    tag = "Spots",
    responses(
        (status = 200, description = "A list of parking spots", body = [SpotDto])
    )
)]
pub async fn list_spots(
    State(state): State<SpotsAppState>,
) -> Result<Json<Vec<SpotDto>>, ErrorResponse> {
    match state.storage.list_spots().await {
        Ok(spots) => Ok(Json(spots.into_iter().map(Into::into).collect())),
        Err(e) => Err(internal_error(e)),
    }
}

/// Get a single parking spot by ID
#[utoipa::path(
    get,
    path = "/spots/{id}",
    tag = "Spots",
    params(
        ("id" = i32, Path, description = "The numeric ID of the parking spot")
    ),
    responses(
        (status = 200, description = "Details of the parking spot", body = SpotDto),
        (status = 404, description = "Parking spot not found", body = MessageResponse)
    )
)]
pub async fn get_spot(
    State(state): State<SpotsAppState>,
    Path(id): Path<String>,
) -> Result<Json<SpotDto>, ErrorResponse> {
    let Some(id) = parse_spot_id(&id) else {
        return Err(not_found());
    };
    match state.storage.get_spot(id).await {
        Ok(Some(spot)) => Ok(Json(spot.into())),
        Ok(None) => Err(not_found()),
        Err(e) => Err(internal_error(e)),
    }
}

/// Book a specific parking spot
///
/// Marks the spot as occupied by the party named in the request body.
/// Booking an already-occupied spot is a conflict and leaves the spot
/// unchanged.
#[utoipa::path(
    post,
    path = "/spots/{id}/book",
    tag = "Spots",
    params(
        ("id" = i32, Path, description = "The numeric ID of the parking spot to book")
    ),
    request_body = BookSpotRequest,
    responses(
        (status = 200, description = "Spot booked successfully", body = SpotActionResponse),
        (status = 404, description = "Parking spot not found", body = MessageResponse),
        (status = 409, description = "Spot is already occupied", body = MessageResponse)
    )
)]
pub async fn book_spot(
    State(state): State<SpotsAppState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<BookSpotRequest>,
) -> Result<Json<SpotActionResponse>, ErrorResponse> {
    let Some(id) = parse_spot_id(&id) else {
        return Err(not_found());
    };
    match state.storage.book_spot(id, &request.reserved_by).await {
        Ok(spot) => {
            info!("Spot {} booked by {}", spot.spot_number, request.reserved_by);
            let message = format!(
                "Spot {} booked successfully by {}.",
                spot.spot_number, request.reserved_by
            );
            Ok(Json(SpotActionResponse {
                message,
                spot: spot.into(),
            }))
        }
        Err(DomainError::SpotNotFound(_)) => Err(not_found()),
        Err(DomainError::SpotOccupied(_)) => Err((
            StatusCode::CONFLICT,
            Json(MessageResponse::new(SPOT_CONFLICT)),
        )),
    }
}

/// Vacate a specific parking spot
///
/// Marks the spot as free. Vacating a spot that is already free succeeds
/// and leaves it free.
#[utoipa::path(
    post,
    path = "/spots/{id}/vacate",
    tag = "Spots",
    params(
        ("id" = i32, Path, description = "The numeric ID of the parking spot to vacate")
    ),
    responses(
        (status = 200, description = "Spot vacated successfully", body = SpotActionResponse),
        (status = 404, description = "Parking spot not found", body = MessageResponse)
    )
)]
pub async fn vacate_spot(
    State(state): State<SpotsAppState>,
    Path(id): Path<String>,
) -> Result<Json<SpotActionResponse>, ErrorResponse> {
    let Some(id) = parse_spot_id(&id) else {
        return Err(not_found());
    };
    match state.storage.vacate_spot(id).await {
        Ok(spot) => {
            info!("Spot {} vacated", spot.spot_number);
            let message = format!("Spot {} vacated successfully.", spot.spot_number);
            Ok(Json(SpotActionResponse {
                message,
                spot: spot.into(),
            }))
        }
        Err(DomainError::SpotNotFound(_)) => Err(not_found()),
        Err(e) => Err(internal_error(e)),
    }
}
