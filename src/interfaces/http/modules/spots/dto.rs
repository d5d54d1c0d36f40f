//! Parking spot DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::ParkingSpot;

/// A parking spot as exposed over the wire.
///
/// `reservedBy` serializes as `null` while the spot is free.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = ParkingSpot)]
pub struct SpotDto {
    /// Unique spot ID
    #[schema(example = 1)]
    pub id: i32,
    /// Human-readable location (building, level)
    #[schema(example = "Quantum Cortex HQ - Basement 1")]
    pub location_name: String,
    /// Spot label within the location
    #[schema(example = "A01")]
    pub spot_number: String,
    /// Whether the spot currently has a reservation
    #[schema(example = false)]
    pub is_occupied: bool,
    /// Reserving party; `null` when the spot is free
    #[schema(example = json!(null))]
    pub reserved_by: Option<String>,
}

impl From<ParkingSpot> for SpotDto {
    fn from(spot: ParkingSpot) -> Self {
        Self {
            id: spot.id,
            location_name: spot.location_name,
            spot_number: spot.spot_number,
            is_occupied: spot.is_occupied,
            reserved_by: spot.reserved_by,
        }
    }
}

/// Booking request body
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookSpotRequest {
    /// Who the spot is reserved for
    #[schema(example = "Alister")]
    #[validate(length(min = 1, message = "reservedBy must not be empty"))]
    pub reserved_by: String,
}

/// Confirmation returned by book and vacate
#[derive(Debug, Serialize, ToSchema)]
pub struct SpotActionResponse {
    /// Human-readable confirmation
    #[schema(example = "Spot A01 booked successfully by Alister.")]
    pub message: String,
    /// The spot after the transition
    pub spot: SpotDto,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_spot_serializes_with_null_reserved_by() {
        let dto = SpotDto::from(ParkingSpot::new(1, "Quantum Cortex HQ - Basement 1", "A01"));
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "locationName": "Quantum Cortex HQ - Basement 1",
                "spotNumber": "A01",
                "isOccupied": false,
                "reservedBy": null,
            })
        );
    }

    #[test]
    fn occupied_spot_carries_reserver() {
        let dto = SpotDto::from(ParkingSpot::occupied(
            2,
            "Quantum Cortex HQ - Basement 1",
            "A02",
            "Arjun",
        ));
        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["isOccupied"], serde_json::json!(true));
        assert_eq!(value["reservedBy"], serde_json::json!("Arjun"));
    }

    #[test]
    fn book_request_uses_camel_case_key() {
        let req: BookSpotRequest =
            serde_json::from_str(r#"{"reservedBy": "Alister"}"#).unwrap();
        assert_eq!(req.reserved_by, "Alister");
    }
}
