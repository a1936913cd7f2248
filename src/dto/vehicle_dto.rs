//! DTOs de vehículos

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::Vehicle;

/// Request para crear un nuevo vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(length(min = 3, max = 20))]
    pub license_plate: String,

    /// passenger | cargo
    pub vehicle_type: String,

    /// owned | rented
    pub ownership: String,

    /// available | maintenance | retired
    pub status: Option<String>,
}

/// Request para actualizar un vehículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 3, max = 20))]
    pub license_plate: Option<String>,

    pub vehicle_type: Option<String>,
    pub ownership: Option<String>,
    pub status: Option<String>,
}

/// Response de vehículo para la API
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub name: String,
    pub license_plate: String,
    pub vehicle_type: String,
    pub ownership: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Filtros para búsqueda de vehículos
#[derive(Debug, Deserialize)]
pub struct VehicleFilters {
    pub status: Option<String>,
    pub vehicle_type: Option<String>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            license_plate: vehicle.license_plate,
            vehicle_type: vehicle.vehicle_type,
            ownership: vehicle.ownership,
            status: vehicle.status,
            created_at: vehicle.created_at,
        }
    }
}
