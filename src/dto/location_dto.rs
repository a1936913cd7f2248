//! DTOs de ubicaciones

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::location::Location;

/// Request para crear una nueva ubicación
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLocationRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    /// head_office | branch_office | mine_site
    pub location_type: String,

    #[validate(length(max = 100))]
    pub region: Option<String>,
}

/// Request para actualizar una ubicación existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLocationRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,

    pub location_type: Option<String>,

    #[validate(length(max = 100))]
    pub region: Option<String>,
}

/// Response de ubicación para la API
#[derive(Debug, Serialize)]
pub struct LocationResponse {
    pub id: Uuid,
    pub name: String,
    pub location_type: String,
    pub region: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Filtros para búsqueda de ubicaciones
#[derive(Debug, Deserialize)]
pub struct LocationFilters {
    pub location_type: Option<String>,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            name: location.name,
            location_type: location.location_type,
            region: location.region,
            created_at: location.created_at,
        }
    }
}
