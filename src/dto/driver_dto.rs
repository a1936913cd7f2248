//! DTOs de conductores

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::driver::Driver;

/// Request para crear un nuevo conductor
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(length(min = 3, max = 50))]
    pub license_number: String,

    pub phone: Option<String>,

    pub is_available: Option<bool>,
}

/// Request para actualizar un conductor existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDriverRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 3, max = 50))]
    pub license_number: Option<String>,

    pub phone: Option<String>,
    pub is_available: Option<bool>,
}

/// Response de conductor para la API
#[derive(Debug, Serialize)]
pub struct DriverResponse {
    pub id: Uuid,
    pub name: String,
    pub license_number: String,
    pub phone: Option<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

/// Filtros para búsqueda de conductores
#[derive(Debug, Deserialize)]
pub struct DriverFilters {
    pub is_available: Option<bool>,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id,
            name: driver.name,
            license_number: driver.license_number,
            phone: driver.phone,
            is_available: driver.is_available,
            created_at: driver.created_at,
        }
    }
}
