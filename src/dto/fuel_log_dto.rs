//! DTOs de registros de combustible

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::fuel_log::FuelLog;

/// Request para registrar una carga de combustible
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFuelLogRequest {
    pub vehicle_id: Uuid,
    pub log_date: NaiveDate,
    pub odometer: i32,
    pub litres: Decimal,
    pub cost: Decimal,
}

/// Response de registro de combustible
#[derive(Debug, Serialize)]
pub struct FuelLogResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub log_date: NaiveDate,
    pub odometer: i32,
    pub litres: Decimal,
    pub cost: Decimal,
    pub recorded_by: Uuid,
    pub created_at: DateTime<Utc>,
}

/// Filtros para búsqueda de registros de combustible
#[derive(Debug, Deserialize)]
pub struct FuelLogFilters {
    pub vehicle_id: Option<Uuid>,
}

impl From<FuelLog> for FuelLogResponse {
    fn from(log: FuelLog) -> Self {
        Self {
            id: log.id,
            vehicle_id: log.vehicle_id,
            log_date: log.log_date,
            odometer: log.odometer,
            litres: log.litres,
            cost: log.cost,
            recorded_by: log.recorded_by,
            created_at: log.created_at,
        }
    }
}
