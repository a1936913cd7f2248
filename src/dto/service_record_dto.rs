//! DTOs de registros de mantenimiento

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::service_record::ServiceRecord;

/// Request para registrar un mantenimiento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateServiceRecordRequest {
    pub vehicle_id: Uuid,
    pub service_date: NaiveDate,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    pub cost: Option<Decimal>,
    pub next_service_date: Option<NaiveDate>,
    pub next_service_odometer: Option<i32>,
}

/// Response de registro de mantenimiento
#[derive(Debug, Serialize)]
pub struct ServiceRecordResponse {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub service_date: NaiveDate,
    pub description: Option<String>,
    pub cost: Option<Decimal>,
    pub next_service_date: Option<NaiveDate>,
    pub next_service_odometer: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Filtros para búsqueda de registros de mantenimiento
#[derive(Debug, Deserialize)]
pub struct ServiceRecordFilters {
    pub vehicle_id: Option<Uuid>,
}

impl From<ServiceRecord> for ServiceRecordResponse {
    fn from(record: ServiceRecord) -> Self {
        Self {
            id: record.id,
            vehicle_id: record.vehicle_id,
            service_date: record.service_date,
            description: record.description,
            cost: record.cost,
            next_service_date: record.next_service_date,
            next_service_odometer: record.next_service_odometer,
            created_at: record.created_at,
        }
    }
}
