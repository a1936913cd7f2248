//! Modelo de ServiceRecord
//!
//! Historial de mantenimiento por vehículo, append-only.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// ServiceRecord - mapea exactamente a la tabla service_records
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceRecord {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub service_date: NaiveDate,
    pub description: Option<String>,
    pub cost: Option<Decimal>,
    pub next_service_date: Option<NaiveDate>,
    pub next_service_odometer: Option<i32>,
    pub created_at: DateTime<Utc>,
}
