//! Modelo de FuelLog
//!
//! Historial de combustible por vehículo, append-only.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// FuelLog - mapea exactamente a la tabla fuel_logs
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FuelLog {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub log_date: NaiveDate,
    pub odometer: i32,
    pub litres: Decimal,
    pub cost: Decimal,
    pub recorded_by: Uuid,
    pub created_at: DateTime<Utc>,
}
