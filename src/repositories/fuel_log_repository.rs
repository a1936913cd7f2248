use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::fuel_log::FuelLog;
use crate::utils::errors::AppError;

pub struct FuelLogRepository {
    pool: PgPool,
}

impl FuelLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        vehicle_id: Uuid,
        log_date: NaiveDate,
        odometer: i32,
        litres: Decimal,
        cost: Decimal,
        recorded_by: Uuid,
    ) -> Result<FuelLog, AppError> {
        let log = sqlx::query_as::<_, FuelLog>(
            r#"
            INSERT INTO fuel_logs (vehicle_id, log_date, odometer, litres, cost, recorded_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(vehicle_id)
        .bind(log_date)
        .bind(odometer)
        .bind(litres)
        .bind(cost)
        .bind(recorded_by)
        .fetch_one(&self.pool)
        .await?;

        Ok(log)
    }

    pub async fn list(&self, vehicle_id: Option<Uuid>) -> Result<Vec<FuelLog>, AppError> {
        let logs = sqlx::query_as::<_, FuelLog>(
            r#"
            SELECT * FROM fuel_logs
            WHERE ($1::uuid IS NULL OR vehicle_id = $1)
            ORDER BY log_date DESC, created_at DESC
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }
}
