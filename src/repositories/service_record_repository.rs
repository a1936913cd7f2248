use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::service_record::ServiceRecord;
use crate::utils::errors::AppError;

pub struct ServiceRecordRepository {
    pool: PgPool,
}

impl ServiceRecordRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        vehicle_id: Uuid,
        service_date: NaiveDate,
        description: Option<String>,
        cost: Option<Decimal>,
        next_service_date: Option<NaiveDate>,
        next_service_odometer: Option<i32>,
    ) -> Result<ServiceRecord, AppError> {
        let record = sqlx::query_as::<_, ServiceRecord>(
            r#"
            INSERT INTO service_records
                (vehicle_id, service_date, description, cost, next_service_date, next_service_odometer)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(vehicle_id)
        .bind(service_date)
        .bind(description)
        .bind(cost)
        .bind(next_service_date)
        .bind(next_service_odometer)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn list(&self, vehicle_id: Option<Uuid>) -> Result<Vec<ServiceRecord>, AppError> {
        let records = sqlx::query_as::<_, ServiceRecord>(
            r#"
            SELECT * FROM service_records
            WHERE ($1::uuid IS NULL OR vehicle_id = $1)
            ORDER BY service_date DESC, created_at DESC
            "#,
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
