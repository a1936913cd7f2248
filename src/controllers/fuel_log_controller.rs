use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::fuel_log_dto::{CreateFuelLogRequest, FuelLogFilters, FuelLogResponse};
use crate::dto::ApiResponse;
use crate::repositories::fuel_log_repository::FuelLogRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::validate_positive;

pub struct FuelLogController {
    fuel_logs: FuelLogRepository,
    vehicles: VehicleRepository,
}

impl FuelLogController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            fuel_logs: FuelLogRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        recorded_by: Uuid,
        request: CreateFuelLogRequest,
    ) -> Result<ApiResponse<FuelLogResponse>, AppError> {
        request.validate().map_err(AppError::Validation)?;

        if validate_positive(request.odometer).is_err() {
            return Err(validation_error("odometer", "odometer must be positive"));
        }
        if validate_positive(request.litres).is_err() {
            return Err(validation_error("litres", "litres must be positive"));
        }
        if validate_positive(request.cost).is_err() {
            return Err(validation_error("cost", "cost must be positive"));
        }

        self.vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let log = self
            .fuel_logs
            .create(
                request.vehicle_id,
                request.log_date,
                request.odometer,
                request.litres,
                request.cost,
                recorded_by,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            FuelLogResponse::from(log),
            "Fuel log recorded successfully".to_string(),
        ))
    }

    pub async fn list(&self, filters: FuelLogFilters) -> Result<Vec<FuelLogResponse>, AppError> {
        let logs = self.fuel_logs.list(filters.vehicle_id).await?;

        Ok(logs.into_iter().map(FuelLogResponse::from).collect())
    }
}
