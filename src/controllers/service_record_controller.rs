use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::service_record_dto::{
    CreateServiceRecordRequest, ServiceRecordFilters, ServiceRecordResponse,
};
use crate::dto::ApiResponse;
use crate::repositories::service_record_repository::ServiceRecordRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::{validate_non_negative, validate_positive};

pub struct ServiceRecordController {
    service_records: ServiceRecordRepository,
    vehicles: VehicleRepository,
}

impl ServiceRecordController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            service_records: ServiceRecordRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateServiceRecordRequest,
    ) -> Result<ApiResponse<ServiceRecordResponse>, AppError> {
        request.validate().map_err(AppError::Validation)?;

        if let Some(cost) = request.cost {
            if validate_non_negative(cost).is_err() {
                return Err(validation_error("cost", "cost must not be negative"));
            }
        }
        if let Some(next_service_odometer) = request.next_service_odometer {
            if validate_positive(next_service_odometer).is_err() {
                return Err(validation_error(
                    "next_service_odometer",
                    "next_service_odometer must be positive",
                ));
            }
        }

        self.vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let record = self
            .service_records
            .create(
                request.vehicle_id,
                request.service_date,
                request.description,
                request.cost,
                request.next_service_date,
                request.next_service_odometer,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            ServiceRecordResponse::from(record),
            "Service record created successfully".to_string(),
        ))
    }

    pub async fn list(
        &self,
        filters: ServiceRecordFilters,
    ) -> Result<Vec<ServiceRecordResponse>, AppError> {
        let records = self.service_records.list(filters.vehicle_id).await?;

        Ok(records.into_iter().map(ServiceRecordResponse::from).collect())
    }
}
