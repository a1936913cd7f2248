use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::vehicle_dto::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleFilters, VehicleResponse,
};
use crate::dto::ApiResponse;
use crate::models::vehicle::{Ownership, VehicleStatus, VehicleType};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{conflict_error, not_found_error, validation_error, AppError};
use crate::utils::validation::{validate_enum, validate_license_plate};

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate().map_err(AppError::Validation)?;

        if validate_license_plate(&request.license_plate).is_err() {
            return Err(validation_error("license_plate", "invalid license plate format"));
        }
        if validate_enum(&request.vehicle_type, &VehicleType::all()).is_err() {
            return Err(validation_error("vehicle_type", "vehicle_type must be passenger or cargo"));
        }
        if validate_enum(&request.ownership, &Ownership::all()).is_err() {
            return Err(validation_error("ownership", "ownership must be owned or rented"));
        }

        let status = request
            .status
            .unwrap_or_else(|| VehicleStatus::Available.as_str().to_string());
        if validate_enum(&status, &VehicleStatus::all()).is_err() {
            return Err(validation_error("status", "invalid vehicle status"));
        }

        if self
            .repository
            .license_plate_exists(&request.license_plate, None)
            .await?
        {
            return Err(conflict_error("Vehicle", "license_plate", &request.license_plate));
        }

        let vehicle = self
            .repository
            .create(
                request.name,
                request.license_plate,
                request.vehicle_type,
                request.ownership,
                status,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehicle created successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn list(&self, filters: VehicleFilters) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self
            .repository
            .list(filters.status, filters.vehicle_type)
            .await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate().map_err(AppError::Validation)?;

        if let Some(plate) = &request.license_plate {
            if validate_license_plate(plate).is_err() {
                return Err(validation_error("license_plate", "invalid license plate format"));
            }
            if self.repository.license_plate_exists(plate, Some(id)).await? {
                return Err(conflict_error("Vehicle", "license_plate", plate));
            }
        }
        if let Some(vehicle_type) = &request.vehicle_type {
            if validate_enum(vehicle_type, &VehicleType::all()).is_err() {
                return Err(validation_error("vehicle_type", "vehicle_type must be passenger or cargo"));
            }
        }
        if let Some(ownership) = &request.ownership {
            if validate_enum(ownership, &Ownership::all()).is_err() {
                return Err(validation_error("ownership", "ownership must be owned or rented"));
            }
        }
        if let Some(status) = &request.status {
            if validate_enum(status, &VehicleStatus::all()).is_err() {
                return Err(validation_error("status", "invalid vehicle status"));
            }
        }

        let vehicle = self
            .repository
            .update(
                id,
                request.name,
                request.license_plate,
                request.vehicle_type,
                request.ownership,
                request.status,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehicle updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
