use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::driver_dto::{
    CreateDriverRequest, DriverFilters, DriverResponse, UpdateDriverRequest,
};
use crate::dto::ApiResponse;
use crate::repositories::driver_repository::DriverRepository;
use crate::utils::errors::{conflict_error, not_found_error, validation_error, AppError};
use crate::utils::validation::validate_phone;

pub struct DriverController {
    repository: DriverRepository,
}

impl DriverController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: DriverRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateDriverRequest,
    ) -> Result<ApiResponse<DriverResponse>, AppError> {
        request.validate().map_err(AppError::Validation)?;

        if let Some(phone) = &request.phone {
            if validate_phone(phone).is_err() {
                return Err(validation_error("phone", "invalid phone number"));
            }
        }

        if self
            .repository
            .license_number_exists(&request.license_number, None)
            .await?
        {
            return Err(conflict_error("Driver", "license_number", &request.license_number));
        }

        let driver = self
            .repository
            .create(
                request.name,
                request.license_number,
                request.phone,
                request.is_available.unwrap_or(true),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            DriverResponse::from(driver),
            "Driver created successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<DriverResponse, AppError> {
        let driver = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Driver", &id.to_string()))?;

        Ok(DriverResponse::from(driver))
    }

    pub async fn list(&self, filters: DriverFilters) -> Result<Vec<DriverResponse>, AppError> {
        let drivers = self.repository.list(filters.is_available).await?;

        Ok(drivers.into_iter().map(DriverResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateDriverRequest,
    ) -> Result<ApiResponse<DriverResponse>, AppError> {
        request.validate().map_err(AppError::Validation)?;

        if let Some(phone) = &request.phone {
            if validate_phone(phone).is_err() {
                return Err(validation_error("phone", "invalid phone number"));
            }
        }

        if let Some(license_number) = &request.license_number {
            if self
                .repository
                .license_number_exists(license_number, Some(id))
                .await?
            {
                return Err(conflict_error("Driver", "license_number", license_number));
            }
        }

        let driver = self
            .repository
            .update(
                id,
                request.name,
                request.license_number,
                request.phone,
                request.is_available,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            DriverResponse::from(driver),
            "Driver updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
