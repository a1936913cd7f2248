use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::location_dto::{
    CreateLocationRequest, LocationFilters, LocationResponse, UpdateLocationRequest,
};
use crate::dto::ApiResponse;
use crate::models::location::LocationType;
use crate::repositories::location_repository::LocationRepository;
use crate::utils::errors::{not_found_error, validation_error, AppError};
use crate::utils::validation::validate_enum;

pub struct LocationController {
    repository: LocationRepository,
}

impl LocationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: LocationRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateLocationRequest,
    ) -> Result<ApiResponse<LocationResponse>, AppError> {
        request.validate().map_err(AppError::Validation)?;

        if validate_enum(&request.location_type, &LocationType::all()).is_err() {
            return Err(validation_error(
                "location_type",
                "location_type must be head_office, branch_office or mine_site",
            ));
        }

        let location = self
            .repository
            .create(request.name, request.location_type, request.region)
            .await?;

        Ok(ApiResponse::success_with_message(
            LocationResponse::from(location),
            "Location created successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<LocationResponse, AppError> {
        let location = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Location", &id.to_string()))?;

        Ok(LocationResponse::from(location))
    }

    pub async fn list(&self, filters: LocationFilters) -> Result<Vec<LocationResponse>, AppError> {
        if let Some(location_type) = &filters.location_type {
            if validate_enum(location_type, &LocationType::all()).is_err() {
                return Err(validation_error("location_type", "invalid location type"));
            }
        }

        let locations = self.repository.list(filters.location_type).await?;

        Ok(locations.into_iter().map(LocationResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateLocationRequest,
    ) -> Result<ApiResponse<LocationResponse>, AppError> {
        request.validate().map_err(AppError::Validation)?;

        if let Some(location_type) = &request.location_type {
            if validate_enum(location_type, &LocationType::all()).is_err() {
                return Err(validation_error("location_type", "invalid location type"));
            }
        }

        let location = self
            .repository
            .update(id, request.name, request.location_type, request.region)
            .await?;

        Ok(ApiResponse::success_with_message(
            LocationResponse::from(location),
            "Location updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}
