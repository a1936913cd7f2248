use std::collections::HashSet;

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::reservation_dto::{
    AvailabilityQuery, AvailabilityResponse, CreateReservationRequest, ReservationDetailResponse,
    ReservationFilters, ReservationListItem, ReservationResponse, UpdateReservationRequest,
};
use crate::dto::ApiResponse;
use crate::models::reservation::ReservationStatus;
use crate::repositories::driver_repository::DriverRepository;
use crate::repositories::location_repository::LocationRepository;
use crate::repositories::reservation_repository::{
    NewReservation, ReservationChanges, ReservationRepository,
};
use crate::repositories::user_repository::UserRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::availability::AvailabilityChecker;
use crate::utils::codes::generate_reservation_code;
use crate::utils::errors::{validation_error, AppError};
use crate::utils::validation::{validate_enum, validate_not_empty};

pub struct ReservationController {
    reservations: ReservationRepository,
    vehicles: VehicleRepository,
    drivers: DriverRepository,
    locations: LocationRepository,
    users: UserRepository,
}

impl ReservationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            reservations: ReservationRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool.clone()),
            locations: LocationRepository::new(pool.clone()),
            users: UserRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        requester_id: Uuid,
        approval_levels: usize,
        request: CreateReservationRequest,
    ) -> Result<ApiResponse<ReservationResponse>, AppError> {
        request.validate().map_err(AppError::Validation)?;

        if request.end_datetime <= request.start_datetime {
            return Err(validation_error(
                "end_datetime",
                "end_datetime must be after start_datetime",
            ));
        }
        if request.start_datetime <= Utc::now() {
            return Err(validation_error(
                "start_datetime",
                "start_datetime must be in the future",
            ));
        }
        if validate_not_empty(&request.purpose).is_err() {
            return Err(validation_error("purpose", "purpose is required"));
        }

        // Un vehicle_id desconocido no produce conflictos, por eso la
        // existencia se valida aparte del chequeo de disponibilidad
        self.vehicles
            .find_by_id(request.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;
        self.drivers
            .find_by_id(request.driver_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;
        self.locations
            .find_by_id(request.destination_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Location not found".to_string()))?;

        self.validate_approver_chain(&request.approver_ids, approval_levels)
            .await?;

        let reservation = self
            .reservations
            .create(NewReservation {
                reservation_code: generate_reservation_code(),
                vehicle_id: request.vehicle_id,
                driver_id: request.driver_id,
                requester_id,
                destination_id: request.destination_id,
                start_datetime: request.start_datetime,
                end_datetime: request.end_datetime,
                purpose: request.purpose,
                approvers: request.approver_ids,
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            ReservationResponse::from(reservation),
            "Reservation created successfully".to_string(),
        ))
    }

    async fn validate_approver_chain(
        &self,
        approver_ids: &[Uuid],
        approval_levels: usize,
    ) -> Result<(), AppError> {
        if approver_ids.len() != approval_levels {
            return Err(validation_error(
                "approver_ids",
                "approver chain must match the configured number of approval levels",
            ));
        }

        let distinct: HashSet<&Uuid> = approver_ids.iter().collect();
        if distinct.len() != approver_ids.len() {
            return Err(validation_error(
                "approver_ids",
                "approver chain must not repeat approvers",
            ));
        }

        let approver_count = self.users.count_approvers(approver_ids).await?;
        if approver_count != approver_ids.len() as i64 {
            return Err(validation_error(
                "approver_ids",
                "every approver must be an existing user with approver role",
            ));
        }

        Ok(())
    }

    pub async fn get_detail(
        &self,
        id: Uuid,
        requester_id: Uuid,
    ) -> Result<ReservationDetailResponse, AppError> {
        let reservation = self
            .reservations
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        if reservation.requester_id != requester_id {
            return Err(AppError::Forbidden(
                "You can only view your own reservations".to_string(),
            ));
        }

        let approvals = self.reservations.approvals_for(id).await?;

        Ok(ReservationDetailResponse {
            reservation: ReservationResponse::from(reservation),
            approvals: approvals.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn list(
        &self,
        requester_id: Uuid,
        filters: ReservationFilters,
    ) -> Result<Vec<ReservationListItem>, AppError> {
        if let Some(status) = &filters.status {
            if validate_enum(status, &ReservationStatus::all()).is_err() {
                return Err(validation_error("status", "invalid reservation status"));
            }
        }

        self.reservations.list(requester_id, filters).await
    }

    pub async fn update(
        &self,
        id: Uuid,
        requester_id: Uuid,
        request: UpdateReservationRequest,
    ) -> Result<ApiResponse<ReservationResponse>, AppError> {
        request.validate().map_err(AppError::Validation)?;

        if let (Some(start), Some(end)) = (request.start_datetime, request.end_datetime) {
            if end <= start {
                return Err(validation_error(
                    "end_datetime",
                    "end_datetime must be after start_datetime",
                ));
            }
        }

        // Por esta vía el status solo puede quedarse o pasar a cancelled
        if let Some(status) = &request.status {
            if validate_enum(
                status,
                &[
                    ReservationStatus::Pending.as_str(),
                    ReservationStatus::Cancelled.as_str(),
                ],
            )
            .is_err()
            {
                return Err(validation_error(
                    "status",
                    "status can only be set to pending or cancelled",
                ));
            }
        }

        if let Some(vehicle_id) = request.vehicle_id {
            self.vehicles
                .find_by_id(vehicle_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;
        }
        if let Some(driver_id) = request.driver_id {
            self.drivers
                .find_by_id(driver_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Driver not found".to_string()))?;
        }
        if let Some(destination_id) = request.destination_id {
            self.locations
                .find_by_id(destination_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Location not found".to_string()))?;
        }

        let reservation = self
            .reservations
            .update(
                id,
                requester_id,
                ReservationChanges {
                    vehicle_id: request.vehicle_id,
                    driver_id: request.driver_id,
                    destination_id: request.destination_id,
                    start_datetime: request.start_datetime,
                    end_datetime: request.end_datetime,
                    purpose: request.purpose,
                    status: request.status,
                },
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            ReservationResponse::from(reservation),
            "Reservation updated successfully".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid, requester_id: Uuid) -> Result<(), AppError> {
        self.reservations.delete(id, requester_id).await
    }

    pub async fn complete(
        &self,
        id: Uuid,
        requester_id: Uuid,
    ) -> Result<ApiResponse<ReservationResponse>, AppError> {
        let reservation = self.reservations.complete(id, requester_id).await?;

        Ok(ApiResponse::success_with_message(
            ReservationResponse::from(reservation),
            "Reservation completed successfully".to_string(),
        ))
    }

    pub async fn check_availability(
        &self,
        query: AvailabilityQuery,
    ) -> Result<AvailabilityResponse, AppError> {
        if query.end_datetime <= query.start_datetime {
            return Err(validation_error(
                "end_datetime",
                "end_datetime must be after start_datetime",
            ));
        }

        self.vehicles
            .find_by_id(query.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehicle not found".to_string()))?;

        let checker = AvailabilityChecker::new(&self.reservations);
        let conflict = checker
            .has_conflict(
                query.vehicle_id,
                query.start_datetime,
                query.end_datetime,
                query.exclude_reservation_id,
            )
            .await?;

        Ok(AvailabilityResponse {
            vehicle_id: query.vehicle_id,
            available: !conflict,
        })
    }
}
