//! DTOs de reservas

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::dto::approval_dto::ApprovalResponse;
use crate::models::reservation::Reservation;

/// Request para crear una nueva reserva
#[derive(Debug, Deserialize, Validate)]
pub struct CreateReservationRequest {
    pub vehicle_id: Uuid,
    pub driver_id: Uuid,
    pub destination_id: Uuid,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,

    #[validate(length(min = 1, max = 255))]
    pub purpose: String,

    /// Cadena de aprobación ordenada: posición + 1 = nivel
    pub approver_ids: Vec<Uuid>,
}

/// Request para actualizar una reserva existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateReservationRequest {
    pub vehicle_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,
    pub destination_id: Option<Uuid>,
    pub start_datetime: Option<DateTime<Utc>>,
    pub end_datetime: Option<DateTime<Utc>>,

    #[validate(length(min = 1, max = 255))]
    pub purpose: Option<String>,

    /// Solo se admite pending -> cancelled por esta vía
    pub status: Option<String>,
}

/// Response de reserva para la API
#[derive(Debug, Serialize)]
pub struct ReservationResponse {
    pub id: Uuid,
    pub reservation_code: String,
    pub vehicle_id: Uuid,
    pub driver_id: Uuid,
    pub requester_id: Uuid,
    pub destination_id: Uuid,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
    pub purpose: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Response de detalle: reserva con su set de aprobaciones
#[derive(Debug, Serialize)]
pub struct ReservationDetailResponse {
    #[serde(flatten)]
    pub reservation: ReservationResponse,
    pub approvals: Vec<ApprovalResponse>,
}

/// Fila de listado con datos de vehículo, conductor y destino
#[derive(Debug, Serialize, FromRow)]
pub struct ReservationListItem {
    pub id: Uuid,
    pub reservation_code: String,
    pub purpose: String,
    pub status: String,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
    pub vehicle_id: Uuid,
    pub vehicle_name: String,
    pub vehicle_license_plate: String,
    pub vehicle_type: String,
    pub driver_name: String,
    pub driver_phone: Option<String>,
    pub destination_name: String,
    pub destination_region: Option<String>,
}

/// Filtros para búsqueda de reservas
#[derive(Debug, Deserialize)]
pub struct ReservationFilters {
    /// Busca en código, propósito, conductor y destino
    pub search: Option<String>,
    pub status: Option<String>,
    pub vehicle_id: Option<Uuid>,
}

/// Query de consulta de disponibilidad
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub vehicle_id: Uuid,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
    pub exclude_reservation_id: Option<Uuid>,
}

/// Response de consulta de disponibilidad
#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub vehicle_id: Uuid,
    pub available: bool,
}

impl From<Reservation> for ReservationResponse {
    fn from(reservation: Reservation) -> Self {
        Self {
            id: reservation.id,
            reservation_code: reservation.reservation_code,
            vehicle_id: reservation.vehicle_id,
            driver_id: reservation.driver_id,
            requester_id: reservation.requester_id,
            destination_id: reservation.destination_id,
            start_datetime: reservation.start_datetime,
            end_datetime: reservation.end_datetime,
            purpose: reservation.purpose,
            status: reservation.status,
            created_at: reservation.created_at,
        }
    }
}
