//! DTOs de aprobaciones

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::models::approval::ReservationApproval;

/// Request para decidir una aprobación
#[derive(Debug, Deserialize, Validate)]
pub struct DecisionRequest {
    /// approved | rejected
    pub decision: String,

    #[validate(length(max = 1000))]
    pub comments: Option<String>,
}

/// Response de una fila de aprobación
#[derive(Debug, Serialize)]
pub struct ApprovalResponse {
    pub id: Uuid,
    pub reservation_id: Uuid,
    pub approver_id: Uuid,
    pub level: i32,
    pub status: String,
    pub comments: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Response de `decide`: la fila actualizada y el estado resultante
/// de la reserva padre
#[derive(Debug, Serialize)]
pub struct DecisionResponse {
    pub approval: ApprovalResponse,
    pub reservation_status: String,
}

/// Fila de la cola de aprobación con contexto de la reserva
#[derive(Debug, Serialize, FromRow)]
pub struct ApprovalQueueItem {
    pub id: Uuid,
    pub level: i32,
    pub status: String,
    pub comments: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub reservation_id: Uuid,
    pub reservation_code: String,
    pub purpose: String,
    pub reservation_status: String,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
    pub requester_name: String,
    pub vehicle_name: String,
    pub vehicle_license_plate: String,
    pub vehicle_type: String,
    pub driver_name: String,
    pub driver_license_number: String,
    pub destination_name: String,
    pub destination_region: Option<String>,
}

impl From<ReservationApproval> for ApprovalResponse {
    fn from(approval: ReservationApproval) -> Self {
        Self {
            id: approval.id,
            reservation_id: approval.reservation_id,
            approver_id: approval.approver_id,
            level: approval.level,
            status: approval.status,
            comments: approval.comments,
            approved_at: approval.approved_at,
            created_at: approval.created_at,
        }
    }
}
