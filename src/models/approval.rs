//! Modelo de ReservationApproval
//!
//! Cada reserva lleva una fila de aprobación por nivel. La fila es
//! inmutable una vez decidida; no existe deshacer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de una fila de aprobación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(ApprovalStatus::Pending),
            "approved" => Some(ApprovalStatus::Approved),
            "rejected" => Some(ApprovalStatus::Rejected),
            _ => None,
        }
    }
}

/// ReservationApproval - mapea exactamente a la tabla reservation_approvals
/// Unique por (reservation_id, approver_id, level).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReservationApproval {
    pub id: Uuid,
    pub reservation_id: Uuid,
    pub approver_id: Uuid,
    pub level: i32,
    pub status: String,
    pub comments: Option<String>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
