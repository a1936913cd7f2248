//! Modelo de Location
//!
//! Destinos posibles de una reserva: oficinas y sitios de mina.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Tipo de ubicación
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    HeadOffice,
    BranchOffice,
    MineSite,
}

impl LocationType {
    pub fn all() -> [&'static str; 3] {
        ["head_office", "branch_office", "mine_site"]
    }
}

/// Location - mapea exactamente a la tabla locations
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Location {
    pub id: Uuid,
    pub name: String,
    pub location_type: String,
    pub region: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
