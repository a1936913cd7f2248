//! Modelo de User
//!
//! Usuarios del sistema: administradores de flota (solicitan reservas)
//! y aprobadores (deciden las aprobaciones).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Rol del usuario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Approver,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Approver => "approver",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "admin" => Some(UserRole::Admin),
            "approver" => Some(UserRole::Approver),
            _ => None,
        }
    }

    pub fn all() -> [&'static str; 2] {
        ["admin", "approver"]
    }
}

/// User - mapea a la tabla users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        for role in UserRole::all() {
            assert_eq!(UserRole::parse(role).map(|r| r.as_str()), Some(role));
        }
        assert!(UserRole::parse("driver").is_none());
    }
}
