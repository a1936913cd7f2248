//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod approval;
pub mod driver;
pub mod fuel_log;
pub mod location;
pub mod reservation;
pub mod service_record;
pub mod user;
pub mod vehicle;
