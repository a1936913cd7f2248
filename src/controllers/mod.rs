//! Controllers del sistema
//!
//! Orquestan validación de DTOs, reglas de negocio y repositorios.

pub mod approval_controller;
pub mod auth_controller;
pub mod driver_controller;
pub mod fuel_log_controller;
pub mod location_controller;
pub mod reservation_controller;
pub mod service_record_controller;
pub mod user_controller;
pub mod vehicle_controller;
