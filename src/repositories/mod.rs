//! Repositorios de persistencia
//!
//! Un repositorio por agregado; todos trabajan sobre el pool de
//! PostgreSQL con queries en runtime.

pub mod approval_repository;
pub mod driver_repository;
pub mod fuel_log_repository;
pub mod location_repository;
pub mod reservation_repository;
pub mod service_record_repository;
pub mod user_repository;
pub mod vehicle_repository;
