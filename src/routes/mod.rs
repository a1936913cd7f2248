//! Rutas de la API
//!
//! Routers por recurso, agrupados por rol: los admins gestionan flota y
//! reservas, los aprobadores su cola de aprobación.

pub mod approval_routes;
pub mod auth_routes;
pub mod driver_routes;
pub mod fuel_log_routes;
pub mod location_routes;
pub mod reservation_routes;
pub mod service_record_routes;
pub mod user_routes;
pub mod vehicle_routes;

use axum::{middleware, Router};

use crate::middleware::auth::{admin_only_middleware, approver_only_middleware, auth_middleware};
use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router(state: AppState) -> Router<AppState> {
    let admin_routes = Router::new()
        .nest("/users", user_routes::create_user_router())
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/drivers", driver_routes::create_driver_router())
        .nest("/locations", location_routes::create_location_router())
        .nest("/reservations", reservation_routes::create_reservation_router())
        .nest("/fuel-logs", fuel_log_routes::create_fuel_log_router())
        .nest(
            "/service-records",
            service_record_routes::create_service_record_router(),
        )
        .layer(middleware::from_fn(admin_only_middleware));

    let approver_routes = Router::new()
        .nest("/approvals", approval_routes::create_approval_router())
        .layer(middleware::from_fn(approver_only_middleware));

    let auth_router = auth_routes::create_auth_router().merge(
        auth_routes::create_auth_session_router()
            .layer(middleware::from_fn_with_state(state.clone(), auth_middleware)),
    );

    let protected_routes = Router::new()
        .merge(admin_routes)
        .merge(approver_routes)
        .layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .nest("/auth", auth_router)
        .merge(protected_routes)
}
