use axum::{
    extract::{Query, State},
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::fuel_log_controller::FuelLogController;
use crate::dto::fuel_log_dto::{CreateFuelLogRequest, FuelLogFilters, FuelLogResponse};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_fuel_log_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_fuel_log))
        .route("/", get(list_fuel_logs))
}

async fn create_fuel_log(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Json(request): Json<CreateFuelLogRequest>,
) -> Result<Json<ApiResponse<FuelLogResponse>>, AppError> {
    let controller = FuelLogController::new(state.pool.clone());
    let response = controller.create(user.user_id, request).await?;
    Ok(Json(response))
}

async fn list_fuel_logs(
    State(state): State<AppState>,
    Query(filters): Query<FuelLogFilters>,
) -> Result<Json<Vec<FuelLogResponse>>, AppError> {
    let controller = FuelLogController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}
