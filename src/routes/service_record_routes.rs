use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::service_record_controller::ServiceRecordController;
use crate::dto::service_record_dto::{
    CreateServiceRecordRequest, ServiceRecordFilters, ServiceRecordResponse,
};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_service_record_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_service_record))
        .route("/", get(list_service_records))
}

async fn create_service_record(
    State(state): State<AppState>,
    Json(request): Json<CreateServiceRecordRequest>,
) -> Result<Json<ApiResponse<ServiceRecordResponse>>, AppError> {
    let controller = ServiceRecordController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_service_records(
    State(state): State<AppState>,
    Query(filters): Query<ServiceRecordFilters>,
) -> Result<Json<Vec<ServiceRecordResponse>>, AppError> {
    let controller = ServiceRecordController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}
