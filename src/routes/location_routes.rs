use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::location_controller::LocationController;
use crate::dto::location_dto::{
    CreateLocationRequest, LocationFilters, LocationResponse, UpdateLocationRequest,
};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_location_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_location))
        .route("/", get(list_locations))
        .route("/:id", get(get_location))
        .route("/:id", put(update_location))
        .route("/:id", delete(delete_location))
}

async fn create_location(
    State(state): State<AppState>,
    Json(request): Json<CreateLocationRequest>,
) -> Result<Json<ApiResponse<LocationResponse>>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LocationResponse>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_locations(
    State(state): State<AppState>,
    Query(filters): Query<LocationFilters>,
) -> Result<Json<Vec<LocationResponse>>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateLocationRequest>,
) -> Result<Json<ApiResponse<LocationResponse>>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = LocationController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Location deleted successfully"
    })))
}
