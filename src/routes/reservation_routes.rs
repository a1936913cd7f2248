use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::reservation_controller::ReservationController;
use crate::dto::reservation_dto::{
    AvailabilityQuery, AvailabilityResponse, CreateReservationRequest, ReservationDetailResponse,
    ReservationFilters, ReservationListItem, ReservationResponse, UpdateReservationRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_reservation_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_reservation))
        .route("/", get(list_reservations))
        .route("/availability", get(check_availability))
        .route("/:id", get(get_reservation))
        .route("/:id", put(update_reservation))
        .route("/:id", delete(delete_reservation))
        .route("/:id/complete", post(complete_reservation))
}

async fn create_reservation(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Json(request): Json<CreateReservationRequest>,
) -> Result<Json<ApiResponse<ReservationResponse>>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let response = controller
        .create(user.user_id, state.config.approval_levels, request)
        .await?;
    Ok(Json(response))
}

async fn list_reservations(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Query(filters): Query<ReservationFilters>,
) -> Result<Json<Vec<ReservationListItem>>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let response = controller.list(user.user_id, filters).await?;
    Ok(Json(response))
}

async fn check_availability(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let response = controller.check_availability(query).await?;
    Ok(Json(response))
}

async fn get_reservation(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReservationDetailResponse>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let response = controller.get_detail(id, user.user_id).await?;
    Ok(Json(response))
}

async fn update_reservation(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateReservationRequest>,
) -> Result<Json<ApiResponse<ReservationResponse>>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let response = controller.update(id, user.user_id, request).await?;
    Ok(Json(response))
}

async fn delete_reservation(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    controller.delete(id, user.user_id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Reservation deleted successfully"
    })))
}

async fn complete_reservation(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ReservationResponse>>, AppError> {
    let controller = ReservationController::new(state.pool.clone());
    let response = controller.complete(id, user.user_id).await?;
    Ok(Json(response))
}
