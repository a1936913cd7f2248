use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::approval_controller::ApprovalController;
use crate::dto::approval_dto::{ApprovalQueueItem, DecisionRequest, DecisionResponse};
use crate::dto::ApiResponse;
use crate::middleware::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_approval_router() -> Router<AppState> {
    Router::new()
        .route("/pending", get(list_pending))
        .route("/history", get(list_history))
        .route("/:id/decide", post(decide))
}

async fn list_pending(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ApprovalQueueItem>>, AppError> {
    let controller = ApprovalController::new(state.pool.clone());
    let response = controller.list_pending(user.user_id).await?;
    Ok(Json(response))
}

async fn list_history(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ApprovalQueueItem>>, AppError> {
    let controller = ApprovalController::new(state.pool.clone());
    let response = controller.list_history(user.user_id).await?;
    Ok(Json(response))
}

async fn decide(
    Extension(user): Extension<AuthenticatedUser>,
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<DecisionRequest>,
) -> Result<Json<ApiResponse<DecisionResponse>>, AppError> {
    let controller = ApprovalController::new(state.pool.clone());
    let response = controller.decide(id, user.user_id, request).await?;
    Ok(Json(response))
}
