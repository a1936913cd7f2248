use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::approval_dto::{ApprovalQueueItem, DecisionRequest, DecisionResponse};
use crate::dto::ApiResponse;
use crate::repositories::approval_repository::ApprovalRepository;
use crate::services::approval_flow::Verdict;
use crate::utils::errors::{validation_error, AppError};

pub struct ApprovalController {
    repository: ApprovalRepository,
}

impl ApprovalController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ApprovalRepository::new(pool),
        }
    }

    pub async fn list_pending(
        &self,
        approver_id: Uuid,
    ) -> Result<Vec<ApprovalQueueItem>, AppError> {
        self.repository.list_pending(approver_id).await
    }

    pub async fn list_history(
        &self,
        approver_id: Uuid,
    ) -> Result<Vec<ApprovalQueueItem>, AppError> {
        self.repository.list_history(approver_id).await
    }

    pub async fn decide(
        &self,
        approval_id: Uuid,
        actor_id: Uuid,
        request: DecisionRequest,
    ) -> Result<ApiResponse<DecisionResponse>, AppError> {
        request.validate().map_err(AppError::Validation)?;

        let verdict = Verdict::parse(&request.decision).ok_or_else(|| {
            validation_error("decision", "decision must be approved or rejected")
        })?;

        let (approval, reservation_status) = self
            .repository
            .decide(approval_id, actor_id, verdict, request.comments)
            .await?;

        Ok(ApiResponse::success_with_message(
            DecisionResponse {
                approval: approval.into(),
                reservation_status,
            },
            "Approval processed successfully".to_string(),
        ))
    }
}
