use bcrypt::{hash, DEFAULT_COST};
use sqlx::PgPool;
use validator::Validate;

use crate::dto::user_dto::{CreateUserRequest, UserFilters, UserResponse};
use crate::dto::ApiResponse;
use crate::models::user::UserRole;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{conflict_error, validation_error, AppError};

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        request.validate().map_err(AppError::Validation)?;

        if UserRole::parse(&request.role).is_none() {
            return Err(validation_error("role", "role must be admin or approver"));
        }

        if self.repository.email_exists(&request.email).await? {
            return Err(conflict_error("User", "email", &request.email));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hasheando password: {}", e)))?;

        let user = self
            .repository
            .create(request.name, request.email, password_hash, request.role)
            .await?;

        Ok(ApiResponse::success_with_message(
            UserResponse::from(user),
            "User created successfully".to_string(),
        ))
    }

    pub async fn list(&self, filters: UserFilters) -> Result<Vec<UserResponse>, AppError> {
        if let Some(role) = &filters.role {
            if UserRole::parse(role).is_none() {
                return Err(validation_error("role", "role must be admin or approver"));
            }
        }

        let users = self.repository.list(filters.role).await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }
}
