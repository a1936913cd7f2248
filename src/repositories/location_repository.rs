use sqlx::PgPool;
use uuid::Uuid;

use crate::models::location::Location;
use crate::utils::errors::AppError;

pub struct LocationRepository {
    pool: PgPool,
}

impl LocationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        name: String,
        location_type: String,
        region: Option<String>,
    ) -> Result<Location, AppError> {
        let location = sqlx::query_as::<_, Location>(
            r#"
            INSERT INTO locations (name, location_type, region)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(location_type)
        .bind(region)
        .fetch_one(&self.pool)
        .await?;

        Ok(location)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Location>, AppError> {
        let location = sqlx::query_as::<_, Location>("SELECT * FROM locations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(location)
    }

    pub async fn list(&self, location_type: Option<String>) -> Result<Vec<Location>, AppError> {
        let locations = sqlx::query_as::<_, Location>(
            r#"
            SELECT * FROM locations
            WHERE ($1::text IS NULL OR location_type = $1)
            ORDER BY name
            "#,
        )
        .bind(location_type)
        .fetch_all(&self.pool)
        .await?;

        Ok(locations)
    }

    pub async fn update(
        &self,
        id: Uuid,
        name: Option<String>,
        location_type: Option<String>,
        region: Option<String>,
    ) -> Result<Location, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Location not found".to_string()))?;

        let location = sqlx::query_as::<_, Location>(
            r#"
            UPDATE locations
            SET name = $2, location_type = $3, region = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name.unwrap_or(current.name))
        .bind(location_type.unwrap_or(current.location_type))
        .bind(region.or(current.region))
        .fetch_one(&self.pool)
        .await?;

        Ok(location)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM locations WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;

        match result {
            Ok(done) if done.rows_affected() == 0 => {
                Err(AppError::NotFound("Location not found".to_string()))
            }
            Ok(_) => Ok(()),
            Err(e) => {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.code().as_deref() == Some("23503") {
                        return Err(AppError::Conflict(
                            "Location has reservations and cannot be deleted".to_string(),
                        ));
                    }
                }
                Err(AppError::Database(e))
            }
        }
    }
}
