//! Persistencia de reservas
//!
//! El chequeo de solape y la escritura que protege corren en la misma
//! transacción bajo un advisory lock por vehículo: dos reservas
//! concurrentes del mismo vehículo se serializan y no pueden pasar
//! ambas el chequeo (un UNIQUE no alcanza para exclusión de intervalos).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::dto::reservation_dto::{ReservationFilters, ReservationListItem};
use crate::models::approval::ReservationApproval;
use crate::models::reservation::{Reservation, ReservationStatus};
use crate::services::availability::{BookedWindow, ReservationCalendar};
use crate::utils::errors::{validation_error, AppError};

const CONFLICT_MESSAGE: &str = "Vehicle is not available for the selected time period";

/// Datos de una reserva nueva ya validados por el controller
pub struct NewReservation {
    pub reservation_code: String,
    pub vehicle_id: Uuid,
    pub driver_id: Uuid,
    pub requester_id: Uuid,
    pub destination_id: Uuid,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
    pub purpose: String,
    /// Aprobadores ordenados: posición + 1 = nivel
    pub approvers: Vec<Uuid>,
}

/// Cambios de edición ya validados por el controller
pub struct ReservationChanges {
    pub vehicle_id: Option<Uuid>,
    pub driver_id: Option<Uuid>,
    pub destination_id: Option<Uuid>,
    pub start_datetime: Option<DateTime<Utc>>,
    pub end_datetime: Option<DateTime<Utc>>,
    pub purpose: Option<String>,
    pub status: Option<String>,
}

/// Clave de advisory lock derivada del vehículo
fn vehicle_lock_key(vehicle_id: Uuid) -> i64 {
    vehicle_id.as_u128() as i64
}

/// Chequeo de solape con bordes inclusivos, excluyendo canceladas
async fn overlap_exists(
    conn: &mut PgConnection,
    vehicle_id: Uuid,
    start_datetime: DateTime<Utc>,
    end_datetime: DateTime<Utc>,
    exclude_reservation_id: Option<Uuid>,
) -> Result<bool, AppError> {
    let row: (bool,) = sqlx::query_as(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM reservations
            WHERE vehicle_id = $1
              AND status <> 'cancelled'
              AND start_datetime <= $3
              AND end_datetime >= $2
              AND ($4::uuid IS NULL OR id <> $4)
        )
        "#,
    )
    .bind(vehicle_id)
    .bind(start_datetime)
    .bind(end_datetime)
    .bind(exclude_reservation_id)
    .fetch_one(conn)
    .await?;

    Ok(row.0)
}

pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: NewReservation) -> Result<Reservation, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(vehicle_lock_key(new.vehicle_id))
            .execute(&mut *tx)
            .await?;

        if overlap_exists(
            &mut *tx,
            new.vehicle_id,
            new.start_datetime,
            new.end_datetime,
            None,
        )
        .await?
        {
            return Err(AppError::Conflict(CONFLICT_MESSAGE.to_string()));
        }

        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            INSERT INTO reservations
                (reservation_code, vehicle_id, driver_id, requester_id, destination_id,
                 start_datetime, end_datetime, purpose, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'pending')
            RETURNING *
            "#,
        )
        .bind(&new.reservation_code)
        .bind(new.vehicle_id)
        .bind(new.driver_id)
        .bind(new.requester_id)
        .bind(new.destination_id)
        .bind(new.start_datetime)
        .bind(new.end_datetime)
        .bind(&new.purpose)
        .fetch_one(&mut *tx)
        .await?;

        // Una fila de aprobación pendiente por nivel
        for (index, approver_id) in new.approvers.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO reservation_approvals (reservation_id, approver_id, level)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(reservation.id)
            .bind(approver_id)
            .bind((index + 1) as i32)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(reservation)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Reservation>, AppError> {
        let reservation =
            sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(reservation)
    }

    pub async fn approvals_for(
        &self,
        reservation_id: Uuid,
    ) -> Result<Vec<ReservationApproval>, AppError> {
        let approvals = sqlx::query_as::<_, ReservationApproval>(
            "SELECT * FROM reservation_approvals WHERE reservation_id = $1 ORDER BY level",
        )
        .bind(reservation_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(approvals)
    }

    pub async fn list(
        &self,
        requester_id: Uuid,
        filters: ReservationFilters,
    ) -> Result<Vec<ReservationListItem>, AppError> {
        let items = sqlx::query_as::<_, ReservationListItem>(
            r#"
            SELECT r.id, r.reservation_code, r.purpose, r.status,
                   r.start_datetime, r.end_datetime,
                   r.vehicle_id, v.name AS vehicle_name,
                   v.license_plate AS vehicle_license_plate, v.vehicle_type,
                   d.name AS driver_name, d.phone AS driver_phone,
                   l.name AS destination_name, l.region AS destination_region
            FROM reservations r
            JOIN vehicles v ON v.id = r.vehicle_id
            JOIN drivers d ON d.id = r.driver_id
            JOIN locations l ON l.id = r.destination_id
            WHERE r.requester_id = $1
              AND ($2::text IS NULL OR r.status = $2)
              AND ($3::uuid IS NULL OR r.vehicle_id = $3)
              AND ($4::text IS NULL
                   OR r.reservation_code ILIKE '%' || $4 || '%'
                   OR r.purpose ILIKE '%' || $4 || '%'
                   OR d.name ILIKE '%' || $4 || '%'
                   OR l.name ILIKE '%' || $4 || '%')
            ORDER BY r.start_datetime DESC
            "#,
        )
        .bind(requester_id)
        .bind(filters.status)
        .bind(filters.vehicle_id)
        .bind(filters.search)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn update(
        &self,
        id: Uuid,
        requester_id: Uuid,
        changes: ReservationChanges,
    ) -> Result<Reservation, AppError> {
        let mut tx = self.pool.begin().await?;

        let current =
            sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        if current.requester_id != requester_id {
            return Err(AppError::Forbidden(
                "You can only edit your own reservations".to_string(),
            ));
        }

        // Una reserva completada ya pasó por approved: tampoco se edita
        if current.status == ReservationStatus::Approved.as_str()
            || current.status == ReservationStatus::Completed.as_str()
        {
            return Err(AppError::Forbidden(
                "Cannot edit approved reservations".to_string(),
            ));
        }

        let vehicle_id = changes.vehicle_id.unwrap_or(current.vehicle_id);
        let start_datetime = changes.start_datetime.unwrap_or(current.start_datetime);
        let end_datetime = changes.end_datetime.unwrap_or(current.end_datetime);

        // La ventana combinada también debe respetar start < end
        if end_datetime <= start_datetime {
            return Err(validation_error(
                "end_datetime",
                "end_datetime must be after start_datetime",
            ));
        }

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(vehicle_lock_key(vehicle_id))
            .execute(&mut *tx)
            .await?;

        if overlap_exists(&mut *tx, vehicle_id, start_datetime, end_datetime, Some(id)).await? {
            return Err(AppError::Conflict(CONFLICT_MESSAGE.to_string()));
        }

        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            UPDATE reservations
            SET vehicle_id = $2, driver_id = $3, destination_id = $4,
                start_datetime = $5, end_datetime = $6, purpose = $7,
                status = $8, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(vehicle_id)
        .bind(changes.driver_id.unwrap_or(current.driver_id))
        .bind(changes.destination_id.unwrap_or(current.destination_id))
        .bind(start_datetime)
        .bind(end_datetime)
        .bind(changes.purpose.unwrap_or(current.purpose))
        .bind(changes.status.unwrap_or(current.status))
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(reservation)
    }

    pub async fn delete(&self, id: Uuid, requester_id: Uuid) -> Result<(), AppError> {
        let reservation = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        if reservation.requester_id != requester_id {
            return Err(AppError::Forbidden(
                "You can only delete your own reservations".to_string(),
            ));
        }

        if reservation.status != ReservationStatus::Pending.as_str() {
            return Err(AppError::Forbidden(
                "Only pending reservations can be deleted".to_string(),
            ));
        }

        // Guard de status en el DELETE por si la reserva cambió entre medio
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1 AND status = 'pending'")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::PreconditionFailed(
                "Reservation is no longer pending".to_string(),
            ));
        }

        Ok(())
    }

    /// Transición manual approved -> completed, fuera de la máquina de
    /// estados de aprobación.
    pub async fn complete(&self, id: Uuid, requester_id: Uuid) -> Result<Reservation, AppError> {
        let mut tx = self.pool.begin().await?;

        let current =
            sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        if current.requester_id != requester_id {
            return Err(AppError::Forbidden(
                "You can only complete your own reservations".to_string(),
            ));
        }

        if current.status != ReservationStatus::Approved.as_str() {
            return Err(AppError::PreconditionFailed(
                "Only approved reservations can be completed".to_string(),
            ));
        }

        let reservation = sqlx::query_as::<_, Reservation>(
            r#"
            UPDATE reservations
            SET status = 'completed', updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(reservation)
    }
}

#[async_trait]
impl ReservationCalendar for ReservationRepository {
    async fn overlapping(
        &self,
        vehicle_id: Uuid,
        start_datetime: DateTime<Utc>,
        end_datetime: DateTime<Utc>,
        exclude_reservation_id: Option<Uuid>,
    ) -> Result<Vec<BookedWindow>, AppError> {
        let rows: Vec<(Uuid, DateTime<Utc>, DateTime<Utc>)> = sqlx::query_as(
            r#"
            SELECT id, start_datetime, end_datetime
            FROM reservations
            WHERE vehicle_id = $1
              AND status <> 'cancelled'
              AND start_datetime <= $3
              AND end_datetime >= $2
              AND ($4::uuid IS NULL OR id <> $4)
            ORDER BY start_datetime
            "#,
        )
        .bind(vehicle_id)
        .bind(start_datetime)
        .bind(end_datetime)
        .bind(exclude_reservation_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(reservation_id, start_datetime, end_datetime)| BookedWindow {
                reservation_id,
                start_datetime,
                end_datetime,
            })
            .collect())
    }
}
