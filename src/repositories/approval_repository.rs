//! Persistencia de aprobaciones
//!
//! `decide` ejecuta los tres pasos (actualizar la fila, recontar
//! hermanas, transicionar la reserva) como una sola transacción con la
//! fila de la reserva bloqueada FOR UPDATE: dos aprobadores decidiendo
//! a la vez sobre el mismo set se serializan y el recuento final no se
//! pierde.

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::approval_dto::ApprovalQueueItem;
use crate::models::approval::ReservationApproval;
use crate::models::reservation::Reservation;
use crate::services::approval_flow::{self, Verdict};
use crate::utils::errors::AppError;

pub struct ApprovalRepository {
    pool: PgPool,
}

impl ApprovalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ReservationApproval>, AppError> {
        let approval = sqlx::query_as::<_, ReservationApproval>(
            "SELECT * FROM reservation_approvals WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(approval)
    }

    pub async fn list_pending(
        &self,
        approver_id: Uuid,
    ) -> Result<Vec<ApprovalQueueItem>, AppError> {
        self.list_queue(approver_id, true).await
    }

    pub async fn list_history(
        &self,
        approver_id: Uuid,
    ) -> Result<Vec<ApprovalQueueItem>, AppError> {
        self.list_queue(approver_id, false).await
    }

    async fn list_queue(
        &self,
        approver_id: Uuid,
        pending: bool,
    ) -> Result<Vec<ApprovalQueueItem>, AppError> {
        let items = sqlx::query_as::<_, ApprovalQueueItem>(
            r#"
            SELECT a.id, a.level, a.status, a.comments, a.approved_at, a.created_at,
                   r.id AS reservation_id, r.reservation_code, r.purpose,
                   r.status AS reservation_status,
                   r.start_datetime, r.end_datetime,
                   u.name AS requester_name,
                   v.name AS vehicle_name, v.license_plate AS vehicle_license_plate,
                   v.vehicle_type,
                   d.name AS driver_name, d.license_number AS driver_license_number,
                   l.name AS destination_name, l.region AS destination_region
            FROM reservation_approvals a
            JOIN reservations r ON r.id = a.reservation_id
            JOIN users u ON u.id = r.requester_id
            JOIN vehicles v ON v.id = r.vehicle_id
            JOIN drivers d ON d.id = r.driver_id
            JOIN locations l ON l.id = r.destination_id
            WHERE a.approver_id = $1
              AND (($2 AND a.status = 'pending') OR (NOT $2 AND a.status <> 'pending'))
            ORDER BY a.created_at DESC
            "#,
        )
        .bind(approver_id)
        .bind(pending)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Aplicar la decisión de un aprobador sobre su fila y recomputar el
    /// estado de la reserva padre. Devuelve la fila decidida y el estado
    /// resultante de la reserva.
    pub async fn decide(
        &self,
        approval_id: Uuid,
        actor_id: Uuid,
        verdict: Verdict,
        comments: Option<String>,
    ) -> Result<(ReservationApproval, String), AppError> {
        let mut tx = self.pool.begin().await?;

        // Lectura inicial solo para ubicar la reserva padre
        let approval = sqlx::query_as::<_, ReservationApproval>(
            "SELECT * FROM reservation_approvals WHERE id = $1",
        )
        .bind(approval_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Approval not found".to_string()))?;

        // Lock del padre: serializa decisiones concurrentes del mismo set
        let reservation =
            sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1 FOR UPDATE")
                .bind(approval.reservation_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| AppError::NotFound("Reservation not found".to_string()))?;

        // Re-leer la fila ya serializados sobre el padre
        let approval = sqlx::query_as::<_, ReservationApproval>(
            "SELECT * FROM reservation_approvals WHERE id = $1 FOR UPDATE",
        )
        .bind(approval_id)
        .fetch_one(&mut *tx)
        .await?;

        approval_flow::authorize_decision(&approval, actor_id)?;

        let decided = sqlx::query_as::<_, ReservationApproval>(
            r#"
            UPDATE reservation_approvals
            SET status = $2, comments = $3, approved_at = NOW(), updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(approval_id)
        .bind(verdict.as_str())
        .bind(&comments)
        .fetch_one(&mut *tx)
        .await?;

        // Conteo de hermanas excluyendo la fila recién decidida
        let (pending_siblings, rejected_siblings): (i64, i64) = sqlx::query_as(
            r#"
            SELECT COUNT(*) FILTER (WHERE status = 'pending'),
                   COUNT(*) FILTER (WHERE status = 'rejected')
            FROM reservation_approvals
            WHERE reservation_id = $1 AND id <> $2
            "#,
        )
        .bind(reservation.id)
        .bind(approval_id)
        .fetch_one(&mut *tx)
        .await?;

        let mut reservation_status = reservation.status.clone();
        if let Some(next) =
            approval_flow::next_reservation_status(verdict, pending_siblings, rejected_siblings)
        {
            let updated: Option<(String,)> = sqlx::query_as(
                r#"
                UPDATE reservations
                SET status = $2, updated_at = NOW()
                WHERE id = $1 AND status = 'pending'
                RETURNING status
                "#,
            )
            .bind(reservation.id)
            .bind(next.as_str())
            .fetch_optional(&mut *tx)
            .await?;

            if let Some((status,)) = updated {
                reservation_status = status;
            }
        }

        tx.commit().await?;

        Ok((decided, reservation_status))
    }
}
