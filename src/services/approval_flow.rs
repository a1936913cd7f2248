//! Máquina de estados de aprobación
//!
//! Una reserva queda `rejected` en cuanto cualquier nivel rechaza (las
//! filas hermanas quedan pendientes sin tocar) y queda `approved` solo
//! cuando ninguna fila sigue pendiente y ninguna fue rechazada. Los
//! niveles se deciden en cualquier orden; no hay secuencia obligatoria.
//!
//! La lógica es pura; `ApprovalRepository::decide` la ejecuta dentro de
//! una transacción con la fila de la reserva bloqueada.

use uuid::Uuid;

use crate::models::approval::{ApprovalStatus, ReservationApproval};
use crate::models::reservation::ReservationStatus;
use crate::utils::errors::AppError;

/// Decisión de un aprobador sobre su fila
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Approved,
    Rejected,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Approved => "approved",
            Verdict::Rejected => "rejected",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "approved" => Some(Verdict::Approved),
            "rejected" => Some(Verdict::Rejected),
            _ => None,
        }
    }
}

/// Precondiciones de `decide`: la fila debe seguir pendiente y el actor
/// debe ser el aprobador asignado. Repetir una decisión falla siempre.
pub fn authorize_decision(
    approval: &ReservationApproval,
    actor_id: Uuid,
) -> Result<(), AppError> {
    if approval.approver_id != actor_id {
        return Err(AppError::Forbidden(
            "Only the assigned approver can decide this approval".to_string(),
        ));
    }

    if approval.status != ApprovalStatus::Pending.as_str() {
        return Err(AppError::PreconditionFailed(
            "Approval has already been decided".to_string(),
        ));
    }

    Ok(())
}

/// Nuevo estado de la reserva tras aplicar un veredicto, dado el conteo
/// de filas hermanas (excluyendo la fila recién decidida).
///
/// Rechazo corta en seco; aprobación requiere cero pendientes y cero
/// rechazadas entre las hermanas.
pub fn next_reservation_status(
    verdict: Verdict,
    pending_siblings: i64,
    rejected_siblings: i64,
) -> Option<ReservationStatus> {
    match verdict {
        Verdict::Rejected => Some(ReservationStatus::Rejected),
        Verdict::Approved if pending_siblings == 0 && rejected_siblings == 0 => {
            Some(ReservationStatus::Approved)
        }
        Verdict::Approved => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn approval(approver_id: Uuid, status: ApprovalStatus) -> ReservationApproval {
        let now = Utc::now();
        ReservationApproval {
            id: Uuid::new_v4(),
            reservation_id: Uuid::new_v4(),
            approver_id,
            level: 1,
            status: status.as_str().to_string(),
            comments: None,
            approved_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_assigned_approver_can_decide_pending() {
        let approver = Uuid::new_v4();
        let row = approval(approver, ApprovalStatus::Pending);
        assert!(authorize_decision(&row, approver).is_ok());
    }

    #[test]
    fn test_wrong_actor_is_forbidden() {
        let row = approval(Uuid::new_v4(), ApprovalStatus::Pending);
        match authorize_decision(&row, Uuid::new_v4()) {
            Err(AppError::Forbidden(_)) => {}
            other => panic!("expected Forbidden, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_already_decided_fails_precondition() {
        let approver = Uuid::new_v4();
        for status in [ApprovalStatus::Approved, ApprovalStatus::Rejected] {
            let row = approval(approver, status);
            match authorize_decision(&row, approver) {
                Err(AppError::PreconditionFailed(_)) => {}
                other => panic!("expected PreconditionFailed, got {:?}", other.err()),
            }
        }
    }

    #[test]
    fn test_rejection_short_circuits() {
        // Da igual cuántas hermanas queden pendientes
        assert_eq!(
            next_reservation_status(Verdict::Rejected, 5, 0),
            Some(ReservationStatus::Rejected)
        );
        assert_eq!(
            next_reservation_status(Verdict::Rejected, 0, 0),
            Some(ReservationStatus::Rejected)
        );
    }

    #[test]
    fn test_approval_waits_for_outstanding_levels() {
        assert_eq!(next_reservation_status(Verdict::Approved, 1, 0), None);
        assert_eq!(next_reservation_status(Verdict::Approved, 3, 0), None);
    }

    #[test]
    fn test_last_approval_completes_the_chain() {
        assert_eq!(
            next_reservation_status(Verdict::Approved, 0, 0),
            Some(ReservationStatus::Approved)
        );
    }

    #[test]
    fn test_approval_never_overrides_a_rejection() {
        // Hermana rechazada: aprobar la fila restante no aprueba la reserva
        assert_eq!(next_reservation_status(Verdict::Approved, 0, 1), None);
    }

    /// Recorrido completo de una cadena de N niveles: aprobar N-1 deja la
    /// reserva pendiente, aprobar la última la aprueba.
    #[test]
    fn test_chain_walkthrough_all_approved() {
        for levels in [1i64, 2, 4] {
            let mut pending = levels;
            let mut reservation_status = ReservationStatus::Pending;

            for step in 0..levels {
                pending -= 1; // la fila recién decidida ya no cuenta
                match next_reservation_status(Verdict::Approved, pending, 0) {
                    Some(status) => reservation_status = status,
                    None => {
                        assert!(step < levels - 1, "la última aprobación debe transicionar");
                        assert_eq!(reservation_status, ReservationStatus::Pending);
                    }
                }
            }

            assert_eq!(reservation_status, ReservationStatus::Approved);
        }
    }

    /// Nivel 2 decide antes que nivel 1: sin secuencia obligatoria.
    #[test]
    fn test_out_of_order_levels() {
        // Nivel 2 aprueba primero: queda 1 pendiente (nivel 1)
        assert_eq!(next_reservation_status(Verdict::Approved, 1, 0), None);
        // Después aprueba nivel 1: cero pendientes, cero rechazadas
        assert_eq!(
            next_reservation_status(Verdict::Approved, 0, 0),
            Some(ReservationStatus::Approved)
        );
    }

    /// Nivel 1 rechaza con nivel 2 aún pendiente: la reserva queda
    /// rechazada de inmediato y la fila de nivel 2 no se toca.
    #[test]
    fn test_rejection_with_sibling_pending() {
        assert_eq!(
            next_reservation_status(Verdict::Rejected, 1, 0),
            Some(ReservationStatus::Rejected)
        );
    }
}
