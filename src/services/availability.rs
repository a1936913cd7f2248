//! Verificación de disponibilidad de vehículos
//!
//! Una reserva entra en conflicto con otra del mismo vehículo cuando sus
//! ventanas se solapan con bordes inclusivos y la otra no está cancelada.
//! Las reservas rechazadas y completadas siguen bloqueando el calendario.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Ventana ocupada del calendario de un vehículo
#[derive(Debug, Clone)]
pub struct BookedWindow {
    pub reservation_id: Uuid,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
}

/// Solapamiento con bordes inclusivos:
/// `other_start <= end AND other_end >= start`
pub fn windows_overlap(
    start_a: DateTime<Utc>,
    end_a: DateTime<Utc>,
    start_b: DateTime<Utc>,
    end_b: DateTime<Utc>,
) -> bool {
    start_b <= end_a && end_b >= start_a
}

/// Calendario de reservas de un vehículo.
///
/// La implementación debe devolver únicamente las reservas con
/// status != 'cancelled' que solapan la ventana pedida, excluyendo
/// opcionalmente una reserva (caso de edición).
#[async_trait]
pub trait ReservationCalendar {
    async fn overlapping(
        &self,
        vehicle_id: Uuid,
        start_datetime: DateTime<Utc>,
        end_datetime: DateTime<Utc>,
        exclude_reservation_id: Option<Uuid>,
    ) -> Result<Vec<BookedWindow>, AppError>;
}

/// Verificador de conflictos de reserva sobre un calendario
pub struct AvailabilityChecker<'a, C: ReservationCalendar + Sync> {
    calendar: &'a C,
}

impl<'a, C: ReservationCalendar + Sync> AvailabilityChecker<'a, C> {
    pub fn new(calendar: &'a C) -> Self {
        Self { calendar }
    }

    /// `true` si la ventana pedida choca con alguna reserva existente
    /// no cancelada del vehículo. Un vehicle_id desconocido simplemente
    /// no tiene reservas; la existencia del vehículo se valida aparte.
    pub async fn has_conflict(
        &self,
        vehicle_id: Uuid,
        start_datetime: DateTime<Utc>,
        end_datetime: DateTime<Utc>,
        exclude_reservation_id: Option<Uuid>,
    ) -> Result<bool, AppError> {
        let blocking = self
            .calendar
            .overlapping(vehicle_id, start_datetime, end_datetime, exclude_reservation_id)
            .await?;

        Ok(!blocking.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Calendario en memoria con la misma semántica que la query SQL
    struct InMemoryCalendar {
        reservations: Vec<(Uuid, Uuid, &'static str, DateTime<Utc>, DateTime<Utc>)>,
    }

    #[async_trait]
    impl ReservationCalendar for InMemoryCalendar {
        async fn overlapping(
            &self,
            vehicle_id: Uuid,
            start_datetime: DateTime<Utc>,
            end_datetime: DateTime<Utc>,
            exclude_reservation_id: Option<Uuid>,
        ) -> Result<Vec<BookedWindow>, AppError> {
            Ok(self
                .reservations
                .iter()
                .filter(|(id, vehicle, status, start, end)| {
                    *vehicle == vehicle_id
                        && *status != "cancelled"
                        && Some(*id) != exclude_reservation_id
                        && windows_overlap(start_datetime, end_datetime, *start, *end)
                })
                .map(|(id, _, _, start, end)| BookedWindow {
                    reservation_id: *id,
                    start_datetime: *start,
                    end_datetime: *end,
                })
                .collect())
        }
    }

    fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_windows_overlap_partial() {
        // Ventana existente 08:00-12:00, pedida 11:00-14:00 -> solapan
        assert!(windows_overlap(
            dt(2025, 1, 10, 11, 0),
            dt(2025, 1, 10, 14, 0),
            dt(2025, 1, 10, 8, 0),
            dt(2025, 1, 10, 12, 0),
        ));
    }

    #[test]
    fn test_windows_overlap_inclusive_boundary() {
        // Bordes que se tocan cuentan como conflicto
        assert!(windows_overlap(
            dt(2025, 1, 10, 12, 0),
            dt(2025, 1, 10, 14, 0),
            dt(2025, 1, 10, 8, 0),
            dt(2025, 1, 10, 12, 0),
        ));
    }

    #[test]
    fn test_windows_overlap_contained() {
        assert!(windows_overlap(
            dt(2025, 1, 10, 9, 0),
            dt(2025, 1, 10, 10, 0),
            dt(2025, 1, 10, 8, 0),
            dt(2025, 1, 10, 12, 0),
        ));
    }

    #[test]
    fn test_windows_disjoint() {
        assert!(!windows_overlap(
            dt(2025, 1, 10, 13, 0),
            dt(2025, 1, 10, 14, 0),
            dt(2025, 1, 10, 8, 0),
            dt(2025, 1, 10, 12, 0),
        ));
    }

    #[tokio::test]
    async fn test_pending_reservation_blocks_overlap() {
        let vehicle = Uuid::new_v4();
        let calendar = InMemoryCalendar {
            reservations: vec![(
                Uuid::new_v4(),
                vehicle,
                "pending",
                dt(2025, 1, 10, 8, 0),
                dt(2025, 1, 10, 12, 0),
            )],
        };
        let checker = AvailabilityChecker::new(&calendar);

        let conflict = checker
            .has_conflict(vehicle, dt(2025, 1, 10, 11, 0), dt(2025, 1, 10, 14, 0), None)
            .await
            .unwrap();
        assert!(conflict);
    }

    #[tokio::test]
    async fn test_cancelled_reservation_does_not_block() {
        let vehicle = Uuid::new_v4();
        let calendar = InMemoryCalendar {
            reservations: vec![(
                Uuid::new_v4(),
                vehicle,
                "cancelled",
                dt(2025, 1, 10, 8, 0),
                dt(2025, 1, 10, 12, 0),
            )],
        };
        let checker = AvailabilityChecker::new(&calendar);

        let conflict = checker
            .has_conflict(vehicle, dt(2025, 1, 10, 11, 0), dt(2025, 1, 10, 14, 0), None)
            .await
            .unwrap();
        assert!(!conflict);
    }

    #[tokio::test]
    async fn test_rejected_and_completed_still_block() {
        let vehicle = Uuid::new_v4();
        for status in ["rejected", "completed"] {
            let calendar = InMemoryCalendar {
                reservations: vec![(
                    Uuid::new_v4(),
                    vehicle,
                    status,
                    dt(2025, 1, 10, 8, 0),
                    dt(2025, 1, 10, 12, 0),
                )],
            };
            let checker = AvailabilityChecker::new(&calendar);

            let conflict = checker
                .has_conflict(vehicle, dt(2025, 1, 10, 9, 0), dt(2025, 1, 10, 10, 0), None)
                .await
                .unwrap();
            assert!(conflict, "status {} debería bloquear", status);
        }
    }

    #[tokio::test]
    async fn test_edit_path_excludes_own_reservation() {
        let vehicle = Uuid::new_v4();
        let own_id = Uuid::new_v4();
        let calendar = InMemoryCalendar {
            reservations: vec![(
                own_id,
                vehicle,
                "pending",
                dt(2025, 1, 10, 8, 0),
                dt(2025, 1, 10, 12, 0),
            )],
        };
        let checker = AvailabilityChecker::new(&calendar);

        // Re-guardar la misma ventana sin chocar consigo misma
        let conflict = checker
            .has_conflict(
                vehicle,
                dt(2025, 1, 10, 8, 0),
                dt(2025, 1, 10, 12, 0),
                Some(own_id),
            )
            .await
            .unwrap();
        assert!(!conflict);
    }

    #[tokio::test]
    async fn test_other_vehicle_does_not_conflict() {
        let calendar = InMemoryCalendar {
            reservations: vec![(
                Uuid::new_v4(),
                Uuid::new_v4(),
                "approved",
                dt(2025, 1, 10, 8, 0),
                dt(2025, 1, 10, 12, 0),
            )],
        };
        let checker = AvailabilityChecker::new(&calendar);

        let conflict = checker
            .has_conflict(Uuid::new_v4(), dt(2025, 1, 10, 9, 0), dt(2025, 1, 10, 10, 0), None)
            .await
            .unwrap();
        assert!(!conflict);
    }
}
