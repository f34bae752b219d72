//! Overlap predicates for admission and fleet queries.
//!
//! Two call sites, two deliberately different predicates: admission uses an
//! endpoint-containment test with inclusive boundaries, the fleet query uses
//! a bracketing test that only rejects a car when a reservation sits entirely
//! inside the requested window. Both are long-standing observable behavior
//! and must not be unified silently (see DESIGN.md).

use chrono::NaiveDateTime;

use crate::domain::{Car, Reservation};

/// Returns `true` when no existing reservation overlaps the candidate range.
///
/// An existing reservation conflicts when either candidate endpoint falls
/// within `[pick_up, drop_off]`, boundaries inclusive. Reservation status is
/// not consulted, so a cancelled reservation still blocks its range. A
/// candidate range strictly enclosing an existing reservation is not
/// detected; both quirks are pinned by tests below.
pub fn range_is_free(reservations: &[Reservation], start: NaiveDateTime, end: NaiveDateTime) -> bool {
    !reservations.iter().any(|r| {
        (start >= r.pick_up && start <= r.drop_off) || (end >= r.pick_up && end <= r.drop_off)
    })
}

/// Filters the fleet down to cars bookable for `[start, end]`.
///
/// A car qualifies when its manual availability flag is set and none of its
/// reservations is bracketed by the window (`drop_off <= end` and
/// `pick_up >= start`).
pub fn filter_available(cars: Vec<Car>, start: NaiveDateTime, end: NaiveDateTime) -> Vec<Car> {
    cars.into_iter()
        .filter(|car| {
            car.availability
                && !car
                    .reservations
                    .iter()
                    .any(|r| r.drop_off <= end && r.pick_up >= start)
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::{filter_available, range_is_free};
    use crate::domain::{Car, Reservation};
    use chrono::{NaiveDate, NaiveDateTime};
    use models::reservation_status::ReservationStatus;
    use uuid::Uuid;

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, d)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn reservation(pick_up: NaiveDateTime, drop_off: NaiveDateTime) -> Reservation {
        Reservation {
            id: Uuid::new_v4(),
            car_id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            pick_up,
            drop_off,
            status: ReservationStatus::Pending,
            total_price: 0.0,
        }
    }

    fn car(availability: bool, reservations: Vec<Reservation>) -> Car {
        Car {
            id: Uuid::new_v4(),
            availability,
            reservations,
        }
    }

    #[test]
    fn test_empty_reservation_set_is_free() {
        assert!(range_is_free(&[], day(1), day(3)));
    }

    #[test]
    fn test_start_inside_existing_range_conflicts() {
        let existing = [reservation(day(1), day(3))];
        assert!(!range_is_free(&existing, day(2), day(4)));
    }

    #[test]
    fn test_end_inside_existing_range_conflicts() {
        let existing = [reservation(day(3), day(5))];
        assert!(!range_is_free(&existing, day(1), day(4)));
    }

    #[test]
    fn test_disjoint_range_is_free() {
        let existing = [reservation(day(1), day(3))];
        assert!(range_is_free(&existing, day(4), day(6)));
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        // Back-to-back bookings sharing an instant conflict.
        let existing = [reservation(day(1), day(3))];
        assert!(!range_is_free(&existing, day(3), day(5)));
        assert!(!range_is_free(&existing, day(3), day(3)));
    }

    #[test]
    fn test_enclosing_range_is_not_detected() {
        // Neither endpoint of [day1, day6] falls inside [day3, day4], so the
        // containment test misses the overlap. Pinned, not endorsed.
        let existing = [reservation(day(3), day(4))];
        assert!(range_is_free(&existing, day(1), day(6)));
    }

    #[test]
    fn test_cancelled_reservation_still_blocks_range() {
        let mut r = reservation(day(1), day(3));
        r.status = ReservationStatus::Cancelled;
        assert!(!range_is_free(&[r], day(2), day(4)));
    }

    // Arguably the intended behavior: cancellation frees the range. Kept
    // ignored so switching to it is a conscious decision.
    #[test]
    #[ignore]
    fn test_cancelled_reservation_frees_range() {
        let mut r = reservation(day(1), day(3));
        r.status = ReservationStatus::Cancelled;
        assert!(range_is_free(&[r], day(2), day(4)));
    }

    #[test]
    fn test_filter_drops_unavailable_cars() {
        let cars = vec![car(false, vec![])];
        assert!(filter_available(cars, day(1), day(3)).is_empty());
    }

    #[test]
    fn test_filter_keeps_unreserved_available_cars() {
        let cars = vec![car(true, vec![])];
        assert_eq!(filter_available(cars, day(1), day(3)).len(), 1);
    }

    #[test]
    fn test_filter_drops_car_with_bracketed_reservation() {
        let cars = vec![car(true, vec![reservation(day(2), day(3))])];
        assert!(filter_available(cars, day(1), day(4)).is_empty());
    }

    #[test]
    fn test_filter_keeps_car_with_reservation_outside_window() {
        let cars = vec![car(true, vec![reservation(day(5), day(6))])];
        assert_eq!(filter_available(cars, day(1), day(4)).len(), 1);
    }

    #[test]
    fn test_predicates_disagree_on_partial_overlap() {
        // A reservation straddling the window end conflicts for admission but
        // does not mark the car unavailable in the fleet query.
        let r = reservation(day(3), day(6));
        assert!(!range_is_free(std::slice::from_ref(&r), day(1), day(4)));

        let cars = vec![car(true, vec![r])];
        assert_eq!(filter_available(cars, day(1), day(4)).len(), 1);
    }
}
