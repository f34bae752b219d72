//! Orchestrates reservation creation and status transitions.

use chrono::NaiveDateTime;
use log::warn;
use models::reservation_status::ReservationStatus;
use uuid::Uuid;

use crate::availability;
use crate::domain::{Car, NewReservation, Reservation};
use crate::error::Error;
use crate::locks::CarLocks;
use crate::store::{CarStore, ReservationStore};

/// The reservation admission engine.
///
/// One instance serves the whole process; the per-car lock registry it owns
/// is what makes concurrent admission safe, so handlers must share the
/// instance rather than constructing one per request. Car and reservation
/// state is re-read from the store on every call, never cached.
#[derive(Debug)]
pub struct AdmissionEngine<S> {
    store: S,
    locks: CarLocks,
}

impl<S> AdmissionEngine<S>
where
    S: CarStore + ReservationStore,
{
    pub fn new(store: S) -> Self {
        Self {
            store,
            locks: CarLocks::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Admits a reservation request for `car_id`, or rejects it with a typed
    /// error.
    ///
    /// The fetch-check-write sequence runs under the car's admission lock:
    /// concurrent requests for the same car are decided strictly one at a
    /// time, requests for other cars are unaffected. On success the new
    /// reservation is persisted with status `Pending` and the car record is
    /// updated to acknowledge the grown reservation set.
    pub async fn create_reservation(
        &self,
        car_id: Uuid,
        user_id: Uuid,
        pick_up: NaiveDateTime,
        drop_off: NaiveDateTime,
    ) -> Result<Reservation, Error> {
        let lock = self.locks.for_car(car_id);
        let _admission = lock.lock().await;

        let mut car = self.store.car(car_id).await?.ok_or(Error::CarNotFound(car_id))?;

        if !car.availability {
            warn!("car {car_id} is not available for reservation");
            return Err(Error::CarNotAvailable(car_id));
        }

        if pick_up >= drop_off {
            warn!("rejected reservation for car {car_id}: pick-up {pick_up} not before drop-off {drop_off}");
            return Err(Error::InvalidDateRange);
        }

        if !availability::range_is_free(&car.reservations, pick_up, drop_off) {
            warn!("car {car_id} already reserved between {pick_up} and {drop_off}");
            return Err(Error::ReservationConflict(car_id));
        }

        let reservation = self
            .store
            .add_reservation(NewReservation {
                car_id,
                user_id,
                pick_up,
                drop_off,
                status: ReservationStatus::Pending,
                total_price: 0.0,
            })
            .await?;

        car.reservations.push(reservation.clone());
        self.store.update_car(car).await?;

        Ok(reservation)
    }

    /// Marks a reservation `Cancelled` and returns `true`.
    ///
    /// The record stays in the car's reservation set and its range remains
    /// blocked for admission (see `availability::range_is_free`).
    pub async fn cancel_reservation(&self, id: Uuid) -> Result<bool, Error> {
        let mut reservation = self
            .store
            .reservation(id)
            .await?
            .ok_or(Error::ReservationNotFound(id))?;

        reservation.status = ReservationStatus::Cancelled;
        self.store.update_reservation(reservation).await?;
        Ok(true)
    }

    pub async fn update_reservation_status(
        &self,
        id: Uuid,
        status: ReservationStatus,
    ) -> Result<Reservation, Error> {
        let mut reservation = self
            .store
            .reservation(id)
            .await?
            .ok_or(Error::ReservationNotFound(id))?;

        reservation.status = status;
        Ok(self.store.update_reservation(reservation).await?)
    }

    pub async fn update_reservation_price(
        &self,
        id: Uuid,
        total_price: f64,
    ) -> Result<Reservation, Error> {
        let mut reservation = self
            .store
            .reservation(id)
            .await?
            .ok_or(Error::ReservationNotFound(id))?;

        reservation.total_price = total_price;
        Ok(self.store.update_reservation(reservation).await?)
    }

    /// Which cars of the fleet are bookable for `[start, end]`.
    ///
    /// An empty result is an answer, not an error; the HTTP layer decides how
    /// to present it.
    pub async fn available_cars(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<Car>, Error> {
        let fleet = self.store.cars().await?;
        Ok(availability::filter_available(fleet, start, end))
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use chrono::{NaiveDate, NaiveDateTime};
    use futures::future::join_all;
    use models::reservation_status::ReservationStatus;
    use tokio::sync::Barrier;
    use uuid::Uuid;

    use crate::availability::range_is_free;
    use crate::domain::NewReservation;
    use crate::error::Error;
    use crate::store::memory::MemoryStore;
    use crate::store::{CarStore, ReservationStore};

    use super::AdmissionEngine;

    fn day(d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, d)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    fn engine_with_car(availability: bool) -> (AdmissionEngine<MemoryStore>, Uuid) {
        let store = MemoryStore::new();
        let car_id = Uuid::new_v4();
        store.insert_car(car_id, availability);
        (AdmissionEngine::new(store), car_id)
    }

    #[tokio::test]
    async fn test_admission_on_free_car_succeeds_as_pending() {
        let (engine, car_id) = engine_with_car(true);
        let user_id = Uuid::new_v4();

        let reservation = engine
            .create_reservation(car_id, user_id, day(1), day(3))
            .await
            .unwrap();

        assert_eq!(reservation.car_id, car_id);
        assert_eq!(reservation.user_id, user_id);
        assert_eq!(reservation.status, ReservationStatus::Pending);

        // The admitted range is no longer free.
        let car = engine.store().car(car_id).await.unwrap().unwrap();
        assert!(!range_is_free(&car.reservations, day(1), day(3)));
    }

    #[tokio::test]
    async fn test_admission_against_overlapping_reservation_conflicts() {
        let (engine, car_id) = engine_with_car(true);
        engine
            .create_reservation(car_id, Uuid::new_v4(), day(1), day(3))
            .await
            .unwrap();

        let err = engine
            .create_reservation(car_id, Uuid::new_v4(), day(2), day(4))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::ReservationConflict(id) if id == car_id));
    }

    #[tokio::test]
    async fn test_admission_outside_existing_range_succeeds() {
        let (engine, car_id) = engine_with_car(true);
        engine
            .create_reservation(car_id, Uuid::new_v4(), day(1), day(3))
            .await
            .unwrap();

        engine
            .create_reservation(car_id, Uuid::new_v4(), day(4), day(6))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_unknown_car_is_not_found() {
        let (engine, _) = engine_with_car(true);

        let err = engine
            .create_reservation(Uuid::new_v4(), Uuid::new_v4(), day(1), day(3))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::CarNotFound(_)));
    }

    #[tokio::test]
    async fn test_unavailable_car_is_rejected_without_writes() {
        let (engine, car_id) = engine_with_car(false);

        let err = engine
            .create_reservation(car_id, Uuid::new_v4(), day(1), day(3))
            .await
            .unwrap_err();

        assert!(matches!(err, Error::CarNotAvailable(id) if id == car_id));
        assert_eq!(engine.store().writes(), 0);
    }

    #[tokio::test]
    async fn test_inverted_range_is_rejected_without_writes() {
        let (engine, car_id) = engine_with_car(true);

        let err = engine
            .create_reservation(car_id, Uuid::new_v4(), day(3), day(1))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDateRange));

        let err = engine
            .create_reservation(car_id, Uuid::new_v4(), day(3), day(3))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidDateRange));

        assert_eq!(engine.store().writes(), 0);
    }

    #[tokio::test]
    async fn test_cancel_sets_status_and_missing_id_is_not_found() {
        let (engine, car_id) = engine_with_car(true);
        let reservation = engine
            .create_reservation(car_id, Uuid::new_v4(), day(1), day(3))
            .await
            .unwrap();

        assert!(engine.cancel_reservation(reservation.id).await.unwrap());

        let stored = engine
            .store()
            .reservation(reservation.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, ReservationStatus::Cancelled);

        let err = engine.cancel_reservation(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, Error::ReservationNotFound(_)));
    }

    #[tokio::test]
    async fn test_status_and_price_updates() {
        let (engine, car_id) = engine_with_car(true);
        let reservation = engine
            .create_reservation(car_id, Uuid::new_v4(), day(1), day(3))
            .await
            .unwrap();

        let updated = engine
            .update_reservation_status(reservation.id, ReservationStatus::Confirmed)
            .await
            .unwrap();
        assert_eq!(updated.status, ReservationStatus::Confirmed);

        let updated = engine
            .update_reservation_price(reservation.id, 129.95)
            .await
            .unwrap();
        assert_eq!(updated.total_price, 129.95);

        let err = engine
            .update_reservation_price(Uuid::new_v4(), 1.0)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ReservationNotFound(_)));
    }

    #[tokio::test]
    async fn test_available_cars_reads_are_idempotent() {
        let (engine, car_id) = engine_with_car(true);
        engine
            .create_reservation(car_id, Uuid::new_v4(), day(2), day(3))
            .await
            .unwrap();

        let first = engine.available_cars(day(1), day(4)).await.unwrap();
        let second = engine.available_cars(day(1), day(4)).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_admissions_admit_exactly_one() {
        let store = MemoryStore::new();
        let car_id = Uuid::new_v4();
        store.insert_car(car_id, true);
        let engine = Arc::new(AdmissionEngine::new(store));

        let attempts = 16;
        let handles: Vec<_> = (0..attempts)
            .map(|_| {
                let engine = Arc::clone(&engine);
                tokio::spawn(async move {
                    engine
                        .create_reservation(car_id, Uuid::new_v4(), day(1), day(3))
                        .await
                })
            })
            .collect();

        let results: Vec<_> = join_all(handles)
            .await
            .into_iter()
            .map(|joined| joined.unwrap())
            .collect();

        let admitted = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(admitted, 1);

        for result in results {
            if let Err(err) = result {
                assert!(matches!(err, Error::ReservationConflict(_)));
            }
        }

        let stored = engine.store().reservations().await.unwrap();
        assert_eq!(stored.len(), 1);
    }

    /// The naive fetch-check-write sequence double-books: both requests pass
    /// the conflict check before either write lands. This is why admission
    /// holds the per-car lock across the whole sequence.
    #[tokio::test]
    async fn test_unserialized_check_then_write_double_books() {
        let store = Arc::new(MemoryStore::new());
        let car_id = Uuid::new_v4();
        store.insert_car(car_id, true);

        let checked = Arc::new(Barrier::new(2));

        let attempts: Vec<_> = (0..2)
            .map(|_| {
                let store = Arc::clone(&store);
                let checked = Arc::clone(&checked);
                tokio::spawn(async move {
                    let car = store.car(car_id).await.unwrap().unwrap();
                    assert!(range_is_free(&car.reservations, day(1), day(3)));

                    // Both checks complete before either write.
                    checked.wait().await;

                    store
                        .add_reservation(NewReservation {
                            car_id,
                            user_id: Uuid::new_v4(),
                            pick_up: day(1),
                            drop_off: day(3),
                            status: ReservationStatus::Pending,
                            total_price: 0.0,
                        })
                        .await
                        .unwrap();
                })
            })
            .collect();

        join_all(attempts).await.into_iter().for_each(|j| j.unwrap());

        // Two overlapping non-cancelled reservations on one car.
        let stored = store.reservations().await.unwrap();
        assert_eq!(stored.len(), 2);
        assert!(!range_is_free(&stored[..1], stored[1].pick_up, stored[1].drop_off));
    }
}
