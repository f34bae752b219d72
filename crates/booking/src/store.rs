//! Entity-store capabilities consumed by the admission engine.
//!
//! The engine never assumes cross-call transactions from a store; the only
//! serialization it relies on is its own per-car lock. Each method is a
//! single round-trip with at least read-committed consistency.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::{Car, NewReservation, Reservation};

/// A persistence call failed. Fatal for the current operation; the engine
/// propagates it without retry or masking.
#[derive(Debug, Error)]
#[error("entity store failure: {source}")]
pub struct StoreError {
    #[from]
    source: Box<dyn std::error::Error + Send + Sync + 'static>,
}

impl StoreError {
    pub fn new(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self {
            source: Box::new(err),
        }
    }
}

#[async_trait]
pub trait CarStore: Send + Sync {
    /// Fetches one car together with its reservation set.
    async fn car(&self, id: Uuid) -> Result<Option<Car>, StoreError>;

    /// Fetches the whole fleet, each car with its reservation set.
    async fn cars(&self) -> Result<Vec<Car>, StoreError>;

    async fn update_car(&self, car: Car) -> Result<Car, StoreError>;
}

#[async_trait]
pub trait ReservationStore: Send + Sync {
    async fn reservation(&self, id: Uuid) -> Result<Option<Reservation>, StoreError>;

    async fn reservations(&self) -> Result<Vec<Reservation>, StoreError>;

    /// Persists a new reservation, assigning its id.
    async fn add_reservation(&self, draft: NewReservation) -> Result<Reservation, StoreError>;

    async fn update_reservation(&self, reservation: Reservation)
    -> Result<Reservation, StoreError>;
}

pub mod memory {
    //! Hash-map store used by the engine tests and demos.

    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use uuid::Uuid;

    use crate::domain::{Car, NewReservation, Reservation};

    use super::{CarStore, ReservationStore, StoreError};

    /// In-memory store. Like the relational store, the car's reservation set
    /// is derived from the reservation table by `car_id` on every read, not
    /// kept inside the car record.
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        cars: Mutex<HashMap<Uuid, bool>>,
        reservations: Mutex<HashMap<Uuid, Reservation>>,
        writes: AtomicUsize,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn insert_car(&self, id: Uuid, availability: bool) {
            self.cars
                .lock()
                .expect("car table poisoned")
                .insert(id, availability);
        }

        /// Number of mutating calls the store has served.
        pub fn writes(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }

        fn reservations_for(&self, car_id: Uuid) -> Vec<Reservation> {
            self.reservations
                .lock()
                .expect("reservation table poisoned")
                .values()
                .filter(|r| r.car_id == car_id)
                .cloned()
                .collect()
        }
    }

    #[async_trait]
    impl CarStore for MemoryStore {
        async fn car(&self, id: Uuid) -> Result<Option<Car>, StoreError> {
            let row = self.cars.lock().expect("car table poisoned").get(&id).copied();

            Ok(row.map(|availability| Car {
                id,
                availability,
                reservations: self.reservations_for(id),
            }))
        }

        async fn cars(&self) -> Result<Vec<Car>, StoreError> {
            let rows: Vec<(Uuid, bool)> = self
                .cars
                .lock()
                .expect("car table poisoned")
                .iter()
                .map(|(id, availability)| (*id, *availability))
                .collect();

            Ok(rows
                .into_iter()
                .map(|(id, availability)| Car {
                    id,
                    availability,
                    reservations: self.reservations_for(id),
                })
                .collect())
        }

        async fn update_car(&self, car: Car) -> Result<Car, StoreError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.cars
                .lock()
                .expect("car table poisoned")
                .insert(car.id, car.availability);
            Ok(car)
        }
    }

    #[async_trait]
    impl ReservationStore for MemoryStore {
        async fn reservation(&self, id: Uuid) -> Result<Option<Reservation>, StoreError> {
            Ok(self
                .reservations
                .lock()
                .expect("reservation table poisoned")
                .get(&id)
                .cloned())
        }

        async fn reservations(&self) -> Result<Vec<Reservation>, StoreError> {
            Ok(self
                .reservations
                .lock()
                .expect("reservation table poisoned")
                .values()
                .cloned()
                .collect())
        }

        async fn add_reservation(&self, draft: NewReservation) -> Result<Reservation, StoreError> {
            self.writes.fetch_add(1, Ordering::SeqCst);

            let reservation = Reservation {
                id: Uuid::new_v4(),
                car_id: draft.car_id,
                user_id: draft.user_id,
                pick_up: draft.pick_up,
                drop_off: draft.drop_off,
                status: draft.status,
                total_price: draft.total_price,
            };

            self.reservations
                .lock()
                .expect("reservation table poisoned")
                .insert(reservation.id, reservation.clone());
            Ok(reservation)
        }

        async fn update_reservation(
            &self,
            reservation: Reservation,
        ) -> Result<Reservation, StoreError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.reservations
                .lock()
                .expect("reservation table poisoned")
                .insert(reservation.id, reservation.clone());
            Ok(reservation)
        }
    }
}
