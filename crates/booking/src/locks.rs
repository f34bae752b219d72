use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

/// Per-car admission locks.
///
/// Admission for one car must run its fetch-check-write sequence exclusively;
/// requests for different cars proceed in parallel. Tokio mutexes hand the
/// lock out in acquisition order, so same-car requests are admitted strictly
/// first-come-first-served. Locks are created on first use and kept for the
/// life of the registry; the fleet is small enough that they are never
/// reclaimed.
#[derive(Debug, Default)]
pub struct CarLocks {
    inner: Mutex<HashMap<Uuid, Arc<tokio::sync::Mutex<()>>>>,
}

impl CarLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lock guarding admission for `car_id`.
    pub fn for_car(&self, car_id: Uuid) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.inner.lock().expect("car lock registry poisoned");
        Arc::clone(locks.entry(car_id).or_default())
    }
}

#[cfg(test)]
mod test {
    use super::CarLocks;
    use uuid::Uuid;

    #[test]
    fn test_same_car_yields_same_lock() {
        let locks = CarLocks::new();
        let car_id = Uuid::new_v4();

        let a = locks.for_car(car_id);
        let b = locks.for_car(car_id);
        assert!(std::sync::Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_different_cars_yield_independent_locks() {
        let locks = CarLocks::new();

        let a = locks.for_car(Uuid::new_v4());
        let b = locks.for_car(Uuid::new_v4());
        assert!(!std::sync::Arc::ptr_eq(&a, &b));
    }
}
