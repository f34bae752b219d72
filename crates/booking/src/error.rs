use thiserror::Error;
use uuid::Uuid;

use crate::store::StoreError;

/// Failures surfaced by the admission engine. Every variant propagates to the
/// immediate caller; nothing is retried or swallowed internally.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no car with id {0}")]
    CarNotFound(Uuid),

    #[error("no reservation with id {0}")]
    ReservationNotFound(Uuid),

    /// The car's manual availability flag is off.
    #[error("car {0} is not open for reservations")]
    CarNotAvailable(Uuid),

    #[error("pick-up must be strictly before drop-off")]
    InvalidDateRange,

    #[error("car {0} already has a reservation overlapping the requested dates")]
    ReservationConflict(Uuid),

    /// The underlying persistence call failed; fatal for the operation.
    #[error(transparent)]
    Store(#[from] StoreError),
}
