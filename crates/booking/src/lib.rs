//! Reservation admission engine for the rental fleet.
//!
//! Decides whether a reservation request may be admitted against a car's
//! existing bookings, serializing concurrent requests for the same car so the
//! fetch-check-write sequence cannot double-book. Persistence is abstracted
//! behind the capability traits in [`store`]; the HTTP layer and the sea-orm
//! store live in sibling crates.

pub mod admission;
pub mod availability;
pub mod domain;
pub mod error;
pub mod locks;
pub mod store;

pub use admission::AdmissionEngine;
pub use domain::{Car, NewReservation, Reservation};
pub use error::Error;
