use chrono::NaiveDateTime;
use models::reservation_status::ReservationStatus;
use uuid::Uuid;

/// A car as the admission engine sees it: the manual availability flag and
/// the reservation set currently booked against it. The authoritative copy
/// lives in the entity store and is re-read on every admission decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub id: Uuid,
    /// Admin-controlled flag, independent of date-based booking. A car can be
    /// available yet fully booked for a given window, and vice versa.
    pub availability: bool,
    pub reservations: Vec<Reservation>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: Uuid,
    pub car_id: Uuid,
    pub user_id: Uuid,
    pub pick_up: NaiveDateTime,
    pub drop_off: NaiveDateTime,
    pub status: ReservationStatus,
    pub total_price: f64,
}

/// A reservation about to be persisted. The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReservation {
    pub car_id: Uuid,
    pub user_id: Uuid,
    pub pick_up: NaiveDateTime,
    pub drop_off: NaiveDateTime,
    pub status: ReservationStatus,
    pub total_price: f64,
}
