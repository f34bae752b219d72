pub mod cars;
pub mod reservations;
