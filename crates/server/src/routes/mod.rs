pub mod cars;
pub mod health;
pub mod reservations;
pub mod root;
