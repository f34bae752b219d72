pub mod car;
pub mod reservation;
