pub mod reservation_status;
