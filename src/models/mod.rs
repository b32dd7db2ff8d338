pub mod common;
pub mod reservation;
pub mod response;
pub mod slot;
