//! Room Reservation Service
//!
//! Lets a client pick a date, a room and a whole-hour time range, checks the
//! range against stored reservations and records accepted reservations in a
//! CSV file.
//!
//! # Modules
//!
//! - `services::availability`: overlap test and the cascading start/end option lists
//! - `services::listing`: display-ordered projection of stored reservations
//! - `services::store`: CSV-backed reservation store
//! - `services::submission`: validation and append of new reservations
//! - `handlers` / `routes`: the HTTP surface over the above
//!
//! # Availability
//!
//! Start options cover 09:00 to 17:00 and end options run up to 18:00, in
//! whole hours. Intervals are half-open, so a reservation ending at 10:00 does
//! not block one starting at 10:00.

pub mod config;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;


// Re-export the main types for ease of use
pub use config::Config;
pub use handlers::api::AppState;
pub use models::reservation::{Reservation, ReservationList, ReservationRequest};
pub use routes::create_router;
pub use services::error::ReservationError;
pub use services::store::{create_reservation_store, ReservationStore};
