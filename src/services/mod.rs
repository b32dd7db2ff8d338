pub mod availability;
pub mod error;
pub mod listing;
pub mod store;
pub mod submission;
