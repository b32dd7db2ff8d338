use dotenv::dotenv;
use std::env;
use std::net::SocketAddr;
use tracing::info;

use crate::services::error::ReservationError;

pub const DEFAULT_DATABASE_PATH: &str = "/app/data/reservations.csv";
pub const DEFAULT_ROOMS: &str = "A,B,C";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

/// Service settings read from the environment (and `.env`, if present).
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub rooms: Vec<String>,
    pub auth_token: Option<String>,
    pub bind_address: SocketAddr,
    pub sentry_dsn: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ReservationError> {
        dotenv().ok();

        let database_path = env::var("RESERVATION_DATABASE_PATH")
            .unwrap_or_else(|_| DEFAULT_DATABASE_PATH.to_string());

        let rooms = parse_rooms(
            &env::var("RESERVATION_ROOMS").unwrap_or_else(|_| DEFAULT_ROOMS.to_string()),
        )?;

        let auth_token = env::var("RESERVATION_AUTH_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        let bind_address = env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
        let bind_address = bind_address.parse::<SocketAddr>().map_err(|e| {
            ReservationError::Config(format!("BIND_ADDRESS {} is invalid: {}", bind_address, e))
        })?;

        let sentry_dsn = env::var("SENTRY_DSN").ok().filter(|dsn| !dsn.is_empty());

        info!(
            "Configured {} rooms, database at {}",
            rooms.len(),
            database_path
        );

        Ok(Self {
            database_path,
            rooms,
            auth_token,
            bind_address,
            sentry_dsn,
        })
    }
}

// Comma separated room identifiers; blanks and duplicates are dropped
pub fn parse_rooms(raw: &str) -> Result<Vec<String>, ReservationError> {
    let mut rooms: Vec<String> = Vec::new();
    for room in raw.split(',').map(str::trim).filter(|room| !room.is_empty()) {
        if !rooms.iter().any(|known| known == room) {
            rooms.push(room.to_string());
        }
    }

    if rooms.is_empty() {
        return Err(ReservationError::Config(
            "RESERVATION_ROOMS must name at least one room".to_string(),
        ));
    }

    Ok(rooms)
}
