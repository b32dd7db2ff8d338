use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    /// Reading or writing the reservation database failed.
    Storage(String),
    /// Missing or malformed submission field.
    InvalidRequest(String),
    UnknownRoom(String),
    DateInPast(String),
    /// The requested interval overlaps an existing reservation.
    Conflict {
        date: String,
        room: String,
        start_time: String,
        end_time: String,
    },
    Unauthorized,
    /// Invalid environment configuration.
    Config(String),
}

impl fmt::Display for ReservationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservationError::Storage(e) => write!(f, "storage error: {e}"),
            ReservationError::InvalidRequest(msg) => write!(f, "invalid request: {msg}"),
            ReservationError::UnknownRoom(room) => write!(f, "unknown room: {room}"),
            ReservationError::DateInPast(date) => {
                write!(f, "date {date} is before today")
            }
            ReservationError::Conflict {
                date,
                room,
                start_time,
                end_time,
            } => write!(
                f,
                "room {room} is already reserved on {date} within {start_time}-{end_time}"
            ),
            ReservationError::Unauthorized => write!(f, "missing or invalid auth token"),
            ReservationError::Config(msg) => write!(f, "configuration error: {msg}"),
        }
    }
}

impl std::error::Error for ReservationError {}

impl From<csv::Error> for ReservationError {
    fn from(e: csv::Error) -> Self {
        ReservationError::Storage(e.to_string())
    }
}

impl From<std::io::Error> for ReservationError {
    fn from(e: std::io::Error) -> Self {
        ReservationError::Storage(e.to_string())
    }
}
