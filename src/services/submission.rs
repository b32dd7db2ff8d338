use chrono::NaiveDate;
use tracing::debug;

use crate::models::reservation::{Reservation, ReservationRequest};
use crate::services::availability::{parse_grid_hour, FIRST_START_HOUR, LAST_END_HOUR, LAST_START_HOUR};
use crate::services::error::ReservationError;
use crate::services::store::ReservationStore;

fn required<'a>(value: &'a str, field: &str) -> Result<&'a str, ReservationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ReservationError::InvalidRequest(format!("{} is required", field)));
    }
    Ok(value)
}

fn optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Check a submission against the booking rules and build the record to store.
///
/// Date and room are mandatory here even though the availability check treats
/// them as optional, so an unset selection can never slip past the conflict
/// check. The conflict check itself runs in [`ReservationStore::append`].
pub fn validate_request(
    request: &ReservationRequest,
    rooms: &[String],
    today: NaiveDate,
) -> Result<Reservation, ReservationError> {
    let date = required(&request.date, "date")?;
    let room = required(&request.room, "room")?;
    let start_time = required(&request.start_time, "startTime")?;
    let end_time = required(&request.end_time, "endTime")?;
    let name = required(&request.name, "name")?;

    let parsed_date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
        ReservationError::InvalidRequest(format!("date {} is not YYYY-MM-DD: {}", date, e))
    })?;
    // Keep the stored form canonical so string comparisons stay chronological
    let date = parsed_date.format("%Y-%m-%d").to_string();

    if parsed_date < today {
        return Err(ReservationError::DateInPast(date));
    }

    if !rooms.iter().any(|known| known == room) {
        return Err(ReservationError::UnknownRoom(room.to_string()));
    }

    let start_hour = parse_grid_hour(start_time)
        .filter(|hour| (FIRST_START_HOUR..=LAST_START_HOUR).contains(hour))
        .ok_or_else(|| {
            ReservationError::InvalidRequest(format!(
                "startTime {} is not a bookable start (09:00-17:00)",
                start_time
            ))
        })?;

    let end_hour = parse_grid_hour(end_time)
        .filter(|hour| (start_hour + 1..=LAST_END_HOUR).contains(hour))
        .ok_or_else(|| {
            ReservationError::InvalidRequest(format!(
                "endTime {} must be a whole hour after {} and no later than 18:00",
                end_time, start_time
            ))
        })?;

    debug!(
        "Validated reservation request for room {} on {} ({}h-{}h)",
        room, date, start_hour, end_hour
    );

    Ok(Reservation {
        date,
        room: room.to_string(),
        start_time: start_time.to_string(),
        end_time: end_time.to_string(),
        name: name.to_string(),
        department: optional(&request.department),
        meeting_purpose: optional(&request.meeting_purpose),
        created_at: String::new(),
    })
}

/// Validate and append a reservation. Returns the stored record.
pub fn submit_reservation(
    store: &ReservationStore,
    rooms: &[String],
    request: &ReservationRequest,
    today: NaiveDate,
) -> Result<Reservation, ReservationError> {
    let reservation = validate_request(request, rooms, today)?;
    store.append(reservation)
}
