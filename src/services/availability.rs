//! Time-slot availability checks and the start/end option lists built on them.
//!
//! Everything here is a pure function of the reservation snapshot and the
//! current selection. Rendering the resulting lists is left to the caller.

use tracing::debug;

use crate::models::common::SelectionParams;
use crate::models::reservation::Reservation;
use crate::models::slot::{
    EndTimeOptions, EndTimeState, StartTimeOptions, TimeOption, TimeOptions,
};

/// First bookable start hour.
pub const FIRST_START_HOUR: u32 = 9;
/// Last bookable start hour.
pub const LAST_START_HOUR: u32 = 17;
/// Latest end hour; one past the start grid so a 17:00 start can still end at 18:00.
pub const LAST_END_HOUR: u32 = 18;

pub const LABEL_AVAILABLE: &str = "예약 가능";
pub const LABEL_UNAVAILABLE: &str = "예약 불가";
pub const START_PLACEHOLDER: &str = "시작 시간 선택";
pub const END_PLACEHOLDER: &str = "종료 시간 선택";
pub const END_AWAITING_START: &str = "시작 시간을 먼저 선택해주세요";
pub const END_NONE_AVAILABLE: &str = "선택 가능한 종료 시간이 없습니다";

// Minutes since midnight for an "H:MM" / "HH:MM" string.
// Malformed parts count as zero and oversized values saturate, so a
// hand-edited database row cannot overflow.
pub fn to_minutes(time: &str) -> u32 {
    let mut parts = time.split(':');
    let hour = parts
        .next()
        .and_then(|h| h.trim().parse::<u32>().ok())
        .unwrap_or(0);
    let minute = parts
        .next()
        .and_then(|m| m.trim().parse::<u32>().ok())
        .unwrap_or(0);
    hour.saturating_mul(60).saturating_add(minute)
}

pub fn format_hour(hour: u32) -> String {
    format!("{:02}:00", hour)
}

/// Parse a strict `HH:00` grid value into its hour.
pub fn parse_grid_hour(time: &str) -> Option<u32> {
    let (hour, minute) = time.split_once(':')?;
    if hour.len() != 2 || minute != "00" {
        return None;
    }
    let hour = hour.parse::<u32>().ok()?;
    (hour < 24).then_some(hour)
}

/// Half-open interval overlap on minute offsets. Abutting intervals do not overlap.
pub fn overlaps(a_start: u32, a_end: u32, b_start: u32, b_end: u32) -> bool {
    a_start < b_end && a_end > b_start
}

/// Whether `[start_time, end_time)` is free for the given date and room.
///
/// With no date or no room there is nothing to check against, so the slot
/// counts as available.
pub fn is_available(
    reservations: &[Reservation],
    date: Option<&str>,
    room: Option<&str>,
    start_time: &str,
    end_time: &str,
) -> bool {
    let (Some(date), Some(room)) = (date, room) else {
        return true;
    };

    let new_start = to_minutes(start_time);
    let new_end = to_minutes(end_time);

    !reservations
        .iter()
        .filter(|res| res.date == date && res.room == room)
        .any(|res| {
            overlaps(
                new_start,
                new_end,
                to_minutes(&res.start_time),
                to_minutes(&res.end_time),
            )
        })
}

fn time_option(value: String, available: bool) -> TimeOption {
    let status = if available {
        LABEL_AVAILABLE
    } else {
        LABEL_UNAVAILABLE
    };
    TimeOption {
        label: format!("{} ({})", value, status),
        value,
        available,
    }
}

/// Start options 09:00..=17:00, each checked as a one-hour slot.
///
/// Unavailable starts stay in the list, flagged. Without a date and a room the
/// list is empty.
pub fn generate_start_options(
    reservations: &[Reservation],
    date: Option<&str>,
    room: Option<&str>,
) -> StartTimeOptions {
    let options = match (date, room) {
        (Some(_), Some(_)) => (FIRST_START_HOUR..=LAST_START_HOUR)
            .map(|hour| {
                let start = format_hour(hour);
                let end = format_hour(hour + 1);
                let available = is_available(reservations, date, room, &start, &end);
                time_option(start, available)
            })
            .collect(),
        _ => Vec::new(),
    };

    StartTimeOptions {
        placeholder: START_PLACEHOLDER.to_string(),
        options,
    }
}

/// End options for every hour after `start_time` up to 18:00, checked against
/// the chosen start.
///
/// `can_submit` is true only when at least one end option is available.
pub fn generate_end_options(
    reservations: &[Reservation],
    date: Option<&str>,
    room: Option<&str>,
    start_time: Option<&str>,
) -> EndTimeOptions {
    let start_time = match (date, room, start_time) {
        (Some(_), Some(_), Some(start_time)) => start_time,
        _ => {
            return EndTimeOptions {
                state: EndTimeState::AwaitingStart,
                placeholder: END_AWAITING_START.to_string(),
                options: Vec::new(),
                can_submit: false,
            }
        }
    };

    let start_hour = to_minutes(start_time) / 60;
    let options: Vec<TimeOption> = (start_hour + 1..=LAST_END_HOUR)
        .map(|hour| {
            let end = format_hour(hour);
            let available = is_available(reservations, date, room, start_time, &end);
            time_option(end, available)
        })
        .collect();

    let has_available_slots = options.iter().any(|option| option.available);

    if has_available_slots {
        EndTimeOptions {
            state: EndTimeState::Selectable,
            placeholder: END_PLACEHOLDER.to_string(),
            options,
            can_submit: true,
        }
    } else {
        EndTimeOptions {
            state: EndTimeState::NoneAvailable,
            placeholder: END_NONE_AVAILABLE.to_string(),
            options,
            can_submit: false,
        }
    }
}

/// Full refresh for a selection change: start options first, then end options
/// for the same snapshot.
///
/// A requested start survives only if it is an available entry of the freshly
/// generated start list; otherwise the end list falls back to its
/// "pick a start time first" state.
pub fn generate_time_options(
    reservations: &[Reservation],
    selection: &SelectionParams,
) -> TimeOptions {
    let date = selection.date();
    let room = selection.room();

    let start = generate_start_options(reservations, date, room);

    let selected_start = selection.start().and_then(|requested| {
        start
            .options
            .iter()
            .find(|option| option.value == requested && option.available)
            .map(|option| option.value.clone())
    });

    if let (Some(requested), None) = (selection.start(), &selected_start) {
        debug!(
            "Dropping start time {} for {:?}/{:?}: not an available start option",
            requested, date, room
        );
    }

    let end = generate_end_options(reservations, date, room, selected_start.as_deref());

    debug!(
        "Refreshed options for {:?}/{:?}: {} start options, {} of {} end options available",
        date,
        room,
        start.options.len(),
        end.available_count(),
        end.options.len()
    );

    TimeOptions {
        date: date.map(str::to_string),
        room: room.map(str::to_string),
        selected_start,
        start,
        end,
    }
}
