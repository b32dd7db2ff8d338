use crate::models::reservation::{Reservation, ReservationList, ReservationRow};

pub const EMPTY_LIST_MESSAGE: &str = "예약 내역이 없습니다.";

fn or_dash(value: &Option<String>) -> String {
    match value.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => "-".to_string(),
    }
}

// Reservations ordered by date, then start time.
// Both fields are fixed width, so string order is chronological.
pub fn sorted_reservations(reservations: &[Reservation]) -> Vec<Reservation> {
    let mut sorted = reservations.to_vec();
    sorted.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.start_time.cmp(&b.start_time))
    });
    sorted
}

/// Display rows for all stored reservations, or the explicit empty state.
pub fn project_list(reservations: &[Reservation]) -> ReservationList {
    if reservations.is_empty() {
        return ReservationList::Empty {
            message: EMPTY_LIST_MESSAGE.to_string(),
        };
    }

    let rows = sorted_reservations(reservations)
        .into_iter()
        .map(|res| ReservationRow {
            time_range: res.time_range(),
            department: or_dash(&res.department),
            meeting_purpose: or_dash(&res.meeting_purpose),
            date: res.date,
            room: res.room,
            name: res.name,
        })
        .collect();

    ReservationList::Rows { rows }
}
