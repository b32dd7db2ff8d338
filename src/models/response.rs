use serde::Serialize;

use crate::models::reservation::Reservation;

// Response structure for reservation submissions
#[derive(Debug, Serialize)]
pub struct ReservationResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reservation: Option<Reservation>,
}

impl ReservationResponse {
    pub fn accepted(reservation: Reservation) -> Self {
        Self {
            success: true,
            message: "예약이 완료되었습니다.".to_string(),
            reservation: Some(reservation),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            reservation: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RoomsResponse {
    pub rooms: Vec<String>,
}

// Initial form state: today's date is both the default and the minimum
#[derive(Debug, Serialize)]
pub struct FormDefaults {
    pub date: String,
    pub min_date: String,
    pub rooms: Vec<String>,
}
