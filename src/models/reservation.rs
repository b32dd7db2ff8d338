use serde::{Deserialize, Serialize};

// Record stored in the CSV database, one per accepted reservation
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub date: String,       // YYYY-MM-DD
    pub room: String,
    pub start_time: String, // HH:00
    pub end_time: String,   // HH:00
    pub name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub meeting_purpose: Option<String>,
    #[serde(default)]
    pub created_at: String, // RFC 3339, set when the record is stored
}

impl Reservation {
    /// Display form of the booked interval, e.g. `"09:00-11:00"`.
    pub fn time_range(&self) -> String {
        format!("{}-{}", self.start_time, self.end_time)
    }
}

// Submission payload for a new reservation
//
// Every field defaults to empty so that missing values surface as
// validation messages instead of extractor rejections.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub room: String,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub meeting_purpose: Option<String>,
}

// One row of the reservations table
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ReservationRow {
    pub date: String,
    pub time_range: String,
    pub room: String,
    pub name: String,
    pub department: String,
    pub meeting_purpose: String,
}

// Projected reservation list; an empty store is reported explicitly
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ReservationList {
    Empty { message: String },
    Rows { rows: Vec<ReservationRow> },
}

impl ReservationList {
    pub fn is_empty(&self) -> bool {
        matches!(self, ReservationList::Empty { .. })
    }
}
