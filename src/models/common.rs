use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

// Current date/room/start selection, sent as query parameters.
// Browsers submit unselected inputs as empty strings, which count as unset.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct SelectionParams {
    #[serde(default, deserialize_with = "canonical_date")]
    pub date: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
    #[serde(default)]
    pub start: Option<String>,
}

impl SelectionParams {
    pub fn date(&self) -> Option<&str> {
        non_empty(&self.date)
    }

    pub fn room(&self) -> Option<&str> {
        non_empty(&self.room)
    }

    pub fn start(&self) -> Option<&str> {
        non_empty(&self.start)
    }

    /// An unset date is valid; a set one must be a calendar date.
    pub fn date_is_valid(&self) -> bool {
        self.date().map_or(true, |date| canonicalize_date(date).is_some())
    }
}

// Shared-token query parameter for protected endpoints
#[derive(Debug, Default, Deserialize)]
pub struct AuthParams {
    pub auth: Option<String>,
}

pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// `YYYY-MM-DD` form of a date, so `2024-1-2` matches stored `2024-01-02`.
pub fn canonicalize_date(value: &str) -> Option<String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .ok()
        .map(|date| date.format("%Y-%m-%d").to_string())
}

// Unparseable dates are kept as sent so handlers can reject them
fn canonical_date<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map(|value| canonicalize_date(&value).unwrap_or(value)))
}
