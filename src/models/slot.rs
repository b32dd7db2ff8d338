use serde::Serialize;

// A single whole-hour choice in a start or end time list
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TimeOption {
    pub value: String, // HH:00
    pub label: String,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StartTimeOptions {
    pub placeholder: String,
    pub options: Vec<TimeOption>,
}

// Where the end time list stands for the current selection
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EndTimeState {
    AwaitingStart,
    Selectable,
    NoneAvailable,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EndTimeOptions {
    pub state: EndTimeState,
    pub placeholder: String,
    pub options: Vec<TimeOption>,
    pub can_submit: bool,
}

impl EndTimeOptions {
    pub fn available_count(&self) -> usize {
        self.options.iter().filter(|option| option.available).count()
    }
}

// Result of one full refresh: start options, then end options derived from them
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TimeOptions {
    pub date: Option<String>,
    pub room: Option<String>,
    pub selected_start: Option<String>,
    pub start: StartTimeOptions,
    pub end: EndTimeOptions,
}
