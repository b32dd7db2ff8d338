use axum::{
    extract::{Json as ExtractJson, Query, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::Json,
};
use chrono::Local;
use std::sync::Arc;
use tracing::{error, info, warn};

use crate::models::common::{AuthParams, SelectionParams};
use crate::models::reservation::{Reservation, ReservationList, ReservationRequest};
use crate::models::response::{FormDefaults, ReservationResponse, RoomsResponse};
use crate::models::slot::{EndTimeOptions, TimeOptions};
use crate::services::availability::{
    generate_end_options, generate_time_options, parse_grid_hour,
    FIRST_START_HOUR, LAST_START_HOUR,
};
use crate::services::error::ReservationError;
use crate::services::listing::project_list;
use crate::services::store::ReservationStore;
use crate::services::submission::submit_reservation;

// AppState struct containing shared resources
pub struct AppState {
    pub store: Arc<ReservationStore>,
    pub rooms: Vec<String>,
    pub auth_token: Option<String>,
}

impl AppState {
    fn snapshot(&self) -> Result<Vec<Reservation>, StatusCode> {
        self.store.list().map_err(|e| {
            error!("Failed to read reservations: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })
    }

    // Token from `?auth=` or `Authorization: Bearer`; open when no token is configured
    fn is_authorized(&self, params: &AuthParams, headers: &HeaderMap) -> bool {
        let Some(expected) = self.auth_token.as_deref() else {
            return true;
        };

        let bearer = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim);

        params.auth.as_deref() == Some(expected) || bearer == Some(expected)
    }
}

pub fn status_for(err: &ReservationError) -> StatusCode {
    match err {
        ReservationError::InvalidRequest(_)
        | ReservationError::UnknownRoom(_)
        | ReservationError::DateInPast(_) => StatusCode::BAD_REQUEST,
        ReservationError::Conflict { .. } => StatusCode::CONFLICT,
        ReservationError::Unauthorized => StatusCode::UNAUTHORIZED,
        ReservationError::Storage(_) | ReservationError::Config(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

// List configured rooms
pub async fn list_rooms(State(state): State<Arc<AppState>>) -> Json<RoomsResponse> {
    Json(RoomsResponse {
        rooms: state.rooms.clone(),
    })
}

// Initial form values: today as default and earliest date
pub async fn form_defaults(State(state): State<Arc<AppState>>) -> Json<FormDefaults> {
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    Json(FormDefaults {
        date: today.clone(),
        min_date: today,
        rooms: state.rooms.clone(),
    })
}

// A selected date that is not a calendar date would match no bookings and
// report every slot as free
fn check_date(selection: &SelectionParams) -> Result<(), StatusCode> {
    if selection.date_is_valid() {
        return Ok(());
    }
    warn!(
        "Rejected option request with date {:?}",
        selection.date().unwrap_or_default()
    );
    Err(StatusCode::BAD_REQUEST)
}

// Start and end options for the current selection in one response
pub async fn time_options(
    State(state): State<Arc<AppState>>,
    Query(selection): Query<SelectionParams>,
) -> Result<Json<TimeOptions>, StatusCode> {
    check_date(&selection)?;
    let reservations = state.snapshot()?;
    Ok(Json(generate_time_options(&reservations, &selection)))
}

pub async fn end_options(
    State(state): State<Arc<AppState>>,
    Query(selection): Query<SelectionParams>,
) -> Result<Json<EndTimeOptions>, StatusCode> {
    check_date(&selection)?;
    if let Some(start) = selection.start() {
        let on_grid = parse_grid_hour(start)
            .map_or(false, |hour| (FIRST_START_HOUR..=LAST_START_HOUR).contains(&hour));
        if !on_grid {
            warn!("Rejected end option request with start time {}", start);
            return Err(StatusCode::BAD_REQUEST);
        }
    }

    let reservations = state.snapshot()?;
    Ok(Json(generate_end_options(
        &reservations,
        selection.date(),
        selection.room(),
        selection.start(),
    )))
}

// Stored reservations in display order
pub async fn list_reservations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ReservationList>, StatusCode> {
    let reservations = state.snapshot()?;
    Ok(Json(project_list(&reservations)))
}

// Accept a new reservation after validation and a final conflict check
pub async fn create_reservation(
    State(state): State<Arc<AppState>>,
    Query(auth): Query<AuthParams>,
    headers: HeaderMap,
    ExtractJson(request): ExtractJson<ReservationRequest>,
) -> (StatusCode, Json<ReservationResponse>) {
    info!(
        "Received reservation request for room {} on {} {}-{}",
        request.room, request.date, request.start_time, request.end_time
    );

    if !state.is_authorized(&auth, &headers) {
        warn!("Rejected reservation request: missing or invalid auth token");
        let err = ReservationError::Unauthorized;
        return (status_for(&err), Json(ReservationResponse::rejected(err.to_string())));
    }

    let today = Local::now().date_naive();
    match submit_reservation(&state.store, &state.rooms, &request, today) {
        Ok(reservation) => {
            info!(
                "Accepted reservation for room {} on {} {}",
                reservation.room,
                reservation.date,
                reservation.time_range()
            );
            (
                StatusCode::CREATED,
                Json(ReservationResponse::accepted(reservation)),
            )
        }
        Err(err) => {
            let status = status_for(&err);
            if status.is_server_error() {
                error!("Failed to store reservation: {}", err);
            } else {
                warn!("Rejected reservation request: {}", err);
            }
            (status, Json(ReservationResponse::rejected(err.to_string())))
        }
    }
}
