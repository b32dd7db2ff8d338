use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tracing::info;

use crate::handlers::api::{
    create_reservation, end_options, form_defaults, list_reservations, list_rooms, time_options,
    AppState,
};
use crate::handlers::health::health_check;

pub fn create_router(app_state: Arc<AppState>) -> Router {
    let mut router = Router::new();

    // Health check is always available
    let health_route = Router::new().route("/health", get(health_check));
    router = router.merge(health_route);

    // Selection data and option lists
    let option_routes = Router::new()
        .route("/rooms", get(list_rooms))
        .route("/form-defaults", get(form_defaults))
        .route("/time-options", get(time_options))
        .route("/end-options", get(end_options));
    router = router.merge(option_routes);

    let reservation_routes =
        Router::new().route("/reservations", get(list_reservations).post(create_reservation));
    router = router.merge(reservation_routes);

    if app_state.auth_token.is_some() {
        info!("Reservation submissions require an auth token");
    }

    router.with_state(app_state)
}
