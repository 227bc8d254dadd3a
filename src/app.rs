use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/week", get(handlers::get_week))
        .route("/api/days/:day/toggle", post(handlers::toggle_item))
        .route("/api/days/:day/check-all", post(handlers::check_all))
        .route("/api/days/:day/uncheck-all", post(handlers::uncheck_all))
        .route("/api/days/:day/reset", post(handlers::reset_day))
        .route("/api/week/reset", post(handlers::reset_all))
        .route("/api/week/start", post(handlers::start_week))
        .route("/api/export", get(handlers::export))
        .route("/api/import", post(handlers::import))
        .with_state(state)
}
