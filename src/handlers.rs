use crate::errors::{AppError, TrackerError};
use crate::models::{DayIndex, DayUpdate, ToggleRequest, WeekView};
use crate::snapshot;
use crate::state::AppState;
use crate::storage::{MemoryStore, persist_data};
use crate::tracker::Tracker;
use crate::ui::render_index;
use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use chrono::{Local, NaiveDate};
use tracing::{info, warn};

pub async fn index() -> Html<String> {
    Html(render_index())
}

pub async fn get_week(State(state): State<AppState>) -> Result<Json<WeekView>, AppError> {
    let mut data = state.data.lock().await;
    let tracker = Tracker::new(&mut *data, &state.plan);
    Ok(Json(tracker.week_view(today())?))
}

pub async fn toggle_item(
    State(state): State<AppState>,
    Path(day): Path<String>,
    Json(payload): Json<ToggleRequest>,
) -> Result<Json<DayUpdate>, AppError> {
    let day = parse_day(&day)?;
    if payload.item.is_empty() {
        return Err(AppError::bad_request("item must not be empty"));
    }

    let update = apply_change(&state, |tracker| {
        tracker.toggle_item(day, &payload.item, payload.checked)
    })
    .await?;
    Ok(Json(update))
}

pub async fn check_all(
    State(state): State<AppState>,
    Path(day): Path<String>,
) -> Result<Json<DayUpdate>, AppError> {
    let day = parse_day(&day)?;
    let update = apply_change(&state, |tracker| tracker.check_all(day)).await?;
    Ok(Json(update))
}

pub async fn uncheck_all(
    State(state): State<AppState>,
    Path(day): Path<String>,
) -> Result<Json<DayUpdate>, AppError> {
    let day = parse_day(&day)?;
    let update = apply_change(&state, |tracker| tracker.uncheck_all(day)).await?;
    Ok(Json(update))
}

pub async fn reset_day(
    State(state): State<AppState>,
    Path(day): Path<String>,
) -> Result<Json<DayUpdate>, AppError> {
    let day = parse_day(&day)?;
    let update = apply_change(&state, |tracker| tracker.reset_day(day)).await?;
    Ok(Json(update))
}

pub async fn reset_all(State(state): State<AppState>) -> Result<Json<WeekView>, AppError> {
    let view = apply_change(&state, |tracker| tracker.reset_all(today())).await?;
    Ok(Json(view))
}

pub async fn start_week(State(state): State<AppState>) -> Result<Json<WeekView>, AppError> {
    let view = apply_change(&state, |tracker| tracker.start_week(today())).await?;
    Ok(Json(view))
}

pub async fn export(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut data = state.data.lock().await;
    let export = Tracker::new(&mut *data, &state.plan).export(today())?;
    let body = snapshot::to_pretty_json(&export.snapshot)?;
    info!(filename = %export.filename, "exported week");

    Ok((
        [
            (header::CONTENT_TYPE, String::from("application/json")),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export.filename),
            ),
        ],
        body,
    ))
}

pub async fn import(State(state): State<AppState>, body: String) -> Result<Json<WeekView>, AppError> {
    let Some(_guard) = state.begin_import() else {
        return Err(AppError::conflict("another import is still running"));
    };

    let view = apply_change(&state, |tracker| {
        tracker
            .import(&body, today())
            .inspect_err(|err| warn!("import rejected: {err}"))
    })
    .await?;
    Ok(Json(view))
}

/// Runs `change` against a copy of the store and swaps it in only once the
/// copy is on disk, so a failed write leaves the served state untouched.
async fn apply_change<T>(
    state: &AppState,
    change: impl FnOnce(&mut Tracker<'_, MemoryStore>) -> Result<T, TrackerError>,
) -> Result<T, AppError> {
    let mut data = state.data.lock().await;
    let mut next = data.clone();
    let result = change(&mut Tracker::new(&mut next, &state.plan))?;
    persist_data(&state.data_path, &next).await?;
    *data = next;
    Ok(result)
}

fn parse_day(raw: &str) -> Result<DayIndex, AppError> {
    raw.parse::<u8>()
        .ok()
        .and_then(DayIndex::new)
        .ok_or_else(|| AppError::not_found(format!("no such day: {raw}")))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
