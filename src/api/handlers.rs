//! HTTP request handlers for the work-hours ledger API.

use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch, post},
};
use chrono::{Days, Months, NaiveDate};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{classify_day, day_totals, month_stats, sum_period};
use crate::models::Settings;
use crate::repository::{EntryPatch, NewEntry};

use super::request::{MonthQuery, PeriodQuery};
use super::response::{ApiError, ApiErrorResponse, DayReport, MonthReport};
use super::state::{AppState, Ledger};

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/entries", post(create_entry).get(list_entries))
        .route("/entries/:id", patch(update_entry).delete(delete_entry))
        .route("/settings", get(get_settings).put(put_settings))
        .route("/reports/day/:date", get(day_report))
        .route("/reports/period", get(period_report))
        .route("/reports/month/:year/:month", get(month_report))
        .with_state(state)
}

/// Handler for `POST /entries`.
async fn create_entry(
    State(state): State<AppState>,
    payload: Result<Json<NewEntry>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let new = parse_json(payload, correlation_id)?;

    let mut ledger = write_ledger(&state)?;
    let settings = ledger.settings.clone();
    let entry = ledger.entries.create(new, &settings).map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Entry creation rejected");
        ApiErrorResponse::from(err)
    })?;

    info!(correlation_id = %correlation_id, entry_id = %entry.id, date = %entry.date, "Entry created");
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Handler for `GET /entries`.
async fn list_entries(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let ledger = read_ledger(&state)?;
    Ok(Json(ledger.entries.list()))
}

/// Handler for `PATCH /entries/{id}`.
async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EntryPatch>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let patch = parse_json(payload, correlation_id)?;

    let mut ledger = write_ledger(&state)?;
    let entry = ledger.entries.update(&id, patch).map_err(|err| {
        warn!(correlation_id = %correlation_id, entry_id = %id, error = %err, "Entry update rejected");
        ApiErrorResponse::from(err)
    })?;

    info!(correlation_id = %correlation_id, entry_id = %entry.id, "Entry updated");
    Ok(Json(entry))
}

/// Handler for `DELETE /entries/{id}`.
async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let mut ledger = write_ledger(&state)?;
    ledger.entries.delete(&id).map_err(|err| {
        warn!(correlation_id = %correlation_id, entry_id = %id, error = %err, "Entry deletion rejected");
        ApiErrorResponse::from(err)
    })?;

    info!(correlation_id = %correlation_id, entry_id = %id, "Entry deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for `GET /settings`.
async fn get_settings(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let ledger = read_ledger(&state)?;
    Ok(Json(ledger.settings.clone()))
}

/// Handler for `PUT /settings`.
///
/// Settings are replaced wholesale; existing entries keep their snapshots.
async fn put_settings(
    State(state): State<AppState>,
    payload: Result<Json<Settings>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let correlation_id = Uuid::new_v4();
    let settings = parse_json(payload, correlation_id)?;
    settings.validate().map_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Settings rejected");
        ApiErrorResponse::from(err)
    })?;

    let mut ledger = write_ledger(&state)?;
    ledger.settings = settings.clone();

    info!(correlation_id = %correlation_id, "Settings saved");
    Ok(Json(settings))
}

/// Handler for `GET /reports/day/{date}`.
async fn day_report(
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let ledger = read_ledger(&state)?;
    let entries = ledger.entries.entries_in_range(date, date);
    let totals = day_totals(&entries, date, &ledger.settings);
    let indicator = classify_day(&totals);
    Ok(Json(DayReport {
        totals,
        indicator,
        entries,
    }))
}

/// Handler for `GET /reports/period`.
async fn period_report(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    if query.start > query.end {
        return Err(bad_request(ApiError::validation_error(
            "start must not be after end",
        )));
    }

    let ledger = read_ledger(&state)?;
    let entries = ledger.entries.entries_in_range(query.start, query.end);
    let totals = sum_period(&entries, query.start, query.end, &ledger.settings);
    Ok(Json(totals))
}

/// Handler for `GET /reports/month/{year}/{month}`.
///
/// The optional `as_of` query parameter drives the remaining-workdays
/// projection; without it the handler reads today's local date, the one
/// wall-clock dependency in the API.
async fn month_report(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
    Query(query): Query<MonthQuery>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let Some(start) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Err(bad_request(ApiError::validation_error(format!(
            "{}-{} is not a valid year/month",
            year, month
        ))));
    };
    let Some(end) = start
        .checked_add_months(Months::new(1))
        .and_then(|d| d.checked_sub_days(Days::new(1)))
    else {
        return Err(bad_request(ApiError::validation_error(format!(
            "{}-{} is not a valid year/month",
            year, month
        ))));
    };

    let as_of = query
        .as_of
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let ledger = read_ledger(&state)?;
    let entries = ledger.entries.entries_in_range(start, end);
    let totals = sum_period(&entries, start, end, &ledger.settings);
    let stats = month_stats(year, month, as_of);
    Ok(Json(MonthReport { totals, stats }))
}

/// Unwraps a JSON payload, mapping rejections to structured API errors.
fn parse_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(correlation_id = %correlation_id, error = %body_text, "JSON data error");
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(correlation_id = %correlation_id, error = %err, "JSON syntax error");
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(bad_request(error))
        }
    }
}

fn bad_request(error: ApiError) -> ApiErrorResponse {
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error,
    }
}

fn internal_error() -> ApiErrorResponse {
    ApiErrorResponse {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        error: ApiError::new("INTERNAL_ERROR", "Ledger state is unavailable"),
    }
}

fn read_ledger(state: &AppState) -> Result<RwLockReadGuard<'_, Ledger>, ApiErrorResponse> {
    state.ledger().read().map_err(|_| internal_error())
}

fn write_ledger(state: &AppState) -> Result<RwLockWriteGuard<'_, Ledger>, ApiErrorResponse> {
    state.ledger().write().map_err(|_| internal_error())
}
