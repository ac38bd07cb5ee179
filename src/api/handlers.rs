//! HTTP request handlers for the schedule API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    routing::get,
};
use chrono::{Local, NaiveDate};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{grid_start, parse_date_key};
use crate::models::DayDescriptor;

use super::request::{ConfigurationRequest, DayEditRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalendarResponse, ConfigurationResponse, SummaryResponse,
};
use super::state::AppState;

type ApiResult<T> = Result<Json<T>, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calendar/:year/:month", get(calendar_handler))
        .route("/summary/:year/:month", get(summary_handler))
        .route("/days/:date", get(get_day_handler).put(edit_day_handler))
        .route(
            "/configuration",
            get(get_configuration_handler).put(configure_handler),
        )
        .with_state(state)
}

/// Handler for GET /calendar/:year/:month.
///
/// Returns the 42-cell grid for the requested month.
async fn calendar_handler(
    State(state): State<AppState>,
    path: Result<Path<(i32, u32)>, PathRejection>,
) -> ApiResult<CalendarResponse> {
    let correlation_id = Uuid::new_v4();
    let (year, month) = extract_path(correlation_id, path)?;
    let display_month = month_start(year, month)?;

    let schedule = state.snapshot().await;
    let days = schedule.month_grid(display_month, today());

    info!(
        correlation_id = %correlation_id,
        year,
        month,
        configured = schedule.is_configured(),
        "Built calendar grid"
    );

    Ok(Json(CalendarResponse {
        year,
        month,
        configured: schedule.is_configured(),
        days,
    }))
}

/// Handler for GET /summary/:year/:month.
///
/// Returns the overtime totals for the pay period paid out in the requested month.
async fn summary_handler(
    State(state): State<AppState>,
    path: Result<Path<(i32, u32)>, PathRejection>,
) -> ApiResult<SummaryResponse> {
    let correlation_id = Uuid::new_v4();
    let (year, month) = extract_path(correlation_id, path)?;
    let display_month = month_start(year, month)?;

    let summary = state.snapshot().await.pay_period_summary(display_month);

    info!(
        correlation_id = %correlation_id,
        period_start = %summary.period.start_date,
        period_end = %summary.period.end_date,
        total_normal_hours = %summary.total_normal_hours,
        total_night_hours = %summary.total_night_hours,
        "Summarized pay period"
    );

    Ok(Json(SummaryResponse {
        year,
        month,
        summary,
    }))
}

/// Handler for GET /days/:date.
async fn get_day_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<DayDescriptor> {
    let correlation_id = Uuid::new_v4();
    let date = extract_date(correlation_id, path)?;

    Ok(Json(state.snapshot().await.day(date, today())))
}

/// Handler for PUT /days/:date.
///
/// Applies a day edit and returns the updated descriptor for the date.
async fn edit_day_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<DayEditRequest>, JsonRejection>,
) -> ApiResult<DayDescriptor> {
    let correlation_id = Uuid::new_v4();
    let date = extract_date(correlation_id, path)?;
    let Json(request) = payload.map_err(|rejection| json_rejection(correlation_id, rejection))?;

    let schedule = state
        .update(|schedule| {
            let current = schedule.overtime.get(&date).copied();
            schedule.apply_day_edit(request.into_edit(date, current))
        })
        .await
        .map_err(|err| {
            warn!(correlation_id = %correlation_id, date = %date, error = %err, "Day edit rejected");
            ApiErrorResponse::from(err)
        })?;

    info!(
        correlation_id = %correlation_id,
        date = %date,
        has_overtime = schedule.overtime.contains_key(&date),
        has_override = schedule.overrides.contains_key(&date),
        "Day edit saved"
    );

    Ok(Json(schedule.day(date, today())))
}

/// Handler for GET /configuration.
async fn get_configuration_handler(
    State(state): State<AppState>,
) -> ApiResult<ConfigurationResponse> {
    let schedule = state.snapshot().await;
    Ok(Json(ConfigurationResponse::from(&schedule)))
}

/// Handler for PUT /configuration.
///
/// Replaces the rotation pattern, start date, and pay period start day.
async fn configure_handler(
    State(state): State<AppState>,
    payload: Result<Json<ConfigurationRequest>, JsonRejection>,
) -> ApiResult<ConfigurationResponse> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|rejection| json_rejection(correlation_id, rejection))?;

    let schedule = state
        .update(|schedule| {
            let (pattern, start_date, start_day) = request.validate()?;
            schedule.reconfigure(pattern, start_date, start_day);
            Ok(())
        })
        .await
        .map_err(|err| {
            warn!(correlation_id = %correlation_id, error = %err, "Configuration rejected");
            ApiErrorResponse::from(err)
        })?;

    info!(
        correlation_id = %correlation_id,
        cycle_length = schedule.pattern().map_or(0, |p| p.cycle_length()),
        pay_period_start_day = schedule.pay_period_start_day.day(),
        "Rotation configured"
    );

    Ok(Json(ConfigurationResponse::from(&schedule)))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Accepts a month only if its full six-week grid is representable.
fn month_start(year: i32, month: u32) -> Result<NaiveDate, ApiErrorResponse> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .filter(|first| grid_start(*first).is_some())
        .ok_or_else(|| ApiErrorResponse::bad_request(ApiError::invalid_month(year, month)))
}

fn extract_path<T>(
    correlation_id: Uuid,
    path: Result<Path<T>, PathRejection>,
) -> Result<T, ApiErrorResponse> {
    path.map(|Path(value)| value).map_err(|rejection| {
        warn!(correlation_id = %correlation_id, error = %rejection, "Invalid path");
        ApiErrorResponse::bad_request(ApiError::new("INVALID_PATH", rejection.body_text()))
    })
}

fn extract_date(
    correlation_id: Uuid,
    path: Result<Path<String>, PathRejection>,
) -> Result<NaiveDate, ApiErrorResponse> {
    let key = extract_path(correlation_id, path)?;
    parse_date_key(&key).map_err(|err| {
        warn!(correlation_id = %correlation_id, date_key = %key, "Invalid date key");
        ApiErrorResponse::from(err)
    })
}

fn json_rejection(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}
