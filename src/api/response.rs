//! Response types for the schedule API.
//!
//! This module defines the success bodies returned to the presentation layer
//! and the error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{DayDescriptor, PayPeriodSummary, ScheduleState, Shift};

/// Body of `GET /calendar/:year/:month`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarResponse {
    /// The displayed year.
    pub year: i32,
    /// The displayed month, 1-based.
    pub month: u32,
    /// Whether a rotation has been configured. When `false` every pattern shift is unassigned.
    pub configured: bool,
    /// The 42 grid cells, Sunday first.
    pub days: Vec<DayDescriptor>,
}

/// Body of `GET /summary/:year/:month`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// The year of the payment month.
    pub year: i32,
    /// The payment month, 1-based.
    pub month: u32,
    /// The covered period and its overtime totals.
    #[serde(flatten)]
    pub summary: PayPeriodSummary,
}

/// Body of `GET /configuration` and `PUT /configuration`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationResponse {
    /// Whether a rotation has been configured.
    pub configured: bool,
    /// The rotation pattern, if configured.
    pub pattern: Option<Vec<Shift>>,
    /// The rotation start date, if configured.
    pub start_date: Option<NaiveDate>,
    /// The pay period start day.
    pub pay_period_start_day: u8,
}

impl From<&ScheduleState> for ConfigurationResponse {
    fn from(state: &ScheduleState) -> Self {
        Self {
            configured: state.is_configured(),
            pattern: state.pattern().map(|p| p.shifts().to_vec()),
            start_date: state.start_date(),
            pay_period_start_day: state.pay_period_start_day.day(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an invalid month error response.
    pub fn invalid_month(year: i32, month: u32) -> Self {
        Self::with_details(
            "INVALID_MONTH",
            format!("Invalid month: {}-{}", year, month),
            "Month must be between 1 and 12 within the supported calendar range",
        )
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response around the given error body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::InvalidPattern { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_PATTERN", message))
            }
            EngineError::InvalidShift { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_SHIFT", message))
            }
            EngineError::InvalidPayPeriodStartDay { .. } => ApiErrorResponse::bad_request(
                ApiError::new("INVALID_PAY_PERIOD_START_DAY", message),
            ),
            EngineError::InvalidDateKey { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_DATE", message))
            }
            EngineError::InvalidOvertime { .. } => {
                ApiErrorResponse::bad_request(ApiError::new("INVALID_OVERTIME", message))
            }
            EngineError::MissingStartDate => {
                ApiErrorResponse::bad_request(ApiError::new("MISSING_START_DATE", message))
            }
            EngineError::StorageError { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "STORAGE_ERROR",
                    "Failed to save schedule",
                    message,
                ),
            },
        }
    }
}
