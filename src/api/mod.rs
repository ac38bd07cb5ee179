//! HTTP API module for the Shift Rotation Engine.
//!
//! This module exposes the calendar grid, pay period summary, day editor, and
//! rotation setup to a presentation layer as local JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{ConfigurationRequest, DayEditRequest, PatternRequest};
pub use response::{
    ApiError, ApiErrorResponse, CalendarResponse, ConfigurationResponse, SummaryResponse,
};
pub use state::AppState;
