//! Error types for the market data crate.
//!
//! [`MarketDataError`] covers failures at the calendar boundary. Callers in
//! the core crate wrap it unmodified.

use thiserror::Error;

/// Errors that can occur during market data operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MarketDataError {
    /// No calendar is registered under the requested exchange name.
    #[error("Calendar not found: {0}")]
    CalendarNotFound(String),

    /// A calendar configuration document could not be parsed.
    #[error("Invalid calendar configuration: {0}")]
    InvalidCalendarConfig(String),

    /// The calendar backend failed to answer.
    #[error("Calendar unavailable: {calendar} - {message}")]
    CalendarUnavailable {
        /// The calendar that failed
        calendar: String,
        /// The error message from the backend
        message: String,
    },
}

impl From<serde_json::Error> for MarketDataError {
    fn from(err: serde_json::Error) -> Self {
        MarketDataError::InvalidCalendarConfig(err.to_string())
    }
}
