//! Tradesim Market Data Crate
//!
//! Boundary types the asset model consumes but does not own.
//!
//! # Overview
//!
//! ```text
//! +------------------+     +------------------+
//! |      Asset       | --> |   ExchangeInfo   |  (shared, Arc)
//! +------------------+     +------------------+
//!          |
//!          | canonical exchange name
//!          v
//! +------------------+     +------------------+
//! | CalendarService  | --> | TradingCalendar  |  (per exchange)
//! +------------------+     +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`ExchangeInfo`] - Exchange name, canonical name and country code
//! - [`CalendarService`] - Synchronous "is this exchange open" lookup
//! - [`CalendarRegistry`] - In-memory service keyed by canonical name
//! - [`WeekdayCalendar`] - Fixed weekday session hours
//! - [`MarketDataError`] - Errors raised at this boundary

pub mod calendar;
pub mod errors;
pub mod models;

pub use calendar::{CalendarRegistry, CalendarService, TradingCalendar, WeekdayCalendar};
pub use errors::MarketDataError;
pub use models::ExchangeInfo;
