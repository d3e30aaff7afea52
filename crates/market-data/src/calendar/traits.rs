//! Calendar traits for the market data crate.
//!
//! Defines the synchronous lookup that assets delegate exchange-liveness
//! questions to.

use chrono::{DateTime, Utc};

use crate::errors::MarketDataError;

/// A single exchange's trading calendar.
pub trait TradingCalendar: Send + Sync {
    /// Canonical exchange name this calendar answers for (e.g. "NYSE").
    fn name(&self) -> &str;

    /// Whether the exchange is open at the given UTC minute.
    fn is_open_on_minute(&self, minute: DateTime<Utc>) -> bool;
}

/// Calendar lookup keyed by canonical exchange name.
///
/// This is the collaborator behind `Asset::is_exchange_open`. Implementations
/// decide their own failure behavior; callers propagate errors unmodified.
pub trait CalendarService: Send + Sync {
    /// Whether `exchange` is open at the given UTC minute.
    ///
    /// # Returns
    /// * `Ok(open)` - The calendar's answer
    /// * `Err(error)` - The calendar could not be found or failed
    fn is_open_on_minute(
        &self,
        exchange: &str,
        minute: DateTime<Utc>,
    ) -> Result<bool, MarketDataError>;
}
