//! In-memory calendar registry.
//!
//! Maps canonical exchange names to calendars. Can be built programmatically
//! or from a JSON document:
//!
//! ```json
//! { "calendars": [ { "name": "NYSE", "open": "14:30", "close": "21:00" } ] }
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, NaiveTime, Utc};
use log::{debug, warn};
use serde::Deserialize;

use super::traits::{CalendarService, TradingCalendar};
use super::weekday::WeekdayCalendar;
use crate::errors::MarketDataError;

const TIME_FORMAT: &str = "%H:%M";

// ── JSON schema ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CalendarCatalog {
    calendars: Vec<CalendarEntry>,
}

#[derive(Debug, Deserialize)]
struct CalendarEntry {
    name: String,
    #[serde(default)]
    open: Option<String>,
    #[serde(default)]
    close: Option<String>,
}

fn parse_time(value: &str) -> Result<NaiveTime, MarketDataError> {
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|e| {
        MarketDataError::InvalidCalendarConfig(format!("invalid time '{}': {}", value, e))
    })
}

impl CalendarEntry {
    fn into_calendar(self) -> Result<WeekdayCalendar, MarketDataError> {
        match (self.open, self.close) {
            (Some(open), Some(close)) => Ok(WeekdayCalendar::new(
                self.name,
                parse_time(&open)?,
                parse_time(&close)?,
            )),
            (None, None) => Ok(WeekdayCalendar::all_day(self.name)),
            _ => Err(MarketDataError::InvalidCalendarConfig(format!(
                "calendar '{}' must set both open and close or neither",
                self.name
            ))),
        }
    }
}

// ── Registry ─────────────────────────────────────────────────────────────────

/// Calendar lookup keyed by canonical exchange name.
#[derive(Default, Clone)]
pub struct CalendarRegistry {
    calendars: HashMap<String, Arc<dyn TradingCalendar>>,
}

impl CalendarRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry of weekday calendars from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, MarketDataError> {
        let catalog: CalendarCatalog = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for entry in catalog.calendars {
            registry.register(Arc::new(entry.into_calendar()?));
        }
        Ok(registry)
    }

    /// Register a calendar under its own name, replacing any existing entry.
    pub fn register(&mut self, calendar: Arc<dyn TradingCalendar>) {
        let name = calendar.name().to_string();
        if self.calendars.insert(name.clone(), calendar).is_some() {
            debug!("Replaced calendar '{}'", name);
        } else {
            debug!("Registered calendar '{}'", name);
        }
    }

    /// Look up the calendar for `exchange`.
    pub fn get(&self, exchange: &str) -> Result<Arc<dyn TradingCalendar>, MarketDataError> {
        self.calendars
            .get(exchange)
            .cloned()
            .ok_or_else(|| MarketDataError::CalendarNotFound(exchange.to_string()))
    }

    /// Registered calendar names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.calendars.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.calendars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.calendars.is_empty()
    }
}

impl std::fmt::Debug for CalendarRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarRegistry")
            .field("calendars", &self.names())
            .finish()
    }
}

impl CalendarService for CalendarRegistry {
    fn is_open_on_minute(
        &self,
        exchange: &str,
        minute: DateTime<Utc>,
    ) -> Result<bool, MarketDataError> {
        let calendar = self.get(exchange).inspect_err(|e| {
            warn!("Calendar lookup failed for '{}': {}", exchange, e);
        })?;
        Ok(calendar.is_open_on_minute(minute))
    }
}
