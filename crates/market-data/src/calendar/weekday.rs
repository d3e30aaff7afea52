//! Weekday session-hours calendar.
//!
//! Open Monday through Friday between a UTC open time (inclusive) and close
//! time (exclusive). A close earlier than the open describes an overnight
//! session that wraps past midnight. There is no holiday handling.

use chrono::{DateTime, Datelike, NaiveTime, Utc, Weekday};

use super::traits::TradingCalendar;

/// Calendar open on weekdays during fixed UTC session hours.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekdayCalendar {
    name: String,
    open: NaiveTime,
    close: NaiveTime,
}

impl WeekdayCalendar {
    /// Create a calendar for `name` open from `open` until `close` (UTC).
    ///
    /// With `close < open` the session runs overnight, e.g. 23:00 until
    /// 22:00 the next day; the weekday check applies to the minute's own date.
    pub fn new(name: impl Into<String>, open: NaiveTime, close: NaiveTime) -> Self {
        Self {
            name: name.into(),
            open,
            close,
        }
    }

    /// Calendar that is open for the whole of every weekday.
    pub fn all_day(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            open: NaiveTime::default(),
            close: NaiveTime::default(),
        }
    }

    pub fn open(&self) -> NaiveTime {
        self.open
    }

    pub fn close(&self) -> NaiveTime {
        self.close
    }
}

fn is_weekday(weekday: Weekday) -> bool {
    !matches!(weekday, Weekday::Sat | Weekday::Sun)
}

impl TradingCalendar for WeekdayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_open_on_minute(&self, minute: DateTime<Utc>) -> bool {
        let naive = minute.naive_utc();
        if !is_weekday(naive.weekday()) {
            return false;
        }
        // open == close means the session spans the full day
        if self.open == self.close {
            return true;
        }
        let time = naive.time();
        if self.open < self.close {
            time >= self.open && time < self.close
        } else {
            time >= self.open || time < self.close
        }
    }
}
