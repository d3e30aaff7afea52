//! Trading calendar boundary.
//!
//! - `traits` - [`TradingCalendar`] and [`CalendarService`]
//! - `registry` - [`CalendarRegistry`], a name-keyed in-memory service
//! - `weekday` - [`WeekdayCalendar`], fixed weekday session hours

mod registry;
mod traits;
mod weekday;

pub use registry::CalendarRegistry;
pub use traits::{CalendarService, TradingCalendar};
pub use weekday::WeekdayCalendar;
