//! Exchange descriptor shared by every asset listed on the exchange.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An exchange where assets are traded.
///
/// Assets hold an `Arc<ExchangeInfo>`; a single descriptor is normally shared
/// by every asset listed on the exchange.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ExchangeInfoRecord")]
pub struct ExchangeInfo {
    /// Full name, e.g. "NEW YORK STOCK EXCHANGE".
    name: String,
    /// Canonical name, e.g. "NYSE". Used as the calendar key.
    canonical_name: String,
    /// ISO 3166 alpha-2 country code, always upper-case.
    country_code: String,
}

/// Wire shape accepted on deserialization; `canonical_name` may be omitted.
#[derive(Deserialize)]
struct ExchangeInfoRecord {
    name: String,
    #[serde(default)]
    canonical_name: Option<String>,
    country_code: String,
}

impl From<ExchangeInfoRecord> for ExchangeInfo {
    fn from(record: ExchangeInfoRecord) -> Self {
        ExchangeInfo::new(
            record.name,
            record.canonical_name,
            record.country_code.as_str(),
        )
    }
}

impl ExchangeInfo {
    /// Creates a new descriptor.
    ///
    /// `canonical_name` falls back to `name` when absent and `country_code`
    /// is upper-cased.
    pub fn new(
        name: impl Into<String>,
        canonical_name: Option<String>,
        country_code: &str,
    ) -> Self {
        let name = name.into();
        let canonical_name = canonical_name.unwrap_or_else(|| name.clone());
        Self {
            name,
            canonical_name,
            country_code: country_code.to_uppercase(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn canonical_name(&self) -> &str {
        &self.canonical_name
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }
}

impl fmt::Display for ExchangeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExchangeInfo('{}', '{}', '{}')",
            self.name, self.canonical_name, self.country_code
        )
    }
}
