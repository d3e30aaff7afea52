//! Asset domain models.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tradesim_market_data::{CalendarService, ExchangeInfo};

use super::asset_serialization::{lossless_f64, VersionedPositionalForm};
use super::future_model::{Future, NewFuture};
use crate::constants::{DEFAULT_PRICE_MAGNIFIER, DEFAULT_PRICE_MULTIPLIER, DEFAULT_TICK_SIZE};
use crate::errors::Result;

/// Constructor fields accepted by a base asset or an equity, in positional order.
pub const ASSET_KEYS: &[&str] = &[
    "sid",
    "real_sid",
    "exchange_info",
    "currency",
    "symbol",
    "asset_name",
    "start_date",
    "end_date",
    "first_traded",
    "auto_close_date",
    "tick_size",
    "multiplier",
    "price_magnifier",
];

/// Constructor fields accepted by a future, in positional order.
pub const FUTURE_KEYS: &[&str] = &[
    "sid",
    "real_sid",
    "exchange_info",
    "currency",
    "symbol",
    "root_symbol",
    "asset_name",
    "start_date",
    "end_date",
    "notice_date",
    "expiration_date",
    "auto_close_date",
    "rollover_date",
    "first_traded",
    "tick_size",
    "multiplier",
    "price_magnifier",
];

/// Constructor fields every variant requires.
pub const REQUIRED_KEYS: &[&str] = &["sid", "real_sid", "exchange_info", "currency"];

/// Variant tag of an [`Asset`].
///
/// Identity never depends on the tag; it selects the textual type name and
/// the accepted field set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetType {
    Asset,
    Equity,
    Future,
}

impl AssetType {
    /// Type name used in the textual form, e.g. `Equity(Q123 [AAPL])`.
    pub const fn type_name(&self) -> &'static str {
        match self {
            AssetType::Asset => "Asset",
            AssetType::Equity => "Equity",
            AssetType::Future => "Future",
        }
    }

    /// Constructor fields this variant accepts.
    pub const fn accepted_keys(&self) -> &'static [&'static str] {
        match self {
            AssetType::Asset | AssetType::Equity => ASSET_KEYS,
            AssetType::Future => FUTURE_KEYS,
        }
    }

    /// Parses a variant from its type name.
    pub fn from_type_name(s: &str) -> Option<Self> {
        match s {
            "Asset" => Some(AssetType::Asset),
            "Equity" => Some(AssetType::Equity),
            "Future" => Some(AssetType::Future),
            _ => None,
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

fn default_tick_size() -> f64 {
    DEFAULT_TICK_SIZE
}

fn default_multiplier() -> f64 {
    DEFAULT_PRICE_MULTIPLIER
}

fn default_price_magnifier() -> f64 {
    DEFAULT_PRICE_MAGNIFIER
}

/// Input model for creating a new asset.
///
/// The four mandatory fields are taken by [`NewAsset::new`]; everything else
/// carries a default and can be overridden with struct update syntax.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAsset {
    pub sid: i64,
    pub real_sid: String,
    pub exchange_info: Arc<ExchangeInfo>,
    pub currency: String,

    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub asset_name: String,

    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    /// Absent while the asset is still active.
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub first_traded: Option<DateTime<Utc>>,
    #[serde(default)]
    pub auto_close_date: Option<DateTime<Utc>>,

    #[serde(default = "default_tick_size", with = "lossless_f64")]
    pub tick_size: f64,
    #[serde(default = "default_multiplier", with = "lossless_f64")]
    pub multiplier: f64,
    #[serde(default = "default_price_magnifier", with = "lossless_f64")]
    pub price_magnifier: f64,
}

impl NewAsset {
    pub fn new(
        sid: i64,
        real_sid: impl Into<String>,
        exchange_info: Arc<ExchangeInfo>,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            sid,
            real_sid: real_sid.into(),
            exchange_info,
            currency: currency.into(),
            symbol: String::new(),
            asset_name: String::new(),
            start_date: None,
            end_date: None,
            first_traded: None,
            auto_close_date: None,
            tick_size: DEFAULT_TICK_SIZE,
            multiplier: DEFAULT_PRICE_MULTIPLIER,
            price_magnifier: DEFAULT_PRICE_MAGNIFIER,
        }
    }
}

/// Fields shared by every asset variant.
///
/// Immutable once constructed. Equality, ordering and hashing of the
/// enclosing asset use `sid` only.
#[derive(Debug, Clone)]
pub struct AssetInfo {
    pub(crate) sid: i64,
    pub(crate) real_sid: String,
    pub(crate) symbol: String,
    pub(crate) asset_name: String,
    pub(crate) exchange_info: Arc<ExchangeInfo>,
    pub(crate) currency: String,
    pub(crate) start_date: Option<DateTime<Utc>>,
    pub(crate) end_date: Option<DateTime<Utc>>,
    pub(crate) first_traded: Option<DateTime<Utc>>,
    pub(crate) auto_close_date: Option<DateTime<Utc>>,
    pub(crate) tick_size: f64,
    pub(crate) price_multiplier: f64,
    pub(crate) price_magnifier: f64,
}

impl From<NewAsset> for AssetInfo {
    fn from(params: NewAsset) -> Self {
        Self {
            sid: params.sid,
            real_sid: params.real_sid,
            symbol: params.symbol,
            asset_name: params.asset_name,
            exchange_info: params.exchange_info,
            currency: params.currency,
            start_date: params.start_date,
            end_date: params.end_date,
            first_traded: params.first_traded,
            auto_close_date: params.auto_close_date,
            tick_size: params.tick_size,
            price_multiplier: params.multiplier,
            price_magnifier: params.price_magnifier,
        }
    }
}

impl AssetInfo {
    pub fn sid(&self) -> i64 {
        self.sid
    }

    pub fn real_sid(&self) -> &str {
        &self.real_sid
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn asset_name(&self) -> &str {
        &self.asset_name
    }

    pub fn exchange_info(&self) -> &Arc<ExchangeInfo> {
        &self.exchange_info
    }

    /// Canonical exchange name, read through the shared exchange descriptor.
    pub fn exchange(&self) -> &str {
        self.exchange_info.canonical_name()
    }

    /// Full exchange name.
    pub fn exchange_full(&self) -> &str {
        self.exchange_info.name()
    }

    pub fn country_code(&self) -> &str {
        self.exchange_info.country_code()
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn start_date(&self) -> Option<DateTime<Utc>> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<DateTime<Utc>> {
        self.end_date
    }

    pub fn first_traded(&self) -> Option<DateTime<Utc>> {
        self.first_traded
    }

    pub fn auto_close_date(&self) -> Option<DateTime<Utc>> {
        self.auto_close_date
    }

    pub fn tick_size(&self) -> f64 {
        self.tick_size
    }

    pub fn price_multiplier(&self) -> f64 {
        self.price_multiplier
    }

    pub fn price_magnifier(&self) -> f64 {
        self.price_magnifier
    }

    /// Whether the asset can be held during `session`.
    ///
    /// Not alive before `start_date`; alive through `auto_close_date`
    /// inclusive, or indefinitely when no auto-close date is set.
    pub fn is_alive_for_session(&self, session: DateTime<Utc>) -> bool {
        if self.start_date.is_some_and(|start| session < start) {
            return false;
        }
        match self.auto_close_date {
            None => true,
            Some(auto_close) => session <= auto_close,
        }
    }

    /// Whether the asset's exchange is open at `minute`.
    ///
    /// Delegates to `calendars` keyed by the canonical exchange name; a
    /// calendar error is returned unmodified inside [`crate::Error::MarketData`].
    pub fn is_exchange_open<C>(&self, minute: DateTime<Utc>, calendars: &C) -> Result<bool>
    where
        C: CalendarService + ?Sized,
    {
        Ok(calendars.is_open_on_minute(self.exchange(), minute)?)
    }

    /// Constructor parameters that rebuild this asset.
    pub fn to_new_asset(&self) -> NewAsset {
        NewAsset {
            sid: self.sid,
            real_sid: self.real_sid.clone(),
            exchange_info: Arc::clone(&self.exchange_info),
            currency: self.currency.clone(),
            symbol: self.symbol.clone(),
            asset_name: self.asset_name.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            first_traded: self.first_traded,
            auto_close_date: self.auto_close_date,
            tick_size: self.tick_size,
            multiplier: self.price_multiplier,
            price_magnifier: self.price_magnifier,
        }
    }

    pub(crate) fn fmt_repr(&self, f: &mut fmt::Formatter<'_>, type_name: &str) -> fmt::Result {
        if self.symbol.is_empty() {
            write!(f, "{}({})", type_name, self.real_sid)
        } else {
            write!(f, "{}({} [{}])", type_name, self.real_sid, self.symbol)
        }
    }
}

/// A tradable instrument.
///
/// The variants share [`AssetInfo`] (reachable through `Deref`); only
/// futures carry extra contract fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "VersionedPositionalForm", into = "VersionedPositionalForm")]
pub enum Asset {
    Base(AssetInfo),
    Equity(AssetInfo),
    Future(Future),
}

impl Asset {
    /// Creates a base asset.
    pub fn new(params: NewAsset) -> Self {
        Asset::Base(params.into())
    }

    /// Creates an equity.
    pub fn equity(params: NewAsset) -> Self {
        Asset::Equity(params.into())
    }

    /// Creates a future, deriving its auto-close and rollover dates.
    pub fn future(params: NewFuture) -> Self {
        Asset::Future(Future::new(params))
    }

    pub fn asset_type(&self) -> AssetType {
        match self {
            Asset::Base(_) => AssetType::Asset,
            Asset::Equity(_) => AssetType::Equity,
            Asset::Future(_) => AssetType::Future,
        }
    }

    pub fn info(&self) -> &AssetInfo {
        match self {
            Asset::Base(info) | Asset::Equity(info) => info,
            Asset::Future(future) => future.info(),
        }
    }

    pub fn as_future(&self) -> Option<&Future> {
        match self {
            Asset::Future(future) => Some(future),
            _ => None,
        }
    }

    pub fn is_equity(&self) -> bool {
        matches!(self, Asset::Equity(_))
    }

    pub fn is_future(&self) -> bool {
        matches!(self, Asset::Future(_))
    }
}

impl Deref for Asset {
    type Target = AssetInfo;

    fn deref(&self) -> &AssetInfo {
        self.info()
    }
}

impl From<Future> for Asset {
    fn from(future: Future) -> Self {
        Asset::Future(future)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.info().fmt_repr(f, self.asset_type().type_name())
    }
}
