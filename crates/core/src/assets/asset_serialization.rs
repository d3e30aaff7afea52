//! Serialized forms of assets.
//!
//! Two independent forms, both of which round-trip:
//!
//! - **Positional**: [`PositionalForm`], the variant tag plus a fixed-order
//!   tuple of constructor fields. `Asset`'s serde implementation stores it
//!   behind the layout version, so `serde_json` renders a future as
//!   `[1,{"Future":[sid, real_sid, exchange_info, ...]}]`. A payload written
//!   with another [`POSITIONAL_FORM_VERSION`] is rejected.
//! - **Keyed**: [`AssetDict`], a JSON object keyed by field name. It carries
//!   the informational `exchange`/`exchange_full` keys, which
//!   [`from_dict`] ignores along with any other key the target variant does
//!   not accept.
//!
//! Non-finite prices (`tick_size`, multiplier, magnifier) are written as the
//! strings `"inf"`, `"-inf"` and `"NaN"` in both forms.
//!
//! [`POSITIONAL_FORM_VERSION`]: crate::constants::POSITIONAL_FORM_VERSION

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use log::trace;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use tradesim_market_data::ExchangeInfo;

use super::assets_model::{Asset, AssetInfo, AssetType, NewAsset, REQUIRED_KEYS};
use super::future_model::{Future, NewFuture};
use crate::constants::POSITIONAL_FORM_VERSION;
use crate::errors::{Result, ValidationError};

/// Keyed dictionary form of an asset.
pub type AssetDict = Map<String, Value>;

/// Serde codec for `f64` fields that keeps non-finite values.
///
/// Finite values are plain numbers. Infinities and NaN, which JSON numbers
/// cannot carry, become `"inf"`, `"-inf"` and `"NaN"`. Deserialization takes
/// a number or any string `f64::from_str` accepts.
pub(crate) mod lossless_f64 {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};
    use serde_json::Value;

    pub(crate) fn to_value(value: f64) -> Value {
        if value.is_finite() {
            Value::from(value)
        } else {
            Value::String(non_finite_str(value).to_string())
        }
    }

    fn non_finite_str(value: f64) -> &'static str {
        if value.is_nan() {
            "NaN"
        } else if value.is_sign_positive() {
            "inf"
        } else {
            "-inf"
        }
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_str(non_finite_str(*value))
        }
    }

    struct LosslessF64Visitor;

    impl<'de> Visitor<'de> for LosslessF64Visitor {
        type Value = f64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number or one of \"inf\", \"-inf\", \"NaN\"")
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<f64, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<f64, E> {
            Ok(value as f64)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<f64, E> {
            value
                .parse::<f64>()
                .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        deserializer.deserialize_any(LosslessF64Visitor)
    }
}

// ============================================================================
// POSITIONAL FORM
// ============================================================================

/// Positional fields of a base asset or equity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetFields(
    pub i64,                      // sid
    pub String,                   // real_sid
    pub Arc<ExchangeInfo>,        // exchange_info
    pub String,                   // currency
    pub String,                   // symbol
    pub String,                   // asset_name
    pub Option<DateTime<Utc>>,    // start_date
    pub Option<DateTime<Utc>>,    // end_date
    pub Option<DateTime<Utc>>,    // first_traded
    pub Option<DateTime<Utc>>,    // auto_close_date
    #[serde(with = "lossless_f64")]
    pub f64, // tick_size
    #[serde(with = "lossless_f64")]
    pub f64, // price_multiplier
    #[serde(with = "lossless_f64")]
    pub f64, // price_magnifier
);

/// Positional fields of a future.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FutureFields(
    pub i64,                      // sid
    pub String,                   // real_sid
    pub Arc<ExchangeInfo>,        // exchange_info
    pub String,                   // currency
    pub String,                   // symbol
    pub String,                   // root_symbol
    pub String,                   // asset_name
    pub Option<DateTime<Utc>>,    // start_date
    pub Option<DateTime<Utc>>,    // end_date
    pub Option<DateTime<Utc>>,    // notice_date
    pub Option<DateTime<Utc>>,    // expiration_date
    pub Option<DateTime<Utc>>,    // auto_close_date
    pub Option<DateTime<Utc>>,    // rollover_date
    pub Option<DateTime<Utc>>,    // first_traded
    #[serde(with = "lossless_f64")]
    pub f64, // tick_size
    #[serde(with = "lossless_f64")]
    pub f64, // price_multiplier
    #[serde(with = "lossless_f64")]
    pub f64, // price_magnifier
);

/// Variant-tagged positional form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PositionalForm {
    Asset(AssetFields),
    Equity(AssetFields),
    Future(FutureFields),
}

impl From<&AssetInfo> for AssetFields {
    fn from(info: &AssetInfo) -> Self {
        AssetFields(
            info.sid,
            info.real_sid.clone(),
            Arc::clone(&info.exchange_info),
            info.currency.clone(),
            info.symbol.clone(),
            info.asset_name.clone(),
            info.start_date,
            info.end_date,
            info.first_traded,
            info.auto_close_date,
            info.tick_size,
            info.price_multiplier,
            info.price_magnifier,
        )
    }
}

impl From<AssetFields> for AssetInfo {
    fn from(fields: AssetFields) -> Self {
        let AssetFields(
            sid,
            real_sid,
            exchange_info,
            currency,
            symbol,
            asset_name,
            start_date,
            end_date,
            first_traded,
            auto_close_date,
            tick_size,
            price_multiplier,
            price_magnifier,
        ) = fields;
        AssetInfo {
            sid,
            real_sid,
            symbol,
            asset_name,
            exchange_info,
            currency,
            start_date,
            end_date,
            first_traded,
            auto_close_date,
            tick_size,
            price_multiplier,
            price_magnifier,
        }
    }
}

impl From<&Future> for FutureFields {
    fn from(future: &Future) -> Self {
        let info = future.info();
        FutureFields(
            info.sid,
            info.real_sid.clone(),
            Arc::clone(&info.exchange_info),
            info.currency.clone(),
            info.symbol.clone(),
            future.root_symbol().to_string(),
            info.asset_name.clone(),
            info.start_date,
            info.end_date,
            future.notice_date(),
            future.expiration_date(),
            info.auto_close_date,
            future.rollover_date(),
            info.first_traded,
            info.tick_size,
            info.price_multiplier,
            info.price_magnifier,
        )
    }
}

impl From<FutureFields> for Future {
    /// Rebuilds the contract with its stored auto-close and rollover dates
    /// rather than re-deriving them.
    fn from(fields: FutureFields) -> Self {
        let FutureFields(
            sid,
            real_sid,
            exchange_info,
            currency,
            symbol,
            root_symbol,
            asset_name,
            start_date,
            end_date,
            notice_date,
            expiration_date,
            auto_close_date,
            rollover_date,
            first_traded,
            tick_size,
            price_multiplier,
            price_magnifier,
        ) = fields;
        let info = AssetInfo {
            sid,
            real_sid,
            symbol,
            asset_name,
            exchange_info,
            currency,
            start_date,
            end_date,
            first_traded,
            auto_close_date,
            tick_size,
            price_multiplier,
            price_magnifier,
        };
        Future::from_parts(info, root_symbol, notice_date, expiration_date, rollover_date)
    }
}

impl From<&Asset> for PositionalForm {
    fn from(asset: &Asset) -> Self {
        match asset {
            Asset::Base(info) => PositionalForm::Asset(info.into()),
            Asset::Equity(info) => PositionalForm::Equity(info.into()),
            Asset::Future(future) => PositionalForm::Future(future.into()),
        }
    }
}

impl From<Asset> for PositionalForm {
    fn from(asset: Asset) -> Self {
        PositionalForm::from(&asset)
    }
}

impl From<PositionalForm> for Asset {
    fn from(form: PositionalForm) -> Self {
        match form {
            PositionalForm::Asset(fields) => Asset::Base(fields.into()),
            PositionalForm::Equity(fields) => Asset::Equity(fields.into()),
            PositionalForm::Future(fields) => Asset::Future(fields.into()),
        }
    }
}

/// Positional form as stored by `Asset`'s serde implementation: the layout
/// version followed by the tagged fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionedPositionalForm(pub u8, pub PositionalForm);

impl From<Asset> for VersionedPositionalForm {
    fn from(asset: Asset) -> Self {
        VersionedPositionalForm(POSITIONAL_FORM_VERSION, asset.to_positional())
    }
}

impl TryFrom<VersionedPositionalForm> for Asset {
    type Error = ValidationError;

    fn try_from(stored: VersionedPositionalForm) -> std::result::Result<Self, Self::Error> {
        let VersionedPositionalForm(version, form) = stored;
        if version != POSITIONAL_FORM_VERSION {
            return Err(ValidationError::InvalidInput(format!(
                "unsupported positional form version {} (expected {})",
                version, POSITIONAL_FORM_VERSION
            )));
        }
        Ok(form.into())
    }
}

impl PositionalForm {
    pub fn asset_type(&self) -> AssetType {
        match self {
            PositionalForm::Asset(_) => AssetType::Asset,
            PositionalForm::Equity(_) => AssetType::Equity,
            PositionalForm::Future(_) => AssetType::Future,
        }
    }
}

impl Asset {
    /// Positional form of this asset.
    pub fn to_positional(&self) -> PositionalForm {
        self.into()
    }

    /// Rebuilds an asset from its positional form.
    pub fn from_positional(form: PositionalForm) -> Self {
        form.into()
    }

    /// Versioned positional form as a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses the JSON produced by [`Asset::to_json`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// KEYED FORM
// ============================================================================

fn timestamp_value(ts: Option<DateTime<Utc>>) -> Value {
    ts.map_or(Value::Null, |ts| {
        Value::String(ts.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    })
}

fn exchange_info_value(info: &ExchangeInfo) -> Value {
    let mut map = Map::new();
    map.insert("name".to_string(), Value::from(info.name()));
    map.insert(
        "canonical_name".to_string(),
        Value::from(info.canonical_name()),
    );
    map.insert("country_code".to_string(), Value::from(info.country_code()));
    Value::Object(map)
}

impl AssetInfo {
    /// Keyed form of the shared fields, including the informational
    /// `exchange` and `exchange_full` keys.
    pub fn to_dict(&self) -> AssetDict {
        let mut dict = Map::new();
        dict.insert("sid".to_string(), Value::from(self.sid));
        dict.insert("real_sid".to_string(), Value::from(self.real_sid.as_str()));
        dict.insert("symbol".to_string(), Value::from(self.symbol.as_str()));
        dict.insert(
            "asset_name".to_string(),
            Value::from(self.asset_name.as_str()),
        );
        dict.insert("start_date".to_string(), timestamp_value(self.start_date));
        dict.insert("end_date".to_string(), timestamp_value(self.end_date));
        dict.insert(
            "first_traded".to_string(),
            timestamp_value(self.first_traded),
        );
        dict.insert(
            "auto_close_date".to_string(),
            timestamp_value(self.auto_close_date),
        );
        dict.insert("exchange".to_string(), Value::from(self.exchange()));
        dict.insert(
            "exchange_full".to_string(),
            Value::from(self.exchange_full()),
        );
        dict.insert(
            "exchange_info".to_string(),
            exchange_info_value(&self.exchange_info),
        );
        dict.insert("currency".to_string(), Value::from(self.currency.as_str()));
        dict.insert("tick_size".to_string(), lossless_f64::to_value(self.tick_size));
        dict.insert(
            "multiplier".to_string(),
            lossless_f64::to_value(self.price_multiplier),
        );
        dict.insert(
            "price_magnifier".to_string(),
            lossless_f64::to_value(self.price_magnifier),
        );
        dict
    }
}

impl Future {
    /// Keyed form including the contract fields.
    pub fn to_dict(&self) -> AssetDict {
        let mut dict = self.info().to_dict();
        dict.insert(
            "root_symbol".to_string(),
            Value::from(self.root_symbol()),
        );
        dict.insert("notice_date".to_string(), timestamp_value(self.notice_date()));
        dict.insert(
            "expiration_date".to_string(),
            timestamp_value(self.expiration_date()),
        );
        dict.insert(
            "rollover_date".to_string(),
            timestamp_value(self.rollover_date()),
        );
        dict
    }

    /// Builds a future from a keyed form; see [`from_dict`].
    pub fn from_dict(dict: &AssetDict) -> Result<Self> {
        let params: NewFuture = parse_params(AssetType::Future, dict)?;
        Ok(Future::new(params))
    }
}

impl Asset {
    /// Keyed form of this asset.
    pub fn to_dict(&self) -> AssetDict {
        match self {
            Asset::Base(info) | Asset::Equity(info) => info.to_dict(),
            Asset::Future(future) => future.to_dict(),
        }
    }

    /// Builds an asset of `asset_type` from a keyed form; see [`from_dict`].
    pub fn from_dict(asset_type: AssetType, dict: &AssetDict) -> Result<Self> {
        from_dict(asset_type, dict)
    }
}

/// Keeps only the keys `asset_type` accepts and checks the mandatory ones.
fn filter_accepted(asset_type: AssetType, dict: &AssetDict) -> Result<AssetDict> {
    let accepted = asset_type.accepted_keys();
    let mut filtered = Map::new();
    for (key, value) in dict {
        if accepted.contains(&key.as_str()) {
            filtered.insert(key.clone(), value.clone());
        } else {
            trace!("Dropping key '{}' not accepted by {}", key, asset_type);
        }
    }

    if let Some(missing) = REQUIRED_KEYS
        .iter()
        .find(|key| !filtered.contains_key(**key))
    {
        return Err(ValidationError::MissingField(missing.to_string()).into());
    }

    Ok(filtered)
}

fn parse_params<T>(asset_type: AssetType, dict: &AssetDict) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let filtered = filter_accepted(asset_type, dict)?;
    serde_json::from_value(Value::Object(filtered)).map_err(|e| {
        ValidationError::InvalidInput(format!("invalid {} fields: {}", asset_type, e)).into()
    })
}

/// Builds an asset of `asset_type` from a keyed form.
///
/// Keys the variant does not accept (including the informational
/// `exchange`/`exchange_full`) are dropped. A missing mandatory key yields
/// [`ValidationError::MissingField`]; a value of the wrong type yields
/// [`ValidationError::InvalidInput`].
pub fn from_dict(asset_type: AssetType, dict: &AssetDict) -> Result<Asset> {
    match asset_type {
        AssetType::Asset => Ok(Asset::new(parse_params::<NewAsset>(asset_type, dict)?)),
        AssetType::Equity => Ok(Asset::equity(parse_params::<NewAsset>(asset_type, dict)?)),
        AssetType::Future => Ok(Asset::future(parse_params::<NewFuture>(asset_type, dict)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use chrono::TimeZone;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn cme() -> Arc<ExchangeInfo> {
        Arc::new(ExchangeInfo::new(
            "CHICAGO MERCANTILE EXCHANGE",
            Some("CMES".to_string()),
            "US",
        ))
    }

    fn crude() -> Asset {
        let mut params = NewFuture::new(
            NewAsset {
                symbol: "CLM24".to_string(),
                asset_name: "Crude Oil".to_string(),
                start_date: Some(date(2023, 6, 1)),
                multiplier: 1000.0,
                ..NewAsset::new(1001, "FUT-CL-202406", cme(), "USD")
            },
            "CL",
        );
        params.notice_date = Some(date(2024, 5, 20));
        params.expiration_date = Some(date(2024, 5, 21));
        Asset::future(params)
    }

    #[test]
    fn test_positional_json_layout() {
        let asset = Asset::equity(NewAsset {
            symbol: "AAPL".to_string(),
            ..NewAsset::new(24, "Q123", cme(), "USD")
        });
        let value = serde_json::to_value(&asset).unwrap();
        assert_eq!(value[0], json!(POSITIONAL_FORM_VERSION));
        let fields = value[1]["Equity"].as_array().unwrap();
        assert_eq!(fields.len(), 13);
        assert_eq!(fields[0], json!(24));
        assert_eq!(fields[1], json!("Q123"));
        assert_eq!(fields[2]["canonical_name"], json!("CMES"));
        assert_eq!(fields[3], json!("USD"));
        assert_eq!(fields[4], json!("AAPL"));
        assert_eq!(fields[10], json!(0.01));
    }

    #[test]
    fn test_future_positional_layout() {
        let value = serde_json::to_value(crude()).unwrap();
        let fields = value[1]["Future"].as_array().unwrap();
        assert_eq!(fields.len(), 17);
        assert_eq!(fields[5], json!("CL"));
        assert_eq!(fields[9], json!("2024-05-20T00:00:00Z"));
        assert_eq!(fields[11], json!("2024-05-20T00:00:00Z"));
        assert_eq!(fields[12], json!("2024-05-20T00:00:00Z"));
        assert_eq!(fields[15], json!(1000.0));
    }

    #[test]
    fn test_positional_passes_derived_dates_through() {
        let original = crude();
        let PositionalForm::Future(mut fields) = original.to_positional() else {
            panic!("expected future form");
        };
        // A stored rollover date that differs from the derivable one survives.
        fields.12 = Some(date(2024, 5, 1));
        let rebuilt = Asset::from_positional(PositionalForm::Future(fields));
        let future = rebuilt.as_future().unwrap();
        assert_eq!(future.rollover_date(), Some(date(2024, 5, 1)));
        assert_eq!(future.auto_close_date(), Some(date(2024, 5, 20)));
    }

    #[test]
    fn test_json_helpers() {
        let original = crude();
        let json = original.to_json().unwrap();
        let rebuilt = Asset::from_json(&json).unwrap();
        assert_eq!(rebuilt.to_positional(), original.to_positional());

        let err = Asset::from_json("{\"Option\":[]}").unwrap_err();
        assert!(matches!(err, Error::Serialization(_)));
    }

    #[test]
    fn test_unknown_layout_version_is_rejected() {
        let mut value = serde_json::to_value(crude()).unwrap();
        value[0] = json!(POSITIONAL_FORM_VERSION + 1);
        let err = Asset::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, Error::Serialization(ref msg) if msg.contains("version")));

        let stored = VersionedPositionalForm(POSITIONAL_FORM_VERSION + 1, crude().to_positional());
        assert!(Asset::try_from(stored).is_err());
    }

    fn non_finite_equity() -> Asset {
        Asset::equity(NewAsset {
            tick_size: f64::INFINITY,
            multiplier: f64::NEG_INFINITY,
            price_magnifier: f64::NAN,
            ..NewAsset::new(3, "Q3", cme(), "USD")
        })
    }

    #[test]
    fn test_non_finite_prices_in_dict() {
        let dict = non_finite_equity().to_dict();
        assert_eq!(dict["tick_size"], json!("inf"));
        assert_eq!(dict["multiplier"], json!("-inf"));
        assert_eq!(dict["price_magnifier"], json!("NaN"));

        let rebuilt = from_dict(AssetType::Equity, &dict).unwrap();
        assert_eq!(rebuilt.tick_size(), f64::INFINITY);
        assert_eq!(rebuilt.price_multiplier(), f64::NEG_INFINITY);
        assert!(rebuilt.price_magnifier().is_nan());
        assert_eq!(rebuilt.to_dict(), dict);
    }

    #[test]
    fn test_non_finite_prices_in_positional_json() {
        let original = non_finite_equity();
        let json = original.to_json().unwrap();
        assert!(json.contains("\"inf\",\"-inf\",\"NaN\""));
        let rebuilt = Asset::from_json(&json).unwrap();
        assert_eq!(rebuilt.tick_size(), f64::INFINITY);
        assert_eq!(rebuilt.price_multiplier(), f64::NEG_INFINITY);
        assert!(rebuilt.price_magnifier().is_nan());

        let mut contract = NewFuture::new(NewAsset::new(4, "F4", cme(), "USD"), "CL");
        contract.asset.tick_size = f64::NAN;
        let future = Asset::future(contract);
        let rebuilt = Asset::from_json(&future.to_json().unwrap()).unwrap();
        assert!(rebuilt.tick_size().is_nan());
    }

    #[test]
    fn test_float_fields_reject_junk_strings() {
        let mut dict = crude().to_dict();
        dict.insert("tick_size".to_string(), json!("a quarter"));
        let err = Future::from_dict(&dict).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_to_dict_keys() {
        let dict = crude().to_dict();
        for key in FUTURE_KEYS_WITH_INFO {
            assert!(dict.contains_key(*key), "missing key {}", key);
        }
        assert_eq!(dict["exchange"], json!("CMES"));
        assert_eq!(dict["exchange_full"], json!("CHICAGO MERCANTILE EXCHANGE"));
        assert_eq!(dict["multiplier"], json!(1000.0));
        assert_eq!(dict["first_traded"], Value::Null);
    }

    const FUTURE_KEYS_WITH_INFO: &[&str] = &[
        "sid",
        "real_sid",
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
        "exchange",
        "exchange_full",
        "exchange_info",
        "currency",
        "tick_size",
        "multiplier",
        "price_magnifier",
    ];

    #[test]
    fn test_equity_dict_has_no_contract_keys() {
        let asset = Asset::equity(NewAsset::new(1, "Q1", cme(), "USD"));
        let dict = asset.to_dict();
        assert!(!dict.contains_key("root_symbol"));
        assert!(!dict.contains_key("rollover_date"));
    }

    #[test]
    fn test_from_dict_ignores_unknown_keys() {
        let mut dict = crude().to_dict();
        dict.insert("not_a_field".to_string(), json!([1, 2, 3]));
        let asset = from_dict(AssetType::Future, &dict).unwrap();
        assert_eq!(asset.sid(), 1001);
        assert_eq!(asset.exchange(), "CMES");
    }

    #[test]
    fn test_from_dict_equity_drops_future_keys() {
        let dict = crude().to_dict();
        let asset = Asset::from_dict(AssetType::Equity, &dict).unwrap();
        assert!(asset.is_equity());
        assert_eq!(asset.symbol(), "CLM24");
        assert_eq!(asset.auto_close_date(), Some(date(2024, 5, 20)));
    }

    #[test]
    fn test_from_dict_minimal() {
        let dict = json!({
            "sid": 5,
            "real_sid": "Q5",
            "exchange_info": {"name": "NYSE", "country_code": "us"},
            "currency": "USD"
        });
        let asset = from_dict(AssetType::Asset, dict.as_object().unwrap()).unwrap();
        assert_eq!(asset.asset_type(), AssetType::Asset);
        assert_eq!(asset.exchange(), "NYSE");
        assert_eq!(asset.country_code(), "US");
        assert_eq!(asset.tick_size(), 0.01);
        assert_eq!(asset.price_multiplier(), 1.0);
        assert_eq!(asset.symbol(), "");
    }

    #[test]
    fn test_from_dict_missing_required() {
        let mut dict = crude().to_dict();
        dict.remove("currency");
        let err = Future::from_dict(&dict).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::MissingField(ref key)) if key == "currency"
        ));
    }

    #[test]
    fn test_from_dict_wrong_type() {
        let mut dict = crude().to_dict();
        dict.insert("sid".to_string(), json!("1001"));
        let err = Future::from_dict(&dict).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_from_dict_derives_for_future() {
        let dict = json!({
            "sid": 9,
            "real_sid": "F9",
            "exchange_info": {"name": "CME", "canonical_name": "CMES", "country_code": "US"},
            "currency": "USD",
            "root_symbol": "ES",
            "notice_date": "2024-06-01T00:00:00Z",
            "expiration_date": "2024-06-15T00:00:00Z"
        });
        let future = Future::from_dict(dict.as_object().unwrap()).unwrap();
        assert_eq!(future.auto_close_date(), Some(date(2024, 6, 1)));
        assert_eq!(future.rollover_date(), Some(date(2024, 6, 1)));
    }
}
