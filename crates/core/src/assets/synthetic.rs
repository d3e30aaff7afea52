//! Builders for synthetic asset universes used in tests and simulations.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Months, TimeZone, Utc};

use tradesim_market_data::ExchangeInfo;

use super::assets_model::{Asset, NewAsset};
use super::future_model::NewFuture;
use crate::constants::CME_MONTH_CODES;
use crate::errors::{Result, ValidationError};

const DEFAULT_CURRENCY: &str = "USD";
const DEFAULT_FUTURE_MULTIPLIER: f64 = 500.0;

/// Symbol for the `index`-th generated asset: `A`..`Z`, then `AA`, `AB`, ...
pub fn letter_symbol(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}

fn offset(base: DateTime<Utc>, step: Duration, times: usize) -> Result<DateTime<Utc>> {
    let times = i32::try_from(times)
        .map_err(|_| ValidationError::InvalidInput(format!("period count {} too large", times)))?;
    step.checked_mul(times)
        .and_then(|delta| base.checked_add_signed(delta))
        .ok_or_else(|| {
            ValidationError::InvalidInput(format!("date offset from {} out of range", base)).into()
        })
}

fn check_len(field: &str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(ValidationError::InvalidInput(format!(
            "expected {} {}, got {}",
            expected, field, actual
        ))
        .into());
    }
    Ok(())
}

/// Equities alive for the whole of `[start_date, end_date]`.
///
/// Symbols default to `A`, `B`, ..., names to `"<symbol> INC."` and
/// currencies to USD. Each `real_sid` is the sid in decimal.
pub fn make_simple_equity_info(
    sids: &[i64],
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
    symbols: Option<&[&str]>,
    names: Option<&[&str]>,
    currencies: Option<&[&str]>,
    exchange_info: &Arc<ExchangeInfo>,
) -> Result<Vec<Asset>> {
    let symbols: Vec<String> = match symbols {
        Some(symbols) => {
            check_len("symbols", symbols.len(), sids.len())?;
            symbols.iter().map(|s| s.to_string()).collect()
        }
        None => (0..sids.len()).map(letter_symbol).collect(),
    };
    let names: Vec<String> = match names {
        Some(names) => {
            check_len("names", names.len(), sids.len())?;
            names.iter().map(|s| s.to_string()).collect()
        }
        None => symbols.iter().map(|s| format!("{} INC.", s)).collect(),
    };
    if let Some(currencies) = currencies {
        check_len("currencies", currencies.len(), sids.len())?;
    }

    Ok(sids
        .iter()
        .enumerate()
        .map(|(i, &sid)| {
            let currency = currencies.map_or(DEFAULT_CURRENCY, |c| c[i]);
            Asset::equity(NewAsset {
                symbol: symbols[i].clone(),
                asset_name: names[i].clone(),
                start_date: Some(start_date),
                end_date: Some(end_date),
                ..NewAsset::new(sid, sid.to_string(), Arc::clone(exchange_info), currency)
            })
        })
        .collect())
}

/// Equities from several countries alive for the whole of
/// `[start_date, end_date]`.
///
/// Countries are visited in the given order. The `i`-th sid of a country is
/// named `<country>-<i>` (symbol and asset name alike) and listed on that
/// country's shared exchange descriptor. A country without an exchange is
/// rejected.
pub fn make_simple_multi_country_equity_info(
    countries_to_sids: &[(&str, &[i64])],
    countries_to_exchanges: &HashMap<String, Arc<ExchangeInfo>>,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> Result<Vec<Asset>> {
    let mut assets = Vec::new();
    for &(country, sids) in countries_to_sids {
        let exchange_info = countries_to_exchanges.get(country).ok_or_else(|| {
            ValidationError::InvalidInput(format!("no exchange for country '{}'", country))
        })?;
        for (i, &sid) in sids.iter().enumerate() {
            let symbol = format!("{}-{}", country, i);
            assets.push(Asset::equity(NewAsset {
                symbol: symbol.clone(),
                asset_name: symbol,
                start_date: Some(start_date),
                end_date: Some(end_date),
                ..NewAsset::new(
                    sid,
                    sid.to_string(),
                    Arc::clone(exchange_info),
                    DEFAULT_CURRENCY,
                )
            }));
        }
    }
    Ok(assets)
}

/// Equities that rotate in and out of existence.
///
/// A new asset starts every `periods_between_starts` periods of `frequency`
/// and lives for `asset_lifetime` periods. Sids count up from zero and the
/// symbol doubles as the `real_sid`.
pub fn make_rotating_equity_info(
    num_assets: usize,
    first_start: DateTime<Utc>,
    frequency: Duration,
    periods_between_starts: usize,
    asset_lifetime: usize,
    exchange_info: &Arc<ExchangeInfo>,
) -> Result<Vec<Asset>> {
    let lifetime = offset(first_start, frequency, asset_lifetime)? - first_start;
    (0..num_assets)
        .map(|i| -> Result<Asset> {
            let start = offset(first_start, frequency, periods_between_starts * i)?;
            let end = start.checked_add_signed(lifetime).ok_or_else(|| {
                ValidationError::InvalidInput(format!("end date for asset {} out of range", i))
            })?;
            let symbol = letter_symbol(i);
            Ok(Asset::equity(NewAsset {
                symbol: symbol.clone(),
                start_date: Some(start),
                end_date: Some(end),
                ..NewAsset::new(
                    i as i64,
                    symbol,
                    Arc::clone(exchange_info),
                    DEFAULT_CURRENCY,
                )
            }))
        })
        .collect()
}

/// Equities sharing one start date with cascading end dates.
///
/// The first asset ends at `first_end`, each following one
/// `periods_between_ends` periods later. With `auto_close_delta` set, each
/// asset auto-closes that long after its end date.
pub fn make_jagged_equity_info(
    num_assets: usize,
    start_date: DateTime<Utc>,
    first_end: DateTime<Utc>,
    frequency: Duration,
    periods_between_ends: usize,
    auto_close_delta: Option<Duration>,
    exchange_info: &Arc<ExchangeInfo>,
) -> Result<Vec<Asset>> {
    (0..num_assets)
        .map(|i| -> Result<Asset> {
            let end = offset(first_end, frequency, periods_between_ends * i)?;
            let auto_close_date = match auto_close_delta {
                Some(delta) => Some(end.checked_add_signed(delta).ok_or_else(|| {
                    ValidationError::InvalidInput(format!(
                        "auto-close date for asset {} out of range",
                        i
                    ))
                })?),
                None => None,
            };
            Ok(Asset::equity(NewAsset {
                symbol: letter_symbol(i),
                start_date: Some(start_date),
                end_date: Some(end),
                auto_close_date,
                ..NewAsset::new(
                    i as i64,
                    i.to_string(),
                    Arc::clone(exchange_info),
                    DEFAULT_CURRENCY,
                )
            }))
        })
        .collect()
}

/// Shape of a generated futures chain.
#[derive(Debug, Clone)]
pub struct FutureChainParams {
    pub first_sid: i64,
    pub root_symbols: Vec<String>,
    pub years: Vec<i32>,
    /// `(code, month)` pairs; contracts are generated in month order.
    pub month_codes: Vec<(char, u32)>,
    pub multiplier: f64,
    pub exchange_info: Arc<ExchangeInfo>,
}

impl FutureChainParams {
    /// Chain over every CME month code with a multiplier of 500.
    pub fn new<S: Into<String>>(
        first_sid: i64,
        root_symbols: impl IntoIterator<Item = S>,
        years: impl IntoIterator<Item = i32>,
        exchange_info: Arc<ExchangeInfo>,
    ) -> Self {
        Self {
            first_sid,
            root_symbols: root_symbols.into_iter().map(Into::into).collect(),
            years: years.into_iter().collect(),
            month_codes: CME_MONTH_CODES.to_vec(),
            multiplier: DEFAULT_FUTURE_MULTIPLIER,
            exchange_info,
        }
    }
}

/// One futures contract per (root symbol, year, month code).
///
/// Sids are assigned consecutively from `first_sid` in root, year, month
/// order. Symbols read `<ROOT><CODE><YY>`, e.g. `CLF14`. The date functions
/// receive the first instant of the contract month; returning `None` leaves
/// that date unset.
pub fn make_future_info<N, E, S>(
    params: &FutureChainParams,
    notice_date_fn: N,
    expiration_date_fn: E,
    start_date_fn: S,
) -> Result<Vec<Asset>>
where
    N: Fn(DateTime<Utc>) -> Option<DateTime<Utc>>,
    E: Fn(DateTime<Utc>) -> Option<DateTime<Utc>>,
    S: Fn(DateTime<Utc>) -> Option<DateTime<Utc>>,
{
    let mut month_codes = params.month_codes.clone();
    month_codes.sort_by_key(|&(_, month)| month);

    let mut suffixes = Vec::with_capacity(params.years.len() * month_codes.len());
    for &year in &params.years {
        for &(code, month) in &month_codes {
            let month_begin = Utc
                .with_ymd_and_hms(year, month, 1, 0, 0, 0)
                .single()
                .ok_or_else(|| {
                    ValidationError::InvalidInput(format!(
                        "invalid contract month {} for {}",
                        month, year
                    ))
                })?;
            suffixes.push((format!("{}{:02}", code, year.rem_euclid(100)), month_begin));
        }
    }

    let mut contracts = Vec::with_capacity(params.root_symbols.len() * suffixes.len());
    let mut offset: i64 = 0;
    for root in &params.root_symbols {
        for (suffix, month_begin) in &suffixes {
            let sid = params.first_sid.checked_add(offset).ok_or_else(|| {
                ValidationError::InvalidInput(format!(
                    "sid {} + {} overflows for contract {}{}",
                    params.first_sid, offset, root, suffix
                ))
            })?;
            let mut contract = NewFuture::new(
                NewAsset {
                    symbol: format!("{}{}", root, suffix),
                    start_date: start_date_fn(*month_begin),
                    multiplier: params.multiplier,
                    ..NewAsset::new(
                        sid,
                        sid.to_string(),
                        Arc::clone(&params.exchange_info),
                        DEFAULT_CURRENCY,
                    )
                },
                root.as_str(),
            );
            contract.notice_date = notice_date_fn(*month_begin);
            contract.expiration_date = expiration_date_fn(*month_begin);
            contracts.push(Asset::future(contract));
            offset += 1;
        }
    }
    Ok(contracts)
}

/// Futures with the notice and expiration pattern of physical commodities.
///
/// Notice falls on the 20th two months before the contract month,
/// expiration on the 20th of the prior month, and trading starts 365 days
/// before the contract month.
pub fn make_commodity_future_info(params: &FutureChainParams) -> Result<Vec<Asset>> {
    let nineteen_days = Duration::days(19);
    let one_year = Duration::days(365);
    make_future_info(
        params,
        |dt| {
            dt.checked_sub_months(Months::new(2))
                .map(|d| d + nineteen_days)
        },
        |dt| {
            dt.checked_sub_months(Months::new(1))
                .map(|d| d + nineteen_days)
        },
        |dt| dt.checked_sub_signed(one_year),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn test_exchange() -> Arc<ExchangeInfo> {
        Arc::new(ExchangeInfo::new("TEST", None, "??"))
    }

    #[test]
    fn test_letter_symbol() {
        assert_eq!(letter_symbol(0), "A");
        assert_eq!(letter_symbol(25), "Z");
        assert_eq!(letter_symbol(26), "AA");
        assert_eq!(letter_symbol(27), "AB");
        assert_eq!(letter_symbol(701), "ZZ");
        assert_eq!(letter_symbol(702), "AAA");
    }

    #[test]
    fn test_simple_equity_defaults() {
        let assets = make_simple_equity_info(
            &[10, 20],
            date(2014, 1, 2),
            date(2014, 12, 31),
            None,
            None,
            None,
            &test_exchange(),
        )
        .unwrap();
        assert_eq!(assets.len(), 2);
        assert_eq!(assets[1].sid(), 20);
        assert_eq!(assets[1].real_sid(), "20");
        assert_eq!(assets[1].symbol(), "B");
        assert_eq!(assets[1].asset_name(), "B INC.");
        assert_eq!(assets[0].currency(), "USD");
        assert_eq!(assets[0].end_date(), Some(date(2014, 12, 31)));
        assert!(assets.iter().all(|a| a.is_equity()));
    }

    #[test]
    fn test_simple_equity_explicit_columns() {
        let assets = make_simple_equity_info(
            &[1],
            date(2014, 1, 2),
            date(2014, 12, 31),
            Some(&["AAPL"]),
            Some(&["Apple"]),
            Some(&["CAD"]),
            &test_exchange(),
        )
        .unwrap();
        assert_eq!(assets[0].to_string(), "Equity(1 [AAPL])");
        assert_eq!(assets[0].asset_name(), "Apple");
        assert_eq!(assets[0].currency(), "CAD");
    }

    #[test]
    fn test_simple_equity_length_mismatch() {
        let result = make_simple_equity_info(
            &[1, 2],
            date(2014, 1, 2),
            date(2014, 12, 31),
            Some(&["AAPL"]),
            None,
            None,
            &test_exchange(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_multi_country_equity() {
        let nyse = Arc::new(ExchangeInfo::new("NYSE", None, "US"));
        let tsx = Arc::new(ExchangeInfo::new("TSX", None, "CA"));
        let exchanges = HashMap::from([
            ("US".to_string(), Arc::clone(&nyse)),
            ("CA".to_string(), Arc::clone(&tsx)),
        ]);
        let us_sids: &[i64] = &[1, 2];
        let ca_sids: &[i64] = &[10];
        let assets = make_simple_multi_country_equity_info(
            &[("US", us_sids), ("CA", ca_sids)],
            &exchanges,
            date(2014, 1, 2),
            date(2014, 12, 31),
        )
        .unwrap();

        let symbols: Vec<&str> = assets.iter().map(|a| a.symbol()).collect();
        assert_eq!(symbols, vec!["US-0", "US-1", "CA-0"]);
        assert_eq!(assets[1].asset_name(), "US-1");
        assert_eq!(assets[2].sid(), 10);
        assert_eq!(assets[2].country_code(), "CA");
        assert!(Arc::ptr_eq(assets[0].exchange_info(), &nyse));
        assert!(Arc::ptr_eq(assets[1].exchange_info(), &nyse));
        assert!(Arc::ptr_eq(assets[2].exchange_info(), &tsx));
        assert_eq!(assets[0].end_date(), Some(date(2014, 12, 31)));
    }

    #[test]
    fn test_multi_country_requires_exchange() {
        let jp_sids: &[i64] = &[1];
        let result = make_simple_multi_country_equity_info(
            &[("JP", jp_sids)],
            &HashMap::new(),
            date(2014, 1, 2),
            date(2014, 12, 31),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rotating_equity() {
        let assets = make_rotating_equity_info(
            3,
            date(2015, 1, 1),
            Duration::days(1),
            2,
            5,
            &test_exchange(),
        )
        .unwrap();
        assert_eq!(assets[2].sid(), 2);
        assert_eq!(assets[2].real_sid(), "C");
        assert_eq!(assets[2].start_date(), Some(date(2015, 1, 5)));
        assert_eq!(assets[2].end_date(), Some(date(2015, 1, 10)));
        assert_eq!(assets[0].end_date(), Some(date(2015, 1, 6)));
    }

    #[test]
    fn test_jagged_equity() {
        let assets = make_jagged_equity_info(
            3,
            date(2015, 1, 1),
            date(2015, 2, 1),
            Duration::days(1),
            10,
            Some(Duration::days(3)),
            &test_exchange(),
        )
        .unwrap();
        assert!(assets
            .iter()
            .all(|a| a.start_date() == Some(date(2015, 1, 1))));
        assert_eq!(assets[1].real_sid(), "1");
        assert_eq!(assets[1].end_date(), Some(date(2015, 2, 11)));
        assert_eq!(assets[1].auto_close_date(), Some(date(2015, 2, 14)));

        let no_close = make_jagged_equity_info(
            1,
            date(2015, 1, 1),
            date(2015, 2, 1),
            Duration::days(1),
            10,
            None,
            &test_exchange(),
        )
        .unwrap();
        assert_eq!(no_close[0].auto_close_date(), None);
    }

    #[test]
    fn test_future_chain_order_and_symbols() {
        let mut params = FutureChainParams::new(100, ["CL", "FV"], [2014, 2015], test_exchange());
        params.month_codes = vec![('Z', 12), ('H', 3)];
        let contracts = make_future_info(&params, |_| None, Some, |_| None).unwrap();

        let symbols: Vec<&str> = contracts.iter().map(|c| c.symbol()).collect();
        assert_eq!(
            symbols,
            vec!["CLH14", "CLZ14", "CLH15", "CLZ15", "FVH14", "FVZ14", "FVH15", "FVZ15"]
        );
        assert_eq!(contracts[0].sid(), 100);
        assert_eq!(contracts[7].sid(), 107);
        assert_eq!(contracts[7].real_sid(), "107");
        let future = contracts[4].as_future().unwrap();
        assert_eq!(future.root_symbol(), "FV");
        assert_eq!(future.price_multiplier(), 500.0);
        assert_eq!(future.expiration_date(), Some(date(2014, 3, 1)));
        assert_eq!(future.auto_close_date(), Some(date(2014, 3, 1)));
        assert_eq!(future.start_date(), None);
    }

    #[test]
    fn test_commodity_future_dates() {
        let mut params = FutureChainParams::new(0, ["CL"], [2014], test_exchange());
        params.month_codes = vec![('F', 1), ('M', 6)];
        let contracts = make_commodity_future_info(&params).unwrap();

        let jan = contracts[0].as_future().unwrap();
        assert_eq!(jan.symbol(), "CLF14");
        assert_eq!(jan.notice_date(), Some(date(2013, 11, 20)));
        assert_eq!(jan.expiration_date(), Some(date(2013, 12, 20)));
        assert_eq!(jan.start_date(), Some(date(2013, 1, 1)));
        assert_eq!(jan.auto_close_date(), Some(date(2013, 11, 20)));
        assert_eq!(jan.rollover_date(), Some(date(2013, 11, 20)));

        let jun = contracts[1].as_future().unwrap();
        assert_eq!(jun.notice_date(), Some(date(2014, 4, 20)));
        assert_eq!(jun.expiration_date(), Some(date(2014, 5, 20)));
    }

    #[test]
    fn test_future_sids_stop_at_i64_max() {
        let mut params = FutureChainParams::new(i64::MAX - 1, ["CL"], [2014], test_exchange());
        params.month_codes = vec![('F', 1), ('G', 2)];
        let contracts = make_commodity_future_info(&params).unwrap();
        assert_eq!(contracts[1].sid(), i64::MAX);

        let params = FutureChainParams::new(i64::MAX, ["CL"], [2014], test_exchange());
        let err = make_commodity_future_info(&params).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::InvalidInput(ref msg)) if msg.contains("CLG14")
        ));
    }

    #[test]
    fn test_invalid_month_code() {
        let mut params = FutureChainParams::new(0, ["CL"], [2014], test_exchange());
        params.month_codes = vec![('?', 13)];
        assert!(make_commodity_future_info(&params).is_err());
    }
}
