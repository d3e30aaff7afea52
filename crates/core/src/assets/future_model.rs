//! Futures contract model.

use std::fmt;
use std::ops::Deref;

use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

use super::assets_model::{AssetInfo, AssetType, NewAsset};

/// Input model for creating a new futures contract.
///
/// Shared fields are flattened, so the serialized shape is a single flat
/// object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFuture {
    #[serde(flatten)]
    pub asset: NewAsset,

    #[serde(default)]
    pub root_symbol: String,
    #[serde(default)]
    pub notice_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expiration_date: Option<DateTime<Utc>>,
    /// Defaults to the (possibly derived) auto-close date.
    #[serde(default)]
    pub rollover_date: Option<DateTime<Utc>>,
}

impl NewFuture {
    pub fn new(asset: NewAsset, root_symbol: impl Into<String>) -> Self {
        Self {
            asset,
            root_symbol: root_symbol.into(),
            notice_date: None,
            expiration_date: None,
            rollover_date: None,
        }
    }
}

/// A futures contract.
///
/// `auto_close_date` and `rollover_date` are resolved once in [`Future::new`]
/// and stored; they are never recomputed.
#[derive(Debug, Clone)]
pub struct Future {
    info: AssetInfo,
    root_symbol: String,
    notice_date: Option<DateTime<Utc>>,
    expiration_date: Option<DateTime<Utc>>,
    rollover_date: Option<DateTime<Utc>>,
}

/// Earlier of two optional dates, or whichever is present.
fn earliest(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Option<DateTime<Utc>> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

impl Future {
    /// Creates a future.
    ///
    /// Without an explicit `auto_close_date` the contract closes on the
    /// earlier of its notice and expiration dates. Without an explicit
    /// `rollover_date` it rolls on the auto-close date.
    pub fn new(params: NewFuture) -> Self {
        let NewFuture {
            mut asset,
            root_symbol,
            notice_date,
            expiration_date,
            rollover_date,
        } = params;

        if asset.auto_close_date.is_none() {
            asset.auto_close_date = earliest(notice_date, expiration_date);
            if let Some(date) = asset.auto_close_date {
                debug!("Derived auto_close_date {} for future sid {}", date, asset.sid);
            }
        }

        let rollover_date = rollover_date.or(asset.auto_close_date);

        Self {
            info: asset.into(),
            root_symbol,
            notice_date,
            expiration_date,
            rollover_date,
        }
    }

    /// Assembles a future from already-resolved fields, skipping derivation.
    pub(crate) fn from_parts(
        info: AssetInfo,
        root_symbol: String,
        notice_date: Option<DateTime<Utc>>,
        expiration_date: Option<DateTime<Utc>>,
        rollover_date: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            info,
            root_symbol,
            notice_date,
            expiration_date,
            rollover_date,
        }
    }

    pub fn info(&self) -> &AssetInfo {
        &self.info
    }

    pub fn root_symbol(&self) -> &str {
        &self.root_symbol
    }

    pub fn notice_date(&self) -> Option<DateTime<Utc>> {
        self.notice_date
    }

    pub fn expiration_date(&self) -> Option<DateTime<Utc>> {
        self.expiration_date
    }

    pub fn rollover_date(&self) -> Option<DateTime<Utc>> {
        self.rollover_date
    }

    /// Constructor parameters that rebuild this contract.
    pub fn to_new_future(&self) -> NewFuture {
        NewFuture {
            asset: self.info.to_new_asset(),
            root_symbol: self.root_symbol.clone(),
            notice_date: self.notice_date,
            expiration_date: self.expiration_date,
            rollover_date: self.rollover_date,
        }
    }
}

impl Deref for Future {
    type Target = AssetInfo;

    fn deref(&self) -> &AssetInfo {
        &self.info
    }
}

impl fmt::Display for Future {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.info.fmt_repr(f, AssetType::Future.type_name())
    }
}
