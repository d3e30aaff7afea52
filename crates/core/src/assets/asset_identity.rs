//! Integer identity and cross-type comparison for assets.
//!
//! An asset's identity is its `sid`. Anything that can be viewed as an `i64`
//! index compares against an asset by that index; everything else is
//! incomparable.
//!
//! ```
//! use std::sync::Arc;
//! use tradesim_core::assets::{try_compare, Asset, NewAsset};
//! use tradesim_market_data::ExchangeInfo;
//!
//! let nyse = Arc::new(ExchangeInfo::new("NYSE", None, "US"));
//! let asset = Asset::equity(NewAsset::new(24, "FIBBG000B9XRY4", nyse, "USD"));
//!
//! assert!(asset == 24i64);
//! assert!(25u32 > asset);
//! assert!(asset != "AAPL");
//! assert_eq!(try_compare(&asset, "AAPL"), None);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::Arc;

use super::assets_model::{Asset, AssetInfo};
use super::future_model::Future;

/// A value that may be viewed as a 64-bit signed index.
pub trait AsIndex {
    /// The index, or `None` when the value has no integer view.
    fn as_index(&self) -> Option<i64>;
}

/// Compares two values by their integer index.
///
/// Returns `None` when either side fails to coerce. The comparison is a
/// direct relational one, so extreme sids cannot overflow.
pub fn try_compare<L, R>(x: &L, y: &R) -> Option<Ordering>
where
    L: AsIndex + ?Sized,
    R: AsIndex + ?Sized,
{
    let x = x.as_index()?;
    let y = y.as_index()?;
    Some(x.cmp(&y))
}

impl AsIndex for AssetInfo {
    fn as_index(&self) -> Option<i64> {
        Some(self.sid())
    }
}

impl AsIndex for Asset {
    fn as_index(&self) -> Option<i64> {
        Some(self.sid())
    }
}

impl AsIndex for Future {
    fn as_index(&self) -> Option<i64> {
        Some(self.sid())
    }
}

impl<T: AsIndex + ?Sized> AsIndex for &T {
    fn as_index(&self) -> Option<i64> {
        (**self).as_index()
    }
}

impl<T: AsIndex + ?Sized> AsIndex for Box<T> {
    fn as_index(&self) -> Option<i64> {
        (**self).as_index()
    }
}

impl<T: AsIndex + ?Sized> AsIndex for Rc<T> {
    fn as_index(&self) -> Option<i64> {
        (**self).as_index()
    }
}

impl<T: AsIndex + ?Sized> AsIndex for Arc<T> {
    fn as_index(&self) -> Option<i64> {
        (**self).as_index()
    }
}

macro_rules! impl_as_index_lossless {
    ($($t:ty),*) => {
        $(
            impl AsIndex for $t {
                fn as_index(&self) -> Option<i64> {
                    Some(i64::from(*self))
                }
            }
        )*
    };
}

macro_rules! impl_as_index_checked {
    ($($t:ty),*) => {
        $(
            impl AsIndex for $t {
                fn as_index(&self) -> Option<i64> {
                    i64::try_from(*self).ok()
                }
            }
        )*
    };
}

macro_rules! impl_as_index_none {
    ($($t:ty),*) => {
        $(
            impl AsIndex for $t {
                fn as_index(&self) -> Option<i64> {
                    None
                }
            }
        )*
    };
}

impl_as_index_lossless!(bool, i8, i16, i32, i64, u8, u16, u32);
impl_as_index_checked!(isize, usize, u64, i128, u128);
// Floats and text have no index view.
impl_as_index_none!(f32, f64, char, str, String);

// ── Identity traits ──────────────────────────────────────────────────────────

macro_rules! impl_identity {
    ($($t:ty),*) => {
        $(
            impl PartialEq for $t {
                fn eq(&self, other: &Self) -> bool {
                    self.sid() == other.sid()
                }
            }

            impl Eq for $t {}

            impl PartialOrd for $t {
                fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                    Some(self.cmp(other))
                }
            }

            impl Ord for $t {
                fn cmp(&self, other: &Self) -> Ordering {
                    self.sid().cmp(&other.sid())
                }
            }

            /// Feeds exactly the sid to the hasher, so an asset hashes as its sid.
            impl Hash for $t {
                fn hash<H: Hasher>(&self, state: &mut H) {
                    self.sid().hash(state);
                }
            }

            impl Borrow<i64> for $t {
                fn borrow(&self) -> &i64 {
                    &self.info().sid
                }
            }
        )*
    };
}

impl_identity!(Asset, Future);

/// Symmetric `==` and ordering between two types through [`try_compare`].
macro_rules! impl_cross_compare {
    ($lhs:ty => $($rhs:ty),*) => {
        $(
            impl PartialEq<$rhs> for $lhs {
                fn eq(&self, other: &$rhs) -> bool {
                    try_compare(self, other) == Some(Ordering::Equal)
                }
            }

            impl PartialEq<$lhs> for $rhs {
                fn eq(&self, other: &$lhs) -> bool {
                    try_compare(self, other) == Some(Ordering::Equal)
                }
            }

            impl PartialOrd<$rhs> for $lhs {
                fn partial_cmp(&self, other: &$rhs) -> Option<Ordering> {
                    try_compare(self, other)
                }
            }

            impl PartialOrd<$lhs> for $rhs {
                fn partial_cmp(&self, other: &$lhs) -> Option<Ordering> {
                    try_compare(self, other)
                }
            }
        )*
    };
}

impl_cross_compare!(Asset => Future);
impl_cross_compare!(
    Asset => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str, String
);
impl_cross_compare!(
    Future => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, str, String
);

/// `==` against string literals, which arrive as `&str` rather than `str`.
macro_rules! impl_str_ref_eq {
    ($($t:ty),*) => {
        $(
            impl<'a> PartialEq<&'a str> for $t {
                fn eq(&self, other: &&'a str) -> bool {
                    try_compare(self, *other) == Some(Ordering::Equal)
                }
            }

            impl<'a> PartialEq<$t> for &'a str {
                fn eq(&self, other: &$t) -> bool {
                    try_compare(*self, other) == Some(Ordering::Equal)
                }
            }
        )*
    };
}

impl_str_ref_eq!(Asset, Future);
