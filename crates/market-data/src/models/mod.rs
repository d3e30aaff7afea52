//! Market data models
//!
//! - `exchange_info` - Exchange descriptor shared by assets (ExchangeInfo)

mod exchange_info;

pub use exchange_info::ExchangeInfo;
