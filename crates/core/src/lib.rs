//! Tradesim Core - Asset identity and metadata model.
//!
//! This crate defines the tradable-instrument model used by the simulator:
//! integer identity with cross-type comparison, equity and futures variants,
//! session liveness, and the positional and keyed serialized forms.
//! Exchange calendars live behind the `tradesim-market-data` boundary.

pub mod assets;
pub mod constants;
pub mod errors;

// Re-export common types from the asset module
pub use assets::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
