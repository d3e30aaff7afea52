//! Assets module - identity, variants, and serialized forms.

mod asset_array;
mod asset_identity;
mod asset_serialization;
mod assets_model;
mod future_model;
pub mod synthetic;


// Re-export the public interface
pub use asset_array::make_asset_array;
pub use asset_identity::{try_compare, AsIndex};
pub use asset_serialization::{
    from_dict, AssetDict, AssetFields, FutureFields, PositionalForm, VersionedPositionalForm,
};
pub use assets_model::{
    Asset, AssetInfo, AssetType, NewAsset, ASSET_KEYS, FUTURE_KEYS, REQUIRED_KEYS,
};
pub use future_model::{Future, NewFuture};
