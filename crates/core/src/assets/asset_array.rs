use std::sync::Arc;

use super::assets_model::Asset;

/// Builds a sequence of `len` slots that all reference `asset`.
///
/// Every slot is the same shared instance; no asset is copied.
pub fn make_asset_array(len: usize, asset: &Arc<Asset>) -> Vec<Arc<Asset>> {
    vec![Arc::clone(asset); len]
}
