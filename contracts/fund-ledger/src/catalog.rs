//! Append-only catalog of every asset the fund has received.
//!
//! Assets are stored twice: by insertion index (`AssetAt`) for windowed
//! iteration and by address (`Asset`) for membership and state. Nothing is
//! ever removed, so indices stay stable.

use shared::errors::Error;
use shared::events::ASSET_REGISTERED;
use soroban_sdk::{Address, Env, Vec};

use crate::batch::Window;
use crate::storage::{
    get_asset_at, get_asset_count, has_asset, set_asset, set_asset_at, set_asset_count,
};
use crate::types::AssetState;

/// Appends `asset` with a zero accumulator.
///
/// Records that already exist get no debt entries written: an absent entry
/// reads as zero, which equals the accumulator at registration. That holds
/// only because registration always starts the accumulator at zero.
pub fn register(env: &Env, asset: &Address) -> Result<AssetState, Error> {
    if has_asset(env, asset) {
        return Err(Error::AssetAlreadyRegistered);
    }

    let index = get_asset_count(env);
    let next = index.checked_add(1).ok_or(Error::Overflow)?;

    let state = fresh_state(asset, index);
    set_asset(env, &state);
    set_asset_at(env, index, asset);
    set_asset_count(env, next);

    env.events()
        .publish((ASSET_REGISTERED,), (asset.clone(), index));

    Ok(state)
}

/// State of an asset at the moment it enters the catalog.
pub fn fresh_state(asset: &Address, index: u32) -> AssetState {
    AssetState {
        asset: asset.clone(),
        index,
        cumulative_received: 0,
        acc_per_share: 0,
        stranded: 0,
        total_fees_paid: 0,
        total_payouts_paid: 0,
    }
}

pub fn len(env: &Env) -> u32 {
    get_asset_count(env)
}

pub fn contains(env: &Env, asset: &Address) -> bool {
    has_asset(env, asset)
}

/// Asset addresses inside `window`, in catalog order.
pub fn slice(env: &Env, window: Window) -> Result<Vec<Address>, Error> {
    let mut assets = Vec::new(env);
    for index in window.indices() {
        assets.push_back(get_asset_at(env, index)?);
    }
    Ok(assets)
}
