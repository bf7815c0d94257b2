use shared::errors::Error;
use shared::types::Amount;
use soroban_sdk::{Address, Env};

use crate::types::{AssetState, DataKey, FeeConfig, Pricing, ShareRecord, SupplyState};

// ==================== Instance: configuration ====================

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInit)
}

pub fn is_frozen(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Frozen)
        .unwrap_or(false)
}

pub fn set_frozen(env: &Env) {
    env.storage().instance().set(&DataKey::Frozen, &true);
}

pub fn set_supply(env: &Env, supply: &SupplyState) {
    env.storage().instance().set(&DataKey::Supply, supply);
}

pub fn get_supply(env: &Env) -> Result<SupplyState, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Supply)
        .ok_or(Error::NotInit)
}

pub fn set_fee_config(env: &Env, fee: &FeeConfig) {
    env.storage().instance().set(&DataKey::Fee, fee);
}

pub fn get_fee_config(env: &Env) -> Result<FeeConfig, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Fee)
        .ok_or(Error::NotInit)
}

pub fn set_pricing(env: &Env, pricing: &Pricing) {
    env.storage().instance().set(&DataKey::Pricing, pricing);
}

pub fn get_pricing(env: &Env) -> Result<Pricing, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Pricing)
        .ok_or(Error::NotInit)
}

pub fn set_custodian(env: &Env, custodian: &Address) {
    env.storage().instance().set(&DataKey::Custodian, custodian);
}

pub fn get_custodian(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Custodian)
        .ok_or(Error::NotInit)
}

// ==================== Reentrancy lock ====================

pub fn is_locked(env: &Env) -> bool {
    env.storage().instance().get(&DataKey::Lock).unwrap_or(false)
}

pub fn set_locked(env: &Env, locked: bool) {
    if locked {
        env.storage().instance().set(&DataKey::Lock, &true);
    } else {
        env.storage().instance().remove(&DataKey::Lock);
    }
}

// ==================== Share records ====================

pub fn set_record(env: &Env, record: &ShareRecord) {
    env.storage()
        .persistent()
        .set(&DataKey::Record(record.id), record);
}

pub fn get_record(env: &Env, record_id: u32) -> Result<ShareRecord, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Record(record_id))
        .ok_or(Error::RecordNotFound)
}

pub fn get_minted(env: &Env, holder: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::Minted(holder.clone()))
        .unwrap_or(0)
}

pub fn set_minted(env: &Env, holder: &Address, count: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::Minted(holder.clone()), &count);
}

// ==================== Asset catalog ====================

pub fn get_asset_count(env: &Env) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::AssetCount)
        .unwrap_or(0)
}

pub fn set_asset_count(env: &Env, count: u32) {
    env.storage().persistent().set(&DataKey::AssetCount, &count);
}

pub fn set_asset_at(env: &Env, index: u32, asset: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::AssetAt(index), asset);
}

pub fn get_asset_at(env: &Env, index: u32) -> Result<Address, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::AssetAt(index))
        .ok_or(Error::InvalidRange)
}

pub fn has_asset(env: &Env, asset: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Asset(asset.clone()))
}

pub fn set_asset(env: &Env, state: &AssetState) {
    env.storage()
        .persistent()
        .set(&DataKey::Asset(state.asset.clone()), state);
}

pub fn get_asset(env: &Env, asset: &Address) -> Result<AssetState, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Asset(asset.clone()))
        .ok_or(Error::AssetNotRegistered)
}

// ==================== Debt / claim history ====================

/// Missing entries read as zero: the record predates the asset.
pub fn get_debt(env: &Env, record_id: u32, asset: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Debt(record_id, asset.clone()))
        .unwrap_or(0)
}

pub fn set_debt(env: &Env, record_id: u32, asset: &Address, debt: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::Debt(record_id, asset.clone()), &debt);
}

pub fn get_claimed(env: &Env, record_id: u32, asset: &Address) -> Amount {
    env.storage()
        .persistent()
        .get(&DataKey::Claimed(record_id, asset.clone()))
        .unwrap_or(0)
}

pub fn set_claimed(env: &Env, record_id: u32, asset: &Address, amount: Amount) {
    env.storage()
        .persistent()
        .set(&DataKey::Claimed(record_id, asset.clone()), &amount);
}
