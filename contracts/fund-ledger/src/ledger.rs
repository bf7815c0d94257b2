//! Per-asset accumulators and per-record debt snapshots.
//!
//! For every asset the ledger keeps `acc_per_share`, the total distributed per
//! share scaled by `PRECISION`. A record's entitlement to an asset is the
//! difference between that accumulator and the record's debt snapshot, floored
//! to whole units. Claiming moves the snapshot up to the accumulator.

use shared::errors::Error;
use shared::events::{CLAIMED, INFLOW_APPLIED, INFLOW_STRANDED};
use shared::math::{accrual_per_share, pending_units, split_fee};
use shared::types::Amount;
use soroban_sdk::{log, token::TokenClient, Address, Env, Vec};

use crate::batch::Window;
use crate::catalog;
use crate::storage::{
    get_asset, get_asset_at, get_claimed, get_debt, get_fee_config, get_record, get_supply,
    set_asset, set_claimed, set_debt,
};
use crate::types::{AssetState, ClaimReceipt, PendingEntry};

/// Writes the debt baseline of a freshly minted record for every known asset.
///
/// Must run in the minting call, before the record id is handed out, so the
/// record can never claim distributions made before it existed.
pub fn on_record_created(env: &Env, record_id: u32) -> Result<(), Error> {
    for index in 0..catalog::len(env) {
        let asset = get_asset_at(env, index)?;
        let state = get_asset(env, &asset)?;
        // Absent debt already reads as zero.
        if state.acc_per_share > 0 {
            set_debt(env, record_id, &asset, state.acc_per_share);
        }
    }
    Ok(())
}

/// Result of folding one inflow into an asset's state
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Accrual {
    Distributed(AssetState),
    Stranded(AssetState),
}

/// Folds `amount` into `state` without touching storage.
///
/// With no records the amount is kept as stranded value and the accumulator
/// does not move.
pub fn accrue(state: &AssetState, amount: Amount, total_records: u32) -> Result<Accrual, Error> {
    let mut next = state.clone();
    next.cumulative_received = next
        .cumulative_received
        .checked_add(amount)
        .ok_or(Error::Overflow)?;

    if total_records == 0 {
        next.stranded = next.stranded.checked_add(amount).ok_or(Error::Overflow)?;
        return Ok(Accrual::Stranded(next));
    }

    let increase = accrual_per_share(amount, total_records)?;
    next.acc_per_share = next
        .acc_per_share
        .checked_add(increase)
        .ok_or(Error::Overflow)?;
    Ok(Accrual::Distributed(next))
}

/// Books a measured inflow of `amount` units of a registered asset.
pub fn apply_inflow(env: &Env, asset: &Address, amount: Amount) -> Result<AssetState, Error> {
    let state = get_asset(env, asset)?;
    if amount <= 0 {
        return Ok(state);
    }

    match accrue(&state, amount, get_supply(env)?.total_records)? {
        Accrual::Stranded(state) => {
            set_asset(env, &state);
            log!(env, "inflow stranded, no records exist", asset.clone(), amount);
            env.events()
                .publish((INFLOW_STRANDED,), (asset.clone(), amount));
            Ok(state)
        }
        Accrual::Distributed(state) => {
            set_asset(env, &state);
            env.events().publish(
                (INFLOW_APPLIED,),
                (asset.clone(), amount, state.acc_per_share),
            );
            Ok(state)
        }
    }
}

/// Pays out whatever `record_id` has accrued in `asset`.
///
/// Returns `None` when nothing is due. The debt snapshot and every counter are
/// written before the token transfers go out.
pub fn settle(
    env: &Env,
    record_id: u32,
    holder: &Address,
    asset: &Address,
) -> Result<Option<ClaimReceipt>, Error> {
    let mut state = get_asset(env, asset)?;
    let debt = get_debt(env, record_id, asset);
    let gross = pending_units(state.acc_per_share, debt);
    if gross == 0 {
        return Ok(None);
    }

    let fee_config = get_fee_config(env)?;
    let (fee, payout) = split_fee(gross, fee_config.fee_bps)?;

    set_debt(env, record_id, asset, state.acc_per_share);

    let claimed = get_claimed(env, record_id, asset)
        .checked_add(gross)
        .ok_or(Error::Overflow)?;
    set_claimed(env, record_id, asset, claimed);

    state.total_fees_paid = state
        .total_fees_paid
        .checked_add(fee)
        .ok_or(Error::Overflow)?;
    state.total_payouts_paid = state
        .total_payouts_paid
        .checked_add(payout)
        .ok_or(Error::Overflow)?;
    set_asset(env, &state);

    // External calls last
    let token_client = TokenClient::new(env, asset);
    let this = env.current_contract_address();
    if fee > 0 {
        token_client.transfer(&this, &fee_config.fee_sink, &fee);
    }
    if payout > 0 {
        token_client.transfer(&this, holder, &payout);
    }

    env.events()
        .publish((CLAIMED,), (record_id, asset.clone(), payout, fee));

    Ok(Some(ClaimReceipt {
        record_id,
        asset: asset.clone(),
        gross,
        fee,
        payout,
    }))
}

/// Claims one asset; a zero balance is an error here, unlike in batches.
pub fn claim(
    env: &Env,
    record_id: u32,
    holder: &Address,
    asset: &Address,
) -> Result<ClaimReceipt, Error> {
    settle(env, record_id, holder, asset)?.ok_or(Error::NothingToClaim)
}

/// Claims every asset with a positive balance inside the catalog window.
pub fn claim_batch(
    env: &Env,
    record_id: u32,
    holder: &Address,
    start: u32,
    count: u32,
) -> Result<Vec<ClaimReceipt>, Error> {
    let window = Window::checked(start, count, catalog::len(env))?;

    let mut receipts = Vec::new(env);
    for asset in catalog::slice(env, window)?.iter() {
        if let Some(receipt) = settle(env, record_id, holder, &asset)? {
            receipts.push_back(receipt);
        }
    }
    Ok(receipts)
}

// ==================== Views ====================

pub fn pending(env: &Env, record_id: u32, asset: &Address) -> Result<Amount, Error> {
    get_record(env, record_id)?;
    let state = get_asset(env, asset)?;
    Ok(pending_units(
        state.acc_per_share,
        get_debt(env, record_id, asset),
    ))
}

/// Pending amounts for a catalog window, clipped at the end of the catalog.
pub fn pending_batch(
    env: &Env,
    record_id: u32,
    start: u32,
    count: u32,
) -> Result<Vec<PendingEntry>, Error> {
    get_record(env, record_id)?;
    let window = Window::clipped(start, count, catalog::len(env));

    let mut entries = Vec::new(env);
    for asset in catalog::slice(env, window)?.iter() {
        let state = get_asset(env, &asset)?;
        let amount = pending_units(state.acc_per_share, get_debt(env, record_id, &asset));
        entries.push_back(PendingEntry { asset, amount });
    }
    Ok(entries)
}

pub fn claim_history(env: &Env, record_id: u32, asset: &Address) -> Result<Amount, Error> {
    get_record(env, record_id)?;
    get_asset(env, asset)?;
    Ok(get_claimed(env, record_id, asset))
}
