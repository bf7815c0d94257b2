//! Ownership records: minting against the supply caps, the transfer lock, and
//! the deposit window.

use shared::constants::MAX_DEPOSIT_COUNT;
use shared::errors::Error;
use shared::events::{
    DEPOSIT_WINDOW_CHANGED, RECORD_CREATED, RECORD_TRANSFERRED, TRANSFER_UNLOCKED,
};
use soroban_sdk::{token::TokenClient, Address, Env, Vec};

use crate::access::has_admin_rights;
use crate::ledger;
use crate::storage::{
    get_minted, get_pricing, get_record, get_supply, set_minted, set_record, set_supply,
};
use crate::types::{ShareRecord, SupplyState};

/// Mints `count` sequential records to `depositor` and collects the price.
///
/// Returns the ids of the new records.
pub fn deposit(env: &Env, depositor: &Address, count: u32) -> Result<Vec<u32>, Error> {
    let mut supply = get_supply(env)?;

    if !supply.deposit_window_open {
        return Err(Error::DepositWindowClosed);
    }
    if count == 0 || count > MAX_DEPOSIT_COUNT {
        return Err(Error::InvalidCount);
    }

    let new_total = supply
        .total_records
        .checked_add(count)
        .ok_or(Error::Overflow)?;
    if new_total > supply.max_supply {
        return Err(Error::SupplyExceeded);
    }

    let minted = get_minted(env, depositor)
        .checked_add(count)
        .ok_or(Error::Overflow)?;
    if supply.per_holder_cap > 0 && minted > supply.per_holder_cap {
        return Err(Error::HolderCapExceeded);
    }

    let pricing = get_pricing(env)?;
    let cost = pricing
        .price_per_record
        .checked_mul(count as i128)
        .ok_or(Error::Overflow)?;

    let now = env.ledger().timestamp();
    let mut ids = Vec::new(env);
    for id in supply.total_records..new_total {
        let record = ShareRecord {
            id,
            holder: depositor.clone(),
            created_at: now,
        };
        set_record(env, &record);
        ledger::on_record_created(env, id)?;

        env.events()
            .publish((RECORD_CREATED,), (id, depositor.clone()));
        ids.push_back(id);
    }

    supply.total_records = new_total;
    set_minted(env, depositor, minted);

    if supply.total_records == supply.max_supply {
        unlock_transfers(env, &mut supply, false);
    }
    set_supply(env, &supply);

    if cost > 0 {
        let token_client = TokenClient::new(env, &pricing.deposit_token);
        token_client.transfer(depositor, &pricing.treasury, &cost);
    }

    Ok(ids)
}

/// Moves a record to `new_holder`. The caller must already hold it.
///
/// Accumulators and debts are untouched: whatever the record has accrued and
/// not yet claimed moves with it.
pub fn transfer(
    env: &Env,
    caller: &Address,
    record_id: u32,
    new_holder: &Address,
) -> Result<(), Error> {
    let supply = get_supply(env)?;
    if !supply.transfer_unlocked && !has_admin_rights(env, caller)? {
        return Err(Error::TransferLocked);
    }

    let mut record = get_record(env, record_id)?;
    let previous = record.holder.clone();
    record.holder = new_holder.clone();
    set_record(env, &record);

    env.events().publish(
        (RECORD_TRANSFERRED,),
        (record_id, previous, new_holder.clone()),
    );

    Ok(())
}

pub fn set_deposit_window(env: &Env, open: bool) -> Result<(), Error> {
    let mut supply = get_supply(env)?;
    supply.deposit_window_open = open;
    set_supply(env, &supply);

    env.events().publish((DEPOSIT_WINDOW_CHANGED,), open);
    Ok(())
}

/// One-way; a second call is a no-op.
pub fn override_unlock_transfer(env: &Env) -> Result<(), Error> {
    let mut supply = get_supply(env)?;
    if supply.transfer_unlocked {
        return Ok(());
    }
    unlock_transfers(env, &mut supply, true);
    set_supply(env, &supply);
    Ok(())
}

fn unlock_transfers(env: &Env, supply: &mut SupplyState, by_override: bool) {
    if supply.transfer_unlocked {
        return;
    }
    supply.transfer_unlocked = true;
    env.events().publish((TRANSFER_UNLOCKED,), by_override);
}
