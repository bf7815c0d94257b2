//! Pulls vested balances out of the external custodian.
//!
//! The custodian's reported figure is never used: the ledger reads its own
//! token balance around the release call and books the difference. Anything
//! that goes wrong for one asset is reported as an event and counted as a
//! failed pull, so one broken asset cannot block the others.

use shared::errors::Error;
use shared::events::{PULL_BATCH_DONE, PULL_FAILED};
use shared::types::{Amount, BatchResult};
use soroban_sdk::{contractclient, log, token::TokenClient, Address, Env};

use crate::batch::Window;
use crate::catalog;
use crate::ledger;
use crate::storage::{get_asset, get_custodian, get_supply};

/// Interface of the vesting custodian the fund pulls from.
#[contractclient(name = "CustodianClient")]
pub trait CustodianInterface {
    /// Releases the vested balance of `asset` to `to`. Returns the amount the
    /// custodian claims to have sent.
    fn release(env: Env, asset: Address, to: Address) -> i128;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PullOutcome {
    Received(Amount),
    Nothing,
    Failed,
}

impl PullOutcome {
    pub fn amount(&self) -> Amount {
        match self {
            PullOutcome::Received(amount) => *amount,
            _ => 0,
        }
    }
}

pub fn pull(env: &Env, asset: &Address) -> Result<PullOutcome, Error> {
    let custodian = get_custodian(env)?;
    let this = env.current_contract_address();
    let token_client = TokenClient::new(env, asset);

    let Some(before) = balance_of(&token_client, &this) else {
        return Ok(report_failure(env, asset));
    };

    let released = CustodianClient::new(env, &custodian).try_release(asset, &this);
    if !matches!(released, Ok(Ok(_))) {
        return Ok(report_failure(env, asset));
    }

    let Some(after) = balance_of(&token_client, &this) else {
        return Ok(report_failure(env, asset));
    };

    let Some(amount) = after.checked_sub(before) else {
        return Ok(report_failure(env, asset));
    };
    if amount <= 0 {
        return Ok(PullOutcome::Nothing);
    }

    // A balance the accumulator cannot absorb fails this asset alone, before
    // anything is written for it.
    let current = match get_asset(env, asset) {
        Ok(state) => state,
        Err(_) => catalog::fresh_state(asset, catalog::len(env)),
    };
    if ledger::accrue(&current, amount, get_supply(env)?.total_records).is_err() {
        return Ok(report_failure(env, asset));
    }

    if !catalog::contains(env, asset) {
        catalog::register(env, asset)?;
    }
    ledger::apply_inflow(env, asset, amount)?;

    Ok(PullOutcome::Received(amount))
}

/// Pulls every asset in a catalog window, each isolated from the others.
pub fn pull_batch(env: &Env, start: u32, count: u32) -> Result<BatchResult, Error> {
    let window = Window::checked(start, count, catalog::len(env))?;

    let mut successful: u32 = 0;
    let mut failed: u32 = 0;
    for asset in catalog::slice(env, window)?.iter() {
        match pull(env, &asset)? {
            PullOutcome::Failed => failed += 1,
            _ => successful += 1,
        }
    }

    env.events()
        .publish((PULL_BATCH_DONE,), (successful, failed));

    Ok(BatchResult {
        total: window.len(),
        successful,
        failed,
    })
}

fn balance_of(token_client: &TokenClient, id: &Address) -> Option<Amount> {
    match token_client.try_balance(id) {
        Ok(Ok(balance)) => Some(balance),
        _ => None,
    }
}

fn report_failure(env: &Env, asset: &Address) -> PullOutcome {
    log!(env, "custodian pull failed", asset.clone());
    env.events().publish((PULL_FAILED,), asset.clone());
    PullOutcome::Failed
}
