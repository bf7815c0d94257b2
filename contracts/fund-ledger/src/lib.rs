#![no_std]

use shared::{
    constants::{MAX_BATCH_SIZE, MAX_FEE_BPS},
    errors::Error,
    events::{FEE_CONFIG_SET, FUND_FROZEN, FUND_INITIALIZED, PRICING_SET},
    types::{Amount, BatchResult},
};
use soroban_sdk::{contract, contractimpl, contractmeta, Address, Env, Vec};

mod access;
mod batch;
mod catalog;
mod custodian;
mod guard;
mod ledger;
mod registry;
mod storage;
mod types;

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod tests;

use access::{authorize, Capability};
use batch::Window;
use guard::non_reentrant;
use storage::*;

pub use custodian::{CustodianClient, CustodianInterface};
pub use types::{
    AssetState, ClaimReceipt, FeeConfig, FundConfig, PendingEntry, Pricing, ShareRecord,
    SupplyState,
};

contractmeta!(key = "name", val = "Seed Fund Distribution Ledger");

#[contract]
pub struct FundLedger;

#[contractimpl]
impl FundLedger {
    /// Initialize the fund with its admin and configuration
    ///
    /// # Arguments
    /// * `admin` - Fund operator
    /// * `config` - Supply caps, fee split, custodian and deposit pricing
    ///
    /// # Errors
    /// * `AlreadyInit` - Fund was already initialized
    /// * `InvalidConfig` - Zero supply or negative price
    /// * `InvalidFee` - Fee above `MAX_FEE_BPS`
    pub fn initialize(env: Env, admin: Address, config: FundConfig) -> Result<(), Error> {
        if has_admin(&env) {
            return Err(Error::AlreadyInit);
        }
        admin.require_auth();

        if config.max_supply == 0 || config.price_per_record < 0 {
            return Err(Error::InvalidConfig);
        }
        if config.fee_bps > MAX_FEE_BPS {
            return Err(Error::InvalidFee);
        }

        set_admin(&env, &admin);
        set_custodian(&env, &config.custodian);
        set_fee_config(
            &env,
            &FeeConfig {
                fee_bps: config.fee_bps,
                fee_sink: config.fee_sink.clone(),
            },
        );
        set_pricing(
            &env,
            &Pricing {
                deposit_token: config.deposit_token.clone(),
                price_per_record: config.price_per_record,
                treasury: config.treasury.clone(),
            },
        );
        set_supply(
            &env,
            &SupplyState {
                total_records: 0,
                max_supply: config.max_supply,
                per_holder_cap: config.per_holder_cap,
                deposit_window_open: true,
                transfer_unlocked: false,
            },
        );

        env.events()
            .publish((FUND_INITIALIZED,), (admin, config.max_supply));

        Ok(())
    }

    // ==================== Share Registry ====================

    /// Buy `count` new records. Capability: public.
    ///
    /// # Errors
    /// * `DepositWindowClosed` - Deposits are currently closed
    /// * `InvalidCount` - `count` is zero or above `MAX_DEPOSIT_COUNT`
    /// * `SupplyExceeded` - Would mint past `max_supply`
    /// * `HolderCapExceeded` - Would mint past the depositor's cap
    pub fn deposit(env: Env, depositor: Address, count: u32) -> Result<Vec<u32>, Error> {
        authorize(&env, &depositor, Capability::Public)?;
        non_reentrant(&env, || registry::deposit(&env, &depositor, count))
    }

    /// Hand a record to someone else. Capability: holder.
    ///
    /// Only possible once transfers are unlocked, unless the holder is the
    /// (unfrozen) admin.
    pub fn transfer(
        env: Env,
        holder: Address,
        record_id: u32,
        new_holder: Address,
    ) -> Result<(), Error> {
        authorize(&env, &holder, Capability::Holder(record_id))?;
        registry::transfer(&env, &holder, record_id, &new_holder)
    }

    /// Open or close the deposit window. Capability: admin.
    pub fn set_deposit_window(env: Env, admin: Address, open: bool) -> Result<(), Error> {
        authorize(&env, &admin, Capability::Admin)?;
        registry::set_deposit_window(&env, open)
    }

    /// Unlock transfers before the fund sells out. Capability: admin.
    pub fn override_unlock_transfer(env: Env, admin: Address) -> Result<(), Error> {
        authorize(&env, &admin, Capability::Admin)?;
        registry::override_unlock_transfer(&env)
    }

    // ==================== Asset Catalog ====================

    /// Register an asset ahead of its first inflow. Capability: admin.
    ///
    /// # Errors
    /// * `AssetAlreadyRegistered` - Asset is already in the catalog
    pub fn register_asset(env: Env, admin: Address, asset: Address) -> Result<u32, Error> {
        authorize(&env, &admin, Capability::Admin)?;
        Ok(catalog::register(&env, &asset)?.index)
    }

    // ==================== Custodian Bridge ====================

    /// Pull the vested balance of `asset` from the custodian. Permissionless.
    ///
    /// Returns the amount actually received; a failing custodian yields 0 and
    /// a `pull_fail` event rather than an error.
    pub fn pull(env: Env, asset: Address) -> Result<Amount, Error> {
        non_reentrant(&env, || Ok(custodian::pull(&env, &asset)?.amount()))
    }

    /// Pull every asset in the catalog window `[start, start + count)`.
    /// Permissionless.
    ///
    /// # Errors
    /// * `InvalidCount` - `count` is zero
    /// * `BatchTooLarge` - `count` is above `MAX_BATCH_SIZE`
    /// * `InvalidRange` - `start` is past the end of the catalog
    pub fn pull_batch(env: Env, start: u32, count: u32) -> Result<BatchResult, Error> {
        non_reentrant(&env, || custodian::pull_batch(&env, start, count))
    }

    // ==================== Distribution ====================

    /// Claim what `record_id` has accrued in `asset`. Capability: holder.
    ///
    /// # Errors
    /// * `NotHolder` - Caller does not hold the record
    /// * `AssetNotRegistered` - Asset is not in the catalog
    /// * `NothingToClaim` - No whole unit is due
    pub fn claim(
        env: Env,
        holder: Address,
        record_id: u32,
        asset: Address,
    ) -> Result<ClaimReceipt, Error> {
        authorize(&env, &holder, Capability::Holder(record_id))?;
        non_reentrant(&env, || ledger::claim(&env, record_id, &holder, &asset))
    }

    /// Claim every asset with a positive balance in the catalog window
    /// `[start, start + count)`. Capability: holder.
    ///
    /// Assets with nothing due are skipped silently.
    pub fn claim_batch(
        env: Env,
        holder: Address,
        record_id: u32,
        start: u32,
        count: u32,
    ) -> Result<Vec<ClaimReceipt>, Error> {
        authorize(&env, &holder, Capability::Holder(record_id))?;
        non_reentrant(&env, || {
            ledger::claim_batch(&env, record_id, &holder, start, count)
        })
    }

    /// Whole units of `asset` claimable by `record_id`
    pub fn pending(env: Env, record_id: u32, asset: Address) -> Result<Amount, Error> {
        ledger::pending(&env, record_id, &asset)
    }

    /// Pending amounts across a catalog window; truncated at the catalog end
    pub fn pending_batch(
        env: Env,
        record_id: u32,
        start: u32,
        count: u32,
    ) -> Result<Vec<PendingEntry>, Error> {
        ledger::pending_batch(&env, record_id, start, count)
    }

    /// Gross (pre-fee) amount of `asset` ever claimed by `record_id`
    pub fn claim_history(env: Env, record_id: u32, asset: Address) -> Result<Amount, Error> {
        ledger::claim_history(&env, record_id, &asset)
    }

    // ==================== Administration ====================

    /// Change the protocol fee. Capability: admin.
    pub fn set_fee_config(
        env: Env,
        admin: Address,
        fee_bps: u32,
        fee_sink: Address,
    ) -> Result<(), Error> {
        authorize(&env, &admin, Capability::Admin)?;
        if fee_bps > MAX_FEE_BPS {
            return Err(Error::InvalidFee);
        }

        set_fee_config(
            &env,
            &FeeConfig {
                fee_bps,
                fee_sink: fee_sink.clone(),
            },
        );
        env.events().publish((FEE_CONFIG_SET,), (fee_bps, fee_sink));

        Ok(())
    }

    /// Change what a record costs and where deposits go. Capability: admin.
    pub fn set_pricing(env: Env, admin: Address, pricing: Pricing) -> Result<(), Error> {
        authorize(&env, &admin, Capability::Admin)?;
        if pricing.price_per_record < 0 {
            return Err(Error::InvalidConfig);
        }

        set_pricing(&env, &pricing);
        env.events().publish(
            (PRICING_SET,),
            (pricing.deposit_token, pricing.price_per_record),
        );

        Ok(())
    }

    /// Permanently give up every admin capability. Capability: admin.
    pub fn freeze(env: Env, admin: Address) -> Result<(), Error> {
        authorize(&env, &admin, Capability::Admin)?;
        set_frozen(&env);
        env.events().publish((FUND_FROZEN,), admin);
        Ok(())
    }

    // ==================== Views ====================

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        get_admin(&env)
    }

    pub fn is_frozen(env: Env) -> bool {
        is_frozen(&env)
    }

    pub fn supply(env: Env) -> Result<SupplyState, Error> {
        get_supply(&env)
    }

    pub fn get_fee_config(env: Env) -> Result<FeeConfig, Error> {
        get_fee_config(&env)
    }

    pub fn get_pricing(env: Env) -> Result<Pricing, Error> {
        get_pricing(&env)
    }

    pub fn custodian(env: Env) -> Result<Address, Error> {
        get_custodian(&env)
    }

    /// Current configuration, reassembled from its stored parts
    pub fn get_config(env: Env) -> Result<FundConfig, Error> {
        let supply = get_supply(&env)?;
        let fee = get_fee_config(&env)?;
        let pricing = get_pricing(&env)?;
        Ok(FundConfig {
            max_supply: supply.max_supply,
            per_holder_cap: supply.per_holder_cap,
            fee_bps: fee.fee_bps,
            fee_sink: fee.fee_sink,
            custodian: get_custodian(&env)?,
            deposit_token: pricing.deposit_token,
            price_per_record: pricing.price_per_record,
            treasury: pricing.treasury,
        })
    }

    pub fn get_record(env: Env, record_id: u32) -> Result<ShareRecord, Error> {
        get_record(&env, record_id)
    }

    /// Number of records ever minted to `holder`, transfers notwithstanding
    pub fn minted_by(env: Env, holder: Address) -> u32 {
        get_minted(&env, &holder)
    }

    pub fn get_asset(env: Env, asset: Address) -> Result<AssetState, Error> {
        get_asset(&env, &asset)
    }

    pub fn is_registered(env: Env, asset: Address) -> bool {
        catalog::contains(&env, &asset)
    }

    pub fn asset_count(env: Env) -> u32 {
        catalog::len(&env)
    }

    pub fn asset_at(env: Env, index: u32) -> Result<Address, Error> {
        get_asset_at(&env, index)
    }

    /// Catalog page of at most `MAX_BATCH_SIZE` assets; empty past the end
    pub fn assets_page(env: Env, start: u32, count: u32) -> Result<Vec<Address>, Error> {
        catalog::slice(&env, Window::clipped(start, count, catalog::len(&env)))
    }

    pub fn max_batch_size(_env: Env) -> u32 {
        MAX_BATCH_SIZE
    }
}
