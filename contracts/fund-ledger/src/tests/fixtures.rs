//! Test environment: the ledger, a scriptable custodian and Stellar assets.

use crate::{FundConfig, FundLedger, FundLedgerClient};
use shared::types::Amount;
use soroban_sdk::{
    contract, contractimpl, contracttype,
    testutils::{Address as _, Ledger},
    token::{StellarAssetClient, TokenClient},
    Address, Env,
};

/// One whole token with 7 decimals
pub const UNIT: Amount = 10_000_000;

#[contracttype]
#[derive(Clone)]
enum MockKey {
    Vested(Address),
    Reported(Address),
    Broken(Address),
}

/// Custodian double: holds real asset balances, releases whatever has vested,
/// and can be told to lie about the amount or to fail outright.
#[contract]
pub struct MockCustodian;

#[contractimpl]
impl MockCustodian {
    pub fn vest(env: Env, asset: Address, amount: i128) {
        let key = MockKey::Vested(asset);
        let vested: i128 = env.storage().instance().get(&key).unwrap_or(0);
        env.storage().instance().set(&key, &(vested + amount));
    }

    pub fn set_reported(env: Env, asset: Address, reported: i128) {
        env.storage()
            .instance()
            .set(&MockKey::Reported(asset), &reported);
    }

    pub fn set_broken(env: Env, asset: Address, broken: bool) {
        env.storage()
            .instance()
            .set(&MockKey::Broken(asset), &broken);
    }

    pub fn release(env: Env, asset: Address, to: Address) -> i128 {
        let broken: bool = env
            .storage()
            .instance()
            .get(&MockKey::Broken(asset.clone()))
            .unwrap_or(false);
        if broken {
            panic!("custodian unavailable");
        }

        let key = MockKey::Vested(asset.clone());
        let amount: i128 = env.storage().instance().get(&key).unwrap_or(0);
        if amount > 0 {
            TokenClient::new(&env, &asset).transfer(&env.current_contract_address(), &to, &amount);
            env.storage().instance().set(&key, &0i128);
        }

        env.storage()
            .instance()
            .get(&MockKey::Reported(asset))
            .unwrap_or(amount)
    }
}

// Separate module: `#[contractimpl]` emits module-level items per function
// name, so two contracts exposing `balance` cannot share a module.
mod wild {
    use soroban_sdk::{contract, contractimpl, Address, Env};

    /// Token whose reported balance swings between 0 and an amount no
    /// accumulator can absorb.
    #[contract]
    pub struct WildToken;

    #[contractimpl]
    impl WildToken {
        pub fn balance(env: Env, _id: Address) -> i128 {
            let calls: u32 = env.storage().instance().get(&0u32).unwrap_or(0);
            env.storage().instance().set(&0u32, &(calls + 1));
            if calls % 2 == 0 {
                0
            } else {
                i128::MAX / 2
            }
        }
    }
}
pub use wild::WildToken;

#[contracttype]
#[derive(Clone)]
enum HookKey {
    Balance(Address),
    Target,
    Attempts,
    Rejected,
}

#[contracttype]
#[derive(Clone)]
pub struct ClaimTarget {
    pub ledger: Address,
    pub holder: Address,
    pub record_id: u32,
}

/// Token that tries to claim again from inside every transfer once armed.
#[contract]
pub struct HookToken;

#[contractimpl]
impl HookToken {
    pub fn mint(env: Env, to: Address, amount: i128) {
        let balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .instance()
            .set(&HookKey::Balance(to), &(balance + amount));
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .instance()
            .get(&HookKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        let from_balance = Self::balance(env.clone(), from.clone());
        let to_balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .instance()
            .set(&HookKey::Balance(from), &(from_balance - amount));
        env.storage()
            .instance()
            .set(&HookKey::Balance(to), &(to_balance + amount));

        let target: Option<ClaimTarget> = env.storage().instance().get(&HookKey::Target);
        if let Some(target) = target {
            let attempts: u32 = env.storage().instance().get(&HookKey::Attempts).unwrap_or(0);
            env.storage()
                .instance()
                .set(&HookKey::Attempts, &(attempts + 1));

            let nested = FundLedgerClient::new(&env, &target.ledger).try_claim(
                &target.holder,
                &target.record_id,
                &env.current_contract_address(),
            );
            if nested.is_err() {
                let rejected: u32 = env.storage().instance().get(&HookKey::Rejected).unwrap_or(0);
                env.storage()
                    .instance()
                    .set(&HookKey::Rejected, &(rejected + 1));
            }
        }
    }

    pub fn arm(env: Env, target: ClaimTarget) {
        env.storage().instance().set(&HookKey::Target, &target);
    }

    pub fn attempts(env: Env) -> u32 {
        env.storage().instance().get(&HookKey::Attempts).unwrap_or(0)
    }

    pub fn rejected(env: Env) -> u32 {
        env.storage().instance().get(&HookKey::Rejected).unwrap_or(0)
    }
}

pub struct Fund {
    pub env: Env,
    pub client: FundLedgerClient<'static>,
    pub custodian: MockCustodianClient<'static>,
    pub admin: Address,
    pub fee_sink: Address,
    pub treasury: Address,
    pub deposit_token: Address,
}

pub struct FundParams {
    pub max_supply: u32,
    pub per_holder_cap: u32,
    pub fee_bps: u32,
    pub price_per_record: Amount,
}

impl Default for FundParams {
    fn default() -> Self {
        Self {
            max_supply: 1_000,
            per_holder_cap: 0,
            fee_bps: 100,
            price_per_record: 0,
        }
    }
}

pub fn setup() -> Fund {
    setup_with(FundParams::default())
}

pub fn setup_with(params: FundParams) -> Fund {
    let env = Env::default();
    env.mock_all_auths();
    env.budget().reset_unlimited();
    env.ledger().set_timestamp(1000);

    let admin = Address::generate(&env);
    let fee_sink = Address::generate(&env);
    let treasury = Address::generate(&env);

    let custodian_id = env.register_contract(None, MockCustodian);
    let custodian = MockCustodianClient::new(&env, &custodian_id);
    let deposit_token = create_asset(&env);

    let client = FundLedgerClient::new(&env, &env.register_contract(None, FundLedger));
    client.initialize(
        &admin,
        &FundConfig {
            max_supply: params.max_supply,
            per_holder_cap: params.per_holder_cap,
            fee_bps: params.fee_bps,
            fee_sink: fee_sink.clone(),
            custodian: custodian_id,
            deposit_token: deposit_token.clone(),
            price_per_record: params.price_per_record,
            treasury: treasury.clone(),
        },
    );

    Fund {
        env,
        client,
        custodian,
        admin,
        fee_sink,
        treasury,
        deposit_token,
    }
}

#[allow(deprecated)]
pub fn create_asset(env: &Env) -> Address {
    let issuer = Address::generate(env);
    env.register_stellar_asset_contract(issuer)
}

impl Fund {
    pub fn new_asset(&self) -> Address {
        create_asset(&self.env)
    }

    /// Funds the custodian with `amount` of `asset` and marks it vested.
    pub fn vest(&self, asset: &Address, amount: Amount) {
        StellarAssetClient::new(&self.env, asset).mint(&self.custodian.address, &amount);
        self.custodian.vest(asset, &amount);
    }

    /// Vests `amount` and pulls it into the ledger.
    pub fn inflow(&self, asset: &Address, amount: Amount) -> Amount {
        self.vest(asset, amount);
        self.client.pull(asset)
    }

    /// Mints `count` records to `holder`, in deposits of at most 20.
    pub fn mint_to(&self, holder: &Address, count: u32) {
        let mut left = count;
        while left > 0 {
            let batch = left.min(shared::constants::MAX_DEPOSIT_COUNT);
            self.client.deposit(holder, &batch);
            left -= batch;
        }
    }

    /// Mints `count` records to a fresh holder and returns that holder.
    pub fn new_holder_with(&self, count: u32) -> Address {
        let holder = Address::generate(&self.env);
        self.mint_to(&holder, count);
        holder
    }

    pub fn balance(&self, asset: &Address, id: &Address) -> Amount {
        TokenClient::new(&self.env, asset).balance(id)
    }

    pub fn wild_token(&self) -> Address {
        self.env.register_contract(None, WildToken)
    }

    pub fn hook_token(&self) -> HookTokenClient<'static> {
        HookTokenClient::new(&self.env, &self.env.register_contract(None, HookToken))
    }

    pub fn ledger_balance(&self, asset: &Address) -> Amount {
        self.balance(asset, &self.client.address)
    }
}
