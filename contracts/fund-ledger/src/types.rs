use shared::types::Amount;
use soroban_sdk::{contracttype, Address};

/// Parameters supplied once at `initialize`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundConfig {
    pub max_supply: u32,
    pub per_holder_cap: u32, // 0 disables the cap
    pub fee_bps: u32,
    pub fee_sink: Address,
    pub custodian: Address,
    pub deposit_token: Address,
    pub price_per_record: Amount,
    pub treasury: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeConfig {
    pub fee_bps: u32,
    pub fee_sink: Address,
}

/// What a depositor pays per record and where it goes
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Pricing {
    pub deposit_token: Address,
    pub price_per_record: Amount,
    pub treasury: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SupplyState {
    pub total_records: u32,
    pub max_supply: u32,
    pub per_holder_cap: u32,
    pub deposit_window_open: bool,
    pub transfer_unlocked: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShareRecord {
    pub id: u32,
    pub holder: Address,
    pub created_at: u64,
}

/// Distribution state of one external asset
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetState {
    pub asset: Address,
    pub index: u32,
    pub cumulative_received: Amount,
    pub acc_per_share: i128, // scaled by PRECISION
    pub stranded: Amount,    // received while no record existed
    pub total_fees_paid: Amount,
    pub total_payouts_paid: Amount,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimReceipt {
    pub record_id: u32,
    pub asset: Address,
    pub gross: Amount,
    pub fee: Amount,
    pub payout: Amount,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingEntry {
    pub asset: Address,
    pub amount: Amount,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Frozen,
    Lock,
    Supply,
    Fee,
    Pricing,
    Custodian,
    Minted(Address),       // holder -> records ever minted to them
    Record(u32),           // record id -> ShareRecord
    AssetCount,            // catalog length
    AssetAt(u32),          // catalog index -> asset address
    Asset(Address),        // asset address -> AssetState
    Debt(u32, Address),    // record id, asset -> accumulator snapshot
    Claimed(u32, Address), // record id, asset -> gross amount claimed
}
