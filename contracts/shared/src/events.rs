use soroban_sdk::{symbol_short, Symbol};

// Lifecycle / admin
pub const FUND_INITIALIZED: Symbol = symbol_short!("init");
pub const DEPOSIT_WINDOW_CHANGED: Symbol = symbol_short!("dep_win");
pub const TRANSFER_UNLOCKED: Symbol = symbol_short!("xfer_unlk");
pub const FEE_CONFIG_SET: Symbol = symbol_short!("fee_cfg");
pub const PRICING_SET: Symbol = symbol_short!("pricing");
pub const FUND_FROZEN: Symbol = symbol_short!("frozen");

// Share registry
pub const RECORD_CREATED: Symbol = symbol_short!("rec_new");
pub const RECORD_TRANSFERRED: Symbol = symbol_short!("rec_xfer");

// Asset catalog / custodian
pub const ASSET_REGISTERED: Symbol = symbol_short!("asset_reg");
pub const INFLOW_APPLIED: Symbol = symbol_short!("inflow");
pub const INFLOW_STRANDED: Symbol = symbol_short!("stranded");
pub const PULL_FAILED: Symbol = symbol_short!("pull_fail");
pub const PULL_BATCH_DONE: Symbol = symbol_short!("pull_done");

// Distribution
pub const CLAIMED: Symbol = symbol_short!("claimed");
