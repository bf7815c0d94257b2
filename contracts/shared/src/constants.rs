/// Fixed-point scale of the per-share accumulators.
pub const PRECISION: i128 = 1_000_000_000_000;

/// Basis points denominator (100%)
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Upper bound on the protocol fee (10%)
pub const MAX_FEE_BPS: u32 = 1_000;

/// Largest window of the asset catalog a single call may walk
pub const MAX_BATCH_SIZE: u32 = 25;

/// Largest number of records a single deposit may mint
pub const MAX_DEPOSIT_COUNT: u32 = 20;
