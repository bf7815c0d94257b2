use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInit = 1,
    AlreadyInit = 2,

    // Validation errors
    InvalidCount = 10,
    InvalidRange = 11,
    BatchTooLarge = 12,
    InvalidFee = 13,
    InvalidConfig = 14,
    Overflow = 15,

    // Authorization errors
    Unauthorized = 20,
    NotHolder = 21,
    Frozen = 22,

    // Supply / claim state errors
    DepositWindowClosed = 30,
    SupplyExceeded = 31,
    HolderCapExceeded = 32,
    TransferLocked = 33,
    NothingToClaim = 34,
    AssetNotRegistered = 35,
    AssetAlreadyRegistered = 36,
    RecordNotFound = 37,
    Reentrant = 38,
}

/// Coarse grouping of [`Error`] codes for off-chain tooling.
///
/// `State` errors may succeed later once the ledger moves on (the window
/// reopens, a new inflow arrives, the fund sells out). `Validation` and
/// `Authorization` errors will fail again for the same inputs.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorCategory {
    Lifecycle,
    Validation,
    Authorization,
    State,
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match *self as u32 {
            0..=9 => ErrorCategory::Lifecycle,
            10..=19 => ErrorCategory::Validation,
            20..=29 => ErrorCategory::Authorization,
            _ => ErrorCategory::State,
        }
    }

    /// True when retrying the same call later can succeed.
    pub fn is_retryable(&self) -> bool {
        self.category() == ErrorCategory::State
    }
}
