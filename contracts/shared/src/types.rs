use soroban_sdk::contracttype;

pub type Amount = i128;

/// Outcome summary of a batch operation whose items fail independently
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BatchResult {
    pub total: u32,
    pub successful: u32,
    pub failed: u32,
}
