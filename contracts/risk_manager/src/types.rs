use soroban_sdk::{contracterror, contracttype, Address};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RiskError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    StrategyNotFound = 3,
    StrategyAlreadyAdded = 4,
    ZeroWeight = 5,
    LimitMismatch = 6,
    NotPendingGovernance = 7,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub governance: Address,
    pub pending_governance: Option<Address>,
    pub coverage_data_provider: Address,
}

/// Per-strategy risk accounting. A strategy is a cover product contract
/// admitted by governance; its weight apportions the provider's capital.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StrategyInfo {
    pub weight: u32,
    pub active_cover_limit: i128,
}

#[contracttype]
pub enum DataKey {
    Config,
    Strategy(Address),
    StrategyList,
    WeightSum,
    TotalActiveCoverLimit,
}
