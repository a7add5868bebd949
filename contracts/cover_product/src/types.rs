use soroban_sdk::{contracttype, Address, BytesN};

#[contracttype]
pub enum DataKey {
    Config,                 // ProductConfig
    Policy(u64),            // Policy by id
    PolicyOf(Address),      // owner -> policy id, bound for life
    Account(Address),       // Account ledger per policyholder
    ReferralKey(Address),   // ed25519 signing key a holder registered
    ActiveCoverLimit,       // i128 sum of active policies' cover limits
    PolicyCount,            // u64, ids minted sequentially from 1
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PolicyStatus {
    Active = 1,
    Inactive = 2,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct ProductConfig {
    pub governance: Address,
    pub pending_governance: Option<Address>,
    pub settlement_token: Address,      // Token deposits and premiums settle in
    pub premium_pool: Address,          // Receives charged premiums
    pub premium_collector: Address,     // Role allowed to batch-charge
    pub cover_promotion_admin: Address, // Role allowed to grant reward points
    pub risk_manager: Address,
    pub paused: bool,
    pub governance_policy_control: bool, // Governance may manage any holder's policy
    pub max_rate_num: u32,              // Premium rate ceiling, per second
    pub max_rate_den: u32,
    pub charge_cycle: u64,              // Billing period in seconds
    pub cooldown_period: u64,           // Wait before the withdrawal floor lifts
    pub max_charge_batch: u32,          // Holders per charge_premiums call
    pub referral_enabled: bool,
    pub referral_reward: i128,          // Reward points for referrer and referee
    pub referral_threshold: i128,       // Premiums a referee must have paid
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct Policy {
    pub policy_id: u64,
    pub owner: Address,
    pub cover_limit: i128,
    pub status: PolicyStatus,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct Account {
    pub balance: i128,
    pub reward_points: i128,            // Non-withdrawable, premium offset only
    pub premium_paid: i128,
    pub cooldown_start: u64,            // 0 = not cooling down
    pub pre_deactivate_cover_limit: i128, // Keeps the floor honest during cooldown
    pub referral_used: bool,
}

/// A referral code: the referrer's address plus their ed25519 signature
/// over this contract's referral payload. Anyone holding the code can
/// present it; the referee is whoever redeems it.
#[contracttype]
#[derive(Clone, Debug)]
pub struct ReferralCode {
    pub referrer: Address,
    pub signature: BytesN<64>,
}
