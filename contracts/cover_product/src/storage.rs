use soroban_sdk::{Address, BytesN, Env};

use crate::types::{Account, DataKey, Policy, ProductConfig};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> ProductConfig {
    env.storage().instance().get(&DataKey::Config).unwrap()
}

pub fn set_config(env: &Env, config: &ProductConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_policy(env: &Env, policy_id: u64) -> Option<Policy> {
    env.storage().persistent().get(&DataKey::Policy(policy_id))
}

pub fn set_policy(env: &Env, policy: &Policy) {
    env.storage()
        .persistent()
        .set(&DataKey::Policy(policy.policy_id), policy);
}

pub fn policy_id_of(env: &Env, owner: &Address) -> Option<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::PolicyOf(owner.clone()))
}

pub fn set_policy_id(env: &Env, owner: &Address, policy_id: u64) {
    env.storage()
        .persistent()
        .set(&DataKey::PolicyOf(owner.clone()), &policy_id);
}

pub fn get_account(env: &Env, owner: &Address) -> Account {
    env.storage()
        .persistent()
        .get(&DataKey::Account(owner.clone()))
        .unwrap_or(Account {
            balance: 0,
            reward_points: 0,
            premium_paid: 0,
            cooldown_start: 0,
            pre_deactivate_cover_limit: 0,
            referral_used: false,
        })
}

pub fn set_account(env: &Env, owner: &Address, account: &Account) {
    env.storage()
        .persistent()
        .set(&DataKey::Account(owner.clone()), account);
}

pub fn get_active_cover_limit(env: &Env) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::ActiveCoverLimit)
        .unwrap_or(0)
}

pub fn set_active_cover_limit(env: &Env, limit: i128) {
    env.storage()
        .persistent()
        .set(&DataKey::ActiveCoverLimit, &limit);
}

pub fn get_policy_count(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::PolicyCount)
        .unwrap_or(0)
}

pub fn set_policy_count(env: &Env, count: u64) {
    env.storage().persistent().set(&DataKey::PolicyCount, &count);
}

pub fn get_referral_key(env: &Env, owner: &Address) -> Option<BytesN<32>> {
    env.storage()
        .persistent()
        .get(&DataKey::ReferralKey(owner.clone()))
}

pub fn set_referral_key(env: &Env, owner: &Address, key: &BytesN<32>) {
    env.storage()
        .persistent()
        .set(&DataKey::ReferralKey(owner.clone()), key);
}
