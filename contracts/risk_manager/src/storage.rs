use crate::types::{Config, DataKey, RiskError, StrategyInfo};
use soroban_sdk::{Address, Env, Vec};

pub struct Storage;

impl Storage {
    pub fn has_config(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Config)
    }

    pub fn set_config(env: &Env, config: &Config) {
        env.storage().instance().set(&DataKey::Config, config);
    }

    pub fn get_config(env: &Env) -> Result<Config, RiskError> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(RiskError::NotInitialized)
    }

    pub fn get_strategy(env: &Env, strategy: &Address) -> Option<StrategyInfo> {
        env.storage()
            .persistent()
            .get(&DataKey::Strategy(strategy.clone()))
    }

    pub fn set_strategy(env: &Env, strategy: &Address, info: &StrategyInfo) {
        env.storage()
            .persistent()
            .set(&DataKey::Strategy(strategy.clone()), info);
    }

    pub fn remove_strategy(env: &Env, strategy: &Address) {
        env.storage()
            .persistent()
            .remove(&DataKey::Strategy(strategy.clone()));
    }

    pub fn get_strategy_list(env: &Env) -> Vec<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::StrategyList)
            .unwrap_or(Vec::new(env))
    }

    pub fn set_strategy_list(env: &Env, list: &Vec<Address>) {
        env.storage().persistent().set(&DataKey::StrategyList, list);
    }

    pub fn get_weight_sum(env: &Env) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::WeightSum)
            .unwrap_or(0)
    }

    pub fn set_weight_sum(env: &Env, weight_sum: u32) {
        env.storage()
            .persistent()
            .set(&DataKey::WeightSum, &weight_sum);
    }

    pub fn get_total_acl(env: &Env) -> i128 {
        env.storage()
            .persistent()
            .get(&DataKey::TotalActiveCoverLimit)
            .unwrap_or(0)
    }

    pub fn set_total_acl(env: &Env, total: i128) {
        env.storage()
            .persistent()
            .set(&DataKey::TotalActiveCoverLimit, &total);
    }
}
