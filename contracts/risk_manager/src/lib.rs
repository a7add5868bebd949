#![no_std]
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Vec};

mod storage;
pub mod types;

use storage::Storage;
use types::{Config, RiskError, StrategyInfo};

/// Capital view we need from the coverage data provider.
#[soroban_sdk::contractclient(name = "CoverageDataProviderClient")]
pub trait CoverageDataProvider {
    fn max_cover(env: Env) -> i128;
}

#[contract]
pub struct RiskManagerContract;

#[contractimpl]
impl RiskManagerContract {
    pub fn initialize(
        env: Env,
        governance: Address,
        coverage_data_provider: Address,
    ) -> Result<(), RiskError> {
        governance.require_auth();

        if Storage::has_config(&env) {
            return Err(RiskError::AlreadyInitialized);
        }

        let config = Config {
            governance,
            pending_governance: None,
            coverage_data_provider,
        };
        Storage::set_config(&env, &config);
        Storage::set_weight_sum(&env, 0);
        Storage::set_total_acl(&env, 0);

        Ok(())
    }

    // ───────────── STRATEGY REGISTRY ─────────────

    /// Admit a cover strategy (a product contract) with a capital weight.
    pub fn add_cover_strategy(
        env: Env,
        strategy: Address,
        weight: u32,
    ) -> Result<(), RiskError> {
        let config = Storage::get_config(&env)?;
        config.governance.require_auth();

        if weight == 0 {
            return Err(RiskError::ZeroWeight);
        }
        if Storage::get_strategy(&env, &strategy).is_some() {
            return Err(RiskError::StrategyAlreadyAdded);
        }

        Storage::set_strategy(
            &env,
            &strategy,
            &StrategyInfo {
                weight,
                active_cover_limit: 0,
            },
        );

        let mut list = Storage::get_strategy_list(&env);
        list.push_back(strategy.clone());
        Storage::set_strategy_list(&env, &list);
        Storage::set_weight_sum(&env, Storage::get_weight_sum(&env) + weight);

        env.events()
            .publish((symbol_short!("strategy"), symbol_short!("added")), (strategy, weight));
        Ok(())
    }

    /// Retire a strategy. Its active cover limit leaves the aggregate with
    /// it.
    pub fn remove_cover_strategy(env: Env, strategy: Address) -> Result<(), RiskError> {
        let config = Storage::get_config(&env)?;
        config.governance.require_auth();

        let info = Storage::get_strategy(&env, &strategy).ok_or(RiskError::StrategyNotFound)?;

        Storage::set_total_acl(&env, Storage::get_total_acl(&env) - info.active_cover_limit);
        Storage::set_weight_sum(&env, Storage::get_weight_sum(&env) - info.weight);
        Storage::remove_strategy(&env, &strategy);

        let list = Storage::get_strategy_list(&env);
        let mut remaining = Vec::new(&env);
        for s in list.iter() {
            if s != strategy {
                remaining.push_back(s);
            }
        }
        Storage::set_strategy_list(&env, &remaining);

        env.events()
            .publish((symbol_short!("strategy"), symbol_short!("removed")), strategy);
        Ok(())
    }

    pub fn set_strategy_weight(
        env: Env,
        strategy: Address,
        weight: u32,
    ) -> Result<(), RiskError> {
        let config = Storage::get_config(&env)?;
        config.governance.require_auth();

        if weight == 0 {
            return Err(RiskError::ZeroWeight);
        }
        let mut info =
            Storage::get_strategy(&env, &strategy).ok_or(RiskError::StrategyNotFound)?;

        let weight_sum = Storage::get_weight_sum(&env) - info.weight + weight;
        info.weight = weight;
        Storage::set_strategy(&env, &strategy, &info);
        Storage::set_weight_sum(&env, weight_sum);
        Ok(())
    }

    // ───────────── ACTIVE COVER ACCOUNTING ─────────────

    /// Called by a strategy after every cover-limit mutation. `old_limit`
    /// must match our ledger; the mismatch error catches a strategy whose
    /// local aggregate has drifted from ours.
    pub fn update_active_cover_limit(
        env: Env,
        strategy: Address,
        old_limit: i128,
        new_limit: i128,
    ) -> Result<(), RiskError> {
        strategy.require_auth();

        let mut info =
            Storage::get_strategy(&env, &strategy).ok_or(RiskError::StrategyNotFound)?;
        if info.active_cover_limit != old_limit {
            return Err(RiskError::LimitMismatch);
        }

        info.active_cover_limit = new_limit;
        Storage::set_strategy(&env, &strategy, &info);
        Storage::set_total_acl(&env, Storage::get_total_acl(&env) - old_limit + new_limit);

        env.events().publish(
            (symbol_short!("acl"), symbol_short!("updated"), strategy),
            (old_limit, new_limit),
        );
        Ok(())
    }

    // ───────────── CAPACITY VIEWS ─────────────

    /// Total cover the protocol can carry: the provider's pooled capital.
    pub fn max_cover(env: Env) -> Result<i128, RiskError> {
        let config = Storage::get_config(&env)?;
        let provider = CoverageDataProviderClient::new(&env, &config.coverage_data_provider);
        Ok(provider.max_cover())
    }

    /// A strategy's slice of `max_cover`, apportioned by weight.
    pub fn max_cover_per_strategy(env: Env, strategy: Address) -> Result<i128, RiskError> {
        let info = Storage::get_strategy(&env, &strategy).ok_or(RiskError::StrategyNotFound)?;
        let weight_sum = Storage::get_weight_sum(&env);
        if weight_sum == 0 {
            return Ok(0);
        }
        Ok(Self::max_cover(env)? * info.weight as i128 / weight_sum as i128)
    }

    /// Capital that must stay in the underwriting pools: everything backing
    /// currently-active cover.
    pub fn min_capital_requirement(env: Env) -> i128 {
        Storage::get_total_acl(&env)
    }

    pub fn min_capital_requirement_per_strategy(
        env: Env,
        strategy: Address,
    ) -> Result<i128, RiskError> {
        let info = Storage::get_strategy(&env, &strategy).ok_or(RiskError::StrategyNotFound)?;
        Ok(info.active_cover_limit)
    }

    pub fn active_cover_limit(env: Env) -> i128 {
        Storage::get_total_acl(&env)
    }

    pub fn active_cover_limit_per_strategy(
        env: Env,
        strategy: Address,
    ) -> Result<i128, RiskError> {
        let info = Storage::get_strategy(&env, &strategy).ok_or(RiskError::StrategyNotFound)?;
        Ok(info.active_cover_limit)
    }

    pub fn strategy_info(env: Env, strategy: Address) -> Option<StrategyInfo> {
        Storage::get_strategy(&env, &strategy)
    }

    pub fn is_strategy_accepted(env: Env, strategy: Address) -> bool {
        Storage::get_strategy(&env, &strategy).is_some()
    }

    pub fn weight_sum(env: Env) -> u32 {
        Storage::get_weight_sum(&env)
    }

    pub fn num_strategies(env: Env) -> u32 {
        Storage::get_strategy_list(&env).len()
    }

    pub fn governance(env: Env) -> Result<Address, RiskError> {
        Ok(Storage::get_config(&env)?.governance)
    }

    // ───────────── GOVERNANCE ─────────────

    pub fn set_pending_governance(env: Env, pending: Address) -> Result<(), RiskError> {
        let mut config = Storage::get_config(&env)?;
        config.governance.require_auth();

        config.pending_governance = Some(pending);
        Storage::set_config(&env, &config);
        Ok(())
    }

    pub fn accept_governance(env: Env, caller: Address) -> Result<(), RiskError> {
        caller.require_auth();

        let mut config = Storage::get_config(&env)?;
        match config.pending_governance.clone() {
            Some(pending) if pending == caller => {}
            _ => return Err(RiskError::NotPendingGovernance),
        }

        config.governance = caller;
        config.pending_governance = None;
        Storage::set_config(&env, &config);
        Ok(())
    }
}

mod test;
