#![cfg(test)]

use super::*;
use coverage_data_provider::{CoverageDataProviderContract, CoverageDataProviderContractClient};
use soroban_sdk::{testutils::Address as _, Address, Env, Symbol};

fn setup(
    env: &Env,
) -> (
    RiskManagerContractClient,
    CoverageDataProviderContractClient,
    Address,
) {
    let governance = Address::generate(env);
    let updater = Address::generate(env);

    let provider_id = env.register_contract(None, CoverageDataProviderContract);
    let provider = CoverageDataProviderContractClient::new(env, &provider_id);
    provider.initialize(&governance, &updater);

    let contract_id = env.register_contract(None, RiskManagerContract);
    let client = RiskManagerContractClient::new(env, &contract_id);
    client.initialize(&governance, &provider_id);

    (client, provider, governance)
}

// ───────────── INITIALIZATION TESTS ─────────────

#[test]
fn test_initialization() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, governance) = setup(&env);

    assert_eq!(client.governance(), governance);
    assert_eq!(client.weight_sum(), 0);
    assert_eq!(client.num_strategies(), 0);
    assert_eq!(client.active_cover_limit(), 0);
    assert_eq!(client.min_capital_requirement(), 0);
}

#[test]
fn test_double_initialization() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, provider, governance) = setup(&env);

    let res = client.try_initialize(&governance, &provider.address);
    assert!(res.is_err());
}

// ───────────── STRATEGY REGISTRY TESTS ─────────────

#[test]
fn test_add_and_remove_strategy() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = setup(&env);
    let strategy = Address::generate(&env);

    client.add_cover_strategy(&strategy, &2);

    assert!(client.is_strategy_accepted(&strategy));
    assert_eq!(client.num_strategies(), 1);
    assert_eq!(client.weight_sum(), 2);

    let info = client.strategy_info(&strategy).unwrap();
    assert_eq!(info.weight, 2);
    assert_eq!(info.active_cover_limit, 0);

    client.remove_cover_strategy(&strategy);
    assert!(!client.is_strategy_accepted(&strategy));
    assert_eq!(client.num_strategies(), 0);
    assert_eq!(client.weight_sum(), 0);
}

#[test]
fn test_add_strategy_twice_rejected() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = setup(&env);
    let strategy = Address::generate(&env);

    client.add_cover_strategy(&strategy, &1);
    let res = client.try_add_cover_strategy(&strategy, &1);
    assert!(res.is_err());
}

#[test]
fn test_zero_weight_rejected() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = setup(&env);
    let res = client.try_add_cover_strategy(&Address::generate(&env), &0);
    assert!(res.is_err());
}

// ───────────── CAPACITY TESTS ─────────────

#[test]
fn test_max_cover_follows_provider() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, provider, governance) = setup(&env);

    provider.set_uwp_balance(&governance, &Symbol::new(&env, "mainnet_usdc"), &600_000);
    provider.set_uwp_balance(&governance, &Symbol::new(&env, "mainnet_dai"), &400_000);

    assert_eq!(client.max_cover(), 1_000_000);

    provider.set_pool_enabled(&governance, &Symbol::new(&env, "mainnet_dai"), &false);
    assert_eq!(client.max_cover(), 600_000);
}

#[test]
fn test_max_cover_split_by_weight() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, provider, governance) = setup(&env);
    provider.set_uwp_balance(&governance, &Symbol::new(&env, "mainnet_usdc"), &900_000);

    let s1 = Address::generate(&env);
    let s2 = Address::generate(&env);
    client.add_cover_strategy(&s1, &1);
    client.add_cover_strategy(&s2, &2);

    assert_eq!(client.max_cover_per_strategy(&s1), 300_000);
    assert_eq!(client.max_cover_per_strategy(&s2), 600_000);

    client.set_strategy_weight(&s2, &3);
    assert_eq!(client.max_cover_per_strategy(&s1), 225_000);
    assert_eq!(client.max_cover_per_strategy(&s2), 675_000);
}

#[test]
fn test_max_cover_per_strategy_unknown() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = setup(&env);
    let res = client.try_max_cover_per_strategy(&Address::generate(&env));
    assert!(res.is_err());
}

// ───────────── ACTIVE COVER ACCOUNTING TESTS ─────────────

#[test]
fn test_update_active_cover_limit() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = setup(&env);
    let s1 = Address::generate(&env);
    let s2 = Address::generate(&env);
    client.add_cover_strategy(&s1, &1);
    client.add_cover_strategy(&s2, &1);

    client.update_active_cover_limit(&s1, &0, &10_000);
    client.update_active_cover_limit(&s2, &0, &4_000);

    assert_eq!(client.active_cover_limit_per_strategy(&s1), 10_000);
    assert_eq!(client.active_cover_limit_per_strategy(&s2), 4_000);
    assert_eq!(client.active_cover_limit(), 14_000);
    assert_eq!(client.min_capital_requirement(), 14_000);
    assert_eq!(client.min_capital_requirement_per_strategy(&s1), 10_000);

    client.update_active_cover_limit(&s1, &10_000, &2_500);
    assert_eq!(client.active_cover_limit(), 6_500);
}

#[test]
fn test_update_with_stale_old_limit_rejected() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = setup(&env);
    let strategy = Address::generate(&env);
    client.add_cover_strategy(&strategy, &1);

    client.update_active_cover_limit(&strategy, &0, &5_000);
    let res = client.try_update_active_cover_limit(&strategy, &0, &7_000);
    assert!(res.is_err());
}

#[test]
fn test_update_from_unregistered_strategy_rejected() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = setup(&env);
    let res = client.try_update_active_cover_limit(&Address::generate(&env), &0, &1);
    assert!(res.is_err());
}

#[test]
fn test_removing_strategy_releases_its_cover() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = setup(&env);
    let strategy = Address::generate(&env);
    client.add_cover_strategy(&strategy, &1);
    client.update_active_cover_limit(&strategy, &0, &8_000);

    client.remove_cover_strategy(&strategy);
    assert_eq!(client.active_cover_limit(), 0);
}

// ───────────── GOVERNANCE TESTS ─────────────

#[test]
fn test_two_step_governance_handoff() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = setup(&env);
    let next = Address::generate(&env);

    client.set_pending_governance(&next);
    client.accept_governance(&next);
    assert_eq!(client.governance(), next);
}

#[test]
fn test_accept_governance_requires_nomination() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = setup(&env);
    let res = client.try_accept_governance(&Address::generate(&env));
    assert!(res.is_err());
}
