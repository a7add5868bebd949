#![cfg(test)]

use super::*;
use soroban_sdk::{testutils::Address as _, Address, Env, Symbol};

fn setup(env: &Env) -> (CoverageDataProviderContractClient, Address, Address) {
    let governance = Address::generate(env);
    let updater = Address::generate(env);

    let contract_id = env.register_contract(None, CoverageDataProviderContract);
    let client = CoverageDataProviderContractClient::new(env, &contract_id);
    client.initialize(&governance, &updater);

    (client, governance, updater)
}

// ───────────── INITIALIZATION TESTS ─────────────

#[test]
fn test_initialization() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, governance, updater) = setup(&env);

    let config = client.get_config();
    assert_eq!(config.governance, governance);
    assert_eq!(config.pool_updater, updater);
    assert_eq!(client.pool_count(), 0);
    assert_eq!(client.max_cover(), 0);
}

#[test]
#[should_panic(expected = "Already initialized")]
fn test_double_initialization() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, governance, updater) = setup(&env);
    client.initialize(&governance, &updater);
}

// ───────────── POOL BALANCE TESTS ─────────────

#[test]
fn test_set_and_sum_pool_balances() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, updater) = setup(&env);

    let usdc = Symbol::new(&env, "mainnet_usdc");
    let dai = Symbol::new(&env, "mainnet_dai");

    client.set_uwp_balance(&updater, &usdc, &1_000_000);
    client.set_uwp_balance(&updater, &dai, &250_000);

    assert_eq!(client.pool_count(), 2);
    assert_eq!(client.balance_of_pool(&usdc), 1_000_000);
    assert_eq!(client.balance_of_pool(&dai), 250_000);
    assert_eq!(client.max_cover(), 1_250_000);

    // Updating an existing pool replaces, not appends.
    client.set_uwp_balance(&updater, &usdc, &400_000);
    assert_eq!(client.pool_count(), 2);
    assert_eq!(client.max_cover(), 650_000);
}

#[test]
fn test_governance_may_update_balances() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, governance, _) = setup(&env);

    let pool = Symbol::new(&env, "aurora_usdt");
    client.set_uwp_balance(&governance, &pool, &77);
    assert_eq!(client.balance_of_pool(&pool), 77);
}

#[test]
#[should_panic(expected = "Pool updater only")]
fn test_balance_update_requires_role() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = setup(&env);

    let outsider = Address::generate(&env);
    client.set_uwp_balance(&outsider, &Symbol::new(&env, "mainnet_usdc"), &1);
}

#[test]
#[should_panic(expected = "negative balance")]
fn test_negative_balance_rejected() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, updater) = setup(&env);
    client.set_uwp_balance(&updater, &Symbol::new(&env, "mainnet_usdc"), &-5);
}

// ───────────── ENABLE / DISABLE TESTS ─────────────

#[test]
fn test_disabled_pool_excluded_from_aggregate() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, governance, updater) = setup(&env);

    let usdc = Symbol::new(&env, "mainnet_usdc");
    let dai = Symbol::new(&env, "mainnet_dai");
    client.set_uwp_balance(&updater, &usdc, &1_000_000);
    client.set_uwp_balance(&updater, &dai, &250_000);

    client.set_pool_enabled(&governance, &dai, &false);
    assert!(!client.is_pool_enabled(&dai));
    assert_eq!(client.max_cover(), 1_000_000);

    // Balance survives the disabled window.
    client.set_pool_enabled(&governance, &dai, &true);
    assert_eq!(client.max_cover(), 1_250_000);
}

#[test]
#[should_panic(expected = "pool not found")]
fn test_enable_unknown_pool() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, governance, _) = setup(&env);
    client.set_pool_enabled(&governance, &Symbol::new(&env, "unknown"), &true);
}

#[test]
fn test_remove_pool() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, governance, updater) = setup(&env);

    let usdc = Symbol::new(&env, "mainnet_usdc");
    let dai = Symbol::new(&env, "mainnet_dai");
    client.set_uwp_balance(&updater, &usdc, &100);
    client.set_uwp_balance(&updater, &dai, &200);

    client.remove_uwp(&governance, &usdc);

    assert_eq!(client.pool_count(), 1);
    assert_eq!(client.pool_at(&0).unwrap(), dai);
    assert_eq!(client.balance_of_pool(&usdc), 0);
    assert_eq!(client.max_cover(), 200);
}

// ───────────── GOVERNANCE TESTS ─────────────

#[test]
fn test_two_step_governance_handoff() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, governance, _) = setup(&env);
    let next = Address::generate(&env);

    client.set_pending_governance(&governance, &next);
    assert_eq!(client.governance(), governance);

    client.accept_governance(&next);
    assert_eq!(client.governance(), next);
}

#[test]
#[should_panic(expected = "not pending governance")]
fn test_accept_governance_requires_nomination() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, _) = setup(&env);
    let pretender = Address::generate(&env);
    client.accept_governance(&pretender);
}

#[test]
#[should_panic(expected = "Governance only")]
fn test_set_pool_updater_governance_only() {
    let env = Env::default();
    env.mock_all_auths();

    let (client, _, updater) = setup(&env);
    client.set_pool_updater(&updater, &updater);
}
