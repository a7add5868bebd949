#![no_std]

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Symbol, Vec};

//
// ──────────────────────────────────────────────────────────
// DATA KEYS
// ──────────────────────────────────────────────────────────
//

#[contracttype]
pub enum DataKey {
    Config,           // ProviderConfig
    Pool(Symbol),     // UnderwritingPool by name
    PoolList,         // Vec<Symbol> of registered pool names
}

//
// ──────────────────────────────────────────────────────────
// STRUCTS
// ──────────────────────────────────────────────────────────
//

#[contracttype]
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    pub governance: Address,
    pub pending_governance: Option<Address>,
    pub pool_updater: Address,         // Role allowed to push pool balances
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct UnderwritingPool {
    pub balance: i128,
    pub enabled: bool,
}

//
// ──────────────────────────────────────────────────────────
// CONTRACT
// ──────────────────────────────────────────────────────────
//

#[contract]
pub struct CoverageDataProviderContract;

#[contractimpl]
impl CoverageDataProviderContract {
    // ───────────── INITIALIZATION ─────────────

    /// Initialize the provider with a governance address and the balance
    /// updater role.
    pub fn initialize(env: Env, governance: Address, pool_updater: Address) {
        governance.require_auth();

        if env.storage().instance().has(&DataKey::Config) {
            panic!("Already initialized");
        }

        let config = ProviderConfig {
            governance,
            pending_governance: None,
            pool_updater,
        };

        env.storage().instance().set(&DataKey::Config, &config);
        env.storage()
            .persistent()
            .set(&DataKey::PoolList, &Vec::<Symbol>::new(&env));
    }

    // ───────────── POOL MANAGEMENT ─────────────

    /// Record the capital held by a named underwriting pool. Registers the
    /// pool (enabled) on first sight.
    pub fn set_uwp_balance(env: Env, caller: Address, pool: Symbol, balance: i128) {
        caller.require_auth();

        let config: ProviderConfig = env.storage().instance().get(&DataKey::Config).unwrap();
        if caller != config.pool_updater && caller != config.governance {
            panic!("Pool updater only");
        }
        if balance < 0 {
            panic!("negative balance");
        }

        let entry = match env
            .storage()
            .persistent()
            .get::<DataKey, UnderwritingPool>(&DataKey::Pool(pool.clone()))
        {
            Some(mut existing) => {
                existing.balance = balance;
                existing
            }
            None => {
                Self::add_to_pool_list(&env, pool.clone());
                UnderwritingPool {
                    balance,
                    enabled: true,
                }
            }
        };

        env.storage()
            .persistent()
            .set(&DataKey::Pool(pool.clone()), &entry);

        env.events().publish(
            (Symbol::new(&env, "uwp_balance_set"), pool),
            balance,
        );
    }

    /// Enable or disable a pool's contribution to the aggregate (governance
    /// only).
    pub fn set_pool_enabled(env: Env, caller: Address, pool: Symbol, enabled: bool) {
        caller.require_auth();
        Self::assert_governance(&env, &caller);

        let mut entry: UnderwritingPool = match env
            .storage()
            .persistent()
            .get(&DataKey::Pool(pool.clone()))
        {
            Some(p) => p,
            None => panic!("pool not found"),
        };

        entry.enabled = enabled;
        env.storage()
            .persistent()
            .set(&DataKey::Pool(pool.clone()), &entry);

        env.events()
            .publish((Symbol::new(&env, "uwp_enabled_set"), pool), enabled);
    }

    /// Drop a pool entirely (governance only).
    pub fn remove_uwp(env: Env, caller: Address, pool: Symbol) {
        caller.require_auth();
        Self::assert_governance(&env, &caller);

        if !env
            .storage()
            .persistent()
            .has(&DataKey::Pool(pool.clone()))
        {
            panic!("pool not found");
        }

        env.storage().persistent().remove(&DataKey::Pool(pool.clone()));

        let pools: Vec<Symbol> = env
            .storage()
            .persistent()
            .get(&DataKey::PoolList)
            .unwrap_or(Vec::new(&env));
        let mut remaining = Vec::new(&env);
        for name in pools.iter() {
            if name != pool {
                remaining.push_back(name);
            }
        }
        env.storage().persistent().set(&DataKey::PoolList, &remaining);

        env.events()
            .publish((Symbol::new(&env, "uwp_removed"), pool), ());
    }

    // ───────────── VIEW FUNCTIONS ─────────────

    /// Aggregate capital backing cover: the sum of all enabled pool
    /// balances.
    pub fn max_cover(env: Env) -> i128 {
        let pools: Vec<Symbol> = env
            .storage()
            .persistent()
            .get(&DataKey::PoolList)
            .unwrap_or(Vec::new(&env));

        let mut total: i128 = 0;
        for name in pools.iter() {
            if let Some(entry) = env
                .storage()
                .persistent()
                .get::<DataKey, UnderwritingPool>(&DataKey::Pool(name))
            {
                if entry.enabled {
                    total += entry.balance;
                }
            }
        }
        total
    }

    pub fn balance_of_pool(env: Env, pool: Symbol) -> i128 {
        env.storage()
            .persistent()
            .get::<DataKey, UnderwritingPool>(&DataKey::Pool(pool))
            .map(|p| p.balance)
            .unwrap_or(0)
    }

    pub fn is_pool_enabled(env: Env, pool: Symbol) -> bool {
        env.storage()
            .persistent()
            .get::<DataKey, UnderwritingPool>(&DataKey::Pool(pool))
            .map(|p| p.enabled)
            .unwrap_or(false)
    }

    pub fn pool_count(env: Env) -> u32 {
        env.storage()
            .persistent()
            .get::<DataKey, Vec<Symbol>>(&DataKey::PoolList)
            .map(|l| l.len())
            .unwrap_or(0)
    }

    pub fn pool_at(env: Env, index: u32) -> Option<Symbol> {
        env.storage()
            .persistent()
            .get::<DataKey, Vec<Symbol>>(&DataKey::PoolList)
            .and_then(|l| l.get(index))
    }

    pub fn get_config(env: Env) -> ProviderConfig {
        env.storage().instance().get(&DataKey::Config).unwrap()
    }

    pub fn governance(env: Env) -> Address {
        Self::get_config(env).governance
    }

    // ───────────── GOVERNANCE ─────────────

    pub fn set_pool_updater(env: Env, caller: Address, pool_updater: Address) {
        caller.require_auth();
        Self::assert_governance(&env, &caller);

        let mut config: ProviderConfig = env.storage().instance().get(&DataKey::Config).unwrap();
        config.pool_updater = pool_updater;
        env.storage().instance().set(&DataKey::Config, &config);
    }

    pub fn set_pending_governance(env: Env, caller: Address, pending: Address) {
        caller.require_auth();
        Self::assert_governance(&env, &caller);

        let mut config: ProviderConfig = env.storage().instance().get(&DataKey::Config).unwrap();
        config.pending_governance = Some(pending.clone());
        env.storage().instance().set(&DataKey::Config, &config);

        env.events()
            .publish((Symbol::new(&env, "governance_proposed"), pending), ());
    }

    pub fn accept_governance(env: Env, caller: Address) {
        caller.require_auth();

        let mut config: ProviderConfig = env.storage().instance().get(&DataKey::Config).unwrap();
        match config.pending_governance.clone() {
            Some(pending) if pending == caller => {}
            _ => panic!("not pending governance"),
        }

        config.governance = caller.clone();
        config.pending_governance = None;
        env.storage().instance().set(&DataKey::Config, &config);

        env.events()
            .publish((Symbol::new(&env, "governance_transferred"), caller), ());
    }

    // ───────────── INTERNAL HELPERS ─────────────

    fn add_to_pool_list(env: &Env, pool: Symbol) {
        let mut pools: Vec<Symbol> = env
            .storage()
            .persistent()
            .get(&DataKey::PoolList)
            .unwrap_or(Vec::new(env));
        pools.push_back(pool);
        env.storage().persistent().set(&DataKey::PoolList, &pools);
    }

    fn assert_governance(env: &Env, caller: &Address) {
        let config: ProviderConfig = env.storage().instance().get(&DataKey::Config).unwrap();
        if config.governance != *caller {
            panic!("Governance only");
        }
    }
}

mod test;
