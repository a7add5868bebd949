#![no_std]

use soroban_sdk::{
    contract, contractimpl, token, xdr::ToXdr, Address, Bytes, BytesN, Env, Symbol, Vec,
};

mod storage;
pub mod types;

use types::{Policy, PolicyStatus, ProductConfig, ReferralCode};

//
// ──────────────────────────────────────────────────────────
// EXTERNAL CLIENTS
// ──────────────────────────────────────────────────────────
//

// The slice of the risk manager this product needs: its own capacity
// ceiling, and the notification pushed after every cover mutation.
#[soroban_sdk::contractclient(name = "RiskManagerClient")]
pub trait RiskManagerGateway {
    fn max_cover_per_strategy(env: Env, strategy: Address) -> i128;
    fn update_active_cover_limit(env: Env, strategy: Address, old_limit: i128, new_limit: i128);
}

//
// ──────────────────────────────────────────────────────────
// CONSTANTS
// ──────────────────────────────────────────────────────────
//

const SECONDS_PER_WEEK: u64 = 604_800;

// 1 / 315_360_000 per second is a 10% annual ceiling on premium rates.
const DEFAULT_MAX_RATE_NUM: u32 = 1;
const DEFAULT_MAX_RATE_DEN: u32 = 315_360_000;
const DEFAULT_MAX_CHARGE_BATCH: u32 = 100;
const DEFAULT_REFERRAL_REWARD: i128 = 50;

//
// ──────────────────────────────────────────────────────────
// CONTRACT
// ──────────────────────────────────────────────────────────
//

#[contract]
pub struct CoverProductContract;

#[contractimpl]
impl CoverProductContract {
    // ───────────── INITIALIZATION ─────────────

    /// Initialize the product. Billing, cooldown and referral parameters
    /// start from the defaults above and are tuned through governance
    /// setters.
    pub fn initialize(
        env: Env,
        governance: Address,
        settlement_token: Address,
        premium_pool: Address,
        premium_collector: Address,
        cover_promotion_admin: Address,
        risk_manager: Address,
    ) {
        governance.require_auth();

        if storage::has_config(&env) {
            panic!("Already initialized");
        }

        let config = ProductConfig {
            governance,
            pending_governance: None,
            settlement_token,
            premium_pool,
            premium_collector,
            cover_promotion_admin,
            risk_manager,
            paused: false,
            governance_policy_control: true,
            max_rate_num: DEFAULT_MAX_RATE_NUM,
            max_rate_den: DEFAULT_MAX_RATE_DEN,
            charge_cycle: SECONDS_PER_WEEK,
            cooldown_period: SECONDS_PER_WEEK,
            max_charge_batch: DEFAULT_MAX_CHARGE_BATCH,
            referral_enabled: true,
            referral_reward: DEFAULT_REFERRAL_REWARD,
            referral_threshold: 0,
        };

        storage::set_config(&env, &config);
        storage::set_active_cover_limit(&env, 0);
        storage::set_policy_count(&env, 0);
    }

    // ───────────── POLICY LIFECYCLE ─────────────

    /// Activate cover for `policyholder`. Reuses the holder's policy id if
    /// they held one before; otherwise mints the next id. The deposit (if
    /// any) is credited first so the minimum-balance gate sees the funded
    /// account.
    pub fn activate_policy(
        env: Env,
        policyholder: Address,
        cover_limit: i128,
        deposit: i128,
        referral_code: Option<ReferralCode>,
    ) -> u64 {
        policyholder.require_auth();
        Self::assert_not_paused(&env);

        let config = storage::get_config(&env);

        if cover_limit <= 0 {
            panic!("zero cover value");
        }
        if deposit < 0 {
            panic!("negative amount");
        }

        let existing_id = storage::policy_id_of(&env, &policyholder);
        if let Some(id) = existing_id {
            let existing = storage::get_policy(&env, id).unwrap();
            if existing.status == PolicyStatus::Active {
                panic!("policy already activated");
            }
        }

        // Admission control against the strategy's share of pooled capital.
        let old_total = storage::get_active_cover_limit(&env);
        let new_total = old_total + cover_limit;
        Self::assert_capacity(&env, &config, new_total);

        let mut account = storage::get_account(&env, &policyholder);
        if deposit > 0 {
            token::Client::new(&env, &config.settlement_token).transfer(
                &policyholder,
                &env.current_contract_address(),
                &deposit,
            );
            account.balance += deposit;
            env.events()
                .publish((Symbol::new(&env, "deposit_made"), policyholder.clone()), deposit);
        }
        if account.balance < Self::min_required_balance(&config, cover_limit) {
            panic!("insufficient deposit for minimum required account balance");
        }

        account.cooldown_start = 0;
        account.pre_deactivate_cover_limit = 0;
        storage::set_account(&env, &policyholder, &account);

        let policy_id = match existing_id {
            Some(id) => id,
            None => {
                let next = storage::get_policy_count(&env) + 1;
                storage::set_policy_count(&env, next);
                storage::set_policy_id(&env, &policyholder, next);
                next
            }
        };
        storage::set_policy(
            &env,
            &Policy {
                policy_id,
                owner: policyholder.clone(),
                cover_limit,
                status: PolicyStatus::Active,
            },
        );

        storage::set_active_cover_limit(&env, new_total);
        Self::notify_risk_manager(&env, &config, old_total, new_total);

        if config.referral_enabled {
            if let Some(code) = referral_code {
                Self::process_referral(&env, &config, &policyholder, &code);
            }
        }

        env.events().publish(
            (Symbol::new(&env, "policy_created"), policyholder),
            (policy_id, cover_limit),
        );
        policy_id
    }

    /// Change the cover limit on an active policy. The caller is the holder
    /// themselves, or governance when the policy-control flag is on.
    pub fn update_cover_limit(
        env: Env,
        caller: Address,
        policyholder: Address,
        new_cover_limit: i128,
        referral_code: Option<ReferralCode>,
    ) {
        caller.require_auth();
        Self::assert_not_paused(&env);

        let config = storage::get_config(&env);
        Self::assert_owner_or_governance(&config, &caller, &policyholder);

        if new_cover_limit <= 0 {
            panic!("zero cover value");
        }

        let mut policy = Self::active_policy_of(&env, &policyholder);
        let old_limit = policy.cover_limit;

        let old_total = storage::get_active_cover_limit(&env);
        let new_total = old_total - old_limit + new_cover_limit;
        Self::assert_capacity(&env, &config, new_total);

        let mut account = storage::get_account(&env, &policyholder);
        if account.balance < Self::min_required_balance(&config, new_cover_limit) {
            panic!("insufficient deposit for minimum required account balance");
        }

        policy.cover_limit = new_cover_limit;
        storage::set_policy(&env, &policy);

        storage::set_active_cover_limit(&env, new_total);
        Self::notify_risk_manager(&env, &config, old_total, new_total);

        account.cooldown_start = 0;
        account.pre_deactivate_cover_limit = 0;
        storage::set_account(&env, &policyholder, &account);

        if config.referral_enabled {
            if let Some(code) = referral_code {
                Self::process_referral(&env, &config, &policyholder, &code);
            }
        }

        env.events().publish(
            (Symbol::new(&env, "policy_updated"), policyholder),
            (policy.policy_id, old_limit, new_cover_limit),
        );
    }

    /// Vacate cover and start the withdrawal cooldown. The account balance
    /// is untouched; the vacated limit keeps backing the withdrawal floor
    /// until the cooldown runs out.
    pub fn deactivate_policy(env: Env, caller: Address, policyholder: Address) {
        caller.require_auth();

        let config = storage::get_config(&env);
        Self::assert_owner_or_governance(&config, &caller, &policyholder);

        let mut policy = Self::active_policy_of(&env, &policyholder);
        let old_limit = policy.cover_limit;

        policy.cover_limit = 0;
        policy.status = PolicyStatus::Inactive;
        storage::set_policy(&env, &policy);

        let old_total = storage::get_active_cover_limit(&env);
        let new_total = old_total - old_limit;
        storage::set_active_cover_limit(&env, new_total);
        Self::notify_risk_manager(&env, &config, old_total, new_total);

        let mut account = storage::get_account(&env, &policyholder);
        account.cooldown_start = env.ledger().timestamp();
        account.pre_deactivate_cover_limit = old_limit;
        storage::set_account(&env, &policyholder, &account);

        env.events().publish(
            (Symbol::new(&env, "policy_deactivated"), policyholder),
            policy.policy_id,
        );
    }

    // ───────────── ACCOUNT LEDGER ─────────────

    /// Fund a policyholder's account. Anyone may pay in for anyone.
    pub fn deposit(env: Env, from: Address, policyholder: Address, amount: i128) {
        from.require_auth();
        Self::assert_not_paused(&env);

        if amount <= 0 {
            panic!("Amount must be positive");
        }

        let config = storage::get_config(&env);
        token::Client::new(&env, &config.settlement_token).transfer(
            &from,
            &env.current_contract_address(),
            &amount,
        );

        let mut account = storage::get_account(&env, &policyholder);
        account.balance += amount;
        storage::set_account(&env, &policyholder, &account);

        env.events()
            .publish((Symbol::new(&env, "deposit_made"), policyholder), amount);
    }

    /// Withdraw deposited funds. Until the cooldown has fully elapsed the
    /// balance may not drop below the minimum required for the cover the
    /// account is (or was, pre-deactivation) backing. Once the cooldown has
    /// run out the whole balance is free and the cooldown bookkeeping is
    /// cleared.
    pub fn withdraw(env: Env, policyholder: Address, amount: i128) {
        policyholder.require_auth();
        Self::assert_not_paused(&env);

        if amount <= 0 {
            panic!("Amount must be positive");
        }

        let config = storage::get_config(&env);
        let mut account = storage::get_account(&env, &policyholder);

        if account.balance <= 0 {
            panic!("no account balance to withdraw");
        }
        if amount > account.balance {
            panic!("cannot withdraw more than account balance");
        }

        let now = env.ledger().timestamp();
        let cooldown_elapsed = account.cooldown_start != 0
            && now >= account.cooldown_start + config.cooldown_period;

        if cooldown_elapsed {
            account.cooldown_start = 0;
            account.pre_deactivate_cover_limit = 0;
        } else {
            let backing_limit = match Self::policy_if_active(&env, &policyholder) {
                Some(policy) => policy.cover_limit,
                None => account.pre_deactivate_cover_limit,
            };
            let floor = Self::min_required_balance(&config, backing_limit);
            if account.balance - amount < floor {
                panic!("insufficient deposit for minimum required account balance");
            }
        }

        account.balance -= amount;
        storage::set_account(&env, &policyholder, &account);

        token::Client::new(&env, &config.settlement_token).transfer(
            &env.current_contract_address(),
            &policyholder,
            &amount,
        );

        env.events()
            .publish((Symbol::new(&env, "withdraw_made"), policyholder), amount);
    }

    // ───────────── PREMIUM CHARGING ─────────────

    /// Batch-charge premiums. Structural violations (length, batch size,
    /// rate cap, role) abort the whole call; a holder who cannot cover the
    /// premium is drained of reward points and balance, force-deactivated,
    /// and the batch continues. Reward points pay first; only the
    /// balance-funded portion moves to the premium pool.
    pub fn charge_premiums(env: Env, caller: Address, holders: Vec<Address>, premiums: Vec<i128>) {
        caller.require_auth();

        let config = storage::get_config(&env);
        if caller != config.premium_collector && caller != config.governance {
            panic!("Premium collector only");
        }
        if holders.len() != premiums.len() {
            panic!("length mismatch");
        }
        if holders.len() > config.max_charge_batch {
            panic!("policy count exceeded");
        }

        let old_total = storage::get_active_cover_limit(&env);
        let mut total_acl = old_total;
        let mut amount_to_pool: i128 = 0;

        for (holder, premium) in holders.iter().zip(premiums.iter()) {
            if premium < 0 {
                panic!("negative amount");
            }

            // Holders without an active policy are skipped silently.
            let mut policy = match Self::policy_if_active(&env, &holder) {
                Some(policy) => policy,
                None => continue,
            };

            if premium > Self::min_required_balance(&config, policy.cover_limit) {
                panic!("charging more than promised maximum rate");
            }

            let mut account = storage::get_account(&env, &holder);
            let available = account.reward_points + account.balance;

            if available >= premium {
                let from_points = if premium <= account.reward_points {
                    premium
                } else {
                    account.reward_points
                };
                let from_balance = premium - from_points;
                account.reward_points -= from_points;
                account.balance -= from_balance;
                account.premium_paid += premium;
                amount_to_pool += from_balance;
                storage::set_account(&env, &holder, &account);

                env.events()
                    .publish((Symbol::new(&env, "premium_charged"), holder), premium);
            } else {
                // Involuntary termination: drain what exists, vacate the
                // cover, no cooldown.
                let charged = available;
                amount_to_pool += account.balance;
                account.reward_points = 0;
                account.balance = 0;
                account.premium_paid += charged;
                storage::set_account(&env, &holder, &account);

                total_acl -= policy.cover_limit;
                policy.cover_limit = 0;
                policy.status = PolicyStatus::Inactive;
                storage::set_policy(&env, &policy);

                env.events().publish(
                    (Symbol::new(&env, "premium_partially_charged"), holder.clone()),
                    (premium, charged),
                );
                env.events().publish(
                    (Symbol::new(&env, "policy_deactivated"), holder),
                    policy.policy_id,
                );
            }
        }

        if total_acl != old_total {
            storage::set_active_cover_limit(&env, total_acl);
            Self::notify_risk_manager(&env, &config, old_total, total_acl);
        }
        if amount_to_pool > 0 {
            token::Client::new(&env, &config.settlement_token).transfer(
                &env.current_contract_address(),
                &config.premium_pool,
                &amount_to_pool,
            );
        }
    }

    // ───────────── REFERRAL SUBSYSTEM ─────────────

    /// Register the ed25519 key a holder signs referral codes with. May be
    /// rotated at any time; codes signed with a retired key stop verifying.
    pub fn register_referral_key(env: Env, policyholder: Address, key: BytesN<32>) {
        policyholder.require_auth();
        storage::set_referral_key(&env, &policyholder, &key);

        env.events()
            .publish((Symbol::new(&env, "referral_key_set"), policyholder), key);
    }

    // ───────────── REWARD POINTS ─────────────

    /// Set a holder's reward-point balance outright (promotions, support
    /// credits). Points only ever leave through premium charging.
    pub fn set_reward_points(env: Env, caller: Address, policyholder: Address, points: i128) {
        caller.require_auth();

        let config = storage::get_config(&env);
        if caller != config.cover_promotion_admin {
            panic!("Cover promotion admin only");
        }
        if points < 0 {
            panic!("negative amount");
        }

        let mut account = storage::get_account(&env, &policyholder);
        account.reward_points = points;
        storage::set_account(&env, &policyholder, &account);

        env.events()
            .publish((Symbol::new(&env, "reward_points_set"), policyholder), points);
    }

    // ───────────── VIEW FUNCTIONS ─────────────

    pub fn get_config(env: Env) -> ProductConfig {
        storage::get_config(&env)
    }

    pub fn governance(env: Env) -> Address {
        storage::get_config(&env).governance
    }

    pub fn policy_of(env: Env, policyholder: Address) -> Option<u64> {
        storage::policy_id_of(&env, &policyholder)
    }

    pub fn get_policy(env: Env, policy_id: u64) -> Option<Policy> {
        storage::get_policy(&env, policy_id)
    }

    pub fn cover_limit_of(env: Env, policyholder: Address) -> i128 {
        match Self::policy_if_active(&env, &policyholder) {
            Some(policy) => policy.cover_limit,
            None => 0,
        }
    }

    pub fn account_balance_of(env: Env, policyholder: Address) -> i128 {
        storage::get_account(&env, &policyholder).balance
    }

    pub fn reward_points_of(env: Env, policyholder: Address) -> i128 {
        storage::get_account(&env, &policyholder).reward_points
    }

    pub fn premium_paid_of(env: Env, policyholder: Address) -> i128 {
        storage::get_account(&env, &policyholder).premium_paid
    }

    pub fn cooldown_start_of(env: Env, policyholder: Address) -> u64 {
        storage::get_account(&env, &policyholder).cooldown_start
    }

    pub fn is_referral_code_used(env: Env, policyholder: Address) -> bool {
        storage::get_account(&env, &policyholder).referral_used
    }

    pub fn referral_key_of(env: Env, policyholder: Address) -> Option<BytesN<32>> {
        storage::get_referral_key(&env, &policyholder)
    }

    pub fn active_cover_limit(env: Env) -> i128 {
        storage::get_active_cover_limit(&env)
    }

    pub fn policy_count(env: Env) -> u64 {
        storage::get_policy_count(&env)
    }

    /// Cover this product can still admit: its risk-manager ceiling minus
    /// what is already active.
    pub fn available_cover_capacity(env: Env) -> i128 {
        let config = storage::get_config(&env);
        let ceiling = RiskManagerClient::new(&env, &config.risk_manager)
            .max_cover_per_strategy(&env.current_contract_address());
        let active = storage::get_active_cover_limit(&env);
        if ceiling > active {
            ceiling - active
        } else {
            0
        }
    }

    /// Deposit needed to carry `cover_limit` through one full charge cycle
    /// at the maximum premium rate.
    pub fn min_required_account_balance(env: Env, cover_limit: i128) -> i128 {
        let config = storage::get_config(&env);
        Self::min_required_balance(&config, cover_limit)
    }

    /// The most a single `charge_premiums` call may take from this holder.
    pub fn max_chargeable_premium(env: Env, policyholder: Address) -> i128 {
        let config = storage::get_config(&env);
        match Self::policy_if_active(&env, &policyholder) {
            Some(policy) => Self::min_required_balance(&config, policy.cover_limit),
            None => 0,
        }
    }

    // ───────────── GOVERNANCE ─────────────

    pub fn set_paused(env: Env, caller: Address, paused: bool) {
        caller.require_auth();
        let mut config = Self::config_for_governance(&env, &caller);
        config.paused = paused;
        storage::set_config(&env, &config);

        env.events()
            .publish((Symbol::new(&env, "paused_set"),), paused);
    }

    pub fn set_billing_params(
        env: Env,
        caller: Address,
        max_rate_num: u32,
        max_rate_den: u32,
        charge_cycle: u64,
    ) {
        caller.require_auth();
        let mut config = Self::config_for_governance(&env, &caller);

        if max_rate_den == 0 {
            panic!("zero rate denominator");
        }
        if charge_cycle == 0 {
            panic!("zero charge cycle");
        }

        config.max_rate_num = max_rate_num;
        config.max_rate_den = max_rate_den;
        config.charge_cycle = charge_cycle;
        storage::set_config(&env, &config);
    }

    pub fn set_cooldown_period(env: Env, caller: Address, cooldown_period: u64) {
        caller.require_auth();
        let mut config = Self::config_for_governance(&env, &caller);
        config.cooldown_period = cooldown_period;
        storage::set_config(&env, &config);
    }

    pub fn set_max_charge_batch(env: Env, caller: Address, max_charge_batch: u32) {
        caller.require_auth();
        let mut config = Self::config_for_governance(&env, &caller);
        if max_charge_batch == 0 {
            panic!("zero batch size");
        }
        config.max_charge_batch = max_charge_batch;
        storage::set_config(&env, &config);
    }

    pub fn set_referral_params(
        env: Env,
        caller: Address,
        enabled: bool,
        reward: i128,
        threshold: i128,
    ) {
        caller.require_auth();
        let mut config = Self::config_for_governance(&env, &caller);

        if reward < 0 || threshold < 0 {
            panic!("negative amount");
        }

        config.referral_enabled = enabled;
        config.referral_reward = reward;
        config.referral_threshold = threshold;
        storage::set_config(&env, &config);
    }

    pub fn set_roles(
        env: Env,
        caller: Address,
        premium_collector: Address,
        cover_promotion_admin: Address,
        premium_pool: Address,
    ) {
        caller.require_auth();
        let mut config = Self::config_for_governance(&env, &caller);
        config.premium_collector = premium_collector;
        config.cover_promotion_admin = cover_promotion_admin;
        config.premium_pool = premium_pool;
        storage::set_config(&env, &config);
    }

    pub fn set_governance_policy_control(env: Env, caller: Address, enabled: bool) {
        caller.require_auth();
        let mut config = Self::config_for_governance(&env, &caller);
        config.governance_policy_control = enabled;
        storage::set_config(&env, &config);
    }

    pub fn set_pending_governance(env: Env, caller: Address, pending: Address) {
        caller.require_auth();
        let mut config = Self::config_for_governance(&env, &caller);
        config.pending_governance = Some(pending.clone());
        storage::set_config(&env, &config);

        env.events()
            .publish((Symbol::new(&env, "governance_proposed"), pending), ());
    }

    pub fn accept_governance(env: Env, caller: Address) {
        caller.require_auth();

        let mut config = storage::get_config(&env);
        match config.pending_governance.clone() {
            Some(pending) if pending == caller => {}
            _ => panic!("not pending governance"),
        }

        config.governance = caller.clone();
        config.pending_governance = None;
        storage::set_config(&env, &config);

        env.events()
            .publish((Symbol::new(&env, "governance_transferred"), caller), ());
    }

    // ───────────── INTERNAL HELPERS ─────────────

    fn min_required_balance(config: &ProductConfig, cover_limit: i128) -> i128 {
        cover_limit * config.max_rate_num as i128 * config.charge_cycle as i128
            / config.max_rate_den as i128
    }

    fn assert_capacity(env: &Env, config: &ProductConfig, proposed_total: i128) {
        let ceiling = RiskManagerClient::new(env, &config.risk_manager)
            .max_cover_per_strategy(&env.current_contract_address());
        if proposed_total > ceiling {
            panic!("insufficient capacity for new cover");
        }
    }

    fn notify_risk_manager(env: &Env, config: &ProductConfig, old_total: i128, new_total: i128) {
        RiskManagerClient::new(env, &config.risk_manager).update_active_cover_limit(
            &env.current_contract_address(),
            &old_total,
            &new_total,
        );
    }

    fn active_policy_of(env: &Env, policyholder: &Address) -> Policy {
        match Self::policy_if_active(env, policyholder) {
            Some(policy) => policy,
            None => panic!("invalid policy"),
        }
    }

    fn policy_if_active(env: &Env, policyholder: &Address) -> Option<Policy> {
        let policy_id = storage::policy_id_of(env, policyholder)?;
        let policy = storage::get_policy(env, policy_id)?;
        if policy.status == PolicyStatus::Active {
            Some(policy)
        } else {
            None
        }
    }

    fn assert_owner_or_governance(config: &ProductConfig, caller: &Address, policyholder: &Address) {
        if caller == policyholder {
            return;
        }
        if config.governance_policy_control && *caller == config.governance {
            return;
        }
        panic!("Policyholder or governance only");
    }

    fn config_for_governance(env: &Env, caller: &Address) -> ProductConfig {
        let config = storage::get_config(env);
        if config.governance != *caller {
            panic!("Governance only");
        }
        config
    }

    fn assert_not_paused(env: &Env) {
        let config = storage::get_config(env);
        if config.paused {
            panic!("Contract is paused");
        }
    }

    /// The bytes a referrer signs: a domain symbol, this contract, and the
    /// referrer themselves. Nothing referee-specific, so one code serves
    /// any number of referees (each gated by their own one-shot flag).
    fn referral_payload(env: &Env, referrer: &Address) -> Bytes {
        (
            Symbol::new(env, "cover_referral"),
            env.current_contract_address(),
            referrer.clone(),
        )
            .to_xdr(env)
    }

    fn process_referral(
        env: &Env,
        config: &ProductConfig,
        policyholder: &Address,
        code: &ReferralCode,
    ) {
        if code.referrer == *policyholder {
            panic!("cannot refer to self");
        }

        let mut referee_account = storage::get_account(env, policyholder);
        if referee_account.referral_used {
            panic!("cannot use referral code again");
        }
        if referee_account.premium_paid < config.referral_threshold {
            panic!("premium paid threshold not met");
        }
        if Self::policy_if_active(env, &code.referrer).is_none() {
            panic!("referrer must be an active policyholder");
        }

        let key = match storage::get_referral_key(env, &code.referrer) {
            Some(key) => key,
            None => panic!("referrer signing key not registered"),
        };
        let payload = Self::referral_payload(env, &code.referrer);
        env.crypto().ed25519_verify(&key, &payload, &code.signature);

        referee_account.referral_used = true;
        referee_account.reward_points += config.referral_reward;
        storage::set_account(env, policyholder, &referee_account);

        let mut referrer_account = storage::get_account(env, &code.referrer);
        referrer_account.reward_points += config.referral_reward;
        storage::set_account(env, &code.referrer, &referrer_account);

        env.events().publish(
            (Symbol::new(env, "referral_rewards_earned"), policyholder.clone()),
            (code.referrer.clone(), config.referral_reward),
        );
        env.events().publish(
            (Symbol::new(env, "referral_rewards_earned"), code.referrer.clone()),
            (policyholder.clone(), config.referral_reward),
        );
    }
}
