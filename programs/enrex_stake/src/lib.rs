//! # Enrex Stake Program
//!
//! APY staking pools for a single SPL token with rewards reserved up front.
//!
//! An administrator creates the deployment state, opens pools (each with its
//! own APY, minimum stake and lock duration) and funds them with reward
//! tokens. A user stake locks principal and immediately reserves the full
//! reward for the lock period, so a pool can never promise more reward than
//! it holds.
//!
//! ## Lifecycle of a stake
//! - `stake`: principal in, reward reserved
//! - `claim_stake`: after the lock, principal + reward out
//! - `cancel_stake`: any time, principal out, reward back to the pool
//!
//! ## Accounts
//! See [`pda`] for the address scheme and [`state`] for record layouts.

use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod math;
pub mod pda;
pub mod state;


use instructions::*;

#[program]
pub mod enrex_stake {
    use super::*;

    /// Creates the deployment state. The signer becomes the administrator
    /// and `token_mint` the only mint pools may use.
    ///
    /// # Errors
    /// Returns `AlreadyInitialized` if the state already exists.
    pub fn create_state(ctx: Context<CreateState>) -> Result<()> {
        instructions::create_state::handler(ctx)
    }

    /// Creates a pool and its vault.
    ///
    /// # Arguments
    /// * `ctx` - The context containing the admin, state, mint, pool and vault
    /// * `pool_index` - Must equal the number of pools created so far
    /// * `apy` - Yearly reward in integer percent (48 = 48%)
    /// * `min_stake_amount` - Smallest accepted principal
    /// * `lock_duration` - Lock period in seconds
    ///
    /// # Errors
    /// Returns an error if:
    /// - Signer is not the admin
    /// - `pool_index` is not the next sequential index
    /// - The pool already exists
    pub fn create_pool(
        ctx: Context<CreatePool>,
        pool_index: u8,
        apy: u32,
        min_stake_amount: u64,
        lock_duration: u64,
    ) -> Result<()> {
        instructions::create_pool::handler(ctx, pool_index, apy, min_stake_amount, lock_duration)
    }

    /// Deposits reward tokens into a pool.
    ///
    /// # Errors
    /// Returns an error if the signer is not the admin.
    pub fn fund_pool(ctx: Context<PoolReward>, amount: u64) -> Result<()> {
        instructions::fund_pool::handler(ctx, amount)
    }

    /// Withdraws reward that is not reserved for open stakes.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Signer is not the admin
    /// - `amount` exceeds the unreserved reward
    pub fn withdraw_pool(ctx: Context<PoolReward>, amount: u64) -> Result<()> {
        instructions::withdraw_pool::handler(ctx, amount)
    }

    /// Stakes `amount` tokens and reserves the reward for the pool's lock
    /// period.
    ///
    /// # Errors
    /// Returns an error if:
    /// - `amount` is below the pool minimum
    /// - The pool's unreserved reward cannot cover the reward
    pub fn stake(ctx: Context<Stake>, amount: u64) -> Result<()> {
        instructions::stake::handler(ctx, amount)
    }

    /// Pays out principal and reward once the lock has elapsed.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Signer does not own the stake
    /// - The lock period has not elapsed
    pub fn claim_stake(ctx: Context<SettleStake>) -> Result<()> {
        instructions::claim_stake::handler(ctx)
    }

    /// Returns the principal and forfeits the reward.
    ///
    /// # Errors
    /// Returns an error if the signer does not own the stake.
    pub fn cancel_stake(ctx: Context<SettleStake>) -> Result<()> {
        instructions::cancel_stake::handler(ctx)
    }
}
