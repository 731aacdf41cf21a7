//! Stake instruction handler.
//!
//! Locks principal in a pool and reserves the full reward for the lock
//! period up front.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::Staked;
use crate::pda::stake_index_seed;
use crate::state::{Pool, StakeInfo, State};

/// Accounts required for staking.
///
/// The stake info address is seeded with the pool's current `inc_stakes`;
/// clients must read the pool right before building the transaction.
#[derive(Accounts)]
pub struct Stake<'info> {
    /// The user staking tokens.
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(seeds = [STATE_SEED], bump = state.bump)]
    pub state: Account<'info, State>,

    #[account(
        mut,
        seeds = [state.token_mint.as_ref(), &[pool.index]],
        bump = pool.bump,
        has_one = vault @ StakingError::VaultMismatch
    )]
    pub pool: Account<'info, Pool>,

    /// Fresh record for this stake.
    #[account(
        init,
        payer = authority,
        space = StakeInfo::LEN,
        seeds = [
            STAKE_INFO_SEED,
            pool.key().as_ref(),
            authority.key().as_ref(),
            stake_index_seed(pool.inc_stakes).as_ref()
        ],
        bump
    )]
    pub stake_info: Account<'info, StakeInfo>,

    /// Pool vault.
    #[account(
        mut,
        seeds = [state.token_mint.as_ref(), pool.key().as_ref()],
        bump = pool.vault_bump
    )]
    pub vault: Account<'info, TokenAccount>,

    /// User's token account the principal is taken from.
    #[account(
        mut,
        constraint = user_vault.owner == authority.key() @ StakingError::InvalidTokenAccountOwner,
        constraint = user_vault.mint == state.token_mint @ StakingError::MintMismatch
    )]
    pub user_vault: Account<'info, TokenAccount>,

    /// System program.
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Stake `amount` tokens into the pool.
///
/// # Errors
/// - `BelowMinimumStake` if `amount` is below the pool minimum
/// - `InsufficientPoolReward` if the pool cannot reserve the reward
pub fn handler(ctx: Context<Stake>, amount: u64) -> Result<()> {
    let clock = Clock::get()?;
    let terms = ctx.accounts.pool.open_stake(amount)?;

    let cpi_accounts = Transfer {
        from: ctx.accounts.user_vault.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.authority.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    let pool_key = ctx.accounts.pool.key();
    let stake_info = &mut ctx.accounts.stake_info;
    stake_info.pool = pool_key;
    stake_info.authority = ctx.accounts.authority.key();
    stake_info.amount = amount;
    stake_info.reward_amount = terms.reward_amount;
    stake_info.created_at = clock.unix_timestamp;
    stake_info.stake_index = terms.stake_index;
    stake_info.bump = ctx.bumps.stake_info;

    let pool = &ctx.accounts.pool;

    msg!(
        "Staked {} tokens, reward {} reserved (stake #{})",
        amount,
        terms.reward_amount,
        terms.stake_index
    );
    msg!(
        "Pool staked: {}, reserved: {}/{}",
        pool.amount_staked,
        pool.amount_reward_reserved,
        pool.amount_reward
    );

    emit!(Staked {
        pool: pool_key,
        stake_info: stake_info.key(),
        user: stake_info.authority,
        amount,
        reward_amount: terms.reward_amount,
        stake_index: terms.stake_index,
        pool_amount_staked: pool.amount_staked,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
