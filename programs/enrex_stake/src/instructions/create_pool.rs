/// Create pool instruction handler.
///
/// Creates a pool and its vault at the next sequential index for the
/// deployment's mint.
///
/// ## Security Guarantees
/// - Only the state authority can create pools
/// - The vault is a PDA whose token authority is the pool PDA
/// - Pool indexes are validated on chain, not trusted from the client's
///   pool count read

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::PoolCreated;
use crate::state::{Pool, State};

/// Accounts required for pool creation.
#[derive(Accounts)]
#[instruction(pool_index: u8)]
pub struct CreatePool<'info> {
    /// The admin. Must match `state.authority`.
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [STATE_SEED],
        bump = state.bump,
        has_one = authority @ StakingError::Unauthorized
    )]
    pub state: Account<'info, State>,

    /// Must be the mint fixed in state.
    #[account(
        constraint = mint.key() == state.token_mint @ StakingError::MintMismatch
    )]
    pub mint: Account<'info, Mint>,

    /// Pool PDA. `init_if_needed` so that re-creating an index reaches the
    /// handler and fails with `AlreadyInitialized`.
    #[account(
        init_if_needed,
        payer = authority,
        space = Pool::LEN,
        seeds = [mint.key().as_ref(), &[pool_index]],
        bump
    )]
    pub pool: Account<'info, Pool>,

    /// Token account holding principal and reward for this pool.
    #[account(
        init_if_needed,
        payer = authority,
        seeds = [mint.key().as_ref(), pool.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = pool
    )]
    pub vault: Account<'info, TokenAccount>,

    /// System program.
    pub system_program: Program<'info, System>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Create a pool.
///
/// # Arguments
/// * `pool_index` - Must equal the number of pools created so far
/// * `apy` - Yearly reward in integer percent
/// * `min_stake_amount` - Smallest accepted principal, in base units
/// * `lock_duration` - Seconds a stake must stay locked before it can be claimed
pub fn handler(
    ctx: Context<CreatePool>,
    pool_index: u8,
    apy: u32,
    min_stake_amount: u64,
    lock_duration: u64,
) -> Result<()> {
    require!(
        !ctx.accounts.pool.is_initialized(),
        StakingError::AlreadyInitialized
    );
    ctx.accounts.state.register_pool(pool_index)?;

    let clock = Clock::get()?;
    let pool_key = ctx.accounts.pool.key();
    let pool = &mut ctx.accounts.pool;

    pool.authority = ctx.accounts.authority.key();
    pool.mint = ctx.accounts.mint.key();
    pool.vault = ctx.accounts.vault.key();
    pool.amount_staked = 0;
    pool.amount_reward = 0;
    pool.amount_reward_reserved = 0;
    pool.min_stake_amount = min_stake_amount;
    pool.lock_duration = lock_duration;
    pool.count_stakes = 0;
    pool.inc_stakes = 0;
    pool.created_at = clock.unix_timestamp;
    pool.apy = apy;
    pool.index = pool_index;
    pool.bump = ctx.bumps.pool;
    pool.vault_bump = ctx.bumps.vault;

    msg!("Pool {} created at index {}", pool_key, pool_index);
    msg!(
        "APY: {}%, min stake: {}, lock: {}s",
        apy,
        min_stake_amount,
        lock_duration
    );

    emit!(PoolCreated {
        pool: pool_key,
        vault: pool.vault,
        pool_index,
        apy,
        min_stake_amount,
        lock_duration,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
