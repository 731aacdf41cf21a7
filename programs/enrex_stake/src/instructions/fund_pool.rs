/// Fund pool instruction handler.
///
/// Handles depositing reward tokens into a pool vault.
///
/// ## Security Guarantees
/// - Only the state authority can fund
/// - Vault must be the pool's own PDA vault
/// - Funder token account must belong to the admin and hold the state mint

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::PoolFunded;
use crate::state::{Pool, State};

/// Accounts shared by the admin reward instructions (`fund_pool` and
/// `withdraw_pool`).
#[derive(Accounts)]
pub struct PoolReward<'info> {
    /// The admin. Must match `state.authority`.
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [STATE_SEED],
        bump = state.bump,
        has_one = authority @ StakingError::Unauthorized
    )]
    pub state: Account<'info, State>,

    #[account(
        mut,
        seeds = [state.token_mint.as_ref(), &[pool.index]],
        bump = pool.bump,
        has_one = vault @ StakingError::VaultMismatch
    )]
    pub pool: Account<'info, Pool>,

    #[account(
        mut,
        seeds = [state.token_mint.as_ref(), pool.key().as_ref()],
        bump = pool.vault_bump
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Admin's token account.
    #[account(
        mut,
        constraint = user_vault.owner == authority.key() @ StakingError::InvalidTokenAccountOwner,
        constraint = user_vault.mint == state.token_mint @ StakingError::MintMismatch
    )]
    pub user_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

/// Deposit `amount` of reward into the pool.
///
/// Adds to `amount_reward` only; nothing is reserved until users stake.
pub fn handler(ctx: Context<PoolReward>, amount: u64) -> Result<()> {
    ctx.accounts.pool.fund(amount)?;

    let cpi_accounts = Transfer {
        from: ctx.accounts.user_vault.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.authority.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);
    token::transfer(cpi_ctx, amount)?;

    let clock = Clock::get()?;
    let pool = &ctx.accounts.pool;

    msg!("Pool funded with {} tokens", amount);
    msg!("Total reward: {}", pool.amount_reward);

    emit!(PoolFunded {
        pool: pool.key(),
        amount,
        amount_reward: pool.amount_reward,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
