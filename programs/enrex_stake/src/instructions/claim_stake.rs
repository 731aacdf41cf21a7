//! Claim stake instruction handler.
//!
//! Pays out principal plus reserved reward once the lock has elapsed and
//! closes the stake info account.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::*;
use crate::error::StakingError;
use crate::events::StakeClaimed;
use crate::pda::stake_index_seed;
use crate::state::{Pool, StakeInfo, State};

/// Accounts shared by `claim_stake` and `cancel_stake`.
#[derive(Accounts)]
pub struct SettleStake<'info> {
    /// The staker. Must match `stake_info.authority`; receives the rent of
    /// the closed stake info.
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

    #[account(
        mut,
        seeds = [
            STAKE_INFO_SEED,
            stake_info.pool.as_ref(),
            stake_info.authority.as_ref(),
            stake_index_seed(stake_info.stake_index).as_ref()
        ],
        bump = stake_info.bump,
        has_one = authority @ StakingError::Unauthorized,
        has_one = pool @ StakingError::PoolMismatch,
        close = authority
    )]
    pub stake_info: Account<'info, StakeInfo>,

    /// Pool vault.
    #[account(
        mut,
        seeds = [state.token_mint.as_ref(), pool.key().as_ref()],
        bump = pool.vault_bump
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Staker's token account receiving the payout.
    #[account(
        mut,
        constraint = user_vault.owner == authority.key() @ StakingError::InvalidTokenAccountOwner,
        constraint = user_vault.mint == state.token_mint @ StakingError::MintMismatch
    )]
    pub user_vault: Account<'info, TokenAccount>,

    /// Token program.
    pub token_program: Program<'info, Token>,
}

impl<'info> SettleStake<'info> {
    /// Moves `amount` from the pool vault to the staker, signed by the pool PDA.
    pub fn pay_out(&self, amount: u64) -> Result<()> {
        let seeds = self.pool.signer_seeds();
        let signer_seeds = &[&seeds[..]];

        let cpi_accounts = Transfer {
            from: self.vault.to_account_info(),
            to: self.user_vault.to_account_info(),
            authority: self.pool.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
        token::transfer(cpi_ctx, amount)
    }
}

/// Claim a stake after its lock period.
///
/// # Errors
/// `LockNotElapsed` if `now < created_at + lock_duration`.
pub fn handler(ctx: Context<SettleStake>) -> Result<()> {
    let clock = Clock::get()?;
    let payout = ctx
        .accounts
        .pool
        .settle_claim(&ctx.accounts.stake_info, clock.unix_timestamp)?;

    ctx.accounts.pay_out(payout)?;

    let stake_info = &ctx.accounts.stake_info;
    let pool = &ctx.accounts.pool;

    msg!(
        "Claimed stake #{}: {} principal + {} reward",
        stake_info.stake_index,
        stake_info.amount,
        stake_info.reward_amount
    );
    msg!("Open stakes in pool: {}", pool.count_stakes);

    emit!(StakeClaimed {
        pool: pool.key(),
        stake_info: stake_info.key(),
        user: stake_info.authority,
        amount: stake_info.amount,
        reward_amount: stake_info.reward_amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
