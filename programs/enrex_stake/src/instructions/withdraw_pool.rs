//! Withdraw pool instruction handler.
//!
//! Lets the admin take back reward that is not reserved for open stakes.

use anchor_lang::prelude::*;
use anchor_spl::token::{self, Transfer};

use crate::events::PoolWithdrawn;
use crate::instructions::fund_pool::PoolReward;

/// Withdraw `amount` of unreserved reward to the admin's token account.
///
/// # Errors
/// `InsufficientUnreservedReward` if `amount` exceeds
/// `amount_reward - amount_reward_reserved`.
pub fn handler(ctx: Context<PoolReward>, amount: u64) -> Result<()> {
    ctx.accounts.pool.withdraw(amount)?;

    let pool = &ctx.accounts.pool;
    let seeds = pool.signer_seeds();
    let signer_seeds = &[&seeds[..]];

    let cpi_accounts = Transfer {
        from: ctx.accounts.vault.to_account_info(),
        to: ctx.accounts.user_vault.to_account_info(),
        authority: pool.to_account_info(),
    };
    let cpi_program = ctx.accounts.token_program.to_account_info();
    let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);
    token::transfer(cpi_ctx, amount)?;

    let clock = Clock::get()?;

    msg!("Withdrew {} reward tokens", amount);
    msg!(
        "Reward: {}, reserved: {}",
        pool.amount_reward,
        pool.amount_reward_reserved
    );

    emit!(PoolWithdrawn {
        pool: pool.key(),
        amount,
        amount_reward: pool.amount_reward,
        amount_reward_reserved: pool.amount_reward_reserved,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
