//! Cancel stake instruction handler.
//!
//! Returns the principal at any time and forfeits the reserved reward,
//! which stays in the pool for future stakers.

use anchor_lang::prelude::*;

use crate::events::StakeCancelled;
use crate::instructions::claim_stake::SettleStake;

/// Cancel a stake before (or instead of) claiming it.
pub fn handler(ctx: Context<SettleStake>) -> Result<()> {
    let clock = Clock::get()?;
    let payout = ctx
        .accounts
        .pool
        .settle_cancel(&ctx.accounts.stake_info)?;

    ctx.accounts.pay_out(payout)?;

    let stake_info = &ctx.accounts.stake_info;
    let pool = &ctx.accounts.pool;

    msg!(
        "Cancelled stake #{}: returned {}, forfeited {}",
        stake_info.stake_index,
        payout,
        stake_info.reward_amount
    );
    msg!("Open stakes in pool: {}", pool.count_stakes);

    emit!(StakeCancelled {
        pool: pool.key(),
        stake_info: stake_info.key(),
        user: stake_info.authority,
        amount: payout,
        forfeited_reward: stake_info.reward_amount,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
