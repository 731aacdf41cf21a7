use anchor_lang::prelude::*;

use crate::error::StakingError;

/// One stake event. Created by `stake`, closed by `claim_stake` or
/// `cancel_stake`, never modified in between.
///
/// PDA: `["stake-info", pool, authority, stake_index (u64 big-endian)]`
#[account]
#[derive(Default)]
pub struct StakeInfo {
    pub pool: Pubkey,
    /// Staker; the only signer allowed to claim or cancel.
    pub authority: Pubkey,
    /// Locked principal.
    pub amount: u64,
    /// Reward reserved for this stake when it was opened.
    pub reward_amount: u64,
    pub created_at: i64,
    /// Pool's `inc_stakes` at creation, kept so the address can be re-derived.
    pub stake_index: u64,
    pub bump: u8,
}

impl StakeInfo {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 8 + 8 + 8 + 1;

    /// Unix time the stake becomes claimable, or `None` if that lies past
    /// the end of the `i64` clock.
    pub fn unlocks_at(&self, lock_duration: u64) -> Option<i64> {
        let lock = i64::try_from(lock_duration).ok()?;
        self.created_at.checked_add(lock)
    }

    /// A lock that ends beyond the representable clock never elapses.
    pub fn is_unlocked(&self, now: i64, lock_duration: u64) -> bool {
        self.unlocks_at(lock_duration)
            .is_some_and(|unlocks_at| now >= unlocks_at)
    }

    /// Principal plus reserved reward, the amount paid out on claim.
    pub fn claim_amount(&self) -> Result<u64> {
        self.amount
            .checked_add(self.reward_amount)
            .ok_or_else(|| error!(StakingError::MathOverflow))
    }
}
