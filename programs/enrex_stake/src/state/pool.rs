use anchor_lang::prelude::*;

use crate::error::StakingError;
use crate::math::compute_reserved_reward;
use crate::state::StakeInfo;

/// A staking pool for the deployment's mint.
///
/// PDA: `[mint, pool_index]`, vault PDA: `[mint, pool]`.
///
/// Solvency: `amount_reward_reserved <= amount_reward`, and
/// `amount_reward_reserved` equals the sum of `reward_amount` over the
/// pool's open stakes. Every method below checks before it writes, so a
/// returned error leaves the pool untouched.
#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct Pool {
    pub authority: Pubkey,
    pub mint: Pubkey,
    pub vault: Pubkey,

    /// Sum of principal over open stakes.
    pub amount_staked: u64,
    /// Reward deposited by the admin and not yet paid out.
    pub amount_reward: u64,
    /// Part of `amount_reward` promised to open stakes.
    pub amount_reward_reserved: u64,

    pub min_stake_amount: u64,
    pub lock_duration: u64,

    /// Open stakes.
    pub count_stakes: u64,
    /// Only ever increases; seeds the next stake info address.
    pub inc_stakes: u64,

    pub created_at: i64,

    /// Integer percent per year.
    pub apy: u32,
    pub index: u8,
    pub bump: u8,
    pub vault_bump: u8,
}

/// Terms fixed for a new stake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakeTerms {
    pub stake_index: u64,
    pub reward_amount: u64,
}

impl Pool {
    pub const LEN: usize = 8
        + (32 * 3)
        + (8 * 7)
        + 8
        + 4
        + 3;

    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    /// Reward the admin may still withdraw.
    pub fn unreserved_reward(&self) -> u64 {
        self.amount_reward.saturating_sub(self.amount_reward_reserved)
    }

    pub fn is_solvent(&self) -> bool {
        self.amount_reward_reserved <= self.amount_reward
    }

    /// Seeds the pool PDA signs vault transfers with.
    pub fn signer_seeds(&self) -> [&[u8]; 3] {
        [
            self.mint.as_ref(),
            std::slice::from_ref(&self.index),
            std::slice::from_ref(&self.bump),
        ]
    }

    pub fn fund(&mut self, amount: u64) -> Result<()> {
        self.amount_reward = self
            .amount_reward
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }

    /// Releases unreserved reward back to the admin.
    pub fn withdraw(&mut self, amount: u64) -> Result<()> {
        require!(
            amount <= self.unreserved_reward(),
            StakingError::InsufficientUnreservedReward
        );
        self.amount_reward = self
            .amount_reward
            .checked_sub(amount)
            .ok_or(StakingError::MathUnderflow)?;
        Ok(())
    }

    /// Accepts `amount` of principal and reserves its full reward.
    ///
    /// # Errors
    /// - `BelowMinimumStake` if `amount < min_stake_amount`
    /// - `InsufficientPoolReward` if the reward cannot be covered by the
    ///   unreserved reward
    pub fn open_stake(&mut self, amount: u64) -> Result<StakeTerms> {
        require!(
            amount >= self.min_stake_amount,
            StakingError::BelowMinimumStake
        );

        let reward_amount = compute_reserved_reward(amount, self.apy, self.lock_duration)?;
        let amount_reward_reserved = self
            .amount_reward_reserved
            .checked_add(reward_amount)
            .ok_or(StakingError::InsufficientPoolReward)?;
        require!(
            amount_reward_reserved <= self.amount_reward,
            StakingError::InsufficientPoolReward
        );

        let amount_staked = self
            .amount_staked
            .checked_add(amount)
            .ok_or(StakingError::MathOverflow)?;
        let count_stakes = self
            .count_stakes
            .checked_add(1)
            .ok_or(StakingError::MathOverflow)?;
        let inc_stakes = self
            .inc_stakes
            .checked_add(1)
            .ok_or(StakingError::MathOverflow)?;

        let terms = StakeTerms {
            stake_index: self.inc_stakes,
            reward_amount,
        };

        self.amount_reward_reserved = amount_reward_reserved;
        self.amount_staked = amount_staked;
        self.count_stakes = count_stakes;
        self.inc_stakes = inc_stakes;

        Ok(terms)
    }

    /// Closes `stake` with its reward once the lock has elapsed.
    /// Returns the payout (principal + reward).
    pub fn settle_claim(&mut self, stake: &StakeInfo, now: i64) -> Result<u64> {
        require!(
            stake.is_unlocked(now, self.lock_duration),
            StakingError::LockNotElapsed
        );
        let payout = stake.claim_amount()?;

        let amount_staked = self
            .amount_staked
            .checked_sub(stake.amount)
            .ok_or(StakingError::MathUnderflow)?;
        let amount_reward = self
            .amount_reward
            .checked_sub(stake.reward_amount)
            .ok_or(StakingError::MathUnderflow)?;
        let amount_reward_reserved = self
            .amount_reward_reserved
            .checked_sub(stake.reward_amount)
            .ok_or(StakingError::MathUnderflow)?;
        let count_stakes = self
            .count_stakes
            .checked_sub(1)
            .ok_or(StakingError::MathUnderflow)?;

        self.amount_staked = amount_staked;
        self.amount_reward = amount_reward;
        self.amount_reward_reserved = amount_reward_reserved;
        self.count_stakes = count_stakes;

        Ok(payout)
    }

    /// Closes `stake` early. The reward goes back to the unreserved part of
    /// `amount_reward`; only the principal is returned.
    pub fn settle_cancel(&mut self, stake: &StakeInfo) -> Result<u64> {
        let amount_staked = self
            .amount_staked
            .checked_sub(stake.amount)
            .ok_or(StakingError::MathUnderflow)?;
        let amount_reward_reserved = self
            .amount_reward_reserved
            .checked_sub(stake.reward_amount)
            .ok_or(StakingError::MathUnderflow)?;
        let count_stakes = self
            .count_stakes
            .checked_sub(1)
            .ok_or(StakingError::MathUnderflow)?;

        self.amount_staked = amount_staked;
        self.amount_reward_reserved = amount_reward_reserved;
        self.count_stakes = count_stakes;

        Ok(stake.amount)
    }
}
