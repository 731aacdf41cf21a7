//! Reward arithmetic.
//!
//! Rewards are fixed when a stake is opened: the full reward for the lock
//! period is computed up front and reserved out of the pool's deposited
//! reward, so nothing accrues over time.

use anchor_lang::prelude::*;

use crate::constants::{APY_DENOMINATOR, SECONDS_PER_DAY};
use crate::error::StakingError;

/// Reward reserved for `staked_amount` locked for `lock_duration` seconds at
/// `apy` percent per year.
///
/// `reward = staked_amount * apy * lock_days / 36525` where
/// `lock_days = lock_duration / 86400`. The whole numerator is multiplied
/// out in `u128` before the single division, so partial days still count
/// and the only rounding is the final floor.
///
/// # Errors
/// Returns `MathOverflow` if the intermediate product overflows `u128` or
/// the reward does not fit in a `u64`.
pub fn compute_reserved_reward(staked_amount: u64, apy: u32, lock_duration: u64) -> Result<u64> {
    let numerator = u128::from(staked_amount)
        .checked_mul(u128::from(apy))
        .ok_or(StakingError::MathOverflow)?
        .checked_mul(u128::from(lock_duration))
        .ok_or(StakingError::MathOverflow)?;

    let denominator = u128::from(SECONDS_PER_DAY)
        .checked_mul(u128::from(APY_DENOMINATOR))
        .ok_or(StakingError::MathOverflow)?;

    let reward = numerator
        .checked_div(denominator)
        .ok_or(StakingError::MathOverflow)?;

    u64::try_from(reward).map_err(|_| error!(StakingError::MathOverflow))
}
