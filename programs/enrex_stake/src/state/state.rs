use anchor_lang::prelude::*;

use crate::constants::MAX_POOLS_PER_MINT;
use crate::error::StakingError;

/// Deployment-wide configuration. One per program, at `["state"]`.
#[account]
#[derive(Default)]
pub struct State {
    /// Administrator allowed to create, fund and drain pools.
    pub authority: Pubkey,
    /// The only mint any pool of this deployment stakes and pays out.
    pub token_mint: Pubkey,
    pub start_time: i64,
    /// Pools created so far; also the index the next pool must use.
    pub pool_count: u16,
    pub bump: u8,
}

impl State {
    pub const LEN: usize = 8 + 32 + 32 + 8 + 2 + 1;

    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }

    /// Accepts `pool_index` only if it is the next sequential index and
    /// bumps the pool count.
    pub fn register_pool(&mut self, pool_index: u8) -> Result<()> {
        require!(
            self.pool_count < MAX_POOLS_PER_MINT,
            StakingError::PoolLimitReached
        );
        require!(
            u16::from(pool_index) == self.pool_count,
            StakingError::PoolIndexMismatch
        );
        self.pool_count = self
            .pool_count
            .checked_add(1)
            .ok_or(StakingError::MathOverflow)?;
        Ok(())
    }
}
