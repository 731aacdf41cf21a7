use anchor_lang::prelude::*;

/// Emitted once, when the deployment state is created
#[event]
pub struct StateCreated {
    pub authority: Pubkey,
    pub token_mint: Pubkey,
    pub timestamp: i64,
}

/// Emitted when a pool and its vault are created
#[event]
pub struct PoolCreated {
    pub pool: Pubkey,
    pub vault: Pubkey,
    pub pool_index: u8,
    pub apy: u32,
    pub min_stake_amount: u64,
    pub lock_duration: u64,
    pub timestamp: i64,
}

/// Emitted when the admin deposits reward
#[event]
pub struct PoolFunded {
    pub pool: Pubkey,
    pub amount: u64,
    pub amount_reward: u64,
    pub timestamp: i64,
}

/// Emitted when the admin withdraws unreserved reward
#[event]
pub struct PoolWithdrawn {
    pub pool: Pubkey,
    pub amount: u64,
    pub amount_reward: u64,
    pub amount_reward_reserved: u64,
    pub timestamp: i64,
}

/// Emitted when a user opens a stake
#[event]
pub struct Staked {
    pub pool: Pubkey,
    pub stake_info: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub reward_amount: u64,
    pub stake_index: u64,
    pub pool_amount_staked: u64,
    pub timestamp: i64,
}

/// Emitted when a stake is claimed with its reward
#[event]
pub struct StakeClaimed {
    pub pool: Pubkey,
    pub stake_info: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub reward_amount: u64,
    pub timestamp: i64,
}

/// Emitted when a stake is cancelled and its reward forfeited
#[event]
pub struct StakeCancelled {
    pub pool: Pubkey,
    pub stake_info: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub forfeited_reward: u64,
    pub timestamp: i64,
}
