//! Error types for the Enrex staking program.
//!
//! Every rejected precondition maps to its own variant so clients can
//! classify failures without parsing logs.
//!
//! ## Error Code Layout
//! - 6000-6004: Authorization and lifecycle errors
//! - 6005-6007: Reward accounting errors
//! - 6008-6011: Account validation errors
//! - 6012-6013: Math/overflow errors

use anchor_lang::prelude::*;

/// Custom error codes for the Enrex staking program.
///
/// Error codes start at 6000 (Anchor's custom error offset) and follow
/// declaration order.
#[error_code]
pub enum StakingError {
    // ========== Authorization / Lifecycle Errors ==========

    /// [6000] Signer is not the state authority or the stake owner.
    #[msg("Unauthorized: signer does not own this account")]
    Unauthorized,

    /// [6001] The state or pool at this address has already been created.
    #[msg("Account is already initialized")]
    AlreadyInitialized,

    /// [6002] Pools must be created with the next sequential index.
    #[msg("Pool index does not match the next expected pool index")]
    PoolIndexMismatch,

    /// [6003] All 256 pool indexes are taken.
    #[msg("Pool limit reached for this mint")]
    PoolLimitReached,

    /// [6004] The lock period of the stake has not elapsed yet.
    #[msg("Lock period has not elapsed - stake cannot be claimed yet")]
    LockNotElapsed,

    // ========== Reward Accounting Errors ==========

    /// [6005] Principal is smaller than the pool minimum.
    #[msg("Staking amount shouldn't be less than the pool minimum")]
    BelowMinimumStake,

    /// [6006] Reserving this reward would exceed the deposited reward.
    #[msg("Pool reward cannot cover the reward for this stake")]
    InsufficientPoolReward,

    /// [6007] Withdrawal would dip into reward reserved for active stakes.
    #[msg("Cannot withdraw reward reserved for active stakes")]
    InsufficientUnreservedReward,

    // ========== Account Validation Errors ==========

    /// [6008] Mint does not match the mint configured in state.
    #[msg("Token mint mismatch - wrong token for this deployment")]
    MintMismatch,

    /// [6009] Vault does not match the pool's vault.
    #[msg("Pool vault address mismatch")]
    VaultMismatch,

    /// [6010] Stake info belongs to another pool.
    #[msg("Stake info does not belong to this pool")]
    PoolMismatch,

    /// [6011] Token account is not owned by the signer.
    #[msg("Token account owner must be the signer")]
    InvalidTokenAccountOwner,

    // ========== Math/Overflow Errors ==========

    /// [6012] Arithmetic overflow occurred during calculation.
    #[msg("Arithmetic overflow occurred during calculation")]
    MathOverflow,

    /// [6013] Arithmetic underflow occurred during calculation.
    #[msg("Arithmetic underflow occurred during calculation")]
    MathUnderflow,
}
