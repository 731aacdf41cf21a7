//! Program constants for the Enrex staking program.
//!
//! PDA seeds, time units and the reward formula denominator.

/// Seed for deriving the singleton state PDA
pub const STATE_SEED: &[u8] = b"state";

/// Seed prefix for deriving stake info PDAs
pub const STAKE_INFO_SEED: &[u8] = b"stake-info";

/// Number of seconds in a day
pub const SECONDS_PER_DAY: u64 = 86_400;

/// 365.25 days * 100 (APY is stored as an integer percent)
pub const APY_DENOMINATOR: u64 = 36_525;

/// Pool PDAs take a single index byte, so one mint can never have more pools than this.
pub const MAX_POOLS_PER_MINT: u16 = 256;
