//! Instruction handlers for the Enrex staking program.
//!
//! This module contains all instruction implementations.

pub mod cancel_stake;
pub mod claim_stake;
pub mod create_pool;
pub mod create_state;
pub mod fund_pool;
pub mod stake;
pub mod withdraw_pool;

pub use cancel_stake::*;
pub use claim_stake::*;
pub use create_pool::*;
pub use create_state::*;
pub use fund_pool::*;
pub use stake::*;
pub use withdraw_pool::*;
