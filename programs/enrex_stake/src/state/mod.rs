//! State structures for the Enrex staking program.
//!
//! This module defines all account structures used to store program state.
//! Token custody lives in one SPL token account per pool (the pool vault),
//! which has no program-defined layout.

pub mod pool;
pub mod stake_info;
pub mod state;

pub use pool::*;
pub use stake_info::*;
pub use state::*;
