//! Program address derivation.
//!
//! Every record lives at an address derived from stable seeds, so clients
//! can locate a state, pool, vault or stake without an index account:
//!
//! | Record     | Seeds                                              |
//! |------------|----------------------------------------------------|
//! | State      | `["state"]`                                        |
//! | Pool       | `[mint, pool_index (1 byte)]`                      |
//! | Pool vault | `[mint, pool]`                                     |
//! | StakeInfo  | `["stake-info", pool, staker, stake_index (u64 BE)]` |
//!
//! A new stake's address uses the pool's current `inc_stakes`. Two stakes
//! submitted against the same `inc_stakes` collide on the stake info
//! address and the second one fails; the caller must re-read the pool and
//! retry.

use anchor_lang::prelude::*;

use crate::constants::{STAKE_INFO_SEED, STATE_SEED};

/// Big-endian encoding of a stake index as used in stake info seeds.
pub fn stake_index_seed(stake_index: u64) -> [u8; 8] {
    stake_index.to_be_bytes()
}

pub fn find_state_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STATE_SEED], program_id)
}

pub fn find_pool_address(mint: &Pubkey, pool_index: u8, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[mint.as_ref(), &[pool_index]], program_id)
}

pub fn find_pool_vault_address(mint: &Pubkey, pool: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[mint.as_ref(), pool.as_ref()], program_id)
}

pub fn find_stake_info_address(
    pool: &Pubkey,
    staker: &Pubkey,
    stake_index: u64,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            STAKE_INFO_SEED,
            pool.as_ref(),
            staker.as_ref(),
            &stake_index_seed(stake_index),
        ],
        program_id,
    )
}
