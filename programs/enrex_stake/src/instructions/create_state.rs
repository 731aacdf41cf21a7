//! Create state instruction handler.
//!
//! Creates the deployment-wide state record and fixes the administrator and
//! the staked mint for the lifetime of the program.

use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::constants::*;
use crate::error::StakingError;
use crate::events::StateCreated;
use crate::state::State;

/// Accounts required to create the state.
#[derive(Accounts)]
pub struct CreateState<'info> {
    /// Becomes the permanent administrator.
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Singleton state PDA. `init_if_needed` so that a second call reaches
    /// the handler and fails with `AlreadyInitialized`.
    #[account(
        init_if_needed,
        payer = authority,
        space = State::LEN,
        seeds = [STATE_SEED],
        bump
    )]
    pub state: Account<'info, State>,

    /// The mint every pool of this deployment stakes.
    pub token_mint: Account<'info, Mint>,

    /// System program.
    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateState>) -> Result<()> {
    let state = &mut ctx.accounts.state;
    require!(!state.is_initialized(), StakingError::AlreadyInitialized);

    let clock = Clock::get()?;

    state.authority = ctx.accounts.authority.key();
    state.token_mint = ctx.accounts.token_mint.key();
    state.start_time = clock.unix_timestamp;
    state.pool_count = 0;
    state.bump = ctx.bumps.state;

    msg!("Staking state created");
    msg!("Admin: {}", state.authority);
    msg!("Mint: {}", state.token_mint);

    emit!(StateCreated {
        authority: state.authority,
        token_mint: state.token_mint,
        timestamp: clock.unix_timestamp,
    });

    Ok(())
}
