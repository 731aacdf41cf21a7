// Test utilities for the enrex_stake program
//
// The compiled program is loaded from target/deploy; build it first with
// `anchor build` (or `cargo build-sbf`).

#![allow(dead_code)]

use anchor_lang::{AccountDeserialize, InstructionData};
use enrex_stake::state::{Pool, StakeInfo, State};
use litesvm::LiteSVM;
use litesvm_token::{get_spl_account, CreateAssociatedTokenAccount, CreateMint, MintTo};
use solana_sdk::{
    clock::Clock,
    instruction::{AccountMeta, Instruction},
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use solana_system_interface::program::ID as system_program;

// Program ID matching declare_id! (enrex_stake)
pub const PROGRAM_ID: Pubkey = Pubkey::new_from_array(enrex_stake::ID.to_bytes());

pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;

// Token decimals
pub const DECIMALS: u8 = 9;
pub const SCALE: u64 = 1_000_000_000;

pub const DAY: u64 = 86_400;

// Setup LiteSVM with the staking program
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../target/deploy/enrex_stake.so");
    let program_bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("{path}: {e} (build the program with `anchor build` first)"));
    let _ = svm.add_program(PROGRAM_ID, &program_bytes);
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

// ======================== ADDRESSES ========================
// Derived with the program's own pda module; keys cross between the
// program's Pubkey type and the SDK's through their byte form.

fn to_program_key(key: &Pubkey) -> anchor_lang::prelude::Pubkey {
    anchor_lang::prelude::Pubkey::new_from_array(key.to_bytes())
}

fn from_program_key(key: anchor_lang::prelude::Pubkey) -> Pubkey {
    Pubkey::new_from_array(key.to_bytes())
}

pub fn derive_state_pda() -> Pubkey {
    from_program_key(enrex_stake::pda::find_state_address(&enrex_stake::ID).0)
}

pub fn derive_pool_pda(mint: &Pubkey, pool_index: u8) -> Pubkey {
    from_program_key(
        enrex_stake::pda::find_pool_address(&to_program_key(mint), pool_index, &enrex_stake::ID).0,
    )
}

pub fn derive_vault_pda(mint: &Pubkey, pool: &Pubkey) -> Pubkey {
    from_program_key(
        enrex_stake::pda::find_pool_vault_address(
            &to_program_key(mint),
            &to_program_key(pool),
            &enrex_stake::ID,
        )
        .0,
    )
}

pub fn derive_stake_info_pda(pool: &Pubkey, staker: &Pubkey, stake_index: u64) -> Pubkey {
    from_program_key(
        enrex_stake::pda::find_stake_info_address(
            &to_program_key(pool),
            &to_program_key(staker),
            stake_index,
            &enrex_stake::ID,
        )
        .0,
    )
}

// ======================== INSTRUCTIONS ========================

pub fn build_create_state_ix(authority: &Pubkey, mint: &Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new(derive_state_pda(), false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: enrex_stake::instruction::CreateState {}.data(),
    }
}

pub fn build_create_pool_ix(
    authority: &Pubkey,
    mint: &Pubkey,
    pool_index: u8,
    apy: u32,
    min_stake_amount: u64,
    lock_duration: u64,
) -> Instruction {
    let pool = derive_pool_pda(mint, pool_index);
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new(derive_state_pda(), false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(pool, false),
            AccountMeta::new(derive_vault_pda(mint, &pool), false),
            AccountMeta::new_readonly(system_program, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data: enrex_stake::instruction::CreatePool {
            pool_index,
            apy,
            min_stake_amount,
            lock_duration,
        }
        .data(),
    }
}

fn pool_reward_accounts(
    authority: &Pubkey,
    mint: &Pubkey,
    pool_index: u8,
    user_vault: &Pubkey,
) -> Vec<AccountMeta> {
    let pool = derive_pool_pda(mint, pool_index);
    vec![
        AccountMeta::new(*authority, true),
        AccountMeta::new_readonly(derive_state_pda(), false),
        AccountMeta::new(pool, false),
        AccountMeta::new(derive_vault_pda(mint, &pool), false),
        AccountMeta::new(*user_vault, false),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
    ]
}

pub fn build_fund_pool_ix(
    authority: &Pubkey,
    mint: &Pubkey,
    pool_index: u8,
    user_vault: &Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: pool_reward_accounts(authority, mint, pool_index, user_vault),
        data: enrex_stake::instruction::FundPool { amount }.data(),
    }
}

pub fn build_withdraw_pool_ix(
    authority: &Pubkey,
    mint: &Pubkey,
    pool_index: u8,
    user_vault: &Pubkey,
    amount: u64,
) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: pool_reward_accounts(authority, mint, pool_index, user_vault),
        data: enrex_stake::instruction::WithdrawPool { amount }.data(),
    }
}

pub fn build_stake_ix(
    staker: &Pubkey,
    mint: &Pubkey,
    pool_index: u8,
    stake_index: u64,
    user_vault: &Pubkey,
    amount: u64,
) -> Instruction {
    let pool = derive_pool_pda(mint, pool_index);
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*staker, true),
            AccountMeta::new_readonly(derive_state_pda(), false),
            AccountMeta::new(pool, false),
            AccountMeta::new(derive_stake_info_pda(&pool, staker, stake_index), false),
            AccountMeta::new(derive_vault_pda(mint, &pool), false),
            AccountMeta::new(*user_vault, false),
            AccountMeta::new_readonly(system_program, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data: enrex_stake::instruction::Stake { amount }.data(),
    }
}

/// Accounts for claim_stake / cancel_stake. `signer` may differ from the
/// stake's owner to exercise the owner check.
fn settle_accounts(
    signer: &Pubkey,
    mint: &Pubkey,
    pool_index: u8,
    stake_info: &Pubkey,
    user_vault: &Pubkey,
) -> Vec<AccountMeta> {
    let pool = derive_pool_pda(mint, pool_index);
    vec![
        AccountMeta::new(*signer, true),
        AccountMeta::new_readonly(derive_state_pda(), false),
        AccountMeta::new(pool, false),
        AccountMeta::new(*stake_info, false),
        AccountMeta::new(derive_vault_pda(mint, &pool), false),
        AccountMeta::new(*user_vault, false),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
    ]
}

pub fn build_claim_stake_ix(
    signer: &Pubkey,
    mint: &Pubkey,
    pool_index: u8,
    stake_info: &Pubkey,
    user_vault: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: settle_accounts(signer, mint, pool_index, stake_info, user_vault),
        data: enrex_stake::instruction::ClaimStake {}.data(),
    }
}

pub fn build_cancel_stake_ix(
    signer: &Pubkey,
    mint: &Pubkey,
    pool_index: u8,
    stake_info: &Pubkey,
    user_vault: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: settle_accounts(signer, mint, pool_index, stake_info, user_vault),
        data: enrex_stake::instruction::CancelStake {}.data(),
    }
}

// ======================== TRANSACTIONS ========================

/// Send a transaction and expect success
pub fn send_tx(svm: &mut LiteSVM, ix: Instruction, signer: &Keypair) {
    svm.expire_blockhash();
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&signer.pubkey()),
        &[signer],
        svm.latest_blockhash(),
    );
    let result = svm.send_transaction(tx);
    assert!(result.is_ok(), "Transaction failed: {:?}", result.err());
}

/// Send a transaction and expect failure; returns the debug-formatted error
pub fn send_tx_expect_failure(svm: &mut LiteSVM, ix: Instruction, signer: &Keypair) -> String {
    svm.expire_blockhash();
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&signer.pubkey()),
        &[signer],
        svm.latest_blockhash(),
    );
    let result = svm.send_transaction(tx);
    assert!(result.is_err(), "Transaction should have failed");
    format!("{:?}", result.err().unwrap())
}

/// Send a transaction and expect it to fail with the given custom error code
pub fn send_tx_expect_error(svm: &mut LiteSVM, ix: Instruction, signer: &Keypair, code: u32) {
    let err = send_tx_expect_failure(svm, ix, signer);
    assert!(
        err.contains(&format!("Custom({code})")),
        "expected custom error {code}, got {err}"
    );
}

// ======================== STATE ========================

pub fn fetch_state(svm: &LiteSVM) -> State {
    let account = svm.get_account(&derive_state_pda()).expect("state exists");
    State::try_deserialize(&mut account.data.as_slice()).expect("state decodes")
}

pub fn fetch_pool(svm: &LiteSVM, pool: &Pubkey) -> Pool {
    let account = svm.get_account(pool).expect("pool exists");
    Pool::try_deserialize(&mut account.data.as_slice()).expect("pool decodes")
}

pub fn fetch_stake_info(svm: &LiteSVM, stake_info: &Pubkey) -> StakeInfo {
    let account = svm.get_account(stake_info).expect("stake info exists");
    StakeInfo::try_deserialize(&mut account.data.as_slice()).expect("stake info decodes")
}

pub fn is_closed(svm: &LiteSVM, address: &Pubkey) -> bool {
    svm.get_account(address)
        .map_or(true, |account| account.lamports == 0)
}

pub fn token_balance(svm: &LiteSVM, token_account: &Pubkey) -> u64 {
    let account: spl_token::state::Account =
        get_spl_account(svm, token_account).expect("token account exists");
    account.amount
}

pub fn advance_clock(svm: &mut LiteSVM, seconds: u64) {
    let mut clock = svm.get_sysvar::<Clock>();
    clock.unix_timestamp += seconds as i64;
    svm.set_sysvar(&clock);
}

// ======================== FIXTURE ========================

/// A deployment with state created, the admin holding `admin_balance`
/// tokens of the staked mint.
pub struct Deployment {
    pub svm: LiteSVM,
    pub admin: Keypair,
    pub mint: Pubkey,
    pub admin_vault: Pubkey,
}

impl Deployment {
    pub fn new(admin_balance: u64) -> Self {
        let mut svm = setup_svm();
        let admin = create_funded_account(&mut svm, 10 * LAMPORTS_PER_SOL);

        let mint = CreateMint::new(&mut svm, &admin)
            .authority(&admin.pubkey())
            .decimals(DECIMALS)
            .send()
            .expect("Failed to create mint");

        send_tx(&mut svm, build_create_state_ix(&admin.pubkey(), &mint), &admin);

        let admin_vault = CreateAssociatedTokenAccount::new(&mut svm, &admin, &mint)
            .owner(&admin.pubkey())
            .send()
            .expect("Failed to create admin ATA");
        MintTo::new(&mut svm, &admin, &mint, &admin_vault, admin_balance)
            .owner(&admin)
            .send()
            .expect("Failed to mint to admin");

        Self {
            svm,
            admin,
            mint,
            admin_vault,
        }
    }

    /// Funded keypair with an ATA of the staked mint holding `balance`.
    pub fn create_user(&mut self, balance: u64) -> (Keypair, Pubkey) {
        let user = create_funded_account(&mut self.svm, 10 * LAMPORTS_PER_SOL);
        let vault = CreateAssociatedTokenAccount::new(&mut self.svm, &user, &self.mint)
            .owner(&user.pubkey())
            .send()
            .expect("Failed to create user ATA");
        if balance > 0 {
            MintTo::new(&mut self.svm, &self.admin, &self.mint, &vault, balance)
                .owner(&self.admin)
                .send()
                .expect("Failed to mint to user");
        }
        (user, vault)
    }

    pub fn create_pool(&mut self, pool_index: u8, apy: u32, min_stake_amount: u64, lock_duration: u64) -> Pubkey {
        let ix = build_create_pool_ix(
            &self.admin.pubkey(),
            &self.mint,
            pool_index,
            apy,
            min_stake_amount,
            lock_duration,
        );
        send_tx(&mut self.svm, ix, &self.admin);
        derive_pool_pda(&self.mint, pool_index)
    }

    pub fn fund_pool(&mut self, pool_index: u8, amount: u64) {
        let ix = build_fund_pool_ix(
            &self.admin.pubkey(),
            &self.mint,
            pool_index,
            &self.admin_vault,
            amount,
        );
        send_tx(&mut self.svm, ix, &self.admin);
    }

    /// Stakes with the pool's current `inc_stakes` and returns the stake info address.
    pub fn stake(&mut self, user: &Keypair, user_vault: &Pubkey, pool_index: u8, amount: u64) -> Pubkey {
        let pool = derive_pool_pda(&self.mint, pool_index);
        let stake_index = fetch_pool(&self.svm, &pool).inc_stakes;
        let ix = build_stake_ix(&user.pubkey(), &self.mint, pool_index, stake_index, user_vault, amount);
        send_tx(&mut self.svm, ix, user);
        derive_stake_info_pda(&pool, &user.pubkey(), stake_index)
    }
}
