use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{MAX_BATCH_CREATE, MAX_BENEFICIARIES};
use crate::error::LedgerError;
use crate::state::{VestingBook, VestingConfig, VestingRecord};
use crate::utils::transfer;

pub fn create_schedule(
    ctx: Context<CreateSchedule>,
    beneficiary: Pubkey,
    amount: u64,
) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, LedgerError::Unauthorized);
    require!(cfg.enabled, LedgerError::MechanismDisabled);

    {
        let mut book = ctx.accounts.book.load_mut()?;
        insert_schedule(&mut book, cfg, beneficiary, amount)?;
    }

    // Record first, then pull the backing principal into custody.
    transfer::pull_from_signer(
        &ctx.accounts.token_program,
        &ctx.accounts.admin_token_account,
        &ctx.accounts.vault,
        &ctx.accounts.admin,
        amount,
    )?;

    emit!(ScheduleCreated {
        beneficiary,
        amount,
        total_principal: cfg.total_principal,
    });

    Ok(())
}

pub fn create_schedule_batch(
    ctx: Context<CreateSchedule>,
    beneficiaries: Vec<Pubkey>,
    amounts: Vec<u64>,
) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, LedgerError::Unauthorized);
    require!(cfg.enabled, LedgerError::MechanismDisabled);
    require!(
        beneficiaries.len() == amounts.len(),
        LedgerError::ArrayLengthMismatch
    );
    require!(!beneficiaries.is_empty(), LedgerError::EmptyBatch);
    require!(
        beneficiaries.len() <= MAX_BATCH_CREATE,
        LedgerError::BatchTooLarge
    );

    let mut batch_total: u64 = 0;
    {
        let mut book = ctx.accounts.book.load_mut()?;
        for (beneficiary, amount) in beneficiaries.iter().zip(amounts.iter()) {
            // Entries are appended as they pass, so the duplicate scan also
            // catches repeats within the batch itself. The whole instruction
            // aborts on the first bad entry.
            insert_schedule(&mut book, cfg, *beneficiary, *amount)?;
            batch_total = batch_total
                .checked_add(*amount)
                .ok_or(LedgerError::MathOverflow)?;
        }
    }

    transfer::pull_from_signer(
        &ctx.accounts.token_program,
        &ctx.accounts.admin_token_account,
        &ctx.accounts.vault,
        &ctx.accounts.admin,
        batch_total,
    )?;

    for (beneficiary, amount) in beneficiaries.iter().zip(amounts.iter()) {
        emit!(ScheduleCreated {
            beneficiary: *beneficiary,
            amount: *amount,
            total_principal: cfg.total_principal,
        });
    }

    Ok(())
}

fn insert_schedule(
    book: &mut VestingBook,
    cfg: &mut VestingConfig,
    beneficiary: Pubkey,
    amount: u64,
) -> Result<()> {
    require!(beneficiary != Pubkey::default(), LedgerError::InvalidInput);
    require!(amount > 0, LedgerError::InvalidInput);

    let count = cfg.beneficiary_count as usize;
    require!(count < MAX_BENEFICIARIES, LedgerError::BeneficiaryListFull);

    for e in book.entries.iter().take(count) {
        if e.beneficiary == beneficiary {
            return Err(LedgerError::DuplicateSchedule.into());
        }
    }

    book.entries[count] = VestingRecord {
        beneficiary,
        principal: amount,
        drawn: 0,
        last_drawn_at: 0,
    };
    cfg.beneficiary_count = cfg
        .beneficiary_count
        .checked_add(1)
        .ok_or(LedgerError::MathOverflow)?;
    cfg.total_principal = cfg
        .total_principal
        .checked_add(amount)
        .ok_or(LedgerError::MathOverflow)?;

    Ok(())
}

#[derive(Accounts)]
pub struct CreateSchedule<'info> {
    #[account(mut, seeds = [b"vesting_config"], bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(
        mut,
        seeds = [b"vesting_book", config.key().as_ref()],
        bump
    )]
    pub book: AccountLoader<'info, VestingBook>,

    #[account(
        mut,
        seeds = [b"vesting_vault", config.key().as_ref()],
        bump,
        constraint = vault.mint == config.mint @ LedgerError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = admin_token_account.mint == config.mint @ LedgerError::InvalidTokenMint,
        constraint = admin_token_account.owner == admin.key() @ LedgerError::InvalidTokenAccount,
    )]
    pub admin_token_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct ScheduleCreated {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub total_principal: u64,
}
