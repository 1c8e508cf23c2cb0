use anchor_lang::prelude::*;

use crate::constants::MAX_PAGE_SIZE;
use crate::error::LedgerError;
use crate::state::{VestingBook, VestingConfig};
use crate::utils::accrual;

pub fn emit_vesting_quote(ctx: Context<VestingQuote>, wallet: Pubkey) -> Result<()> {
    let cfg = &ctx.accounts.config;
    let now = Clock::get()?.unix_timestamp;

    let book = ctx.accounts.book.load()?;
    let entry = book
        .find(&wallet, cfg.beneficiary_count)
        .ok_or(LedgerError::NoScheduleInFlight)?;

    // Pre-cliff the accrual is simply zero; a quote never errors on timing.
    let accrued = accrual::vesting_releasable(
        entry.principal,
        entry.drawn,
        entry.last_drawn_at,
        cfg.start_ts,
        cfg.end_ts,
        cfg.cliff_duration,
        now,
    )?;

    emit!(ClaimableAmount {
        wallet,
        accrued,
        drawn: entry.drawn,
        principal: entry.principal,
    });

    Ok(())
}

/// Paginated read over the record array; replaces unbounded iteration with a
/// bounded page per call.
pub fn emit_vesting_page(ctx: Context<VestingQuote>, offset: u32, limit: u8) -> Result<()> {
    require!(limit > 0 && limit <= MAX_PAGE_SIZE, LedgerError::InvalidInput);

    let cfg = &ctx.accounts.config;
    let count = cfg.beneficiary_count as usize;
    let start = offset as usize;
    require!(start <= count, LedgerError::InvalidInput);
    let end = (start + limit as usize).min(count);

    let book = ctx.accounts.book.load()?;
    for (i, entry) in book.entries[start..end].iter().enumerate() {
        emit!(VestingRecordPage {
            index: (start + i) as u32,
            beneficiary: entry.beneficiary,
            principal: entry.principal,
            drawn: entry.drawn,
            last_drawn_at: entry.last_drawn_at,
        });
    }

    Ok(())
}

#[derive(Accounts)]
pub struct VestingQuote<'info> {
    #[account(seeds = [b"vesting_config"], bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(
        seeds = [b"vesting_book", config.key().as_ref()],
        bump
    )]
    pub book: AccountLoader<'info, VestingBook>,
}

#[event]
pub struct ClaimableAmount {
    pub wallet: Pubkey,
    pub accrued: u64,
    pub drawn: u64,
    pub principal: u64,
}

#[event]
pub struct VestingRecordPage {
    pub index: u32,
    pub beneficiary: Pubkey,
    pub principal: u64,
    pub drawn: u64,
    pub last_drawn_at: i64,
}
