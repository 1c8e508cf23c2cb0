use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::error::LedgerError;
use crate::state::{VestingBook, VestingConfig};
use crate::utils::{accrual, transfer};

pub fn draw_down(ctx: Context<DrawDown>) -> Result<()> {
    // Capture AccountInfos before taking mutable borrows.
    let config_ai = ctx.accounts.config.to_account_info();
    let config_bump = ctx.bumps.config;

    let now = Clock::get()?.unix_timestamp;
    let beneficiary = ctx.accounts.beneficiary.key();

    let cfg = &mut ctx.accounts.config;
    require!(cfg.enabled, LedgerError::MechanismDisabled);

    let (releasable, drawn_total) = {
        let mut book = ctx.accounts.book.load_mut()?;
        let count = cfg.beneficiary_count;
        let entry = book
            .find_mut(&beneficiary, count)
            .ok_or(LedgerError::NoScheduleInFlight)?;

        // Completed schedules tolerate further draws as zero-amount no-ops.
        if entry.drawn == entry.principal {
            emit!(DrawnDown {
                beneficiary,
                amount: 0,
                drawn_total: entry.drawn,
            });
            return Ok(());
        }

        let cliff_end = cfg
            .start_ts
            .checked_add(cfg.cliff_duration)
            .ok_or(LedgerError::MathOverflow)?;
        require!(now > cliff_end, LedgerError::CliffNotReached);

        let releasable = accrual::vesting_releasable(
            entry.principal,
            entry.drawn,
            entry.last_drawn_at,
            cfg.start_ts,
            cfg.end_ts,
            cfg.cliff_duration,
            now,
        )?;
        require!(releasable > 0, LedgerError::NothingDue);

        // Drawn accounting assumes full payment, so an underfunded vault must
        // fail loudly rather than under-pay.
        require!(
            ctx.accounts.vault.amount >= releasable,
            LedgerError::InsufficientFunds
        );

        entry.drawn = entry
            .drawn
            .checked_add(releasable)
            .ok_or(LedgerError::MathOverflow)?;
        require!(
            entry.drawn <= entry.principal,
            LedgerError::LedgerInvariantViolated
        );
        entry.last_drawn_at = now;

        (releasable, entry.drawn)
    };

    cfg.total_drawn = cfg
        .total_drawn
        .checked_add(releasable)
        .ok_or(LedgerError::MathOverflow)?;

    // State is final; only now touch the token collaborator.
    let signer_seeds: &[&[&[u8]]] = &[&[b"vesting_config", &[config_bump]]];
    transfer::pay_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.vault,
        &ctx.accounts.beneficiary_token_account,
        config_ai,
        signer_seeds,
        releasable,
    )?;

    emit!(DrawnDown {
        beneficiary,
        amount: releasable,
        drawn_total,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DrawDown<'info> {
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
        constraint = beneficiary_token_account.mint == config.mint @ LedgerError::InvalidTokenMint,
        constraint = beneficiary_token_account.owner == beneficiary.key() @ LedgerError::InvalidTokenAccount,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub beneficiary: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct DrawnDown {
    pub beneficiary: Pubkey,
    pub amount: u64,
    pub drawn_total: u64,
}
