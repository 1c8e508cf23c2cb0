use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::error::LedgerError;
use crate::state::{VestingBook, VestingConfig};

pub fn initialize_vesting(
    ctx: Context<InitializeVesting>,
    start_ts: i64,
    end_ts: i64,
    cliff_duration: i64,
) -> Result<()> {
    require!(start_ts > 0, LedgerError::InvalidInput);
    require!(end_ts >= start_ts, LedgerError::InvalidInput);
    require!(cliff_duration >= 0, LedgerError::InvalidInput);

    let cfg = &mut ctx.accounts.config;
    cfg.mint = ctx.accounts.mint.key();
    cfg.admin = ctx.accounts.admin.key();
    cfg.start_ts = start_ts;
    cfg.end_ts = end_ts;
    cfg.cliff_duration = cliff_duration;
    cfg.enabled = true;
    cfg.total_principal = 0;
    cfg.total_drawn = 0;
    cfg.beneficiary_count = 0;

    // Book starts zeroed; a zero principal marks a slot unused.
    ctx.accounts.book.load_init()?;

    emit!(VestingInitialized {
        mint: cfg.mint,
        admin: cfg.admin,
        start_ts,
        end_ts,
        cliff_duration,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeVesting<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + VestingConfig::SIZE,
        seeds = [b"vesting_config"],
        bump
    )]
    pub config: Account<'info, VestingConfig>,

    #[account(
        init,
        payer = admin,
        space = VestingBook::space(),
        seeds = [b"vesting_book", config.key().as_ref()],
        bump
    )]
    pub book: AccountLoader<'info, VestingBook>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = config,
        seeds = [b"vesting_vault", config.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VestingInitialized {
    pub mint: Pubkey,
    pub admin: Pubkey,
    pub start_ts: i64,
    pub end_ts: i64,
    pub cliff_duration: i64,
}
