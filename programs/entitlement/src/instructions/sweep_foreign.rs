use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::error::LedgerError;
use crate::state::{AirdropState, StakingPool, VestingConfig};
use crate::utils::transfer;

/// Recovers tokens of a foreign mint that were sent to an account owned by a
/// mechanism PDA. The mechanism's own principal/reward mint is never sweepable.

pub fn sweep_foreign_vesting(ctx: Context<SweepForeignVesting>) -> Result<()> {
    let cfg = &ctx.accounts.config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, LedgerError::Unauthorized);

    let signer_seeds: &[&[&[u8]]] = &[&[b"vesting_config", &[ctx.bumps.config]]];
    let amount = sweep(
        &ctx.accounts.token_program,
        cfg.mint,
        cfg.key(),
        ctx.accounts.config.to_account_info(),
        signer_seeds,
        &ctx.accounts.foreign_account,
        &ctx.accounts.admin_destination,
        cfg.admin,
    )?;

    emit!(ForeignSwept {
        admin: cfg.admin,
        mint: ctx.accounts.foreign_account.mint,
        amount,
    });
    Ok(())
}

pub fn sweep_foreign_staking(ctx: Context<SweepForeignStaking>) -> Result<()> {
    let pool = &ctx.accounts.pool;
    require_keys_eq!(ctx.accounts.admin.key(), pool.admin, LedgerError::Unauthorized);

    let signer_seeds: &[&[&[u8]]] = &[&[b"staking_pool", &[ctx.bumps.pool]]];
    let amount = sweep(
        &ctx.accounts.token_program,
        pool.mint,
        pool.key(),
        ctx.accounts.pool.to_account_info(),
        signer_seeds,
        &ctx.accounts.foreign_account,
        &ctx.accounts.admin_destination,
        pool.admin,
    )?;

    emit!(ForeignSwept {
        admin: pool.admin,
        mint: ctx.accounts.foreign_account.mint,
        amount,
    });
    Ok(())
}

pub fn sweep_foreign_airdrop(ctx: Context<SweepForeignAirdrop>) -> Result<()> {
    let (admin, mint) = {
        let st = ctx.accounts.state.load()?;
        require_keys_eq!(ctx.accounts.admin.key(), st.admin, LedgerError::Unauthorized);
        (st.admin, st.mint)
    };

    let signer_seeds: &[&[&[u8]]] = &[&[b"airdrop_state", &[ctx.bumps.state]]];
    let amount = sweep(
        &ctx.accounts.token_program,
        mint,
        ctx.accounts.state.key(),
        ctx.accounts.state.to_account_info(),
        signer_seeds,
        &ctx.accounts.foreign_account,
        &ctx.accounts.admin_destination,
        admin,
    )?;

    emit!(ForeignSwept {
        admin,
        mint: ctx.accounts.foreign_account.mint,
        amount,
    });
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn sweep<'info>(
    token_program: &Program<'info, Token>,
    principal_mint: Pubkey,
    authority_key: Pubkey,
    authority_ai: AccountInfo<'info>,
    signer_seeds: &[&[&[u8]]],
    foreign_account: &Account<'info, TokenAccount>,
    destination: &Account<'info, TokenAccount>,
    admin: Pubkey,
) -> Result<u64> {
    require!(
        foreign_account.mint != principal_mint,
        LedgerError::SweepPrincipalDenied
    );
    require_keys_eq!(
        foreign_account.owner,
        authority_key,
        LedgerError::InvalidTokenAccount
    );
    require_keys_eq!(
        destination.mint,
        foreign_account.mint,
        LedgerError::InvalidTokenMint
    );
    require_keys_eq!(destination.owner, admin, LedgerError::InvalidTokenAccount);

    let amount = foreign_account.amount;
    transfer::pay_from_vault(
        token_program,
        foreign_account,
        destination,
        authority_ai,
        signer_seeds,
        amount,
    )?;
    Ok(amount)
}

#[derive(Accounts)]
pub struct SweepForeignVesting<'info> {
    #[account(seeds = [b"vesting_config"], bump)]
    pub config: Account<'info, VestingConfig>,

    #[account(mut)]
    pub foreign_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin_destination: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct SweepForeignStaking<'info> {
    #[account(seeds = [b"staking_pool"], bump)]
    pub pool: Account<'info, StakingPool>,

    #[account(mut)]
    pub foreign_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin_destination: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[derive(Accounts)]
pub struct SweepForeignAirdrop<'info> {
    #[account(seeds = [b"airdrop_state"], bump)]
    pub state: AccountLoader<'info, AirdropState>,

    #[account(mut)]
    pub foreign_account: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin_destination: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct ForeignSwept {
    pub admin: Pubkey,
    pub mint: Pubkey,
    pub amount: u64,
}
