use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::RATE_DENOMINATOR;
use crate::error::LedgerError;
use crate::state::StakingPool;

pub fn initialize_staking(
    ctx: Context<InitializeStaking>,
    reward_rate: u64,
    reward_interval: i64,
    staking_fee_bps: u64,
    unstaking_fee_bps: u64,
    cliff_time: i64,
) -> Result<()> {
    validate_params(
        reward_interval,
        staking_fee_bps,
        unstaking_fee_bps,
        cliff_time,
    )?;

    let pool = &mut ctx.accounts.pool;
    pool.mint = ctx.accounts.mint.key();
    pool.admin = ctx.accounts.admin.key();
    pool.reward_rate = reward_rate;
    pool.reward_interval = reward_interval;
    pool.staking_fee_bps = staking_fee_bps;
    pool.unstaking_fee_bps = unstaking_fee_bps;
    pool.cliff_time = cliff_time;
    pool.enabled = true;
    pool.total_staked = 0;
    pool.total_claimed_rewards = 0;
    pool.staker_count = 0;

    emit!(StakingInitialized {
        mint: pool.mint,
        admin: pool.admin,
        reward_rate,
        reward_interval,
        staking_fee_bps,
        unstaking_fee_bps,
        cliff_time,
    });

    Ok(())
}

pub(crate) fn validate_params(
    reward_interval: i64,
    staking_fee_bps: u64,
    unstaking_fee_bps: u64,
    cliff_time: i64,
) -> Result<()> {
    require!(reward_interval > 0, LedgerError::InvalidInput);
    require!(staking_fee_bps <= RATE_DENOMINATOR, LedgerError::InvalidInput);
    require!(unstaking_fee_bps <= RATE_DENOMINATOR, LedgerError::InvalidInput);
    require!(cliff_time >= 0, LedgerError::InvalidInput);
    Ok(())
}

#[derive(Accounts)]
pub struct InitializeStaking<'info> {
    #[account(
        init,
        payer = admin,
        space = 8 + StakingPool::SIZE,
        seeds = [b"staking_pool"],
        bump
    )]
    pub pool: Account<'info, StakingPool>,

    #[account(
        init,
        payer = admin,
        token::mint = mint,
        token::authority = pool,
        seeds = [b"staking_vault", pool.key().as_ref()],
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
pub struct StakingInitialized {
    pub mint: Pubkey,
    pub admin: Pubkey,
    pub reward_rate: u64,
    pub reward_interval: i64,
    pub staking_fee_bps: u64,
    pub unstaking_fee_bps: u64,
    pub cliff_time: i64,
}
