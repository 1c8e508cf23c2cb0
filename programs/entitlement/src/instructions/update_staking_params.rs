use anchor_lang::prelude::*;

use crate::error::LedgerError;
use crate::instructions::initialize_staking::validate_params;
use crate::state::StakingPool;

pub fn update_staking_params(
    ctx: Context<UpdateStakingParams>,
    reward_rate: u64,
    reward_interval: i64,
    staking_fee_bps: u64,
    unstaking_fee_bps: u64,
    cliff_time: i64,
) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    require_keys_eq!(ctx.accounts.admin.key(), pool.admin, LedgerError::Unauthorized);
    validate_params(
        reward_interval,
        staking_fee_bps,
        unstaking_fee_bps,
        cliff_time,
    )?;

    pool.reward_rate = reward_rate;
    pool.reward_interval = reward_interval;
    pool.staking_fee_bps = staking_fee_bps;
    pool.unstaking_fee_bps = unstaking_fee_bps;
    pool.cliff_time = cliff_time;

    emit!(StakingParamsUpdated {
        admin: pool.admin,
        reward_rate,
        reward_interval,
        staking_fee_bps,
        unstaking_fee_bps,
        cliff_time,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateStakingParams<'info> {
    #[account(mut, seeds = [b"staking_pool"], bump)]
    pub pool: Account<'info, StakingPool>,

    pub admin: Signer<'info>,
}

#[event]
pub struct StakingParamsUpdated {
    pub admin: Pubkey,
    pub reward_rate: u64,
    pub reward_interval: i64,
    pub staking_fee_bps: u64,
    pub unstaking_fee_bps: u64,
    pub cliff_time: i64,
}
