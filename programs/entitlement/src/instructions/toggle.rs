use anchor_lang::prelude::*;

use crate::error::LedgerError;
use crate::state::{AirdropState, StakingPool, VestingConfig};

pub const MECH_VESTING: u8 = 0;
pub const MECH_STAKING: u8 = 1;
pub const MECH_AIRDROP: u8 = 2;

pub fn set_vesting_enabled(ctx: Context<ToggleVesting>, enabled: bool) -> Result<()> {
    let cfg = &mut ctx.accounts.config;
    require_keys_eq!(ctx.accounts.admin.key(), cfg.admin, LedgerError::Unauthorized);
    cfg.enabled = enabled;
    emit!(MechanismToggled {
        admin: cfg.admin,
        mechanism: MECH_VESTING,
        enabled,
    });
    Ok(())
}

pub fn set_staking_enabled(ctx: Context<ToggleStaking>, enabled: bool) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    require_keys_eq!(ctx.accounts.admin.key(), pool.admin, LedgerError::Unauthorized);
    pool.enabled = enabled;
    emit!(MechanismToggled {
        admin: pool.admin,
        mechanism: MECH_STAKING,
        enabled,
    });
    Ok(())
}

pub fn set_airdrop_enabled(ctx: Context<ToggleAirdrop>, enabled: bool) -> Result<()> {
    let mut st = ctx.accounts.state.load_mut()?;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, LedgerError::Unauthorized);
    st.enabled = if enabled { 1 } else { 0 };
    emit!(MechanismToggled {
        admin: st.admin,
        mechanism: MECH_AIRDROP,
        enabled,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ToggleVesting<'info> {
    #[account(mut, seeds = [b"vesting_config"], bump)]
    pub config: Account<'info, VestingConfig>,
    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct ToggleStaking<'info> {
    #[account(mut, seeds = [b"staking_pool"], bump)]
    pub pool: Account<'info, StakingPool>,
    pub admin: Signer<'info>,
}

#[derive(Accounts)]
pub struct ToggleAirdrop<'info> {
    #[account(mut, seeds = [b"airdrop_state"], bump)]
    pub state: AccountLoader<'info, AirdropState>,
    pub admin: Signer<'info>,
}

#[event]
pub struct MechanismToggled {
    pub admin: Pubkey,
    pub mechanism: u8,
    pub enabled: bool,
}
