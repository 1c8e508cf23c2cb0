use anchor_lang::prelude::*;

use crate::error::LedgerError;
use crate::state::AirdropState;

/// Replaces the committed root. Only legal while the mechanism is disabled so
/// the commitment cannot change under in-flight claims. The claimed bitmap is
/// intentionally NOT reset: indices paid under the old root stay consumed.
pub fn set_airdrop_root(ctx: Context<SetAirdropRoot>, root: [u8; 32]) -> Result<()> {
    require!(root != [0u8; 32], LedgerError::InvalidInput);

    let mut st = ctx.accounts.state.load_mut()?;
    require_keys_eq!(ctx.accounts.admin.key(), st.admin, LedgerError::Unauthorized);
    require!(st.enabled == 0, LedgerError::InvalidInput);

    let old_root = st.root;
    st.root = root;

    emit!(AirdropRootSet {
        admin: st.admin,
        old_root,
        new_root: root,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetAirdropRoot<'info> {
    #[account(mut, seeds = [b"airdrop_state"], bump)]
    pub state: AccountLoader<'info, AirdropState>,

    pub admin: Signer<'info>,
}

#[event]
pub struct AirdropRootSet {
    pub admin: Pubkey,
    pub old_root: [u8; 32],
    pub new_root: [u8; 32],
}
