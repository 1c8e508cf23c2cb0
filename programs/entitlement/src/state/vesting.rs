use anchor_lang::prelude::*;

use crate::constants::MAX_BENEFICIARIES;

/// Vesting schedule configuration PDA. Window parameters are immutable after
/// init; only `enabled` and the running totals change.
#[account]
pub struct VestingConfig {
    /// Principal token mint.
    pub mint: Pubkey,
    /// Admin authority.
    pub admin: Pubkey,
    /// Vesting start timestamp (Unix seconds).
    pub start_ts: i64,
    /// Vesting end timestamp, `end_ts >= start_ts`.
    pub end_ts: i64,
    /// Cliff duration in seconds from `start_ts`.
    pub cliff_duration: i64,
    /// Admin kill switch; disabled blocks schedule creation and drawdowns.
    pub enabled: bool,
    /// Sum of all record principals.
    pub total_principal: u64,
    /// Sum of all record drawn amounts.
    pub total_drawn: u64,
    /// Records in use in the book.
    pub beneficiary_count: u16,
}

impl VestingConfig {
    pub const SIZE: usize =
        32 + // mint
        32 + // admin
        8 +  // start_ts
        8 +  // end_ts
        8 +  // cliff_duration
        1 +  // enabled
        8 +  // total_principal
        8 +  // total_drawn
        2;   // beneficiary_count
}

/// One beneficiary's entitlement. `principal` is set exactly once; zero means
/// the slot is unused. `last_drawn_at == 0` means no draw has happened yet.
#[zero_copy]
#[repr(C)]
pub struct VestingRecord {
    pub beneficiary: Pubkey,
    pub principal: u64,
    pub drawn: u64,
    pub last_drawn_at: i64,
}

/// Fixed-capacity record array PDA. Deterministic insertion order; records are
/// never deleted. `VestingConfig::beneficiary_count` bounds the live prefix.
#[account(zero_copy)]
#[repr(C)]
pub struct VestingBook {
    pub entries: [VestingRecord; MAX_BENEFICIARIES],
}

impl VestingBook {
    /// Space for discriminator + fixed entries array.
    pub const fn space() -> usize {
        8 + core::mem::size_of::<VestingBook>()
    }

    pub fn find(&self, beneficiary: &Pubkey, count: u16) -> Option<&VestingRecord> {
        self.entries
            .iter()
            .take(count as usize)
            .find(|e| e.beneficiary == *beneficiary)
    }

    pub fn find_mut(&mut self, beneficiary: &Pubkey, count: u16) -> Option<&mut VestingRecord> {
        self.entries
            .iter_mut()
            .take(count as usize)
            .find(|e| e.beneficiary == *beneficiary)
    }
}
