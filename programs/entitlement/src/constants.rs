//! Program-wide constants.

/// Max vesting records stored in the vesting book PDA.
pub const MAX_BENEFICIARIES: usize = 64;

/// Max schedules created per `create_schedule_batch` call.
pub const MAX_BATCH_CREATE: usize = 16;

/// Max records emitted per `emit_vesting_page` call.
pub const MAX_PAGE_SIZE: u8 = 16;

/// Fixed-point denominator for basis-point rates (fees and reward rate).
pub const RATE_DENOMINATOR: u64 = 10_000;

/// Words in the claimed-index bitmap (64 bits each).
pub const BITMAP_WORDS: usize = 64;

/// Airdrop index capacity committed by one root.
pub const MAX_AIRDROP_INDICES: u64 = (BITMAP_WORDS as u64) * 64;
