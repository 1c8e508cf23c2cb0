pub mod airdrop;
pub mod staking;
pub mod vesting;

pub use airdrop::*;
pub use staking::*;
pub use vesting::*;
