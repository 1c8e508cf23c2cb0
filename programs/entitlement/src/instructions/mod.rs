pub mod initialize_vesting;
pub mod create_schedule;
pub mod draw_down;
pub mod vesting_quote;

pub mod initialize_staking;
pub mod stake;
pub mod unstake;
pub mod claim_rewards;
pub mod staking_quote;
pub mod update_staking_params;

pub mod initialize_airdrop;
pub mod claim_airdrop;
pub mod set_root;

pub mod toggle;
pub mod sweep_foreign;

pub use initialize_vesting::*;
pub use create_schedule::*;
pub use draw_down::*;
pub use vesting_quote::*;

pub use initialize_staking::*;
pub use stake::*;
pub use unstake::*;
pub use claim_rewards::*;
pub use staking_quote::*;
pub use update_staking_params::*;

pub use initialize_airdrop::*;
pub use claim_airdrop::*;
pub use set_root::*;

pub use toggle::*;
pub use sweep_foreign::*;
