use anchor_lang::prelude::*;

use crate::constants::BITMAP_WORDS;
use crate::error::LedgerError;
use crate::utils::merkle;

/// Airdrop commitment and claimed-index bitmap. The `(wallet, index, amount)`
/// triples live off-chain in the committed tree; on-chain state is one bit per
/// index plus aggregates.
#[account(zero_copy)]
#[repr(C)]
pub struct AirdropState {
    /// Distributed token mint.
    pub mint: Pubkey,
    /// Admin authority.
    pub admin: Pubkey,
    /// Merkle root commitment over all claimable triples.
    pub root: [u8; 32],
    /// Lifetime amount paid out.
    pub total_claimed: u64,
    /// Number of indices claimed.
    pub claim_count: u64,
    /// Admin kill switch (1 = enabled). u8 for zero-copy layout.
    pub enabled: u8,
    pub _padding: [u8; 7],
    /// One bit per committed index, `0 -> 1` exactly once.
    pub claimed_bitmap: [u64; BITMAP_WORDS],
}

impl AirdropState {
    pub const fn space() -> usize {
        8 + core::mem::size_of::<AirdropState>()
    }

    /// Caller must bounds-check `index` against `MAX_AIRDROP_INDICES`.
    pub fn is_claimed(&self, index: u64) -> bool {
        let word = (index / 64) as usize;
        let bit = index % 64;
        self.claimed_bitmap[word] & (1u64 << bit) != 0
    }

    pub fn set_claimed(&mut self, index: u64) {
        let word = (index / 64) as usize;
        let bit = index % 64;
        self.claimed_bitmap[word] |= 1u64 << bit;
    }

    /// Admits a `(wallet, index, amount)` claim at most once per index. An
    /// already-claimed index is rejected before the proof is even looked at,
    /// so a repeat submission fails `AlreadyClaimed` whatever proof or amount
    /// it carries.
    pub fn authorize_claim(
        &self,
        index: u64,
        wallet: &Pubkey,
        amount: u64,
        proof: &[[u8; 32]],
    ) -> Result<()> {
        require!(!self.is_claimed(index), LedgerError::AlreadyClaimed);
        let leaf = merkle::leaf_hash(wallet, index, amount);
        require!(
            merkle::verify(proof, &self.root, &leaf),
            LedgerError::InvalidProof
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MAX_AIRDROP_INDICES;
    use bytemuck::Zeroable;

    #[test]
    fn bitmap_starts_unclaimed() {
        let st = AirdropState::zeroed();
        for index in [0, 1, 63, 64, 65, MAX_AIRDROP_INDICES - 1] {
            assert!(!st.is_claimed(index));
        }
    }

    #[test]
    fn set_claimed_is_sticky_and_isolated() {
        let mut st = AirdropState::zeroed();
        for index in [0, 63, 64, 4095] {
            st.set_claimed(index);
            assert!(st.is_claimed(index));
            // setting again keeps the bit
            st.set_claimed(index);
            assert!(st.is_claimed(index));
        }
        // word-boundary neighbors untouched
        assert!(!st.is_claimed(1));
        assert!(!st.is_claimed(62));
        assert!(!st.is_claimed(65));
        assert!(!st.is_claimed(4094));
    }

    /// Two-leaf tree committing `(wallet, 3, 500)`; returns state and proof.
    fn gated_state() -> (AirdropState, Pubkey, [[u8; 32]; 1]) {
        let wallet = Pubkey::new_from_array([7u8; 32]);
        let leaf = merkle::leaf_hash(&wallet, 3, 500);
        let sibling = merkle::leaf_hash(&Pubkey::new_from_array([8u8; 32]), 1, 200);
        let mut st = AirdropState::zeroed();
        st.root = merkle::hash_pair(&leaf, &sibling);
        (st, wallet, [sibling])
    }

    #[test]
    fn repeat_claim_is_rejected() {
        let (mut st, wallet, proof) = gated_state();

        // first submission passes and marks the index
        st.authorize_claim(3, &wallet, 500, &proof).unwrap();
        st.set_claimed(3);

        // the identical second submission fails as already claimed
        let err = st.authorize_claim(3, &wallet, 500, &proof).unwrap_err();
        assert_eq!(err, Error::from(LedgerError::AlreadyClaimed));
        // as does any other amount for the same index
        let err = st.authorize_claim(3, &wallet, 9_999, &proof).unwrap_err();
        assert_eq!(err, Error::from(LedgerError::AlreadyClaimed));
    }

    #[test]
    fn unproven_claim_is_rejected() {
        let (st, wallet, proof) = gated_state();
        let err = st.authorize_claim(3, &wallet, 501, &proof).unwrap_err();
        assert_eq!(err, Error::from(LedgerError::InvalidProof));
    }
}
