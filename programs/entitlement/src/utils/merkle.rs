//! Merkle membership verification for airdrop claims.
//!
//! Leaves commit `(wallet, index, amount)` as a double blake3 hash over the
//! fixed-width little-endian encoding. Interior nodes hash the sorted pair of
//! children, so proofs carry no left/right flags.

use anchor_lang::prelude::*;

/// `blake3(blake3(wallet || index_le || amount_le))`.
pub fn leaf_hash(wallet: &Pubkey, index: u64, amount: u64) -> [u8; 32] {
    let mut data = [0u8; 48];
    data[..32].copy_from_slice(wallet.as_ref());
    data[32..40].copy_from_slice(&index.to_le_bytes());
    data[40..48].copy_from_slice(&amount.to_le_bytes());
    let inner = blake3::hash(&data);
    *blake3::hash(inner.as_bytes()).as_bytes()
}

/// Hash of the lexicographically sorted pair.
pub fn hash_pair(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    let mut buf = [0u8; 64];
    if a <= b {
        buf[..32].copy_from_slice(a);
        buf[32..].copy_from_slice(b);
    } else {
        buf[..32].copy_from_slice(b);
        buf[32..].copy_from_slice(a);
    }
    *blake3::hash(&buf).as_bytes()
}

/// Folds `proof` over `leaf` and compares against `root`.
/// An empty proof verifies iff the leaf is the root (single-leaf tree).
pub fn verify(proof: &[[u8; 32]], root: &[u8; 32], leaf: &[u8; 32]) -> bool {
    let mut node = *leaf;
    for sibling in proof {
        node = hash_pair(&node, sibling);
    }
    node == *root
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wallet(byte: u8) -> Pubkey {
        Pubkey::new_from_array([byte; 32])
    }

    /// Four-leaf tree built by hand; returns (root, leaves).
    fn fixture() -> ([u8; 32], Vec<[u8; 32]>) {
        let leaves: Vec<[u8; 32]> = (0..4u64)
            .map(|i| leaf_hash(&wallet(i as u8 + 1), i, 100 * (i + 1)))
            .collect();
        let n01 = hash_pair(&leaves[0], &leaves[1]);
        let n23 = hash_pair(&leaves[2], &leaves[3]);
        (hash_pair(&n01, &n23), leaves)
    }

    #[test]
    fn valid_proofs_verify() {
        let (root, leaves) = fixture();
        let n01 = hash_pair(&leaves[0], &leaves[1]);
        let n23 = hash_pair(&leaves[2], &leaves[3]);

        assert!(verify(&[leaves[1], n23], &root, &leaves[0]));
        assert!(verify(&[leaves[0], n23], &root, &leaves[1]));
        assert!(verify(&[leaves[3], n01], &root, &leaves[2]));
        assert!(verify(&[leaves[2], n01], &root, &leaves[3]));
    }

    #[test]
    fn tampered_triple_fails() {
        let (root, leaves) = fixture();
        let n23 = hash_pair(&leaves[2], &leaves[3]);
        let proof = [leaves[1], n23];

        // wrong amount
        assert!(!verify(&proof, &root, &leaf_hash(&wallet(1), 0, 101)));
        // wrong index
        assert!(!verify(&proof, &root, &leaf_hash(&wallet(1), 1, 100)));
        // wrong wallet
        assert!(!verify(&proof, &root, &leaf_hash(&wallet(9), 0, 100)));
    }

    #[test]
    fn truncated_or_reordered_proof_fails() {
        let (root, leaves) = fixture();
        let n23 = hash_pair(&leaves[2], &leaves[3]);
        assert!(!verify(&[leaves[1]], &root, &leaves[0]));
        assert!(!verify(&[n23, leaves[1]], &root, &leaves[0]));
    }

    #[test]
    fn single_leaf_tree() {
        let leaf = leaf_hash(&wallet(7), 3, 500);
        assert!(verify(&[], &leaf, &leaf));
        assert!(!verify(&[], &leaf, &leaf_hash(&wallet(7), 3, 501)));
    }

    #[test]
    fn pair_hash_is_order_insensitive() {
        let a = leaf_hash(&wallet(1), 0, 1);
        let b = leaf_hash(&wallet(2), 1, 2);
        assert_eq!(hash_pair(&a, &b), hash_pair(&b, &a));
    }
}
