use cosmwasm_std::Uint256;
use sha2::{Digest, Sha256};

/// Derive `num_words` pseudo-random words for a request.
///
/// `word[i] = sha256(request_id_be || i_be)` read as a big-endian 256-bit
/// integer. Deterministic, so only suitable for local development.
pub fn derive_random_words(request_id: u64, num_words: u32) -> Vec<Uint256> {
    (0..num_words)
        .map(|i| {
            let mut hasher = Sha256::new();
            hasher.update(request_id.to_be_bytes());
            hasher.update(i.to_be_bytes());
            let digest: [u8; 32] = hasher.finalize().into();
            Uint256::from_be_bytes(digest)
        })
        .collect()
}
