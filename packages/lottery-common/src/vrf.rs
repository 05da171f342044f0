/// Block confirmations the coordinator waits before answering a request.
pub const REQUEST_CONFIRMATIONS: u16 = 3;

/// Random words requested per round. Only one is needed to pick a winner.
pub const NUM_WORDS: u32 = 1;

/// Upper bound on the gas a consumer may reserve for its fulfilment callback.
pub const MAX_CALLBACK_GAS_LIMIT: u32 = 2_500_000;

/// Validate a key hash (gas lane) and return its raw 32 bytes.
///
/// Accepts an optional `0x` prefix.
pub fn validate_key_hash(key_hash: &str) -> Result<[u8; 32], String> {
    let trimmed = key_hash.strip_prefix("0x").unwrap_or(key_hash);
    let bytes = hex::decode(trimmed).map_err(|e| e.to_string())?;
    bytes
        .try_into()
        .map_err(|b: Vec<u8>| format!("expected 32 bytes, got {}", b.len()))
}
