pub mod network;
pub mod types;
pub mod vrf;

pub use network::{is_development_chain, network_config, ConfigError, NetworkConfig};
pub use types::RaffleState;
pub use vrf::{validate_key_hash, MAX_CALLBACK_GAS_LIMIT, NUM_WORDS, REQUEST_CONFIRMATIONS};
