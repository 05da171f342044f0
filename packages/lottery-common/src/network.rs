use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;
use thiserror::Error;

use crate::vrf::{validate_key_hash, MAX_CALLBACK_GAS_LIMIT};

/// Chains where the coordinator mock is deployed instead of a live coordinator.
pub const DEVELOPMENT_CHAINS: &[&str] = &["injective-777"];

/// 0.01 INJ (18 decimals).
pub const DEFAULT_ENTRANCE_FEE: u128 = 10_000_000_000_000_000;

pub const DEFAULT_DENOM: &str = "inj";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("no deployment target configured for chain {chain_id}")]
    UnknownChain { chain_id: String },

    #[error("invalid network config for {network}: {field} {reason}")]
    Invalid {
        network: String,
        field: String,
        reason: String,
    },
}

/// Deployment parameters for one target network.
#[cw_serde]
pub struct NetworkConfig {
    pub name: String,
    pub chain_id: String,
    /// Blocks to wait after a deployment transaction
    pub block_confirmations: u64,
    pub entrance_fee: Uint128,
    pub denom: String,
    /// Key hash selecting the coordinator's gas lane, hex-encoded
    pub gas_lane: String,
    pub callback_gas_limit: u32,
    /// Seconds between rounds
    pub interval: u64,
    /// Existing subscription; created by the deployer on development chains
    pub subscription_id: Option<u64>,
    /// Live coordinator address; the mock is deployed on development chains
    pub vrf_coordinator: Option<String>,
}

impl NetworkConfig {
    pub fn local() -> Self {
        NetworkConfig {
            name: "localinjective".to_string(),
            chain_id: "injective-777".to_string(),
            block_confirmations: 1,
            entrance_fee: Uint128::new(DEFAULT_ENTRANCE_FEE),
            denom: DEFAULT_DENOM.to_string(),
            gas_lane: "474e34a077df58807dbe9c96d3c009b23b3c6d0cce433e59bbf5b34f823bc56c"
                .to_string(),
            callback_gas_limit: 500_000,
            interval: 30,
            subscription_id: None,
            vrf_coordinator: None,
        }
    }

    pub fn testnet() -> Self {
        NetworkConfig {
            name: "injective-testnet".to_string(),
            chain_id: "injective-888".to_string(),
            block_confirmations: 6,
            entrance_fee: Uint128::new(DEFAULT_ENTRANCE_FEE),
            denom: DEFAULT_DENOM.to_string(),
            gas_lane: "787d74caea10b2b357790d5b5247c2f63d1d91572a9846f780606e4d953677ae"
                .to_string(),
            callback_gas_limit: 500_000,
            interval: 30,
            subscription_id: Some(1),
            vrf_coordinator: Some(
                "inj1qg5ega6dykkxc307y25pecuufrjkxkaggkkxh7".to_string(),
            ),
        }
    }

    pub fn is_development(&self) -> bool {
        is_development_chain(&self.chain_id)
    }

    /// Check that the record can be used to deploy the lottery.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |field: &str, reason: String| ConfigError::Invalid {
            network: self.name.clone(),
            field: field.to_string(),
            reason,
        };

        if self.entrance_fee.is_zero() {
            return Err(invalid("entrance_fee", "must be greater than zero".to_string()));
        }
        if self.denom.is_empty() {
            return Err(invalid("denom", "must not be empty".to_string()));
        }
        if self.interval == 0 {
            return Err(invalid("interval", "must be greater than zero".to_string()));
        }
        if self.callback_gas_limit == 0 || self.callback_gas_limit > MAX_CALLBACK_GAS_LIMIT {
            return Err(invalid(
                "callback_gas_limit",
                format!("must be in 1..={MAX_CALLBACK_GAS_LIMIT}"),
            ));
        }
        validate_key_hash(&self.gas_lane).map_err(|e| invalid("gas_lane", e))?;

        if !self.is_development() {
            if self.vrf_coordinator.as_deref().map_or(true, str::is_empty) {
                return Err(invalid(
                    "vrf_coordinator",
                    "is required outside development chains".to_string(),
                ));
            }
            if self.subscription_id.is_none() {
                return Err(invalid(
                    "subscription_id",
                    "is required outside development chains".to_string(),
                ));
            }
        }

        Ok(())
    }
}

pub fn is_development_chain(chain_id: &str) -> bool {
    DEVELOPMENT_CHAINS.contains(&chain_id)
}

/// Look up and validate the deployment target for `chain_id`.
pub fn network_config(chain_id: &str) -> Result<NetworkConfig, ConfigError> {
    let config = [NetworkConfig::local(), NetworkConfig::testnet()]
        .into_iter()
        .find(|c| c.chain_id == chain_id)
        .ok_or_else(|| ConfigError::UnknownChain {
            chain_id: chain_id.to_string(),
        })?;
    config.validate()?;
    Ok(config)
}
