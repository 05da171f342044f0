use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdResult, Storage, WasmMsg};

use crate::msg::{CoordinatorExecuteMsg, CoordinatorQueryMsg};
use crate::state::CONFIG;

/// Parameters of one randomness request.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomnessRequest {
    pub key_hash: String,
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
}

/// Source of the randomness used to pick winners.
///
/// Requests are asynchronous: `request_randomness` only builds the message,
/// and the answer arrives later as a `RawFulfillRandomWords` call from an
/// address for which `is_fulfiller` holds.
pub trait RandomnessOracle {
    /// Returns the id the oracle will assign to the request together with the
    /// message that issues it.
    fn request_randomness(
        &self,
        querier: &QuerierWrapper,
        request: &RandomnessRequest,
    ) -> StdResult<(u64, CosmosMsg)>;

    fn is_fulfiller(&self, sender: &Addr) -> bool;
}

/// Randomness coordinator contract, live or mock.
pub struct VrfCoordinator {
    pub address: Addr,
}

impl VrfCoordinator {
    pub fn load(storage: &dyn Storage) -> StdResult<Self> {
        let config = CONFIG.load(storage)?;
        Ok(VrfCoordinator {
            address: config.vrf_coordinator,
        })
    }
}

impl RandomnessOracle for VrfCoordinator {
    fn request_randomness(
        &self,
        querier: &QuerierWrapper,
        request: &RandomnessRequest,
    ) -> StdResult<(u64, CosmosMsg)> {
        // The request message runs right after this execution in the same
        // transaction, so it is assigned the coordinator's next id.
        let request_id: u64 =
            querier.query_wasm_smart(self.address.to_string(), &CoordinatorQueryMsg::NextRequestId {})?;

        let msg = WasmMsg::Execute {
            contract_addr: self.address.to_string(),
            msg: to_json_binary(&CoordinatorExecuteMsg::RequestRandomWords {
                key_hash: request.key_hash.clone(),
                sub_id: request.subscription_id,
                request_confirmations: request.request_confirmations,
                callback_gas_limit: request.callback_gas_limit,
                num_words: request.num_words,
            })?,
            funds: vec![],
        };

        Ok((request_id, msg.into()))
    }

    fn is_fulfiller(&self, sender: &Addr) -> bool {
        *sender == self.address
    }
}
