use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Uint128, Uint256};

use crate::state::{CoordinatorConfig, RandomWordsRequest, Subscription};

#[cw_serde]
pub struct InstantiateMsg {
    /// Flat fee per fulfilment, e.g. 0.25 LINK = 250000000000000000
    pub base_fee: Uint128,
    /// Price per unit of callback gas, e.g. 1000000000
    pub gas_price_link: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Open a new subscription owned by the sender.
    CreateSubscription {},
    /// Credit a subscription's balance. Anyone can fund.
    FundSubscription { sub_id: u64, amount: Uint128 },
    /// Allow a contract to request randomness against the subscription (owner only).
    AddConsumer { sub_id: u64, consumer: String },
    /// Revoke a consumer (owner only).
    RemoveConsumer { sub_id: u64, consumer: String },
    /// Delete a subscription (owner only).
    CancelSubscription { sub_id: u64 },
    /// Ask for random words. Must be sent by a registered consumer.
    RequestRandomWords {
        /// Gas lane key hash, hex-encoded
        key_hash: String,
        sub_id: u64,
        request_confirmations: u16,
        callback_gas_limit: u32,
        num_words: u32,
    },
    /// Answer a pending request with words derived from the request id.
    FulfillRandomWords { request_id: u64, consumer: String },
    /// Answer a pending request with caller-supplied words.
    FulfillRandomWordsWithOverride {
        request_id: u64,
        consumer: String,
        words: Vec<Uint256>,
    },
}

/// Grouped arguments of `ExecuteMsg::RequestRandomWords`.
pub struct RequestRandomWordsParams {
    pub key_hash: String,
    pub sub_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
}

/// Callback sent to consumers on fulfilment.
#[cw_serde]
pub enum ConsumerExecuteMsg {
    RawFulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
}

#[cw_serde]
pub struct CreateSubscriptionResponse {
    pub sub_id: u64,
}

#[cw_serde]
pub struct RequestRandomWordsResponse {
    pub request_id: u64,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(CoordinatorConfig)]
    Config {},

    #[returns(Option<Subscription>)]
    Subscription { sub_id: u64 },

    #[returns(bool)]
    ConsumerIsAdded { sub_id: u64, consumer: String },

    #[returns(Option<RandomWordsRequest>)]
    Request { request_id: u64 },

    /// Id the next `RequestRandomWords` will be assigned.
    #[returns(u64)]
    NextRequestId {},
}
