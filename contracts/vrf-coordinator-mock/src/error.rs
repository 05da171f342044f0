use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("invalid subscription {sub_id}")]
    InvalidSubscription { sub_id: u64 },

    #[error("only the owner of subscription {sub_id} can do this")]
    MustBeSubOwner { sub_id: u64 },

    #[error("{consumer} is not a consumer of subscription {sub_id}")]
    InvalidConsumer { sub_id: u64, consumer: String },

    #[error("subscription {sub_id} already has the maximum number of consumers")]
    TooManyConsumers { sub_id: u64 },

    #[error("num words too big: requested {have}, max {max}")]
    NumWordsTooBig { have: u32, max: u32 },

    #[error("gas limit too big: requested {have}, max {max}")]
    GasLimitTooBig { have: u32, max: u32 },

    #[error("nonexistent request")]
    NonexistentRequest { request_id: u64 },

    #[error("insufficient balance on subscription {sub_id}: need {needed}, have {available}")]
    InsufficientBalance {
        sub_id: u64,
        needed: Uint128,
        available: Uint128,
    },

    #[error("invalid hex input: {field}")]
    InvalidHex { field: String },
}
