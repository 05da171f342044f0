use cosmwasm_std::{StdError, Uint128};
use lottery_common::types::RaffleState;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("not enough funds to enter: sent {sent}, entrance fee is {required}")]
    NotEnoughFunds { sent: Uint128, required: Uint128 },

    #[error("must pay the entrance fee in {expected}, got {denom}")]
    WrongDenom { denom: String, expected: String },

    #[error("lottery is not open (state: {state})")]
    NotOpen { state: RaffleState },

    #[error("upkeep not needed: balance {balance}, players {num_players}, state {state}")]
    UpkeepNotNeeded {
        balance: Uint128,
        num_players: u64,
        state: RaffleState,
    },

    #[error("unauthorized caller {sender}: only the randomness coordinator can fulfil requests")]
    UnauthorizedCaller { sender: String },

    #[error("unknown randomness request {request_id}")]
    UnknownRequest { request_id: u64 },

    #[error("fulfilment carried no random words")]
    NoRandomWords,

    #[error("payout of {amount} to {winner} failed ({num_players} players, state {state}): {reason}")]
    TransferFailed {
        winner: String,
        amount: Uint128,
        num_players: u64,
        state: RaffleState,
        reason: String,
    },

    #[error("invalid config: {field} {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("invalid hex input: {field}")]
    InvalidHex { field: String },

    #[error("unknown reply id {id}")]
    UnknownReplyId { id: u64 },
}
