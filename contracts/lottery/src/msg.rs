use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128, Uint256};
use lottery_common::types::RaffleState;

use crate::state::{LotteryConfig, LotteryStateInfo, RoundResult};

#[cw_serde]
pub struct InstantiateMsg {
    pub vrf_coordinator: String,
    pub entrance_fee: Uint128,
    pub denom: String,
    /// Gas lane key hash, hex-encoded (32 bytes)
    pub gas_lane: String,
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    /// Minimum seconds between rounds
    pub interval: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Enter the current round. Send at least the entrance fee in info.funds.
    EnterLottery {},
    /// Close the round and request randomness. Anyone can call once
    /// `CheckUpkeep` reports upkeep is needed.
    PerformUpkeep { perform_data: Binary },
    /// Randomness callback. Coordinator only.
    RawFulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
}

#[cw_serde]
pub struct MigrateMsg {}

/// Execute message for the randomness coordinator.
#[cw_serde]
pub enum CoordinatorExecuteMsg {
    RequestRandomWords {
        key_hash: String,
        sub_id: u64,
        request_confirmations: u16,
        callback_gas_limit: u32,
        num_words: u32,
    },
}

/// Query message for the randomness coordinator.
#[cw_serde]
pub enum CoordinatorQueryMsg {
    NextRequestId {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(LotteryConfig)]
    Config {},
    #[returns(LotteryStateInfo)]
    LotteryState {},
    #[returns(RaffleState)]
    RaffleState {},
    #[returns(Uint128)]
    EntranceFee {},
    #[returns(u64)]
    Interval {},
    /// Entrant at `index` in the current round. Fails when out of range.
    #[returns(Addr)]
    Player { index: u64 },
    #[returns(PlayersResponse)]
    Players {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(u64)]
    NumberOfPlayers {},
    #[returns(Option<Addr>)]
    RecentWinner {},
    #[returns(Timestamp)]
    LastTimestamp {},
    #[returns(u32)]
    NumWords {},
    #[returns(u16)]
    RequestConfirmations {},
    #[returns(u32)]
    CallbackGasLimit {},
    #[returns(Option<u64>)]
    PendingRequest {},
    #[returns(CheckUpkeepResponse)]
    CheckUpkeep { check_data: Binary },
    #[returns(Option<RoundResult>)]
    Round { round: u64 },
    #[returns(RoundHistoryResponse)]
    RoundHistory {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct CheckUpkeepResponse {
    pub upkeep_needed: bool,
    pub perform_data: Binary,
}

#[cw_serde]
pub struct PlayerEntry {
    pub index: u64,
    pub address: Addr,
}

#[cw_serde]
pub struct PlayersResponse {
    pub round: u64,
    pub players: Vec<PlayerEntry>,
}

#[cw_serde]
pub struct RoundHistoryResponse {
    pub rounds: Vec<RoundResult>,
}
