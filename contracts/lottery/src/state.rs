use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128, Uint256};
use cw_storage_plus::{Item, Map};
use lottery_common::types::RaffleState;

pub const CONFIG: Item<LotteryConfig> = Item::new("config");
pub const LOTTERY_STATE: Item<LotteryStateInfo> = Item::new("lottery_state");

/// Entrants keyed by (round, entry index). Advancing the round empties the
/// list without iterating it.
pub const PLAYERS: Map<(u64, u64), Addr> = Map::new("players");

/// Completed rounds keyed by round number.
pub const ROUNDS: Map<u64, RoundResult> = Map::new("rounds");

/// Payout in flight between fulfilment and the bank send reply.
pub const PENDING_PAYOUT: Item<PendingPayout> = Item::new("pending_payout");

pub const PAYOUT_REPLY_ID: u64 = 1;

#[cw_serde]
pub struct LotteryConfig {
    pub admin: Addr,
    /// Randomness coordinator; the only address allowed to fulfil requests
    pub vrf_coordinator: Addr,
    /// Minimum payment to enter
    pub entrance_fee: Uint128,
    pub denom: String,
    /// Key hash selecting the coordinator's gas lane, hex-encoded
    pub gas_lane: String,
    pub subscription_id: u64,
    pub callback_gas_limit: u32,
    /// Minimum seconds between rounds
    pub interval: u64,
}

#[cw_serde]
pub struct LotteryStateInfo {
    pub state: RaffleState,
    pub round: u64,
    /// Entrants in the current round
    pub num_players: u64,
    /// Round timer: set at instantiation and whenever a round resolves
    pub last_timestamp: Timestamp,
    /// Outstanding randomness request; `Some` exactly while calculating
    pub pending_request: Option<u64>,
    pub recent_winner: Option<Addr>,
    pub total_rounds_completed: u64,
    pub total_paid_out: Uint128,
}

#[cw_serde]
pub struct RoundResult {
    pub round: u64,
    pub winner: Addr,
    pub winner_index: u64,
    pub num_players: u64,
    pub prize: Uint128,
    pub request_id: u64,
    pub random_word: Uint256,
    pub completed_at: Timestamp,
}

#[cw_serde]
pub struct PendingPayout {
    pub round: u64,
    pub winner: Addr,
    pub amount: Uint128,
    pub num_players: u64,
}
