use cosmwasm_std::{
    to_json_binary, Binary, Deps, Env, Order, StdError, StdResult, Uint128,
};
use cw_storage_plus::Bound;
use lottery_common::types::RaffleState;
use lottery_common::vrf::{NUM_WORDS, REQUEST_CONFIRMATIONS};

use crate::msg::{CheckUpkeepResponse, PlayerEntry, PlayersResponse, RoundHistoryResponse};
use crate::state::{CONFIG, LOTTERY_STATE, PLAYERS, ROUNDS};

/// Inputs of the upkeep decision, kept for diagnostics.
#[derive(Debug, PartialEq)]
pub struct UpkeepStatus {
    pub upkeep_needed: bool,
    pub balance: Uint128,
    pub num_players: u64,
    pub state: RaffleState,
}

/// Upkeep is needed when the lottery is open, the interval has elapsed, at
/// least one player entered and the contract holds funds.
pub fn check_upkeep(deps: Deps, env: &Env) -> StdResult<UpkeepStatus> {
    let config = CONFIG.load(deps.storage)?;
    let state = LOTTERY_STATE.load(deps.storage)?;
    let balance = deps
        .querier
        .query_balance(env.contract.address.to_string(), config.denom)?
        .amount;

    let is_open = state.state == RaffleState::Open;
    let elapsed = env
        .block
        .time
        .seconds()
        .saturating_sub(state.last_timestamp.seconds());
    let time_passed = elapsed >= config.interval;
    let has_players = state.num_players > 0;
    let has_balance = !balance.is_zero();

    Ok(UpkeepStatus {
        upkeep_needed: is_open && time_passed && has_players && has_balance,
        balance,
        num_players: state.num_players,
        state: state.state,
    })
}

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_lottery_state(deps: Deps) -> StdResult<Binary> {
    let state = LOTTERY_STATE.load(deps.storage)?;
    to_json_binary(&state)
}

pub fn query_raffle_state(deps: Deps) -> StdResult<Binary> {
    let state = LOTTERY_STATE.load(deps.storage)?;
    to_json_binary(&state.state)
}

pub fn query_entrance_fee(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config.entrance_fee)
}

pub fn query_interval(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config.interval)
}

pub fn query_player(deps: Deps, index: u64) -> StdResult<Binary> {
    let state = LOTTERY_STATE.load(deps.storage)?;
    if index >= state.num_players {
        return Err(StdError::generic_err(format!(
            "no player at index {index} (round {} has {} players)",
            state.round, state.num_players
        )));
    }
    let player = PLAYERS.load(deps.storage, (state.round, index))?;
    to_json_binary(&player)
}

pub fn query_players(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let state = LOTTERY_STATE.load(deps.storage)?;
    let limit = limit.unwrap_or(30).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let players: Vec<PlayerEntry> = PLAYERS
        .prefix(state.round)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .filter_map(|r| r.ok())
        .map(|(index, address)| PlayerEntry { index, address })
        .collect();

    to_json_binary(&PlayersResponse {
        round: state.round,
        players,
    })
}

pub fn query_number_of_players(deps: Deps) -> StdResult<Binary> {
    let state = LOTTERY_STATE.load(deps.storage)?;
    to_json_binary(&state.num_players)
}

pub fn query_recent_winner(deps: Deps) -> StdResult<Binary> {
    let state = LOTTERY_STATE.load(deps.storage)?;
    to_json_binary(&state.recent_winner)
}

pub fn query_last_timestamp(deps: Deps) -> StdResult<Binary> {
    let state = LOTTERY_STATE.load(deps.storage)?;
    to_json_binary(&state.last_timestamp)
}

pub fn query_num_words() -> StdResult<Binary> {
    to_json_binary(&NUM_WORDS)
}

pub fn query_request_confirmations() -> StdResult<Binary> {
    to_json_binary(&REQUEST_CONFIRMATIONS)
}

pub fn query_callback_gas_limit(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config.callback_gas_limit)
}

pub fn query_pending_request(deps: Deps) -> StdResult<Binary> {
    let state = LOTTERY_STATE.load(deps.storage)?;
    to_json_binary(&state.pending_request)
}

pub fn query_check_upkeep(deps: Deps, env: Env, _check_data: Binary) -> StdResult<Binary> {
    let status = check_upkeep(deps, &env)?;
    to_json_binary(&CheckUpkeepResponse {
        upkeep_needed: status.upkeep_needed,
        perform_data: Binary::default(),
    })
}

pub fn query_round(deps: Deps, round: u64) -> StdResult<Binary> {
    let result = ROUNDS.may_load(deps.storage, round)?;
    to_json_binary(&result)
}

pub fn query_round_history(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(20).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let rounds: Vec<_> = ROUNDS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .filter_map(|r| r.ok())
        .map(|(_, round)| round)
        .collect();

    to_json_binary(&RoundHistoryResponse { rounds })
}
