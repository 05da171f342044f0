use cosmwasm_std::{
    entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdResult, Uint128,
};
use cw2::{get_contract_version, set_contract_version};
use lottery_common::types::RaffleState;

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::oracle::VrfCoordinator;
use crate::query;
use crate::state::{LotteryConfig, LotteryStateInfo, CONFIG, LOTTERY_STATE, PAYOUT_REPLY_ID};

const CONTRACT_NAME: &str = "crates.io:lottery-raffle";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    execute::validate_instantiate_msg(&msg)?;

    let config = LotteryConfig {
        admin: info.sender.clone(),
        vrf_coordinator: deps.api.addr_validate(&msg.vrf_coordinator)?,
        entrance_fee: msg.entrance_fee,
        denom: msg.denom,
        gas_lane: msg.gas_lane,
        subscription_id: msg.subscription_id,
        callback_gas_limit: msg.callback_gas_limit,
        interval: msg.interval,
    };
    CONFIG.save(deps.storage, &config)?;

    let state = LotteryStateInfo {
        state: RaffleState::Open,
        round: 1,
        num_players: 0,
        last_timestamp: env.block.time,
        pending_request: None,
        recent_winner: None,
        total_rounds_completed: 0,
        total_paid_out: Uint128::zero(),
    };
    LOTTERY_STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "lottery")
        .add_attribute("admin", info.sender.to_string())
        .add_attribute("vrf_coordinator", config.vrf_coordinator.to_string())
        .add_attribute("entrance_fee", config.entrance_fee.to_string())
        .add_attribute("interval", config.interval.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::EnterLottery {} => execute::enter_lottery(deps, env, info),
        ExecuteMsg::PerformUpkeep { perform_data: _ } => {
            let oracle = VrfCoordinator::load(deps.storage)?;
            execute::perform_upkeep(deps, env, info, &oracle)
        }
        ExecuteMsg::RawFulfillRandomWords {
            request_id,
            random_words,
        } => {
            let oracle = VrfCoordinator::load(deps.storage)?;
            execute::fulfill_random_words(deps, env, info, &oracle, request_id, random_words)
        }
    }
}

#[entry_point]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        PAYOUT_REPLY_ID => execute::payout_reply(deps, env, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::LotteryState {} => query::query_lottery_state(deps),
        QueryMsg::RaffleState {} => query::query_raffle_state(deps),
        QueryMsg::EntranceFee {} => query::query_entrance_fee(deps),
        QueryMsg::Interval {} => query::query_interval(deps),
        QueryMsg::Player { index } => query::query_player(deps, index),
        QueryMsg::Players { start_after, limit } => {
            query::query_players(deps, start_after, limit)
        }
        QueryMsg::NumberOfPlayers {} => query::query_number_of_players(deps),
        QueryMsg::RecentWinner {} => query::query_recent_winner(deps),
        QueryMsg::LastTimestamp {} => query::query_last_timestamp(deps),
        QueryMsg::NumWords {} => query::query_num_words(),
        QueryMsg::RequestConfirmations {} => query::query_request_confirmations(),
        QueryMsg::CallbackGasLimit {} => query::query_callback_gas_limit(deps),
        QueryMsg::PendingRequest {} => query::query_pending_request(deps),
        QueryMsg::CheckUpkeep { check_data } => query::query_check_upkeep(deps, env, check_data),
        QueryMsg::Round { round } => query::query_round(deps, round),
        QueryMsg::RoundHistory { start_after, limit } => {
            query::query_round_history(deps, start_after, limit)
        }
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "Cannot migrate from different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
