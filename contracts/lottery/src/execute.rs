use cosmwasm_std::{
    coins, BankMsg, DepsMut, Env, Event, MessageInfo, Reply, Response, StdError, SubMsg,
    SubMsgResult, Uint128, Uint256,
};
use lottery_common::types::RaffleState;
use lottery_common::vrf::{validate_key_hash, MAX_CALLBACK_GAS_LIMIT, NUM_WORDS, REQUEST_CONFIRMATIONS};

use crate::error::ContractError;
use crate::msg::InstantiateMsg;
use crate::oracle::{RandomnessOracle, RandomnessRequest};
use crate::query::check_upkeep;
use crate::state::{
    PendingPayout, RoundResult, CONFIG, LOTTERY_STATE, PAYOUT_REPLY_ID, PENDING_PAYOUT, PLAYERS,
    ROUNDS,
};

pub fn validate_instantiate_msg(msg: &InstantiateMsg) -> Result<(), ContractError> {
    if msg.entrance_fee.is_zero() {
        return Err(ContractError::InvalidConfig {
            field: "entrance_fee".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    if msg.denom.is_empty() {
        return Err(ContractError::InvalidConfig {
            field: "denom".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    if msg.interval == 0 {
        return Err(ContractError::InvalidConfig {
            field: "interval".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    if msg.callback_gas_limit == 0 || msg.callback_gas_limit > MAX_CALLBACK_GAS_LIMIT {
        return Err(ContractError::InvalidConfig {
            field: "callback_gas_limit".to_string(),
            reason: format!("must be between 1 and {MAX_CALLBACK_GAS_LIMIT}"),
        });
    }
    validate_key_hash(&msg.gas_lane).map_err(|_| ContractError::InvalidHex {
        field: "gas_lane".to_string(),
    })?;
    Ok(())
}

/// Enter the current round. The sender is appended to the entrant list once
/// per call; entering again adds another ticket.
pub fn enter_lottery(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if let Some(other) = info.funds.iter().find(|c| c.denom != config.denom) {
        return Err(ContractError::WrongDenom {
            denom: other.denom.clone(),
            expected: config.denom,
        });
    }

    let paid = info
        .funds
        .iter()
        .find(|c| c.denom == config.denom)
        .map(|c| c.amount)
        .unwrap_or(Uint128::zero());

    if paid < config.entrance_fee {
        return Err(ContractError::NotEnoughFunds {
            sent: paid,
            required: config.entrance_fee,
        });
    }

    let mut state = LOTTERY_STATE.load(deps.storage)?;
    if state.state != RaffleState::Open {
        return Err(ContractError::NotOpen { state: state.state });
    }

    let index = state.num_players;
    PLAYERS.save(deps.storage, (state.round, index), &info.sender)?;
    state.num_players += 1;
    LOTTERY_STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_attribute("action", "enter_lottery")
        .add_attribute("player", info.sender.to_string())
        .add_event(
            Event::new("lottery_enter")
                .add_attribute("player", info.sender.to_string())
                .add_attribute("round", state.round.to_string())
                .add_attribute("index", index.to_string())
                .add_attribute("amount", paid.to_string()),
        ))
}

/// Close the round and ask the oracle for randomness. Anyone can call.
pub fn perform_upkeep(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    oracle: &dyn RandomnessOracle,
) -> Result<Response, ContractError> {
    let status = check_upkeep(deps.as_ref(), &env)?;
    if !status.upkeep_needed {
        return Err(ContractError::UpkeepNotNeeded {
            balance: status.balance,
            num_players: status.num_players,
            state: status.state,
        });
    }

    let config = CONFIG.load(deps.storage)?;
    let request = RandomnessRequest {
        key_hash: config.gas_lane,
        subscription_id: config.subscription_id,
        request_confirmations: REQUEST_CONFIRMATIONS,
        callback_gas_limit: config.callback_gas_limit,
        num_words: NUM_WORDS,
    };
    let (request_id, request_msg) = oracle.request_randomness(&deps.querier, &request)?;

    let mut state = LOTTERY_STATE.load(deps.storage)?;
    state.state = RaffleState::Calculating;
    state.pending_request = Some(request_id);
    LOTTERY_STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_message(request_msg)
        .add_attribute("action", "perform_upkeep")
        .add_attribute("request_id", request_id.to_string())
        .add_event(
            Event::new("lottery_requested_randomness")
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("round", state.round.to_string())
                .add_attribute("num_players", state.num_players.to_string()),
        ))
}

/// Map a random word onto an entrant index in `[0, num_players)`.
pub fn select_winner_index(random_word: Uint256, num_players: u64) -> Result<u64, ContractError> {
    let remainder = random_word
        .checked_rem(Uint256::from(num_players))
        .map_err(StdError::from)?;
    let bytes = remainder.to_be_bytes();
    let mut low = [0u8; 8];
    low.copy_from_slice(&bytes[24..]);
    Ok(u64::from_be_bytes(low))
}

/// Resolve the pending round with the oracle's random words and pay the
/// winner the whole pot.
pub fn fulfill_random_words(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    oracle: &dyn RandomnessOracle,
    request_id: u64,
    random_words: Vec<Uint256>,
) -> Result<Response, ContractError> {
    if !oracle.is_fulfiller(&info.sender) {
        return Err(ContractError::UnauthorizedCaller {
            sender: info.sender.to_string(),
        });
    }

    let mut state = LOTTERY_STATE.load(deps.storage)?;
    if state.pending_request != Some(request_id) {
        return Err(ContractError::UnknownRequest { request_id });
    }

    let random_word = *random_words.first().ok_or(ContractError::NoRandomWords)?;

    let config = CONFIG.load(deps.storage)?;
    let round = state.round;
    let num_players = state.num_players;
    let winner_index = select_winner_index(random_word, num_players)?;
    let winner = PLAYERS.load(deps.storage, (round, winner_index))?;

    let prize = deps
        .querier
        .query_balance(env.contract.address.to_string(), config.denom.clone())?
        .amount;

    ROUNDS.save(
        deps.storage,
        round,
        &RoundResult {
            round,
            winner: winner.clone(),
            winner_index,
            num_players,
            prize,
            request_id,
            random_word,
            completed_at: env.block.time,
        },
    )?;

    state.state = RaffleState::Open;
    state.round += 1;
    state.num_players = 0;
    state.last_timestamp = env.block.time;
    state.pending_request = None;
    state.recent_winner = Some(winner.clone());
    state.total_rounds_completed += 1;
    state.total_paid_out += prize;
    LOTTERY_STATE.save(deps.storage, &state)?;

    PENDING_PAYOUT.save(
        deps.storage,
        &PendingPayout {
            round,
            winner: winner.clone(),
            amount: prize,
            num_players,
        },
    )?;

    let payout = SubMsg::reply_always(
        BankMsg::Send {
            to_address: winner.to_string(),
            amount: coins(prize.u128(), config.denom),
        },
        PAYOUT_REPLY_ID,
    );

    Ok(Response::new()
        .add_submessage(payout)
        .add_attribute("action", "fulfill_random_words")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("winner", winner.to_string())
        .add_event(
            Event::new("lottery_winner_picked")
                .add_attribute("winner", winner.to_string())
                .add_attribute("round", round.to_string())
                .add_attribute("winner_index", winner_index.to_string())
                .add_attribute("num_players", num_players.to_string())
                .add_attribute("prize", prize.to_string())
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("random_word", random_word.to_string()),
        ))
}

/// Settle the winner payout. A failed send is turned into an error, which
/// reverts the fulfilment along with it.
pub fn payout_reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    let payout = PENDING_PAYOUT.load(deps.storage)?;

    match msg.result {
        SubMsgResult::Ok(_) => {
            PENDING_PAYOUT.remove(deps.storage);
            Ok(Response::new()
                .add_attribute("action", "payout")
                .add_attribute("round", payout.round.to_string())
                .add_attribute("winner", payout.winner.to_string())
                .add_attribute("amount", payout.amount.to_string()))
        }
        SubMsgResult::Err(reason) => Err(ContractError::TransferFailed {
            winner: payout.winner.to_string(),
            amount: payout.amount,
            num_players: payout.num_players,
            state: RaffleState::Calculating,
            reason,
        }),
    }
}
