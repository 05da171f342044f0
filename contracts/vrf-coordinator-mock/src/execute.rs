use cosmwasm_std::{
    to_json_binary, Addr, DepsMut, Env, Event, MessageInfo, Response, StdError, Storage, Uint128,
    Uint256, WasmMsg,
};
use lottery_common::vrf::{validate_key_hash, MAX_CALLBACK_GAS_LIMIT};

use crate::error::ContractError;
use crate::msg::{
    ConsumerExecuteMsg, CreateSubscriptionResponse, RequestRandomWordsParams,
    RequestRandomWordsResponse,
};
use crate::state::{
    RandomWordsRequest, Subscription, CONFIG, MAX_CONSUMERS, MAX_NUM_WORDS, NEXT_REQUEST_ID,
    NEXT_SUB_ID, REQUESTS, SUBSCRIPTIONS,
};
use crate::words::derive_random_words;

fn load_owned_subscription(
    storage: &dyn Storage,
    sub_id: u64,
    sender: &Addr,
) -> Result<Subscription, ContractError> {
    let sub = SUBSCRIPTIONS
        .may_load(storage, sub_id)?
        .ok_or(ContractError::InvalidSubscription { sub_id })?;
    if &sub.owner != sender {
        return Err(ContractError::MustBeSubOwner { sub_id });
    }
    Ok(sub)
}

/// Open a subscription owned by the sender. Ids start at 1.
pub fn create_subscription(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let sub_id = NEXT_SUB_ID.load(deps.storage)?;
    NEXT_SUB_ID.save(deps.storage, &(sub_id + 1))?;

    let sub = Subscription {
        id: sub_id,
        owner: info.sender.clone(),
        balance: Uint128::zero(),
        consumers: vec![],
        req_count: 0,
    };
    SUBSCRIPTIONS.save(deps.storage, sub_id, &sub)?;

    Ok(Response::new()
        .set_data(to_json_binary(&CreateSubscriptionResponse { sub_id })?)
        .add_attribute("action", "create_subscription")
        .add_attribute("sub_id", sub_id.to_string())
        .add_event(
            Event::new("vrf_subscription_created")
                .add_attribute("sub_id", sub_id.to_string())
                .add_attribute("owner", info.sender.to_string()),
        ))
}

/// Credit a subscription. Bookkeeping only: the mock does not hold LINK.
pub fn fund_subscription(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    sub_id: u64,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let mut sub = SUBSCRIPTIONS
        .may_load(deps.storage, sub_id)?
        .ok_or(ContractError::InvalidSubscription { sub_id })?;

    let old_balance = sub.balance;
    sub.balance += amount;
    SUBSCRIPTIONS.save(deps.storage, sub_id, &sub)?;

    Ok(Response::new()
        .add_attribute("action", "fund_subscription")
        .add_attribute("sub_id", sub_id.to_string())
        .add_event(
            Event::new("vrf_subscription_funded")
                .add_attribute("sub_id", sub_id.to_string())
                .add_attribute("old_balance", old_balance.to_string())
                .add_attribute("new_balance", sub.balance.to_string()),
        ))
}

pub fn add_consumer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    sub_id: u64,
    consumer: String,
) -> Result<Response, ContractError> {
    let mut sub = load_owned_subscription(deps.storage, sub_id, &info.sender)?;
    let consumer = deps.api.addr_validate(&consumer)?;

    // Adding twice is a no-op
    if !sub.consumers.contains(&consumer) {
        if sub.consumers.len() >= MAX_CONSUMERS {
            return Err(ContractError::TooManyConsumers { sub_id });
        }
        sub.consumers.push(consumer.clone());
        SUBSCRIPTIONS.save(deps.storage, sub_id, &sub)?;
    }

    Ok(Response::new()
        .add_attribute("action", "add_consumer")
        .add_event(
            Event::new("vrf_consumer_added")
                .add_attribute("sub_id", sub_id.to_string())
                .add_attribute("consumer", consumer.to_string()),
        ))
}

pub fn remove_consumer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    sub_id: u64,
    consumer: String,
) -> Result<Response, ContractError> {
    let mut sub = load_owned_subscription(deps.storage, sub_id, &info.sender)?;
    let consumer = deps.api.addr_validate(&consumer)?;

    if !sub.consumers.contains(&consumer) {
        return Err(ContractError::InvalidConsumer {
            sub_id,
            consumer: consumer.to_string(),
        });
    }
    sub.consumers.retain(|c| c != &consumer);
    SUBSCRIPTIONS.save(deps.storage, sub_id, &sub)?;

    Ok(Response::new()
        .add_attribute("action", "remove_consumer")
        .add_event(
            Event::new("vrf_consumer_removed")
                .add_attribute("sub_id", sub_id.to_string())
                .add_attribute("consumer", consumer.to_string()),
        ))
}

pub fn cancel_subscription(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    sub_id: u64,
) -> Result<Response, ContractError> {
    let sub = load_owned_subscription(deps.storage, sub_id, &info.sender)?;
    SUBSCRIPTIONS.remove(deps.storage, sub_id);

    Ok(Response::new()
        .add_attribute("action", "cancel_subscription")
        .add_event(
            Event::new("vrf_subscription_canceled")
                .add_attribute("sub_id", sub_id.to_string())
                .add_attribute("refunded_balance", sub.balance.to_string()),
        ))
}

/// Record a randomness request from a registered consumer.
/// Request ids are sequential and start at 1.
pub fn request_random_words(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    params: RequestRandomWordsParams,
) -> Result<Response, ContractError> {
    let RequestRandomWordsParams {
        key_hash,
        sub_id,
        request_confirmations,
        callback_gas_limit,
        num_words,
    } = params;

    let mut sub = SUBSCRIPTIONS
        .may_load(deps.storage, sub_id)?
        .ok_or(ContractError::InvalidSubscription { sub_id })?;

    if !sub.consumers.contains(&info.sender) {
        return Err(ContractError::InvalidConsumer {
            sub_id,
            consumer: info.sender.to_string(),
        });
    }
    if num_words > MAX_NUM_WORDS {
        return Err(ContractError::NumWordsTooBig {
            have: num_words,
            max: MAX_NUM_WORDS,
        });
    }
    if callback_gas_limit > MAX_CALLBACK_GAS_LIMIT {
        return Err(ContractError::GasLimitTooBig {
            have: callback_gas_limit,
            max: MAX_CALLBACK_GAS_LIMIT,
        });
    }
    validate_key_hash(&key_hash).map_err(|_| ContractError::InvalidHex {
        field: "key_hash".to_string(),
    })?;

    let request_id = NEXT_REQUEST_ID.load(deps.storage)?;
    NEXT_REQUEST_ID.save(deps.storage, &(request_id + 1))?;

    let request = RandomWordsRequest {
        request_id,
        sub_id,
        consumer: info.sender.clone(),
        key_hash: key_hash.clone(),
        request_confirmations,
        callback_gas_limit,
        num_words,
        requested_at: env.block.time,
        block_height: env.block.height,
    };
    REQUESTS.save(deps.storage, request_id, &request)?;

    sub.req_count += 1;
    SUBSCRIPTIONS.save(deps.storage, sub_id, &sub)?;

    Ok(Response::new()
        .set_data(to_json_binary(&RequestRandomWordsResponse { request_id })?)
        .add_attribute("action", "request_random_words")
        .add_attribute("request_id", request_id.to_string())
        .add_event(
            Event::new("vrf_random_words_requested")
                .add_attribute("key_hash", key_hash)
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("sub_id", sub_id.to_string())
                .add_attribute("request_confirmations", request_confirmations.to_string())
                .add_attribute("callback_gas_limit", callback_gas_limit.to_string())
                .add_attribute("num_words", num_words.to_string())
                .add_attribute("sender", info.sender.to_string()),
        ))
}

/// Answer a pending request and call back into the consumer.
///
/// `words` overrides the derived words when non-empty. The callback is a
/// plain message, so a failing consumer reverts the whole fulfilment and the
/// request stays pending.
pub fn fulfill_random_words(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    request_id: u64,
    consumer: String,
    words: Vec<Uint256>,
) -> Result<Response, ContractError> {
    let request = REQUESTS
        .may_load(deps.storage, request_id)?
        .ok_or(ContractError::NonexistentRequest { request_id })?;

    let consumer = deps.api.addr_validate(&consumer)?;
    if consumer != request.consumer {
        return Err(ContractError::InvalidConsumer {
            sub_id: request.sub_id,
            consumer: consumer.to_string(),
        });
    }

    let words = if words.is_empty() {
        derive_random_words(request_id, request.num_words)
    } else {
        words
    };

    // Charge the subscription: base fee plus the reserved callback gas
    let config = CONFIG.load(deps.storage)?;
    let payment = config.base_fee
        + config
            .gas_price_link
            .checked_mul(Uint128::from(request.callback_gas_limit))
            .map_err(StdError::from)?;

    let mut sub = SUBSCRIPTIONS
        .may_load(deps.storage, request.sub_id)?
        .ok_or(ContractError::InvalidSubscription {
            sub_id: request.sub_id,
        })?;
    if sub.balance < payment {
        return Err(ContractError::InsufficientBalance {
            sub_id: request.sub_id,
            needed: payment,
            available: sub.balance,
        });
    }
    sub.balance -= payment;
    SUBSCRIPTIONS.save(deps.storage, request.sub_id, &sub)?;
    REQUESTS.remove(deps.storage, request_id);

    let callback = WasmMsg::Execute {
        contract_addr: consumer.to_string(),
        msg: to_json_binary(&ConsumerExecuteMsg::RawFulfillRandomWords {
            request_id,
            random_words: words.clone(),
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(callback)
        .add_attribute("action", "fulfill_random_words")
        .add_attribute("request_id", request_id.to_string())
        .add_event(
            Event::new("vrf_random_words_fulfilled")
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("consumer", consumer.to_string())
                .add_attribute("num_words", words.len().to_string())
                .add_attribute("payment", payment.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}
