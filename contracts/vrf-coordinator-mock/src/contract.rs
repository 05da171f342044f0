use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg, RequestRandomWordsParams};
use crate::query;
use crate::state::{CoordinatorConfig, CONFIG, NEXT_REQUEST_ID, NEXT_SUB_ID};

const CONTRACT_NAME: &str = "crates.io:lottery-vrf-coordinator-mock";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = CoordinatorConfig {
        base_fee: msg.base_fee,
        gas_price_link: msg.gas_price_link,
    };
    CONFIG.save(deps.storage, &config)?;
    NEXT_SUB_ID.save(deps.storage, &1u64)?;
    NEXT_REQUEST_ID.save(deps.storage, &1u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "vrf-coordinator-mock")
        .add_attribute("base_fee", msg.base_fee.to_string())
        .add_attribute("gas_price_link", msg.gas_price_link.to_string())
        .add_attribute("deployer", info.sender.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateSubscription {} => execute::create_subscription(deps, env, info),
        ExecuteMsg::FundSubscription { sub_id, amount } => {
            execute::fund_subscription(deps, env, info, sub_id, amount)
        }
        ExecuteMsg::AddConsumer { sub_id, consumer } => {
            execute::add_consumer(deps, env, info, sub_id, consumer)
        }
        ExecuteMsg::RemoveConsumer { sub_id, consumer } => {
            execute::remove_consumer(deps, env, info, sub_id, consumer)
        }
        ExecuteMsg::CancelSubscription { sub_id } => {
            execute::cancel_subscription(deps, env, info, sub_id)
        }
        ExecuteMsg::RequestRandomWords {
            key_hash,
            sub_id,
            request_confirmations,
            callback_gas_limit,
            num_words,
        } => execute::request_random_words(
            deps,
            env,
            info,
            RequestRandomWordsParams {
                key_hash,
                sub_id,
                request_confirmations,
                callback_gas_limit,
                num_words,
            },
        ),
        ExecuteMsg::FulfillRandomWords {
            request_id,
            consumer,
        } => execute::fulfill_random_words(deps, env, info, request_id, consumer, vec![]),
        ExecuteMsg::FulfillRandomWordsWithOverride {
            request_id,
            consumer,
            words,
        } => execute::fulfill_random_words(deps, env, info, request_id, consumer, words),
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::Subscription { sub_id } => query::query_subscription(deps, sub_id),
        QueryMsg::ConsumerIsAdded { sub_id, consumer } => {
            query::query_consumer_is_added(deps, sub_id, consumer)
        }
        QueryMsg::Request { request_id } => query::query_request(deps, request_id),
        QueryMsg::NextRequestId {} => query::query_next_request_id(deps),
    }
}
