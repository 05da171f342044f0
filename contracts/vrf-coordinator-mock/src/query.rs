use cosmwasm_std::{to_json_binary, Binary, Deps, StdResult};

use crate::state::{CONFIG, NEXT_REQUEST_ID, REQUESTS, SUBSCRIPTIONS};

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_subscription(deps: Deps, sub_id: u64) -> StdResult<Binary> {
    let sub = SUBSCRIPTIONS.may_load(deps.storage, sub_id)?;
    to_json_binary(&sub)
}

pub fn query_consumer_is_added(deps: Deps, sub_id: u64, consumer: String) -> StdResult<Binary> {
    let consumer = deps.api.addr_validate(&consumer)?;
    let added = SUBSCRIPTIONS
        .may_load(deps.storage, sub_id)?
        .map(|sub| sub.consumers.contains(&consumer))
        .unwrap_or(false);
    to_json_binary(&added)
}

pub fn query_request(deps: Deps, request_id: u64) -> StdResult<Binary> {
    let request = REQUESTS.may_load(deps.storage, request_id)?;
    to_json_binary(&request)
}

pub fn query_next_request_id(deps: Deps) -> StdResult<Binary> {
    let next = NEXT_REQUEST_ID.may_load(deps.storage)?.unwrap_or(1);
    to_json_binary(&next)
}
